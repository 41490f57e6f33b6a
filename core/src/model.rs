use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;

/// Identifier of an explanation style. The set is closed; adding a style
/// means adding a variant here and a template in `engine::text`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Sequence)]
#[serde(rename_all = "lowercase")]
pub enum ModeId {
    Simple,
    Detailed,
    Eli5,
}

impl ModeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeId::Simple => "simple",
            ModeId::Detailed => "detailed",
            ModeId::Eli5 => "eli5",
        }
    }
}

/// Descriptive metadata for one explanation mode, as shown in the picker.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Mode {
    pub id: ModeId,
    pub name: &'static str,
    pub description: &'static str,
}

/// What kind of thing the user pasted. Derived from the raw input by
/// `classifier::classify`; never validated beyond a prefix check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Url,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// One explanation attempt, the only mutable record in the pipeline.
///
/// Invariant: `result` is present iff `status` is `Succeeded`, and `error`
/// is present iff `status` is `Failed`. The `input_type` field is the
/// user's toggle; the effective type is re-derived from `raw_input` at
/// submission time.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Request {
    pub raw_input: String,
    pub input_type: InputType,
    pub selected_mode: ModeId,
    pub status: RequestStatus,
    pub result: Option<String>,
    pub error: Option<ErrorKind>,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            raw_input: String::new(),
            input_type: InputType::Text,
            selected_mode: ModeId::Simple,
            status: RequestStatus::Idle,
            result: None,
            error: None,
        }
    }
}
