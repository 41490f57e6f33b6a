use serde::{Deserialize, Serialize};
use simplr_core::model::{InputType, ModeId};

#[derive(Debug, Serialize, Deserialize)]
pub struct SetInputRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetInputTypeRequest {
    pub input_type: InputType,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetModeRequest {
    pub mode: ModeId,
}
