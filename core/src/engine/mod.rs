pub mod remote;
pub mod template;
mod text;

pub use remote::RemoteEngine;
pub use template::TemplateEngine;

use futures::future::BoxFuture;

use crate::error::EngineError;
use crate::model::{InputType, ModeId};

/// The only service-shaped boundary in the pipeline.
///
/// Implementations take the classified input and the selected mode and
/// produce explanation text, possibly after suspending on I/O. They must
/// have no side effects beyond the returned string, and callers treat any
/// failure as recoverable by a fresh submission.
pub trait ExplanationEngine: Send + Sync {
    fn explain<'a>(
        &'a self,
        raw_input: &'a str,
        input_type: InputType,
        mode: ModeId,
    ) -> BoxFuture<'a, Result<String, EngineError>>;
}
