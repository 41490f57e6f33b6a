use std::time::Duration;

use futures::future::BoxFuture;
use tracing::debug;

use super::{ExplanationEngine, text};
use crate::error::EngineError;
use crate::model::{InputType, ModeId};

/// Latency of the reference engine, mimicking a real summarization call.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Deterministic engine producing canned explanations.
///
/// This is the reference behavior: fixed text per mode, fixed delay, no
/// failures. A network-backed engine swaps in behind the same trait.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    delay: Duration,
}

impl TemplateEngine {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplanationEngine for TemplateEngine {
    fn explain<'a>(
        &'a self,
        _raw_input: &'a str,
        input_type: InputType,
        mode: ModeId,
    ) -> BoxFuture<'a, Result<String, EngineError>> {
        Box::pin(async move {
            tokio::time::sleep(self.delay).await;
            debug!(mode = mode.as_str(), ?input_type, "rendering canned explanation");
            Ok(text::render(mode, input_type))
        })
    }
}
