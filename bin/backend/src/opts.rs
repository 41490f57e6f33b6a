use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use simplr_core::{ExplanationEngine, RemoteEngine, TemplateEngine};

#[derive(Debug, Clone, Parser)]
pub struct HttpOpts {
    /// Address/port for the HTTP listener
    #[arg(long, env = "SIMPLR_HOST", default_value = "0.0.0.0:3030")]
    pub host: String,

    #[arg(
        long,
        value_delimiter = ';',
        default_value = "http://localhost:8080;http://127.0.0.1:8080;http://localhost:3000;http://127.0.0.1:3000",
        env = "SIMPLR_CORS_ORIGINS"
    )]
    pub origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct EngineOpts {
    /// Simulated generation latency of the built-in template engine, in ms
    #[arg(long, default_value = "2000", env = "SIMPLR_ENGINE_DELAY_MS")]
    pub engine_delay_ms: u64,

    /// OpenAI-compatible API key; when set, explanations come from the
    /// remote completions API instead of the built-in templates
    #[arg(long, env = "OPENAI_API_KEY")]
    pub openai_api_key: Option<String>,

    /// Model name passed to the completions API
    #[arg(long, default_value = "gpt-4o-mini", env = "SIMPLR_OPENAI_MODEL")]
    pub openai_model: String,
}

impl EngineOpts {
    pub fn build_engine(&self) -> Arc<dyn ExplanationEngine> {
        match &self.openai_api_key {
            Some(key) => {
                tracing::info!(model = %self.openai_model, "using remote completions engine");
                Arc::new(RemoteEngine::new(key, &self.openai_model))
            }
            None => {
                tracing::info!(
                    delay_ms = self.engine_delay_ms,
                    "using built-in template engine"
                );
                Arc::new(TemplateEngine::with_delay(Duration::from_millis(
                    self.engine_delay_ms,
                )))
            }
        }
    }
}
