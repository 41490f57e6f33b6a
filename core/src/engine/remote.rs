use std::time::Duration;

use futures::future::BoxFuture;
use serde_json::{Value, json};
use tracing::debug;

use super::ExplanationEngine;
use crate::error::EngineError;
use crate::model::{InputType, ModeId};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_DEADLINE: Duration = Duration::from_secs(30);

/// Explanation engine backed by an OpenAI-compatible completions API.
///
/// The submitted input is passed through as the subject of the prompt; URLs
/// are described, never fetched. Transport and API failures surface as
/// `Upstream`, deadline overruns as `Timeout`, both recoverable by a fresh
/// submission.
pub struct RemoteEngine {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl RemoteEngine {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn system_prompt(mode: ModeId) -> &'static str {
        match mode {
            ModeId::Simple => {
                "You explain things in one short, plain-language paragraph, \
                 ending with a one-line takeaway."
            }
            ModeId::Detailed => {
                "You explain things thoroughly but clearly. Structure the \
                 answer with an Overview section, a Key Points list of at \
                 least three items, and a closing analogy."
            }
            ModeId::Eli5 => {
                "You explain things to a five year old, using a concrete \
                 physical analogy and short, friendly sentences."
            }
        }
    }

    fn user_prompt(raw_input: &str, input_type: InputType) -> String {
        match input_type {
            InputType::Url => format!("Explain what the webpage at {raw_input} is about."),
            InputType::Text => format!("Explain the following: {raw_input}"),
        }
    }

    async fn complete(
        &self,
        raw_input: &str,
        input_type: InputType,
        mode: ModeId,
    ) -> Result<String, EngineError> {
        let payload = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": Self::system_prompt(mode) },
                { "role": "user", "content": Self::user_prompt(raw_input, input_type) },
            ],
        });

        debug!(mode = mode.as_str(), model = %self.model, "calling completions API");

        let response = self
            .client
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| EngineError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(EngineError::Upstream(format!(
                "completions API returned {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| EngineError::Upstream(e.to_string()))?;

        body["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| EngineError::Upstream("completions response had no content".to_string()))
    }
}

impl ExplanationEngine for RemoteEngine {
    fn explain<'a>(
        &'a self,
        raw_input: &'a str,
        input_type: InputType,
        mode: ModeId,
    ) -> BoxFuture<'a, Result<String, EngineError>> {
        Box::pin(async move {
            match tokio::time::timeout(
                REQUEST_DEADLINE,
                self.complete(raw_input, input_type, mode),
            )
            .await
            {
                Ok(result) => result,
                Err(_) => Err(EngineError::Timeout),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_branches_on_input_type() {
        let url = RemoteEngine::user_prompt("https://example.com", InputType::Url);
        assert!(url.contains("webpage at https://example.com"));

        let text = RemoteEngine::user_prompt("gravity", InputType::Text);
        assert!(text.contains("Explain the following: gravity"));
    }

    #[test]
    fn test_each_mode_has_a_distinct_system_prompt() {
        let simple = RemoteEngine::system_prompt(ModeId::Simple);
        let detailed = RemoteEngine::system_prompt(ModeId::Detailed);
        let eli5 = RemoteEngine::system_prompt(ModeId::Eli5);
        assert_ne!(simple, detailed);
        assert_ne!(detailed, eli5);
        assert!(detailed.contains("Key Points"));
    }
}
