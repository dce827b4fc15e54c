use folio_core::narrative::{build_prompt, parse_narrative, PREAMBLE};
use folio_core::profile::PortfolioDraft;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::gemini;

use crate::prelude::*;

/// Sampling temperature for portfolio narratives.
pub const TEMPERATURE: f64 = 0.5;

/// Turns a draft into the final portfolio document.
pub trait NarrativeGenerator {
    async fn generate(&self, draft: &PortfolioDraft) -> Result<serde_json::Value>;
}

/// Narrative generation through the Gemini API.
pub struct GeminiGenerator {
    client: gemini::Client,
    model: String,
}

impl GeminiGenerator {
    pub fn new(api_key: &str, model: impl Into<String>) -> Result<Self> {
        let client = gemini::Client::builder()
            .api_key(api_key)
            .build()
            .map_err(|e| eyre!("Failed to create Gemini client: {}", e))?;

        Ok(Self {
            client,
            model: model.into(),
        })
    }
}

impl NarrativeGenerator for GeminiGenerator {
    async fn generate(&self, draft: &PortfolioDraft) -> Result<serde_json::Value> {
        let prompt = build_prompt(draft);
        log::debug!(
            "Prompting {} with {} chars (temperature {})",
            self.model,
            prompt.len(),
            TEMPERATURE
        );

        let agent = self
            .client
            .agent(&self.model)
            .preamble(PREAMBLE)
            .temperature(TEMPERATURE)
            .build();

        let response = agent
            .prompt(&prompt)
            .await
            .map_err(|e| Error::Generation(e.to_string()))?;

        parse_narrative(&response).map_err(|e| Error::Generation(e.to_string()).into())
    }
}
