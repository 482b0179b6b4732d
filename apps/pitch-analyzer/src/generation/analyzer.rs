//! `PitchAnalyzer`: the public entry point. Owns one generation backend and
//! exposes the three pipeline operations plus a raw pass-through.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::config::Config;
use crate::generation::{deck, memo, transcript};
use crate::llm_client::{GeminiClient, LlmError, TextGenerator};
use crate::models::{DealData, MemoOutcome, PitchDeckSummary};

/// Cheap to clone; clones share the underlying client.
#[derive(Clone)]
pub struct PitchAnalyzer {
    llm: Arc<dyn TextGenerator>,
}

impl PitchAnalyzer {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }

    /// Builds an analyzer backed by the Gemini REST API.
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let client = GeminiClient::from_config(config)?;
        info!("Pitch analyzer using Gemini model {}", client.model());
        Ok(Self::new(Arc::new(client)))
    }

    pub async fn summarize_pitch_deck(&self, full_text: &str) -> PitchDeckSummary {
        deck::summarize_pitch_deck(self.llm.as_ref(), full_text).await
    }

    pub async fn summarize_audio_transcript(&self, transcript: &str) -> String {
        transcript::summarize_audio_transcript(self.llm.as_ref(), transcript).await
    }

    pub async fn generate_memo(&self, deal: &DealData, weightage: &Value) -> MemoOutcome {
        memo::generate_memo(self.llm.as_ref(), deal, weightage).await
    }

    /// Sends `prompt` as-is. Unlike the pipeline operations, errors propagate.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        self.llm.generate(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedGenerator;
    use crate::models::DeckSummary;
    use serde_json::json;

    fn scripted(replies: &[&str]) -> (PitchAnalyzer, Arc<ScriptedGenerator>) {
        let llm = Arc::new(ScriptedGenerator::replying(replies));
        (PitchAnalyzer::new(llm.clone()), llm)
    }

    #[tokio::test]
    async fn test_operations_share_one_backend() {
        let (analyzer, llm) = scripted(&[
            "summary",
            "[\"Alice\"]",
            "Fintech",
            "Acme",
            "- bullet",
            "{\"conclusion\": {}}",
        ]);

        let deck = analyzer.summarize_pitch_deck("deck text").await;
        assert_eq!(
            deck,
            PitchDeckSummary::Extracted(DeckSummary {
                summary_res: "summary".to_string(),
                founder_response: vec!["Alice".to_string()],
                sector_response: "Fintech".to_string(),
                company_name_response: "Acme".to_string(),
            })
        );
        assert_eq!(
            analyzer.summarize_audio_transcript("transcript").await,
            "- bullet"
        );
        let memo = analyzer
            .generate_memo(&DealData::default(), &json!({}))
            .await;
        assert!(memo.is_document());
        assert_eq!(llm.prompts().len(), 6);
    }

    #[tokio::test]
    async fn test_generate_text_is_verbatim_pass_through() {
        let (analyzer, llm) = scripted(&["pong"]);
        assert_eq!(analyzer.generate_text("ping {context}").await.unwrap(), "pong");
        assert_eq!(llm.prompts(), vec!["ping {context}".to_string()]);
    }

    #[tokio::test]
    async fn test_generate_text_propagates_errors() {
        let (analyzer, _) = scripted(&[]);
        let err = analyzer.generate_text("ping").await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 429, .. }));
    }

    #[test]
    fn test_from_config_builds_gemini_backend() {
        let config = Config {
            gemini_api_key: "test-key".to_string(),
            gemini_model: "gemini-2.5-flash".to_string(),
            gemini_api_url: "http://localhost:9".to_string(),
            llm_timeout_secs: 5,
            rust_log: "info".to_string(),
        };
        assert!(PitchAnalyzer::from_config(&config).is_ok());
    }
}
