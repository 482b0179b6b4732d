//! Investment memo generation.
//!
//! Flow: build context → render memo prompt (schema + weightage + context) →
//! one LLM call → strip fence → parse JSON.
//!
//! Degradation: invalid JSON becomes `{"raw_text": ...}`; any other failure
//! becomes `{"error": "Error generating memo"}`. Nothing propagates.

use serde_json::{json, Value};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::context::assembler::{build_context, raw_text};
use crate::errors::ExtractionError;
use crate::generation::execute;
use crate::generation::prompts::MEMO_SCHEMA;
use crate::generation::tasks::ExtractionTask;
use crate::llm_client::{strip_code_fence, TextGenerator};
use crate::models::{DealData, MemoOutcome};

/// Generates the memo for a deal. `weightage` is embedded in the prompt in
/// its raw textual form.
pub async fn generate_memo(
    llm: &dyn TextGenerator,
    deal: &DealData,
    weightage: &Value,
) -> MemoOutcome {
    let span = info_span!("generate_memo", run_id = %Uuid::new_v4());
    async move {
        match try_generate_memo(llm, deal, weightage).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(task = %e.task(), error = %e, "Memo generation failed");
                MemoOutcome::error()
            }
        }
    }
    .instrument(span)
    .await
}

async fn try_generate_memo(
    llm: &dyn TextGenerator,
    deal: &DealData,
    weightage: &Value,
) -> Result<MemoOutcome, ExtractionError> {
    let context = build_context(
        &deal.metadata,
        &deal.extracted_text,
        &deal.public_data,
        &deal.user_input,
    );
    info!("Memo context assembled: {} chars", context.len());

    let weightage = raw_text(weightage);
    let raw_response = execute(
        llm,
        ExtractionTask::Memo,
        &[
            ("schema", MEMO_SCHEMA),
            ("weightage", &weightage),
            ("context", &context),
        ],
    )
    .await?;

    Ok(parse_memo(&raw_response))
}

/// Parses a memo reply. An empty reply yields an empty object.
pub fn parse_memo(raw_response: &str) -> MemoOutcome {
    let clean = strip_code_fence(raw_response).trim().to_string();
    if clean.is_empty() {
        return MemoOutcome::Document(json!({}));
    }

    match serde_json::from_str::<Value>(&clean) {
        Ok(document) => MemoOutcome::Document(document),
        Err(source) => {
            let e = ExtractionError::Format {
                task: ExtractionTask::Memo,
                source,
            };
            warn!(error = %e, "Gemini memo response was not valid JSON; returning raw payload under 'raw_text'");
            MemoOutcome::raw_text(clean)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedGenerator;

    fn deal() -> DealData {
        serde_json::from_value(json!({
            "metadata": {"company_name": "Acme", "founder_names": ["Alice"], "sector": "Fintech"},
            "user_input": {"qna": {"Runway?": "18 months"}}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_fenced_json_is_parsed() {
        let llm = ScriptedGenerator::replying(&[
            "```json\n{\"conclusion\":{\"overall_attractiveness\":\"Strong\"}}\n```",
        ]);
        let outcome = generate_memo(&llm, &deal(), &json!({})).await;
        assert_eq!(
            outcome.into_json(),
            json!({"conclusion": {"overall_attractiveness": "Strong"}})
        );
    }

    #[tokio::test]
    async fn test_non_json_becomes_raw_text() {
        let llm = ScriptedGenerator::replying(&["Sorry, I cannot comply."]);
        let outcome = generate_memo(&llm, &deal(), &json!({})).await;
        assert_eq!(
            outcome.into_json(),
            json!({"raw_text": "Sorry, I cannot comply."})
        );
    }

    #[tokio::test]
    async fn test_generation_failure_becomes_error_record() {
        let llm = ScriptedGenerator::failing();
        let outcome = generate_memo(&llm, &deal(), &json!({})).await;
        assert_eq!(outcome.into_json(), json!({"error": "Error generating memo"}));
    }

    #[tokio::test]
    async fn test_prompt_embeds_schema_weightage_and_context() {
        let llm = ScriptedGenerator::replying(&["{}"]);
        generate_memo(&llm, &deal(), &json!({"team": 50, "market": 50})).await;

        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 1);
        let prompt = &prompts[0];
        assert!(prompt.contains(MEMO_SCHEMA));
        assert!(prompt.contains("Weighting preferences:\n{\"team\":50,\"market\":50}"));
        assert!(prompt.contains("Company: Acme\nFounders: Alice\nSector: Fintech"));
        assert!(prompt.contains("Q: Runway?\nA: 18 months"));
        assert!(prompt.contains("Monte Carlo"));
        assert!(!prompt.contains("{context}"));
        assert!(!prompt.contains("{weightage}"));
        assert!(!prompt.contains("{schema}"));
    }

    #[tokio::test]
    async fn test_context_with_braces_is_not_substituted() {
        let deal: DealData = serde_json::from_value(json!({
            "public_data": {"note": "literal {weightage} and {schema}"}
        }))
        .unwrap();
        let llm = ScriptedGenerator::replying(&["{}"]);
        generate_memo(&llm, &deal, &json!("balanced")).await;
        assert!(llm.prompts()[0].contains("Note: literal {weightage} and {schema}"));
    }

    #[tokio::test]
    async fn test_weightage_with_braces_is_embedded_verbatim() {
        let llm = ScriptedGenerator::replying(&["{}"]);
        generate_memo(&llm, &deal(), &json!("weight {context} heavily")).await;

        let prompt = &llm.prompts()[0];
        assert!(prompt.contains("Weighting preferences:\nweight {context} heavily\n"));
        assert_eq!(prompt.matches("Company: Acme").count(), 1);
    }

    #[test]
    fn test_parse_memo_empty_reply_is_empty_object() {
        assert_eq!(parse_memo("   ").into_json(), json!({}));
        assert_eq!(parse_memo("```json\n```").into_json(), json!({}));
    }

    #[test]
    fn test_parse_memo_unfenced_json() {
        let outcome = parse_memo("{\"risk_metrics\": {\"composite_risk_score\": 38}}");
        assert!(outcome.is_document());
        assert_eq!(
            outcome.typed().unwrap().risk_metrics.composite_risk_score,
            Some(38.0)
        );
    }

    #[test]
    fn test_parse_memo_truncated_json_keeps_cleaned_text() {
        let outcome = parse_memo("```json\n{\"company_overview\": {\n```");
        assert_eq!(
            outcome,
            MemoOutcome::raw_text("{\"company_overview\": {")
        );
    }
}
