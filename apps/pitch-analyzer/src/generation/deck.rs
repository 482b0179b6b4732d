//! Pitch deck summarization: four independent prompts over the same deck text.
//!
//! Flow: structured summary → founder list → sector → company name → assemble.
//!
//! CRITICAL: if any step fails the whole record is replaced by the fixed
//! error record. Partial results are discarded, never mixed with sentinels.

use serde_json::Value;
use tracing::{debug, error, info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::ExtractionError;
use crate::generation::coercion::{coerce_string_list, ParsedValue};
use crate::generation::execute;
use crate::generation::tasks::ExtractionTask;
use crate::llm_client::{strip_code_fence, TextGenerator};
use crate::models::{DeckSummary, PitchDeckSummary};

/// Summarizes a deck. Always returns a record; failures yield
/// `PitchDeckSummary::error_record()`.
pub async fn summarize_pitch_deck(llm: &dyn TextGenerator, full_text: &str) -> PitchDeckSummary {
    let span = info_span!("summarize_pitch_deck", run_id = %Uuid::new_v4());
    async move {
        match extract_deck(llm, full_text).await {
            Ok(summary) => {
                info!(
                    "Deck summarized: company={:?}, sector={:?}, founders={}",
                    summary.company_name_response,
                    summary.sector_response,
                    summary.founder_response.len()
                );
                summary.into()
            }
            Err(e) => {
                error!(task = %e.task(), error = %e, "Pitch deck summarization failed");
                PitchDeckSummary::error_record()
            }
        }
    }
    .instrument(span)
    .await
}

async fn extract_deck(
    llm: &dyn TextGenerator,
    full_text: &str,
) -> Result<DeckSummary, ExtractionError> {
    let mut completed = 0;
    let mut step = |task: ExtractionTask| {
        let done = completed;
        completed += 1;
        async move {
            execute(llm, task, &[("full_text", full_text)])
                .await
                .map_err(|e| e.after_steps(done))
        }
    };

    // Step 1: free-form summary, stored verbatim
    let summary_res = step(ExtractionTask::DeckSummary).await?;

    // Step 2: founders, JSON first with line-based fallback
    let founder_response = parse_founders(&step(ExtractionTask::Founders).await?);

    // Steps 3-4: bare values, already fence-stripped and trimmed by `execute`
    let sector_response = step(ExtractionTask::Sector).await?;
    let company_name_response = step(ExtractionTask::CompanyName).await?;

    Ok(DeckSummary {
        summary_res,
        founder_response,
        sector_response,
        company_name_response,
    })
}

/// Founder names from the founder-list reply, whatever shape it came in.
pub fn parse_founders(raw: &str) -> Vec<String> {
    let cleaned = strip_code_fence(raw);
    if cleaned.trim().is_empty() {
        return Vec::new();
    }

    let parsed = match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => ParsedValue::Structured(value),
        Err(source) => {
            let e = ExtractionError::Format {
                task: ExtractionTask::Founders,
                source,
            };
            debug!(error = %e, "Falling back to line-based founder parsing");
            ParsedValue::RawText(cleaned)
        }
    };

    coerce_string_list(parsed)
}
