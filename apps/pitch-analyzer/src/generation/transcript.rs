//! Transcript summarization: one round trip, bullet-point text out.

use tracing::{error, info_span, Instrument};
use uuid::Uuid;

use crate::generation::execute;
use crate::generation::tasks::ExtractionTask;
use crate::llm_client::TextGenerator;

pub const TRANSCRIPT_ERROR_SENTINEL: &str = "Error processing audio transcript";

/// Summarizes an audio or video pitch transcript. Never fails; on error the
/// sentinel string is returned instead.
pub async fn summarize_audio_transcript(llm: &dyn TextGenerator, transcript: &str) -> String {
    let span = info_span!("summarize_audio_transcript", run_id = %Uuid::new_v4());
    async move {
        match execute(
            llm,
            ExtractionTask::TranscriptSummary,
            &[("transcript", transcript)],
        )
        .await
        {
            Ok(summary) => summary,
            Err(e) => {
                error!(task = %e.task(), error = %e, "Audio summarization failed");
                TRANSCRIPT_ERROR_SENTINEL.to_string()
            }
        }
    }
    .instrument(span)
    .await
}
