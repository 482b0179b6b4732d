// Extraction pipeline: prompt rendering, deck/transcript/memo orchestrators.
// All LLM calls go through llm_client::TextGenerator; no direct Gemini calls here.

pub mod analyzer;
pub mod coercion;
pub mod deck;
pub mod memo;
pub mod prompts;
pub mod tasks;
pub mod transcript;

use tracing::debug;

use crate::errors::ExtractionError;
use crate::generation::tasks::ExtractionTask;
use crate::llm_client::TextGenerator;

pub use analyzer::PitchAnalyzer;

/// Renders the task's prompt, makes exactly one generation call and cleans
/// the reply according to the task's output shape.
pub(crate) async fn execute(
    llm: &dyn TextGenerator,
    task: ExtractionTask,
    substitutions: &[(&str, &str)],
) -> Result<String, ExtractionError> {
    let prompt = task.render(substitutions);
    debug!(%task, shape = ?task.shape(), prompt_chars = prompt.len(), "Sending prompt");

    let text = llm
        .generate(&prompt)
        .await
        .map_err(|e| ExtractionError::generation(task, e))?;

    debug!(%task, response_chars = text.len(), "Received response");
    Ok(task.shape().clean(&text))
}
