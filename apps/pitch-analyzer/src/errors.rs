use thiserror::Error;

use crate::generation::tasks::ExtractionTask;
use crate::llm_client::LlmError;

/// Pipeline-level error type.
///
/// Never crosses the public inbound operations: the orchestrators log it and
/// collapse it into the fixed sentinel record for the operation. The variants
/// keep the three failure kinds apart for logging and tests.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The generation capability itself failed (network, auth, quota).
    #[error("{task} generation failed: {source}")]
    Generation {
        task: ExtractionTask,
        #[source]
        source: LlmError,
    },

    /// The model answered, but not in the shape the task asked for.
    #[error("{task} response was not valid JSON: {source}")]
    Format {
        task: ExtractionTask,
        #[source]
        source: serde_json::Error,
    },

    /// A later step of a multi-step flow failed after `completed` steps had
    /// already succeeded. Their results are discarded.
    #[error("{task} failed after {completed} completed step(s): {source}")]
    Partial {
        task: ExtractionTask,
        completed: usize,
        #[source]
        source: Box<ExtractionError>,
    },
}

impl ExtractionError {
    pub fn generation(task: ExtractionTask, source: LlmError) -> Self {
        ExtractionError::Generation { task, source }
    }

    /// The task that failed, looking through `Partial` wrappers.
    pub fn task(&self) -> ExtractionTask {
        match self {
            ExtractionError::Generation { task, .. }
            | ExtractionError::Format { task, .. }
            | ExtractionError::Partial { task, .. } => *task,
        }
    }

    /// Wraps `self` as a partial failure when earlier steps already succeeded.
    pub fn after_steps(self, completed: usize) -> Self {
        if completed == 0 {
            return self;
        }
        ExtractionError::Partial {
            task: self.task(),
            completed,
            source: Box::new(self),
        }
    }
}
