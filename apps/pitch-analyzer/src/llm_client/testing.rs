//! Scripted `TextGenerator` for orchestrator tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

/// Replays canned replies in order and records every prompt it receives.
/// Once the script runs out, every further call fails like an exhausted quota.
pub(crate) struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub(crate) fn new(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn replying(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    pub(crate) fn failing() -> Self {
        Self::new(Vec::new())
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

pub(crate) fn quota_error() -> LlmError {
    LlmError::Api {
        status: 429,
        message: "Resource has been exhausted".to_string(),
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(quota_error()))
    }
}
