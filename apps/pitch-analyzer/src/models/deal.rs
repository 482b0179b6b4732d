use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Company metadata captured when a deal is created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub founder_names: Vec<String>,
    #[serde(default)]
    pub sector: Option<String>,
}

/// Everything known about a deal, as handed to memo generation.
///
/// `extracted_text`, `public_data` and `user_input` are free-form and keep
/// their key order; the context assembler iterates them in that order.
/// Absent sections deserialize as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DealData {
    #[serde(default)]
    pub metadata: Metadata,
    /// Per-source extraction results: `pitch_deck`, `voice_pitch`, `video_pitch`.
    #[serde(default)]
    pub extracted_text: Map<String, Value>,
    #[serde(default)]
    pub public_data: Map<String, Value>,
    /// Founder Q&A (`qna`) and evaluation weightages (`weightages`).
    #[serde(default)]
    pub user_input: Map<String, Value>,
}
