use serde::{Deserialize, Serialize};

/// Sentinel written into every narrative field of a failed deck summary.
pub const DECK_ERROR_SENTINEL: &str = "Error in processing";

/// Result of a successful deck summarization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckSummary {
    /// Raw model text for the problem/solution/market/team/traction/financials prompt.
    pub summary_res: String,
    pub founder_response: Vec<String>,
    pub sector_response: String,
    pub company_name_response: String,
}

/// The fixed record substituted when any step of deck summarization fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedDeckSummary {
    pub problem: String,
    pub solution: String,
    pub market: String,
    pub team: String,
    pub traction: String,
    pub financials: String,
    pub founder_response: Vec<String>,
    pub sector_response: String,
    pub company_name_response: String,
    pub summary_res: String,
}

impl Default for FailedDeckSummary {
    fn default() -> Self {
        let sentinel = || DECK_ERROR_SENTINEL.to_string();
        Self {
            problem: sentinel(),
            solution: sentinel(),
            market: sentinel(),
            team: sentinel(),
            traction: sentinel(),
            financials: sentinel(),
            founder_response: Vec::new(),
            sector_response: String::new(),
            company_name_response: String::new(),
            summary_res: String::new(),
        }
    }
}

/// Either the four extracted results, or the fixed error record. Never a mix.
///
/// Serializes without a tag, so callers persist the same flat JSON object
/// shape the record has always had.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PitchDeckSummary {
    Failed(FailedDeckSummary),
    Extracted(DeckSummary),
}

impl PitchDeckSummary {
    pub fn error_record() -> Self {
        PitchDeckSummary::Failed(FailedDeckSummary::default())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PitchDeckSummary::Failed(_))
    }

    pub fn founders(&self) -> &[String] {
        match self {
            PitchDeckSummary::Extracted(s) => &s.founder_response,
            PitchDeckSummary::Failed(f) => &f.founder_response,
        }
    }
}

impl From<DeckSummary> for PitchDeckSummary {
    fn from(summary: DeckSummary) -> Self {
        PitchDeckSummary::Extracted(summary)
    }
}
