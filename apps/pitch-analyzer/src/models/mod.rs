pub mod deal;
pub mod memo;
pub mod summary;

pub use deal::{DealData, Metadata};
pub use memo::{MemoDocument, MemoOutcome};
pub use summary::{DeckSummary, FailedDeckSummary, PitchDeckSummary};
