//! Pitch Analyzer: structured extraction over startup pitch material.
//!
//! Turns raw pitch-deck text, pitch transcripts and an assembled deal record
//! into structured records using a deterministic Gemini client:
//!
//! - [`PitchAnalyzer::summarize_pitch_deck`]: summary, founders, sector, company name
//! - [`PitchAnalyzer::summarize_audio_transcript`]: bullet-point transcript summary
//! - [`PitchAnalyzer::generate_memo`]: schema-shaped investment memo
//!
//! None of the three fail. Errors are logged and replaced by fixed sentinel
//! records so callers can persist whatever comes back.
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use pitch_analyzer::{Config, PitchAnalyzer};
//!
//! let config = Config::from_env()?;
//! pitch_analyzer::telemetry::init_tracing(&config);
//!
//! let analyzer = PitchAnalyzer::from_config(&config)?;
//! let summary = analyzer.summarize_pitch_deck("Acme Lending ...").await;
//! println!("{}", serde_json::to_string_pretty(&summary)?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod context;
pub mod errors;
pub mod generation;
pub mod llm_client;
pub mod models;
pub mod naming;
pub mod telemetry;

pub use config::Config;
pub use context::build_context;
pub use errors::ExtractionError;
pub use generation::coercion::{coerce_string_list, ParsedValue};
pub use generation::PitchAnalyzer;
pub use llm_client::{strip_code_fence, GeminiClient, GenerationConfig, LlmError, TextGenerator};
pub use models::{
    DealData, DeckSummary, FailedDeckSummary, MemoDocument, MemoOutcome, Metadata,
    PitchDeckSummary,
};
pub use naming::build_company_display_name;
