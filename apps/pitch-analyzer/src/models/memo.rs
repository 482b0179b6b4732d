//! Investment memo: the outcome envelope and a typed, lenient view of the schema.
//!
//! The parsed JSON is returned to callers exactly as the model produced it.
//! `MemoDocument` is an optional typed reading of that JSON in which every
//! missing or malformed field degrades to "Not available" / `[]` instead of
//! failing deserialization.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::generation::coercion::{coerce_string_list, stringify_element, ParsedValue};

pub const NOT_AVAILABLE: &str = "Not available";
pub const MEMO_ERROR_SENTINEL: &str = "Error generating memo";

// ────────────────────────────────────────────────────────────────────────────
// Outcome envelope
// ────────────────────────────────────────────────────────────────────────────

/// What `generate_memo` returns. Serializes to exactly one of:
/// the memo JSON itself, `{"raw_text": ...}`, or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MemoOutcome {
    /// The model's JSON, as parsed.
    Document(Value),
    /// The model answered, but not with valid JSON.
    RawText { raw_text: String },
    /// Context assembly or generation failed.
    Error { error: String },
}

impl MemoOutcome {
    pub fn raw_text(text: impl Into<String>) -> Self {
        MemoOutcome::RawText {
            raw_text: text.into(),
        }
    }

    pub fn error() -> Self {
        MemoOutcome::Error {
            error: MEMO_ERROR_SENTINEL.to_string(),
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self, MemoOutcome::Document(_))
    }

    /// Typed view of the memo. `None` unless the model returned JSON.
    pub fn typed(&self) -> Option<MemoDocument> {
        match self {
            MemoOutcome::Document(value) => Some(MemoDocument::from_value(value)),
            _ => None,
        }
    }

    pub fn into_json(self) -> Value {
        match self {
            MemoOutcome::Document(value) => value,
            other => serde_json::to_value(other).unwrap_or(Value::Null),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient field readers
// ────────────────────────────────────────────────────────────────────────────

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

/// Strings pass through; numbers and booleans are stringified; blanks,
/// nulls and nested structures become "Not available".
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let text = match &value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => stringify_element(&value),
        _ => String::new(),
    };
    let text = text.trim();
    Ok(if text.is_empty() {
        not_available()
    } else {
        text.to_string()
    })
}

/// Any value that does not fit `T` falls back to `T::default()`.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Keeps the array elements that fit `T`; anything that is not an array is empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// String lists go through the same coercion as founder lists, so a markdown
/// bullet string still yields items.
fn lenient_string_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_string_list(ParsedValue::Structured(value)))
}

/// Accepts `42`, `42.5` or `"42"` and clamps to 0-100. Anything else is `None`.
fn lenient_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let score = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches("/100").trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(score
        .filter(|s| s.is_finite())
        .map(|s| s.clamp(0.0, 100.0)))
}

/// Declares a schema section whose fields are all text.
macro_rules! text_section {
    ($(#[$meta:meta])* $name:ident { $($field:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            $(
                #[serde(default = "not_available", deserialize_with = "lenient_text")]
                pub $field: String,
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: not_available(),)+
                }
            }
        }
    };
}

// ────────────────────────────────────────────────────────────────────────────
// Schema
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoDocument {
    #[serde(default, deserialize_with = "lenient")]
    pub company_overview: CompanyOverview,
    #[serde(default, deserialize_with = "lenient")]
    pub market_analysis: MarketAnalysis,
    #[serde(default, deserialize_with = "lenient")]
    pub business_model: BusinessModel,
    #[serde(default, deserialize_with = "lenient")]
    pub financials: Financials,
    #[serde(default, deserialize_with = "lenient_list")]
    pub claims_analysis: Vec<ClaimAnalysis>,
    #[serde(default, deserialize_with = "lenient")]
    pub risk_metrics: RiskMetrics,
    #[serde(default, deserialize_with = "lenient")]
    pub conclusion: Conclusion,
}

impl MemoDocument {
    /// Reads any JSON value as a memo. Never fails; a non-object yields the
    /// all-"Not available" document.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyOverview {
    #[serde(default = "not_available", deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default = "not_available", deserialize_with = "lenient_text")]
    pub sector: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub founders: Vec<FounderProfile>,
    #[serde(default = "not_available", deserialize_with = "lenient_text")]
    pub technology: String,
}

impl Default for CompanyOverview {
    fn default() -> Self {
        Self {
            name: not_available(),
            sector: not_available(),
            founders: Vec::new(),
            technology: not_available(),
        }
    }
}

text_section!(FounderProfile {
    name,
    education,
    professional_background,
    previous_ventures,
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAnalysis {
    #[serde(default, deserialize_with = "lenient")]
    pub industry_size_and_growth: IndustrySizeAndGrowth,
    #[serde(default = "not_available", deserialize_with = "lenient_text")]
    pub recent_news: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub competitor_details: Vec<CompetitorDetail>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub sub_segment_opportunities: Vec<String>,
}

impl Default for MarketAnalysis {
    fn default() -> Self {
        Self {
            industry_size_and_growth: IndustrySizeAndGrowth::default(),
            recent_news: not_available(),
            competitor_details: Vec::new(),
            sub_segment_opportunities: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustrySizeAndGrowth {
    #[serde(default, deserialize_with = "lenient")]
    pub total_addressable_market: MarketSize,
    #[serde(default, deserialize_with = "lenient")]
    pub serviceable_obtainable_market: MarketSize,
    #[serde(default = "not_available", deserialize_with = "lenient_text")]
    pub commentary: String,
}

impl Default for IndustrySizeAndGrowth {
    fn default() -> Self {
        Self {
            total_addressable_market: MarketSize::default(),
            serviceable_obtainable_market: MarketSize::default(),
            commentary: not_available(),
        }
    }
}

text_section!(MarketSize {
    name,
    value,
    cagr,
    source,
});

text_section!(CompetitorDetail {
    name,
    business_model,
    funding,
    margins,
    commentary,
    category,
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessModel {
    #[serde(default = "not_available", deserialize_with = "lenient_text")]
    pub revenue_streams: String,
    #[serde(default = "not_available", deserialize_with = "lenient_text")]
    pub pricing: String,
    #[serde(default = "not_available", deserialize_with = "lenient_text")]
    pub scalability: String,
    #[serde(default, deserialize_with = "lenient")]
    pub unit_economics: UnitEconomics,
}

impl Default for BusinessModel {
    fn default() -> Self {
        Self {
            revenue_streams: not_available(),
            pricing: not_available(),
            scalability: not_available(),
            unit_economics: UnitEconomics::default(),
        }
    }
}

text_section!(UnitEconomics {
    customer_lifetime_value_ltv,
    customer_acquisition_cost_cac,
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Financials {
    #[serde(default = "not_available", deserialize_with = "lenient_text")]
    pub funding_history: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub projections: Vec<Projection>,
    #[serde(default = "not_available", deserialize_with = "lenient_text")]
    pub valuation_rationale: String,
    #[serde(default, deserialize_with = "lenient")]
    pub srr_mrr: RecurringRevenue,
    #[serde(default, deserialize_with = "lenient")]
    pub burn_and_runway: BurnAndRunway,
}

impl Default for Financials {
    fn default() -> Self {
        Self {
            funding_history: not_available(),
            projections: Vec::new(),
            valuation_rationale: not_available(),
            srr_mrr: RecurringRevenue::default(),
            burn_and_runway: BurnAndRunway::default(),
        }
    }
}

text_section!(Projection { year, revenue });

text_section!(RecurringRevenue {
    current_booked_arr,
    current_mrr,
});

text_section!(BurnAndRunway {
    funding_ask,
    stated_runway,
    implied_net_burn,
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimAnalysis {
    #[serde(default = "not_available", deserialize_with = "lenient_text")]
    pub claim: String,
    #[serde(default = "not_available", deserialize_with = "lenient_text")]
    pub analysis_method: String,
    #[serde(default = "not_available", deserialize_with = "lenient_text")]
    pub input_dataset_length: String,
    #[serde(default = "not_available", deserialize_with = "lenient_text")]
    pub simulated_probability: String,
    #[serde(default = "not_available", deserialize_with = "lenient_text")]
    pub result: String,
    #[serde(default, deserialize_with = "lenient")]
    pub simulation_assumptions: SimulationAssumptions,
}

text_section!(SimulationAssumptions { assumptions });

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// 0-100, as scored by the model. `None` when missing or not numeric.
    #[serde(default, deserialize_with = "lenient_score")]
    pub composite_risk_score: Option<f64>,
    #[serde(default = "not_available", deserialize_with = "lenient_text")]
    pub score_interpretation: String,
    #[serde(default = "not_available", deserialize_with = "lenient_text")]
    pub narrative_justification: String,
}

impl Default for RiskMetrics {
    fn default() -> Self {
        Self {
            composite_risk_score: None,
            score_interpretation: not_available(),
            narrative_justification: not_available(),
        }
    }
}

text_section!(Conclusion {
    overall_attractiveness,
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_raw_text_serializes_as_single_key() {
        let value = MemoOutcome::raw_text("Sorry, I cannot comply.").into_json();
        assert_eq!(value, json!({"raw_text": "Sorry, I cannot comply."}));
    }

    #[test]
    fn test_outcome_error_serializes_as_single_key() {
        let value = serde_json::to_value(MemoOutcome::error()).unwrap();
        assert_eq!(value, json!({"error": "Error generating memo"}));
    }

    #[test]
    fn test_outcome_document_serializes_verbatim() {
        let doc = json!({"conclusion": {"overall_attractiveness": "Strong"}});
        let outcome = MemoOutcome::Document(doc.clone());
        assert_eq!(serde_json::to_value(&outcome).unwrap(), doc);
        assert_eq!(outcome.into_json(), doc);
    }

    #[test]
    fn test_typed_view_fills_missing_with_not_available() {
        let outcome = MemoOutcome::Document(json!({
            "conclusion": {"overall_attractiveness": "Strong"}
        }));
        let memo = outcome.typed().unwrap();
        assert_eq!(memo.conclusion.overall_attractiveness, "Strong");
        assert_eq!(memo.company_overview.name, NOT_AVAILABLE);
        assert_eq!(
            memo.market_analysis
                .industry_size_and_growth
                .total_addressable_market
                .cagr,
            NOT_AVAILABLE
        );
        assert!(memo.claims_analysis.is_empty());
        assert!(memo.risk_metrics.composite_risk_score.is_none());
    }

    #[test]
    fn test_typed_view_absent_for_raw_text() {
        assert!(MemoOutcome::raw_text("nope").typed().is_none());
        assert!(MemoOutcome::error().typed().is_none());
    }

    #[test]
    fn test_lenient_fields() {
        let memo = MemoDocument::from_value(&json!({
            "company_overview": {
                "name": "Acme",
                "sector": "",
                "founders": [{"name": "Alice", "education": null}, "not an object"],
                "technology": 5
            },
            "market_analysis": {
                "industry_size_and_growth": "unknown",
                "sub_segment_opportunities": "- SMB lending\n- Payroll"
            },
            "financials": {"projections": [{"year": 2025, "revenue": "$2M"}]},
            "claims_analysis": {"claim": "not a list"},
            "risk_metrics": {"composite_risk_score": "142"}
        }));

        assert_eq!(memo.company_overview.name, "Acme");
        assert_eq!(memo.company_overview.sector, NOT_AVAILABLE);
        assert_eq!(memo.company_overview.technology, "5");
        assert_eq!(memo.company_overview.founders.len(), 1);
        assert_eq!(memo.company_overview.founders[0].education, NOT_AVAILABLE);
        assert_eq!(
            memo.market_analysis.industry_size_and_growth,
            IndustrySizeAndGrowth::default()
        );
        assert_eq!(
            memo.market_analysis.sub_segment_opportunities,
            vec!["SMB lending", "Payroll"]
        );
        assert_eq!(memo.financials.projections[0].year, "2025");
        assert!(memo.claims_analysis.is_empty());
        assert_eq!(memo.risk_metrics.composite_risk_score, Some(100.0));
    }

    #[test]
    fn test_risk_score_formats() {
        let read = |v: Value| {
            MemoDocument::from_value(&json!({"risk_metrics": {"composite_risk_score": v}}))
                .risk_metrics
                .composite_risk_score
        };
        assert_eq!(read(json!(42)), Some(42.0));
        assert_eq!(read(json!(37.5)), Some(37.5));
        assert_eq!(read(json!("61/100")), Some(61.0));
        assert_eq!(read(json!(-3)), Some(0.0));
        assert_eq!(read(json!("high")), None);
        assert_eq!(read(Value::Null), None);
    }

    #[test]
    fn test_non_object_document_is_all_defaults() {
        let memo = MemoDocument::from_value(&json!(["not", "a", "memo"]));
        assert_eq!(memo, MemoDocument::default());
        assert_eq!(memo.conclusion.overall_attractiveness, NOT_AVAILABLE);
    }

    #[test]
    fn test_default_document_serializes_every_key() {
        let value = serde_json::to_value(MemoDocument::default()).unwrap();
        for key in [
            "company_overview",
            "market_analysis",
            "business_model",
            "financials",
            "claims_analysis",
            "risk_metrics",
            "conclusion",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(
            value["business_model"]["unit_economics"]["customer_acquisition_cost_cac"],
            json!(NOT_AVAILABLE)
        );
        assert_eq!(value["risk_metrics"]["composite_risk_score"], Value::Null);
    }
}
