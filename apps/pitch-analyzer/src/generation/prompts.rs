// All LLM prompt templates for the extraction pipeline.
// Placeholders are `{name}` markers filled by `ExtractionTask::render`.

/// Structured deck summary. Replace `{full_text}` before sending.
/// The response is stored verbatim; it is never parsed.
pub const DECK_SUMMARY_PROMPT_TEMPLATE: &str = r#"Analyze the following pitch deck content and extract information for these sections:
- problem: What problem is being solved?
- solution: What is the proposed solution?
- market: Market size, opportunity, and target customers
- team: Information about the founding team and key personnel
- traction: Current progress, metrics, customers, revenue
- financials: Financial projections, funding requirements, revenue model

Pitch deck content:
{full_text}

Return the analysis as a JSON object with the above keys. Be concise but comprehensive.
If a section is not clearly addressed in the pitch deck, indicate "Not specified" for that key."#;

/// Founder list. Replace `{full_text}` before sending.
pub const FOUNDERS_PROMPT_TEMPLATE: &str = r#"Analyze the following pitch deck content and extract the list of founders as an array:

Pitch deck content:
{full_text}

Return the founder names as a JSON array of strings.
If no data found send empty array."#;

/// Sector. Replace `{full_text}` before sending.
pub const SECTOR_PROMPT_TEMPLATE: &str = r#"Analyze the following pitch deck content and extract the name of the sector this startup falls in:

Pitch deck content:
{full_text}

Return the specific sector name only, no extra words.
If no data found send empty string ""."#;

/// Company name. Replace `{full_text}` before sending.
pub const COMPANY_NAME_PROMPT_TEMPLATE: &str = r#"Analyze the following pitch deck content and extract the name of the startup/company this pitch is for:

Pitch deck content:
{full_text}

Return the specific name only, no extra words.
If no data found send empty string ""."#;

/// Audio/video transcript summary. Replace `{transcript}` before sending.
pub const TRANSCRIPT_PROMPT_TEMPLATE: &str = r#"Summarize the following pitch transcript into key points:
- Main value proposition
- Key business metrics mentioned
- Important insights about market or competition
- Notable quotes from the founder

Transcript:
{transcript}

Provide a concise summary in bullet points."#;

/// The investment memo contract. Every key must appear in the model's answer.
pub const MEMO_SCHEMA: &str = r#"{
  "company_overview": {
    "name": "string",
    "sector": "string",
    "founders": [
      {
        "name": "string",
        "education": "string",
        "professional_background": "string",
        "previous_ventures": "string"
      }
    ],
    "technology": "string"
  },
  "market_analysis": {
    "industry_size_and_growth": {
      "total_addressable_market": {
        "name": "string",
        "value": "string",
        "cagr": "string",
        "source": "string"
      },
      "serviceable_obtainable_market": {
        "name": "string",
        "value": "string",
        "cagr": "string",
        "source": "string"
      },
      "commentary": "string"
    },
    "recent_news": "string",
    "competitor_details": [{
      "name": "string",
      "business_model": "string",
      "funding": "string",
      "margins": "string",
      "commentary": "string",
      "category": "string"
    }],
    "sub_segment_opportunities": ["string"]
  },
  "business_model": {
    "revenue_streams": "string",
    "pricing": "string",
    "scalability": "string",
    "unit_economics": {
      "customer_lifetime_value_ltv": "string",
      "customer_acquisition_cost_cac": "string"
    }
  },
  "financials": {
    "funding_history": "string",
    "projections": [{
      "year": "string",
      "revenue": "string"
    }],
    "valuation_rationale": "string",
    "srr_mrr": {
      "current_booked_arr": "string",
      "current_mrr": "string"
    },
    "burn_and_runway": {
      "funding_ask": "string",
      "stated_runway": "string",
      "implied_net_burn": "string"
    }
  },
  "claims_analysis": [{
    "claim": "string",
    "analysis_method": "string",
    "input_dataset_length": "string",
    "simulated_probability": "string",
    "result": "string",
    "simulation_assumptions": {"assumptions": "string"}
  }],
  "risk_metrics": {
    "composite_risk_score": 0,
    "score_interpretation": "string",
    "narrative_justification": "string"
  },
  "conclusion": {
    "overall_attractiveness": "string"
  }
}"#;

/// Investment memo prompt.
/// Replace, in this order: {schema}, {weightage}, {context}.
///
/// Forecast-method selection and risk scoring are instructions to the model.
/// Nothing in this crate computes forecasts or risk scores.
pub const MEMO_PROMPT_TEMPLATE: &str = r#"You are an investment analyst. Your task is to generate a structured investment memo for the startup under review.

Instructions:
1. The output MUST be in strict JSON format. Do not include text outside the JSON.
2. Always follow the schema below exactly. Every key and subkey MUST appear, even if data is missing (use "Not available" or [] for empty).
3. The response must be deterministic and stable across runs, always yielding the same result unless the input data itself changes.
4. Use the provided company data first, then enrich with reliable internet sources about competitors, market size, and industry trends.
5. For probabilistic forecasting of company claims, follow these rules:
   - Dataset length 6-12 months: ETS (exponential smoothing) or Bayesian log-linear regression
   - Dataset length 12-18 months: ARIMA or Holt-Winters
   - Dataset length 18+ months: Prophet or Bayesian Structural Time Series
   - If historical time-series is unavailable, run Monte Carlo simulations on pipeline data
6. Construct a composite risk metric by combining:
   - Burn rate
   - Runway
   - Gross margins
   - ARR growth
   - CAC/LTV ratios
   - Credibility of claims (based on probabilistic analysis)
   The risk metric should output a numeric score (0-100) and a narrative justification.
7. Keep analysis fact-based and consistent. Do not invent competitors or valuations without attribution.
8. All financial projections, probabilities, and risk metrics must be deterministic and stable.

Schema to follow exactly:
{schema}

Weighting preferences:
{weightage}

Source information:
{context}"#;
