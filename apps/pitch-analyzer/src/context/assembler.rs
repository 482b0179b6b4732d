//! Context Assembler — flattens a deal record into the text block injected into the memo prompt.
//!
//! Section order is a contract with the memo prompt: company, founders and
//! sector always come first, narrative detail after. Absent sections
//! contribute no lines at all (no empty headers).

use serde_json::{Map, Value};

use crate::generation::coercion::stringify_element;
use crate::models::Metadata;

const NOT_AVAILABLE: &str = "N/A";

/// Media sources summarized into the context, in this fixed order.
const MEDIA_SOURCES: [&str; 2] = ["voice_pitch", "video_pitch"];

/// Builds the memo context. Deterministic for a fixed input.
pub fn build_context(
    metadata: &Metadata,
    extracted_text: &Map<String, Value>,
    public_data: &Map<String, Value>,
    user_input: &Map<String, Value>,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    push_company_header(&mut lines, metadata);
    push_pitch_deck(&mut lines, extracted_text);
    push_media_summaries(&mut lines, extracted_text);
    push_public_data(&mut lines, public_data);
    push_user_input(&mut lines, user_input);

    lines.join("\n")
}

fn push_company_header(lines: &mut Vec<String>, metadata: &Metadata) {
    let founders = metadata.founder_names.join(", ");
    lines.push(format!(
        "Company: {}",
        metadata.company_name.as_deref().unwrap_or(NOT_AVAILABLE)
    ));
    lines.push(format!(
        "Founders: {}",
        if founders.is_empty() {
            NOT_AVAILABLE
        } else {
            founders.as_str()
        }
    ));
    lines.push(format!(
        "Sector: {}",
        metadata.sector.as_deref().unwrap_or(NOT_AVAILABLE)
    ));
}

fn push_pitch_deck(lines: &mut Vec<String>, extracted_text: &Map<String, Value>) {
    let concise = extracted_text
        .get("pitch_deck")
        .and_then(Value::as_object)
        .and_then(|deck| deck.get("concise"))
        .filter(|c| is_truthy(c));

    if let Some(concise) = concise {
        lines.push("Pitch Deck Analysis:".to_string());
        lines.push(raw_text(concise));
    }
}

fn push_media_summaries(lines: &mut Vec<String>, extracted_text: &Map<String, Value>) {
    for source in MEDIA_SOURCES {
        let summary = extracted_text
            .get(source)
            .and_then(Value::as_object)
            .and_then(|media| media.get("concise"))
            .and_then(Value::as_object)
            .and_then(|concise| concise.get("summary"))
            .filter(|s| is_truthy(s));

        if let Some(summary) = summary {
            lines.push(format!("{} Summary:", title_case(source)));
            lines.push(raw_text(summary));
        }
    }
}

fn push_public_data(lines: &mut Vec<String>, public_data: &Map<String, Value>) {
    if public_data.is_empty() {
        return;
    }
    lines.push("Public Information:".to_string());
    for (key, value) in public_data {
        let rendered = match value {
            Value::Array(items) => items
                .iter()
                .map(stringify_element)
                .collect::<Vec<_>>()
                .join(", "),
            other => raw_text(other),
        };
        lines.push(format!("{}: {}", title_case(key), rendered));
    }
}

fn push_user_input(lines: &mut Vec<String>, user_input: &Map<String, Value>) {
    if let Some(qna) = user_input.get("qna").and_then(Value::as_object) {
        lines.push("Additional Q&A:".to_string());
        for (question, answer) in qna {
            lines.push(format!("Q: {question}"));
            lines.push(format!("A: {}", raw_text(answer)));
        }
    }

    if let Some(weightages) = user_input.get("weightages") {
        lines.push(format!("Evaluation Weightages: {}", raw_text(weightages)));
    }
}

/// Raw textual form of a JSON value: strings verbatim, everything else as
/// compact JSON.
pub fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `public_data` keys and media labels are shown as words: `arr_growth` -> `Arr Growth`.
pub fn title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut prev_alpha = false;
    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
