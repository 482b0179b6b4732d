//! Extraction tasks: every prompt the pipeline sends, with its output contract.

use std::fmt;

use crate::llm_client::strip_code_fence;

use crate::generation::prompts::{
    COMPANY_NAME_PROMPT_TEMPLATE, DECK_SUMMARY_PROMPT_TEMPLATE, FOUNDERS_PROMPT_TEMPLATE,
    MEMO_PROMPT_TEMPLATE, MEMO_SCHEMA, SECTOR_PROMPT_TEMPLATE, TRANSCRIPT_PROMPT_TEMPLATE,
};

/// What the model was told to return, and therefore how its text is cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    /// Free text, stored verbatim.
    PlainText,
    /// A single bare value ("Fintech"), fence-stripped and trimmed.
    BareScalar,
    /// An array of strings, coerced via `coerce_string_list`.
    StringList,
    /// A JSON document following the given schema.
    StrictJson(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionTask {
    DeckSummary,
    Founders,
    Sector,
    CompanyName,
    TranscriptSummary,
    Memo,
}

impl ExtractionTask {
    /// The four deck tasks, in execution order.
    pub const DECK_STEPS: [ExtractionTask; 4] = [
        ExtractionTask::DeckSummary,
        ExtractionTask::Founders,
        ExtractionTask::Sector,
        ExtractionTask::CompanyName,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExtractionTask::DeckSummary => "deck_summary",
            ExtractionTask::Founders => "founder_list",
            ExtractionTask::Sector => "sector",
            ExtractionTask::CompanyName => "company_name",
            ExtractionTask::TranscriptSummary => "transcript_summary",
            ExtractionTask::Memo => "memo",
        }
    }

    pub fn shape(self) -> OutputShape {
        match self {
            ExtractionTask::DeckSummary | ExtractionTask::TranscriptSummary => {
                OutputShape::PlainText
            }
            ExtractionTask::Founders => OutputShape::StringList,
            ExtractionTask::Sector | ExtractionTask::CompanyName => OutputShape::BareScalar,
            ExtractionTask::Memo => OutputShape::StrictJson(MEMO_SCHEMA),
        }
    }

    /// Raw template with `{placeholder}` markers.
    pub fn template(self) -> &'static str {
        match self {
            ExtractionTask::DeckSummary => DECK_SUMMARY_PROMPT_TEMPLATE,
            ExtractionTask::Founders => FOUNDERS_PROMPT_TEMPLATE,
            ExtractionTask::Sector => SECTOR_PROMPT_TEMPLATE,
            ExtractionTask::CompanyName => COMPANY_NAME_PROMPT_TEMPLATE,
            ExtractionTask::TranscriptSummary => TRANSCRIPT_PROMPT_TEMPLATE,
            ExtractionTask::Memo => MEMO_PROMPT_TEMPLATE,
        }
    }

    /// Renders the prompt in a single pass over the template.
    ///
    /// Only `{key}` markers present in the template are replaced. Inserted
    /// values are never rescanned, so braces in caller text survive verbatim.
    /// Unknown markers are left as-is.
    pub fn render(self, substitutions: &[(&str, &str)]) -> String {
        let template = self.template();
        let mut prompt = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            prompt.push_str(&rest[..open]);
            let after_open = &rest[open + 1..];
            let filled = after_open.find('}').and_then(|close| {
                let key = &after_open[..close];
                substitutions
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, value)| (close, *value))
            });
            match filled {
                Some((close, value)) => {
                    prompt.push_str(value);
                    rest = &after_open[close + 1..];
                }
                None => {
                    prompt.push('{');
                    rest = after_open;
                }
            }
        }
        prompt.push_str(rest);
        prompt
    }
}

impl OutputShape {
    /// Normalizes raw model text for this shape. Plain text is kept verbatim;
    /// every other shape is fence-stripped and trimmed. Lists and JSON
    /// documents are parsed afterwards by their callers.
    pub fn clean(self, raw: &str) -> String {
        match self {
            OutputShape::PlainText => raw.to_string(),
            OutputShape::BareScalar | OutputShape::StringList | OutputShape::StrictJson(_) => {
                strip_code_fence(raw).trim().to_string()
            }
        }
    }
}

impl fmt::Display for ExtractionTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
