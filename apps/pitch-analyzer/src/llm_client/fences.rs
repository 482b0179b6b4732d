//! Response cleaning: strips markdown code fences the model wraps around output.

const FENCE: &str = "```";

/// Strips a ```` ```lang ... ``` ```` wrapper from LLM output.
///
/// The language tag is optional and ignored. Interior content is returned
/// trimmed but otherwise untouched; it is not validated as JSON. Text without
/// any fence is returned unchanged, and a lone closing fence is dropped.
/// Nested wrappers are peeled until none remain, so applying this twice is
/// the same as applying it once.
pub fn strip_code_fence(raw: &str) -> String {
    let mut current = match strip_once(raw) {
        Some(inner) => inner,
        None => return raw.to_string(),
    };
    while let Some(inner) = strip_once(current) {
        current = inner;
    }
    current.to_string()
}

fn strip_once(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    match trimmed.strip_prefix(FENCE) {
        Some(after_open) => Some(strip_opened(after_open)),
        // a dangling closing fence with no opener
        None => trimmed.strip_suffix(FENCE).map(str::trim),
    }
}

fn strip_opened(after_open: &str) -> &str {
    // The rest of the opening line is either a language tag or content
    // (single-line fences like ```{"a":1}```).
    let body = match after_open.split_once('\n') {
        Some((first_line, rest)) if is_language_tag(first_line.trim()) => rest,
        Some(_) => after_open,
        None if is_language_tag(after_open.trim()) => "",
        None => after_open,
    };

    let body = body.trim_end();
    let body = body.strip_suffix(FENCE).unwrap_or(body);
    body.trim()
}

fn is_language_tag(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.'))
}
