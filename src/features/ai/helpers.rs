use serde_json::Value;

const CANDIDATE_TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

pub fn build_prompt(question: &str) -> String {
    format!(
        "Answer in exactly ONE WORD. Do not add punctuation, explanation or extra words.\nQuestion: {question}"
    )
}

/// Text of the first candidate, or an empty string when the response has none.
pub fn candidate_text(payload: &Value) -> &str {
    payload
        .pointer(CANDIDATE_TEXT_POINTER)
        .and_then(Value::as_str)
        .unwrap_or_default()
}

/// First whitespace-delimited token with everything outside `[A-Za-z0-9]` removed.
pub fn first_word(text: &str) -> String {
    text.split_whitespace()
        .next()
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}
