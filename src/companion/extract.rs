use regex::Regex;
use std::sync::LazyLock;

pub const FALLBACK_NAME: &str = "名無しワンコ";
pub const FALLBACK_STORY: &str = "素敵な物語はこれから始まる！";

// Captures stop at any line terminator (`\n`, `\r`, U+2028, U+2029) and `$` only
// matches at the end of the text, so a field followed by a line break falls back.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"名前：([^\n\r\x{2028}\x{2029}]*?)(?:,|、|由来|$)").unwrap()
});
static STORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"由来：([^\n\r\x{2028}\x{2029}]*?)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CorgiName {
    pub name: String,
    pub story: String,
}

/// Pulls the name and its origin story out of generated text.
///
/// The two fields are matched independently and each falls back to its
/// default when its marker is missing.
pub fn extract_name(text: &str) -> CorgiName {
    CorgiName {
        name: first_capture(&NAME_RE, text).unwrap_or_else(|| FALLBACK_NAME.to_string()),
        story: first_capture(&STORY_RE, text).unwrap_or_else(|| FALLBACK_STORY.to_string()),
    }
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
