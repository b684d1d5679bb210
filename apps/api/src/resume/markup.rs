use once_cell::sync::Lazy;
use regex::Regex;

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("markup tag pattern must compile"));

/// Removes every `<...>` tag from rich-text markup, leaving the text content.
pub fn strip_markup(markup: &str) -> String {
    TAG_REGEX.replace_all(markup, "").into_owned()
}

/// True when the markup carries no visible text, e.g. an untouched editor
/// that still holds `<p><br></p>`.
pub fn is_blank_markup(markup: &str) -> bool {
    strip_markup(markup).trim().is_empty()
}
