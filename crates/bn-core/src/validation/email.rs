use std::sync::LazyLock;

use regex::Regex;

// Same shape mobile platforms accept for email fields.
static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .ok()
});

/// Whether `input` is a syntactically valid email address.
///
/// Used both to validate registration input and to decide whether a login
/// identifier is an email or a username.
pub fn is_valid_email(input: &str) -> bool {
    let input = input.trim();
    if input.is_empty() {
        return false;
    }

    match EMAIL_PATTERN.as_ref() {
        Some(pattern) => pattern.is_match(input),
        None => input.contains('@'),
    }
}
