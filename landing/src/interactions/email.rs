//! Lead-capture email validation.

use std::sync::LazyLock;

use regex::Regex;

/// Local part (dot-separated atoms or a quoted string) `@` domain (dotted
/// labels ending in a 2+ letter TLD, or a bracketed IPv4 literal).
/// U+FEFF counts as whitespace, as it does in browser regexes.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s\x{FEFF}@"]+(\.[^<>()\[\]\\.,;:\s\x{FEFF}@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email shape pattern is valid")
});

/// Why an email was rejected. The display text is shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Email is required.")]
    Empty,
    #[error("Please enter a valid email address.")]
    Format,
}

/// Shape check, case-insensitive. Does not trim.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(&email.to_lowercase())
}

/// Trim and validate the raw field value.
///
/// Blank input is `Empty` even though it would also fail the shape check.
/// On success the trimmed value is returned with its original casing.
pub fn validate_email(raw: &str) -> Result<&str, EmailError> {
    let email = raw.trim_matches(is_form_whitespace);
    if email.is_empty() {
        return Err(EmailError::Empty);
    }
    if !is_valid_email(email) {
        return Err(EmailError::Format);
    }
    Ok(email)
}

/// Whitespace as the browser trims it: Unicode whitespace plus U+FEFF.
fn is_form_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}
