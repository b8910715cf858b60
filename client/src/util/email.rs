//! Email address shape check for the contact form.
//!
//! The pattern is deliberately loose: a local part of word characters, dots
//! and hyphens, `@`, one domain label, `.`, and an alphabetic top-level label
//! of two or more letters. Multi-label domains such as `mail.example.com` are
//! rejected. Word characters are ASCII only.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::sync::LazyLock;

use regex::Regex;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_-]+\.[A-Za-z]{2,}$";

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

/// Whether `email` matches the contact form's address pattern.
///
/// The input is matched as given; callers decide whether to trim.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}
