//! Deriving usernames for accounts created by federated sign-in.

use ab_core::MAX_USERNAME_LENGTH;

/// Fallback when an email has no usable local part
const DEFAULT_BASE: &str = "user";

/// The local part of `email` (text before the first `@`), trimmed and
/// capped at the username column width.
pub fn base_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default().trim();
    let local = if local.is_empty() { DEFAULT_BASE } else { local };

    local.chars().take(MAX_USERNAME_LENGTH).collect()
}

/// `base` with a numeric suffix appended; suffix 0 yields `base` itself.
/// The base is shortened when needed so the result never exceeds the
/// username column width.
pub fn with_suffix(base: &str, suffix: u32) -> String {
    if suffix == 0 {
        return base.chars().take(MAX_USERNAME_LENGTH).collect();
    }

    let suffix = suffix.to_string();
    let room = MAX_USERNAME_LENGTH.saturating_sub(suffix.len());
    let mut candidate: String = base.chars().take(room).collect();
    candidate.push_str(&suffix);
    candidate
}
