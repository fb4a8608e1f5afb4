//! Email shape check used by form validation.

/// Returns `true` if `email` looks like a deliverable address.
///
/// Mirrors what a browser accepts for `type="email"` closely enough for form
/// gating: one `@`, a non-empty local part, and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(is_valid_email("a@example.com"));
        assert!(is_valid_email("first.last+news@mail.freedaiy.com"));
    }

    #[test]
    fn test_rejects_missing_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("a@localhost"));
    }

    #[test]
    fn test_rejects_malformed_domains_and_whitespace() {
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("a@.example.com"));
        assert!(!is_valid_email("a@example.com."));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email(" a@example.com"));
    }
}
