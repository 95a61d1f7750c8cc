//! Email syntax validation.
//!
//! The email is used as a salt (or salt input), so what matters is that it
//! is exactly the string the user meant. We accept a plain `local@domain`
//! address and reject anything with display names, comments, surrounding
//! whitespace, quoting, or domain literals. Deliverability is not checked.

/// Maximum length of a full address (RFC 5321 path limit minus brackets).
const MAX_ADDRESS_LENGTH: usize = 254;
const MAX_LOCAL_LENGTH: usize = 64;
const MAX_LABEL_LENGTH: usize = 63;

/// Characters allowed in a dot-atom local part besides ASCII alphanumerics.
const ATEXT_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

/// Returns `true` if `email` is a syntactically valid bare address.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_ADDRESS_LENGTH {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_LOCAL_LENGTH {
        return false;
    }
    local
        .split('.')
        .all(|atom| !atom.is_empty() && atom.chars().all(is_atext))
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || ATEXT_SPECIALS.contains(c)
}

fn is_valid_domain(domain: &str) -> bool {
    // A second '@' ends up in here and fails the label check.
    !domain.is_empty() && domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("someone@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
        assert!(is_valid_email("o'brien@x-y.org"));
        assert!(is_valid_email("root@localhost"));
    }

    #[test]
    fn rejects_missing_at() {
        assert!(!is_valid_email("someoneexample.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn rejects_empty_parts() {
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("someone@"));
        assert!(!is_valid_email("someone@example..com"));
        assert!(!is_valid_email("someone@.example.com"));
    }

    #[test]
    fn rejects_bad_dots_in_local_part() {
        assert!(!is_valid_email(".someone@example.com"));
        assert!(!is_valid_email("some..one@example.com"));
        assert!(!is_valid_email("someone.@example.com"));
    }

    #[test]
    fn rejects_whitespace_and_display_names() {
        assert!(!is_valid_email(" someone@example.com"));
        assert!(!is_valid_email("someone@example.com "));
        assert!(!is_valid_email("Some One <someone@example.com>"));
        assert!(!is_valid_email("some one@example.com"));
    }

    #[test]
    fn rejects_multiple_at_signs() {
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn rejects_bad_domain_labels() {
        assert!(!is_valid_email("someone@-example.com"));
        assert!(!is_valid_email("someone@example-.com"));
        assert!(!is_valid_email("someone@exa_mple.com"));
        assert!(!is_valid_email("someone@[127.0.0.1]"));
    }

    #[test]
    fn rejects_overlong_parts() {
        let local = "a".repeat(65);
        assert!(!is_valid_email(&format!("{local}@example.com")));
        let label = "b".repeat(64);
        assert!(!is_valid_email(&format!("someone@{label}.com")));
    }
}
