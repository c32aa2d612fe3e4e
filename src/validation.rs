// =============================================================================
// Contact Form - Field Validation
// =============================================================================
// Table of Contents:
// 1. Format Rules
// 2. Validators
// 3. Field Validity
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;

use crate::form::ContactField;

// -----------------------------------------------------------------------------
// 1. Format Rules
// -----------------------------------------------------------------------------

/// Country code every accepted phone number starts with.
pub const PHONE_PREFIX: &str = "+998";

/// Number of digits required after [`PHONE_PREFIX`].
pub const PHONE_DIGITS: usize = 9;

/// Example shown next to the invalid-email message.
pub const EMAIL_FORMAT_HINT: &str = "user@gmail.com";

/// Example shown next to the invalid-phone message.
pub const PHONE_FORMAT_HINT: &str = "+998901234567";

// Browser `\s` differs from Unicode White_Space: it includes U+FEFF and
// excludes U+0085, so the set is spelled out.
const BROWSER_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{BROWSER_WHITESPACE}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is valid")
});

// `(?-u:\d)` keeps the digit class ASCII-only.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^{}(?-u:\d){{{}}}$",
        regex::escape(PHONE_PREFIX),
        PHONE_DIGITS
    );
    Regex::new(&pattern).expect("phone pattern is valid")
});

// -----------------------------------------------------------------------------
// 2. Validators
// -----------------------------------------------------------------------------

/// Check an email address: non-blank local part, `@`, domain, `.`, suffix.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check a phone number: `+998` followed by exactly nine digits.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

// -----------------------------------------------------------------------------
// 3. Field Validity
// -----------------------------------------------------------------------------

/// Per-instance invalid flags for the two checked fields.
///
/// Both start cleared, so an untouched form never blocks submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldValidity {
    pub email_invalid: bool,
    pub phone_invalid: bool,
}

impl FieldValidity {
    /// Recompute the flag belonging to `field` from its current text.
    ///
    /// Fields without a format rule are ignored. Returns `true` when the
    /// stored flag changed.
    pub fn apply(&mut self, field: ContactField, value: &str) -> bool {
        let (slot, invalid) = match field {
            ContactField::Email => (&mut self.email_invalid, !is_valid_email(value)),
            ContactField::Phone => (&mut self.phone_invalid, !is_valid_phone(value)),
            ContactField::FullName | ContactField::Message => return false,
        };

        let changed = *slot != invalid;
        *slot = invalid;
        changed
    }

    /// Whether `field` currently fails its own format check.
    pub fn is_invalid(&self, field: ContactField) -> bool {
        match field {
            ContactField::Email => self.email_invalid,
            ContactField::Phone => self.phone_invalid,
            ContactField::FullName | ContactField::Message => false,
        }
    }

    pub fn any_invalid(&self) -> bool {
        self.email_invalid || self.phone_invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_basic_address() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("foo@bar.com"));
        assert!(is_valid_email("first.last+tag@mail.example.uz"));
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b.com "));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_email_allows_extra_dots_in_domain() {
        // The domain part is greedy but may backtrack to any later dot.
        assert!(is_valid_email("a@b.c.d"));
        assert!(!is_valid_email("a@.com"));
    }

    #[test]
    fn test_email_whitespace_follows_browser_rules() {
        assert!(!is_valid_email("a\u{FEFF}@b.com"));
        assert!(!is_valid_email("a@b\u{3000}.com"));
        assert!(!is_valid_email("a\u{A0}b@c.com"));
        assert!(!is_valid_email("a@b.c\u{0B}om"));
        // NEL is not whitespace to a browser regex.
        assert!(is_valid_email("a\u{85}b@c.com"));
    }

    #[test]
    fn test_phone_accepts_prefixed_nine_digits() {
        assert!(is_valid_phone("+998901234567"));
        assert!(is_valid_phone("+998000000000"));
    }

    #[test]
    fn test_phone_rejects_malformed() {
        assert!(!is_valid_phone("+99890123456"));
        assert!(!is_valid_phone("+9989012345678"));
        assert!(!is_valid_phone("998901234567"));
        assert!(!is_valid_phone("+997901234567"));
        assert!(!is_valid_phone("+998 90 123 45 67"));
        assert!(!is_valid_phone("+998901234567\n"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are `\d` under Unicode rules.
        assert!(!is_valid_phone("+998٩٠١٢٣٤٥٦٧"));
    }

    #[test]
    fn test_validity_starts_clear() {
        let validity = FieldValidity::default();
        assert!(!validity.email_invalid);
        assert!(!validity.phone_invalid);
        assert!(!validity.any_invalid());
    }

    #[test]
    fn test_apply_tracks_latest_value() {
        let mut validity = FieldValidity::default();

        assert!(validity.apply(ContactField::Email, "foo@bar"));
        assert!(validity.email_invalid);

        // Same verdict again is not a transition.
        assert!(!validity.apply(ContactField::Email, "foo@ba"));
        assert!(validity.email_invalid);

        assert!(validity.apply(ContactField::Email, "foo@bar.com"));
        assert!(!validity.email_invalid);
    }

    #[test]
    fn test_apply_flags_are_independent() {
        let mut validity = FieldValidity::default();
        validity.apply(ContactField::Phone, "123");
        assert!(validity.phone_invalid);
        assert!(!validity.email_invalid);

        validity.apply(ContactField::Email, "a@b.com");
        assert!(validity.phone_invalid);
    }

    #[test]
    fn test_unchecked_fields_leave_flags_alone() {
        let mut validity = FieldValidity {
            email_invalid: true,
            phone_invalid: true,
        };

        assert!(!validity.apply(ContactField::FullName, ""));
        assert!(!validity.apply(ContactField::Message, "a@b.com"));
        assert_eq!(
            validity,
            FieldValidity {
                email_invalid: true,
                phone_invalid: true,
            }
        );
        assert!(!validity.is_invalid(ContactField::FullName));
        assert!(!validity.is_invalid(ContactField::Message));
    }
}
