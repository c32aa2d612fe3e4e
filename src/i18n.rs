// =============================================================================
// Contact Form - Localization Keys
// =============================================================================
// The form never loads translations itself. Callers pass a `Translator`
// that maps each key to display text; `english` is a built-in fallback.
// =============================================================================

use leptos::prelude::Callback;

/// Key -> display text lookup supplied by the form's owner.
pub type Translator = Callback<TextKey, String>;

/// Every piece of text the contact form asks its translator for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextKey {
    Name,
    Email,
    Phone,
    Message,
    InvalidEmail,
    InvalidPhone,
    Sending,
    Submit,
    SuccessMessage,
    ErrorMessage,
}

impl TextKey {
    pub const ALL: [TextKey; 10] = [
        TextKey::Name,
        TextKey::Email,
        TextKey::Phone,
        TextKey::Message,
        TextKey::InvalidEmail,
        TextKey::InvalidPhone,
        TextKey::Sending,
        TextKey::Submit,
        TextKey::SuccessMessage,
        TextKey::ErrorMessage,
    ];

    /// Dotted identifier as found in translation catalogs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextKey::Name => "contactpage.name",
            TextKey::Email => "contactpage.email",
            TextKey::Phone => "contactpage.phone",
            TextKey::Message => "contactpage.message",
            TextKey::InvalidEmail => "contactpage.invalid_email",
            TextKey::InvalidPhone => "contactpage.invalid_phone",
            TextKey::Sending => "contactpage.sending",
            TextKey::Submit => "contactpage.btn",
            TextKey::SuccessMessage => "contactpage.success_message",
            TextKey::ErrorMessage => "contactpage.error_message",
        }
    }

    pub fn from_key(key: &str) -> Option<TextKey> {
        TextKey::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

/// English fallback text.
pub fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::Name => "Full name",
        TextKey::Email => "Email",
        TextKey::Phone => "Phone number",
        TextKey::Message => "Message",
        TextKey::InvalidEmail => "Invalid email address",
        TextKey::InvalidPhone => "Invalid phone number",
        TextKey::Sending => "Sending...",
        TextKey::Submit => "Send",
        TextKey::SuccessMessage => "Your message has been sent!",
        TextKey::ErrorMessage => "Something went wrong. Please try again.",
    }
}

/// Inline validation message followed by an example of the expected format.
pub fn with_format_hint(message: &str, example: &str) -> String {
    format!("{message} (Format: {example})")
}
