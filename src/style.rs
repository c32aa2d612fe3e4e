// =============================================================================
// Contact Form - Tailwind Classes
// =============================================================================

use crate::form::{ContactField, FormSnapshot};

pub const FORM: &str =
    "flex flex-col items-center justify-center gap-10 shadow-xl bg-white rounded-md p-6 w-full";
pub const INPUT: &str = "h-[50px] px-4 text-black w-full rounded-[5px] border-2";
pub const TEXTAREA: &str = "h-[100px] p-4 text-black rounded-[5px] w-full border-2 resize-none";
pub const BORDER_ALERT: &str = "border-red-500";
pub const BORDER_NORMAL: &str = "border-gray-400";
pub const EMAIL_HINT: &str = "text-red-500 text-sm mt-1";
pub const PHONE_HINT: &str = "text-red-500 text-sm";
pub const SUBMIT: &str = "w-[155px] h-[50px] cursor-pointer rounded-[10px] bg-gradient-to-l from-[#3EFEA1] to-[#259860] text-white disabled:opacity-50";
pub const SUCCESS: &str = "text-green-600";
pub const ERROR: &str = "text-red-600";

/// Form container classes with the caller's override appended.
pub fn form_class(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        FORM.to_string()
    } else {
        format!("{FORM} {extra}")
    }
}

/// Full class list for one input, border included.
pub fn field_class(field: ContactField, snapshot: &FormSnapshot) -> String {
    let base = match field {
        ContactField::Message => TEXTAREA,
        _ => INPUT,
    };
    let border = if snapshot.is_flagged(field) {
        BORDER_ALERT
    } else {
        BORDER_NORMAL
    };
    format!("{base} {border}")
}

/// Inline format message classes. Only the email message carries a top margin.
pub fn hint_class(field: ContactField) -> Option<&'static str> {
    match field {
        ContactField::Email => Some(EMAIL_HINT),
        ContactField::Phone => Some(PHONE_HINT),
        ContactField::FullName | ContactField::Message => None,
    }
}
