// =============================================================================
// Contact Form - UI Components
// =============================================================================

pub mod contact_form;

pub use contact_form::ContactForm;
