// =============================================================================
// Contact Form - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. WASM Entry Point
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod app;
pub mod components;
pub mod form;
pub mod i18n;
pub mod style;
pub mod validation;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use app::App;
pub use components::ContactForm;
pub use form::{ContactField, ContactFormData, FieldChange, FieldError, FormSnapshot, StatusFlags};
pub use i18n::{TextKey, Translator};
pub use validation::{is_valid_email, is_valid_phone, FieldValidity};

// -----------------------------------------------------------------------------
// 3. WASM Entry Point
// -----------------------------------------------------------------------------

use wasm_bindgen::prelude::*;

/// Render the demo contact page into `<body>` when this crate is loaded as a
/// wasm-bindgen module instead of through the Trunk binary.
#[wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    // A host page may have installed its own console logger already.
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("contact-form: attaching demo page to document body");
    leptos::mount::mount_to_body(app::App);
}
