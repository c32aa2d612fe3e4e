// =============================================================================
// Contact Form - Demo Binary
// =============================================================================
// Built by Trunk from index.html; renders the demo contact page.
// =============================================================================

use contact_form::App;

fn main() {
    console_error_panic_hook::set_once();

    // `mount` may already have registered the console logger.
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("contact-form: demo page starting ({})", env!("CARGO_PKG_VERSION"));

    leptos::mount::mount_to_body(App);
}
