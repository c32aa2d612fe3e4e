// =============================================================================
// Contact Form - Demo Host
// =============================================================================
// Owns the form data and submission status the way a contact page would.
// There is no network layer: a submission is logged after a short delay and
// marked successful.
// =============================================================================

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ContactForm;
use crate::form::{ContactFormData, FieldChange};
use crate::i18n::{self, TextKey};

/// Simulated round trip while the form shows its sending state.
const SUBMIT_DELAY_MS: u32 = 600;

/// Root component: a contact page hosting the form.
#[component]
pub fn App() -> impl IntoView {
    let form_data = RwSignal::new(ContactFormData::default());
    let is_loading = RwSignal::new(false);
    let is_error = RwSignal::new(false);
    let is_success = RwSignal::new(false);

    let on_change = Callback::new(move |change: FieldChange| {
        // A new edit starts a new submission cycle.
        is_success.set(false);
        is_error.set(false);
        form_data.update(|data| data.apply(change));
    });

    let on_submit = Callback::new(move |_: ()| {
        is_loading.set(true);
        let payload = form_data.with_untracked(|data| serde_json::to_string(data));

        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            match payload {
                Ok(payload) => {
                    log::info!("Contact submission: {}", payload);
                    form_data.set(ContactFormData::default());
                    is_success.set(true);
                }
                Err(e) => {
                    log::error!("Failed to encode contact submission: {}", e);
                    is_error.set(true);
                }
            }
            is_loading.set(false);
        });
    });

    let t = Callback::new(|key: TextKey| i18n::english(key).to_string());

    view! {
        <main class="min-h-screen flex items-center justify-center p-6">
            <ContactForm
                form_data=form_data
                on_change=on_change
                on_submit=on_submit
                is_loading=is_loading
                is_error=is_error
                is_success=is_success
                t=t
                class="max-w-xl"
            />
        </main>
    }
}
