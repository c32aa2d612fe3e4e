// =============================================================================
// Contact Form - ContactForm Component
// =============================================================================
// Table of Contents:
// 1. Component
// 2. Event Handling
// 3. Field Rendering
// =============================================================================

use leptos::prelude::*;
use web_sys::SubmitEvent;

use crate::form::{ContactField, ContactFormData, FieldChange, FormSnapshot, StatusFlags};
use crate::i18n::{with_format_hint, TextKey, Translator};
use crate::style;
use crate::validation::FieldValidity;

// -----------------------------------------------------------------------------
// 1. Component
// -----------------------------------------------------------------------------

/// Contact form with inline email/phone validation.
///
/// The parent owns the form data and the loading/error/success flags.
/// Every edit is forwarded to `on_change` untouched; the form only keeps
/// its own email/phone validity and disables submit while either is
/// invalid or a submission is in flight.
#[component]
pub fn ContactForm(
    #[prop(into)] form_data: Signal<ContactFormData>,
    #[prop(into)] on_change: Callback<FieldChange>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] is_error: Signal<bool>,
    #[prop(into)] is_success: Signal<bool>,
    #[prop(into)] t: Translator,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let validity = RwSignal::new(FieldValidity::default());

    let snapshot = move || {
        FormSnapshot::new(
            validity.get(),
            StatusFlags {
                loading: is_loading.get(),
                error: is_error.get(),
                success: is_success.get(),
            },
        )
    };

    let handlers = FormHandlers {
        validity,
        on_change,
        on_submit,
    };

    let handle_submit = move |ev: SubmitEvent| {
        // The browser default would reload the page.
        ev.prevent_default();
        handlers.submit();
    };

    let fields = ContactField::ALL
        .into_iter()
        .map(|field| render_field(field, form_data, t, snapshot, handlers))
        .collect_view();

    view! {
        <form
            class=move || container_class(class)
            on:submit=handle_submit
        >
            {fields}
            <button
                type="submit"
                class=style::SUBMIT
                disabled=move || snapshot().submit_disabled()
            >
                {move || t.run(snapshot().submit_label())}
            </button>
            <Show when=move || snapshot().shows_success()>
                <p class=style::SUCCESS>{move || t.run(TextKey::SuccessMessage)}</p>
            </Show>
            <Show when=move || snapshot().shows_error()>
                <p class=style::ERROR>{move || t.run(TextKey::ErrorMessage)}</p>
            </Show>
        </form>
    }
}

/// Form classes with the parent's current override; read inside the view so
/// a changing prop re-renders.
fn container_class(class: MaybeProp<String>) -> String {
    style::form_class(&class.get().unwrap_or_default())
}

// -----------------------------------------------------------------------------
// 2. Event Handling
// -----------------------------------------------------------------------------

/// Re-check the edited field. Returns its new invalid state when it flipped.
pub fn dispatch_change(validity: &mut FieldValidity, change: &FieldChange) -> Option<bool> {
    validity
        .apply(change.field, &change.value)
        .then(|| validity.is_invalid(change.field))
}

/// Handlers shared by every control of one form instance.
#[derive(Clone, Copy)]
struct FormHandlers {
    validity: RwSignal<FieldValidity>,
    on_change: Callback<FieldChange>,
    on_submit: Callback<()>,
}

impl FormHandlers {
    /// Update local validity, then hand the edit to the owner as-is.
    fn change(&self, change: FieldChange) {
        let mut transition = None;
        self.validity.update(|v| transition = dispatch_change(v, &change));
        if let Some(invalid) = transition {
            log::debug!(
                "Contact field '{}' validity changed (invalid: {})",
                change.field,
                invalid
            );
        }
        self.on_change.run(change);
    }

    /// Submission is gated only by the disabled button, never here.
    fn submit(&self) {
        self.on_submit.run(());
    }
}

// -----------------------------------------------------------------------------
// 3. Field Rendering
// -----------------------------------------------------------------------------

/// One input (or the message textarea) plus its inline format message.
fn render_field(
    field: ContactField,
    form_data: Signal<ContactFormData>,
    t: Translator,
    snapshot: impl Fn() -> FormSnapshot + Copy + Send + Sync + 'static,
    handlers: FormHandlers,
) -> impl IntoView {
    let value = move || form_data.with(|data| data.get(field).to_string());
    let class = move || style::field_class(field, &snapshot());
    let placeholder = move || t.run(field.placeholder());
    let on_input =
        move |ev: web_sys::Event| handlers.change(FieldChange::new(field, event_target_value(&ev)));

    let control = match field.input_type() {
        Some(input_type) => view! {
            <input
                name=field.name()
                type=input_type
                required=true
                placeholder=placeholder
                class=class
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        None => view! {
            <textarea
                name=field.name()
                required=true
                placeholder=placeholder
                class=class
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    };

    let hint = field
        .invalid_message()
        .zip(field.format_hint())
        .zip(style::hint_class(field))
        .map(|((key, example), hint_class)| {
            view! {
                <Show when=move || snapshot().shows_hint(field)>
                    <p class=hint_class>{move || with_format_hint(&t.run(key), example)}</p>
                </Show>
            }
        });

    view! {
        {control}
        {hint}
    }
}
