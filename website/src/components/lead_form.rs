use autopilot_core::{submit_lead, FormField, LeadForm, CONTACT_EMAIL};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::browser::{site_config, FetchTransport, GrecaptchaTokens};

const INPUT_CLASS: &str = "px-4 py-3 rounded-lg border border-slate-200";

#[component]
fn FormInput(
    form: RwSignal<LeadForm>,
    field: FormField,
    name: &'static str,
    placeholder: &'static str,
    #[prop(optional)] input_mode: Option<&'static str>,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <input
            required
            name=name
            placeholder=placeholder
            inputmode=input_mode
            title=hint
            class=INPUT_CLASS
            prop:value=move || form.with(|f| f.fields().get(field).to_string())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| f.set_field(field, value));
            }
        />
    }
}

/// Contact form: validates, optionally attaches a reCAPTCHA token, posts.
#[component]
pub fn LeadCaptureForm() -> impl IntoView {
    let form = RwSignal::new(LeadForm::new());
    let config = site_config();

    let submitting = move || form.with(LeadForm::is_submitting);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(snapshot) = form.try_update(LeadForm::begin_submit).flatten() else {
            return;
        };
        let config = config.clone();

        leptos::task::spawn_local(async move {
            let outcome = submit_lead(&config, &snapshot, &FetchTransport, &GrecaptchaTokens).await;
            form.update(|f| f.complete(outcome));
        });
    };

    let status_line = move || {
        form.with(|f| {
            let status = f.status();
            let message = status.message();
            if message.is_empty() {
                return None;
            }
            let class = if status.is_success() {
                "mt-3 text-sm text-green-600"
            } else {
                "mt-3 text-sm text-red-600"
            };
            let message = message.to_string();
            Some(view! { <div class=class role="status">{message}</div> })
        })
    };

    view! {
        <div>
            <form class="mt-6 grid grid-cols-1 sm:grid-cols-2 gap-4" on:submit=on_submit>
                <FormInput form=form field=FormField::Name name="name" placeholder="Your name" />
                <FormInput form=form field=FormField::Business name="business" placeholder="Business name" />
                <FormInput
                    form=form
                    field=FormField::Phone
                    name="phone"
                    placeholder="Phone / WhatsApp"
                    input_mode="tel"
                    hint="Include country code, e.g. +919876543210"
                />
                <button
                    type="submit"
                    class="bg-blue-600 text-white px-4 py-3 rounded-lg disabled:opacity-60"
                    disabled=submitting
                >
                    {move || if submitting() { "Sending..." } else { "Request Audit" }}
                </button>
            </form>

            {status_line}

            <div class="mt-6 text-sm text-slate-500">
                "Or email us at "
                <a href=format!("mailto:{CONTACT_EMAIL}") class="text-blue-600">{CONTACT_EMAIL}</a>
            </div>
        </div>
    }
}
