pub mod browser;
pub mod components;
pub mod data;
pub mod pages;

use autopilot_core::recaptcha::ScriptLoader;
use browser::{site_config, ScriptTagInjector};
use components::footer::Footer;
use components::navbar::Navbar;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use pages::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="AutoPilot AI Systems \u{2014} Automate tasks. Boost revenue." />
        <Meta
            name="description"
            content="AI automations for SMBs: WhatsApp follow-ups, appointment reminders and onboarding flows, live within 24\u{2013}72 hours."
        />
        <RecaptchaBootstrap />
        <div class="min-h-screen bg-gray-50 text-gray-900 antialiased">
            <Navbar />
            <Home />
            <Footer />
        </div>
    }
}

/// Injects the reCAPTCHA script once per page load when a site key is set.
#[component]
fn RecaptchaBootstrap() -> impl IntoView {
    Effect::new(move || {
        let config = site_config();
        if !config.recaptcha_enabled() {
            log::debug!("reCAPTCHA disabled, no site key");
            return;
        }
        leptos::task::spawn_local(async move {
            match ScriptLoader::global()
                .ensure_loaded(&config, &ScriptTagInjector)
                .await
            {
                Ok(outcome) => log::debug!("reCAPTCHA bootstrap: {outcome:?}"),
                Err(e) => log::warn!("reCAPTCHA bootstrap failed: {e}"),
            }
        });
    });

    ()
}
