use leptos::prelude::*;

use crate::data::{BRAND_NAME, FOOTER_TAGLINE};

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="max-w-6xl mx-auto px-6 pb-12 text-center text-sm text-slate-500">
            {format!("\u{00A9} {} {} \u{2022} {}", current_year(), BRAND_NAME, FOOTER_TAGLINE)}
        </footer>
    }
}
