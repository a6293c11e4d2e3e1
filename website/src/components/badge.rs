use leptos::prelude::*;

const BADGE_CLASS: &str = "bg-blue-600 text-white px-3 py-1 rounded-xl text-sm";

#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class=BADGE_CLASS>
            {children()}
        </span>
    }
}
