use leptos::prelude::*;

use crate::data::{nav_links, BRAND_NAME, TAGLINE};

#[component]
pub fn Navbar() -> impl IntoView {
    let links = nav_links();

    view! {
        <header class="bg-white shadow-sm">
            <div class="max-w-6xl mx-auto px-6 py-6 flex items-center justify-between">
                <a href="#" class="flex items-center gap-4">
                    <div class="w-12 h-12 rounded-lg bg-blue-600 flex items-center justify-center text-white font-bold">
                        "AP"
                    </div>
                    <div>
                        <div class="text-lg font-semibold">{BRAND_NAME}</div>
                        <div class="text-sm text-slate-500">{TAGLINE}</div>
                    </div>
                </a>

                <nav class="hidden md:flex items-center gap-6 text-sm">
                    {links.into_iter().map(|link| {
                        let class = if link.primary {
                            "text-white bg-blue-600 px-4 py-2 rounded-lg"
                        } else {
                            "hover:text-blue-600"
                        };
                        view! { <a href=link.href class=class>{link.label}</a> }
                    }).collect_view()}
                </nav>
            </div>
        </header>
    }
}
