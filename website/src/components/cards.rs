use autopilot_core::CONTACT_EMAIL;
use leptos::prelude::*;

use super::badge::Badge;
use crate::data::{Plan, Service, Stat, Step, Testimonial};

fn mailto() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

#[component]
pub fn StatTile(stat: Stat) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-4 text-center">
            <div class="text-sm text-slate-500">{stat.label}</div>
            <div class="text-lg font-semibold">{stat.value}</div>
        </div>
    }
}

#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl p-6 shadow hover:shadow-md transition">
            <div class="flex items-center justify-between">
                <h4 class="font-semibold">{service.title}</h4>
                <div class="text-sm text-slate-500">
                    "Setup: "<strong>{service.setup}</strong>
                </div>
            </div>
            <p class="mt-3 text-slate-600 text-sm">{service.desc}</p>
            <div class="mt-4 flex items-center justify-between">
                <div class="text-sm text-slate-500">"Maint: "{service.maint}</div>
                <a href=mailto() class="text-sm text-blue-600">"Get demo"</a>
            </div>
        </div>
    }
}

#[component]
pub fn PlanCard(plan: Plan) -> impl IntoView {
    let class = if plan.popular {
        "bg-white rounded-2xl p-6 shadow ring-2 ring-blue-100"
    } else {
        "bg-white rounded-2xl p-6 shadow"
    };

    view! {
        <div class=class>
            <div class="flex items-center justify-between">
                <div>
                    <div class="text-lg font-semibold">{plan.name}</div>
                    <div class="text-sm text-slate-500">
                        {format!("Setup {} \u{2022} {}", plan.setup, plan.maint)}
                    </div>
                </div>
                {plan.popular.then(|| view! { <Badge>"Popular"</Badge> })}
            </div>
            <ul class="mt-4 space-y-2 text-sm text-slate-600">
                {plan.features.iter().map(|feature| {
                    view! { <li>{format!("\u{2022} {feature}")}</li> }
                }).collect_view()}
            </ul>
            <div class="mt-6">
                <a href=mailto() class="inline-block bg-blue-600 text-white px-4 py-2 rounded-lg">
                    "Get started"
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn StepCard(step: Step) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl p-6 shadow">
            <div class="flex items-center gap-4">
                <div class="w-10 h-10 rounded-full bg-blue-600 text-white flex items-center justify-center font-semibold">
                    {step.number}
                </div>
                <div>
                    <div class="font-semibold">{step.title}</div>
                    <div class="text-sm text-slate-600 mt-1">{step.desc}</div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl p-6 shadow">
            <div class="italic text-slate-700">
                {format!("\u{201C}{}\u{201D}", testimonial.quote)}
            </div>
            <div class="mt-4 text-sm text-slate-500">
                {format!("\u{2014} {}", testimonial.by)}
            </div>
        </div>
    }
}
