use autopilot_core::CONTACT_EMAIL;
use leptos::prelude::*;

use crate::components::cards::{PlanCard, ServiceCard, StatTile, StepCard, TestimonialCard};
use crate::components::icons::{ChevronRight, Mail, PlayCircle};
use crate::components::lead_form::LeadCaptureForm;
use crate::data::{hero_stats, plans, services, steps, testimonials};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main class="max-w-6xl mx-auto px-6 py-12">
            <Hero />
            <Services />
            <Pricing />
            <HowItWorks />
            <Proof />
            <Contact />
        </main>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="grid grid-cols-1 md:grid-cols-2 gap-8 items-center">
            <div>
                <h1 class="text-4xl md:text-5xl font-extrabold leading-tight">
                    "Automate tasks. Boost revenue. Install in 24 hours."
                </h1>
                <p class="mt-4 text-lg text-slate-600">
                    "AI automations for SMBs \u{2014} WhatsApp follow-ups, appointment reminders, onboarding flows \u{2014} delivered and live within 24\u{2013}72 hours."
                </p>

                <div class="mt-6 flex gap-4">
                    <a
                        href=format!("mailto:{CONTACT_EMAIL}")
                        class="inline-flex items-center gap-2 bg-blue-600 text-white px-5 py-3 rounded-lg font-medium"
                    >
                        <Mail class="w-4 h-4" />
                        "Book Free Audit"
                    </a>
                    <a
                        href="#services"
                        class="inline-flex items-center gap-2 border border-slate-200 px-5 py-3 rounded-lg text-sm"
                    >
                        "See Services"
                        <ChevronRight class="w-4 h-4" />
                    </a>
                </div>

                <div class="mt-8 grid grid-cols-2 gap-4 sm:grid-cols-3">
                    {hero_stats().into_iter().map(|stat| view! { <StatTile stat=stat /> }).collect_view()}
                </div>
            </div>

            <div class="space-y-4">
                <div class="bg-white rounded-2xl shadow p-4">
                    <div class="h-56 bg-slate-100 rounded-md flex flex-col items-center justify-center gap-2 text-slate-400">
                        <PlayCircle class="w-10 h-10" />
                        "Demo video placeholder"
                    </div>
                    <div class="mt-3 text-sm text-slate-600">
                        "Show a 60\u{2013}90s demo: lead enters \u{2192} bot replies \u{2192} booking. Record with Loom."
                    </div>
                </div>

                <div class="bg-white rounded-2xl shadow p-4">
                    <h3 class="font-semibold">"Quick ROI example"</h3>
                    <p class="text-sm text-slate-600 mt-2">
                        "Replace one staff member (\u{20B9}25k/month) with automations: Setup \u{20B9}20k + Maint \u{20B9}6k \u{2014} break-even in 1 month."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Services() -> impl IntoView {
    view! {
        <section id="services" class="mt-16">
            <h2 class="text-2xl font-bold">"Services"</h2>
            <p class="mt-2 text-slate-600">"Pick a turnkey automation and go live in days."</p>

            <div class="mt-6 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                {services().into_iter().map(|service| view! { <ServiceCard service=service /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="mt-16">
            <h2 class="text-2xl font-bold">"Pricing"</h2>
            <p class="mt-2 text-slate-600">
                "Simple transparent pricing \u{2014} setup + monthly maintenance. Bundle discounts available."
            </p>

            <div class="mt-6 grid grid-cols-1 md:grid-cols-3 gap-6">
                {plans().into_iter().map(|plan| view! { <PlanCard plan=plan /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how" class="mt-16">
            <h2 class="text-2xl font-bold">"How it works"</h2>
            <div class="mt-4 grid grid-cols-1 md:grid-cols-3 gap-6">
                {steps().into_iter().map(|step| view! { <StepCard step=step /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Proof() -> impl IntoView {
    view! {
        <section class="mt-16">
            <h2 class="text-2xl font-bold">"Proof"</h2>
            <div class="mt-6 grid grid-cols-1 md:grid-cols-3 gap-6">
                {testimonials()
                    .into_iter()
                    .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="mt-16 bg-gradient-to-r from-white to-slate-50 p-8 rounded-2xl">
            <div class="max-w-3xl">
                <h2 class="text-2xl font-bold">"Book a free audit"</h2>
                <p class="text-slate-600 mt-2">
                    "15 minutes \u{2014} we\u{2019}ll identify the single automation that will move the needle for your business."
                </p>
                <LeadCaptureForm />
            </div>
        </section>
    }
}
