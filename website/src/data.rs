pub const BRAND_NAME: &str = "AutoPilot AI Systems";
pub const TAGLINE: &str = "Automate tasks. Boost revenue. Install in 24 hours.";
pub const FOOTER_TAGLINE: &str = "Built for quick ROI";

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub primary: bool,
}

pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink { label: "Services", href: "#services", primary: false },
        NavLink { label: "Pricing", href: "#pricing", primary: false },
        NavLink { label: "How it works", href: "#how", primary: false },
        NavLink { label: "Book Audit", href: "#contact", primary: true },
    ]
}

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub fn hero_stats() -> Vec<Stat> {
    vec![
        Stat { label: "24\u{2013}72 hrs", value: "Install" },
        Stat { label: "\u{20B9}15k+", value: "Setup" },
        Stat { label: "\u{20B9}4k+ / mo", value: "Maintenance" },
    ]
}

pub struct Service {
    pub title: &'static str,
    pub setup: &'static str,
    pub maint: &'static str,
    pub desc: &'static str,
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            title: "Lead Follow-Up Bot",
            setup: "\u{20B9}20k",
            maint: "\u{20B9}6k/mo",
            desc: "Instant WhatsApp replies, lead qualification, calendar booking, and CRM sync.",
        },
        Service {
            title: "Appointment Automation",
            setup: "\u{20B9}15k",
            maint: "\u{20B9}5k/mo",
            desc: "Reminders, rescheduling, no-show reduction, feedback collection.",
        },
        Service {
            title: "Real Estate Suite",
            setup: "\u{20B9}35k",
            maint: "\u{20B9}8k/mo",
            desc: "Buyer nurturing, auto brochures, site-visit scheduling, and escalation to sales.",
        },
        Service {
            title: "HR Onboarding",
            setup: "\u{20B9}20k",
            maint: "\u{20B9}4k/mo",
            desc: "Offer letters, document collection, joining reminders, and welcome flows.",
        },
        Service {
            title: "Coaching Funnel",
            setup: "\u{20B9}25k",
            maint: "\u{20B9}5k/mo",
            desc: "Lead \u{2192} nurture \u{2192} payment \u{2192} batch allocation, all automated.",
        },
        Service {
            title: "Custom Automation",
            setup: "Custom",
            maint: "Custom",
            desc: "Integration with existing CRM, multi-channel automation, or bespoke flows.",
        },
    ]
}

pub struct Plan {
    pub name: &'static str,
    pub setup: &'static str,
    pub maint: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            name: "Starter",
            setup: "\u{20B9}15k",
            maint: "\u{20B9}4k/mo",
            features: &["1 automation", "Email & WhatsApp", "Basic reporting"],
            popular: false,
        },
        Plan {
            name: "Growth",
            setup: "\u{20B9}25k",
            maint: "\u{20B9}6k/mo",
            features: &["Up to 3 automations", "CRM sync", "Weekly tuning"],
            popular: true,
        },
        Plan {
            name: "Scale",
            setup: "\u{20B9}45k",
            maint: "\u{20B9}10k/mo",
            features: &["Custom flows", "Dedicated support", "Advanced analytics"],
            popular: false,
        },
    ]
}

pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub desc: &'static str,
}

pub fn steps() -> Vec<Step> {
    vec![
        Step {
            number: 1,
            title: "Free 15-min audit",
            desc: "We map your workflows and identify quick wins.",
        },
        Step {
            number: 2,
            title: "Build & Deploy",
            desc: "We deliver in 24\u{2013}72 hours using Make.com, WhatsApp Cloud API, and OpenAI.",
        },
        Step {
            number: 3,
            title: "Monitor & Improve",
            desc: "We optimize prompts, message timing, and report monthly.",
        },
    ]
}

pub struct Testimonial {
    pub quote: &'static str,
    pub by: &'static str,
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial { quote: "We increased follow-ups by 300% in 7 days.", by: "Real Estate Developer" },
        Testimonial { quote: "70% fewer no-shows at our clinic.", by: "Clinic Owner" },
        Testimonial { quote: "Doubled enrollments in 30 days.", by: "Coaching Institute" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_target_page_sections() {
        let links = nav_links();
        assert!(links.iter().all(|l| l.href.starts_with('#')));
        assert_eq!(links.iter().filter(|l| l.primary).count(), 1);
        assert!(links.iter().any(|l| l.href == "#contact" && l.primary));
    }

    #[test]
    fn test_exactly_one_popular_plan() {
        let popular: Vec<_> = plans().into_iter().filter(|p| p.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Growth");
    }

    #[test]
    fn test_plans_have_features() {
        assert!(plans().iter().all(|p| !p.features.is_empty()));
    }

    #[test]
    fn test_steps_are_numbered_in_order() {
        let numbers: Vec<u8> = steps().iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_content_counts() {
        assert_eq!(hero_stats().len(), 3);
        assert_eq!(services().len(), 6);
        assert_eq!(testimonials().len(), 3);
    }
}
