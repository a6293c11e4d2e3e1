//! Fixed user-facing strings and wire constants

/// Address offered whenever the form cannot be used
pub const CONTACT_EMAIL: &str = "hello@autopilotai.example";

/// Shown after the webhook accepts a lead
pub const SUCCESS_MESSAGE: &str = "Thanks \u{2014} audit requested. We will contact you shortly.";

/// Shown for any submission failure. Must mention [`CONTACT_EMAIL`].
pub const SUBMIT_FAILED_MESSAGE: &str = "Error submitting. Please email hello@autopilotai.example";

/// Shown when the phone number does not validate
pub const PHONE_HINT: &str =
    "Please enter a valid phone number with country code, e.g. +919876543210";

/// Value of `lead.source` on every payload
pub const LEAD_SOURCE: &str = "site";

/// reCAPTCHA v3 action name for the lead form
pub const RECAPTCHA_ACTION: &str = "submit";

/// Path appended to the API base URL
pub const LEAD_WEBHOOK_PATH: &str = "/webhooks/lead";
