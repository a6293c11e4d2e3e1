//! # autopilot-core - Lead Capture Logic
//!
//! Everything on the AutoPilot AI Systems site that has behavior lives here,
//! independent of the browser so it can be tested natively. The `website`
//! crate supplies browser implementations of the seams.
//!
//! ## Public API
//!
//! ### Form and Payload (`lead`, `status`)
//! - [`FormState`] / [`FormField`] - Raw contact form values
//! - [`LeadPayload`] - JSON body posted to `/webhooks/lead`
//! - [`SubmissionStatus`] - Idle, Submitting, Succeeded or Failed
//!
//! ### Validation (`phone`)
//! - [`normalize_phone()`] - Strip formatting and check `+?` plus 8-15 digits
//!
//! ### Submission (`submit`)
//! - [`submit_lead()`] - Validate, fetch optional token, post
//! - [`LeadForm`] - Owns fields and status, guards against double submits
//!
//! ### Seams (`transport`, `recaptcha`)
//! - [`LocalLeadTransport`] - JSON POST
//! - [`LocalTokenProvider`] - reCAPTCHA `execute`
//! - [`LocalScriptInjector`] / [`ScriptLoader`] - Init-once script loading
//!
//! ### Configuration (`config`, `content`)
//! - [`SiteConfig`] - `API_BASE_URL`, `CLIENT_API_KEY`, `RECAPTCHA_SITE_KEY`
//! - Fixed messages such as [`SUCCESS_MESSAGE`] and [`PHONE_HINT`]

pub mod config;
pub mod content;
pub mod error;
pub mod lead;
pub mod phone;
pub mod prelude;
pub mod recaptcha;
pub mod status;
pub mod submit;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::SiteConfig;
pub use content::{
    CONTACT_EMAIL, LEAD_SOURCE, LEAD_WEBHOOK_PATH, PHONE_HINT, RECAPTCHA_ACTION, SUBMIT_FAILED_MESSAGE,
    SUCCESS_MESSAGE,
};
pub use error::{Error, Result};
pub use lead::{FormField, FormState, Lead, LeadDetails, LeadPayload};
pub use phone::normalize_phone;
pub use recaptcha::{
    acquire_token, LoadOutcome, LoadState, LocalScriptInjector, LocalTokenProvider, ScriptInjector,
    ScriptLoader, TokenProvider,
};
pub use status::SubmissionStatus;
pub use submit::{submit_lead, LeadForm};
pub use transport::{LeadTransport, LocalLeadTransport, TransportResponse};
