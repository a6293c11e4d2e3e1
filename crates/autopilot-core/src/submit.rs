//! Lead submission flow
//!
//! [`submit_lead`] is the pipeline: validate the phone, fetch an optional
//! reCAPTCHA token, post the payload. [`LeadForm`] owns the form fields and
//! the [`SubmissionStatus`] around it and is the only thing that moves the
//! status in and out of `Submitting`.

use crate::config::SiteConfig;
use crate::content::SUCCESS_MESSAGE;
use crate::lead::{FormField, FormState, LeadPayload};
use crate::phone::normalize_phone;
use crate::prelude::*;
use crate::recaptcha::{acquire_token, LocalTokenProvider};
use crate::status::SubmissionStatus;
use crate::transport::LocalLeadTransport;

/// Validate and deliver one lead.
///
/// A phone that fails validation returns before any token request or
/// network call. Non-2xx responses come back as [`Error::Status`] with the
/// response body attached for logging.
pub async fn submit_lead<T, P>(
    config: &SiteConfig,
    form: &FormState,
    transport: &T,
    tokens: &P,
) -> Result<()>
where
    T: LocalLeadTransport,
    P: LocalTokenProvider,
{
    let phone = normalize_phone(&form.phone)?;
    let token = acquire_token(config, tokens).await;

    let payload = LeadPayload::new(form, phone, config.client_api_key.as_str(), token);
    let body = serde_json::to_string(&payload)?;
    let endpoint = config.lead_endpoint();

    debug!("Posting lead to {}", endpoint);
    let response = transport.post_json(&endpoint, body).await?;

    if response.is_success() {
        info!("Lead accepted (HTTP {})", response.status);
        Ok(())
    } else {
        Err(Error::status(response.status, response.body))
    }
}

/// Contact form state: the three fields plus the submission status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    fields: FormState,
    status: SubmissionStatus,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormState {
        &self.fields
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Enter `Submitting` and hand back a snapshot of the fields to send.
    ///
    /// Returns `None` while another attempt is still in flight; the extra
    /// attempt is dropped rather than queued.
    pub fn begin_submit(&mut self) -> Option<FormState> {
        if self.status.is_submitting() {
            debug!("Submission already in flight, ignoring");
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        Some(self.fields.clone())
    }

    /// Leave `Submitting` with the outcome of [`submit_lead`].
    ///
    /// Success clears the fields. Any failure keeps them for re-editing.
    pub fn complete(&mut self, outcome: Result<()>) {
        self.status = match outcome {
            Ok(()) => {
                self.fields.clear();
                SubmissionStatus::Succeeded(SUCCESS_MESSAGE.to_string())
            }
            Err(e) => {
                if e.is_submission() {
                    error!("Lead submission failed: {}", e);
                } else {
                    debug!("Lead rejected: {}", e);
                }
                SubmissionStatus::Failed(e.user_message().to_string())
            }
        };
    }

    /// Run a whole attempt against the given seams.
    pub async fn submit<T, P>(
        &mut self,
        config: &SiteConfig,
        transport: &T,
        tokens: &P,
    ) -> &SubmissionStatus
    where
        T: LocalLeadTransport,
        P: LocalTokenProvider,
    {
        let Some(snapshot) = self.begin_submit() else {
            return &self.status;
        };
        let outcome = submit_lead(config, &snapshot, transport, tokens).await;
        self.complete(outcome);
        &self.status
    }
}
