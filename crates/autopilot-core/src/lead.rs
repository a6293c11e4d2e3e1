//! Form fields and the webhook payload

use serde::{Deserialize, Serialize};

use crate::content::LEAD_SOURCE;

/// Which input an edit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Business,
    Phone,
}

/// Raw values typed into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub business: String,
    pub phone: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Business => &self.business,
            FormField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Business => &mut self.business,
            FormField::Phone => &mut self.phone,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.business.is_empty() && self.phone.is_empty()
    }
}

/// Free-form details forwarded alongside the lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadDetails {
    pub business: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    /// Already normalized
    pub phone: String,
    pub source: String,
    pub payload: LeadDetails,
}

/// Body of `POST /webhooks/lead`. Built per submission, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub lead: Lead,
    pub client_api_key: String,
    /// Empty when reCAPTCHA is disabled or failed
    pub recaptcha_token: String,
}

impl LeadPayload {
    pub fn new(
        form: &FormState,
        normalized_phone: impl Into<String>,
        client_api_key: impl Into<String>,
        recaptcha_token: impl Into<String>,
    ) -> Self {
        Self {
            lead: Lead {
                name: form.name.clone(),
                phone: normalized_phone.into(),
                source: LEAD_SOURCE.to_string(),
                payload: LeadDetails {
                    business: form.business.clone(),
                },
            },
            client_api_key: client_api_key.into(),
            recaptcha_token: recaptcha_token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jane() -> FormState {
        FormState {
            name: "Jane".to_string(),
            business: "Acme".to_string(),
            phone: "+91 98765 43210".to_string(),
        }
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = LeadPayload::new(&jane(), "+919876543210", "client-key", "tok");
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "lead": {
                    "name": "Jane",
                    "phone": "+919876543210",
                    "source": "site",
                    "payload": { "business": "Acme" }
                },
                "clientApiKey": "client-key",
                "recaptchaToken": "tok"
            })
        );
    }

    #[test]
    fn test_payload_empty_token_is_present() {
        let payload = LeadPayload::new(&jane(), "+919876543210", "", "");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["recaptchaToken"], json!(""));
        assert_eq!(value["clientApiKey"], json!(""));
    }

    #[test]
    fn test_form_set_and_get() {
        let mut form = FormState::default();
        form.set(FormField::Phone, "12345");
        form.set(FormField::Name, "Jane");

        assert_eq!(form.get(FormField::Phone), "12345");
        assert_eq!(form.get(FormField::Name), "Jane");
        assert_eq!(form.get(FormField::Business), "");
        assert!(!form.is_empty());
    }

    #[test]
    fn test_form_clear() {
        let mut form = jane();
        form.clear();
        assert!(form.is_empty());
        assert_eq!(form, FormState::default());
    }
}
