//! In-memory fakes for the transport, token and script seams

use std::cell::{Cell, RefCell};

use crate::error::{Error, Result};
use crate::recaptcha::{LocalScriptInjector, LocalTokenProvider};
use crate::transport::{LocalLeadTransport, TransportResponse};

/// How the fake webhook answers
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Status(u16, &'static str),
    Offline,
}

/// Records every request and answers with a fixed [`Reply`]
#[derive(Debug)]
pub struct FakeTransport {
    reply: Reply,
    pub requests: RefCell<Vec<(String, String)>>,
}

impl FakeTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Body of the most recent request, parsed
    pub fn last_body(&self) -> serde_json::Value {
        let requests = self.requests.borrow();
        let (_, body) = requests.last().expect("no request recorded");
        serde_json::from_str(body).expect("request body is not JSON")
    }
}

impl LocalLeadTransport for FakeTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse> {
        self.requests.borrow_mut().push((url.to_string(), body));
        match self.reply {
            Reply::Status(status, body) => Ok(TransportResponse::new(status, body)),
            Reply::Offline => Err(Error::transport("network unreachable")),
        }
    }
}

/// reCAPTCHA stand-in. `token: None` makes `execute` reject.
#[derive(Debug)]
pub struct FakeTokens {
    pub ready: bool,
    pub token: Option<&'static str>,
    pub executions: Cell<usize>,
    pub last_action: RefCell<Option<String>>,
}

impl FakeTokens {
    pub fn ready(token: &'static str) -> Self {
        Self {
            ready: true,
            token: Some(token),
            executions: Cell::new(0),
            last_action: RefCell::new(None),
        }
    }

    pub fn not_loaded() -> Self {
        Self {
            ready: false,
            ..Self::ready("unused")
        }
    }

    pub fn rejecting() -> Self {
        Self {
            token: None,
            ..Self::ready("unused")
        }
    }
}

impl LocalTokenProvider for FakeTokens {
    fn is_ready(&self) -> bool {
        self.ready
    }

    async fn execute(&self, _site_key: &str, action: &str) -> Result<String> {
        self.executions.set(self.executions.get() + 1);
        *self.last_action.borrow_mut() = Some(action.to_string());
        self.token
            .map(str::to_string)
            .ok_or_else(|| Error::token_unavailable("execute rejected"))
    }
}

/// Counts script injections, optionally failing them
#[derive(Debug, Default)]
pub struct FakeInjector {
    pub fail: bool,
    pub injected: RefCell<Vec<String>>,
}

impl LocalScriptInjector for FakeInjector {
    async fn inject(&self, src: &str) -> Result<()> {
        self.injected.borrow_mut().push(src.to_string());
        if self.fail {
            Err(Error::script_load("blocked by client"))
        } else {
            Ok(())
        }
    }
}
