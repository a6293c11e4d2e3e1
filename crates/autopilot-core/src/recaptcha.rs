//! reCAPTCHA v3 support
//!
//! Two independent pieces:
//! - [`ScriptLoader`] injects the provider script at most once per process.
//! - [`acquire_token`] asks a ready provider for a `"submit"` token before a
//!   lead is posted.
//!
//! Neither is allowed to block a submission. A missing site key, a script
//! that never loaded, or a rejected `execute` all degrade to an empty token.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::config::SiteConfig;
use crate::content::RECAPTCHA_ACTION;
use crate::prelude::*;

/// Access to the provider's `execute` capability
#[trait_variant::make(TokenProvider: Send)]
pub trait LocalTokenProvider {
    /// Script loaded and `execute` exposed
    fn is_ready(&self) -> bool;

    /// Request a token scoped to `action`
    async fn execute(&self, site_key: &str, action: &str) -> Result<String>;
}

/// Adds a script tag and resolves once it has loaded or failed
#[trait_variant::make(ScriptInjector: Send)]
pub trait LocalScriptInjector {
    async fn inject(&self, src: &str) -> Result<()>;
}

/// Best-effort token for the lead payload.
///
/// Never waits on the script: if the provider is not ready yet the
/// submission goes out with an empty token.
pub async fn acquire_token<P: LocalTokenProvider>(config: &SiteConfig, provider: &P) -> String {
    let Some(site_key) = config.recaptcha_site_key() else {
        return String::new();
    };

    if !provider.is_ready() {
        debug!("reCAPTCHA not ready, submitting without token");
        return String::new();
    }

    match provider.execute(site_key, RECAPTCHA_ACTION).await {
        Ok(token) => token,
        Err(e) => {
            warn!("reCAPTCHA execution failed: {}", e);
            String::new()
        }
    }
}

/// Loader lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Loaded,
}

impl LoadState {
    const fn as_u8(self) -> u8 {
        match self {
            LoadState::NotLoaded => 0,
            LoadState::Loading => 1,
            LoadState::Loaded => 2,
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => LoadState::Loading,
            2 => LoadState::Loaded,
            _ => LoadState::NotLoaded,
        }
    }
}

/// What [`ScriptLoader::ensure_loaded`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No site key configured
    Disabled,
    /// Another caller already loaded it
    AlreadyLoaded,
    /// Another caller is loading it right now
    InProgress,
    /// This call injected the script and it loaded
    Loaded,
}

/// Init-once guard for the provider script.
///
/// The browser build uses [`ScriptLoader::global`]. Only the caller that
/// wins the `NotLoaded -> Loading` swap injects; a failed load drops back to
/// `NotLoaded` so a later init can try again.
#[derive(Debug)]
pub struct ScriptLoader {
    state: AtomicU8,
}

static GLOBAL_LOADER: ScriptLoader = ScriptLoader::new();

impl Default for ScriptLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptLoader {
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(LoadState::NotLoaded.as_u8()),
        }
    }

    /// Process-wide loader
    pub fn global() -> &'static ScriptLoader {
        &GLOBAL_LOADER
    }

    pub fn state(&self) -> LoadState {
        LoadState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn is_loaded(&self) -> bool {
        self.state() == LoadState::Loaded
    }

    fn try_claim(&self) -> std::result::Result<(), LoadState> {
        self.state
            .compare_exchange(
                LoadState::NotLoaded.as_u8(),
                LoadState::Loading.as_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map(|_| ())
            .map_err(LoadState::from_u8)
    }

    fn set(&self, state: LoadState) {
        self.state.store(state.as_u8(), Ordering::Release);
    }

    /// Inject the script for the configured site key unless that already
    /// happened (or is happening) in this process.
    pub async fn ensure_loaded<I: LocalScriptInjector>(
        &self,
        config: &SiteConfig,
        injector: &I,
    ) -> Result<LoadOutcome> {
        let Some(src) = config.recaptcha_script_url() else {
            return Ok(LoadOutcome::Disabled);
        };

        match self.try_claim() {
            Ok(()) => {}
            Err(LoadState::Loaded) => return Ok(LoadOutcome::AlreadyLoaded),
            Err(_) => return Ok(LoadOutcome::InProgress),
        }

        debug!("Loading reCAPTCHA script: {}", src);
        match injector.inject(&src).await {
            Ok(()) => {
                self.set(LoadState::Loaded);
                info!("reCAPTCHA script loaded");
                Ok(LoadOutcome::Loaded)
            }
            Err(e) => {
                self.set(LoadState::NotLoaded);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakeInjector, FakeTokens};

    fn with_key() -> SiteConfig {
        SiteConfig {
            recaptcha_site_key: "site-key".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_token_skipped_without_site_key() {
        let tokens = FakeTokens::ready("tok");
        let token = acquire_token(&SiteConfig::default(), &tokens).await;

        assert_eq!(token, "");
        assert_eq!(tokens.executions.get(), 0);
    }

    #[tokio::test]
    async fn test_token_skipped_when_not_ready() {
        let tokens = FakeTokens::not_loaded();
        let token = acquire_token(&with_key(), &tokens).await;

        assert_eq!(token, "");
        assert_eq!(tokens.executions.get(), 0);
    }

    #[tokio::test]
    async fn test_token_uses_submit_action() {
        let tokens = FakeTokens::ready("tok-123");
        let token = acquire_token(&with_key(), &tokens).await;

        assert_eq!(token, "tok-123");
        assert_eq!(tokens.last_action.borrow().as_deref(), Some("submit"));
    }

    #[tokio::test]
    async fn test_token_rejection_downgrades_to_empty() {
        let tokens = FakeTokens::rejecting();
        let token = acquire_token(&with_key(), &tokens).await;

        assert_eq!(token, "");
        assert_eq!(tokens.executions.get(), 1);
    }

    #[tokio::test]
    async fn test_loader_disabled_without_key() {
        let loader = ScriptLoader::new();
        let injector = FakeInjector::default();

        let outcome = loader
            .ensure_loaded(&SiteConfig::default(), &injector)
            .await
            .unwrap();

        assert_eq!(outcome, LoadOutcome::Disabled);
        assert!(injector.injected.borrow().is_empty());
        assert_eq!(loader.state(), LoadState::NotLoaded);
    }

    #[tokio::test]
    async fn test_loader_injects_once() {
        let loader = ScriptLoader::new();
        let injector = FakeInjector::default();
        let config = with_key();

        let first = loader.ensure_loaded(&config, &injector).await.unwrap();
        let second = loader.ensure_loaded(&config, &injector).await.unwrap();

        assert_eq!(first, LoadOutcome::Loaded);
        assert_eq!(second, LoadOutcome::AlreadyLoaded);
        assert!(loader.is_loaded());
        assert_eq!(
            injector.injected.borrow().as_slice(),
            ["https://www.google.com/recaptcha/api.js?render=site-key"]
        );
    }

    #[tokio::test]
    async fn test_loader_reports_in_progress() {
        let loader = ScriptLoader::new();
        loader.set(LoadState::Loading);
        let injector = FakeInjector::default();

        let outcome = loader.ensure_loaded(&with_key(), &injector).await.unwrap();

        assert_eq!(outcome, LoadOutcome::InProgress);
        assert!(injector.injected.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_loader_failure_allows_retry() {
        let loader = ScriptLoader::new();
        let config = with_key();

        let failing = FakeInjector {
            fail: true,
            ..Default::default()
        };
        let err = loader.ensure_loaded(&config, &failing).await.unwrap_err();
        assert!(matches!(err, Error::ScriptLoad { .. }));
        assert_eq!(loader.state(), LoadState::NotLoaded);

        let working = FakeInjector::default();
        let outcome = loader.ensure_loaded(&config, &working).await.unwrap();
        assert_eq!(outcome, LoadOutcome::Loaded);
    }

    #[test]
    fn test_load_state_roundtrip() {
        for state in [LoadState::NotLoaded, LoadState::Loading, LoadState::Loaded] {
            assert_eq!(LoadState::from_u8(state.as_u8()), state);
        }
    }
}
