//! Submit and OAuth flows behind the login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginPage` owns the signals; this controller owns the side effects
//! (HTTP, storage, navigation). It is generic over its environment so the full
//! flow runs natively in tests with in-memory fakes.
//!
//! ERROR HANDLING
//! ==============
//! Any failure after validation, whether transport, status, decode, or
//! storage, lands the form in the same "incorrect credentials" state. The
//! concrete cause goes to the console.

#[cfg(test)]
#[path = "login_controller_test.rs"]
mod login_controller_test;

use crate::config::ApiConfig;
use crate::error::LoginError;
use crate::net::api::{AuthApi, HttpAuthApi};
use crate::net::types::Credentials;
use crate::state::login::LoginForm;
use crate::util::navigation::{BrowserNavigator, Navigator};
use crate::util::query::non_empty_query_value;
use crate::util::storage::{BrowserStorage, KeyValueStore, SessionStores};

pub const NEXT_PARAM: &str = "next";
pub const DEFAULT_LOGIN_REDIRECT: &str = "/index.html";
pub const DEFAULT_OAUTH_STATE: &str = "/";

/// Result of a full [`LoginController::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid,
    /// Login succeeded and the browser was sent to this target.
    Redirected(String),
    /// The attempt failed after validation.
    Rejected(LoginError),
}

impl SubmitOutcome {
    /// Reflect the outcome in the form: a rejection shows the bad-credentials message.
    pub fn apply_to(&self, form: &mut LoginForm) {
        if let Self::Rejected(_) = self {
            form.reject_credentials();
        }
    }

    /// Whether the page is still shown and may accept another submit.
    pub fn keeps_page(&self) -> bool {
        !matches!(self, Self::Redirected(_))
    }
}

pub struct LoginController<A, N, S> {
    api: A,
    navigator: N,
    stores: SessionStores<S>,
}

/// Controller wired to `fetch`, `window.location`, and web storage.
pub type BrowserLoginController = LoginController<HttpAuthApi, BrowserNavigator, BrowserStorage>;

impl BrowserLoginController {
    pub fn browser(config: ApiConfig) -> Self {
        Self::new(HttpAuthApi::new(config), BrowserNavigator, SessionStores::browser())
    }
}

impl<A, N, S> LoginController<A, N, S>
where
    A: AuthApi,
    N: Navigator,
    S: KeyValueStore,
{
    pub fn new(api: A, navigator: N, stores: SessionStores<S>) -> Self {
        Self { api, navigator, stores }
    }

    pub fn stores(&self) -> &SessionStores<S> {
        &self.stores
    }

    /// Post-login destination: the `next` query parameter or `/index.html`.
    pub fn redirect_target(&self) -> String {
        non_empty_query_value(&self.navigator.search(), NEXT_PARAM)
            .unwrap_or_else(|| DEFAULT_LOGIN_REDIRECT.to_owned())
    }

    /// Log in, persist the session, and navigate away.
    ///
    /// Returns the navigation target on success.
    ///
    /// # Errors
    ///
    /// Returns the first failure from the API call, storage, or navigation.
    pub async fn authenticate(&self, credentials: &Credentials, remember: bool) -> Result<String, LoginError> {
        let record = self.api.login(credentials).await?;
        self.stores.persist(&record, remember)?;
        let target = self.redirect_target();
        self.navigator.assign(&target)?;
        Ok(target)
    }

    /// Validate `form` and, when valid, run [`Self::submit_validated`].
    ///
    /// On failure the form is switched to the rejected-credentials message.
    pub async fn submit(&self, form: &mut LoginForm) -> SubmitOutcome {
        let Some(credentials) = form.validate() else {
            return SubmitOutcome::Invalid;
        };
        let outcome = self.submit_validated(&credentials, form.remember).await;
        outcome.apply_to(form);
        outcome
    }

    /// Run [`Self::authenticate`] for already validated credentials, logging
    /// any failure.
    ///
    /// The caller applies the outcome to its form with [`SubmitOutcome::apply_to`].
    pub async fn submit_validated(&self, credentials: &Credentials, remember: bool) -> SubmitOutcome {
        match self.authenticate(credentials, remember).await {
            Ok(target) => SubmitOutcome::Redirected(target),
            Err(e) => {
                leptos::logging::warn!("login failed: {e}");
                SubmitOutcome::Rejected(e)
            }
        }
    }

    /// Start the QQ OAuth handoff, carrying `next` (or `/`) as state.
    ///
    /// Failures are only logged; the page shows nothing.
    ///
    /// # Errors
    ///
    /// Returns the API or navigation failure so callers can observe it.
    pub async fn qq_login(&self) -> Result<String, LoginError> {
        let state = non_empty_query_value(&self.navigator.search(), NEXT_PARAM)
            .unwrap_or_else(|| DEFAULT_OAUTH_STATE.to_owned());
        let result = self.start_qq_login(&state).await;
        if let Err(e) = &result {
            leptos::logging::warn!("qq login failed: {e}");
        }
        result
    }

    async fn start_qq_login(&self, state: &str) -> Result<String, LoginError> {
        let authorization = self.api.qq_authorization(state).await?;
        self.navigator.assign(&authorization.auth_url)?;
        Ok(authorization.auth_url)
    }
}
