//! REST calls to the authentication backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`LoginError::Unavailable`]
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies each get their
//! own [`LoginError`] variant; the caller decides how much of that to surface.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Credentials, QqAuthorization, SessionRecord};
use crate::config::ApiConfig;
use crate::error::LoginError;

/// Remote operations the login controller depends on.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a session via `POST /authorizations/`.
    async fn login(&self, credentials: &Credentials) -> Result<SessionRecord, LoginError>;

    /// Ask the backend for the QQ login URL carrying `state` through the round trip.
    async fn qq_authorization(&self, state: &str) -> Result<QqAuthorization, LoginError>;
}

fn login_endpoint(host: &str) -> String {
    format!("{host}/authorizations/")
}

fn qq_authorization_endpoint(host: &str, state: &str) -> String {
    format!("{host}/oauth/qq/authorization/?state={}", urlencoding::encode(state))
}

/// [`AuthApi`] backed by the browser `fetch` API.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<SessionRecord, LoginError> {
        let url = login_endpoint(self.config.host());
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(|e| LoginError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| LoginError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(LoginError::Status(resp.status()));
            }
            resp.json::<SessionRecord>()
                .await
                .map_err(|e| LoginError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, credentials);
            Err(LoginError::Unavailable)
        }
    }

    async fn qq_authorization(&self, state: &str) -> Result<QqAuthorization, LoginError> {
        let url = qq_authorization_endpoint(self.config.host(), state);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| LoginError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(LoginError::Status(resp.status()));
            }
            resp.json::<QqAuthorization>()
                .await
                .map_err(|e| LoginError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(LoginError::Unavailable)
        }
    }
}
