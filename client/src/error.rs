//! Error type shared by the login flow and its browser adapters.
//!
//! ERROR HANDLING
//! ==============
//! Every variant ends the current submit attempt the same way: the form shows
//! the "incorrect credentials" message. The variants exist so the console log
//! can say what actually went wrong.

/// Failure raised by the network layer, browser storage, or navigation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The response body did not match the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Reading or writing browser storage failed.
    #[error("storage error: {0}")]
    Storage(String),
    /// The browser refused the navigation.
    #[error("navigation failed: {0}")]
    Navigation(String),
    /// Browser-only functionality invoked outside the browser.
    #[error("not available on server")]
    Unavailable,
}
