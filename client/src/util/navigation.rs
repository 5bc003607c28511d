//! Access to the page location.
//!
//! Requires a browser environment; SSR reads an empty query string and
//! refuses to navigate.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::error::LoginError;

/// Read the current query string and replace the current page.
pub trait Navigator {
    /// The raw `location.search`, including its leading `?` when non-empty.
    fn search(&self) -> String;

    /// Full-page navigation to `href`.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Navigation`] if the browser rejects the URL.
    fn assign(&self, href: &str) -> Result<(), LoginError>;
}

/// [`Navigator`] over `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn search(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }

    fn assign(&self, href: &str) -> Result<(), LoginError> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window().ok_or(LoginError::Unavailable)?;
            window
                .location()
                .set_href(href)
                .map_err(|e| LoginError::Navigation(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = href;
            Err(LoginError::Unavailable)
        }
    }
}
