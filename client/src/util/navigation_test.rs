#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn search_is_empty_outside_browser() {
    assert_eq!(BrowserNavigator.search(), "");
}

#[test]
fn assign_is_unavailable_outside_browser() {
    assert_eq!(BrowserNavigator.assign("/index.html"), Err(LoginError::Unavailable));
}
