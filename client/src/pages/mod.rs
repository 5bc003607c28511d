//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped signals and delegates side effects to a
//! controller that can run without a browser.

pub mod login;
pub mod login_controller;
