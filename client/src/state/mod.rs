//! Reactive UI state held in signals by page components.

pub mod login;
