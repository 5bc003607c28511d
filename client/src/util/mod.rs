//! Browser-environment helpers shared by the login flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (location, storage, query parsing)
//! behind small interfaces so the controller can be exercised natively.

pub mod navigation;
pub mod query;
pub mod storage;
