//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps guard and redirect logic out of page components so it can be unit
//! tested without a browser.

pub mod auth;
