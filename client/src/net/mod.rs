//! Networking modules for the auth boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls to the session backend and `types` defines the
//! payloads it returns.

pub mod api;
pub mod types;
