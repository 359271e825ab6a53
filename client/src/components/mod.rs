//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chrome shared by every route and read session state
//! from the `AuthContext` handed down by the app root.

pub mod navbar;
