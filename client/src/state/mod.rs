//! Shared client-side state.
//!
//! DESIGN
//! ======
//! Session state is the only app-wide state. It is owned by the app root and
//! handed to the layout and pages as an explicit prop.

pub mod auth;
