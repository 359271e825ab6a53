//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped behavior and renders inside the navbar
//! layout's content slot.

pub mod admin_portal;
pub mod home;
pub mod login;
pub mod not_found;
