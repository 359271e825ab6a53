//! Attaching the app to the host document.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SSR shell wraps the app in a single element with id
//! [`MOUNT_ELEMENT_ID`]. In the browser, hydration starts from that element.
//! A missing or unusable element leaves the server-rendered markup in place
//! and surfaces a [`MountError`] to the caller.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

/// Id of the host element the app is rendered into.
pub const MOUNT_ELEMENT_ID: &str = "root";

/// Reasons the app could not be attached to the document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    /// No `window` global (not running in a browser).
    #[error("no window available")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// The mount element is absent from the document.
    #[error("mount element #{id} not found")]
    MissingElement { id: String },

    /// The mount element exists but is not an HTML element.
    #[error("mount element #{id} is not an HTML element")]
    NotHtmlElement { id: String },
}

/// Hydrate the app into the `#root` element of the current document.
///
/// # Errors
///
/// Returns a [`MountError`] if the browser environment or the mount element
/// is unavailable.
#[cfg(feature = "hydrate")]
pub fn hydrate_root() -> Result<(), MountError> {
    let root = find_mount_element(MOUNT_ELEMENT_ID)?;
    leptos::mount::hydrate_from(root, crate::app::App).forget();
    log::info!("portal hydrated into #{MOUNT_ELEMENT_ID}");
    Ok(())
}

#[cfg(feature = "hydrate")]
fn find_mount_element(id: &str) -> Result<web_sys::HtmlElement, MountError> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement { id: id.to_owned() })?;
    element
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement { id: id.to_owned() })
}
