use super::*;

#[test]
fn mount_element_id_is_root() {
    assert_eq!(MOUNT_ELEMENT_ID, "root");
}

#[test]
fn missing_element_message_names_the_id() {
    let err = MountError::MissingElement { id: MOUNT_ELEMENT_ID.to_owned() };
    assert_eq!(err.to_string(), "mount element #root not found");
}

#[test]
fn not_html_element_message_names_the_id() {
    let err = MountError::NotHtmlElement { id: "app".to_owned() };
    assert_eq!(err.to_string(), "mount element #app is not an HTML element");
}

#[test]
fn environment_errors_have_stable_messages() {
    assert_eq!(MountError::NoWindow.to_string(), "no window available");
    assert_eq!(MountError::NoDocument.to_string(), "window has no document");
}
