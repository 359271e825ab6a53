use super::*;

fn alice() -> User {
    User { id: "u1".to_owned(), name: "Alice".to_owned(), email: None, is_admin: false }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn pending_state_is_loading() {
    assert_eq!(AuthState::pending().status(), AuthStatus::Loading);
}

#[test]
fn settled_without_user_is_anonymous() {
    assert_eq!(AuthState::default().status(), AuthStatus::Anonymous);
}

#[test]
fn user_present_is_signed_in_even_while_loading() {
    let state = AuthState { user: Some(alice()), loading: true };
    assert_eq!(state.status(), AuthStatus::SignedIn);
}

// =============================================================
// AuthContext
// =============================================================

#[test]
fn context_starts_pending() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = AuthContext::new();
        assert_eq!(auth.status(), AuthStatus::Loading);
        assert_eq!(auth.user(), None);
    });
}

#[test]
fn sign_in_then_sign_out() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = AuthContext::new();
        auth.sign_in(alice());
        assert_eq!(auth.status(), AuthStatus::SignedIn);
        assert_eq!(auth.user().map(|u| u.name), Some("Alice".to_owned()));

        auth.sign_out();
        assert_eq!(auth.state(), AuthState::default());
        assert_eq!(auth.status(), AuthStatus::Anonymous);
    });
}

#[test]
fn copies_observe_the_same_session() {
    let owner = Owner::new();
    owner.with(|| {
        let root = AuthContext::new();
        let layout_copy = root;
        let page_copy = root;

        page_copy.sign_in(alice());
        assert_eq!(root.status(), AuthStatus::SignedIn);
        assert_eq!(layout_copy.user(), Some(alice()));

        layout_copy.sign_out();
        assert_eq!(page_copy.status(), AuthStatus::Anonymous);
    });
}
