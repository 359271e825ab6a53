use super::*;

#[test]
fn user_optional_fields_default_when_absent() {
    let user: User = serde_json::from_str(r#"{"id":"u1","name":"Alice"}"#).unwrap();
    assert_eq!(user.email, None);
    assert!(!user.is_admin);
}

#[test]
fn user_reads_admin_flag() {
    let user: User =
        serde_json::from_str(r#"{"id":"u2","name":"Root","email":"root@example.com","is_admin":true}"#).unwrap();
    assert_eq!(user.email.as_deref(), Some("root@example.com"));
    assert!(user.is_admin);
}

#[test]
fn user_missing_name_is_rejected() {
    assert!(serde_json::from_str::<User>(r#"{"id":"u3"}"#).is_err());
}

#[test]
fn login_request_serializes_both_fields() {
    let body = serde_json::to_value(LoginRequest { email: "a@b.com", password: "pw" }).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.com", "password": "pw" }));
}
