use super::*;

// =============================================================
// SessionRecord
// =============================================================

#[test]
fn session_record_accepts_integer_user_id() {
    let record: SessionRecord =
        serde_json::from_str(r#"{"token":"jwt.abc","user_id":42,"username":"alice"}"#).unwrap();
    assert_eq!(record.user_id, "42");
    assert_eq!(record.token, "jwt.abc");
    assert_eq!(record.username, "alice");
}

#[test]
fn session_record_accepts_string_user_id() {
    let record: SessionRecord =
        serde_json::from_str(r#"{"token":"t","user_id":"u-7","username":"bob"}"#).unwrap();
    assert_eq!(record.user_id, "u-7");
}

#[test]
fn session_record_rejects_non_scalar_user_id() {
    let result = serde_json::from_str::<SessionRecord>(r#"{"token":"t","user_id":[1],"username":"bob"}"#);
    assert!(result.is_err());
}

#[test]
fn session_record_rejects_missing_token() {
    let result = serde_json::from_str::<SessionRecord>(r#"{"user_id":1,"username":"bob"}"#);
    assert!(result.is_err());
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_serialize_as_login_payload() {
    let creds = Credentials { username: "alice".to_owned(), password: "s3cret".to_owned() };
    let json = serde_json::to_value(&creds).unwrap();
    assert_eq!(json, serde_json::json!({"username": "alice", "password": "s3cret"}));
}

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials { username: "alice".to_owned(), password: "s3cret".to_owned() };
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("alice"));
    assert!(!rendered.contains("s3cret"));
}

#[test]
fn qq_authorization_reads_auth_url() {
    let auth: QqAuthorization =
        serde_json::from_str(r#"{"auth_url":"https://graph.qq.com/oauth2.0/authorize?x=1"}"#).unwrap();
    assert_eq!(auth.auth_url, "https://graph.qq.com/oauth2.0/authorize?x=1");
}
