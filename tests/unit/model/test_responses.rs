use tastytrade_client::model::responses::{ApiErrorBody, ErrorEnvelope};

#[test]
fn test_error_body_renders_code_and_message() {
    let envelope: ErrorEnvelope = serde_json::from_str(
        r#"{"error":{"code":"invalid_credentials","message":"Invalid login, please check your username and password"}}"#,
    )
    .unwrap();
    let err = envelope.error.unwrap();
    assert_eq!(err.codes(), vec!["invalid_credentials"]);
    assert_eq!(
        err.render(),
        "invalid_credentials: Invalid login, please check your username and password"
    );
}

#[test]
fn test_error_body_renders_nested_errors() {
    let envelope: ErrorEnvelope = serde_json::from_str(
        r#"{"error":{"code":"validation_error","message":"Request validation failed","errors":[
            {"code":"login","message":"is missing"},
            {"domain":"password","reason":"is missing"}
        ]}}"#,
    )
    .unwrap();
    let err = envelope.error.unwrap();
    assert_eq!(err.codes(), vec!["login"]);
    assert_eq!(err.render(), "login: is missing\npassword: is missing");
}

#[test]
fn test_error_body_empty_nested_list_uses_self() {
    let err = ApiErrorBody {
        domain: Some("session".to_string()),
        reason: Some("expired".to_string()),
        errors: Some(vec![]),
        ..Default::default()
    };
    assert_eq!(err.entries().len(), 1);
    assert_eq!(err.render(), "session: expired");
}
