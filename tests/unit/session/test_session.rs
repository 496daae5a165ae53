use super::common::{FakeAuth, REMEMBER_TOKEN, SESSION_TOKEN, exposed, login_body};
use mockito::{Matcher, Server};
use secrecy::ExposeSecret;
use serde_json::json;
use tastytrade_client::auth::{Session, SessionOptions};
use tastytrade_client::error::AppError;
use tastytrade_client::session::interface::{Credential, Environment};
use tokio_test::block_on;

fn password() -> Credential {
    Credential::password("correct-password")
}

#[tokio::test]
async fn test_login_with_fake_authenticator() {
    let auth = FakeAuth::new(Environment::Sandbox, true);
    let options = SessionOptions {
        is_test: true,
        remember_me: true,
        ..Default::default()
    };

    let session = Session::login_with(&auth, "trader1", password(), options)
        .await
        .unwrap();

    assert_eq!(auth.calls(), 1);
    assert!(session.is_test());
    assert_eq!(session.environment(), Environment::Sandbox);
    assert_eq!(session.auth_token().expose_secret(), SESSION_TOKEN);
    assert_eq!(exposed(session.remember_token()), Some(REMEMBER_TOKEN));
    assert_eq!(session.base_url(), "http://fake.invalid");
}

#[test]
fn test_rejected_login_yields_no_session() {
    let auth = FakeAuth::new(Environment::Production, false);
    let result = block_on(Session::login_with(
        &auth,
        "trader1",
        password(),
        SessionOptions::default(),
    ));

    assert!(result.is_err());
    assert!(result.unwrap_err().is_authentication());
    assert_eq!(auth.calls(), 1);
}

#[tokio::test]
async fn test_empty_inputs_are_rejected_before_any_request() {
    let auth = FakeAuth::new(Environment::Production, true);

    let err = Session::login_with(&auth, "  ", password(), SessionOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let err = Session::login_with(
        &auth,
        "trader1",
        Credential::password(""),
        SessionOptions::default(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let err = Session::login_with(
        &auth,
        "trader1",
        Credential::remember_token(""),
        SessionOptions::default(),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("remember-token"));

    assert_eq!(auth.calls(), 0);
}

#[tokio::test]
async fn test_environment_mismatch_is_rejected() {
    let auth = FakeAuth::new(Environment::Production, true);
    let options = SessionOptions {
        is_test: true,
        ..Default::default()
    };

    let err = Session::login_with(&auth, "trader1", password(), options)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(auth.calls(), 0);
}

#[tokio::test]
async fn test_debug_redacts_tokens() {
    let auth = FakeAuth::new(Environment::Production, true);
    let options = SessionOptions {
        remember_me: true,
        ..Default::default()
    };
    let session = Session::login_with(&auth, "trader1", password(), options)
        .await
        .unwrap();

    let debug = format!("{session:?}");
    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains(SESSION_TOKEN));
    assert!(!debug.contains(REMEMBER_TOKEN));
}

#[test]
fn test_builder_debug_redacts_password_and_two_factor_code() {
    let builder = Session::builder("trader1")
        .password("hunter2")
        .two_factor_code("987654");

    let debug = format!("{builder:?}");
    assert!(debug.contains("trader1"));
    assert!(!debug.contains("hunter2"));
    assert!(!debug.contains("987654"));
}

#[tokio::test]
async fn test_session_serialization_roundtrip() {
    let auth = FakeAuth::new(Environment::Sandbox, true);
    let options = SessionOptions {
        is_test: true,
        remember_me: true,
        ..Default::default()
    };
    let session = Session::login_with(&auth, "trader1", password(), options)
        .await
        .unwrap();

    let stored = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&stored).unwrap();

    assert_eq!(restored.username(), session.username());
    assert_eq!(restored.environment(), session.environment());
    assert_eq!(restored.base_url(), session.base_url());
    assert_eq!(restored.user(), session.user());
    assert_eq!(
        restored.remember_token_expires_at(),
        session.remember_token_expires_at()
    );
    assert_eq!(restored.auth_token().expose_secret(), SESSION_TOKEN);
    assert!(restored.is_test());
    assert_eq!(exposed(restored.remember_token()), Some(REMEMBER_TOKEN));
}

#[test]
fn test_stored_session_without_token_is_rejected() {
    let stored = json!({
        "username": "trader1",
        "environment": "production",
        "base_url": "https://api.tastyworks.com",
        "remember_me": false,
        "session_token": "",
        "remember_token": null,
        "remember_token_issued_at": null,
        "session_expiration": null,
        "user": {"email": "", "username": "trader1"}
    });
    assert!(serde_json::from_value::<Session>(stored).is_err());
}

#[tokio::test]
async fn test_renew_without_remember_token() {
    let auth = FakeAuth::new(Environment::Production, true);
    let session = Session::login_with(&auth, "trader1", password(), SessionOptions::default())
        .await
        .unwrap();

    let err = session.renew().await.unwrap_err();
    assert!(err.is_authentication());
}

#[tokio::test]
async fn test_renew_uses_remember_token() {
    let mut server = Server::new_async().await;
    let password_login = server
        .mock("POST", "/sessions")
        .match_body(Matcher::PartialJson(json!({"password": "correct-password"})))
        .with_status(201)
        .with_body(login_body())
        .create_async()
        .await;
    let token_login = server
        .mock("POST", "/sessions")
        .match_body(Matcher::Json(json!({
            "login": "trader1",
            "remember-token": REMEMBER_TOKEN,
            "remember-me": true
        })))
        .with_status(201)
        .with_body(login_body())
        .create_async()
        .await;

    let session = Session::builder("trader1")
        .password("correct-password")
        .remember_me(true)
        .base_url(server.url())
        .login()
        .await
        .unwrap();

    let renewed = session.renew().await.unwrap();
    assert_eq!(renewed.auth_token().expose_secret(), SESSION_TOKEN);
    assert_eq!(exposed(renewed.remember_token()), Some(REMEMBER_TOKEN));
    assert_eq!(renewed.environment(), session.environment());

    password_login.assert_async().await;
    token_login.assert_async().await;
}

async fn logged_in(server: &mut Server) -> Session {
    let _login = server
        .mock("POST", "/sessions")
        .with_status(201)
        .with_body(login_body())
        .create_async()
        .await;
    Session::builder("trader1")
        .password("correct-password")
        .base_url(server.url())
        .login()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_validate_accepted_session() {
    let mut server = Server::new_async().await;
    let session = logged_in(&mut server).await;
    let mock = server
        .mock("POST", "/sessions/validate")
        .match_header("authorization", SESSION_TOKEN)
        .with_status(201)
        .with_body(r#"{"data":{}}"#)
        .create_async()
        .await;

    assert!(session.validate().await.unwrap());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_validate_rejected_session() {
    let mut server = Server::new_async().await;
    let session = logged_in(&mut server).await;
    let _mock = server
        .mock("POST", "/sessions/validate")
        .with_status(401)
        .with_body(r#"{"error":{"code":"unauthorized","message":"Token has expired"}}"#)
        .create_async()
        .await;

    assert!(!session.validate().await.unwrap());
}

#[tokio::test]
async fn test_destroy_session() {
    let mut server = Server::new_async().await;
    let session = logged_in(&mut server).await;
    let mock = server
        .mock("DELETE", "/sessions")
        .match_header("authorization", SESSION_TOKEN)
        .with_status(204)
        .create_async()
        .await;

    session.destroy().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_destroy_rejected_session() {
    let mut server = Server::new_async().await;
    let session = logged_in(&mut server).await;
    let _mock = server
        .mock("DELETE", "/sessions")
        .with_status(401)
        .with_body(r#"{"error":{"code":"unauthorized","message":"Token has expired"}}"#)
        .create_async()
        .await;

    assert!(session.destroy().await.unwrap_err().is_authentication());
}
