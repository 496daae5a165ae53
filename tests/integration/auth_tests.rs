use crate::common;
use tastytrade_client::prelude::*;

#[tokio::test]
#[ignore]
async fn test_sandbox_login() {
    let session = common::sandbox_login(false)
        .await
        .expect("Failed to login");

    assert!(
        !session.auth_token().expose_secret().is_empty(),
        "Session token should be present"
    );
    assert!(session.is_test());
    assert_eq!(session.base_url(), CERT_URL);
    assert!(session.remember_token().is_none());
    assert!(session.validate().await.expect("validate failed"));

    info!("Login successful for {}", session.user().username);
    session.destroy().await.expect("logout failed");
}

#[tokio::test]
#[ignore]
async fn test_sandbox_remember_token_flow() {
    let session = common::sandbox_login(true)
        .await
        .expect("Failed to login");
    let token = session
        .remember_token()
        .expect("remember token should be issued")
        .expose_secret()
        .to_string();

    let again = Session::builder(session.username())
        .remember_token(token)
        .is_test(true)
        .login()
        .await
        .expect("remember token login failed");
    assert!(!again.auth_token().expose_secret().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_sandbox_wrong_password() {
    let (username, _) = common::sandbox_credentials();
    let err = Session::builder(username)
        .password("definitely-not-the-password")
        .is_test(true)
        .login()
        .await
        .unwrap_err();
    assert!(err.is_authentication());
}
