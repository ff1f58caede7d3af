use lifeplus_client::client::LifePlusClient;
use lifeplus_client::error::AppError;
use mockito::Matcher;
use serde_json::json;

const SESSION_BODY: &str =
    r#"{"message":"ok","data":{"token":"abc123","user":{"id":7,"name":"Mamun","phone":"01712345678"}}}"#;

#[tokio::test]
async fn test_login_stores_token_and_session() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/sessions")
        .match_body(Matcher::Json(json!({
            "phone": "01712345678",
            "password": "secret"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SESSION_BODY)
        .create_async()
        .await;

    let client = LifePlusClient::new(server.url());
    assert!(!client.is_authenticated().await);

    let session = client.login("01712345678", "secret").await.unwrap();
    assert_eq!(session.token(), Some("abc123"));
    assert!(client.is_authenticated().await);
    assert_eq!(client.get_access_token().await.as_deref(), Some("abc123"));
    assert_eq!(client.get_session().await.unwrap().token(), Some("abc123"));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_failure_leaves_client_unauthenticated() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/sessions")
        .with_status(401)
        .with_body(r#"{"message":"invalid credentials"}"#)
        .create_async()
        .await;

    let client = LifePlusClient::new(server.url());
    let error = client.login("01712345678", "wrong").await.unwrap_err();

    assert!(matches!(error, AppError::Unauthorized));
    assert!(!client.is_authenticated().await);
    assert!(client.get_session().await.is_none());
}

#[tokio::test]
async fn test_verify_phone_stores_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/verify-otp")
        .match_body(Matcher::Json(json!({
            "phone": "01712345678",
            "otp": "4321"
        })))
        .with_status(200)
        .with_body(SESSION_BODY)
        .create_async()
        .await;

    let client = LifePlusClient::new(server.url());
    let session = client.verify_phone("01712345678", "4321").await.unwrap();

    assert_eq!(session.token(), Some("abc123"));
    assert!(client.is_authenticated().await);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_logout_clears_token_and_session() {
    let mut server = mockito::Server::new_async().await;
    let login_mock = server
        .mock("POST", "/auth/sessions")
        .with_status(200)
        .with_body(SESSION_BODY)
        .create_async()
        .await;
    let logout_mock = server
        .mock("POST", "/auth/logout")
        .match_header("authorization", "Bearer abc123")
        .with_status(200)
        .with_body(r#"{"message":"logged out"}"#)
        .create_async()
        .await;

    let client = LifePlusClient::new(server.url());
    client.login("01712345678", "secret").await.unwrap();

    client.logout().await.unwrap();
    assert!(!client.is_authenticated().await);
    assert!(client.get_access_token().await.is_none());
    assert!(client.get_session().await.is_none());

    login_mock.assert_async().await;
    logout_mock.assert_async().await;
}

#[tokio::test]
async fn test_logout_clears_local_state_even_when_server_fails() {
    let mut server = mockito::Server::new_async().await;
    let _logout_mock = server
        .mock("POST", "/auth/logout")
        .with_status(500)
        .with_body(r#"{"message":"server error"}"#)
        .create_async()
        .await;

    let client = LifePlusClient::new(server.url());
    client.set_access_token("abc123").await;

    let result = client.logout().await;
    assert!(result.is_err());
    // Local state is cleared regardless of the remote outcome
    assert!(!client.is_authenticated().await);
    assert!(client.get_access_token().await.is_none());
}

#[tokio::test]
async fn test_logout_noop_when_unauthenticated() {
    // No mock registered: a request would fail the test with a connect error
    let client = LifePlusClient::new("http://127.0.0.1:1");
    client.logout().await.unwrap();
}

#[tokio::test]
async fn test_set_access_token() {
    let client = LifePlusClient::new("http://127.0.0.1:1");
    assert!(!client.is_authenticated().await);

    client.set_access_token("manual-token").await;
    assert!(client.is_authenticated().await);
    assert_eq!(
        client.get_access_token().await.as_deref(),
        Some("manual-token")
    );
}

#[tokio::test]
async fn test_credential_slots_are_independent() {
    let client = LifePlusClient::new("http://127.0.0.1:1");

    client.set_partner_credentials("partner-9", "key-9").await;
    client.set_access_token("abc123").await;

    // Setting the token must not clear the partner slots, and vice versa
    let config = client.config();
    let config = config.read().await;
    assert_eq!(config.credentials.access_token.as_deref(), Some("abc123"));
    assert_eq!(config.credentials.partner_id.as_deref(), Some("partner-9"));
    assert_eq!(config.credentials.api_key.as_deref(), Some("key-9"));
}

#[tokio::test]
async fn test_resource_accessors_are_memoized() {
    let client = LifePlusClient::new("http://127.0.0.1:1");
    let first = client.products();
    let second = client.products();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}
