use super::*;
use anyhow::Result;
use secrecy::SecretString;
use serde_json::json;
use std::{net::TcpListener, time::Duration};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client_for(base_url: &str) -> Result<ApiClient> {
    let config = ApiConfig::default().with_override(Some(base_url.to_string()));
    Ok(ApiClient::new(config)?)
}

fn register_request() -> RegisterRequest {
    RegisterRequest {
        email: "user@example.com".to_string(),
        password: SecretString::from("secret123".to_string()),
        name: "User Name".to_string(),
        mobile_number: None,
        address: None,
    }
}

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "user@example.com".to_string(),
        password: SecretString::from("secret123".to_string()),
    }
}

async fn mount(server: &MockServer, verb: &str, route: &str, response: ResponseTemplate) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn register_returns_server_message_on_success() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "email": "user@example.com",
            "password": "secret123",
            "name": "User Name"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server.uri())?.register(&register_request()).await;
    assert_eq!(result, ApiResult::ok("ok"));
    Ok(())
}

#[tokio::test]
async fn register_defaults_message_for_empty_created() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount(&server, "POST", "/auth/register", ResponseTemplate::new(201)).await;

    let result = client_for(&server.uri())?.register(&register_request()).await;
    assert!(result.success);
    assert_eq!(result.message, "User registered successfully");
    Ok(())
}

#[tokio::test]
async fn register_surfaces_json_error_message() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount(
        &server,
        "POST",
        "/auth/register",
        ResponseTemplate::new(400).set_body_json(json!({"message": "Bad request"})),
    )
    .await;

    let result = client_for(&server.uri())?.register(&register_request()).await;
    assert_eq!(result, ApiResult::failed("Bad request"));
    Ok(())
}

#[tokio::test]
async fn register_surfaces_plain_text_error_body() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount(
        &server,
        "POST",
        "/auth/register",
        ResponseTemplate::new(500).set_body_string("Server error"),
    )
    .await;

    let result = client_for(&server.uri())?.register(&register_request()).await;
    assert_eq!(result, ApiResult::failed("Server error"));
    Ok(())
}

#[tokio::test]
async fn register_uses_error_field_when_message_missing() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount(
        &server,
        "POST",
        "/auth/register",
        ResponseTemplate::new(409).set_body_json(json!({"error": "Email already exists"})),
    )
    .await;

    let result = client_for(&server.uri())?.register(&register_request()).await;
    assert_eq!(result, ApiResult::failed("Email already exists"));
    Ok(())
}

#[tokio::test]
async fn register_reports_connection_failure() -> Result<()> {
    let port = {
        let Ok(listener) = TcpListener::bind("127.0.0.1:0") else {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        };
        listener.local_addr()?.port()
    };

    let result = client_for(&format!("http://127.0.0.1:{port}"))?
        .register(&register_request())
        .await;
    assert!(!result.success);
    assert!(
        result.message.contains("error sending request"),
        "unexpected message: {}",
        result.message
    );
    Ok(())
}

#[tokio::test]
async fn register_reports_malformed_base_address() -> Result<()> {
    let result = client_for("not a url")?.register(&register_request()).await;
    assert!(!result.success);
    assert!(result.message.starts_with("Invalid request URL"));
    Ok(())
}

#[tokio::test]
async fn slow_response_resolves_as_timeout() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount(
        &server,
        "POST",
        "/auth/login",
        ResponseTemplate::new(200).set_delay(Duration::from_secs(5)),
    )
    .await;

    let config = ApiConfig::default()
        .with_override(Some(server.uri()))
        .with_timeout(Duration::from_millis(100));
    let client = ApiClient::new(config)?;

    let started = std::time::Instant::now();
    let result = client.sign_in(&login_request()).await;

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(
        result,
        ApiResult::failed("Request aborted: timed out after 100 ms")
    );
    Ok(())
}

#[tokio::test]
async fn sign_in_uses_login_defaults() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "user@example.com",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let result = client_for(&server.uri())?.sign_in(&login_request()).await;
    assert_eq!(result, ApiResult::ok("Login successful"));
    Ok(())
}

#[tokio::test]
async fn sign_in_synthesizes_status_message() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount(&server, "POST", "/auth/login", ResponseTemplate::new(401)).await;

    let result = client_for(&server.uri())?.sign_in(&login_request()).await;
    assert_eq!(result, ApiResult::failed("Login failed with status 401"));
    Ok(())
}

#[tokio::test]
async fn trailing_slash_and_user_agent() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("User-Agent", crate::APP_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "welcome"})))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/", server.uri());
    let result = client_for(&base)?.sign_in(&login_request()).await;
    assert_eq!(result, ApiResult::ok("welcome"));
    Ok(())
}

#[tokio::test]
async fn check_email_reads_exists_and_available() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let cases = [
        (json!({"exists": true}), true),
        (json!({"exists": false, "available": false}), false),
        (json!({"available": false}), true),
        (json!({"available": true}), false),
        (json!({}), false),
    ];

    for (body, expected) in cases {
        let server = MockServer::start().await;
        mount(
            &server,
            "GET",
            "/auth/check-email",
            ResponseTemplate::new(200).set_body_json(body.clone()),
        )
        .await;

        let result = client_for(&server.uri())?
            .check_email_exists("user@example.com")
            .await;
        assert_eq!(result, EmailCheck::found(expected), "body: {body}");
    }
    Ok(())
}

#[tokio::test]
async fn check_email_encodes_query_parameter() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/check-email"))
        .and(query_param("email", "first+tag@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"exists": true})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server.uri())?
        .check_email_exists("first+tag@example.com")
        .await;
    assert_eq!(result, EmailCheck::found(true));
    Ok(())
}

#[tokio::test]
async fn check_email_failure_keeps_exists_false() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount(
        &server,
        "GET",
        "/auth/check-email",
        ResponseTemplate::new(500).set_body_string("boom"),
    )
    .await;

    let result = client_for(&server.uri())?
        .check_email_exists("user@example.com")
        .await;
    assert_eq!(result, EmailCheck::failed("boom"));
    Ok(())
}

#[tokio::test]
async fn check_email_network_failure_keeps_address_private() -> Result<()> {
    let port = {
        let Ok(listener) = TcpListener::bind("127.0.0.1:0") else {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        };
        listener.local_addr()?.port()
    };

    let result = client_for(&format!("http://127.0.0.1:{port}"))?
        .check_email_exists("secret.person@example.com")
        .await;

    assert!(!result.success);
    assert!(!result.exists);
    let message = result.message.unwrap_or_default();
    assert!(message.contains("error sending request"), "unexpected message: {message}");
    assert!(!message.contains("secret.person"), "address leaked: {message}");
    assert!(!message.contains("email="), "query leaked: {message}");
    Ok(())
}

#[tokio::test]
async fn stalled_body_resolves_as_timeout() -> Result<()> {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    };
    let port = listener.local_addr()?.port();

    // headers and the first body byte go out at once, the rest never does
    let server = tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut buf = [0_u8; 4096];
        let _ = socket.read(&mut buf).await;
        let head = "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 64\r\n\r\n{";
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.flush().await;
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let config = ApiConfig::default()
        .with_override(Some(format!("http://127.0.0.1:{port}")))
        .with_timeout(Duration::from_millis(200));
    let client = ApiClient::new(config)?;

    let started = std::time::Instant::now();
    let result = client.sign_in(&login_request()).await;

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(
        result,
        ApiResult::failed("Request aborted: timed out after 200 ms")
    );

    server.abort();
    Ok(())
}

#[tokio::test]
async fn concurrent_calls_are_independent() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount(
        &server,
        "POST",
        "/auth/login",
        ResponseTemplate::new(200).set_body_json(json!({"message": "in"})),
    )
    .await;
    mount(
        &server,
        "POST",
        "/auth/register",
        ResponseTemplate::new(400).set_body_json(json!({"error": "taken"})),
    )
    .await;

    let client = client_for(&server.uri())?;
    let register = register_request();
    let login = login_request();
    let (registered, signed_in) = tokio::join!(client.register(&register), client.sign_in(&login));

    assert_eq!(registered, ApiResult::failed("taken"));
    assert_eq!(signed_in, ApiResult::ok("in"));
    Ok(())
}
