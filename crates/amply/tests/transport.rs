//! Transport tests against a local mock HTTP server.
//!
//! Each test binds a listener on an ephemeral port, serves one canned
//! response, and hands back the raw request it received.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::time::Duration;

use amply::{Attachment, Client, Config, EmailData, Error};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Request captured by the mock server.
struct CapturedRequest {
    /// Request line and headers, lowercased.
    head: String,
    /// Raw body.
    body: Vec<u8>,
}

impl CapturedRequest {
    fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

async fn mock_server(response: String) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
        request
    });

    (format!("http://{addr}/api/v1"), handle)
}

async fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before full request");
        buf.extend_from_slice(&chunk[..n]);

        let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
        let length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .map_or(0, |value| value.trim().parse::<usize>().unwrap());

        let body_start = end + 4;
        if buf.len() >= body_start + length {
            return CapturedRequest {
                head,
                body: buf[body_start..body_start + length].to_vec(),
            };
        }
    }
}

fn client_for(base_url: &str) -> Client {
    let config = Config::builder()
        .base_url(base_url)
        .access_token("secret-token")
        .build()
        .unwrap();
    Client::new(config).unwrap()
}

fn sample_email() -> EmailData {
    EmailData::new()
        .from("Acme <noreply@acme.test>")
        .to("b@y.com")
        .subject("Hi")
        .text("hello")
}

#[tokio::test]
async fn test_create_posts_normalized_document() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let (base_url, server) = mock_server(http_response("202 Accepted", "{}")).await;
    let client = client_for(&base_url);

    let response = client.email().create(&sample_email()).await.unwrap();
    assert_eq!(response.status, 202);
    assert_eq!(response.body, "{}");

    let request = server.await.unwrap();
    assert!(request.head.starts_with("post /api/v1/email http/1.1"));
    assert!(request.head.contains("authorization: bearer secret-token"));
    assert!(request.head.contains("content-type: application/json"));
    assert_eq!(
        request.json(),
        serde_json::json!({
            "from": { "name": "Acme", "email": "noreply@acme.test" },
            "subject": "Hi",
            "content": [{ "type": "text/plain", "value": "hello" }],
            "personalizations": [{ "to": [{ "email": "b@y.com" }] }]
        })
    );
}

#[tokio::test]
async fn test_no_content_is_success() {
    let (base_url, server) =
        mock_server("HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n".to_string()).await;
    let client = client_for(&base_url);

    let response = client.email().create(&sample_email()).await.unwrap();
    assert_eq!(response.status, 204);
    assert!(response.body.is_empty());
    server.await.unwrap();
}

#[tokio::test]
async fn test_unprocessable_carries_body() {
    let body = r#"{"errors":{"to":["is required"]}}"#;
    let (base_url, server) = mock_server(http_response("422 Unprocessable Entity", body)).await;
    let client = client_for(&base_url);

    let err = client.email().create(&sample_email()).await.unwrap_err();
    let Error::Unprocessable(response) = &err else {
        panic!("expected Unprocessable, got {err:?}");
    };
    assert_eq!(response.status, 422);
    assert_eq!(response.body, body);
    server.await.unwrap();
}

#[tokio::test]
async fn test_unauthorized() {
    let (base_url, server) = mock_server(http_response("401 Unauthorized", "")).await;
    let client = client_for(&base_url);

    let err = client.email().create(&sample_email()).await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized(_)));
    assert_eq!(err.status(), Some(401));
    server.await.unwrap();
}

#[tokio::test]
async fn test_server_error_is_generic() {
    let (base_url, server) = mock_server(http_response("503 Service Unavailable", "")).await;
    let client = client_for(&base_url);

    let err = client.email().create(&sample_email()).await.unwrap_err();
    assert!(matches!(err, Error::Api(ref r) if r.status == 503));
    server.await.unwrap();
}

#[tokio::test]
async fn test_invalid_data_is_not_sent() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/api/v1", listener.local_addr().unwrap());
    let client = client_for(&base_url);

    let data = sample_email().attachment(Attachment::new("", "a.png"));
    let err = client.email().create(&data).await.unwrap_err();
    assert!(err.is_validation());

    let accepted = tokio::time::timeout(Duration::from_millis(100), listener.accept()).await;
    assert!(accepted.is_err(), "client connected despite invalid data");
}

#[tokio::test]
async fn test_request_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/api/v1", listener.local_addr().unwrap());

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let _request = read_request(&mut stream).await;
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let config = Config::builder()
        .base_url(base_url)
        .access_token("t")
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let client = Client::new(config).unwrap();

    let err = client.email().create(&sample_email()).await.unwrap_err();
    assert!(matches!(err, Error::Http(ref e) if e.is_timeout()));
}
