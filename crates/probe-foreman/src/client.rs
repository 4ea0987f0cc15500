//! Single-request JSON client for the Foreman API.

use std::time::Duration;

use probe_common::{ProbeError, ProbeResult};
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

use crate::credentials::Credentials;

const JSON: &str = "application/json";

/// Client issuing the probes' single JSON GET.
pub struct ForemanClient {
    client: Client,
    credentials: Option<Credentials>,
}

impl ForemanClient {
    /// Create a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration, credentials: Option<Credentials>) -> ProbeResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProbeError::Config {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            credentials,
        })
    }

    /// Fetch `url` and decode the body as JSON.
    pub async fn get_json(&self, url: &str) -> ProbeResult<Value> {
        tracing::debug!(url = %url, authenticated = self.credentials.is_some(), "Querying Foreman");

        let mut request = self
            .client
            .get(url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON);
        if let Some(credentials) = &self.credentials {
            request = request.header(AUTHORIZATION, credentials.to_basic_auth());
        }

        let response = request.send().await.map_err(|e| ProbeError::Connection {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        tracing::debug!(url = %url, status = %status, "Foreman replied");
        if !status.is_success() {
            return Err(ProbeError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| ProbeError::Connection {
            url: url.to_string(),
            message: format!("Failed to read response body: {e}"),
        })?;

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    // Answers one request with a canned response and hands back the raw request head.
    async fn respond_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut buf = [0_u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.expect("read");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.expect("write");
            stream.shutdown().await.ok();
            String::from_utf8_lossy(&request).to_lowercase()
        });

        (format!("http://{addr}/api/dashboard/"), handle)
    }

    #[test_log::test(tokio::test)]
    async fn get_json_sends_json_headers() {
        let (url, server) = respond_once("200 OK", r#"{"total_hosts": 4}"#).await;
        let client = ForemanClient::new(Duration::from_secs(5), None).unwrap();

        let value = client.get_json(&url).await.unwrap();
        assert_eq!(value["total_hosts"], 4);

        let request = server.await.unwrap();
        assert!(request.starts_with("get /api/dashboard/ http/1.1"));
        assert!(request.contains("accept: application/json"));
        assert!(request.contains("content-type: application/json"));
        assert!(!request.contains("authorization:"));
    }

    #[test_log::test(tokio::test)]
    async fn get_json_sends_basic_auth() {
        let (url, server) = respond_once("200 OK", "[]").await;
        let credentials = Credentials::new("user", "pass");
        let client = ForemanClient::new(Duration::from_secs(5), Some(credentials)).unwrap();

        client.get_json(&url).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.contains("authorization: basic dxnlcjpwyxnz"));
    }

    #[test_log::test(tokio::test)]
    async fn http_error_status() {
        let (url, _server) = respond_once("404 Not Found", "{}").await;
        let client = ForemanClient::new(Duration::from_secs(5), None).unwrap();

        match client.get_json(&url).await.unwrap_err() {
            ProbeError::HttpStatus { status, url: failed } => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("Expected ProbeError::HttpStatus, got {other:?}"),
        }
    }

    #[test_log::test(tokio::test)]
    async fn body_is_not_json() {
        let (url, _server) = respond_once("200 OK", "<html>login</html>").await;
        let client = ForemanClient::new(Duration::from_secs(5), None).unwrap();

        let err = client.get_json(&url).await.unwrap_err();
        assert!(matches!(err, ProbeError::InvalidResponse { .. }));
    }

    #[test_log::test(tokio::test)]
    async fn connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ForemanClient::new(Duration::from_secs(2), None).unwrap();
        let err = client
            .get_json(&format!("http://{addr}/api/dashboard/"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProbeError::Connection { .. }));
        assert!(err.is_transport());
    }
}
