//! HTTP client for the submission endpoint
//!
//! Sends one `multipart/form-data` POST per submission: a `payload` text part
//! holding the JSON snapshot, then `file1`..`fileN` parts with the raw bytes.

use super::traits::{ServerReply, SubmitEndpoint};
use crate::error::TransportError;
use crate::state::SubmissionPayload;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Url;

/// Client for posting forms to a configured endpoint
pub struct EndpointClient {
    http: reqwest::Client,
    url: Url,
}

impl EndpointClient {
    /// Create a client for `url`
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| anyhow!("Invalid endpoint URL {url:?}: {e}"))?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {e}"))?;
        Ok(Self { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Assemble the multipart body, reading each attachment from disk
    async fn build_form(payload: &SubmissionPayload) -> Result<Form, TransportError> {
        let json =
            serde_json::to_string(payload).map_err(|e| TransportError::Network(e.to_string()))?;
        let mut form = Form::new().text("payload", json);

        for (i, file) in payload.files.iter().enumerate() {
            let bytes = tokio::fs::read(&file.path)
                .await
                .map_err(|e| TransportError::Attachment {
                    name: file.name.clone(),
                    reason: e.to_string(),
                })?;
            let part = Part::bytes(bytes).file_name(file.name.clone());
            form = form.part(format!("file{}", i + 1), part);
        }

        Ok(form)
    }
}

#[async_trait]
impl SubmitEndpoint for EndpointClient {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<ServerReply, TransportError> {
        let form = Self::build_form(payload).await?;

        tracing::info!(
            endpoint = %self.url,
            files = payload.files.len(),
            "Posting submission"
        );

        let response = self
            .http
            .post(self.url.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        // An unreadable body still counts as success
        let reply = match response.bytes().await {
            Ok(body) => ServerReply::parse(&body),
            Err(e) => {
                tracing::debug!("Discarding unreadable response body: {e}");
                ServerReply::generic()
            }
        };
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Attachment, Reviewed};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn payload(files: Vec<Attachment>) -> SubmissionPayload {
        SubmissionPayload {
            org_name: "Acme".to_string(),
            reviewed: Reviewed::Yes,
            changes: "fixed typo".to_string(),
            change_type: String::new(),
            agree: true,
            full_name: "J. Smith".to_string(),
            files,
            submitted_at: "2026-10-16T09:30:05.000Z".to_string(),
        }
    }

    /// Accept one connection, read the whole multipart request, answer with
    /// `status_line` and `body`, and hand back what was received.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/submit", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&received);
                if text.contains("\r\n\r\n") && text.trim_end().ends_with("--") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\n\
                 content-type: application/json\r\n\
                 content-length: {}\r\n\
                 connection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&received).into_owned()
        });

        (url, handle)
    }

    #[test]
    fn test_rejects_invalid_url() {
        assert!(EndpointClient::new("not a url").is_err());
        assert!(EndpointClient::new("https://example.com/forms").is_ok());
    }

    #[tokio::test]
    async fn test_server_error_is_status_failure() {
        let (url, server) = serve_once("500 Internal Server Error", "{}").await;
        let client = EndpointClient::new(&url).unwrap();

        let err = client.submit(&payload(Vec::new())).await.unwrap_err();
        assert_eq!(err, TransportError::Status(500));
        assert_eq!(err.to_string(), "Server returned 500");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_posts_payload_and_numbered_files() {
        let dir = std::env::temp_dir().join(format!("review-form-client-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("notes.txt");
        tokio::fs::write(&path, b"attached bytes").await.unwrap();

        let (url, server) = serve_once("200 OK", r#"{"id":"abc"}"#).await;
        let client = EndpointClient::new(&url).unwrap();
        let files = vec![Attachment::new(&path, 14)];

        let reply = client.submit(&payload(files)).await.unwrap();
        assert_eq!(reply.0["id"], "abc");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /submit"));
        assert!(request.contains("multipart/form-data"));
        assert!(request.contains("name=\"payload\""));
        assert!(request.contains("\"orgName\":\"Acme\""));
        assert!(request.contains("name=\"file1\"; filename=\"notes.txt\""));
        assert!(request.contains("attached bytes"));

        tokio::fs::remove_dir_all(&dir).await.ok();
    }

    #[tokio::test]
    async fn test_non_json_success_is_generic() {
        let (url, server) = serve_once("201 Created", "thanks").await;
        let client = EndpointClient::new(&url).unwrap();
        let reply = client.submit(&payload(Vec::new())).await.unwrap();
        assert_eq!(reply, ServerReply::generic());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_attachment_fails_before_sending() {
        let client = EndpointClient::new("http://127.0.0.1:9/unused").unwrap();
        let files = vec![Attachment::new(std::path::Path::new("/definitely/not/here.pdf"), 1)];
        let err = client.submit(&payload(files)).await.unwrap_err();
        assert!(matches!(err, TransportError::Attachment { ref name, .. } if name == "here.pdf"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);

        let client = EndpointClient::new(&url).unwrap();
        let err = client.submit(&payload(Vec::new())).await.unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }
}
