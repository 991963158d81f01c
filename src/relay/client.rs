//! HTTP client for the third-party form relay
//!
//! The relay accepts a JSON object and e-mails it to the address embedded in
//! the endpoint URL. No credentials travel in the payload.

use super::{RelayClientTrait, RelayError, Submission};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};

/// Default relay endpoint
pub const DEFAULT_ENDPOINT: &str = "https://formsubmit.co/ajax/vagnerlessa123@gmail.com";

/// Client posting submissions to the relay
pub struct RelayClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RelayClient {
    /// Create a new relay client for `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayClientTrait for RelayClient {
    async fn send(&self, submission: &Submission) -> Result<(), RelayError> {
        tracing::debug!(
            submission_id = %submission.id(),
            subject = submission.subject(),
            endpoint = %self.endpoint,
            fields = submission.fields().len(),
            "Posting submission to relay"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Status(status));
        }

        tracing::debug!(submission_id = %submission.id(), %status, "Relay accepted submission");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample() -> Submission {
        Submission::new(
            "Nova Solicitação de Associação - Síndico",
            vec![("Nome Completo".to_string(), "Maria Silva".to_string())],
        )
    }

    #[tokio::test]
    async fn test_posts_json_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ajax/relay@example.com"))
            .and(header("accept", "application/json"))
            .and(body_partial_json(json!({
                "_subject": "Nova Solicitação de Associação - Síndico",
                "_template": "table",
                "Nome Completo": "Maria Silva",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": "true"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = RelayClient::new(format!("{}/ajax/relay@example.com", server.uri())).unwrap();
        client.send(&sample()).await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = RelayClient::new(server.uri()).unwrap();
        let err = client.send(&sample()).await.unwrap_err();
        assert!(matches!(err, RelayError::Status(s) if s.as_u16() == 503));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_transport_error() {
        let client = RelayClient::new("http://127.0.0.1:1/ajax").unwrap();
        let err = client.send(&sample()).await.unwrap_err();
        assert!(matches!(err, RelayError::Transport(_)));
    }

    #[test]
    fn test_endpoint_accessor() {
        let client = RelayClient::new(DEFAULT_ENDPOINT).unwrap();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }
}
