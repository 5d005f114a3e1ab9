use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::parser::{parse_envelope, parse_verdict};
use super::prompt::build_prompt;
use super::types::{ChatMessage, ReasoningClient, Verdict};
use super::ReasoningError;
use crate::config::ServiceConfig;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// HTTP client for the hosted reasoning service.
pub struct HttpReasoningClient {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
    timeout: Duration,
}

impl HttpReasoningClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, ReasoningError> {
        let client = reqwest::Client::builder()
            .timeout(config.reasoning_timeout)
            .build()
            .map_err(|e| ReasoningError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: config.reasoning_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            timeout: config.reasoning_timeout,
        })
    }
}

/// Request body for the messages endpoint
#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage>,
}

#[async_trait]
impl ReasoningClient for HttpReasoningClient {
    async fn assess(
        &self,
        symptom_text: &str,
        history: &[ChatMessage],
    ) -> Result<Verdict, ReasoningError> {
        let mut messages = history.to_vec();
        messages.push(ChatMessage::user(build_prompt(symptom_text)));

        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages,
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(key) = &self.api_key {
            request = request
                .header("x-api-key", key)
                .header("anthropic-version", ANTHROPIC_VERSION);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ReasoningError::Timeout(self.timeout)
            } else {
                ReasoningError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ReasoningError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ReasoningError::Timeout(self.timeout)
            } else {
                ReasoningError::Transport(e.to_string())
            }
        })?;

        let text = parse_envelope(&raw)?;
        parse_verdict(&text)
    }
}

/// Mock reasoning client for testing, returns a configurable raw reply.
pub struct MockReasoningClient {
    reply: Result<String, ReasoningError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_text: Mutex<Option<String>>,
}

impl MockReasoningClient {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            delay: None,
            calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        }
    }

    pub fn failing(error: ReasoningError) -> Self {
        Self {
            reply: Err(error),
            ..Self::new("")
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Symptom text passed to the most recent call.
    pub fn last_text(&self) -> Option<String> {
        self.last_text
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl ReasoningClient for MockReasoningClient {
    async fn assess(
        &self,
        symptom_text: &str,
        _history: &[ChatMessage],
    ) -> Result<Verdict, ReasoningError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_text.lock() {
            *guard = Some(symptom_text.to_string());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        parse_verdict(&self.reply.clone()?)
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use super::*;
    use crate::reasoning::types::Recommendation;

    const VERDICT: &str = r#"{"recommendation":"HOME_CARE","severity":"Mild","reasoning":"Rest.","redFlags":[],"timeframe":"Monitor"}"#;

    async fn serve(app: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn config_for(addr: SocketAddr, api_key: Option<&str>) -> ServiceConfig {
        ServiceConfig {
            reasoning_url: format!("http://{addr}/v1/messages"),
            api_key: api_key.map(str::to_string),
            reasoning_timeout: Duration::from_secs(2),
            ..ServiceConfig::default()
        }
    }

    #[tokio::test]
    async fn http_client_sends_prompt_and_parses_envelope() {
        let app = Router::new().route(
            "/v1/messages",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let messages = body["messages"].as_array().cloned().unwrap_or_default();
                let last = messages.last().cloned().unwrap_or(Value::Null);
                let ok = headers.get("x-api-key").is_some_and(|v| v == "sk-test")
                    && headers.get("anthropic-version").is_some()
                    && body["max_tokens"] == 1000
                    && messages.len() == 2
                    && last["role"] == "user"
                    && last["content"]
                        .as_str()
                        .is_some_and(|c| c.contains("Symptoms: my back hurts"));
                let text = if ok {
                    format!("```json\n{VERDICT}\n```")
                } else {
                    "unexpected request".to_string()
                };
                Json(json!({ "content": [{ "type": "text", "text": text }] }))
            }),
        );
        let addr = serve(app).await;

        let client = HttpReasoningClient::new(&config_for(addr, Some("sk-test"))).unwrap();
        let history = [ChatMessage::user("earlier question")];
        let verdict = client.assess("my back hurts", &history).await.unwrap();
        assert_eq!(verdict.recommendation, Recommendation::HomeCare);
    }

    #[tokio::test]
    async fn http_client_reports_error_status() {
        let app = Router::new().route(
            "/v1/messages",
            post(|| async { (StatusCode::UNAUTHORIZED, "invalid x-api-key") }),
        );
        let addr = serve(app).await;

        let client = HttpReasoningClient::new(&config_for(addr, None)).unwrap();
        let err = client.assess("my back hurts", &[]).await.unwrap_err();
        assert_eq!(
            err,
            ReasoningError::Status {
                status: 401,
                body: "invalid x-api-key".into()
            }
        );
    }

    #[tokio::test]
    async fn http_client_reports_unreachable_service() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpReasoningClient::new(&config_for(addr, None)).unwrap();
        let err = client.assess("my back hurts", &[]).await.unwrap_err();
        assert!(matches!(err, ReasoningError::Transport(_)));
    }

    #[tokio::test]
    async fn mock_returns_parsed_verdict_and_counts_calls() {
        let client = MockReasoningClient::new(VERDICT);
        let verdict = client.assess("tired", &[]).await.unwrap();
        assert_eq!(verdict.severity, "Mild");
        assert_eq!(client.calls(), 1);
        assert_eq!(client.last_text().as_deref(), Some("tired"));
    }

    #[tokio::test]
    async fn failing_mock_returns_its_error() {
        let client = MockReasoningClient::failing(ReasoningError::EmptyResponse);
        assert_eq!(
            client.assess("tired", &[]).await,
            Err(ReasoningError::EmptyResponse)
        );
    }
}
