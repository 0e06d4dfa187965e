//! Remote query gateway for the DivulgaCandContas API.
//!
//! One outbound GET per invocation, bounded by the configured timeout;
//! no retries, no caching. Transport and status failures are normalized
//! into the [`ToolError`] taxonomy here so the rest of the pipeline only
//! sees decoded JSON or a classified error.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::error::ToolError;
use crate::core::config::ApiConfig;

/// Read-only access to the remote API.
///
/// The dispatcher depends on this trait rather than on a concrete
/// client, which is the seam tests use to stub remote responses.
#[async_trait]
pub trait DivulgaApi: Send + Sync {
    /// Execute one GET against the given resource path (relative to the
    /// API base) and return the decoded JSON body.
    async fn get(&self, path: &str) -> Result<Value, ToolError>;
}

/// Gateway backed by a shared reqwest client.
///
/// The client only shares its connection pool across invocations; calls
/// never serialize against each other.
#[derive(Debug)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Build the gateway from API configuration.
    pub fn new(config: &ApiConfig) -> crate::core::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl DivulgaApi for HttpGateway {
    async fn get(&self, path: &str) -> Result<Value, ToolError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ToolError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ToolError::NotFound);
        }
        if !status.is_success() {
            return Err(ToolError::Remote {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("status desconhecido")
                    .to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ToolError::Transport(e.to_string()))
    }
}

/// Test support: an in-memory gateway with scripted replies.
#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// What the stub should reply with on every call.
    pub enum StubReply {
        Ok(Value),
        NotFound,
        Status(u16),
        Disconnect,
    }

    /// Scripted [`DivulgaApi`] that records every requested path.
    pub struct StubGateway {
        reply: StubReply,
        calls: AtomicUsize,
        paths: Mutex<Vec<String>>,
    }

    impl StubGateway {
        pub fn new(reply: StubReply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
                paths: Mutex::new(Vec::new()),
            }
        }

        /// Stub that always returns the given body.
        pub fn ok(body: Value) -> Self {
            Self::new(StubReply::Ok(body))
        }

        /// Number of calls the stub has received.
        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Paths requested so far, in call order.
        pub fn requested_paths(&self) -> Vec<String> {
            self.paths.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DivulgaApi for StubGateway {
        async fn get(&self, path: &str) -> Result<Value, ToolError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.paths.lock().unwrap().push(path.to_string());

            match &self.reply {
                StubReply::Ok(body) => Ok(body.clone()),
                StubReply::NotFound => Err(ToolError::NotFound),
                StubReply::Status(status) => Err(ToolError::Remote {
                    status: *status,
                    status_text: "Service Unavailable".to_string(),
                }),
                StubReply::Disconnect => {
                    Err(ToolError::Transport("connection reset by peer".to_string()))
                }
            }
        }
    }
}
