//! Data provider seam for the realtime service.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use engage_common::{ConversationId, RealtimeError};

use super::types::RealtimeSnapshot;

/// Capability the polling service fetches through. The service treats any
/// error as a transient failure and never inspects the detail.
#[async_trait]
pub trait RealtimeDataProvider: Send + Sync {
    async fn fetch(&self, conversation: &ConversationId)
        -> Result<RealtimeSnapshot, RealtimeError>;

    /// True while a request is outstanding.
    fn is_fetching(&self) -> bool;
}

/// HTTP implementation against the realtime endpoint.
pub struct HttpRealtimeProvider {
    http: reqwest::Client,
    base_url: String,
    fetching: AtomicBool,
}

impl HttpRealtimeProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
            fetching: AtomicBool::new(false),
        }
    }

    async fn get_snapshot(
        &self,
        conversation: &ConversationId,
    ) -> Result<RealtimeSnapshot, RealtimeError> {
        let url = format!(
            "{}/api/v1/realtime/{}",
            self.base_url.trim_end_matches('/'),
            conversation
        );
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RealtimeError::Fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| RealtimeError::Fetch(e.to_string()))?;

        response
            .json::<RealtimeSnapshot>()
            .await
            .map_err(|e| RealtimeError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RealtimeDataProvider for HttpRealtimeProvider {
    async fn fetch(
        &self,
        conversation: &ConversationId,
    ) -> Result<RealtimeSnapshot, RealtimeError> {
        self.fetching.store(true, Ordering::SeqCst);
        let result = self.get_snapshot(conversation).await;
        self.fetching.store(false, Ordering::SeqCst);
        result
    }

    fn is_fetching(&self) -> bool {
        self.fetching.load(Ordering::SeqCst)
    }
}
