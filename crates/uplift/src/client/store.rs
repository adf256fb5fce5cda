use crate::client::base::SecureClient;
use async_trait::async_trait;
use uplift_core::StoreError;
use uplift_core::store::CompletionStore;
use uplift_model::completion::CompletionRecord;

/// Completion store backed by the uplift api.
pub struct HttpCompletionStore<C> {
    client: C,
}

impl<C: SecureClient> HttpCompletionStore<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: SecureClient> CompletionStore for HttpCompletionStore<C> {
    async fn fetch_all(&self, quest_id: &str) -> Result<Vec<CompletionRecord>, StoreError> {
        self.client
            .fetch_completions(quest_id)
            .await
            .map_err(|e| StoreError::Remote(Box::new(e)))
    }

    async fn save(&self, record: &CompletionRecord) -> Result<(), StoreError> {
        self.client
            .post_completion(record)
            .await
            .map_err(|e| StoreError::Remote(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, TokenClient};
    use chrono::Utc;
    use std::time::Duration;
    use test_log::test;
    use uplift_http::{ClientSettings, HttpClient};
    use url::Url;

    fn store(token: Option<&str>) -> HttpCompletionStore<TokenClient> {
        let settings = ClientSettings::builder()
            .max_retries(1)
            .min_backoff(Duration::from_millis(1))
            .max_backoff(Duration::from_millis(2))
            .total_timeout(Duration::from_secs(5))
            .build();
        HttpCompletionStore::new(TokenClient::new(
            Config::new(Url::parse("http://127.0.0.1:1/").unwrap()),
            HttpClient::new(&settings).unwrap(),
            token.map(str::to_owned),
        ))
    }

    #[test(tokio::test)]
    async fn test_unreachable_backend() {
        let err = store(Some("token")).fetch_all("quest").await.unwrap_err();
        assert!(matches!(err, StoreError::Remote(_)));
    }

    #[test(tokio::test)]
    async fn test_save_without_token() {
        let record = CompletionRecord {
            quest_id: "quest".to_owned(),
            section_id: "section".to_owned(),
            section_title: "Section".to_owned(),
            answers: vec![],
            completed_at_utc: Utc::now(),
        };
        let err = store(None).save(&record).await.unwrap_err();
        assert!(err.to_string().contains("no api token"));
    }
}
