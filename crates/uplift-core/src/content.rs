use crate::error::ContentError;
use async_trait::async_trait;
use std::sync::Arc;
use uplift_config::{ContentCatalog, Section};
use uplift_utils::loader::Loader;

/// Where quest content comes from. Sources may fetch lazily; the catalog they hand out is
/// immutable.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn catalog(&self) -> Result<Arc<ContentCatalog>, ContentError>;

    async fn section(&self, quest_id: &str, section_id: &str) -> Result<Option<Arc<Section>>, ContentError> {
        Ok(self.catalog().await?.get_section(quest_id, section_id).cloned())
    }
}

#[async_trait]
impl ContentSource for Arc<ContentCatalog> {
    async fn catalog(&self) -> Result<Arc<ContentCatalog>, ContentError> {
        Ok(Arc::clone(self))
    }
}

/// Loads the catalog on first use and keeps it. A failed load is retried on the next call.
#[derive(Debug)]
pub struct LazyContent {
    loader: Loader,
    catalog: tokio::sync::OnceCell<Arc<ContentCatalog>>,
}

impl LazyContent {
    #[must_use]
    pub fn new(loader: Loader) -> Self {
        Self {
            loader,
            catalog: tokio::sync::OnceCell::new(),
        }
    }
}

#[async_trait]
impl ContentSource for LazyContent {
    async fn catalog(&self) -> Result<Arc<ContentCatalog>, ContentError> {
        let catalog = self
            .catalog
            .get_or_try_init(|| async { uplift_config::catalog::load(&self.loader).await.map(Arc::new) })
            .await?;
        Ok(Arc::clone(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;
    use uplift_utils::loader::LoaderTrait;
    use uplift_utils::loader::memory::MemoryLoader;

    const QUEST: &[u8] = br#"
version: "0.1"
quest:
  id: q
  title: Q
  sections:
    - id: s
      title: S
      questions:
        - text: ok?
          type: ternary-choice
          body: {}
"#;

    #[test(tokio::test)]
    async fn test_lazy_content_retries_after_failure() {
        let memory = MemoryLoader::default();
        memory.store_file("q.yaml", b"version: \"9\"").await.unwrap();
        let content = LazyContent::new(Loader::Memory(memory.clone()));
        assert!(matches!(content.catalog().await, Err(ContentError::Catalog(_))));

        memory.store_file("q.yaml", QUEST).await.unwrap();
        assert!(content.section("q", "s").await.unwrap().is_some());
        assert!(content.section("q", "missing").await.unwrap().is_none());
    }
}
