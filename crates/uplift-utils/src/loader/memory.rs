use crate::loader::error::LoadingError;
use crate::loader::file::File;
use crate::loader::{Filter, LoaderTrait};
use async_stream::try_stream;
use futures::Stream;
use std::collections::BTreeMap;
use std::path::Path;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Loader keeping its files in process memory. Clones share the same files.
#[derive(Clone, Debug, Default)]
pub struct MemoryLoader {
    files: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

fn key(path: impl AsRef<Path>) -> String {
    path.as_ref().to_string_lossy().trim_matches('/').to_owned()
}

impl MemoryLoader {
    async fn get(&self, key: &str) -> Result<File, LoadingError> {
        let files = self.files.read().await;
        let content = files
            .get(key)
            .ok_or_else(|| LoadingError::NotFound(key.to_owned()))?;
        Ok(File::new(key.to_owned(), content.clone()))
    }
}

impl LoaderTrait for MemoryLoader {
    fn load_dir<'a, P: AsRef<Path>>(
        &'a self,
        path: P,
        filter: Filter,
    ) -> Pin<Box<dyn Stream<Item = Result<File, LoadingError>> + Send + 'a>> {
        let prefix = key(path);
        let stream = try_stream! {
            let keys: Vec<String> = self
                .files
                .read()
                .await
                .keys()
                .filter(|key| prefix.is_empty() || key.starts_with(&format!("{prefix}/")))
                .filter(|key| filter.apply(key))
                .cloned()
                .collect();
            for key in keys {
                yield self.get(&key).await?;
            }
        };
        Box::pin(stream)
    }

    async fn load_file<P: AsRef<Path> + Send>(&self, path: P) -> Result<File, LoadingError> {
        self.get(&key(path)).await
    }

    async fn store_file<P: AsRef<Path> + Send>(&self, path: P, content: &[u8]) -> Result<(), LoadingError> {
        let key = key(path);
        tracing::trace!(key, size = content.len(), "storing file in memory");
        self.files.write().await.insert(key, content.to_vec());
        Ok(())
    }

}
