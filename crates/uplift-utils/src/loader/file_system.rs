use crate::loader::error::LoadingError;
use crate::loader::file::File;
use crate::loader::{Filter, LoaderTrait};
use async_stream::try_stream;
use async_walkdir::{DirEntry, Filtering, WalkDir};
use futures::{Stream, StreamExt};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::fs;

#[derive(Clone, Debug)]
pub struct FileSystemLoader {
    base_path: PathBuf,
}

impl FileSystemLoader {
    #[must_use]
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn sub_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return self.base_path.clone();
        }
        self.base_path.join(path)
    }
}

impl LoaderTrait for FileSystemLoader {
    fn load_dir<'a, P: AsRef<Path>>(
        &'a self,
        path: P,
        filter: Filter,
    ) -> Pin<Box<dyn Stream<Item = Result<File, LoadingError>> + Send + 'a>> {
        let path = self.sub_path(path);
        tracing::trace!(?path, "loading dir");
        let mut walker = WalkDir::new(path).filter(move |entry| crate::loader::file_system::filter(entry, filter));
        let stream = try_stream! {
            while let Some(entry) = walker.next().await {
                let entry = entry?;
                if entry.file_type().await?.is_file() {
                    yield read_file(&entry.path()).await?;
                }
            }
        };
        Box::pin(stream)
    }

    async fn load_file<P: AsRef<Path> + Send>(&self, path: P) -> Result<File, LoadingError> {
        let path = self.sub_path(path);
        tracing::trace!(?path, "loading file");
        match read_file(&path).await {
            Err(LoadingError::IO(e)) if e.kind() == ErrorKind::NotFound => {
                Err(LoadingError::NotFound(path.to_string_lossy().into()))
            }
            res => res,
        }
    }

    async fn store_file<P: AsRef<Path> + Send>(&self, path: P, content: &[u8]) -> Result<(), LoadingError> {
        let path = self.sub_path(path);
        tracing::trace!(?path, size = content.len(), "storing file");
        let Some(file_name) = path.file_name() else {
            return Err(LoadingError::InvalidPath(path));
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        // Readers never observe a half written file
        let mut tmp_name = file_name.to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = path.with_file_name(tmp_name);
        fs::write(&tmp_path, content).await?;
        fs::rename(&tmp_path, &path).await?;
        Ok(())
    }

}

async fn read_file(path: &Path) -> Result<File, LoadingError> {
    tracing::trace!(?path, "reading file");
    let data = fs::read(path).await?;
    Ok(File::new(path.to_string_lossy().into(), data))
}

async fn filter(entry: DirEntry, filter: Filter) -> Filtering {
    let Ok(ft) = entry.file_type().await else {
        tracing::warn!(path = ?entry.path(), "could not get file type, skipping");
        return Filtering::Ignore;
    };
    if ft.is_dir() {
        return Filtering::Continue;
    }

    if filter.apply(entry.path()) {
        Filtering::Continue
    } else {
        Filtering::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("uplift-utils-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test(tokio::test)]
    async fn test_store_and_load_round_trip() {
        let dir = scratch_dir("store");
        let loader = FileSystemLoader::new(dir.clone());

        loader.store_file("completions/q.json", b"[]").await.unwrap();
        let file = loader.load_file("completions/q.json").await.unwrap();
        assert_eq!(file.content, b"[]");
        assert!(file.key().ends_with("q.json"));
        assert!(!dir.join("completions/q.json.tmp").exists());

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test(tokio::test)]
    async fn test_missing_file_is_not_found() {
        let loader = FileSystemLoader::new(scratch_dir("missing"));
        assert!(matches!(
            loader.load_file("nope.json").await,
            Err(LoadingError::NotFound(_))
        ));
    }

    #[test(tokio::test)]
    async fn test_load_dir_applies_filter() {
        let dir = scratch_dir("filter");
        let loader = FileSystemLoader::new(dir.clone());
        loader.store_file("a.yaml", b"a").await.unwrap();
        loader.store_file("nested/b.yml", b"b").await.unwrap();
        loader.store_file("c.json", b"c").await.unwrap();

        let mut contents: Vec<Vec<u8>> = loader
            .load_dir("", Filter::Yaml)
            .map(|file| file.unwrap().content)
            .collect()
            .await;
        contents.sort();
        assert_eq!(contents, vec![b"a".to_vec(), b"b".to_vec()]);

        std::fs::remove_dir_all(dir).unwrap();
    }
}
