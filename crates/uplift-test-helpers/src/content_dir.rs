use std::path::Path;
use tempfile::TempDir;
use thiserror::Error;
use uplift_utils::loader::Loader;
use uplift_utils::loader::file_system::FileSystemLoader;

#[derive(Error, Debug)]
pub enum ContentDirError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Scratch directory for quest content and stored completions, removed on drop.
pub struct ContentDir {
    temp_dir: TempDir,
}

impl ContentDir {
    pub fn new() -> Result<Self, ContentDirError> {
        let temp_dir = TempDir::with_prefix("test-uplift-content")?;
        tracing::info!(path = ?temp_dir.path(), "created content dir");
        Ok(Self { temp_dir })
    }

    pub fn write(&self, name: &str, content: &str) -> Result<(), ContentDirError> {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    #[must_use]
    pub fn loader(&self) -> Loader {
        Loader::FileSystem(FileSystemLoader::new(self.temp_dir.path().to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_write_nested() {
        let dir = ContentDir::new().unwrap();
        dir.write("quests/a.yaml", "version: \"0.1\"").unwrap();
        assert!(dir.path().join("quests/a.yaml").is_file());
    }
}
