use crate::loader::error::{LoadingError, ParseError};
use crate::loader::file::File;
use crate::loader::file_system::FileSystemLoader;
use crate::loader::memory::MemoryLoader;
use futures::Stream;
use std::path::Path;
use std::pin::Pin;
use url::Url;

pub mod error;
pub mod file;
pub mod file_system;
pub mod memory;

#[derive(Debug, Clone, Copy, Default)]
pub enum Filter {
    Yaml,
    Json,
    #[default]
    Any,
}

impl Filter {
    pub fn apply<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str());
        let Some(extension) = extension else {
            return false;
        };
        let allowed_extensions: &[&str] = match self {
            Filter::Yaml => &["yaml", "yml"],
            Filter::Json => &["json"],
            Filter::Any => return true,
        };
        allowed_extensions.contains(&extension)
    }
}

#[derive(Clone, Debug)]
pub enum Loader {
    FileSystem(FileSystemLoader),
    Memory(MemoryLoader),
}

impl Loader {
    /// Resolves a content or store location. Only `file://` urls are backed by a real medium,
    /// `memory://` yields a fresh, empty in-process loader.
    pub fn from_url(url: &Url) -> Result<Self, LoadingError> {
        match url.scheme() {
            "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|()| LoadingError::InvalidURL(url.to_string()))?;
                Ok(Loader::FileSystem(FileSystemLoader::new(path)))
            }
            "memory" => Ok(Loader::Memory(MemoryLoader::default())),
            scheme => Err(LoadingError::Parse(ParseError::Other(format!(
                "Invalid scheme: {scheme}"
            )))),
        }
    }

    /// Accepts either a url or a plain file system path.
    pub fn from_location(location: &str) -> Result<Self, LoadingError> {
        match Url::parse(location) {
            Ok(url) => Self::from_url(&url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Ok(Loader::FileSystem(FileSystemLoader::new(Path::new(location).to_path_buf())))
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl LoaderTrait for Loader {
    fn load_dir<'a, P: AsRef<Path>>(
        &'a self,
        path: P,
        filter: Filter,
    ) -> Pin<Box<dyn Stream<Item = Result<File, LoadingError>> + Send + 'a>> {
        match self {
            Loader::FileSystem(loader) => loader.load_dir(path, filter),
            Loader::Memory(loader) => loader.load_dir(path, filter),
        }
    }

    async fn load_file<P: AsRef<Path> + Send>(&self, path: P) -> Result<File, LoadingError> {
        match self {
            Loader::FileSystem(loader) => loader.load_file(path).await,
            Loader::Memory(loader) => loader.load_file(path).await,
        }
    }

    async fn store_file<P: AsRef<Path> + Send>(&self, path: P, content: &[u8]) -> Result<(), LoadingError> {
        match self {
            Loader::FileSystem(loader) => loader.store_file(path, content).await,
            Loader::Memory(loader) => loader.store_file(path, content).await,
        }
    }

}

pub trait LoaderTrait {
    fn load_dir<'a, P: AsRef<Path>>(
        &'a self,
        path: P,
        filter: Filter,
    ) -> Pin<Box<dyn Stream<Item = Result<File, LoadingError>> + Send + 'a>>;
    fn load_file<P: AsRef<Path> + Send>(&self, path: P) -> impl Future<Output = Result<File, LoadingError>> + Send;
    fn store_file<P: AsRef<Path> + Send>(
        &self,
        path: P,
        content: &[u8],
    ) -> impl Future<Output = Result<(), LoadingError>> + Send;
}
