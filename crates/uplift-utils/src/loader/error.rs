use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadingError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    WalkDir(#[from] async_walkdir::Error),
    #[error("Invalid URL: {0}")]
    InvalidURL(String),
    #[error("Invalid Path: {0}")]
    InvalidPath(PathBuf),
    #[error("File not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Yaml(#[from] serde_yml::Error),
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("{0}")]
    Other(String),
}

impl From<url::ParseError> for LoadingError {
    fn from(e: url::ParseError) -> Self {
        ParseError::Url(e).into()
    }
}

impl From<serde_yml::Error> for LoadingError {
    fn from(e: serde_yml::Error) -> Self {
        ParseError::Yaml(e).into()
    }
}

impl From<std::string::FromUtf8Error> for LoadingError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        ParseError::Utf8(e).into()
    }
}
