#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub key: String,
    pub content: Vec<u8>,
}

impl File {
    pub(crate) fn new(key: String, content: Vec<u8>) -> Self {
        File { key, content }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}
