use crate::client::base::{BaseClient, Config, SecureClient};
use uplift_http::HttpClient;

/// Client authenticating with a pre-issued bearer token.
pub struct TokenClient {
    config: Config,
    http_client: HttpClient,
    token: Option<String>,
}

impl TokenClient {
    #[must_use]
    pub fn new(config: Config, http_client: HttpClient, token: Option<String>) -> Self {
        Self {
            config,
            http_client,
            token,
        }
    }
}

impl BaseClient for TokenClient {
    fn get_http_client(&self) -> &HttpClient {
        &self.http_client
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

impl SecureClient for TokenClient {
    fn get_token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
