use crate::error::{Error, HttpError, InternalError};
use async_trait::async_trait;
use http::{HeaderMap, HeaderValue, Method, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uplift_http::{BaseHttpClient, HttpClient, HttpRequest, HttpResponse};
use uplift_model::completion::CompletionRecord;
use uri_url::url_to_uri;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: ApiUrl,
}

impl Config {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: ApiUrl { url: base_url },
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiUrl {
    pub url: Url,
}

impl From<ApiUrl> for Url {
    fn from(api_url: ApiUrl) -> Self {
        api_url.url
    }
}

impl ApiUrl {
    pub fn for_api(&self, api_path: &str) -> Result<Url, InternalError> {
        self.url.join("api/v0/")?.join(api_path).map_err(Into::into)
    }

    pub fn completions(&self, quest_id: &str) -> Result<Url, InternalError> {
        self.for_api(&format!("quests/{quest_id}/completions"))
    }
}

fn build_request(method: Method, url: &Url, headers: HeaderMap, body: Vec<u8>) -> Result<HttpRequest, HttpError> {
    let mut request_builder = http::request::Request::builder()
        .method(method)
        .uri(url_to_uri(url)?);
    if let Some(header_map) = request_builder.headers_mut() {
        header_map.extend(headers);
    }
    Ok(request_builder.body(body)?)
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

#[async_trait]
pub trait BaseClient: Send + Sync {
    fn get_http_client(&self) -> &HttpClient;
    fn get_config(&self) -> &Config;

    async fn api_send_request<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<HttpResponse<T>, HttpError> {
        tracing::debug!(method = ?request.method(), uri = ?request.uri(), "Sending API request");
        self.get_http_client()
            .request_json(request)
            .await
            .map_err(HttpError::from)
    }
}

#[async_trait]
pub trait SecureClient: BaseClient {
    fn get_token(&self) -> Option<&str>;

    fn auth_headers(&self) -> Result<HeaderMap, Error> {
        let token = self.get_token().ok_or(Error::MissingToken)?;
        let mut headers = HeaderMap::new();
        let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(InternalError::from)?;
        value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, value);
        Ok(headers)
    }

    async fn fetch_completions(&self, quest_id: &str) -> Result<Vec<CompletionRecord>, Error> {
        let url = self.get_config().base_url.completions(quest_id)?;
        let request = build_request(Method::GET, &url, self.auth_headers()?, vec![])?;
        let res = self.api_send_request(request).await?;
        Ok(res.into_body())
    }

    async fn post_completion(&self, record: &CompletionRecord) -> Result<(), Error> {
        self.api_send_json(Method::POST, &self.get_config().base_url.completions(&record.quest_id)?, record)
            .await
    }

    async fn api_send_json<B: Serialize + Sync>(&self, method: Method, url: &Url, body: &B) -> Result<(), Error> {
        let mut headers = self.auth_headers()?;
        headers.extend(json_headers());
        let request = build_request(method, url, headers, serde_json::to_vec(body)?)?;
        tracing::debug!(method = ?request.method(), uri = ?request.uri(), "Sending API request");
        self.get_http_client()
            .request_text(request)
            .await
            .map_err(HttpError::from)?;
        Ok(())
    }
}
