use async_trait::async_trait;
use std::time::Duration;

use crate::core::{BaseHttpClient, HttpRequest, HttpResponse};
use crate::error::Error;
use crate::retry::{self, MaybeRetry};
use http::request::Parts;
use http::{HeaderMap, StatusCode};
use reqwest::{Request, Response};
use retry_policies::policies::ExponentialBackoff;
use serde::de::DeserializeOwned;
use tokio::time::timeout;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder, Debug, Clone)]
pub struct ClientSettings {
    /// Timeout of a single attempt.
    #[builder(default = Duration::from_secs(10))]
    pub request_timeout: Duration,
    /// Upper bound for all attempts of one request, backoff included.
    #[builder(default = Duration::from_secs(30))]
    pub total_timeout: Duration,
    #[builder(default = 3)]
    pub max_retries: u32,
    #[builder(default = Duration::from_millis(200))]
    pub min_backoff: Duration,
    #[builder(default = Duration::from_secs(5))]
    pub max_backoff: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Clone, Debug)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    backoff: ExponentialBackoff,
    total_timeout: Duration,
}

impl ReqwestHttpClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, Error> {
        let client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(settings.request_timeout)
            .build()?;
        let backoff = ExponentialBackoff::builder()
            .retry_bounds(settings.min_backoff, settings.max_backoff)
            .build_with_max_retries(settings.max_retries);

        Ok(Self {
            client,
            backoff,
            total_timeout: settings.total_timeout,
        })
    }

    fn build_request(&self, parts: &Parts, body: &[u8]) -> Result<Request, Error> {
        self.client
            .request(parts.method.clone(), parts.uri.to_string())
            .headers(parts.headers.clone())
            .body(body.to_vec())
            .build()
            .map_err(Into::into)
    }

    /// Sends the request, retrying connection failures and transient statuses. Any other
    /// non-success status is returned as [`Error::StatusCode`].
    async fn execute_request(&self, request: HttpRequest) -> Result<Response, Error> {
        let (parts, body) = request.into_parts();
        let (parts, body) = (&parts, &body);
        let do_request = move || async move {
            let request = self.build_request(parts, body).map_err(MaybeRetry::NoRetry)?;
            tracing::debug!(method = %parts.method, uri = %parts.uri, "performing request");
            let response = self.client.execute(request).await.map_err(|e| classify(e.into()))?;
            if response.status().is_success() {
                Ok(response)
            } else {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                Err(classify(Error::StatusCode { status, body }))
            }
        };

        timeout(self.total_timeout, retry::retry(&self.backoff, do_request))
            .await
            .map_err(|_| Error::Timeout)?
    }
}

fn to_http_response<T>(status: StatusCode, headers: HeaderMap, body: T) -> Result<HttpResponse<T>, Error> {
    let mut http_response = http::response::Response::builder().status(status);
    if let Some(header_map) = http_response.headers_mut() {
        header_map.extend(headers);
    }
    http_response.body(body).map_err(Into::into)
}

fn classify(error: Error) -> MaybeRetry<Error> {
    if error.is_transient() {
        MaybeRetry::MaybeRetry(error)
    } else {
        MaybeRetry::NoRetry(error)
    }
}

#[async_trait]
impl BaseHttpClient for ReqwestHttpClient {
    type Error = Error;

    async fn request_text(&self, request: HttpRequest) -> Result<HttpResponse<String>, Self::Error> {
        let response = self.execute_request(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await?;
        to_http_response(status, headers, text)
    }

    async fn request_json<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<HttpResponse<T>, Self::Error> {
        let response = self.execute_request(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let json = response.json().await?;
        to_http_response(status, headers, json)
    }
}
