use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Received invalid json data")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Internal(#[from] InternalError),

    #[error("Not authenticated: no api token configured")]
    MissingToken,
}

#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}

#[derive(Error, Debug)]
pub enum HttpError {
    #[error(transparent)]
    Uplift(#[from] uplift_http::Error),

    #[error(transparent)]
    UrlToUriError(#[from] uri_url::UrlToUriError),

    #[error(transparent)]
    Http(#[from] http::Error),
}
