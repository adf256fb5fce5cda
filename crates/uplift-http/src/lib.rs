mod core;
mod error;
mod reqwest;
pub mod retry;

pub use crate::core::BaseHttpClient;
pub use crate::core::HttpRequest;
pub use crate::core::HttpResponse;
pub use crate::error::Error;
pub use crate::reqwest::ClientSettings;
pub use crate::reqwest::ReqwestHttpClient as HttpClient;
