mod client;
pub mod error;

pub use client::base::ApiUrl;
pub use client::base::Config;
pub use client::store::HttpCompletionStore;
pub use client::token::TokenClient;

pub use client::base::BaseClient;
pub use client::base::SecureClient;
