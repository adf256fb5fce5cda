use retry_policies::{RetryDecision, RetryPolicy};
use std::fmt::Display;
use std::time::SystemTime;

pub enum MaybeRetry<T> {
    MaybeRetry(T),
    NoRetry(T),
}

impl<T> MaybeRetry<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::MaybeRetry(inner) | Self::NoRetry(inner) => inner,
        }
    }
}

/// Runs `operation` until it succeeds, fails with [`MaybeRetry::NoRetry`] or `policy` gives up.
pub async fn retry<P, F, Fut, R, E>(policy: &P, mut operation: F) -> Result<R, E>
where
    P: RetryPolicy,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<R, MaybeRetry<E>>>,
    E: Display,
{
    let started_at = SystemTime::now();
    let mut past_retries = 0;
    loop {
        let error = match operation().await {
            Ok(result) => return Ok(result),
            Err(MaybeRetry::NoRetry(error)) => return Err(error),
            Err(MaybeRetry::MaybeRetry(error)) => error,
        };
        match policy.should_retry(started_at, past_retries) {
            RetryDecision::Retry { execute_after } => {
                let wait = execute_after.duration_since(SystemTime::now()).unwrap_or_default();
                past_retries += 1;
                tracing::debug!(attempt = past_retries, ?wait, %error, "retrying request");
                tokio::time::sleep(wait).await;
            }
            RetryDecision::DoNotRetry => return Err(error),
        }
    }
}
