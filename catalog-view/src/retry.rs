//! Fixed-count retries for catalog fetches

use std::future::Future;

use catalog_client::ClientResult;

/// Run `op` up to `1 + retry_count` times.
///
/// Stops early on success, on an error that is not retryable, or once
/// `still_wanted` reports that nobody is waiting for the result anymore.
/// There is no delay between attempts.
pub async fn with_retries<T, F, Fut, W>(
    what: &str,
    retry_count: u32,
    mut still_wanted: W,
    mut op: F,
) -> ClientResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ClientResult<T>>,
    W: FnMut() -> bool,
{
    let mut attempt = 0u32;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < retry_count && e.is_retryable() && still_wanted() => {
                attempt += 1;
                tracing::warn!(
                    "{} failed, retrying (attempt {}/{}): {}",
                    what,
                    attempt,
                    retry_count,
                    e
                );
            }
            Err(e) => return Err(e),
        }
    }
}
