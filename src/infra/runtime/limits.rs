use std::time::Duration;

use crate::infra::config::ApiConfig;

/// Build a reqwest client with sane defaults (connect + total timeouts).
pub fn make_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(2))
        .timeout(Duration::from_secs(10))
        .build()
        .expect("reqwest client")
}

/// Same, honoring a per-config total timeout override.
pub fn make_http_client_with(cfg: &ApiConfig) -> reqwest::Client {
    let timeout = cfg.timeout_ms.map(Duration::from_millis).unwrap_or(Duration::from_secs(10));
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(2))
        .timeout(timeout)
        .build()
        .expect("reqwest client")
}

/// Simple exponential backoff utility for async ops.
pub async fn retry_async<T, E, Fut, F>(mut attempts: u32, mut op: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
{
    let mut try_num: u32 = 0;
    let mut delay_ms: u64 = 50;
    loop {
        match op(try_num).await {
            Ok(v) => return Ok(v),
            Err(e) => {
                if attempts == 0 {
                    return Err(e);
                }
                attempts -= 1;
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                delay_ms = (delay_ms * 2).min(1_000);
                try_num += 1;
            }
        }
    }
}
