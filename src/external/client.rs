use std::sync::LazyLock;
use std::time::Duration;

/// Global HTTP client shared by every HTTP-backed sender
///
/// Initialized lazily on first access so connection pools and DNS results are
/// reused across sends. Senders set their own per-request timeout on top of
/// the defaults below.
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .gzip(true)
        .brotli(true)
        .user_agent(concat!("isp-notify/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});
