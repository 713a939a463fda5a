/// Network adapters for external HTTP calls
mod fixed_delay;
mod github_search_client;
mod http_source_fetcher;

pub use fixed_delay::FixedDelayRateLimiter;
pub use github_search_client::GitHubCodeSearchClient;
pub use http_source_fetcher::HttpSourceFetcher;

/// User agent sent with every request
fn user_agent() -> String {
    format!("awesome-sbom/{}", env!("CARGO_PKG_VERSION"))
}
