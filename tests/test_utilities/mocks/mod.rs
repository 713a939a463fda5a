/// Mock implementations for testing
mod mock_code_search;
mod mock_materializer;
mod mock_progress_reporter;
mod mock_rate_limiter;
mod mock_sbom_tool;
mod mock_source_fetcher;

#[allow(unused_imports)]
pub use mock_code_search::MockCodeSearch;
#[allow(unused_imports)]
pub use mock_materializer::MockMaterializer;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
#[allow(unused_imports)]
pub use mock_rate_limiter::MockRateLimiter;
#[allow(unused_imports)]
pub use mock_sbom_tool::{MockSbomTool, EMPTY_CYCLONEDX, LIBRARY_CYCLONEDX};
#[allow(unused_imports)]
pub use mock_source_fetcher::MockSourceFetcher;
