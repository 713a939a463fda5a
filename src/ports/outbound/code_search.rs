use crate::crawl::domain::ManifestFile;
use crate::shared::Result;

/// One search result item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// `blob` view URL of the matching file
    pub html_url: String,
}

impl SearchHit {
    pub fn new(html_url: impl Into<String>) -> Self {
        Self {
            html_url: html_url.into(),
        }
    }
}

/// Result of one code-search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Successful response with at least one item
    Found(Vec<SearchHit>),
    /// Successful response without items
    Empty,
    /// Non-success status, typically secondary rate limiting
    Rejected { status: u16 },
}

/// CodeSearchRepository port for the remote code-search API
///
/// Implementations perform exactly one request per call; pacing between
/// calls is the caller's responsibility (see [`super::RateLimiter`]).
pub trait CodeSearchRepository {
    /// Searches for `manifest.filename()` scoped to `manifest.repository()`
    ///
    /// # Errors
    /// Returns an error only for transport failures or unparseable bodies.
    /// HTTP error statuses are reported as [`SearchOutcome::Rejected`].
    fn search(&self, manifest: &ManifestFile) -> Result<SearchOutcome>;

    /// Downloads raw file content
    ///
    /// # Returns
    /// `Ok(None)` when the server answers with a non-success status
    fn download(&self, url: &str) -> Result<Option<Vec<u8>>>;
}
