use crate::shared::Result;

/// SourceDocumentFetcher port for downloading curated list documents
pub trait SourceDocumentFetcher {
    /// Fetches the document at `url` as text
    ///
    /// # Returns
    /// `Ok(None)` when the server answers with a non-success status
    ///
    /// # Errors
    /// Returns an error for transport failures
    fn fetch(&self, url: &str) -> Result<Option<String>>;
}
