use crate::shared::Result;
use std::path::Path;

/// RepositoryMaterializer port for obtaining a working copy of a repository
pub trait RepositoryMaterializer {
    /// Materializes the repository at `url` into `destination`
    ///
    /// The parent of `destination` exists; `destination` itself does not. The
    /// caller owns its lifetime and removes it afterwards.
    ///
    /// # Errors
    /// Returns an error for network failures, private or missing
    /// repositories, or any other clone failure
    fn materialize(&self, url: &str, destination: &Path) -> Result<()>;
}
