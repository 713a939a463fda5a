use crate::shared::Result;
use std::path::Path;

/// ArtifactWriter port for persisting output artifacts
///
/// Artifacts are append-only: the pipeline never reads them back except
/// through the dedup ledger's directory scan.
pub trait ArtifactWriter {
    /// Writes `content` to `path`, creating missing parent directories
    ///
    /// # Errors
    /// Returns an error if:
    /// - A parent directory cannot be created
    /// - The destination is a symbolic link
    /// - Writing fails
    fn write_artifact(&self, path: &Path, content: &[u8]) -> Result<()>;

    /// Creates `dir` and its parents if they do not exist yet
    fn ensure_directory(&self, dir: &Path) -> Result<()>;

    /// Removes an artifact; a path that does not exist is not an error
    fn remove_artifact(&self, path: &Path) -> Result<()>;
}
