use crate::crawl::domain::{SbomFormat, SbomTarget};
use crate::shared::Result;
use std::path::Path;

/// SbomTool port for an external SBOM generator
///
/// Invocations take structured arguments only. Target paths are passed to
/// the tool as discrete arguments and never interpolated into a shell line.
pub trait SbomTool {
    /// Short tool name used in log messages
    fn name(&self) -> &str;

    /// File-name suffix of the artifact for `format`, appended to the artifact prefix
    fn artifact_suffix(&self, format: SbomFormat) -> &'static str;

    /// Runs the tool and returns the document it prints
    ///
    /// # Errors
    /// Returns an error if the tool cannot be started or exits unsuccessfully
    fn generate(&self, target: &SbomTarget, format: SbomFormat) -> Result<String>;

    /// Runs the tool with its output going straight to `destination`
    fn generate_to_file(
        &self,
        target: &SbomTarget,
        format: SbomFormat,
        destination: &Path,
    ) -> Result<()>;
}
