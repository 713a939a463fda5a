use crate::application::dto::GenerationOutcome;
use crate::crawl::domain::{SbomFormat, SbomTarget};
use crate::crawl::policies::LibraryComponentGate;
use crate::ports::outbound::{ArtifactWriter, SbomTool};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// SbomGenerationService - runs one SBOM tool against one target
///
/// The CycloneDX document is produced first and decides, through the
/// [`LibraryComponentGate`], whether anything is written at all. Only then
/// are the SPDX documents generated, each straight into its own file.
///
/// # Type Parameters
/// * `T` - SbomTool implementation
/// * `W` - ArtifactWriter implementation
pub struct SbomGenerationService<T, W> {
    tool: T,
    writer: W,
}

impl<T, W> SbomGenerationService<T, W>
where
    T: SbomTool,
    W: ArtifactWriter,
{
    pub fn new(tool: T, writer: W) -> Self {
        Self { tool, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Generates all formats for `target` into `output_dir`
    ///
    /// # Arguments
    /// * `target` - Working copy or single manifest file to scan
    /// * `output_dir` - Directory receiving the artifacts
    /// * `prefix` - Artifact name prefix, joined to each tool suffix with `_`
    ///
    /// # Returns
    /// `Generated` with the written paths, or `NoLibraries` if the gate
    /// rejected the scan (nothing is written in that case)
    ///
    /// # Errors
    /// Returns an error if the tool fails or an artifact cannot be written
    pub fn generate(
        &self,
        target: &SbomTarget,
        output_dir: &Path,
        prefix: &str,
    ) -> Result<GenerationOutcome> {
        let cyclonedx = self.tool.generate(target, SbomFormat::CycloneDxJson)?;
        if !LibraryComponentGate::is_valid(&cyclonedx) {
            return Ok(GenerationOutcome::NoLibraries);
        }

        self.writer.ensure_directory(output_dir)?;

        let mut written = Vec::with_capacity(SbomFormat::ALL.len());
        match self.write_all(target, output_dir, prefix, &cyclonedx, &mut written) {
            Ok(()) => Ok(GenerationOutcome::Generated(written)),
            Err(e) => {
                // A partial set must not count as done on the next run
                for path in &written {
                    let _ = self.writer.remove_artifact(path);
                }
                Err(e)
            }
        }
    }

    /// Writes every format; `written` collects each path before it is
    /// attempted so a failure can remove it again
    fn write_all(
        &self,
        target: &SbomTarget,
        output_dir: &Path,
        prefix: &str,
        cyclonedx: &str,
        written: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let cyclonedx_path = self.artifact_path(output_dir, prefix, SbomFormat::CycloneDxJson);
        written.push(cyclonedx_path.clone());
        self.writer
            .write_artifact(&cyclonedx_path, cyclonedx.as_bytes())?;

        for format in [SbomFormat::SpdxJson, SbomFormat::SpdxTagValue] {
            let path = self.artifact_path(output_dir, prefix, format);
            written.push(path.clone());
            self.tool.generate_to_file(target, format, &path)?;
        }
        Ok(())
    }

    fn artifact_path(&self, output_dir: &Path, prefix: &str, format: SbomFormat) -> PathBuf {
        output_dir.join(format!("{}_{}", prefix, self.tool.artifact_suffix(format)))
    }
}
