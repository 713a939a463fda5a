use super::command::ToolCommand;
use crate::crawl::domain::{SbomFormat, SbomTarget};
use crate::ports::outbound::SbomTool;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Syft adapter, used for materialized repositories
///
/// Runs `syft scan <source> -o <format>` and reads the document from stdout.
#[derive(Debug, Clone)]
pub struct SyftTool {
    program: PathBuf,
}

impl SyftTool {
    pub const DEFAULT_PROGRAM: &'static str = "syft";

    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }

    fn output_name(format: SbomFormat) -> &'static str {
        match format {
            SbomFormat::CycloneDxJson => "cyclonedx-json",
            SbomFormat::SpdxJson => "spdx-json",
            SbomFormat::SpdxTagValue => "spdx-tag-value",
        }
    }

    /// Syft source scheme: `dir:` for working copies, `file:` for single files
    fn source(target: &SbomTarget) -> String {
        match target {
            SbomTarget::Directory(path) => format!("dir:{}", path.display()),
            SbomTarget::File(path) => format!("file:{}", path.display()),
        }
    }

    fn command(&self, target: &SbomTarget, format: SbomFormat) -> ToolCommand {
        ToolCommand::new(self.name(), &self.program)
            .arg("scan")
            .arg(Self::source(target))
            .arg("-o")
            .arg(Self::output_name(format))
            .arg("--quiet")
    }
}

impl Default for SyftTool {
    fn default() -> Self {
        Self::new(PathBuf::from(Self::DEFAULT_PROGRAM))
    }
}

impl SbomTool for SyftTool {
    fn name(&self) -> &str {
        "syft"
    }

    fn artifact_suffix(&self, format: SbomFormat) -> &'static str {
        match format {
            SbomFormat::CycloneDxJson => "syft_cyclonedx.json",
            SbomFormat::SpdxJson => "syft_spdx.json",
            SbomFormat::SpdxTagValue => "syft_spdx.txt",
        }
    }

    fn generate(&self, target: &SbomTarget, format: SbomFormat) -> Result<String> {
        self.command(target, format).output_string()
    }

    fn generate_to_file(
        &self,
        target: &SbomTarget,
        format: SbomFormat,
        destination: &Path,
    ) -> Result<()> {
        self.command(target, format).output_to_file(destination)
    }
}
