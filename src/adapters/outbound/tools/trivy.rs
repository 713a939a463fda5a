use super::command::ToolCommand;
use crate::crawl::domain::{SbomFormat, SbomTarget};
use crate::ports::outbound::SbomTool;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Trivy adapter, used for single downloaded manifests
///
/// Runs `trivy filesystem --format <format> [--output <file>] <path>`.
#[derive(Debug, Clone)]
pub struct TrivyTool {
    program: PathBuf,
}

impl TrivyTool {
    pub const DEFAULT_PROGRAM: &'static str = "trivy";

    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }

    fn format_name(format: SbomFormat) -> &'static str {
        match format {
            SbomFormat::CycloneDxJson => "cyclonedx",
            SbomFormat::SpdxJson => "spdx-json",
            SbomFormat::SpdxTagValue => "spdx",
        }
    }

    fn command(
        &self,
        target: &SbomTarget,
        format: SbomFormat,
        destination: Option<&Path>,
    ) -> ToolCommand {
        let mut command = ToolCommand::new(self.name(), &self.program)
            .arg("filesystem")
            .arg("--quiet")
            .arg("--format")
            .arg(Self::format_name(format));

        if let Some(destination) = destination {
            command = command.arg("--output").arg(destination);
        }

        // Trivy scans directories and single files alike
        command.arg(target.path())
    }
}

impl Default for TrivyTool {
    fn default() -> Self {
        Self::new(PathBuf::from(Self::DEFAULT_PROGRAM))
    }
}

impl SbomTool for TrivyTool {
    fn name(&self) -> &str {
        "trivy"
    }

    fn artifact_suffix(&self, format: SbomFormat) -> &'static str {
        match format {
            SbomFormat::CycloneDxJson => "cyclonedx.json",
            SbomFormat::SpdxJson => "spdx-json.json",
            SbomFormat::SpdxTagValue => "spdx.json",
        }
    }

    fn generate(&self, target: &SbomTarget, format: SbomFormat) -> Result<String> {
        self.command(target, format, None).output_string()
    }

    fn generate_to_file(
        &self,
        target: &SbomTarget,
        format: SbomFormat,
        destination: &Path,
    ) -> Result<()> {
        let result = self
            .command(target, format, Some(destination))
            .output_string()
            .map(|_| ());
        if result.is_err() {
            // Trivy may have created the output before failing
            let _ = fs::remove_file(destination);
        }
        result
    }
}
