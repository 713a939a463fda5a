use awesome_sbom::prelude::*;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub const LIBRARY_CYCLONEDX: &str =
    r#"{"bomFormat":"CycloneDX","specVersion":"1.5","components":[{"type":"library","name":"serde","version":"1.0.0"}]}"#;

pub const EMPTY_CYCLONEDX: &str = r#"{"bomFormat":"CycloneDX","specVersion":"1.5","components":[]}"#;

/// Mock SbomTool returning a fixed CycloneDX document
///
/// Uses the suffixes of the real tool it stands in for.
#[derive(Clone)]
pub struct MockSbomTool {
    name: &'static str,
    cyclonedx: String,
    pub targets: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockSbomTool {
    /// Stands in for syft
    pub fn syft(cyclonedx: &str) -> Self {
        Self {
            name: "syft",
            cyclonedx: cyclonedx.to_string(),
            targets: Arc::default(),
        }
    }

    /// Stands in for trivy
    pub fn trivy(cyclonedx: &str) -> Self {
        Self {
            name: "trivy",
            ..Self::syft(cyclonedx)
        }
    }

    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

impl SbomTool for MockSbomTool {
    fn name(&self) -> &str {
        self.name
    }

    fn artifact_suffix(&self, format: SbomFormat) -> &'static str {
        match (self.name, format) {
            ("syft", SbomFormat::CycloneDxJson) => "syft_cyclonedx.json",
            ("syft", SbomFormat::SpdxJson) => "syft_spdx.json",
            ("syft", SbomFormat::SpdxTagValue) => "syft_spdx.txt",
            (_, SbomFormat::CycloneDxJson) => "cyclonedx.json",
            (_, SbomFormat::SpdxJson) => "spdx-json.json",
            (_, SbomFormat::SpdxTagValue) => "spdx.json",
        }
    }

    fn generate(&self, target: &SbomTarget, _format: SbomFormat) -> Result<String> {
        self.targets
            .lock()
            .unwrap()
            .push(target.path().display().to_string());
        Ok(self.cyclonedx.clone())
    }

    fn generate_to_file(
        &self,
        _target: &SbomTarget,
        format: SbomFormat,
        destination: &Path,
    ) -> Result<()> {
        fs::write(destination, format!("{} document", format))?;
        Ok(())
    }
}
