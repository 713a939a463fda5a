use std::fmt;
use std::path::PathBuf;

/// Result of running the SBOM generator against one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The gate passed and every format was written
    Generated(Vec<PathBuf>),
    /// The gate rejected the scan; nothing was written
    NoLibraries,
}

/// Result of processing one repository that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryOutcome {
    /// SBOM artifacts were written
    Generated { artifacts: usize },
    /// The scan found no library components
    NoLibraries,
    /// No manifest file could be found or downloaded (metadata mode)
    NoManifest,
    /// Output already existed according to the dedup ledger
    Skipped,
}

impl From<GenerationOutcome> for RepositoryOutcome {
    fn from(outcome: GenerationOutcome) -> Self {
        match outcome {
            GenerationOutcome::Generated(paths) => RepositoryOutcome::Generated {
                artifacts: paths.len(),
            },
            GenerationOutcome::NoLibraries => RepositoryOutcome::NoLibraries,
        }
    }
}

/// Per-ecosystem counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EcosystemReport {
    pub ecosystem: String,
    pub candidates: usize,
    pub generated: usize,
    pub no_libraries: usize,
    pub no_manifest: usize,
    pub skipped: usize,
    pub failed: usize,
    /// The source document could not be fetched
    pub source_unavailable: bool,
}

impl EcosystemReport {
    pub fn new(ecosystem: impl Into<String>) -> Self {
        Self {
            ecosystem: ecosystem.into(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: &RepositoryOutcome) {
        match outcome {
            RepositoryOutcome::Generated { .. } => self.generated += 1,
            RepositoryOutcome::NoLibraries => self.no_libraries += 1,
            RepositoryOutcome::NoManifest => self.no_manifest += 1,
            RepositoryOutcome::Skipped => self.skipped += 1,
        }
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// Candidates that went through a strategy, successfully or not
    pub fn processed(&self) -> usize {
        self.generated + self.no_libraries + self.no_manifest + self.failed
    }
}

impl fmt::Display for EcosystemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.source_unavailable {
            return write!(f, "[{}] source document unavailable", self.ecosystem);
        }
        write!(
            f,
            "[{}] {} candidate(s): {} generated, {} without libraries, {} without manifest, {} skipped, {} failed",
            self.ecosystem,
            self.candidates,
            self.generated,
            self.no_libraries,
            self.no_manifest,
            self.skipped,
            self.failed
        )
    }
}
