use super::crawl_pipeline::RepositoryStrategy;
use super::SbomGenerationService;
use crate::application::dto::{CrawlMode, RepositoryOutcome};
use crate::crawl::domain::{Candidate, Ecosystem, SbomTarget};
use crate::ports::outbound::{
    ArtifactWriter, DedupLedger, LedgerProvider, RepositoryMaterializer, SbomTool,
};
use crate::shared::error::CrawlError;
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// Prefix of the per-repository scratch directory
const WORKSPACE_PREFIX: &str = "awesome-sbom-";

/// CloneAndScanStrategy - clone mode
///
/// Materializes each repository into its own temporary directory, scans the
/// working copy and writes the artifacts flat into the output root. The
/// temporary directory is removed when processing returns, successfully or not.
pub struct CloneAndScanStrategy<M, T, W> {
    materializer: M,
    generator: SbomGenerationService<T, W>,
    output_root: PathBuf,
    ledgers: Option<Box<dyn LedgerProvider>>,
}

impl<M, T, W> CloneAndScanStrategy<M, T, W>
where
    M: RepositoryMaterializer,
    T: SbomTool,
    W: ArtifactWriter,
{
    pub fn new(materializer: M, generator: SbomGenerationService<T, W>, output_root: PathBuf) -> Self {
        Self {
            materializer,
            generator,
            output_root,
            ledgers: None,
        }
    }

    /// Skips repositories that already have output
    pub fn with_ledger(mut self, ledgers: Box<dyn LedgerProvider>) -> Self {
        self.ledgers = Some(ledgers);
        self
    }
}

impl<M, T, W> RepositoryStrategy for CloneAndScanStrategy<M, T, W>
where
    M: RepositoryMaterializer,
    T: SbomTool,
    W: ArtifactWriter,
{
    fn mode(&self) -> CrawlMode {
        CrawlMode::Clone
    }

    fn ledger(&self, ecosystem: &Ecosystem) -> Result<Option<Box<dyn DedupLedger>>> {
        self.ledgers
            .as_ref()
            .map(|provider| provider.open(ecosystem))
            .transpose()
    }

    fn process(&self, ecosystem: &Ecosystem, candidate: &Candidate) -> Result<RepositoryOutcome> {
        let identity = &candidate.identity;

        // Dropped at the end of this call on every path, which deletes the clone
        let workspace = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir()
            .map_err(|e| CrawlError::OutputDirectoryError {
                path: std::env::temp_dir(),
                details: e.to_string(),
            })?;

        let parent = workspace.path().join(ecosystem.name()).join(identity.owner());
        fs::create_dir_all(&parent).map_err(|e| CrawlError::OutputDirectoryError {
            path: parent.clone(),
            details: e.to_string(),
        })?;
        let checkout = parent.join(identity.name());

        self.materializer
            .materialize(&identity.clone_url(), &checkout)?;

        let outcome = self.generator.generate(
            &SbomTarget::Directory(checkout),
            &self.output_root,
            &identity.artifact_prefix(),
        )?;

        Ok(outcome.into())
    }
}
