use super::crawl_pipeline::RepositoryStrategy;
use super::SbomGenerationService;
use crate::application::dto::{CrawlMode, RepositoryOutcome};
use crate::crawl::domain::{Candidate, Ecosystem, ManifestFile, SbomTarget};
use crate::ports::outbound::{
    ArtifactWriter, CodeSearchRepository, DedupLedger, LedgerProvider, ProgressReporter,
    RateLimiter, SbomTool, SearchHit, SearchOutcome,
};
use crate::shared::error::CrawlError;
use crate::shared::Result;
use std::path::PathBuf;
use uuid::Uuid;

/// Prefix of the scratch directory a manifest is scanned from
const SCAN_DIR_PREFIX: &str = "awesome-sbom-manifest-";

/// CollectMetadataStrategy - metadata mode
///
/// Looks up each manifest filename of the ecosystem through the code-search
/// API, downloads the first hit that can be fetched and scans that single
/// file. The first manifest that downloads ends the repository; later
/// filenames are not tried.
///
/// Every API call is followed by the short courtesy wait, a rejected search
/// additionally by the long backoff.
///
/// The persisted copy carries the `<owner>_<repo>_` prefix, but scanners
/// recognize manifests by their exact file name, so the scan runs against a
/// copy under the original name in a temporary directory.
pub struct CollectMetadataStrategy<C, L, T, W, PR> {
    search: C,
    rate_limiter: L,
    generator: SbomGenerationService<T, W>,
    ledgers: Box<dyn LedgerProvider>,
    progress_reporter: PR,
    metadata_root: PathBuf,
    sbom_root: PathBuf,
}

impl<C, L, T, W, PR> CollectMetadataStrategy<C, L, T, W, PR>
where
    C: CodeSearchRepository,
    L: RateLimiter,
    T: SbomTool,
    W: ArtifactWriter,
    PR: ProgressReporter,
{
    pub fn new(
        search: C,
        rate_limiter: L,
        generator: SbomGenerationService<T, W>,
        ledgers: Box<dyn LedgerProvider>,
        progress_reporter: PR,
    ) -> Self {
        Self {
            search,
            rate_limiter,
            generator,
            ledgers,
            progress_reporter,
            metadata_root: PathBuf::from("./metadata/"),
            sbom_root: PathBuf::from("./SBOM/"),
        }
    }

    /// Sets where manifests and SBOM artifacts are stored
    pub fn with_roots(mut self, metadata_root: PathBuf, sbom_root: PathBuf) -> Self {
        self.metadata_root = metadata_root;
        self.sbom_root = sbom_root;
        self
    }

    /// Downloads hits in order and persists the first one that succeeds
    ///
    /// Returns the downloaded content
    fn download_first(
        &self,
        ecosystem: &Ecosystem,
        manifest: &ManifestFile,
        hits: &[SearchHit],
    ) -> Result<Option<Vec<u8>>> {
        for hit in hits {
            let url = ManifestFile::raw_url(&hit.html_url);
            let downloaded = self.search.download(&url);
            self.rate_limiter.wait_before_next_call();

            match downloaded {
                Ok(Some(content)) => {
                    let path = self
                        .metadata_root
                        .join(ecosystem.name())
                        .join(manifest.artifact_name());
                    self.generator.writer().write_artifact(&path, &content)?;
                    self.progress_reporter.report(&format!(
                        "📥 [{}] Saved {}",
                        ecosystem.name(),
                        path.display()
                    ));
                    return Ok(Some(content));
                }
                Ok(None) => self.progress_reporter.report_error(&format!(
                    "⚠️  [{}] Download refused: {}",
                    ecosystem.name(),
                    url
                )),
                Err(e) => self.progress_reporter.report_error(&format!(
                    "⚠️  [{}] Download failed: {}: {:#}",
                    ecosystem.name(),
                    url,
                    e
                )),
            }
        }
        Ok(None)
    }

    /// Scans `content` saved under the manifest's own file name
    fn scan(
        &self,
        ecosystem: &Ecosystem,
        manifest: &ManifestFile,
        content: &[u8],
    ) -> Result<RepositoryOutcome> {
        // Removed when this call returns
        let workspace = tempfile::Builder::new()
            .prefix(SCAN_DIR_PREFIX)
            .tempdir()
            .map_err(|e| CrawlError::OutputDirectoryError {
                path: std::env::temp_dir(),
                details: e.to_string(),
            })?;
        let scan_path = workspace.path().join(manifest.filename());
        self.generator.writer().write_artifact(&scan_path, content)?;

        let outcome = self.generator.generate(
            &SbomTarget::File(scan_path),
            &self.sbom_root.join(ecosystem.name()),
            &manifest.artifact_name(),
        )?;
        Ok(outcome.into())
    }
}

impl<C, L, T, W, PR> RepositoryStrategy for CollectMetadataStrategy<C, L, T, W, PR>
where
    C: CodeSearchRepository,
    L: RateLimiter,
    T: SbomTool,
    W: ArtifactWriter,
    PR: ProgressReporter,
{
    fn mode(&self) -> CrawlMode {
        CrawlMode::Metadata
    }

    fn ledger(&self, ecosystem: &Ecosystem) -> Result<Option<Box<dyn DedupLedger>>> {
        self.ledgers.open(ecosystem).map(Some)
    }

    /// Random order on every run
    fn order(&self, mut candidates: Vec<Candidate>) -> Vec<Candidate> {
        candidates.sort_by_cached_key(|_| Uuid::new_v4());
        candidates
    }

    fn process(&self, ecosystem: &Ecosystem, candidate: &Candidate) -> Result<RepositoryOutcome> {
        for filename in ecosystem.manifests() {
            let manifest = ManifestFile::new(candidate.identity.clone(), filename.as_str())?;

            let searched = self.search.search(&manifest);
            self.rate_limiter.wait_before_next_call();

            match searched? {
                SearchOutcome::Found(hits) => {
                    if let Some(content) = self.download_first(ecosystem, &manifest, &hits)? {
                        return self.scan(ecosystem, &manifest, &content);
                    }
                }
                SearchOutcome::Empty => self.progress_reporter.report(&format!(
                    "   [{}] No {} in {}",
                    ecosystem.name(),
                    filename,
                    candidate.identity
                )),
                SearchOutcome::Rejected { status } => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  [{}] Search for {} in {} rejected with status {}, backing off",
                        ecosystem.name(),
                        filename,
                        candidate.identity,
                        status
                    ));
                    self.rate_limiter.wait_after_failure();
                }
            }
        }

        Ok(RepositoryOutcome::NoManifest)
    }
}
