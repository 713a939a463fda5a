use super::CrawlMode;
use crate::crawl::domain::Ecosystem;
use crate::shared::error::CrawlError;
use crate::shared::Result;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// CrawlConfig - the complete, explicit configuration of one run
///
/// Built once from CLI arguments, environment and config file, then passed
/// into the pipeline. Nothing in the crate reads global configuration.
#[derive(Clone)]
pub struct CrawlConfig {
    pub mode: CrawlMode,
    /// Where SBOM artifacts land
    pub output_root: PathBuf,
    /// Where downloaded manifests land (metadata mode)
    pub metadata_root: PathBuf,
    /// Code-search API token (metadata mode)
    pub credential: Option<String>,
    /// Courtesy delay after every API call
    pub sleep_short: Duration,
    /// Backoff after a rejected API call
    pub sleep_long: Duration,
    /// Shallow clone depth; `None` clones full history
    pub clone_depth: Option<u32>,
    /// Consult the ledger in clone mode as well
    pub skip_existing: bool,
    /// Alternative code-search API root
    pub api_url: Option<String>,
    pub syft_program: PathBuf,
    pub trivy_program: PathBuf,
    /// Ecosystems in iteration order
    pub ecosystems: Vec<Ecosystem>,
}

impl CrawlConfig {
    pub const DEFAULT_OUTPUT_ROOT: &'static str = "./SBOM/";
    pub const DEFAULT_METADATA_ROOT: &'static str = "./metadata/";

    /// Checks option combinations that cannot be expressed in the CLI parser
    ///
    /// # Errors
    /// Returns an error if metadata mode has no credential or no ecosystem is configured
    pub fn validate(&self) -> Result<()> {
        if self.mode == CrawlMode::Metadata && self.credential().is_none() {
            return Err(CrawlError::MissingCredential.into());
        }

        if self.ecosystems.is_empty() {
            return Err(CrawlError::Validation {
                message: "No ecosystems selected".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Returns the credential if one is set and not blank
    pub fn credential(&self) -> Option<&str> {
        self.credential
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            mode: CrawlMode::default(),
            output_root: PathBuf::from(Self::DEFAULT_OUTPUT_ROOT),
            metadata_root: PathBuf::from(Self::DEFAULT_METADATA_ROOT),
            credential: None,
            sleep_short: Duration::from_secs(5),
            sleep_long: Duration::from_secs(15),
            clone_depth: Some(1),
            skip_existing: false,
            api_url: None,
            syft_program: PathBuf::from("syft"),
            trivy_program: PathBuf::from("trivy"),
            ecosystems: Ecosystem::default_catalog(),
        }
    }
}

// Hand-written so the credential never ends up in logs
impl fmt::Debug for CrawlConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrawlConfig")
            .field("mode", &self.mode)
            .field("output_root", &self.output_root)
            .field("metadata_root", &self.metadata_root)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("sleep_short", &self.sleep_short)
            .field("sleep_long", &self.sleep_long)
            .field("clone_depth", &self.clone_depth)
            .field("skip_existing", &self.skip_existing)
            .field("api_url", &self.api_url)
            .field("syft_program", &self.syft_program)
            .field("trivy_program", &self.trivy_program)
            .field(
                "ecosystems",
                &self.ecosystems.iter().map(Ecosystem::name).collect::<Vec<_>>(),
            )
            .finish()
    }
}
