//! awesome-sbom - SBOM collection for the repositories listed in awesome lists
//!
//! This library crawls curated "awesome list" documents, deduplicates the
//! repositories they reference against existing output, fetches either full
//! clones or individual dependency manifests, and drives external SBOM
//! generators (syft, trivy) over them. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`crawl`): Identities, ecosystems, URL extraction and the library gate
//! - **Application Layer** (`application`): Crawl strategies and the pipeline driver
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use awesome_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let progress_reporter = ConsoleProgressReporter::new();
//! let generator = SbomGenerationService::new(SyftTool::default(), FileSystemWriter::new());
//! let strategy = CloneAndScanStrategy::new(GitCloner::default(), generator, PathBuf::from("./SBOM/"));
//!
//! let pipeline = CrawlPipeline::new(HttpSourceFetcher::new()?, strategy, &progress_reporter);
//! for report in pipeline.run(&Ecosystem::default_catalog()) {
//!     println!("{}", report);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod crawl;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::ConsoleProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DirectoryLedger, DirectoryLedgerProvider, FileSystemWriter, LedgerLayout,
    };
    pub use crate::adapters::outbound::network::{
        FixedDelayRateLimiter, GitHubCodeSearchClient, HttpSourceFetcher,
    };
    pub use crate::adapters::outbound::tools::{SyftTool, TrivyTool};
    pub use crate::adapters::outbound::vcs::GitCloner;
    pub use crate::application::dto::{
        CrawlConfig, CrawlMode, EcosystemReport, GenerationOutcome, RepositoryOutcome,
    };
    pub use crate::application::use_cases::{
        CloneAndScanStrategy, CollectMetadataStrategy, CrawlPipeline, RepositoryStrategy,
        SbomGenerationService,
    };
    pub use crate::crawl::domain::{
        Candidate, Ecosystem, ManifestFile, RepositoryIdentity, SbomFormat, SbomTarget,
    };
    pub use crate::crawl::policies::LibraryComponentGate;
    pub use crate::crawl::services::RepositoryUrlExtractor;
    pub use crate::ports::outbound::{
        ArtifactWriter, CodeSearchRepository, DedupLedger, LedgerProvider, ProgressReporter,
        RateLimiter, RepositoryMaterializer, SbomTool, SearchHit, SearchOutcome,
        SourceDocumentFetcher,
    };
    pub use crate::shared::Result;
}
