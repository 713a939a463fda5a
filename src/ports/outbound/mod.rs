/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (HTTP, git, scanners, file system, console).
pub mod artifact_writer;
pub mod code_search;
pub mod dedup_ledger;
pub mod progress_reporter;
pub mod rate_limiter;
pub mod repository_materializer;
pub mod sbom_tool;
pub mod source_document;

pub use artifact_writer::ArtifactWriter;
pub use code_search::{CodeSearchRepository, SearchHit, SearchOutcome};
pub use dedup_ledger::{DedupLedger, LedgerProvider};
pub use progress_reporter::ProgressReporter;
pub use rate_limiter::RateLimiter;
pub use repository_materializer::RepositoryMaterializer;
pub use sbom_tool::SbomTool;
pub use source_document::SourceDocumentFetcher;
