/// Data Transfer Objects for application layer
///
/// DTOs carry configuration into the pipeline and results back out,
/// keeping the domain layer isolated.
mod crawl_config;
mod crawl_mode;
mod crawl_report;

pub use crawl_config::CrawlConfig;
pub use crawl_mode::CrawlMode;
pub use crawl_report::{EcosystemReport, GenerationOutcome, RepositoryOutcome};
