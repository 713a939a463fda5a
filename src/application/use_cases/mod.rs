/// Use cases module containing application business logic orchestration
mod clone_and_scan;
mod collect_metadata;
mod crawl_pipeline;
mod sbom_generation;

pub use clone_and_scan::CloneAndScanStrategy;
pub use collect_metadata::CollectMetadataStrategy;
pub use crawl_pipeline::{CrawlPipeline, RepositoryStrategy};
pub use sbom_generation::SbomGenerationService;
