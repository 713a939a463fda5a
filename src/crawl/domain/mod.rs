pub mod ecosystem;
pub mod manifest;
pub mod repository;
pub mod sbom_format;

pub use ecosystem::Ecosystem;
pub use manifest::ManifestFile;
pub use repository::{Candidate, RepositoryIdentity};
pub use sbom_format::{SbomFormat, SbomTarget};
