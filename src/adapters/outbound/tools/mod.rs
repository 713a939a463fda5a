/// SBOM generator adapters driving external command-line tools
mod command;
mod syft;
mod trivy;

pub use syft::SyftTool;
pub use trivy::TrivyTool;
