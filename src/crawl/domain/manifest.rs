use super::RepositoryIdentity;
use crate::shared::security::validate_path_component;
use crate::shared::Result;

/// One dependency-manifest file of interest inside a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFile {
    repository: RepositoryIdentity,
    filename: String,
}

impl ManifestFile {
    pub fn new(repository: RepositoryIdentity, filename: impl Into<String>) -> Result<Self> {
        let filename = filename.into();
        validate_path_component(&filename, "Manifest filename")?;
        Ok(Self {
            repository,
            filename,
        })
    }

    pub fn repository(&self) -> &RepositoryIdentity {
        &self.repository
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Name of the downloaded manifest on disk: `<owner>_<repo>_<filename>`
    ///
    /// Also the prefix of the SBOM artifacts generated from it.
    pub fn artifact_name(&self) -> String {
        format!("{}_{}", self.repository.artifact_prefix(), self.filename)
    }

    /// Converts a `blob` view URL into the `raw` view URL of the same file
    pub fn raw_url(html_url: &str) -> String {
        html_url.replacen("/blob/", "/raw/", 1)
    }
}
