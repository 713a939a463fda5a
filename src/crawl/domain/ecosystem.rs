use crate::shared::security::validate_path_component;
use crate::shared::Result;

/// Built-in ecosystems: (name, awesome-list README, manifest filenames in search order)
const CATALOG: &[(&str, &str, &[&str])] = &[
    (
        "python",
        "https://raw.githubusercontent.com/vinta/awesome-python/master/README.md",
        &["requirements.txt", "poetry.lock", "Pipfile.lock"],
    ),
    (
        "javascript",
        "https://raw.githubusercontent.com/sorrycc/awesome-javascript/master/README.md",
        &["yarn.lock", "package-lock.json", "package.json", "pnpm-lock.yaml"],
    ),
    (
        "go",
        "https://raw.githubusercontent.com/avelino/awesome-go/main/README.md",
        &["go.mod", "go.sum"],
    ),
    (
        "java",
        "https://raw.githubusercontent.com/akullpp/awesome-java/master/README.md",
        &["pom.xml", "gradle.lockfile"],
    ),
    (
        "ruby",
        "https://raw.githubusercontent.com/markets/awesome-ruby/master/README.md",
        &["Gemfile.lock"],
    ),
    (
        "rust",
        "https://raw.githubusercontent.com/rust-unofficial/awesome-rust/main/README.md",
        &["Cargo.lock"],
    ),
    (
        "php",
        "https://raw.githubusercontent.com/ziadoz/awesome-php/master/README.md",
        &["composer.lock"],
    ),
    (
        "dotnet",
        "https://raw.githubusercontent.com/quozd/awesome-dotnet/master/README.md",
        &["packages.lock.json"],
    ),
    (
        "swift",
        "https://raw.githubusercontent.com/matteocrippa/awesome-swift/master/README.md",
        &["Package.resolved"],
    ),
];

/// Ecosystem value object: a language community with its curated list and
/// manifest filename conventions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ecosystem {
    name: String,
    source_url: String,
    manifests: Vec<String>,
}

impl Ecosystem {
    pub fn new(name: String, source_url: String, manifests: Vec<String>) -> Result<Self> {
        // The name becomes an output subdirectory
        validate_path_component(&name, "Ecosystem name")?;

        if !(source_url.starts_with("http://") || source_url.starts_with("https://")) {
            anyhow::bail!(
                "Ecosystem '{}' has an invalid source URL: {}",
                name,
                source_url
            );
        }

        for manifest in &manifests {
            validate_path_component(manifest, "Manifest filename")?;
        }

        Ok(Self {
            name,
            source_url,
            manifests,
        })
    }

    /// Returns the built-in ecosystem catalog in iteration order
    pub fn default_catalog() -> Vec<Ecosystem> {
        CATALOG
            .iter()
            .map(|(name, url, manifests)| Ecosystem {
                name: name.to_string(),
                source_url: url.to_string(),
                manifests: manifests.iter().map(|m| m.to_string()).collect(),
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn manifests(&self) -> &[String] {
        &self.manifests
    }
}
