use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::application::dto::{CrawlConfig, CrawlMode};
use crate::config::{merge_ecosystems, ConfigFile};
use crate::crawl::domain::Ecosystem;
use crate::shared::error::CrawlError;
use crate::shared::Result;

/// Collect SBOMs for the repositories listed in awesome lists
#[derive(Parser, Debug)]
#[command(name = "awesome-sbom")]
#[command(version)]
#[command(
    about = "Collect SBOMs for the repositories listed in awesome lists",
    long_about = None
)]
pub struct Args {
    /// Crawl mode: clone (full clones scanned with syft) or metadata (manifests via code search, scanned with trivy)
    #[arg(short, long, default_value = "clone")]
    pub mode: CrawlMode,

    /// Directory receiving SBOM files [default: ./SBOM/]
    #[arg(short, long, env = "SBOM_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Directory receiving downloaded manifests [default: ./metadata/]
    #[arg(long, env = "METADATA_OUTPUT")]
    pub metadata_output: Option<PathBuf>,

    /// Code-search API token (required in metadata mode)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Only crawl these ecosystems (can be specified multiple times: -e go -e rust)
    #[arg(short, long = "ecosystem", value_name = "NAME")]
    pub ecosystems: Vec<String>,

    /// Seconds to wait after every API call [default: 5]
    #[arg(long, value_name = "SECONDS")]
    pub sleep_short: Option<u64>,

    /// Seconds to wait after a rejected API call [default: 15]
    #[arg(long, value_name = "SECONDS")]
    pub sleep_long: Option<u64>,

    /// Clone depth, 0 for full history [default: 1]
    #[arg(long, value_name = "DEPTH")]
    pub clone_depth: Option<u32>,

    /// Skip repositories that already have output in clone mode
    #[arg(long)]
    pub skip_existing: bool,

    /// Path to the syft executable
    #[arg(long, value_name = "PATH")]
    pub syft_path: Option<PathBuf>,

    /// Path to the trivy executable
    #[arg(long, value_name = "PATH")]
    pub trivy_path: Option<PathBuf>,

    /// Code-search API root [default: https://api.github.com]
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Config file (defaults to ./awesome-sbom.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolves the run configuration: CLI and environment first, then the
    /// config file, then built-in defaults
    ///
    /// # Errors
    /// Returns an error for invalid ecosystem entries or an unknown
    /// ecosystem filter
    pub fn into_crawl_config(self, file: Option<ConfigFile>) -> Result<CrawlConfig> {
        let file = file.unwrap_or_default();
        let defaults = CrawlConfig::default();

        let catalog = match file.ecosystems.as_deref() {
            Some(entries) => merge_ecosystems(defaults.ecosystems.clone(), entries)?,
            None => defaults.ecosystems.clone(),
        };
        let ecosystems = select_ecosystems(catalog, &self.ecosystems)?;

        let clone_depth = match self.clone_depth.or(file.clone_depth) {
            Some(0) => None,
            Some(depth) => Some(depth),
            None => defaults.clone_depth,
        };

        Ok(CrawlConfig {
            mode: self.mode,
            output_root: self.output.or(file.output).unwrap_or(defaults.output_root),
            metadata_root: self
                .metadata_output
                .or(file.metadata_output)
                .unwrap_or(defaults.metadata_root),
            credential: self.token,
            sleep_short: self
                .sleep_short
                .or(file.sleep_short_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.sleep_short),
            sleep_long: self
                .sleep_long
                .or(file.sleep_long_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.sleep_long),
            clone_depth,
            skip_existing: self.skip_existing || file.skip_existing.unwrap_or(false),
            api_url: self.api_url.or(file.api_url),
            syft_program: self
                .syft_path
                .or(file.syft_path)
                .unwrap_or(defaults.syft_program),
            trivy_program: self
                .trivy_path
                .or(file.trivy_path)
                .unwrap_or(defaults.trivy_program),
            ecosystems,
        })
    }
}

/// Keeps only the named ecosystems, in the order given; all of them if none are named
fn select_ecosystems(catalog: Vec<Ecosystem>, names: &[String]) -> Result<Vec<Ecosystem>> {
    if names.is_empty() {
        return Ok(catalog);
    }

    let mut selected: Vec<Ecosystem> = Vec::with_capacity(names.len());
    for name in names {
        let name = name.trim().to_lowercase();
        if selected.iter().any(|e| e.name() == name) {
            continue;
        }
        match catalog.iter().find(|e| e.name() == name) {
            Some(ecosystem) => selected.push(ecosystem.clone()),
            None => {
                return Err(CrawlError::UnknownEcosystem {
                    name,
                    known: catalog
                        .iter()
                        .map(Ecosystem::name)
                        .collect::<Vec<_>>()
                        .join(", "),
                }
                .into())
            }
        }
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("awesome-sbom").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).into_crawl_config(None).unwrap();
        assert_eq!(config.mode, CrawlMode::Clone);
        assert_eq!(config.clone_depth, Some(1));
        assert_eq!(config.sleep_short, Duration::from_secs(5));
        assert_eq!(config.ecosystems.len(), 9);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(parse(&["--mode", "metadata"]).mode, CrawlMode::Metadata);
        assert_eq!(parse(&["-m", "META"]).mode, CrawlMode::Metadata);
        assert!(Args::try_parse_from(["awesome-sbom", "--mode", "mirror"]).is_err());
    }

    #[test]
    fn test_ecosystem_filter_keeps_given_order() {
        let config = parse(&["-e", "rust", "-e", "GO", "-e", "rust"])
            .into_crawl_config(None)
            .unwrap();
        let names: Vec<_> = config.ecosystems.iter().map(Ecosystem::name).collect();
        assert_eq!(names, vec!["rust", "go"]);
    }

    #[test]
    fn test_unknown_ecosystem() {
        let err = parse(&["-e", "cobol"]).into_crawl_config(None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Unknown ecosystem: cobol"));
        assert!(message.contains("python"));
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let file = ConfigFile {
            output: Some(PathBuf::from("from-file")),
            metadata_output: Some(PathBuf::from("meta-from-file")),
            sleep_short_secs: Some(1),
            clone_depth: Some(5),
            ..ConfigFile::default()
        };
        let config = parse(&["-o", "from-cli", "--sleep-short", "2"])
            .into_crawl_config(Some(file))
            .unwrap();

        assert_eq!(config.output_root, PathBuf::from("from-cli"));
        assert_eq!(config.metadata_root, PathBuf::from("meta-from-file"));
        assert_eq!(config.sleep_short, Duration::from_secs(2));
        assert_eq!(config.sleep_long, Duration::from_secs(15));
        assert_eq!(config.clone_depth, Some(5));
    }

    #[test]
    fn test_clone_depth_zero_means_full_clone() {
        let config = parse(&["--clone-depth", "0"])
            .into_crawl_config(None)
            .unwrap();
        assert_eq!(config.clone_depth, None);
    }

    #[test]
    fn test_skip_existing_from_file() {
        let file = ConfigFile {
            skip_existing: Some(true),
            ..ConfigFile::default()
        };
        let config = parse(&[]).into_crawl_config(Some(file)).unwrap();
        assert!(config.skip_existing);
    }
}
