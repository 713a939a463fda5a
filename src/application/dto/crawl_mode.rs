/// Crawl strategy enumeration
///
/// The two strategies are independent pipelines over the same candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrawlMode {
    /// Clone every repository and scan the working copy with syft (default)
    #[default]
    Clone,
    /// Search for one manifest file per repository and scan it with trivy
    Metadata,
}

impl std::str::FromStr for CrawlMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clone" => Ok(CrawlMode::Clone),
            "metadata" | "meta" => Ok(CrawlMode::Metadata),
            _ => Err(format!(
                "Invalid mode: {}. Please specify 'clone' or 'metadata'",
                s
            )),
        }
    }
}

impl std::fmt::Display for CrawlMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrawlMode::Clone => write!(f, "clone"),
            CrawlMode::Metadata => write!(f, "metadata"),
        }
    }
}
