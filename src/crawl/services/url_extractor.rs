use crate::crawl::domain::{Candidate, RepositoryIdentity};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// Matches `http(s)://github.com/<owner>/<repo>`; owner excludes whitespace,
/// parentheses and slashes, repo is limited to word characters, dots and hyphens
static GITHUB_REPO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://github\.com/[^\s/()]+/[\w.-]+").expect("valid regex")
});

/// First path segments on github.com that are site pages, not repository owners
const RESERVED_OWNERS: &[&str] = &[
    "about",
    "apps",
    "collections",
    "features",
    "login",
    "marketplace",
    "notifications",
    "orgs",
    "settings",
    "site",
    "sponsors",
    "topics",
];

/// Extracts candidate repositories from a source document
pub struct RepositoryUrlExtractor;

impl RepositoryUrlExtractor {
    /// Returns every distinct repository URL found in `content`
    pub fn extract_urls(content: &str) -> BTreeSet<String> {
        GITHUB_REPO_URL
            .find_iter(content)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Returns one candidate per distinct repository identity, sorted by identity
    ///
    /// URLs that do not parse into an identity or that point at reserved site
    /// pages are dropped. When several URLs map to the same identity the
    /// lexicographically smallest URL is kept.
    pub fn extract_candidates(content: &str) -> Vec<Candidate> {
        let mut by_identity: BTreeMap<RepositoryIdentity, String> = BTreeMap::new();

        for url in Self::extract_urls(content) {
            let Some(identity) = RepositoryIdentity::from_url(&url) else {
                continue;
            };
            if RESERVED_OWNERS.contains(&identity.owner().to_ascii_lowercase().as_str()) {
                continue;
            }
            by_identity.entry(identity).or_insert(url);
        }

        by_identity
            .into_iter()
            .map(|(identity, url)| Candidate::new(url, identity))
            .collect()
    }
}
