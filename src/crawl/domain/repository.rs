use crate::shared::error::CrawlError;
use crate::shared::security::validate_path_component;
use crate::shared::Result;
use std::fmt;

/// Repository identity: the (owner, name) pair of a hosted repository
///
/// Both components are non-empty and free of path separators, which makes the
/// identity safe to use as a file-name token and as the dedup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepositoryIdentity {
    owner: String,
    name: String,
}

impl RepositoryIdentity {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let owner = owner.into();
        let name = name.into();

        for (value, kind) in [(&owner, "Owner"), (&name, "Repository name")] {
            validate_path_component(value, kind).map_err(|e| CrawlError::InvalidIdentity {
                value: format!("{}/{}", owner, name),
                reason: e.to_string(),
            })?;
        }

        Ok(Self { owner, name })
    }

    /// Parses the identity from the first two path segments of a URL
    ///
    /// Returns `None` when the URL has no repository segment or when either
    /// segment is not a valid identity component. A trailing `.git` and any
    /// trailing dots (sentence punctuation swallowed by the extraction pattern)
    /// are stripped from the repository name.
    pub fn from_url(url: &str) -> Option<Self> {
        let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
        let without_suffix = without_scheme
            .split(['?', '#'])
            .next()
            .unwrap_or(without_scheme);

        let (_host, path) = without_suffix.split_once('/')?;
        let mut segments = path.trim_matches('/').split('/');

        let owner = segments.next().filter(|s| !s.is_empty())?;
        let name = segments.next()?;
        let name = name.strip_suffix(".git").unwrap_or(name);
        let name = name.trim_end_matches('.');

        Self::new(owner, name).ok()
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// File-name prefix shared by every artifact of this repository: `<owner>_<name>`
    pub fn artifact_prefix(&self) -> String {
        format!("{}_{}", self.owner, self.name)
    }

    /// Canonical clone URL, independent of how the document spelled it
    pub fn clone_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A repository discovered in a source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// URL as it appeared in the document
    pub url: String,
    pub identity: RepositoryIdentity,
}

impl Candidate {
    pub fn new(url: String, identity: RepositoryIdentity) -> Self {
        Self { url, identity }
    }
}
