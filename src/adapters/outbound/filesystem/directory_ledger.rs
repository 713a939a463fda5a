use crate::crawl::domain::{Ecosystem, RepositoryIdentity};
use crate::ports::outbound::{DedupLedger, LedgerProvider};
use crate::shared::Result;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Delimiter between the tokens of an artifact file name
const NAME_DELIMITER: char = '_';

/// DedupLedger backed by nothing but the file names of existing output
///
/// Every artifact name starts with `<owner>_<repo>_`, so a directory listing
/// is enough to rebuild the set of completed repositories.
///
/// The first two tokens of each name are indexed for the common case; the
/// names themselves are kept so that repositories whose name contains `_`
/// still match by prefix.
#[derive(Debug, Default)]
pub struct DirectoryLedger {
    done: HashSet<(String, String)>,
    names: Vec<String>,
}

impl DirectoryLedger {
    /// Scans `dir` once
    ///
    /// A missing directory yields an empty ledger and nothing is created.
    /// Names without two leading tokens are ignored.
    pub fn scan(dir: &Path) -> Result<Self> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to list output directory {}: {}",
                    dir.display(),
                    e
                ))
            }
        };

        let mut done = HashSet::new();
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if let Some(key) = Self::parse_file_name(name) {
                done.insert(key);
                names.push(name.to_string());
            }
        }

        Ok(Self { done, names })
    }

    fn parse_file_name(name: &str) -> Option<(String, String)> {
        let mut tokens = name.split(NAME_DELIMITER);
        let owner = tokens.next().filter(|t| !t.is_empty())?;
        let repo = tokens.next().filter(|t| !t.is_empty())?;
        Some((owner.to_string(), repo.to_string()))
    }
}

impl DedupLedger for DirectoryLedger {
    fn is_done(&self, identity: &RepositoryIdentity) -> bool {
        if self
            .done
            .contains(&(identity.owner().to_string(), identity.name().to_string()))
        {
            return true;
        }
        if !identity.name().contains(NAME_DELIMITER) {
            return false;
        }
        let prefix = format!(
            "{}{}{}{}",
            identity.owner(),
            NAME_DELIMITER,
            identity.name(),
            NAME_DELIMITER
        );
        self.names.iter().any(|name| name.starts_with(&prefix))
    }

    fn record(&mut self, identity: RepositoryIdentity) {
        self.done
            .insert((identity.owner().to_string(), identity.name().to_string()));
    }

    fn len(&self) -> usize {
        self.done.len()
    }
}

/// Where a mode keeps the artifacts its ledger is rebuilt from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerLayout {
    /// All artifacts directly under the root (clone mode)
    Flat,
    /// One subdirectory per ecosystem (metadata mode)
    PerEcosystem,
}

/// Opens a [`DirectoryLedger`] for each ecosystem
#[derive(Debug, Clone)]
pub struct DirectoryLedgerProvider {
    root: PathBuf,
    layout: LedgerLayout,
}

impl DirectoryLedgerProvider {
    pub fn new(root: PathBuf, layout: LedgerLayout) -> Self {
        Self { root, layout }
    }

    fn directory_for(&self, ecosystem: &Ecosystem) -> PathBuf {
        match self.layout {
            LedgerLayout::Flat => self.root.clone(),
            LedgerLayout::PerEcosystem => self.root.join(ecosystem.name()),
        }
    }
}

impl LedgerProvider for DirectoryLedgerProvider {
    fn open(&self, ecosystem: &Ecosystem) -> Result<Box<dyn DedupLedger>> {
        Ok(Box::new(DirectoryLedger::scan(
            &self.directory_for(ecosystem),
        )?))
    }
}
