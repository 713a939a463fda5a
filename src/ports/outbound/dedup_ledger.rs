use crate::crawl::domain::{Ecosystem, RepositoryIdentity};
use crate::shared::Result;

/// DedupLedger port: the set of repositories whose output already exists
///
/// The pipeline consults the ledger before any network request for a
/// candidate, which makes repeated runs incremental.
pub trait DedupLedger {
    /// Returns true if output for `identity` already exists
    fn is_done(&self, identity: &RepositoryIdentity) -> bool;

    /// Marks `identity` as done for the rest of the run
    fn record(&mut self, identity: RepositoryIdentity);

    /// Number of identities known to the ledger
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Opens the ledger that applies to one ecosystem's output
pub trait LedgerProvider {
    /// # Errors
    /// Returns an error if the backing store exists but cannot be read
    fn open(&self, ecosystem: &Ecosystem) -> Result<Box<dyn DedupLedger>>;
}
