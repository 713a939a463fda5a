/// Filesystem adapters for output artifacts and the dedup ledger
mod directory_ledger;
mod file_writer;

pub use directory_ledger::{DirectoryLedger, DirectoryLedgerProvider, LedgerLayout};
pub use file_writer::FileSystemWriter;
