use crate::ports::outbound::ArtifactWriter;
use crate::shared::error::CrawlError;
use crate::shared::security::reject_existing_symlink;
use crate::shared::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// FileSystemWriter adapter for writing artifacts to disk
///
/// This adapter implements the ArtifactWriter port for file output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactWriter for FileSystemWriter {
    fn write_artifact(&self, path: &Path, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.ensure_directory(parent)?;
        }

        // Security: never follow a planted symlink out of the output tree
        reject_existing_symlink(path, "write").map_err(|e| CrawlError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        fs::write(path, content).map_err(|e| CrawlError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(())
    }

    fn ensure_directory(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|e| CrawlError::OutputDirectoryError {
            path: dir.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }

    fn remove_artifact(&self, path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(CrawlError::FileWriteError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()),
            _ => Ok(()),
        }
    }
}
