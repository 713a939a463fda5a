use crate::ports::outbound::RepositoryMaterializer;
use crate::shared::error::CrawlError;
use crate::shared::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// GitCloner adapter materializing repositories with `git clone`
///
/// The URL and destination are passed after `--`, so a hostile URL can never
/// be read as a git option.
#[derive(Debug, Clone)]
pub struct GitCloner {
    program: PathBuf,
    /// Shallow clone depth; `None` clones the full history
    depth: Option<u32>,
}

impl GitCloner {
    pub const DEFAULT_DEPTH: u32 = 1;

    pub fn new(depth: Option<u32>) -> Self {
        Self {
            program: PathBuf::from("git"),
            depth,
        }
    }

    fn clone_args(&self, url: &str, destination: &Path) -> Vec<String> {
        let mut args = vec!["clone".to_string(), "--quiet".to_string()];
        if let Some(depth) = self.depth {
            args.push("--depth".to_string());
            args.push(depth.to_string());
        }
        args.push("--".to_string());
        args.push(url.to_string());
        args.push(destination.display().to_string());
        args
    }
}

impl Default for GitCloner {
    fn default() -> Self {
        Self::new(Some(Self::DEFAULT_DEPTH))
    }
}

impl RepositoryMaterializer for GitCloner {
    fn materialize(&self, url: &str, destination: &Path) -> Result<()> {
        let output = Command::new(&self.program)
            .args(self.clone_args(url, destination))
            // Never block on a credential prompt for private or missing repositories
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| CrawlError::CloneError {
                url: url.to_string(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(CrawlError::CloneError {
                url: url.to_string(),
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(())
    }
}
