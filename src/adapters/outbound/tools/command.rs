use crate::shared::error::CrawlError;
use crate::shared::security::reject_existing_symlink;
use crate::shared::Result;
use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Maximum number of stderr characters carried into an error message
const MAX_STDERR_IN_ERROR: usize = 2000;

/// One external tool invocation with a structured argument vector
///
/// Arguments are handed to the OS as-is; nothing passes through a shell,
/// so repository names from untrusted documents cannot inject commands.
#[derive(Debug, Clone)]
pub(super) struct ToolCommand {
    tool: String,
    program: PathBuf,
    args: Vec<OsString>,
}

impl ToolCommand {
    pub(super) fn new(tool: &str, program: &Path) -> Self {
        Self {
            tool: tool.to_string(),
            program: program.to_path_buf(),
            args: Vec::new(),
        }
    }

    pub(super) fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    #[cfg(test)]
    pub(super) fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Runs the tool and returns its standard output
    pub(super) fn output_string(&self) -> Result<String> {
        let output = self.run(Stdio::piped())?;
        String::from_utf8(output.stdout).map_err(|e| {
            CrawlError::ToolError {
                tool: self.tool.clone(),
                details: format!("output is not valid UTF-8: {}", e),
            }
            .into()
        })
    }

    /// Runs the tool with its standard output redirected into `destination`
    ///
    /// The destination is removed again if the tool fails.
    pub(super) fn output_to_file(&self, destination: &Path) -> Result<()> {
        reject_existing_symlink(destination, "write")?;
        let file = File::create(destination).map_err(|e| CrawlError::FileWriteError {
            path: destination.to_path_buf(),
            details: e.to_string(),
        })?;

        let result = self.run(Stdio::from(file));
        if result.is_err() {
            let _ = fs::remove_file(destination);
        }
        result.map(|_| ())
    }

    /// Runs the tool; the caller decides where standard output goes
    fn run(&self, stdout: Stdio) -> Result<Output> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| CrawlError::ToolError {
                tool: self.tool.clone(),
                details: format!("{}: {}", self.program.display(), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let stderr = match stderr.char_indices().nth(MAX_STDERR_IN_ERROR) {
                Some((cut, _)) => &stderr[..cut],
                None => stderr,
            };
            return Err(CrawlError::ToolError {
                tool: self.tool.clone(),
                details: format!("exited with {}: {}", output.status, stderr),
            }
            .into());
        }

        Ok(output)
    }
}
