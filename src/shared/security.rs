use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum length of a single owner or repository name component
pub const MAX_COMPONENT_LENGTH: usize = 100;

/// Validates a single path component that will be embedded in output file names
///
/// Owner and repository names come from untrusted third-party documents, so they
/// must never be able to escape the output directory they are written into.
///
/// # Errors
/// Returns an error if the component is empty, too long, contains a path
/// separator, a `..` sequence or a control character
pub fn validate_path_component(component: &str, component_type: &str) -> Result<()> {
    if component.is_empty() {
        anyhow::bail!("{} cannot be empty", component_type);
    }

    if component.len() > MAX_COMPONENT_LENGTH {
        anyhow::bail!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            component_type,
            component.len(),
            MAX_COMPONENT_LENGTH
        );
    }

    if component.contains('/') || component.contains('\\') {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            component_type
        );
    }

    if component.contains("..") {
        anyhow::bail!(
            "Security: {} contains '..' which is not allowed",
            component_type
        );
    }

    if component.chars().any(char::is_control) {
        anyhow::bail!(
            "Security: {} contains control characters",
            component_type
        );
    }

    Ok(())
}

/// Validates that an existing path is not a symbolic link
///
/// Missing paths are accepted; only an existing symlink is rejected.
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
pub fn reject_existing_symlink(path: &Path, operation: &str) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        ),
        _ => Ok(()),
    }
}
