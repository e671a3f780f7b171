//! Diff-gated file writes

use crate::diff::{differs_from_existing, LineFilter};
use crate::error::{DocgenError, Result};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::Builder;

/// Result of [`write_if_changed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Target was created or replaced
    Written,
    /// Target already matched; nothing touched
    Skipped,
}

impl WriteOutcome {
    pub fn is_written(self) -> bool {
        self == WriteOutcome::Written
    }
}

/// Read the current target content; `None` when the file does not exist
pub fn read_existing(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DocgenError::TargetReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

/// Whether writing `new_text` to `path` would change it meaningfully
///
/// A missing target always needs a write.
pub fn needs_write<L>(path: impl AsRef<Path>, new_text: &str, filter: &L) -> Result<bool>
where
    L: LineFilter + ?Sized,
{
    let existing = read_existing(path.as_ref())?;
    Ok(differs_from_existing(existing.as_deref(), new_text, filter))
}

/// Write `new_text` to `path` unless the current content is equivalent
/// under `filter`
///
/// The target is read once. When written, the content goes to a temporary
/// file next to the target which then replaces it, so readers never observe
/// a partial file. The parent directory must already exist.
///
/// Emits one `info` log record describing the decision.
pub fn write_if_changed<L>(
    path: impl AsRef<Path>,
    new_text: &str,
    filter: &L,
) -> Result<WriteOutcome>
where
    L: LineFilter + ?Sized,
{
    let path = path.as_ref();

    if !needs_write(path, new_text, filter)? {
        log::info!("Skipped {}: unchanged", path.display());
        return Ok(WriteOutcome::Skipped);
    }

    atomic_write(path, new_text)?;
    log::info!("Updated {}", path.display());
    Ok(WriteOutcome::Written)
}

/// Write text atomically using NamedTempFile + persist
///
/// A symlinked target is written through, so the link survives. An existing
/// target keeps its permissions; a new one gets the same mode a plain
/// `fs::write` would give it.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let write_failed = |reason: String| DocgenError::WriteFailed {
        path: path.to_path_buf(),
        reason,
    };

    let target = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(write_failed(format!(
            "parent directory '{}' does not exist",
            parent.display()
        )));
    }

    let existing_permissions = std::fs::metadata(&target)
        .ok()
        .map(|metadata| metadata.permissions());

    let mut temp_file = temp_file_builder()
        .tempfile_in(parent)
        .map_err(|e| write_failed(format!("Failed to create temp file: {}", e)))?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| write_failed(format!("Failed to write temp file: {}", e)))?;

    if let Some(permissions) = existing_permissions {
        temp_file
            .as_file()
            .set_permissions(permissions)
            .map_err(|e| write_failed(format!("Failed to copy permissions: {}", e)))?;
    }

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| write_failed(format!("Failed to sync temp file: {}", e)))?;

    temp_file
        .persist(&target)
        .map_err(|e| write_failed(format!("Failed to persist temp file: {}", e)))?;

    Ok(())
}

/// Temp files are created 0o666 minus the umask, like `File::create`
fn temp_file_builder() -> Builder<'static, 'static> {
    #[allow(unused_mut)]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder
}
