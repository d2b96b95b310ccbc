//! Atomic output writing

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::Result;

/// Write `content` to `path` through a temp file in the same directory.
///
/// Readers see either the old file or the complete new one. With
/// `only_if_changed` an existing file holding the same bytes is left as is,
/// so its mtime does not move. Returns whether the file was written.
pub fn write_atomically(path: &Path, content: &str, only_if_changed: bool) -> Result<bool> {
    if only_if_changed {
        if let Ok(existing) = std::fs::read(path) {
            if existing == content.as_bytes() {
                log::debug!("{} unchanged, not rewriting", path.display());
                return Ok(false);
            }
        }
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content.as_bytes())?;
    temp.flush()?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    log::debug!("wrote {} ({} bytes)", path.display(), content.len());
    Ok(true)
}
