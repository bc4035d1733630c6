//! Scoped replacement of the destination file
//!
//! Bytes go to a temporary file next to the destination, which is flushed and
//! renamed over it. Any failure before the rename drops the temporary file, so
//! the destination is either untouched or fully replaced.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, fs::write_failed};

/// Replace `destination` with `content`, creating parent directories as needed
pub fn replace_file(destination: &Path, content: &[u8]) -> Result<()> {
    let fail = |reason: String| write_failed(destination.display().to_string(), reason);

    let parent = destination
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    std::fs::create_dir_all(parent).map_err(|e| fail(e.to_string()))?;

    let mut staged = NamedTempFile::new_in(parent).map_err(|e| fail(e.to_string()))?;
    staged.write_all(content).map_err(|e| fail(e.to_string()))?;
    staged.as_file().sync_all().map_err(|e| fail(e.to_string()))?;
    staged
        .persist(destination)
        .map_err(|e| fail(e.error.to_string()))?;

    Ok(())
}
