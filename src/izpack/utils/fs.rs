//! File output for generated descriptors.
//!
//! Writes are whole-file: the target is created or truncated, written,
//! flushed, and closed before returning.

use crate::izpack::error::{ErrorExt, Result};
use std::path::Path;
use tokio::{fs, io::AsyncWriteExt};

/// Writes `content` plus a trailing newline to `path`, replacing any
/// existing file and creating missing parent directories.
///
/// Performs no validation of `content`; callers only invoke it once
/// rendering has succeeded.
pub async fn write_text_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .fs_context("creating output directory", parent)?;
    }

    let mut file = fs::File::create(path)
        .await
        .fs_context("creating file", path)?;
    file.write_all(content.as_bytes())
        .await
        .fs_context("writing file", path)?;
    file.write_all(b"\n")
        .await
        .fs_context("writing file", path)?;
    file.flush().await.fs_context("flushing file", path)?;

    log::debug!("Wrote {} ({} bytes)", path.display(), content.len() + 1);
    Ok(())
}
