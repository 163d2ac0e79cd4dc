//! Descriptor checksum calculation.

use crate::{bail, izpack::Result, izpack::error::ErrorExt};
use sha2::{Digest, Sha256};
use tokio::io::AsyncReadExt;

/// Calculates the SHA-256 of a written file.
///
/// Reads in 8KB chunks and returns the hex-encoded digest (64 characters).
pub async fn calculate_sha256(path: &std::path::Path) -> Result<String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .fs_context("reading file metadata", path)?;
    if !metadata.is_file() {
        bail!("Path is not a file: {}", path.display());
    }

    let mut file = tokio::fs::File::open(path)
        .await
        .fs_context("opening file for checksum", path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for checksum", path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hashes_known_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("abc.txt");
        std::fs::write(&path, "abc").expect("write");

        let digest = calculate_sha256(&path).await.expect("checksum");
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
