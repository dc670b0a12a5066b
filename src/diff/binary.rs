//! Binary file detection.
//!
//! The diff engine is total over strings but meaningless on binary content,
//! so the host checks inputs before diffing and short-circuits to a
//! "Binary files differ" notice instead.

use anyhow::{Context, Result};
use content_inspector::{ContentType, inspect};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// How many leading bytes are inspected for binary content.
const INSPECT_WINDOW: usize = 8192;

/// Check whether a byte slice looks like binary content.
///
/// Only the first 8 KiB is inspected. Empty input counts as text.
#[must_use]
pub fn is_binary(data: &[u8]) -> bool {
    let window = &data[..data.len().min(INSPECT_WINDOW)];
    !window.is_empty() && matches!(inspect(window), ContentType::BINARY)
}

/// Check whether a file on disk is binary by inspecting its leading bytes.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn is_binary_file(path: &Path) -> Result<bool> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open file for binary check: {}", path.display()))?;

    let mut buffer = [0u8; INSPECT_WINDOW];
    let n = file
        .read(&mut buffer)
        .with_context(|| format!("Failed to read file for binary check: {}", path.display()))?;

    let binary = is_binary(&buffer[..n]);
    debug!(path = %path.display(), binary, bytes_checked = n, "Binary detection complete");
    Ok(binary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_text_slice() {
        assert!(!is_binary(b"plain text\nwith lines\n"));
        assert!(!is_binary("unicode \u{4e16}\u{754c}".as_bytes()));
    }

    #[test]
    fn test_binary_slice() {
        assert!(is_binary(&[0x7f, b'E', b'L', b'F', 0x00, 0x01]));
    }

    #[test]
    fn test_empty_is_text() {
        assert!(!is_binary(b""));
    }

    #[test]
    fn test_binary_file_on_disk() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(&[0x00, 0xFF, 0xAA, 0xBB])?;
        assert!(is_binary_file(file.path())?);

        let mut file = NamedTempFile::new()?;
        writeln!(file, "just text")?;
        assert!(!is_binary_file(file.path())?);

        Ok(())
    }
}
