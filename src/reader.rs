use std::fs;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Reads a file's entire content as UTF-8 text.
///
/// This never fails: permission errors, files removed between listing and
/// read, and invalid UTF-8 all collapse into a placeholder string describing
/// the cause, so a single unreadable file cannot abort a scan.
pub fn read_content(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Failed to read {}: {}", path.display(), e);
            format!("unable to read file: {}", e)
        }
    }
}
