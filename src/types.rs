use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The complete result of a scan.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanReport {
    /// The directory the traversal started from, as given in the options.
    pub root: PathBuf,
    /// The rendered output, one element per printed unit.
    ///
    /// A directory header carries a leading embedded newline so a blank line
    /// precedes it when printed. A content block (label, fences, file text,
    /// trailing blank line) is stored as a single multi-line element.
    pub lines: Vec<String>,
}
