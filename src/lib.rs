//! # Treecat
//!
//! `treecat` is a library for recursively walking a directory tree and producing a
//! printable snapshot of a codebase: one line per directory or file, with the full
//! text content of recognized source files inlined in fenced blocks.
//!
//! Hidden entries (names starting with `.`) and a fixed set of conventional
//! dependency directories ([`EXCLUDED_DIRS`]) are skipped. Siblings appear in
//! byte order of their names at every level. A file whose content cannot be read
//! gets an inline placeholder instead of failing the scan.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use treecat::{ScanOptions, scan};
//!
//! let options = ScanOptions::new(".");
//! let report = scan(&options).expect("Failed to scan directory");
//!
//! for line in &report.lines {
//!     println!("{line}");
//! }
//! ```

mod error;
mod options;
mod reader;
mod render;
mod scanner;
mod types;

pub use error::TreecatError;
pub use options::{CODE_EXTENSIONS, EXCLUDED_DIRS, ScanOptions};
pub use reader::read_content;
pub use scanner::scan;
pub use types::ScanReport;
