use serde::{Deserialize, Serialize};
use std::path::PathBuf;
pub const EXCLUDED_DIRS: [&str; 3] = ["__pycache__", "venv", "node_modules"];
pub const CODE_EXTENSIONS: [&str; 12] = [
    ".py", ".js", ".java", ".cpp", ".c", ".html", ".css", ".php", ".rb", ".go", ".tsx", ".ts",
];
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOptions {
    pub root: PathBuf,
    pub follow_links: bool,
}
impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            follow_links: false,
        }
    }
}
impl ScanOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }
}
