use crate::error::TreecatError;
use crate::options::{EXCLUDED_DIRS, ScanOptions};
use crate::render::render_entries;
use crate::types::ScanReport;
use ignore::{DirEntry, WalkBuilder};
use std::fs;
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &ScanOptions) -> Result<Self, TreecatError> {
        let metadata =
            fs::metadata(&options.root).map_err(|e| TreecatError::io(&options.root, e))?;
        if !metadata.is_dir() {
            return Err(TreecatError::InvalidPath(format!(
                "{} is not a directory",
                options.root.display()
            )));
        }
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .hidden(true)
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        let mut glob_builder = globset::GlobSetBuilder::new();
        for name in EXCLUDED_DIRS {
            let glob = globset::Glob::new(name).map_err(|e| {
                TreecatError::Walk(format!("Invalid exclusion pattern '{}': {}", name, e))
            })?;
            glob_builder.add(glob);
        }
        let excluded = glob_builder
            .build()
            .map_err(|e| TreecatError::Walk(format!("Failed to build exclusion set: {}", e)))?;
        builder.filter_entry(move |entry| !excluded.is_match(entry.file_name()));
        Ok(Self {
            inner: builder.build(),
        })
    }
    fn collect_entries(self) -> Result<Vec<DirEntry>, TreecatError> {
        self.inner
            .map(|result| result.map_err(|e| TreecatError::Walk(e.to_string())))
            .collect()
    }
}
/// Walks the tree under `options.root` and renders it into a [`ScanReport`].
///
/// Any walk error (an unreadable subdirectory, for instance) is fatal and
/// aborts the scan; only per-file content reads are recovered, inside the
/// renderer.
pub fn scan(options: &ScanOptions) -> Result<ScanReport, TreecatError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting scan with root: {}", options.root.display());
    let walker = Walker::new(options)?;
    let entries = walker.collect_entries()?;
    Ok(ScanReport {
        root: options.root.clone(),
        lines: render_entries(&entries),
    })
}
