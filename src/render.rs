//! Internal module for turning walked entries into display lines.

use crate::options::CODE_EXTENSIONS;
use crate::reader::read_content;
use ignore::DirEntry;

/// Renders an ordered entry stream into output lines.
///
/// The entries are expected in depth-first, sorted-sibling order, with the
/// scan root first at depth 0 (the root itself produces no line). Indentation
/// grows by two spaces per nesting level.
pub(crate) fn render_entries(entries: &[DirEntry]) -> Vec<String> {
    let mut lines = Vec::new();

    for entry in entries {
        if entry.depth() == 0 {
            continue;
        }
        let indent = "  ".repeat(entry.depth() - 1);
        let name = entry.file_name().to_string_lossy();
        let is_dir = entry.file_type().map_or(false, |ft| ft.is_dir());

        if is_dir {
            lines.push(format!("\n{indent}📁 {name}/"));
        } else {
            lines.push(format!("{indent}📄 {name}"));
            if is_code_file(&name) {
                let content = read_content(entry.path());
                // Label and fences are indented; the file text is inserted verbatim.
                lines.push(format!("{indent}content:\n{indent}```\n{content}\n{indent}```\n"));
            }
        }
    }

    lines
}

fn is_code_file(name: &str) -> bool {
    CODE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}
