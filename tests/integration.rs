use std::fs;
use tempfile::tempdir;
use treecat::{ScanOptions, scan};
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.py"), "print(\"hi\")").unwrap();
    fs::write(dir.path().join("notes.txt"), "scratch").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/app.ts"), "export const app = 1;").unwrap();
    fs::create_dir(dir.path().join("src/web")).unwrap();
    fs::write(dir.path().join("src/web/index.html"), "<html></html>").unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules/dep.js"), "x").unwrap();
    fs::write(dir.path().join(".env"), "SECRET=1").unwrap();
    let report = scan(&ScanOptions::new(dir.path())).unwrap();
    assert_eq!(report.root, dir.path());
    assert_eq!(
        report.lines,
        vec![
            "📄 main.py".to_string(),
            "content:\n```\nprint(\"hi\")\n```\n".to_string(),
            "📄 notes.txt".to_string(),
            "\n📁 src/".to_string(),
            "  📄 app.ts".to_string(),
            "  content:\n  ```\nexport const app = 1;\n  ```\n".to_string(),
            "\n  📁 web/".to_string(),
            "    📄 index.html".to_string(),
            "    content:\n    ```\n<html></html>\n    ```\n".to_string(),
        ]
    );
}
