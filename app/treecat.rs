//! Command-line interface for treecat.
//!
//! This binary walks the current working directory and prints the tree
//! structure with the content of recognized source files inlined.

use clap::Parser;
use std::env;
use std::process::exit;
use treecat::{ScanOptions, scan};

/// treecat — codebase snapshot dumper
///
/// Walks the current working directory and prints its structure, inlining the
/// text of recognized source files. Takes no operational arguments.
#[derive(Parser)]
#[command(name = "treecat", version, about, long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    let root = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: failed to resolve current directory: {}", e);
            exit(1);
        }
    };

    println!("Scanning directory: {}", root.display());
    println!("File structure and code content:");

    match scan(&ScanOptions::new(root)) {
        Ok(report) => {
            for line in &report.lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
