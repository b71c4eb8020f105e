//! Shared test utilities for integration tests.
//!
//! Provides fixture files (blog catalog, views series, markdown posts) in
//! temporary directories, used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Blog catalog with two published posts and one draft.
pub const CATALOG_JSON: &str = r###"{
  "blogs": [
    {
      "id": 1,
      "title": "Building a CLI in Rust",
      "excerpt": "Argument parsing and error handling",
      "content": "# Building a CLI\n\nStart with **clap**.\n\n```\nfn main() {}\n```\n\n- parse\n- validate",
      "author": "Sam",
      "date": "2024-03-01",
      "tags": ["Rust", "CLI"],
      "image": "/images/cli.png",
      "views": 340,
      "published": true
    },
    {
      "id": 2,
      "title": "Unfinished Thoughts",
      "excerpt": "Draft",
      "content": "draft",
      "author": "Sam",
      "date": "2024-03-05",
      "tags": ["Rust"],
      "image": "",
      "views": 0,
      "published": false
    },
    {
      "id": 3,
      "title": "Error Handling Patterns",
      "excerpt": "Result, context and friends",
      "content": "## Errors\n\n> Fail loudly.",
      "author": "Sam",
      "date": "2024-04-11",
      "tags": ["Rust", "Errors"],
      "image": "/images/errors.png",
      "views": 120,
      "published": true
    }
  ]
}"###;

/// Dashboard data with a monthly views series.
pub const DASHBOARD_JSON: &str = r#"{
  "totalViews": 1600,
  "viewsOverTime": [
    { "month": "Jan", "views": 200 },
    { "month": "Feb", "views": 600 },
    { "month": "Mar", "views": 400 }
  ]
}"#;

/// Creates temporary directory for fixtures.
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn fixture_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Writes fixture file, creating parent directories as needed.
///
/// # Returns
///
/// Full path of the written file
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, path: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Path of the compiled folio binary.
pub fn folio_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_folio"))
}
