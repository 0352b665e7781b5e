//! Test utilities for layouts
//!
//! This crate provides shared testing utilities used across the layouts workspace.

pub mod fixtures;

use tempfile::TempDir;

pub use fixtures::{layout_record, page_record, site_layouts, site_pages};

/// Creates a temporary directory within `.tmp/` at the current crate root
///
/// All test temporary files end up in a single gitignored location that is
/// easy to clean up manually.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or `.tmp/` cannot be
/// created.
///
/// # Examples
///
/// ```rust
/// use layouts_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("layouts.toml");
/// std::fs::write(&file_path, "layout = \"base\"").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");

    // Ensure .tmp/ exists
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}
