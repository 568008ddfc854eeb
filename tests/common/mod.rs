/*!
 * Common test utilities for the htranslate test suite
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Sample document whose container holds five eligible text nodes, in
/// document order: Heading, First paragraph, Second, bold, tail
pub const SAMPLE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<title>Sample page</title>
<style>body { color: red; }</style>
</head>
<body>
<div class="elementor-kit-272 elementor-page elementor-page-1744">
<h1>Heading</h1>
<p>First paragraph</p>
<p>Second <b>bold</b> tail</p>
<script>var x = "not translated";</script>
<!-- an untouched comment -->
</div>
</body>
</html>
"#;

/// Number of eligible text nodes inside SAMPLE_HTML's container
pub const SAMPLE_NODE_COUNT: usize = 5;

/// Creates a sample HTML document file for testing
pub fn create_test_document(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_HTML)
}

/// Creates a translation file with one line per eligible node of SAMPLE_HTML
pub fn create_test_translations(dir: &PathBuf, filename: &str, lines: &[&str]) -> Result<PathBuf> {
    let content = lines.join("\n");
    create_test_file(dir, filename, &content)
}
