/*!
 * Tests for the translation line list
 */

use anyhow::Result;
use htranslate::translation_lines::TranslationLines;
use crate::common;

/// Test that lines are trimmed and kept in file order
#[test]
fn test_parse_withPaddedLines_shouldTrimAndPreserveOrder() {
    let translations = TranslationLines::parse("one\n  two  \nthree");

    assert_eq!(translations.len(), 3);
    assert_eq!(translations.lines, vec!["one", "two", "three"]);
}

/// Test that blank lines are kept as empty replacements so positions align
#[test]
fn test_parse_withBlankLines_shouldKeepEmptyEntries() {
    let translations = TranslationLines::parse("one\n\nthree");

    assert_eq!(translations.len(), 3);
    assert_eq!(translations.lines[1], "");
}

/// Test that an empty input yields an empty list
#[test]
fn test_parse_withEmptyContent_shouldBeEmpty() {
    let translations = TranslationLines::parse("");

    assert!(translations.is_empty());
}

/// Test that loading from a file records the source path
#[test]
fn test_load_withExistingFile_shouldRecordSourcePath() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_translations(
        &temp_dir.path().to_path_buf(),
        "lines.txt",
        &["alpha", "beta"],
    )?;

    let translations = TranslationLines::load(&path)?;

    assert_eq!(translations.len(), 2);
    assert_eq!(translations.source_file.as_deref(), Some(path.as_path()));

    Ok(())
}

/// Test that loading a missing file fails
#[test]
fn test_load_withMissingFile_shouldFail() {
    assert!(TranslationLines::load("no_such_lines.txt").is_err());
}
