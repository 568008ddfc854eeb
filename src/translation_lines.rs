use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::warn;

use crate::file_utils::FileManager;

// @module: Ordered translation line list

/// The ordered sequence of replacement strings, one logical translation per
/// line of the side file, consumed positionally against the eligible text
/// nodes in document order.
#[derive(Debug, Clone)]
pub struct TranslationLines {
    /// Source filename, when loaded from disk
    pub source_file: Option<PathBuf>,

    /// The replacement strings, in file order
    pub lines: Vec<String>,
}

impl TranslationLines {
    /// Parse translation lines from a string. Every line is trimmed; blank
    /// lines are kept as empty replacements so positions stay aligned.
    pub fn parse(content: &str) -> Self {
        let lines: Vec<String> = content.lines().map(|line| line.trim().to_string()).collect();
        TranslationLines {
            source_file: None,
            lines,
        }
    }

    /// Load translation lines from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = FileManager::read_to_string(&path)?;
        let mut translations = Self::parse(&content);
        translations.source_file = Some(path.as_ref().to_path_buf());

        if translations.is_empty() {
            warn!("Translation file {:?} contains no lines", path.as_ref());
        }

        Ok(translations)
    }

    /// Number of replacement lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when no lines were read
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate the lines in order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }
}

impl fmt::Display for TranslationLines {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Translation Lines")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Lines: {}", self.lines.len())?;
        Ok(())
    }
}
