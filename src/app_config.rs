use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fmt;
use std::str::FromStr;

use crate::language_utils;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path of the HTML document to translate (rewritten in place by default)
    #[serde(default = "default_html_path")]
    pub html_path: String,

    /// Path of the newline-separated translated strings
    #[serde(default = "default_translations_path")]
    pub translations_path: String,

    /// Optional output path; when absent the document is rewritten in place
    #[serde(default)]
    pub output_path: Option<String>,

    /// Selector for the container element holding the translatable text
    #[serde(default)]
    pub container: ContainerSelector,

    /// Target language code (ISO), written to the root lang attribute
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default)
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

/// Selector identifying the target subtree: an element tag plus the full
/// set of class names that must all be present on the element.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContainerSelector {
    // @field: Element tag name
    pub tag: String,

    // @field: Class names the element must carry (all of them)
    #[serde(default)]
    pub classes: Vec<String>,
}

impl ContainerSelector {
    /// Create a selector from a tag and a list of required classes
    pub fn new(tag: &str, classes: &[&str]) -> Self {
        ContainerSelector {
            tag: tag.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Default for ContainerSelector {
    fn default() -> Self {
        ContainerSelector {
            tag: default_container_tag(),
            classes: default_container_classes(),
        }
    }
}

// Implement Display trait for ContainerSelector, mirroring the parse format
impl fmt::Display for ContainerSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)?;
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        Ok(())
    }
}

// Parse from "tag.class1.class2" form used on the command line
impl FromStr for ContainerSelector {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split('.');
        let tag = parts.next().unwrap_or_default().trim();
        if tag.is_empty() {
            return Err(anyhow!("Container selector must start with a tag name: {}", s));
        }

        let classes: Vec<String> = parts
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        Ok(ContainerSelector {
            tag: tag.to_lowercase(),
            classes,
        })
    }
}

impl Config {
    /// Resolve the effective output path (in-place rewrite when unset)
    pub fn effective_output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(&self.html_path)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.html_path.trim().is_empty() {
            return Err(anyhow!("HTML document path must not be empty"));
        }

        if self.translations_path.trim().is_empty() {
            return Err(anyhow!("Translations file path must not be empty"));
        }

        if self.container.tag.trim().is_empty() {
            return Err(anyhow!("Container selector tag must not be empty"));
        }

        // Validate the target language as an ISO 639 code
        language_utils::validate_language_code(&self.target_language)
            .map_err(|e| anyhow!("Invalid target language '{}': {}", self.target_language, e))?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            html_path: default_html_path(),
            translations_path: default_translations_path(),
            output_path: None,
            container: ContainerSelector::default(),
            target_language: default_target_language(),
            log_level: LogLevel::default(),
        }
    }
}

// Default value functions for serde

fn default_html_path() -> String {
    "SE2_zh.html".to_string()
}

fn default_translations_path() -> String {
    "translated_content.txt".to_string()
}

fn default_target_language() -> String {
    "zh".to_string()
}

fn default_container_tag() -> String {
    "div".to_string()
}

fn default_container_classes() -> Vec<String> {
    vec![
        "elementor-kit-272".to_string(),
        "elementor-page".to_string(),
        "elementor-page-1744".to_string(),
    ]
}
