use anyhow::{anyhow, Result};
use log::{debug, error, info, warn};

use crate::app_config::Config;
use crate::errors::{AppError, DocumentError};
use crate::file_utils::FileManager;
use crate::html_document::HtmlDocument;
use crate::language_utils;
use crate::substitution::{SubstitutionEngine, SubstitutionReport};
use crate::translation_lines::TranslationLines;

// @module: Application controller for the substitution pipeline

/// Main application controller: load document and translations, adjust the
/// root lang attribute, substitute the container's text nodes and write the
/// document back out.
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.html_path.is_empty() && !self.config.target_language.is_empty()
    }

    /// Run the full pipeline: parse, set lang attribute, locate the target
    /// subtree, substitute the eligible text nodes and serialize back.
    pub fn run(&self) -> Result<SubstitutionReport> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        // Missing input files are fatal
        let html_path = &self.config.html_path;
        if !FileManager::file_exists(html_path) {
            return Err(anyhow!("HTML document not found: {}", html_path));
        }

        let translations_path = &self.config.translations_path;
        if !FileManager::file_exists(translations_path) {
            return Err(anyhow!("Translations file not found: {}", translations_path));
        }

        let language_label = language_utils::get_language_name(&self.config.target_language)
            .unwrap_or_else(|_| self.config.target_language.clone());
        info!(
            "Applying {} translations from {} onto {}",
            language_label, translations_path, html_path
        );

        let document = HtmlDocument::load(html_path)?;
        let translations = TranslationLines::load(translations_path)?;

        // Best-effort lang attribute on the root element, independent of the
        // substitution itself
        let lang = language_utils::normalize_for_lang_attribute(&self.config.target_language)?;
        let lang_applied = document.set_root_language(&lang);

        let output_path = self.config.effective_output_path().to_string();

        // Locate the target subtree; its absence is fatal to the
        // substitution, but an already-applied lang change is still saved
        let container = match document.find_container(&self.config.container) {
            Some(container) => container,
            None => {
                error!(
                    "Main content element '{}' not found in {}",
                    self.config.container, html_path
                );
                if lang_applied && self.write_document(&document, &output_path) {
                    warn!(
                        "Main content element not found, but {} was saved with the lang attribute change",
                        output_path
                    );
                }
                let error = DocumentError::ContainerNotFound(self.config.container.to_string());
                return Err(AppError::Document(error).into());
            }
        };

        let nodes = HtmlDocument::collect_translatable_nodes(&container);
        debug!("Found {} translatable text nodes in container", nodes.len());

        let report = SubstitutionEngine::apply(&nodes, &translations);

        // A failed write is logged but does not fail the run
        if self.write_document(&document, &output_path) {
            info!("Successfully updated {} with translated content", output_path);
        }

        info!(
            "Replaced {}/{} text nodes in {:.2}s",
            report.replaced,
            report.eligible_nodes,
            start_time.elapsed().as_secs_f64()
        );

        Ok(report)
    }

    /// Serialize the document pretty-printed and write it out, reporting
    /// failure without raising
    fn write_document(&self, document: &HtmlDocument, path: &str) -> bool {
        let content = document.serialize_pretty();
        match FileManager::write_to_file(path, &content) {
            Ok(()) => true,
            Err(e) => {
                error!("Error writing to {}: {}", path, e);
                false
            }
        }
    }
}
