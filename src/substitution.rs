use log::{debug, warn};
use markup5ever_rcdom::Handle;

use crate::errors::SubstitutionError;
use crate::html_document;
use crate::translation_lines::TranslationLines;

// @module: Positional substitution of translation lines onto text nodes

/// Outcome of one substitution pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionReport {
    /// Eligible text nodes found in the container, in document order
    pub eligible_nodes: usize,

    /// Translation lines available in the side file
    pub lines_available: usize,

    /// Nodes whose text was replaced
    pub replaced: usize,

    /// Nodes left untouched because the line sequence ran out
    pub untranslated: usize,

    /// Nodes skipped because the replacement itself failed
    pub failed: usize,
}

impl SubstitutionReport {
    /// True when every eligible node received a line
    pub fn is_complete(&self) -> bool {
        self.untranslated == 0 && self.failed == 0
    }
}

/// Applies the translation line sequence onto a node sequence
pub struct SubstitutionEngine;

impl SubstitutionEngine {
    /// Pair each node with the next unconsumed line and replace its text.
    ///
    /// Stops early once the line sequence is exhausted, leaving the
    /// remaining nodes unmodified. A per-node replacement failure is logged
    /// and skipped; its paired line is still consumed.
    pub fn apply(nodes: &[Handle], translations: &TranslationLines) -> SubstitutionReport {
        let eligible_nodes = nodes.len();
        let lines_available = translations.len();

        if eligible_nodes != lines_available {
            warn!(
                "Mismatch in number of translatable text nodes ({}) and available translated lines ({})",
                eligible_nodes, lines_available
            );
        }

        let mut report = SubstitutionReport {
            eligible_nodes,
            lines_available,
            replaced: 0,
            untranslated: 0,
            failed: 0,
        };

        let mut lines = translations.iter();

        for (index, node) in nodes.iter().enumerate() {
            let line = match lines.next() {
                Some(line) => line,
                None => {
                    report.untranslated = eligible_nodes - index;
                    warn!(
                        "Ran out of translated lines at node index {}. {} nodes remain untranslated",
                        index, report.untranslated
                    );
                    break;
                }
            };

            if html_document::set_text_content(node, line) {
                report.replaced += 1;
            } else {
                // The collection pass only yields text nodes, but a failed
                // replacement is skipped rather than aborting the run
                let error = SubstitutionError::NotATextNode { index };
                let preview: String = html_document::text_content(node).chars().take(30).collect();
                warn!("Error replacing text for node {} ('{}...'): {}", index, preview, error);
                report.failed += 1;
            }
        }

        debug!(
            "Substitution pass done: {} replaced, {} untranslated, {} failed",
            report.replaced, report.untranslated, report.failed
        );

        report
    }
}
