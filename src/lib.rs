/*!
 * # htranslate - HTML translation applier
 *
 * A Rust library for applying pre-translated text onto a static HTML document.
 *
 * ## Features
 *
 * - Parse an HTML document and locate a target container element
 * - Enumerate eligible text nodes in document order, skipping comments
 *   and script/style subtrees
 * - Overwrite each eligible text node with the corresponding line from a
 *   pre-translated text file
 * - Set the root element's lang attribute to the target locale
 * - Re-serialize the document pretty-printed back to disk
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `html_document`: HTML parsing, traversal and serialization
 * - `translation_lines`: The ordered translation line list
 * - `substitution`: Positional substitution of lines onto text nodes
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod html_document;
pub mod language_utils;
pub mod substitution;
pub mod translation_lines;

// Re-export main types for easier usage
pub use app_config::{Config, ContainerSelector};
pub use app_controller::Controller;
pub use errors::{AppError, DocumentError, SubstitutionError};
pub use html_document::HtmlDocument;
pub use substitution::{SubstitutionEngine, SubstitutionReport};
pub use translation_lines::TranslationLines;
