use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use html5ever::parse_document;
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::{local_name, namespace_url, ns, Attribute, LocalName, QualName};
use log::{debug, warn};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::app_config::ContainerSelector;
use crate::file_utils::FileManager;

// @module: HTML document parsing, traversal and serialization

/// Elements whose text content is never translated
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

/// Elements serialized without a closing tag
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// An HTML parse tree, loaded from a file, mutated in place and serialized
/// back out once the substitution pass is done.
pub struct HtmlDocument {
    /// Source filename, when loaded from disk
    pub source_file: Option<PathBuf>,

    /// The parsed tree
    dom: RcDom,
}

impl HtmlDocument {
    /// Parse an HTML document from a string
    pub fn parse(content: &str) -> Self {
        let dom = parse_document(RcDom::default(), Default::default()).one(content);
        HtmlDocument {
            source_file: None,
            dom,
        }
    }

    /// Load and parse an HTML document from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = FileManager::read_to_string(&path)?;
        let mut document = Self::parse(&content);
        document.source_file = Some(path.as_ref().to_path_buf());
        Ok(document)
    }

    /// Handle to the document node itself
    pub fn document_handle(&self) -> Handle {
        self.dom.document.clone()
    }

    /// Find the first element in document order matching the selector
    pub fn find_container(&self, selector: &ContainerSelector) -> Option<Handle> {
        find_first(&self.dom.document, &|node| element_matches(node, selector))
    }

    /// Set the lang attribute on the root <html> element to the given code.
    ///
    /// Best effort: returns true when the attribute was applied, false (with
    /// a warning) when the document has no root element. The document might
    /// be a fragment.
    pub fn set_root_language(&self, lang: &str) -> bool {
        let root = find_first(&self.dom.document, &|node| {
            matches!(&node.data, NodeData::Element { name, .. } if name.local == local_name!("html"))
        });

        match root {
            Some(root) => {
                set_attribute(&root, "lang", lang);
                debug!("Set root lang attribute to '{}'", lang);
                true
            }
            None => {
                warn!("Root <html> tag not found. Could not set lang attribute. The document might be a fragment.");
                false
            }
        }
    }

    /// Collect the eligible text nodes among the descendants of the given
    /// subtree, in depth-first document order.
    pub fn collect_translatable_nodes(root: &Handle) -> Vec<Handle> {
        let mut nodes = Vec::new();
        collect_descendants(root, &mut nodes);
        nodes
    }

    /// Serialize the whole tree back to a pretty-printed string: one node
    /// per line, indented by depth, script and style contents verbatim.
    pub fn serialize_pretty(&self) -> String {
        let mut out = String::new();
        for child in self.dom.document.children.borrow().iter() {
            write_node(child, 0, false, &mut out);
        }
        out
    }
}

impl fmt::Display for HtmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source_file {
            Some(path) => write!(f, "HtmlDocument({:?})", path),
            None => write!(f, "HtmlDocument(<string>)"),
        }
    }
}

/// Eligibility filter for substitution: a text node with non-blank content
/// whose ancestor chain contains no script or style element. Comment nodes
/// and every other node kind are excluded.
pub fn is_translatable_text(node: &Handle) -> bool {
    match &node.data {
        NodeData::Comment { .. } => false,
        NodeData::Text { contents } => {
            if contents.borrow().trim().is_empty() {
                return false;
            }
            !has_raw_text_ancestor(node)
        }
        _ => false,
    }
}

/// Replace the content of a text node. Returns false when the handle does
/// not point at a text node.
pub fn set_text_content(node: &Handle, text: &str) -> bool {
    match &node.data {
        NodeData::Text { contents } => {
            *contents.borrow_mut() = StrTendril::from(text);
            true
        }
        _ => false,
    }
}

/// Current content of a text node, empty for any other node kind
pub fn text_content(node: &Handle) -> String {
    match &node.data {
        NodeData::Text { contents } => contents.borrow().to_string(),
        _ => String::new(),
    }
}

// Upgrade the weak parent pointer. rcdom stores it in a Cell, so it has to
// be taken out and put back.
fn parent_of(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take();
    let parent = weak.as_ref().and_then(|w| w.upgrade());
    node.parent.set(weak);
    parent
}

fn has_raw_text_ancestor(node: &Handle) -> bool {
    let mut current = parent_of(node);
    while let Some(ancestor) = current {
        if let NodeData::Element { name, .. } = &ancestor.data {
            if RAW_TEXT_ELEMENTS.contains(&name.local.as_ref()) {
                return true;
            }
        }
        current = parent_of(&ancestor);
    }
    false
}

fn collect_descendants(node: &Handle, out: &mut Vec<Handle>) {
    for child in node.children.borrow().iter() {
        if is_translatable_text(child) {
            out.push(child.clone());
        }
        collect_descendants(child, out);
    }
}

fn find_first<F>(node: &Handle, predicate: &F) -> Option<Handle>
where
    F: Fn(&Handle) -> bool,
{
    if predicate(node) {
        return Some(node.clone());
    }
    for child in node.children.borrow().iter() {
        if let Some(found) = find_first(child, predicate) {
            return Some(found);
        }
    }
    None
}

fn element_matches(node: &Handle, selector: &ContainerSelector) -> bool {
    let (name, attrs) = match &node.data {
        NodeData::Element { name, attrs, .. } => (name, attrs),
        _ => return false,
    };

    if !name.local.as_ref().eq_ignore_ascii_case(&selector.tag) {
        return false;
    }

    if selector.classes.is_empty() {
        return true;
    }

    let attrs = attrs.borrow();
    let class_attr = attrs.iter().find(|a| a.name.local == local_name!("class"));
    match class_attr {
        Some(attr) => {
            let present: Vec<&str> = attr.value.split_whitespace().collect();
            selector.classes.iter().all(|c| present.contains(&c.as_str()))
        }
        None => false,
    }
}

/// Set or overwrite an attribute on an element node
fn set_attribute(node: &Handle, name: &str, value: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let mut attrs = attrs.borrow_mut();
        let local = LocalName::from(name);

        if let Some(existing) = attrs.iter_mut().find(|a| a.name.local == local) {
            existing.value = StrTendril::from(value);
        } else {
            attrs.push(Attribute {
                name: QualName::new(None, ns!(), local),
                value: StrTendril::from(value),
            });
        }
    }
}

fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push(' ');
    }
}

fn write_node(node: &Handle, depth: usize, raw: bool, out: &mut String) {
    match &node.data {
        NodeData::Document => {
            for child in node.children.borrow().iter() {
                write_node(child, depth, raw, out);
            }
        }
        NodeData::Doctype { name, .. } => {
            push_indent(out, depth);
            out.push_str("<!DOCTYPE ");
            out.push_str(name);
            out.push_str(">\n");
        }
        NodeData::Comment { contents } => {
            push_indent(out, depth);
            out.push_str("<!--");
            out.push_str(contents);
            out.push_str("-->\n");
        }
        NodeData::Text { contents } => {
            let text = contents.borrow();
            if raw {
                // Script and style bodies go out verbatim, no escaping
                if !text.trim().is_empty() {
                    out.push_str(&text);
                    if !text.ends_with('\n') {
                        out.push('\n');
                    }
                }
            } else {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    push_indent(out, depth);
                    out.push_str(&escape_text(trimmed));
                    out.push('\n');
                }
            }
        }
        NodeData::Element { name, attrs, .. } => {
            let tag = name.local.as_ref();
            push_indent(out, depth);
            out.push('<');
            out.push_str(tag);
            for attr in attrs.borrow().iter() {
                out.push(' ');
                out.push_str(attr.name.local.as_ref());
                out.push_str("=\"");
                out.push_str(&escape_attribute(&attr.value));
                out.push('"');
            }
            out.push_str(">\n");

            if is_void_element(tag) {
                return;
            }

            let child_raw = raw || RAW_TEXT_ELEMENTS.contains(&tag);
            for child in node.children.borrow().iter() {
                write_node(child, depth + 1, child_raw, out);
            }

            push_indent(out, depth);
            out.push_str("</");
            out.push_str(tag);
            out.push_str(">\n");
        }
        NodeData::ProcessingInstruction { .. } => {}
    }
}
