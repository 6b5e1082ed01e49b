//! Small helpers over kuchiki's mutable DOM.

use anyhow::{Context, Result};
use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink;

/// Parse markup into a fresh, isolated document.
pub(crate) fn parse_document(markup: &str) -> NodeRef {
    kuchiki::parse_html().one(markup.to_string())
}

/// Collect every element matching a hardcoded selector, in document order.
///
/// Matches are collected up front so callers may detach nodes while walking
/// the result.
pub(crate) fn select_all(root: &NodeRef, selector: &'static str) -> Vec<NodeRef> {
    match root.select(selector) {
        Ok(matches) => matches.map(|m| m.as_node().clone()).collect(),
        Err(()) => {
            log::error!("BUG: hardcoded CSS selector '{selector}' is invalid");
            Vec::new()
        }
    }
}

/// First descendant-or-self matching a hardcoded selector.
pub(crate) fn select_first(root: &NodeRef, selector: &'static str) -> Option<NodeRef> {
    root.select_first(selector).ok().map(|m| m.as_node().clone())
}

/// Whether the element's `class` attribute contains `class_name` as a token.
pub(crate) fn has_class(node: &NodeRef, class_name: &str) -> bool {
    node.as_element().is_some_and(|element| {
        element
            .attributes
            .borrow()
            .get("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class_name))
    })
}

/// Whether the node is still reachable from its document root.
///
/// A node whose ancestor was replaced earlier in a pass keeps its own parent
/// links but no longer hangs off the document.
pub(crate) fn is_attached(node: &NodeRef) -> bool {
    node.ancestors().any(|ancestor| ancestor.as_document().is_some())
}

/// Serialize a node including its own tags.
pub(crate) fn outer_html(node: &NodeRef) -> Result<String> {
    let mut output = Vec::new();
    node.serialize(&mut output)
        .context("Failed to serialize HTML node")?;
    String::from_utf8(output).context("Serialized HTML is not valid UTF-8")
}

/// Serialize only a node's children.
pub(crate) fn inner_html(node: &NodeRef) -> Result<String> {
    let mut html = String::new();
    for child in node.children() {
        html.push_str(&outer_html(&child)?);
    }
    Ok(html)
}

/// Replace `node` in its parent with a single text node.
pub(crate) fn replace_with_text(node: &NodeRef, text: String) {
    node.insert_before(NodeRef::new_text(text));
    node.detach();
}
