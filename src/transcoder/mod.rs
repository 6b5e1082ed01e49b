//! Rendered message to clipboard text - the transcoding pipeline
//!
//! This module turns an already-rendered chat answer into plain text in one
//! of two dialects:
//! 1. Parse the subtree into an isolated document
//! 2. Replace math nodes with LaTeX or MathML text
//! 3. Rewrite fenced code blocks
//! 4. Strip copy-button decorations
//! 5. Lay out paragraph, list and heading spacing from tag boundaries
//! 6. Strip tags and apply dialect fixups
//!
//! # Usage
//!
//! ```rust
//! # use kodegen_tools_mathcopy::{transcode_html, Dialect};
//! let html = r#"<p>Area: <span class="math math-inline"><math><semantics><mi>r</mi>
//!     <annotation encoding="application/x-tex">\pi r^2</annotation></semantics></math></span></p>"#;
//! let latex = transcode_html(html, Dialect::ToLatex)?;
//! assert_eq!(latex, "Area: $\\pi r^2$\n\n");
//! # Ok::<(), kodegen_tools_mathcopy::TranscodeError>(())
//! ```
//!
//! Per-node problems never abort a transcode: a math node without its
//! annotation is dropped, and a fence without a header gets an empty
//! language tag.

use kuchiki::NodeRef;

pub mod code_fence;
pub mod decoration;
mod dom;
pub mod fixups;
pub mod notation;
pub mod spacing;
pub mod stages;

pub use notation::extract;
pub use stages::{
    DecorationsStripped, FencesRewritten, FinalText, MathRewritten, ParsedFragment, SpacedMarkup,
};

use crate::dialect::Dialect;
use crate::error::TranscodeResult;

/// Transcode a message subtree given as its inner markup.
///
/// Host gates from [`crate::CopyConfig`] (presentation assets loaded, Word
/// enabled) are not checked here; [`crate::Copier`] is the gated entry point.
///
/// # Errors
///
/// Only fails if the parsed fragment cannot be serialized.
pub fn transcode_html(markup: &str, dialect: Dialect) -> TranscodeResult<String> {
    run(ParsedFragment::parse(markup, dialect))
}

/// Transcode a live subtree. `root` itself is never modified.
///
/// Ungated like [`transcode_html`]; hosts go through [`crate::Copier`].
///
/// # Errors
///
/// Only fails if a fragment cannot be serialized.
pub fn transcode_node(root: &NodeRef, dialect: Dialect) -> TranscodeResult<String> {
    run(ParsedFragment::from_node(root, dialect)?)
}

fn run(fragment: ParsedFragment) -> TranscodeResult<String> {
    let math = fragment.rewrite_math();
    if math.dropped() > 0 {
        tracing::debug!(
            dropped = math.dropped(),
            rewritten = math.rewritten(),
            "Some math nodes had no notation and were dropped"
        );
    }

    let text = math
        .rewrite_fences()
        .strip_decorations()
        .space()?
        .into_text();
    Ok(text.into_string())
}

/// Parse markup into a document that can be handed to [`extract`] or
/// [`transcode_node`].
#[must_use]
pub fn parse_html(markup: &str) -> NodeRef {
    dom::parse_document(markup)
}
