//! Typed pipeline stages
//!
//! Each stage consumes the previous one, so the passes can only run in the
//! order later passes depend on:
//!
//! ```text
//! ParsedFragment -> MathRewritten -> FencesRewritten -> DecorationsStripped
//!                -> SpacedMarkup -> FinalText
//! ```

use html_escape::decode_html_entities;
use kuchiki::NodeRef;

use super::{code_fence, decoration, dom, fixups, notation, spacing};
use crate::dialect::Dialect;
use crate::error::TranscodeResult;

/// Math nodes: generic and katex-style.
pub const MATH_SELECTOR: &str = ".math, .katex";

/// Class tokens that mark a math node as display (block) math.
pub const BLOCK_MATH_CLASSES: &[&str] = &["math-display", "katex-display"];

/// A message subtree parsed into its own document.
pub struct ParsedFragment {
    document: NodeRef,
    dialect: Dialect,
}

impl ParsedFragment {
    /// Parse a subtree's inner markup.
    #[must_use]
    pub fn parse(markup: &str, dialect: Dialect) -> Self {
        Self {
            document: dom::parse_document(markup),
            dialect,
        }
    }

    /// Copy a live subtree by serializing its children and parsing them again.
    ///
    /// Later passes mutate the copy, never `root`.
    pub fn from_node(root: &NodeRef, dialect: Dialect) -> TranscodeResult<Self> {
        Ok(Self::parse(&dom::inner_html(root)?, dialect))
    }

    /// Replace every math node with its notation in the target dialect.
    ///
    /// Nodes whose notation cannot be extracted are dropped.
    #[must_use]
    pub fn rewrite_math(self) -> MathRewritten {
        let mut rewritten = 0usize;
        let mut dropped = 0usize;

        for node in dom::select_all(&self.document, MATH_SELECTOR) {
            // Already replaced along with an enclosing math node
            if !dom::is_attached(&node) {
                continue;
            }

            match notation::extract(&node, self.dialect) {
                Ok(notation) => {
                    let block = is_block_math(&node);
                    let markup = replacement_markup(&notation, block, self.dialect);
                    // The escaped markup carries no tags, so it parses to one text node
                    dom::replace_with_text(&node, decode_html_entities(&markup).into_owned());
                    rewritten += 1;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Dropping math node");
                    node.detach();
                    dropped += 1;
                }
            }
        }

        tracing::trace!(rewritten, dropped, dialect = %self.dialect, "Math pass done");
        MathRewritten {
            document: self.document,
            dialect: self.dialect,
            rewritten,
            dropped,
        }
    }
}

/// Fragment with math nodes flattened to text.
pub struct MathRewritten {
    document: NodeRef,
    dialect: Dialect,
    rewritten: usize,
    dropped: usize,
}

impl MathRewritten {
    /// Math nodes replaced by this pass
    #[must_use]
    pub fn rewritten(&self) -> usize {
        self.rewritten
    }

    /// Math nodes dropped because their notation was missing
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Serialized `<body>` of the fragment at this stage.
    pub fn markup(&self) -> TranscodeResult<String> {
        body_markup(&self.document)
    }

    #[must_use]
    pub fn rewrite_fences(self) -> FencesRewritten {
        let fences = dom::select_all(&self.document, code_fence::FENCE_SELECTOR);
        let count = fences.len();
        for fence in &fences {
            code_fence::rewrite(fence, self.dialect);
        }

        tracing::trace!(fences = count, "Fence pass done");
        FencesRewritten {
            document: self.document,
            dialect: self.dialect,
        }
    }
}

/// Fragment with code fences rewritten.
pub struct FencesRewritten {
    document: NodeRef,
    dialect: Dialect,
}

impl FencesRewritten {
    #[must_use]
    pub fn strip_decorations(self) -> DecorationsStripped {
        decoration::strip_decorations(&self.document);
        DecorationsStripped {
            document: self.document,
            dialect: self.dialect,
        }
    }
}

/// Fragment holding only content nodes.
pub struct DecorationsStripped {
    document: NodeRef,
    dialect: Dialect,
}

impl DecorationsStripped {
    /// Serialized `<body>` of the fragment at this stage.
    pub fn markup(&self) -> TranscodeResult<String> {
        body_markup(&self.document)
    }

    /// Serialize the fragment and lay out block spacing.
    pub fn space(self) -> TranscodeResult<SpacedMarkup> {
        let markup = body_markup(&self.document)?;
        Ok(SpacedMarkup {
            markup: spacing::normalize(&markup),
            dialect: self.dialect,
        })
    }
}

/// Markup with line breaks placed around block tags.
pub struct SpacedMarkup {
    markup: String,
    dialect: Dialect,
}

impl SpacedMarkup {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.markup
    }

    /// Strip tags, apply dialect fixups, and collapse blank-line runs.
    #[must_use]
    pub fn into_text(self) -> FinalText {
        let document = dom::parse_document(&self.markup);
        let text = dom::select_first(&document, "body")
            .unwrap_or(document)
            .text_contents();
        let text = fixups::apply(&text, self.dialect);
        FinalText(spacing::collapse_blank_lines(&text))
    }
}

/// The text handed to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalText(String);

impl FinalText {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

fn is_block_math(node: &NodeRef) -> bool {
    BLOCK_MATH_CLASSES
        .iter()
        .any(|class_name| dom::has_class(node, class_name))
}

fn body_markup(document: &NodeRef) -> TranscodeResult<String> {
    let body = dom::select_first(document, "body").unwrap_or_else(|| document.clone());
    Ok(dom::outer_html(&body)?)
}

/// Escape notation so markup parsing reads it as text.
///
/// Pre-escaped `&lt;` / `&gt;` are escaped once more first so they survive
/// as written.
#[must_use]
pub fn escape_notation(notation: &str) -> String {
    notation
        .replace("&lt;", "&amp;lt;")
        .replace("&gt;", "&amp;gt;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Markup that takes a math node's place.
///
/// | dialect | block | inline |
/// |---|---|---|
/// | LaTeX | `\begin{equation*}` environment, `align*` renamed to `aligned` | `$...$` |
/// | Word | MathML plus a newline | MathML |
#[must_use]
pub fn replacement_markup(notation: &str, block: bool, dialect: Dialect) -> String {
    let escaped = escape_notation(notation);
    match (dialect, block) {
        (Dialect::ToLatex, true) => format!(
            "\\begin{{equation*}}\n{}\n\\end{{equation*}}\n\n",
            escaped.replace("align*", "aligned")
        ),
        (Dialect::ToLatex, false) => format!("${escaped}$"),
        (Dialect::ToWord, true) => format!("{escaped}\n"),
        (Dialect::ToWord, false) => escaped,
    }
}
