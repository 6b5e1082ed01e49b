//! Canonical notation extraction from rendered math elements.
//!
//! A rendered math element carries two parallel forms:
//! ```html
//! <span class="katex">
//!   <span class="katex-mathml">
//!     <math><semantics>
//!       <mrow>...</mrow>
//!       <annotation encoding="application/x-tex">x^2</annotation>
//!     </semantics></math>
//!   </span>
//!   <span class="katex-html" aria-hidden="true">...</span>
//! </span>
//! ```
//! The Word dialect reads the presentation `<math>` subtree, the LaTeX
//! dialect reads the TeX annotation.

use kuchiki::NodeRef;
use regex::Regex;
use std::sync::LazyLock;

use super::dom;
use crate::dialect::Dialect;
use crate::error::{TranscodeError, TranscodeResult};

/// Display-mode marker the renderer may wrap around an annotation.
pub const DISPLAY_MARKER: &str = r"\displaystyle";

/// Annotation elements are for consumption, never for embedding in output.
static ANNOTATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<annotation(?:\s[^>]*)?>.*?</annotation>")
        .expect("ANNOTATION_RE: hardcoded regex is valid")
});

/// Extract the canonical notation of one math element.
///
/// `node` may be the math element itself or any wrapper around it; the
/// first descendant `annotation` (and `math`, for Word) is used. The node
/// is never modified.
///
/// # Errors
///
/// Returns [`TranscodeError::NotationMissing`] when the node has no
/// `annotation`, or no `math` element in the Word dialect.
pub fn extract(node: &NodeRef, dialect: Dialect) -> TranscodeResult<String> {
    let annotation = dom::select_first(node, "annotation")
        .ok_or(TranscodeError::NotationMissing("annotation"))?;
    let tex = annotation.text_contents();

    match dialect {
        Dialect::ToWord => {
            // Marker-only annotations carry no payload to convert
            if tex == DISPLAY_MARKER {
                return Ok(DISPLAY_MARKER.to_string());
            }
            let math =
                dom::select_first(node, "math").ok_or(TranscodeError::NotationMissing("math"))?;
            let markup = dom::outer_html(&math)?;
            Ok(strip_annotations(&unescape_presentation(&markup)))
        }
        Dialect::ToLatex => Ok(unwrap_display_marker(&tex)),
    }
}

/// Undo the two entity escapes Word does not understand in pasted MathML.
fn unescape_presentation(markup: &str) -> String {
    markup.replace("&nbsp;", " ").replace("&amp;", "&")
}

fn strip_annotations(markup: &str) -> String {
    ANNOTATION_RE.replace_all(markup, "").into_owned()
}

/// Take the payload of `\displaystyle{...}` if present, then drop any
/// remaining markers.
///
/// ```rust
/// # use kodegen_tools_mathcopy::transcoder::notation::unwrap_display_marker;
/// assert_eq!(unwrap_display_marker(r"\displaystyle{\frac{a}{b}}"), r"\frac{a}{b}");
/// assert_eq!(unwrap_display_marker(r"\displaystyle x^2"), "x^2");
/// ```
#[must_use]
pub fn unwrap_display_marker(tex: &str) -> String {
    let payload = wrapped_payload(tex).unwrap_or(tex);
    payload.replace(DISPLAY_MARKER, "").trim().to_string()
}

/// Brace-matched payload of the first `\displaystyle{`, ignoring `\{` and `\}`.
fn wrapped_payload(tex: &str) -> Option<&str> {
    let opener = format!("{DISPLAY_MARKER}{{");
    let start = tex.find(&opener)? + opener.len();

    let mut depth = 1usize;
    let mut chars = tex[start..].char_indices();
    while let Some((offset, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&tex[start..start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}
