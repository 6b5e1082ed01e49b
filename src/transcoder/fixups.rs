//! Dialect-specific cleanup of the final plain text.

use regex::Regex;
use std::sync::LazyLock;

use super::notation::DISPLAY_MARKER;
use crate::dialect::Dialect;

static MATH_CLOSE_NEWLINES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</math>\n+").expect("MATH_CLOSE_NEWLINES_RE: hardcoded regex is valid")
});

static ADJACENT_MATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</math>\n*<math").expect("ADJACENT_MATH_RE: hardcoded regex is valid")
});

/// Apply the text fixups for `dialect`.
///
/// Word: a MathML block is followed by exactly one newline, and two
/// neighbouring MathML blocks are separated by exactly one blank line.
///
/// LaTeX: an inline `$\displaystyle$` left behind by a marker-only
/// annotation becomes a literal `\\displaystyle`.
#[must_use]
pub fn apply(text: &str, dialect: Dialect) -> String {
    match dialect {
        Dialect::ToWord => {
            let text = MATH_CLOSE_NEWLINES_RE.replace_all(text, "</math>\n");
            ADJACENT_MATH_RE
                .replace_all(&text, "</math>\n\n<math")
                .into_owned()
        }
        Dialect::ToLatex => {
            let token = format!("${DISPLAY_MARKER}$");
            text.replace(&token, &format!("\\{DISPLAY_MARKER}"))
        }
    }
}
