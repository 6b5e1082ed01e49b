//! Block spacing for serialized markup
//!
//! Block-level HTML has no line breaks of its own. This pass rebuilds a
//! plain-text paragraph and list layout from tag boundaries alone, before
//! the tags are stripped.
//!
//! Every rule guarantees a *minimum* number of newlines after its marker
//! rather than appending blindly, so running the normalizer twice changes
//! nothing.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Which side of an element a rule keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Open,
    Close,
}

/// One row of the spacing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpacingRule {
    pub tag: &'static str,
    pub marker: Marker,
    /// Newlines that must follow the marker
    pub newlines: usize,
    /// Text inserted before the marker
    pub prefix: Option<&'static str>,
}

impl BlockSpacingRule {
    const fn close(tag: &'static str, newlines: usize) -> Self {
        Self { tag, marker: Marker::Close, newlines, prefix: None }
    }

    const fn open(tag: &'static str, newlines: usize, prefix: Option<&'static str>) -> Self {
        Self { tag, marker: Marker::Open, newlines, prefix }
    }

    fn pattern(&self) -> String {
        let tag = regex::escape(self.tag);
        match (self.marker, self.prefix) {
            (Marker::Close, _) => format!(r"</{tag}>(\n*)"),
            (Marker::Open, None) => format!(r"<{tag}(?:\s[^>]*)?>(\n*)"),
            (Marker::Open, Some(prefix)) => {
                format!(r"(?:{})?<{tag}(?:\s[^>]*)?>(\n*)", regex::escape(prefix))
            }
        }
    }
}

/// Applied top to bottom.
pub const BLOCK_SPACING_RULES: &[BlockSpacingRule] = &[
    BlockSpacingRule::close("p", 2),
    BlockSpacingRule::close("li", 1),
    BlockSpacingRule::open("ul", 1, None),
    BlockSpacingRule::close("ul", 1),
    BlockSpacingRule::open("ol", 1, None),
    BlockSpacingRule::close("ol", 1),
    BlockSpacingRule::close("pre", 1),
    BlockSpacingRule::open("li", 0, Some("- ")),
];

static COMPILED_RULES: LazyLock<Vec<(BlockSpacingRule, Regex)>> = LazyLock::new(|| {
    BLOCK_SPACING_RULES
        .iter()
        .map(|rule| {
            let regex = Regex::new(&rule.pattern())
                .expect("BLOCK_SPACING_RULES: hardcoded regex is valid");
            (*rule, regex)
        })
        .collect()
});

static HEADING_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</h([1-6])>(\n*)").expect("HEADING_CLOSE_RE: hardcoded regex is valid")
});

static BLANK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("BLANK_RUN_RE: hardcoded regex is valid"));

/// Insert line breaks around block tags, then collapse blank-line runs.
///
/// ```rust
/// # use kodegen_tools_mathcopy::transcoder::spacing::normalize;
/// assert_eq!(
///     normalize("<p>a</p><ul><li>b</li></ul>"),
///     "<p>a</p>\n\n<ul>\n- <li>b</li>\n</ul>\n"
/// );
/// ```
#[must_use]
pub fn normalize(markup: &str) -> String {
    let mut result = markup.to_string();

    for (rule, regex) in COMPILED_RULES.iter() {
        result = regex
            .replace_all(&result, |caps: &Captures| {
                let existing = caps[1].len();
                let whole = &caps[0];
                let marker = &whole[..whole.len() - existing];
                let marker = rule
                    .prefix
                    .and_then(|prefix| marker.strip_prefix(prefix))
                    .unwrap_or(marker);
                format!(
                    "{}{}{}",
                    rule.prefix.unwrap_or(""),
                    marker,
                    "\n".repeat(existing.max(rule.newlines))
                )
            })
            .into_owned();
    }

    result = HEADING_CLOSE_RE
        .replace_all(&result, |caps: &Captures| {
            format!("</h{}>{}", &caps[1], "\n".repeat(caps[2].len().max(2)))
        })
        .into_owned();

    collapse_blank_lines(&result)
}

/// Collapse every run of three or more newlines to exactly two.
#[must_use]
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN_RE.replace_all(text, "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_get_blank_line() {
        assert_eq!(normalize("<p>a</p><p>b</p>"), "<p>a</p>\n\n<p>b</p>\n\n");
    }

    #[test]
    fn test_existing_newlines_are_not_doubled() {
        assert_eq!(normalize("<p>a</p>\n<p>b</p>"), "<p>a</p>\n\n<p>b</p>\n\n");
        assert_eq!(normalize("<li>a</li>\n\n"), "- <li>a</li>\n\n");
    }

    #[test]
    fn test_ordered_list_with_attributes() {
        assert_eq!(
            normalize(r#"<ol start="3"><li value="3">x</li></ol>"#),
            "<ol start=\"3\">\n- <li value=\"3\">x</li>\n</ol>\n"
        );
    }

    #[test]
    fn test_headings_get_blank_line() {
        assert_eq!(normalize("<h1>T</h1><h6>S</h6>"), "<h1>T</h1>\n\n<h6>S</h6>\n\n");
    }

    #[test]
    fn test_code_block_close() {
        assert_eq!(normalize("<pre>x</pre>y"), "<pre>x</pre>\ny");
    }

    #[test]
    fn test_lookalike_tags_untouched() {
        assert_eq!(normalize("<pre><link><label>"), "<pre><link><label>");
        assert_eq!(normalize("</path>"), "</path>");
    }

    #[test]
    fn test_escaped_text_untouched() {
        let markup = "&lt;/p&gt;&lt;li&gt;";
        assert_eq!(normalize(markup), markup);
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\nb\nc"), "a\n\nb\nc");
    }

    #[test]
    fn test_normalize_twice_is_stable() {
        let markup = "<h2>T</h2><p>a</p><ol><li><p>b</p></li><li>c</li></ol><pre>d</pre>";
        let once = normalize(markup);
        assert_eq!(normalize(&once), once);
    }
}
