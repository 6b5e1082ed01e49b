//! Removal of copy-affordance UI that must never reach the clipboard.

use kuchiki::NodeRef;

use super::dom;

/// Action bar under a message, and the single-button toolbar.
pub const DECORATION_SELECTORS: &[&str] = &[".mt-1 > .p-1", ".mt-1.flex.gap-3"];

/// Detach every decoration node under `root`, returning how many were removed.
///
/// Absent decorations are not an error.
pub fn strip_decorations(root: &NodeRef) -> usize {
    let mut removed = 0;
    for &selector in DECORATION_SELECTORS {
        for node in dom::select_all(root, selector) {
            // An earlier match may already have taken this one with it
            if dom::is_attached(&node) {
                node.detach();
                removed += 1;
            }
        }
    }
    if removed > 0 {
        log::debug!("Stripped {removed} decoration node(s)");
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_action_bar_and_toolbar() {
        let doc = dom::parse_document(
            r#"<p>Answer</p>
<div class="mt-1"><div class="p-1">Regenerate</div></div>
<div class="mt-1 flex gap-3"><button>Copy</button></div>"#,
        );
        assert_eq!(strip_decorations(&doc), 2);

        let text = doc.text_contents();
        assert!(text.contains("Answer"));
        assert!(!text.contains("Regenerate"));
        assert!(!text.contains("Copy"));
    }

    #[test]
    fn test_nested_match_counted_once() {
        let doc = dom::parse_document(
            r#"<div class="mt-1 flex gap-3"><div class="mt-1 flex gap-3">x</div></div><p>y</p>"#,
        );
        assert_eq!(strip_decorations(&doc), 1);
        assert_eq!(doc.text_contents(), "y");
    }

    #[test]
    fn test_absent_decorations_are_a_no_op() {
        let doc = dom::parse_document("<p>Only content</p>");
        assert_eq!(strip_decorations(&doc), 0);
        assert_eq!(doc.text_contents(), "Only content");
    }
}
