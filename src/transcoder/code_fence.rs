//! Code fence rewriting
//!
//! Chat answers render fenced code as:
//! ```html
//! <pre>
//!   <div class="rounded-md">
//!     <div class="rounded-t-md"><span>python</span><button>Copy code</button></div>
//!     <div class="p-4"><code class="language-python">print(1)</code></div>
//!   </div>
//! </pre>
//! ```
//! LaTeX output turns the header into a `minted` environment; Word output
//! drops the header and keeps only the code text.

use kuchiki::NodeRef;

use super::dom;
use crate::dialect::Dialect;
use crate::error::{TranscodeError, TranscodeResult};

/// Fence containers, matched in document order.
pub const FENCE_SELECTOR: &str = "pre > .rounded-md";

const HEADER_SELECTOR: &str = ".rounded-t-md";

/// Rewrite one fence container in place.
///
/// A fence without a recognizable header is treated as having an empty
/// language tag.
pub fn rewrite(fence: &NodeRef, dialect: Dialect) {
    let header = dom::select_first(fence, HEADER_SELECTOR);

    match dialect {
        Dialect::ToLatex => {
            let language = read_language(header.as_ref()).unwrap_or_else(|e| {
                log::debug!("{e}; using an empty minted language");
                String::new()
            });

            let begin = NodeRef::new_text(format!("\\begin{{minted}}{{{language}}}\n"));
            match header {
                Some(header) => {
                    header.insert_before(begin);
                    header.detach();
                }
                None => fence.prepend(begin),
            }

            let end = if fence.text_contents().ends_with('\n') {
                "\\end{minted}\n\n"
            } else {
                "\n\\end{minted}\n\n"
            };
            fence.insert_after(NodeRef::new_text(end.to_string()));

            log::debug!("Rewrote code fence as minted block (language: {language:?})");
        }
        Dialect::ToWord => {
            if let Some(header) = header {
                header.detach();
            }
        }
    }
}

/// Language tag held by the header's first `span`.
fn read_language(header: Option<&NodeRef>) -> TranscodeResult<String> {
    let span = header
        .and_then(|header| dom::select_first(header, "span"))
        .ok_or(TranscodeError::MalformedFence)?;
    Ok(span.text_contents().trim().to_string())
}
