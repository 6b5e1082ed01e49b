//! Rendered-message fixtures shared by the integration tests

/// A katex element as the renderer emits it: MathML with a TeX annotation,
/// plus the visual HTML glyphs.
#[allow(dead_code)]
pub fn katex(tex: &str) -> String {
    format!(
        r#"<span class="katex"><span class="katex-mathml"><math xmlns="http://www.w3.org/1998/Math/MathML"><semantics><mrow><mi>x</mi><mo>&lt;</mo><mn>2</mn></mrow><annotation encoding="application/x-tex">{}</annotation></semantics></math></span><span class="katex-html" aria-hidden="true"><span class="base">rendered-glyphs</span></span></span>"#,
        html_escape::encode_text(tex)
    )
}

/// Inline math as chat answers wrap it
#[allow(dead_code)]
pub fn inline_math(tex: &str) -> String {
    format!(r#"<span class="math math-inline">{}</span>"#, katex(tex))
}

/// Display math as chat answers wrap it
#[allow(dead_code)]
pub fn display_math(tex: &str) -> String {
    format!(r#"<span class="math math-display">{}</span>"#, katex(tex))
}

/// A math node whose MathML (and annotation) never rendered
#[allow(dead_code)]
pub fn broken_math() -> String {
    r#"<span class="math math-inline"><span class="katex"><span class="katex-html" aria-hidden="true">broken-glyphs</span></span></span>"#.to_string()
}

/// A fenced code block with its language header and copy button
#[allow(dead_code)]
pub fn code_fence(language: &str, code: &str) -> String {
    format!(
        r#"<pre><div class="rounded-md"><div class="rounded-t-md"><span>{language}</span><button>Copy code</button></div><div class="p-4"><code class="language-{language}">{}</code></div></div></pre>"#,
        html_escape::encode_text(code)
    )
}

/// The message action bar and toolbar
#[allow(dead_code)]
pub fn decorations() -> String {
    r#"<div class="mt-1"><div class="p-1"><button>Regenerate response</button></div></div><div class="mt-1 flex gap-3"><button>Copy message</button></div>"#.to_string()
}
