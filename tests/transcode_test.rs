mod common;

use common::{broken_math, code_fence, decorations, display_math, inline_math};
use kodegen_tools_mathcopy::transcoder::ParsedFragment;
use kodegen_tools_mathcopy::{Dialect, parse_html, transcode_html, transcode_node};

fn latex(html: &str) -> String {
    transcode_html(html, Dialect::ToLatex).expect("transcode as LaTeX")
}

fn word(html: &str) -> String {
    transcode_html(html, Dialect::ToWord).expect("transcode as Word")
}

#[test]
fn test_inline_math_becomes_dollar_delimited() {
    let html = format!("<p>Let {} be given.</p>", inline_math("x^2"));
    assert_eq!(latex(&html), "Let $x^2$ be given.\n\n");
}

#[test]
fn test_nested_math_nodes_rewritten_once() {
    let html = format!("<p>{}</p>", inline_math("y"));
    let output = latex(&html);
    assert_eq!(output.matches('$').count(), 2);
    assert!(!output.contains("rendered-glyphs"));
}

#[test]
fn test_display_math_becomes_equation_environment() {
    let html = format!(
        "<p>Consider</p>{}<p>Done</p>",
        display_math(r"\begin{align*}a&=b\end{align*}")
    );
    let output = latex(&html);

    assert!(output.contains(
        "\\begin{equation*}\n\\begin{aligned}a&=b\\end{aligned}\n\\end{equation*}\n\nDone"
    ));
    assert!(!output.contains("align*"));
}

#[test]
fn test_display_marker_wrapper_unwrapped() {
    let html = format!("<p>{}</p>", inline_math(r"\displaystyle{\frac{a}{b}}"));
    assert_eq!(latex(&html), "$\\frac{a}{b}$\n\n");
}

#[test]
fn test_code_fence_becomes_minted_block() {
    let html = format!(
        "<p>Run:</p>{}<p>Then</p>",
        code_fence("python", "print(1)\n")
    );
    assert_eq!(
        latex(&html),
        "Run:\n\n\\begin{minted}{python}\nprint(1)\n\\end{minted}\n\nThen\n\n"
    );
}

#[test]
fn test_code_fence_word_keeps_only_code() {
    let html = format!(
        "<p>Run:</p>{}<p>Then</p>",
        code_fence("python", "print(1)\n")
    );
    let output = word(&html);

    assert!(output.contains("print(1)"));
    assert!(!output.contains("python"));
    assert!(!output.contains("Copy code"));
    assert!(!output.contains("minted"));
}

#[test]
fn test_notation_markup_stays_text() {
    let html = format!("<p>{}</p>", inline_math("a<b>c</b>"));

    let markup = ParsedFragment::parse(&html, Dialect::ToLatex)
        .rewrite_math()
        .markup()
        .expect("serialize rewritten fragment");
    assert!(markup.contains("$a&lt;b"));
    assert!(!markup.contains("<b>"));

    assert_eq!(latex(&html), "$a<b>c</b>$\n\n");
}

#[test]
fn test_notation_cannot_inject_block_spacing() {
    let html = format!("<p>{}</p>", inline_math("</p><li>x"));
    assert_eq!(latex(&html), "$</p><li>x$\n\n");
}

#[test]
fn test_math_without_annotation_is_dropped() {
    let html = format!("<p>{} and {}</p>", inline_math("x^2"), broken_math());

    assert_eq!(latex(&html), "$x^2$ and \n\n");

    let output = word(&html);
    assert!(!output.contains("broken-glyphs"));
    assert!(output.contains("<math"));
}

#[test]
fn test_decorations_removed_in_both_dialects() {
    let html = format!("<p>Answer</p>{}", decorations());
    for dialect in [Dialect::ToLatex, Dialect::ToWord] {
        let output = transcode_html(&html, dialect).expect("transcode");
        assert_eq!(output, "Answer\n\n");
    }
}

#[test]
fn test_headings_and_lists_laid_out() {
    let html = "<h2>Steps</h2><ol><li>First</li><li>Second</li></ol><p>End</p>";
    assert_eq!(latex(html), "Steps\n\n- First\n- Second\n\nEnd\n\n");
}

#[test]
fn test_full_message_as_latex() {
    let html = format!(
        "<h3>Proof</h3><p>Let {} be even.</p>{}{}<ul><li>done</li></ul>{}",
        inline_math("n"),
        display_math(r"\begin{align*}n&=2k\end{align*}"),
        code_fence("rust", "let n = 2;\n"),
        decorations()
    );

    assert_eq!(
        latex(&html),
        "Proof\n\n\
         Let $n$ be even.\n\n\
         \\begin{equation*}\n\\begin{aligned}n&=2k\\end{aligned}\n\\end{equation*}\n\n\
         \\begin{minted}{rust}\nlet n = 2;\n\\end{minted}\n\n\
         - done\n\n"
    );
}

#[test]
fn test_word_emits_mathml_without_annotations() {
    let html = format!(
        "<p>Euler:</p>{}<p>Inline {} end</p>",
        display_math(r"e^{i\pi}+1=0"),
        inline_math("x")
    );
    let output = word(&html);

    assert!(output.starts_with("Euler:\n\n<math"));
    assert!(output.contains("<semantics><mrow><mi>x</mi><mo>&lt;</mo><mn>2</mn></mrow></semantics></math>"));
    assert!(output.contains("</math>\nInline <math"));
    assert!(!output.contains("annotation"));
    assert!(!output.contains(r"e^{i\pi}"));
}

#[test]
fn test_word_adjacent_blocks_separated_by_blank_line() {
    let html = format!("{}{}", display_math("a"), display_math("b"));
    let output = word(&html);

    assert_eq!(output.matches("<math").count(), 2);
    assert!(output.contains("</math>\n\n<math"));
    assert!(!output.contains("</math>\n\n\n"));
}

#[test]
fn test_word_marker_only_annotation_kept_verbatim() {
    let html = format!("<p>See {}</p>", inline_math(r"\displaystyle"));
    assert_eq!(word(&html), "See \\displaystyle\n\n");
}

#[test]
fn test_transcode_node_leaves_live_tree_alone() {
    let document = parse_html(&format!(
        r#"<div id="msg"><p>Value {}</p>{}</div>"#,
        inline_math("y"),
        decorations()
    ));
    let message = document
        .select_first("#msg")
        .expect("message container")
        .as_node()
        .clone();
    let before = message.text_contents();

    let output = transcode_node(&message, Dialect::ToLatex).expect("transcode node");

    assert_eq!(output, "Value $y$\n\n");
    assert_eq!(message.text_contents(), before);
    assert!(message.select_first(".katex").is_ok());
    assert!(message.select_first(".mt-1").is_ok());
}

#[test]
fn test_stages_expose_intermediate_results() {
    let html = format!("<p>Hi {}</p>{}", inline_math("x"), decorations());

    let stripped = ParsedFragment::parse(&html, Dialect::ToLatex)
        .rewrite_math()
        .rewrite_fences()
        .strip_decorations();
    let stripped_markup = stripped.markup().expect("serialize stripped fragment");
    assert!(stripped_markup.contains("<p>Hi $x$</p>"));
    assert!(!stripped_markup.contains("Regenerate response"));
    assert!(!stripped_markup.contains("Copy message"));

    let spaced = stripped.space().expect("space fragment");
    assert!(spaced.as_str().contains("<p>Hi $x$</p>\n\n"));

    let text = spaced.into_text();
    assert_eq!(text.as_str(), "Hi $x$\n\n");
    assert_eq!(text.into_string(), "Hi $x$\n\n");
}

#[test]
fn test_newlines_between_list_items_are_not_doubled() {
    let html = "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<p>x</p>";
    assert_eq!(latex(html), "\n- a\n- b\n\nx\n\n");
}
