// Copy rendered chat answers as LaTeX or Word-ready MathML.
//
// Reads the inner HTML of a rendered message (or one rendered equation) from
// a file or stdin and puts the transcoded text on the system clipboard.

use anyhow::{Context, Result};
use clap::Parser;
use kodegen_tools_mathcopy::clipboard::{HOLDER_READY, serve_until_replaced};
use kodegen_tools_mathcopy::{
    ClipboardBackend, CopyConfig, Copier, Delivery, DetachedClipboard, Dialect, SystemClipboard,
    WORD_PASTE_HINT, parse_html,
};
use kuchiki::NodeRef;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Elements a single-equation copy looks for, outermost renderer first.
const EQUATION_SELECTOR: &str = ".mwe-math-element, .math, .katex";

/// Runs this binary as a detached clipboard holder.
const HOLD_CLIPBOARD_FLAG: &str = "--hold-clipboard";

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Rendered HTML to read; stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Target dialect: `latex` or `word`.
    #[arg(short, long, default_value = "latex")]
    dialect: Dialect,

    /// Treat the input as one rendered equation.
    #[arg(long)]
    equation: bool,

    /// Print the result instead of copying it.
    #[arg(long)]
    print: bool,

    /// Allow whole-message Word copy on hosts other than Windows.
    #[arg(long)]
    enable_word: bool,

    /// Serve text from stdin on the clipboard until another owner replaces it.
    #[arg(long = "hold-clipboard", hide = true)]
    hold_clipboard: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.hold_clipboard {
        return hold_clipboard();
    }

    let markup = read_input(args.input.as_ref())?;

    let config = CopyConfig::builder()
        .word_enabled(cfg!(windows) || args.enable_word)
        .build();
    let mut copier = Copier::new(config, system_backend()?);

    if args.print {
        let text = if args.equation {
            copier.render_equation(&equation_node(&markup), args.dialect)?
        } else {
            copier.render_message_html(&markup, args.dialect)?
        };
        println!("{}", text.trim());
        return Ok(());
    }

    let report = if args.equation {
        copier.copy_equation(&equation_node(&markup), args.dialect)
    } else {
        copier.copy_message_html(&markup, args.dialect)
    }
    .with_context(|| format!("Failed to copy as {}", args.dialect))?;

    if report.show_word_hint {
        eprintln!("{WORD_PASTE_HINT}");
    }
    eprintln!(
        "Copied {} characters as {}",
        report.text.chars().count(),
        report.dialect
    );
    Ok(())
}

/// Clipboard backend for a process that exits right after copying.
fn system_backend() -> Result<Box<dyn ClipboardBackend>> {
    match Delivery::for_short_lived_process() {
        Delivery::InProcess => Ok(Box::new(SystemClipboard::new())),
        Delivery::Detached => {
            let program =
                std::env::current_exe().context("Failed to locate the running executable")?;
            Ok(Box::new(DetachedClipboard::new(program, [HOLD_CLIPBOARD_FLAG])))
        }
    }
}

fn hold_clipboard() -> Result<()> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read clipboard text from stdin")?;
    serve_until_replaced(&text, || println!("{HOLDER_READY}"))
        .context("Failed to hold the clipboard")?;
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut markup = String::new();
            std::io::stdin()
                .read_to_string(&mut markup)
                .context("Failed to read HTML from stdin")?;
            Ok(markup)
        }
    }
}

/// The first rendered equation in `markup`, or the whole document.
fn equation_node(markup: &str) -> NodeRef {
    let document = parse_html(markup);
    match document.select_first(EQUATION_SELECTOR) {
        Ok(node) => node.as_node().clone(),
        Err(()) => document,
    }
}
