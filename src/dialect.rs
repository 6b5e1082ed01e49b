//! Target dialects for copied content.

use std::fmt;
use std::str::FromStr;

/// Which textual form a copy produces.
///
/// The dialect decides which of a math node's two representations is read
/// (presentation MathML for Word, the TeX annotation for LaTeX) and how
/// block and inline math are laid out in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// MathML markup that Word converts into native equations on paste.
    ToWord,
    /// LaTeX source with `equation*` / `minted` environments.
    ToLatex,
}

impl Dialect {
    /// Short lowercase name used on the command line and in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::ToWord => "word",
            Dialect::ToLatex => "latex",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "word" | "mathml" => Ok(Dialect::ToWord),
            "latex" | "tex" => Ok(Dialect::ToLatex),
            other => Err(format!(
                "unknown dialect '{other}' (expected 'latex' or 'word')"
            )),
        }
    }
}
