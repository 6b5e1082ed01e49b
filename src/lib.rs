pub mod clipboard;
pub mod config;
pub mod copier;
pub mod dialect;
pub mod error;
pub mod first_use;
pub mod transcoder;

pub use clipboard::{
    ClipboardBackend, ClipboardSink, Delivery, DetachedClipboard, MemoryClipboard, SystemClipboard,
};
pub use config::CopyConfig;
pub use copier::{Copier, CopyReport};
pub use dialect::Dialect;
pub use error::{ClipboardError, CopyError, TranscodeError, TranscodeResult};
pub use first_use::{FirstUseFlag, WORD_PASTE_HINT};
pub use transcoder::{extract, parse_html, transcode_html, transcode_node};
