mod error;
mod parse;
mod read;
mod segment;
mod types;

pub use error::{FormatError, ReadError};
pub use parse::{is_sentinel, parse_line, parse_scores, SENTINEL_SPEAKER, SENTINEL_TEXT};
pub use read::{read_from_file, read_from_text};
pub use segment::{segment_lines, Segmenter};
pub use types::{Corpus, Dialogue, ReadStats, Turn};
