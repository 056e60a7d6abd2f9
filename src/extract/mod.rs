//! Blind password extraction
//!
//! Finds the stored value's length with a linear scan, then recovers it one
//! position at a time by asking the oracle about each candidate character.

pub mod alphabet;
pub mod chars;
pub mod length;
pub mod progress;

pub use alphabet::Alphabet;
pub use chars::{extract_chars, Extraction, UNKNOWN_CHAR};
pub use length::{discover_length, DEFAULT_MAX_LENGTH};
pub use progress::{ConsoleProgress, ProgressSink, SilentProgress};
