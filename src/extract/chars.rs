use crate::extract::alphabet::Alphabet;
use crate::extract::progress::ProgressSink;
use crate::oracle::{Condition, Oracle, Quoting};

/// Placeholder for a position no candidate matched
pub const UNKNOWN_CHAR: char = '?';

/// Result of character extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub value: String,
    /// 1-based positions filled with [`UNKNOWN_CHAR`]
    pub unknown_positions: Vec<usize>,
}

impl Extraction {
    pub fn is_complete(&self) -> bool {
        self.unknown_positions.is_empty()
    }
}

async fn scan<O: Oracle>(
    oracle: &O,
    position: usize,
    candidates: &[char],
    quoting: Quoting,
) -> anyhow::Result<Option<char>> {
    for &candidate in candidates {
        let cond = Condition::CharAt {
            position,
            candidate,
            quoting,
        };
        if oracle.check(&cond).await? {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

/// Recover `length` characters, left to right.
///
/// Each position scans the primary alphabet with quotes doubled, then the fallback
/// alphabet verbatim; the first confirmed candidate wins. A position nothing confirms
/// becomes [`UNKNOWN_CHAR`] and extraction moves on.
pub async fn extract_chars<O: Oracle, P: ProgressSink + ?Sized>(
    oracle: &O,
    length: usize,
    alphabet: &Alphabet,
    progress: &P,
) -> anyhow::Result<Extraction> {
    progress.extraction_started(length);

    let mut value = String::with_capacity(length);
    let mut unknown_positions = Vec::new();

    for position in 1..=length {
        let mut found = scan(oracle, position, alphabet.primary(), Quoting::Doubled).await?;

        if found.is_none() && !alphabet.fallback().is_empty() {
            tracing::debug!(position, "primary alphabet exhausted, trying fallback");
            found = scan(oracle, position, alphabet.fallback(), Quoting::Raw).await?;
        }

        match found {
            Some(ch) => {
                value.push(ch);
                progress.char_found(position, length, ch, &value);
            }
            None => {
                tracing::warn!(position, "no candidate matched");
                value.push(UNKNOWN_CHAR);
                unknown_positions.push(position);
                progress.char_unknown(position, length);
            }
        }
    }

    Ok(Extraction {
        value,
        unknown_positions,
    })
}
