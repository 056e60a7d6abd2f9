//! Human-readable progress for the extraction phases

/// Receives progress events from the extraction phases.
///
/// All methods default to doing nothing so sinks only implement what they show.
pub trait ProgressSink {
    fn length_started(&self, _max_length: usize) {}
    fn length_progress(&self, _checked: usize) {}
    fn length_found(&self, _length: usize) {}
    fn length_not_found(&self, _max_length: usize) {}
    fn extraction_started(&self, _length: usize) {}
    fn char_found(&self, _position: usize, _length: usize, _ch: char, _so_far: &str) {}
    fn char_unknown(&self, _position: usize, _length: usize) {}
    fn verification_started(&self) {}
    fn verification_finished(&self, _verified: bool) {}
}

/// Prints progress to stdout
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn length_started(&self, max_length: usize) {
        println!("Finding password length using linear search (1-{})...", max_length);
    }

    fn length_progress(&self, checked: usize) {
        println!("  Checked up to length {}...", checked);
    }

    fn length_found(&self, length: usize) {
        println!("✓ Password length is: {} characters", length);
    }

    fn length_not_found(&self, max_length: usize) {
        println!("Could not determine password length (tried 1-{})", max_length);
    }

    fn extraction_started(&self, length: usize) {
        println!("\nExtracting {} characters...", length);
        println!("{}", "-".repeat(60));
    }

    fn char_found(&self, position: usize, length: usize, ch: char, so_far: &str) {
        println!("[{:2}/{}] '{}' -> {}", position, length, ch, so_far);
    }

    fn char_unknown(&self, position: usize, length: usize) {
        println!("[{:2}/{}] Unknown character", position, length);
    }

    fn verification_started(&self) {
        println!("\nVerifying extracted password...");
    }

    fn verification_finished(&self, verified: bool) {
        if verified {
            println!("✓ SUCCESS: verification passed!");
        } else {
            println!("✗ WARNING: verification failed");
        }
    }
}

/// Discards progress (quiet mode)
pub struct SilentProgress;

impl ProgressSink for SilentProgress {}
