//! Boolean-based blind SQL injection password extractor for a single login form.

pub mod cli;
pub mod core;
pub mod extract;
pub mod http;
pub mod oracle;
pub mod reporting;
pub mod verify;
