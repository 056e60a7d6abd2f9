use crate::reporting::model::{ExtractionReport, Outcome, Verification};
use unicode_width::UnicodeWidthStr;

// ==============================
// BOX CONFIGURATION
// ==============================

const BOX_WIDTH: usize = 62;
const INNER_WIDTH: usize = BOX_WIDTH - 2;

fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

fn top_border() -> String {
    format!("╔{}╗", "═".repeat(INNER_WIDTH))
}

fn middle_border() -> String {
    format!("╠{}╣", "═".repeat(INNER_WIDTH))
}

fn bottom_border() -> String {
    format!("╚{}╝", "═".repeat(INNER_WIDTH))
}

/// Left-aligned box line (emoji-safe)
fn box_line(content: &str) -> String {
    let safe_content = format!(" {} ", content);
    let width = visual_width(&safe_content);

    let padding = INNER_WIDTH.saturating_sub(width);
    format!("║{}{}║", safe_content, " ".repeat(padding))
}

/// Centered box line (emoji-safe)
fn box_line_centered(content: &str) -> String {
    let safe_content = format!(" {} ", content);
    let width = visual_width(&safe_content);

    if width >= INNER_WIDTH {
        return box_line(content);
    }

    let remaining = INNER_WIDTH - width;
    let left = remaining / 2;
    let right = remaining - left;

    format!(
        "║{}{}{}║",
        " ".repeat(left),
        safe_content,
        " ".repeat(right)
    )
}

pub fn render(report: &ExtractionReport) -> String {
    let mut lines = Vec::new();

    lines.push(top_border());
    match report.outcome {
        Outcome::LengthNotFound => {
            lines.push(box_line_centered("EXTRACTION ABORTED"));
            lines.push(middle_border());
            lines.push(box_line("Failed to determine password length."));
            lines.push(box_line("Cannot proceed with extraction."));
        }
        Outcome::Partial => {
            lines.push(box_line_centered("EXTRACTION COMPLETE"));
            lines.push(middle_border());
            if let Some(password) = &report.password {
                lines.push(box_line(&format!("⚠️  Partial extraction: {}", password)));
            }
            lines.push(box_line("Unknown characters shown as '?'"));
            let positions: Vec<String> = report
                .unknown_positions
                .iter()
                .map(|p| p.to_string())
                .collect();
            lines.push(box_line(&format!("Unknown positions: {}", positions.join(", "))));
        }
        Outcome::Complete => {
            lines.push(box_line_centered("EXTRACTION COMPLETE"));
            lines.push(middle_border());
            if let Some(password) = &report.password {
                lines.push(box_line(&format!(
                    "🎯 {} PASSWORD: {}",
                    report.username.to_uppercase(),
                    password
                )));
            }
            let status = match report.verification {
                Verification::Verified => "✓ Login verified",
                Verification::Rejected => "✗ Login rejected",
                Verification::Skipped => "Login not attempted",
            };
            lines.push(box_line(status));
        }
    }

    lines.push(middle_border());
    lines.push(box_line(&format!("Target:   {}", report.target)));
    if let Some(length) = report.length {
        lines.push(box_line(&format!("Length:   {}", length)));
    }
    lines.push(box_line(&format!("Requests: {}", report.requests)));
    lines.push(box_line(&format!("Elapsed:  {:.1}s", report.elapsed_ms as f64 / 1000.0)));
    lines.push(bottom_border());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(
        outcome: Outcome,
        password: Option<&str>,
        verification: Verification,
    ) -> ExtractionReport {
        ExtractionReport {
            target: "http://challenge.localhost/".to_string(),
            username: "admin".to_string(),
            outcome,
            length: password.map(|p| p.chars().count()),
            password: password.map(str::to_string),
            unknown_positions: password
                .map(|p| {
                    p.chars()
                        .enumerate()
                        .filter(|(_, c)| *c == '?')
                        .map(|(i, _)| i + 1)
                        .collect()
                })
                .unwrap_or_default(),
            verification,
            requests: 10,
            elapsed_ms: 1500,
        }
    }

    #[test]
    fn test_lines_have_equal_width() {
        let text = render(&report(Outcome::Complete, Some("letme99i"), Verification::Verified));
        for line in text.lines() {
            assert_eq!(visual_width(line), BOX_WIDTH, "misaligned: {}", line);
        }
        assert!(text.contains("ADMIN PASSWORD: letme99i"));
        assert!(text.contains("Login verified"));
    }

    #[test]
    fn test_partial_lists_unknown_positions() {
        let text = render(&report(Outcome::Partial, Some("a?c?"), Verification::Skipped));
        assert!(text.contains("Partial extraction: a?c?"));
        assert!(text.contains("Unknown positions: 2, 4"));
    }

    #[test]
    fn test_aborted() {
        let text = render(&report(Outcome::LengthNotFound, None, Verification::Skipped));
        assert!(text.contains("EXTRACTION ABORTED"));
        assert!(!text.contains("Length:"));
    }
}
