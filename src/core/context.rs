//! Resolved configuration for one extraction run

use crate::cli::args::Cli;
use crate::core::scope::Scope;
use crate::extract::Alphabet;
use crate::oracle::InjectionTemplate;
use crate::reporting::OutputFormat;
use url::Url;

pub struct Context {
    pub target: Url,
    pub scope: Scope,
    pub template: InjectionTemplate,
    pub alphabet: Alphabet,
    pub max_length: usize,
    pub failure_marker: String,
    pub success_marker: String,
    pub rate_limit: u32,
    pub quiet: bool,
    pub output_format: OutputFormat,
    pub output_file: Option<String>,
}

impl Context {
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let target = Url::parse(&cli.target)
            .map_err(|e| anyhow::anyhow!("Invalid target URL {}: {}", cli.target, e))?;
        let scope = Scope::new(&target)?;

        if cli.max_length == 0 {
            anyhow::bail!("--max-length must be at least 1");
        }

        let alphabet = if cli.no_fallback {
            Alphabet::default().without_fallback()
        } else {
            Alphabet::default()
        };

        Ok(Self {
            target,
            scope,
            template: InjectionTemplate::new(&cli.username, &cli.table, &cli.column),
            alphabet,
            max_length: cli.max_length,
            failure_marker: cli.failure_marker,
            success_marker: cli.success_marker,
            rate_limit: cli.rate,
            quiet: cli.quiet,
            output_format: cli.format.parse()?,
            output_file: cli.output,
        })
    }

    pub fn username(&self) -> &str {
        &self.template.username
    }
}
