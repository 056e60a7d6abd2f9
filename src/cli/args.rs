use clap::Parser;

/// BLINDPASS – boolean-based blind SQL injection password extractor
#[derive(Parser, Debug)]
#[command(
    name = "blindpass",
    version,
    about = "BLINDPASS – boolean-based blind SQL injection password extractor",
    long_about = r#"
BLINDPASS recovers a stored password through a login form whose username field
is injectable, using nothing but the page's true/false behaviour:

  • Length discovery: LENGTH(password) = n for n = 1..max
  • Character extraction: SUBSTR(password, pos, 1) = 'c' per position
  • Verification: a real login with the recovered password

A probe counts as TRUE when the response is HTTP 200 and does not contain the
failure marker. Running without arguments targets http://challenge.localhost/.
"#,
    after_help = r#"EXAMPLES:
  blindpass
  blindpass -t http://challenge.localhost/ -u admin
  blindpass --table accounts --column secret --max-length 64
  blindpass --format json -o result.json
"#
)]
pub struct Cli {
    /// Login endpoint URL
    #[arg(short, long, default_value = "http://challenge.localhost/")]
    pub target: String,

    // ═══════════════════════════════════════════════════════════════════
    // INJECTION
    // ═══════════════════════════════════════════════════════════════════

    /// Account whose password is extracted (also the injected username)
    #[arg(short, long, default_value = "admin", help_heading = "INJECTION")]
    pub username: String,

    /// Table holding the credentials
    #[arg(long, default_value = "users", help_heading = "INJECTION")]
    pub table: String,

    /// Column holding the password
    #[arg(long, default_value = "password", help_heading = "INJECTION")]
    pub column: String,

    /// Largest password length probed
    #[arg(long = "max-length", default_value_t = 100, help_heading = "INJECTION")]
    pub max_length: usize,

    /// Skip the second, unescaped punctuation pass
    #[arg(long = "no-fallback", help_heading = "INJECTION")]
    pub no_fallback: bool,

    // ═══════════════════════════════════════════════════════════════════
    // MATCHING
    // ═══════════════════════════════════════════════════════════════════

    /// Body text meaning the injected condition was FALSE
    #[arg(
        long = "failure-marker",
        default_value = "Invalid username",
        help_heading = "MATCHING"
    )]
    pub failure_marker: String,

    /// Body text meaning the verification login succeeded
    #[arg(
        long = "success-marker",
        default_value = "Hello, admin!",
        help_heading = "MATCHING"
    )]
    pub success_marker: String,

    // ═══════════════════════════════════════════════════════════════════
    // PERFORMANCE
    // ═══════════════════════════════════════════════════════════════════

    /// Maximum HTTP requests per second (0 = unlimited)
    #[arg(long, default_value_t = 0, help_heading = "PERFORMANCE")]
    pub rate: u32,

    // ═══════════════════════════════════════════════════════════════════
    // OUTPUT
    // ═══════════════════════════════════════════════════════════════════

    /// Skip the banner display
    #[arg(long, help_heading = "OUTPUT")]
    pub no_banner: bool,

    /// Quiet mode (final report only)
    #[arg(short, long, help_heading = "OUTPUT")]
    pub quiet: bool,

    /// Verbose output (debug level)
    #[arg(short, long, help_heading = "OUTPUT")]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text", help_heading = "OUTPUT")]
    pub format: String,

    /// Output file path
    #[arg(short, long, help_heading = "OUTPUT")]
    pub output: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_no_arguments_uses_challenge_defaults() {
        let cli = Cli::try_parse_from(["blindpass"]).unwrap();

        assert_eq!(cli.target, "http://challenge.localhost/");
        assert_eq!(cli.username, "admin");
        assert_eq!(cli.table, "users");
        assert_eq!(cli.column, "password");
        assert_eq!(cli.max_length, 100);
        assert_eq!(cli.failure_marker, "Invalid username");
        assert_eq!(cli.success_marker, "Hello, admin!");
        assert!(!cli.no_fallback);
        assert_eq!(cli.rate, 0);
        assert_eq!(cli.format, "text");
    }

    #[test]
    fn test_marker_flags_share_heading() {
        let cmd = Cli::command();
        for id in ["failure_marker", "success_marker"] {
            let arg = cmd.get_arguments().find(|a| a.get_id() == id).unwrap();
            assert_eq!(arg.get_help_heading(), Some("MATCHING"));
        }
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "blindpass",
            "-t",
            "http://127.0.0.1:8080/login",
            "-u",
            "root",
            "--max-length",
            "32",
            "--no-fallback",
            "--format",
            "json",
            "-o",
            "out.json",
        ])
        .unwrap();

        assert_eq!(cli.target, "http://127.0.0.1:8080/login");
        assert_eq!(cli.username, "root");
        assert_eq!(cli.max_length, 32);
        assert!(cli.no_fallback);
        assert_eq!(cli.output.as_deref(), Some("out.json"));
    }
}
