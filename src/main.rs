use blindpass::cli::args::Cli;
use blindpass::core::context::Context;
use blindpass::core::engine::Engine;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const BANNER: &str = r#"
 ╔════════════════════════════════════════════════════════════╗
 ║                                                            ║
 ║    BLINDPASS                                               ║
 ║    Complete admin password extractor                       ║
 ║    Boolean-based blind SQL injection                       ║
 ║                                                            ║
 ╚════════════════════════════════════════════════════════════╝
"#;

fn print_banner() {
    println!("\x1b[36m{}\x1b[0m", BANNER); // Cyan color
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !cli.no_banner && !cli.quiet {
        print_banner();
    }

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let ctx = Context::from_cli(cli)?;
    let engine = Engine::new(ctx)?;
    engine.run().await?;

    Ok(())
}
