use clap::Parser;
use tick::cli::commands::Cli;
use tick::cli::handlers;

fn main() {
    let cli = Cli::parse();

    if cli.command.is_some() {
        // CLI run: diagnostics go to stderr, filtered by RUST_LOG.
        // The TUI owns the terminal and surfaces errors in a popup instead.
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::ERROR.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
