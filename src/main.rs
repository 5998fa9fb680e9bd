//! text-value: prints the string form and hash code of each stdin line

use std::io;

use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Reading values from stdin");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let count = text_value::cli::run(stdin.lock(), stdout.lock())?;

    tracing::info!("Processed {} values", count);
    Ok(())
}
