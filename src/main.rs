use anyhow::Result;
use clap::Parser;
use shopscroll::app::App;
use shopscroll::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing for logging
    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .init();
    }

    // Create and run the application
    let mut app = App::new(&cli);
    app.run().await?;

    Ok(())
}
