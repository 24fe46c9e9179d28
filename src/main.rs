use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use brochure::email::SmtpMailer;
use brochure::routes::{AppState, router};

/// brochure - marketing site with a contact-form relay
#[derive(Parser)]
#[command(name = "brochure")]
#[command(about = "Server-rendered marketing site with a contact-form relay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = brochure::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    brochure::observability::init_observability(
        "brochure",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: brochure::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting brochure server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    if !config.email.is_configured() {
        tracing::warn!(
            "SMTP relay is not configured; contact submissions will be rejected with a server error"
        );
    }

    let mailer = Arc::new(SmtpMailer::new(config.email.clone()));
    let app = router(AppState { config, mailer });

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
