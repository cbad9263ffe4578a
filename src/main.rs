use anyhow::Result;
use clap::{Parser, Subcommand};
use portfolio_contact::ContactForm;

/// portfolio - personal portfolio site
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Personal portfolio site with a contact form", long_about = None)]
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
    /// Send a contact message from the terminal
    Contact {
        /// Your name
        #[arg(long)]
        name: String,

        /// Your email
        #[arg(long)]
        email: String,

        /// Your message
        #[arg(long)]
        message: String,

        /// Site origin receiving `/api/contact` (defaults to the configured one)
        #[arg(long)]
        origin: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = portfolio::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    portfolio::observability::init_observability(
        "portfolio",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Serve { host, port } => portfolio::cli::server::serve(config, host, port).await,
        Commands::Contact {
            name,
            email,
            message,
            origin,
        } => {
            let origin = origin.unwrap_or_else(|| config.contact_origin());

            portfolio::cli::contact::submit(&origin, ContactForm::new(name, email, message)).await
        }
    }
}
