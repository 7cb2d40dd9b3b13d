use a1day1_shared::{Inquiry, ProjectType};
use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli {
    pub mod server;
    pub mod submit;
}

/// a1day1 - A1 Day1 Productions website
#[derive(Parser)]
#[command(name = "a1day1")]
#[command(about = "Marketing site and contact-form relay for A1 Day1 Productions", long_about = None)]
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
    /// Forward a single inquiry through the configured provider
    Submit {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long, value_parser = cli::submit::parse_project_type)]
        project_type: ProjectType,

        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = a1day1::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    a1day1::observability::init_observability(
        "a1day1",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Submit {
            name,
            email,
            phone,
            project_type,
            message,
        } => {
            let inquiry = Inquiry {
                name,
                email,
                phone: phone.filter(|p| !p.is_empty()),
                project_type,
                message,
            };

            cli::submit::submit(config, inquiry).await
        }
    }
}
