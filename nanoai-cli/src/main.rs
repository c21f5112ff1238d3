use anyhow::Result;
use clap::{Parser, Subcommand};
use nanoai_client::config::DEFAULT_BASE_URL;

mod commands;

#[derive(Parser)]
#[command(name = "nanoai")]
#[command(about = "Console for the NanoAI captcha-solving API", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Fix API base URL
    #[arg(long, env = "NANOAI_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Bearer token (the public demo token is used when omitted)
    #[arg(long, env = "NANOAI_API_TOKEN")]
    token: Option<String>,

    /// Logging level
    #[arg(long, env = "NANOAI_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show details for the current token
    TokenInfo,

    /// Show the remaining account balance
    Balance,

    /// Show solve-token availability
    TokenAval,

    /// Submit a captcha task for solving
    Solve {
        /// Task JSON file (use '-' for stdin)
        #[arg(short, long, default_value = "-")]
        input: String,
    },

    /// Probe the API connection
    Test,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(&cli.log_level)
        .init();

    let client = commands::build_client(&cli.api_url, cli.token.as_deref())?;

    match cli.command {
        Commands::TokenInfo => commands::token_info::execute(&client).await?,
        Commands::Balance => commands::balance::execute(&client).await?,
        Commands::TokenAval => commands::token_aval::execute(&client).await?,
        Commands::Solve { input } => commands::solve::execute(&client, &input).await?,
        Commands::Test => commands::test::execute(&client).await?,
    }

    Ok(())
}
