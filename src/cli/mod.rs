use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "royale-mcp-gateway")]
#[command(about = "Clash Royale MCP Gateway - Admin CLI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Health check a running gateway
    Health {
        /// Gateway URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Validate configuration without starting the service
    Config,
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    run_commands(cli.command).await
}

pub async fn run_commands(command: Commands) -> ExitCode {
    match command {
        Commands::Health { url } => match health_check(&url).await {
            Ok(()) => {
                println!("service is healthy");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("health check failed: {e}");
                ExitCode::FAILURE
            }
        },
        Commands::Config => match crate::infra::config::Config::from_env() {
            Ok(cfg) => {
                println!(
                    "configuration ok (mode={}, port={}, base_url={})",
                    cfg.mode, cfg.port, cfg.base_url
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
    }
}

async fn health_check(url: &str) -> Result<(), String> {
    let http = crate::infra::runtime::limits::make_http_client();
    let resp = http
        .get(format!("{}/healthz", url.trim_end_matches('/')))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.status().is_success() {
        Ok(())
    } else {
        Err(format!("status {}", resp.status()))
    }
}
