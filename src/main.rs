use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use arena_agent::adapters::outbound::UdpArenaClient;
use arena_agent::application::CombatService;
use arena_agent::domains::arena::{ArenaClient, DynArenaClient};
use arena_agent::Config;

#[derive(Parser, Debug)]
#[command(name = "arena-agent", about = "Autonomous agent for the arena combat server")]
struct Cli {
    /// IP address to bind the agent socket to
    #[arg(long)]
    ip: Option<String>,

    /// Port to bind the agent socket to
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Arena server IP address
    #[arg(long)]
    server_ip: Option<String>,

    /// Arena server port
    #[arg(long)]
    server_port: Option<u16>,

    /// Configuration file; command line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print debug level log messages (includes --verbose)
    #[arg(long)]
    debug: bool,

    /// Print verbose log messages
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn apply_to(&self, config: &mut Config) {
        if let Some(ip) = &self.ip {
            config.agent.ip = ip.clone();
        }
        if let Some(port) = self.port {
            config.agent.port = port;
        }
        if let Some(ip) = &self.server_ip {
            config.server.ip = ip.clone();
        }
        if let Some(port) = self.server_port {
            config.server.port = port;
        }
    }

    fn log_level(&self) -> &'static str {
        if self.debug {
            "arena_agent=trace"
        } else if self.verbose {
            "arena_agent=debug"
        } else {
            "arena_agent=info"
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .init();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::default(),
    };
    cli.apply_to(&mut config);

    info!(name = %config.agent.name, "Starting arena agent");

    let client = UdpArenaClient::bind(&config).await?;
    let client: DynArenaClient = Arc::new(client);

    let conf = match client.join(&config.agent.name).await {
        Ok(conf) => conf,
        Err(e) => {
            error!(
                "Is the arena server running at {}:{}?",
                config.server.ip, config.server.port
            );
            error!(error = %e, stats = %client.stats(), "join failed");
            std::process::exit(1);
        }
    };
    info!(arena_size = conf.arena_size, "Join was successful, ready to play");

    let mut service = CombatService::new(client.clone(), conf);
    tokio::select! {
        _ = service.run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!(stats = %client.stats(), "Quitting");
        }
    }

    Ok(())
}
