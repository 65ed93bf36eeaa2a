use chat_analyzer::config::{self, AppConfig};
use chat_analyzer::llm::OpenAiGateway;
use chat_analyzer::server;
use clap::Parser;
use log::{error, info};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "chat-analyzer")]
#[command(about = "HTTP API that sorts chat participants with LLM-backed personality analyzers")]
struct Args {
    /// interface to bind, overrides HOST
    #[arg(long)]
    host: Option<String>,

    /// port to bind, overrides PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    config::load_dotenv();

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    // a missing credential stops the process here, before anything is served
    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let gateway = OpenAiGateway::new(&config.llm);
    info!("Starting chat analyzer with model {}...", gateway.model());

    server::serve(&config, Arc::new(gateway)).await
}
