use chat_analyzer::analysis_result::{AnalysisResponse, ResultShape};
use chat_analyzer::analyzers;
use chat_analyzer::chat_parser;
use chat_analyzer::config::{self, AppConfig};
use chat_analyzer::llm::OpenAiGateway;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "analyze_transcript")]
#[command(about = "Run one analyzer over an exported chat file and print the JSON result")]
struct Args {
    /// exported chat (.txt)
    #[arg(value_name = "FILE", required_unless_present = "list")]
    file: Option<PathBuf>,

    /// analyzer id, see --list
    #[arg(short, long, default_value = "hogwarts")]
    analyzer: String,

    /// result shape (dual or single), overrides RESULT_SHAPE
    #[arg(long)]
    shape: Option<String>,

    /// print the available analyzers and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    config::load_dotenv();
    env_logger::init();

    let args = Args::parse();

    if args.list {
        for analyzer in analyzers::list() {
            println!("{:<10} {} - {}", analyzer.id, analyzer.name, analyzer.description);
        }
        return Ok(());
    }

    let Some(path) = args.file else {
        return Err("FILE is required".into());
    };

    let profile = analyzers::resolve(&args.analyzer)?;

    let config = AppConfig::from_env()?;
    let shape = match args.shape.as_deref() {
        Some(name) => {
            ResultShape::from_name(name).ok_or_else(|| format!("Unknown result shape: {}", name))?
        }
        None => config.result_shape,
    };

    let messages = match chat_parser::load_transcript(&path) {
        Ok(messages) => messages,
        Err(e) => {
            error!("Failed to load {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };
    info!("Loaded {} messages from {}", messages.len(), path.display());

    let gateway = OpenAiGateway::new(&config.llm);
    let transcript = chat_parser::format_for_llm(&messages);

    match profile.analyze(&gateway, shape, &transcript).await {
        Ok(outcome) => {
            let response = AnalysisResponse::success(outcome);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
