use anyhow::Result;
use case_tracker_core::{
    DEFAULT_API_URL, DEFAULT_DATABASE_URL, DEFAULT_MODEL, env_parse_with_default,
};
use case_tracker_llm::{PromptSet, ShapePolicy};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "case-tracker")]
#[command(about = "Case tracking server with AI-assisted case number extraction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short, long, default_value = "8000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print stored cases as JSON
    List {
        #[arg(short, long, default_value = "0")]
        skip: usize,
        #[arg(short, long, default_value = "100")]
        limit: usize,
    },
    /// Mark a case complete
    Complete { id: i64 },
}

pub(crate) fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned())
}

pub(crate) fn get_api_key() -> Result<String> {
    std::env::var("GOOGLE_API_KEY")
        .map_err(|_| anyhow::anyhow!("GOOGLE_API_KEY environment variable must be set"))
}

pub(crate) fn get_base_url() -> String {
    std::env::var("CASE_TRACKER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned())
}

pub(crate) fn get_model() -> String {
    std::env::var("CASE_TRACKER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_owned())
}

pub(crate) fn get_prompts() -> Result<PromptSet> {
    match std::env::var_os("CASE_TRACKER_PROMPT_DIR") {
        Some(dir) => Ok(PromptSet::from_dir(std::path::Path::new(&dir))?),
        None => Ok(PromptSet::builtin()),
    }
}

pub(crate) fn get_shape_policy() -> ShapePolicy {
    ShapePolicy::from_strict(env_parse_with_default("CASE_TRACKER_STRICT_SHAPE", false))
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("warning: failed to load .env: {e}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::List { skip, limit } => commands::cases::run_list(skip, limit).await,
        Commands::Complete { id } => commands::cases::run_complete(id).await,
    }
}
