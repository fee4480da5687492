use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use groqchat::{ChatSession, DomainError, GroqClient, ModelId, SendMessageUseCase, SessionConfig};

#[derive(Parser)]
#[command(name = "groqchat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Model identifier (see `groqchat models`)
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Groq API key; falls back to the GROQ_API_KEY environment variable
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat session (default)
    Chat,

    /// Send a single prompt and print the reply
    Ask { prompt: String },

    /// List the selectable model identifiers
    Models,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let model = match cli.model.as_deref() {
        Some(raw) => ModelId::parse(raw).ok_or_else(|| {
            DomainError::invalid_input(format!(
                "unknown model '{raw}'; run `groqchat models` for the list"
            ))
        })?,
        None => ModelId::default(),
    };

    let api_key = cli
        .api_key
        .or_else(|| std::env::var("GROQ_API_KEY").ok())
        .unwrap_or_default();

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Models => {
            for m in ModelId::ALL {
                let marker = if m == ModelId::default() { "*" } else { " " };
                println!("{marker} {m}");
            }
        }

        Commands::Ask { prompt } => {
            let session = ChatSession::new(SessionConfig::new(model, api_key));
            let use_case = SendMessageUseCase::new(Arc::new(GroqClient::new()));

            use_case.execute(&session, &prompt).await;

            if let Some(turn) = session.last_turn().await {
                if turn.is_assistant() {
                    println!("{}", turn.content());
                }
            }
        }

        Commands::Chat => {
            let session = Arc::new(ChatSession::new(SessionConfig::new(model, api_key)));
            let use_case = SendMessageUseCase::new(Arc::new(GroqClient::new()));

            groqchat::cli::run(session, use_case).await?;
        }
    }

    Ok(())
}
