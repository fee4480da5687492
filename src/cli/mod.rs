//! Interactive chat REPL: the terminal stand-in for the chat window and its
//! settings sidebar. Reads lines from stdin, routes slash commands to the
//! session's settings surface, and submits everything else as chat text.

use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::{ChatSession, SendMessageUseCase};
use crate::domain::ModelId;

/// One line of user input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    /// Plain chat text to submit.
    Message(String),
    /// `/models` — list the selectable model identifiers.
    ListModels,
    /// `/model <id>` — switch the session model.
    SetModel(String),
    /// `/key <secret>` — set the API credential.
    SetKey(String),
    /// `/help`
    Help,
    /// `/quit` or `/exit`
    Quit,
    /// Whitespace-only line; ignored without any state change.
    Empty,
    /// Unrecognized slash command.
    Unknown(String),
}

/// Classify one line of input. Lines starting with `/` are commands;
/// anything else is chat text.
pub fn parse_input(line: &str) -> ReplInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ReplInput::Empty;
    }

    let Some(rest) = trimmed.strip_prefix('/') else {
        return ReplInput::Message(trimmed.to_string());
    };

    let (command, arg) = match rest.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (rest, ""),
    };

    match command {
        "models" => ReplInput::ListModels,
        "model" => ReplInput::SetModel(arg.to_string()),
        "key" => ReplInput::SetKey(arg.to_string()),
        "help" => ReplInput::Help,
        "quit" | "exit" => ReplInput::Quit,
        other => ReplInput::Unknown(other.to_string()),
    }
}

/// Run the interactive session until `/quit` or EOF.
pub async fn run(session: Arc<ChatSession>, use_case: SendMessageUseCase) -> Result<()> {
    print_banner(&session).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_input(&line) {
            ReplInput::Quit => break,
            ReplInput::Empty => {}
            ReplInput::Help => print_help(),
            ReplInput::ListModels => print_models(session.config().await.model()),
            ReplInput::SetModel(raw) => match ModelId::parse(&raw) {
                Some(model) => {
                    session.set_model(model).await;
                    println!("Model set to {model}");
                }
                None => {
                    println!("Unknown model '{raw}'. Use /models to list the available identifiers.");
                }
            },
            ReplInput::SetKey(key) => {
                if key.is_empty() {
                    println!("Usage: /key <secret>");
                } else {
                    session.set_api_key(key).await;
                    println!("API key updated.");
                }
            }
            ReplInput::Unknown(command) => {
                println!("Unknown command '/{command}'. Type /help for commands.");
            }
            ReplInput::Message(text) => submit_and_render(&session, &use_case, &text).await,
        }
    }

    Ok(())
}

/// Submit one message and render whatever the exchange appended.
///
/// The user turn is committed before the network call returns, so the
/// spinner covers only the window where the assistant turn is pending.
async fn submit_and_render(session: &ChatSession, use_case: &SendMessageUseCase, text: &str) {
    let rendered = session.turn_count().await;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("Invalid spinner template"),
    );
    spinner.set_message("Thinking...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    use_case.execute(session, text).await;

    spinner.finish_and_clear();

    for turn in session.snapshot().await.into_iter().skip(rendered) {
        if turn.is_assistant() {
            println!("bot> {}", turn.content());
        }
    }
}

async fn print_banner(session: &ChatSession) {
    let config = session.config().await;
    println!("groqchat — chatting with {}", config.model());
    if !config.has_api_key() {
        println!("No API key set. Use /key <secret> or the GROQ_API_KEY environment variable.");
    }
    println!("Type /help for commands.");
}

fn print_models(current: ModelId) {
    for model in ModelId::ALL {
        let marker = if model == current { "*" } else { " " };
        println!("{marker} {model}");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  /models        list the selectable model identifiers");
    println!("  /model <id>    switch the session model");
    println!("  /key <secret>  set the Groq API key");
    println!("  /help          show this help");
    println!("  /quit          leave the session");
    println!("Anything else is sent as a chat message.");
}
