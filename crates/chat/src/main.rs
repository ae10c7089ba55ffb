//! Terminal chat for the complaint assistant.

mod input;
mod render;

use std::io::Write;
use std::path::PathBuf;

use agent::{AgentConfig, AgentError, ChatSession, ComplaintAgent};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::input::Input;
use crate::render::{render_history, render_reply};

#[derive(Debug, Parser)]
#[command(name = "complaint-chat")]
#[command(about = "Chat with the complaint assistant: file complaints, look them up, ask questions")]
struct Args {
    /// Complaint API base URL
    #[arg(long, env = "COMPLAINT_API_URL")]
    api_url: Option<String>,

    /// Knowledge-base document
    #[arg(long, env = "KB_PATH")]
    kb_path: Option<PathBuf>,

    /// Model name
    #[arg(long, env = "LLM_MODEL")]
    model: Option<String>,

    /// Show the model's <think> sections
    #[arg(long, env = "SHOW_THOUGHTS")]
    show_thoughts: bool,
}

async fn build_agent(args: &Args) -> Result<ComplaintAgent, AgentError> {
    let mut config = AgentConfig::from_env()?;

    if let Some(url) = &args.api_url {
        config.api_url = url.clone();
    }
    if let Some(path) = &args.kb_path {
        config.kb_path = path.clone();
    }
    if let Some(model) = &args.model {
        config.llm.model = model.clone();
    }

    info!(
        provider = %config.llm.provider,
        model = %config.llm.model,
        api_url = %config.api_url,
        kb = %config.kb_path.display(),
        "Building agent"
    );
    ComplaintAgent::build(config).await
}

fn print_flush(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", text)?;
    stdout.flush()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let agent = match build_agent(&args).await {
        Ok(agent) => agent,
        Err(e) => {
            eprintln!("Agent initialization failed: {}", e);
            std::process::exit(1);
        }
    };

    if !agent.is_ready().await {
        warn!("Model server is not answering; turns will fail until it is up");
    }

    println!("🧾 Complaint Chatbot Assistant");
    println!("I can answer customer service questions, file complaints, and retrieve complaints using their ID.");
    println!("Commands: /history, /reset, /quit\n");

    let mut session = ChatSession::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print_flush("You: ")?;
        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        match Input::parse(&line) {
            Input::Empty => continue,
            Input::History => println!("{}\n", render_history(&session, args.show_thoughts)),
            Input::Reset => {
                session = ChatSession::new();
                info!("Session reset");
                println!("Started a new conversation.\n");
            }
            Input::Quit => break,
            Input::UnknownCommand(cmd) => {
                println!("Unknown command {}. Try /history, /reset or /quit.\n", cmd)
            }
            Input::Message(text) => {
                print_flush("Thinking...")?;
                let result = agent.run(&mut session, &text).await;
                print_flush("\r\x1b[K")?;

                match result {
                    Ok(reply) => println!("{}\n", render_reply(&reply, args.show_thoughts)),
                    Err(e) => {
                        error!("Turn failed: {}", e);
                        println!("⚠️ {}\n", e);
                    }
                }
            }
        }
    }

    Ok(())
}
