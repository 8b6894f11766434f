//! Sequence collection CLI
//!
//! Drives the sync gateway against a live collection server: list the remote
//! collection, create sequences, delete them with confirmation.
//!
//! Usage:
//!   seq-cli --base-url https://api.example.com list

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use seqsync::{
    Color, Command, ConfirmDestructive, NotificationSink, Notice, SequenceClient, SequenceStore,
    SyncGateway,
};

#[derive(Parser)]
#[command(
    name = "seq-cli",
    about = "Edit and sync step sequences against a remote collection",
    version
)]
struct Args {
    /// Backend API base URL
    #[arg(short = 'b', long, env = "SEQSYNC_BASE_URL")]
    base_url: String,

    /// Auth token (or set SEQSYNC_TOKEN env var)
    #[arg(short = 't', long, env = "SEQSYNC_TOKEN")]
    token: Option<String>,

    /// Read auth token from file
    #[arg(long)]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// List the remote collection
    List,
    /// Create and persist a new sequence
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Label color
        #[arg(short, long, default_value = "gray")]
        color: String,
    },
    /// Delete the sequence at the given position in the fetched collection
    Delete {
        index: usize,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn notify(&self, notice: Notice, message: &str) {
        match notice {
            Notice::Success => println!("OK: {message}"),
            Notice::Error => eprintln!("ERROR: {message}"),
        }
    }
}

enum CliConfirm {
    Prompt,
    AssumeYes,
}

impl ConfirmDestructive for CliConfirm {
    fn confirm(&self, message: &str) -> bool {
        match self {
            CliConfirm::AssumeYes => true,
            CliConfirm::Prompt => {
                print!("{message} [y/N] ");
                if io::stdout().flush().is_err() {
                    return false;
                }
                let mut line = String::new();
                if io::stdin().read_line(&mut line).is_err() {
                    return false;
                }
                matches!(line.trim(), "y" | "Y" | "yes")
            }
        }
    }
}

fn parse_color(value: &str) -> anyhow::Result<Color> {
    match value.to_ascii_lowercase().as_str() {
        "gray" => Ok(Color::Gray),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "blue" => Ok(Color::Blue),
        "yellow" => Ok(Color::Yellow),
        "orange" => Ok(Color::Orange),
        "purple" => Ok(Color::Purple),
        "pink" => Ok(Color::Pink),
        other => anyhow::bail!("unknown color '{}'", other),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Resolve token
    let token = if let Some(token_file) = &args.token_file {
        Some(std::fs::read_to_string(token_file)?.trim().to_string())
    } else {
        args.token.clone()
    };

    let client = SequenceClient::with_token(&args.base_url, token.as_deref())?;
    let confirm = match &args.command {
        Cmd::Delete { yes: true, .. } => CliConfirm::AssumeYes,
        _ => CliConfirm::Prompt,
    };
    let gateway = SyncGateway::new(client, ConsoleNotifier, confirm);
    let mut store = SequenceStore::new();

    match args.command {
        Cmd::List => {
            gateway.fetch_all(&mut store).await?;
            println!("Found {} sequences", store.len());
            for (i, seq) in store.all().iter().enumerate() {
                let id = seq
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  [{i}] #{id:<6} {:<8} {} ({} steps)",
                    format!("{:?}", seq.color).to_lowercase(),
                    seq.name,
                    seq.body.len()
                );
            }
        }
        Cmd::Create { name, color } => {
            let color = parse_color(&color)?;
            store.apply(Command::Add)?;
            store.apply(Command::Edit {
                name: Some(name),
                color: Some(color),
            })?;
            let index = store.current_index().context("no sequence selected")?;
            gateway.save(&mut store, index).await?;
            if let Some(id) = store.get(index).and_then(|seq| seq.id) {
                println!("Created sequence #{id}");
            }
        }
        Cmd::Delete { index, .. } => {
            gateway.fetch_all(&mut store).await?;
            if index >= store.len() {
                anyhow::bail!(
                    "no sequence at index {} (collection has {})",
                    index,
                    store.len()
                );
            }
            gateway.delete(&mut store, index).await?;
        }
    }

    Ok(())
}
