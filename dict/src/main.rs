use clap::Parser;
use commands::{parse_command, Command};
use config::Config;
use dictionary::{Dictionary, DictionaryError};
use render::{print_not_found, print_page, OutputFormat};
use tracing_subscriber::EnvFilter;
use utilities::input;

mod commands;
mod config;
mod render;
mod utilities;

/// Looks up English words and shows their definitions grouped by part of speech.
#[derive(Parser, Debug)]
#[command(name = "dict")]
struct Args {
    /// Words to look up. Starts an interactive prompt when none are given.
    words: Vec<String>,

    /// Print every result as one JSON line.
    #[arg(long)]
    json: bool,

    /// Base url of the dictionary api. Overrides DICTIONARY_API_URL.
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = Config::new().with_overrides(args.api_url, args.json);
    let format = if config.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let dict = Dictionary::with_base_url(&config.api_url)?;
    if args.words.is_empty() {
        return prompt(&dict, format).await;
    }

    let mut failures = 0;
    for word in &args.words {
        if let Err(error) = define_word(&dict, word, format).await {
            tracing::error!(word = %word, "lookup failed: {error:#}");
            failures += 1;
        }
    }
    if failures > 0 {
        anyhow::bail!("{failures} of {} lookups failed", args.words.len());
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn prompt(dict: &Dictionary, format: OutputFormat) -> anyhow::Result<()> {
    while let Some(line) = input(">> ")? {
        match parse_command(&line) {
            Command::Exit => break,
            Command::Empty => {}
            Command::Define(word) => {
                if let Err(error) = define_word(dict, &word, format).await {
                    println!("Encountered an error while searching for {word:?}: {error:#}");
                }
            }
        }
    }
    Ok(())
}

async fn define_word(dict: &Dictionary, word: &str, format: OutputFormat) -> anyhow::Result<()> {
    match dict.lookup(word).await {
        Ok(page) => print_page(&page, format)?,
        Err(DictionaryError::NotFound(not_found)) => print_not_found(word, &not_found, format),
        Err(other) => return Err(other.into()),
    }
    Ok(())
}
