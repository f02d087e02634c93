use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use goo_anki::{AnkiConnectClient, CardTemplate};
use goo_config::Config;
use goo_config::anki::AnkiConfig;
use goo_core::extract_terms;
use goo_dictionary::GooDictionary;
use goo_types::ExtractionMode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod session;

use self::session::{EntryChooser, FirstEntry, LookupSession, PromptChooser};

const DEFAULT_CONFIG: &str = "config.json";

#[derive(Parser)]
#[command(name = "goo-jisho")]
#[command(about = "Look Japanese words up in goo辞書")]
struct Cli {
    /// JSON config file (default: ./config.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every entry found for a word
    Lookup {
        word: String,
        /// Fetch full definitions for truncated entries
        #[arg(long)]
        full: bool,
    },
    /// Pull terms out of note-field text and render their definitions as HTML
    Define {
        /// Field content, e.g. "{{c1::食べる}}"
        text: String,
        /// Extraction mode: single, bold, cloze, cloze-hint, ignore-cloze
        #[arg(long, conflicts_with = "note_type")]
        mode: Option<ExtractionMode>,
        /// Take the extraction mode from this note type's config entry
        #[arg(long)]
        note_type: Option<String>,
        /// Take the first entry instead of asking when a term has several
        #[arg(long)]
        first: bool,
        /// Also add a note with the text and rendered definitions through AnkiConnect
        #[arg(long)]
        anki: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let dictionary = GooDictionary::from_config(&config.network)?;

    let result = match cli.command {
        Commands::Lookup { word, full } => lookup(&dictionary, &word, full),
        Commands::Define {
            text,
            mode,
            note_type,
            first,
            anki,
        } => {
            let mode = match note_type {
                Some(name) => note_type_mode(&config, &name)?,
                None => mode.unwrap_or_default(),
            };
            define(&dictionary, &config, &text, mode, first, anki)
        }
    };

    if let Err(e) = &result {
        tracing::error!("{:#}", e);
    }
    result
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path).with_context(|| format!("Failed to load {}", path.display())),
        None if Path::new(DEFAULT_CONFIG).exists() => {
            Config::load(Path::new(DEFAULT_CONFIG)).context("Failed to load config.json")
        }
        None => Ok(Config::new()),
    }
}

fn note_type_mode(config: &Config, name: &str) -> Result<ExtractionMode> {
    let binding = config
        .note_types_for(name)
        .into_iter()
        .next()
        .with_context(|| format!("Note type '{}' is not configured", name))?;
    binding.validate()?;
    Ok(binding.mode)
}

fn lookup(dictionary: &GooDictionary, word: &str, full: bool) -> Result<()> {
    for entry in dictionary.search(word)? {
        let definition = if full {
            dictionary.full_definition(&entry)?
        } else {
            entry.short_definition().to_string()
        };
        println!("{}: {}", entry.word(), definition.trim_end());
    }
    Ok(())
}

fn define(
    dictionary: &GooDictionary,
    config: &Config,
    text: &str,
    mode: ExtractionMode,
    first: bool,
    anki: bool,
) -> Result<()> {
    let terms = extract_terms(mode, text);
    if terms.is_empty() {
        tracing::warn!("Nothing to look up in '{}' with mode '{}'", text, mode.as_str());
        return Ok(());
    }

    let mut chooser: Box<dyn EntryChooser> = if first || !io::stdin().is_terminal() {
        Box::new(FirstEntry)
    } else {
        Box::new(PromptChooser::new(io::stdin().lock(), io::stderr()))
    };

    let mut session = LookupSession::new(dictionary);
    for term in &terms {
        session.look_up(term, chooser.as_mut())?;
    }
    let html = session.render()?;
    println!("{html}");

    if !anki {
        return Ok(());
    }
    if let Some(client) = anki_client(&config.anki) {
        let version = client
            .check_connection()
            .context("AnkiConnect is not reachable")?;
        tracing::debug!("AnkiConnect version {}", version);

        let template = CardTemplate::new(config.anki.deck.clone(), config.anki.model.clone());
        goo_anki::add_card(&client, &template, text, &html)?;
    }

    Ok(())
}

fn anki_client(config: &AnkiConfig) -> Option<AnkiConnectClient> {
    if !config.enabled {
        tracing::warn!("Anki integration is disabled in the config, not adding a note");
        return None;
    }
    Some(AnkiConnectClient::new(config.url.clone()))
}
