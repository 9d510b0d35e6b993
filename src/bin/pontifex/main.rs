//! pontifex: Solitaire cipher command-line tool
//!
//! Commands:
//!   encrypt [TEXT]      - encrypt text, printing five-letter groups
//!   decrypt [TEXT]      - decrypt five-letter groups
//!   keystream           - print the first N keystream letters for a key
//!   deck                - print the deck right after keying
//!   trace <DIRECTION>   - replay every deck move of a run, step by step
//!   config show         - print the active configuration
//!
//! Missing key or text fall back to the last values used (field store),
//! then to the `[defaults]` section of the configuration. There is no default
//! ciphertext: decrypting with nothing given or remembered is an error.

mod fields;
mod replay;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use pontifex::config::{LogFormat, PontifexConfig};
use pontifex::utils::text::group;
use pontifex::{Direction, Pontifex};

use fields::{Field, FieldStore};

// ── CLI structure ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "pontifex",
    version,
    about = "Solitaire playing-card cipher",
    long_about = "pontifex: encrypt and decrypt with Bruce Schneier's Solitaire cipher, \
                  and watch the deck shuffle step by step"
)]
struct Cli {
    /// Path to pontifex.toml configuration file
    #[arg(long, short = 'c', env = "PONTIFEX_CONFIG", default_value = "pontifex.toml")]
    config: PathBuf,

    /// Do not read or update the remembered key and text
    #[arg(long, global = true)]
    forget: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encrypt text (non-letters are dropped, output is padded with X)
    Encrypt {
        /// Plaintext (default: last plaintext, then config default)
        text: Option<String>,
        #[command(flatten)]
        key: KeyArg,
    },

    /// Decrypt text (padding added at encryption is kept)
    Decrypt {
        /// Ciphertext (default: last ciphertext)
        text: Option<String>,
        #[command(flatten)]
        key: KeyArg,
    },

    /// Print keystream letters
    Keystream {
        #[command(flatten)]
        key: KeyArg,
        /// Number of letters to print
        #[arg(long, short = 'n', default_value_t = 15)]
        length: usize,
    },

    /// Print the deck after keying
    Deck {
        #[command(flatten)]
        key: KeyArg,
    },

    /// Replay every move of an encryption or decryption
    Trace {
        direction: TraceDirection,
        /// Input text (same defaults as encrypt/decrypt)
        text: Option<String>,
        #[command(flatten)]
        key: KeyArg,
        /// Pause between steps in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Print only the step descriptions, not the deck
        #[arg(long)]
        steps_only: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args, Debug)]
struct KeyArg {
    /// Passphrase; only its letters are used (default: last key, then config default)
    #[arg(long, short = 'k')]
    key: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TraceDirection {
    Encrypt,
    Decrypt,
}

impl From<TraceDirection> for Direction {
    fn from(direction: TraceDirection) -> Self {
        match direction {
            TraceDirection::Encrypt => Direction::Encrypt,
            TraceDirection::Decrypt => Direction::Decrypt,
        }
    }
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the active configuration (merged defaults + config file)
    Show,
}

// ── Entry point ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = PontifexConfig::load(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    init_logging(&config.log.level, &config.log.format);

    let store_path = config.fields.path.clone().unwrap_or_else(fields::default_path);
    let mut store = FieldStore::open(store_path, config.fields.remember && !cli.forget)?;
    tracing::debug!(path = %store.path().display(), "field store");

    match cli.command {
        Commands::Encrypt { text, key } => cmd_crypt(&config, &mut store, Direction::Encrypt, text, key),
        Commands::Decrypt { text, key } => cmd_crypt(&config, &mut store, Direction::Decrypt, text, key),
        Commands::Keystream { key, length } => {
            let key = resolve_key(&config, &store, key);
            println!("{}", group(&Pontifex::new(&key).keystream(length)));
            Ok(())
        }
        Commands::Deck { key } => {
            let key = resolve_key(&config, &store, key);
            println!("{}", Pontifex::new(&key).keyed_deck());
            Ok(())
        }
        Commands::Trace {
            direction,
            text,
            key,
            delay_ms,
            steps_only,
        } => {
            let direction = Direction::from(direction);
            let key = resolve_key(&config, &store, key);
            let text = resolve_text(&config, &store, direction, text)?;
            let (output, events) = match direction {
                Direction::Encrypt => pontifex::encrypt_traced(&text, &key),
                Direction::Decrypt => pontifex::decrypt_traced(&text, &key),
            };
            let delay = Duration::from_millis(delay_ms.unwrap_or(config.replay.delay_ms));
            replay::replay(&events, delay, steps_only, &mut io::stdout().lock())
                .context("writing replay")?;
            println!("{}", output);
            Ok(())
        }
        Commands::Config {
            action: ConfigAction::Show,
        } => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn cmd_crypt(
    config: &PontifexConfig,
    store: &mut FieldStore,
    direction: Direction,
    text: Option<String>,
    key: KeyArg,
) -> Result<()> {
    let key = resolve_key(config, store, key);
    let text = resolve_text(config, store, direction, text)?;

    let mut cipher = Pontifex::new(&key);
    let output = cipher.transform(direction, &text);
    tracing::info!(
        ?direction,
        keying_steps = cipher.keying_steps(),
        rounds = cipher.rounds(),
        skipped = cipher.skips(),
        "done"
    );
    println!("{}", output);

    let (input_field, output_field) = match direction {
        Direction::Encrypt => (Field::Plaintext, Field::Ciphertext),
        Direction::Decrypt => (Field::Ciphertext, Field::Plaintext),
    };
    store.set(Field::Key, &key);
    store.set(input_field, &text);
    store.set(output_field, &output);
    store.save()
}

fn resolve_key(config: &PontifexConfig, store: &FieldStore, arg: KeyArg) -> String {
    arg.key
        .or_else(|| store.get(Field::Key))
        .unwrap_or_else(|| config.defaults.key.clone())
}

/// Encryption falls back to the remembered plaintext, then the configured
/// default text. Decryption falls back to the remembered ciphertext only.
fn resolve_text(
    config: &PontifexConfig,
    store: &FieldStore,
    direction: Direction,
    arg: Option<String>,
) -> Result<String> {
    match direction {
        Direction::Encrypt => Ok(arg
            .or_else(|| store.get(Field::Plaintext))
            .unwrap_or_else(|| config.defaults.text.clone())),
        Direction::Decrypt => arg
            .or_else(|| store.get(Field::Ciphertext))
            .ok_or_else(|| anyhow!("no ciphertext given and none remembered")),
    }
}

fn init_logging(level: &str, format: &LogFormat) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(io::stderr))
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .init();
        }
    }
}
