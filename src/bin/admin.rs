//! CLI administration tool for shortlink.
//!
//! Runs the configured strategy directly, without the HTTP server, and
//! inspects the mapping store and codec key.
//!
//! In `random` mode the store file is locked by whichever process opens it
//! first, so store commands fail while the server is running. Use the
//! server's `POST /encode` then.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL with the configured algorithm
//! cargo run --bin shortlink-admin -- encode https://example.com
//!
//! # Resolve a code or full short URL
//! cargo run --bin shortlink-admin -- decode aZ3kQ9pL0x
//!
//! # Validate the store file
//! cargo run --bin shortlink-admin -- store check
//!
//! # Compare codec secrets across deployments
//! cargo run --bin shortlink-admin -- key fingerprint
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `shortlink::config`.

use shortlink::application::services::ShortenerService;
use shortlink::config::{self, Config};
use shortlink::domain::errors::ShortenerError;
use shortlink::domain::repositories::MappingRepository;
use shortlink::infrastructure::crypto::KeyedCipher;
use shortlink::infrastructure::persistence::FileMappingStore;
use shortlink::utils::code_generator::RandomCodeGenerator;
use shortlink::utils::short_code::extract_short_code;
use shortlink::utils::url_normalizer::normalize_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "shortlink-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL with the configured algorithm
    Encode {
        /// Absolute http(s) URL
        url: String,
    },

    /// Resolve a short code or short URL
    Decode {
        /// Bare code or full short URL
        code: String,
    },

    /// Mapping store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },

    /// Codec key operations
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
}

#[derive(Subcommand)]
enum StoreAction {
    /// Load the store file and report its state
    Check,
}

#[derive(Subcommand)]
enum KeyAction {
    /// Print a fingerprint of the derived codec key
    Fingerprint,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Encode { url } => handle_encode(&config, &url)?,
        Commands::Decode { code } => handle_decode(&config, &code)?,
        Commands::Store { action } => match action {
            StoreAction::Check => handle_store_check(&config)?,
        },
        Commands::Key { action } => match action {
            KeyAction::Fingerprint => handle_key_fingerprint(&config),
        },
    }

    Ok(())
}

fn open_service(config: &Config) -> Result<ShortenerService> {
    ShortenerService::from_config(config).or_else(|e| {
        if matches!(e, ShortenerError::StoreLocked { .. }) {
            println!(
                "{}",
                "⚠️  The store is locked; is the server running? Use its HTTP API instead."
                    .yellow()
            );
        }
        Err(e).context("Failed to initialize shortener")
    })
}

fn handle_encode(config: &Config, url: &str) -> Result<()> {
    let url = normalize_url(url).context("Invalid URL")?;
    let service = open_service(config)?;

    let code = service.encode(&url).context("Failed to encode URL")?;

    println!("{}", "🔗 Encoded".bright_blue().bold());
    println!();
    println!("  Algorithm: {}", service.algorithm().to_string().cyan());
    println!("  URL:       {}", url);
    println!("  Code:      {}", code.bright_yellow().bold());
    if let Some(ref base_url) = config.base_url {
        println!("  Short URL: {}", format!("{base_url}/{code}").green());
    }
    println!();

    Ok(())
}

fn handle_decode(config: &Config, input: &str) -> Result<()> {
    let code = extract_short_code(input).context("No short code in input")?;
    let service = open_service(config)?;

    match service.decode(&code) {
        Some(url) => {
            println!("{}", "🔍 Decoded".bright_blue().bold());
            println!();
            println!("  Code: {}", code.cyan());
            println!("  URL:  {}", url.green().bold());
            println!();
            Ok(())
        }
        None => {
            println!("{}", format!("❌ Unknown short code: {code}").red());
            anyhow::bail!("short code not found")
        }
    }
}

fn handle_store_check(config: &Config) -> Result<()> {
    println!("{}", "🔍 Checking mapping store...".bright_blue());
    println!("  Path: {}", config.data_path.display().to_string().cyan());

    if !config.algorithm.uses_store() {
        println!(
            "{}",
            format!(
                "  ⚠️  ALGORITHM is '{}'; the server does not use this file",
                config.algorithm
            )
            .yellow()
        );
    }

    if !config.data_path.exists() {
        println!("{}", "  ⚠️  File does not exist yet (empty store)".yellow());
        return Ok(());
    }

    match FileMappingStore::open(&config.data_path, RandomCodeGenerator::default()) {
        Ok(store) => {
            println!();
            println!("{}", "✅ Store OK".green().bold());
            println!("  Mappings: {}", store.count().to_string().bright_white());
            println!();
            Ok(())
        }
        Err(e) => {
            println!();
            println!("{}", "❌ Store is unusable".red().bold());
            println!("  {}", e.to_string().red());
            if e.is_corruption() {
                println!(
                    "{}",
                    "  Restore the file from a backup or move it aside to start empty.".yellow()
                );
            } else if matches!(e, ShortenerError::StoreLocked { .. }) {
                println!("{}", "  Stop the server before checking the store.".yellow());
            }
            Err(e.into())
        }
    }
}

fn handle_key_fingerprint(config: &Config) {
    let cipher = KeyedCipher::new(&config.shortlink_key);

    println!("{}", "🔑 Codec key".bright_blue().bold());
    println!();
    println!("  Fingerprint: {}", cipher.fingerprint().bright_yellow().bold());
    if config.shortlink_key == config::DEFAULT_SHORTLINK_KEY {
        println!(
            "{}",
            "  ⚠️  SHORTLINK_KEY is the built-in default".yellow()
        );
    }
    println!();
}
