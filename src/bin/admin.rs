//! CLI administration tool for seq-shortener.
//!
//! Provides database maintenance and lookups without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply migrations
//! cargo run --bin admin -- db migrate
//!
//! # Mapping count and current sequence value
//! cargo run --bin admin -- stats
//!
//! # Resolve a short id
//! cargo run --bin admin -- lookup 42
//!
//! # Register a URL
//! cargo run --bin admin -- shorten https://example.com
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use seq_shortener::AppError;
use seq_shortener::application::services::ShortenerService;
use seq_shortener::config::Config;
use seq_shortener::server::{build_shortener, connect_pool, migrate};
use seq_shortener::utils::url_validator::is_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing seq-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show mapping count and sequence value
    Stats,

    /// Print the URL stored for a short id
    Lookup {
        /// Short id to resolve
        short_url: i64,
    },

    /// Register a URL (or show its existing short id)
    Shorten {
        /// URL to shorten
        url: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    let shortener = build_shortener(Arc::new(pool.clone()));

    match cli.command {
        Commands::Stats => handle_stats(&shortener).await?,
        Commands::Lookup { short_url } => handle_lookup(&shortener, short_url).await?,
        Commands::Shorten { url } => handle_shorten(&shortener, &url).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Displays mapping statistics.
async fn handle_stats(shortener: &ShortenerService) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let mappings = shortener
        .mapping_count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;
    let sequence = shortener
        .current_sequence()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read sequence: {}", e))?;

    println!(
        "  Mappings:       {}",
        mappings.to_string().bright_green().bold()
    );
    println!(
        "  Sequence value: {}",
        sequence.to_string().bright_green().bold()
    );
    println!(
        "  Abandoned ids:  {}",
        (sequence - mappings).max(0).to_string().bright_black()
    );
    println!();

    Ok(())
}

/// Prints the mapping for a short id.
async fn handle_lookup(shortener: &ShortenerService, short_url: i64) -> Result<()> {
    match shortener.resolve(short_url).await {
        Ok(mapping) => {
            println!(
                "  {} → {}",
                mapping.short_url.to_string().bright_yellow().bold(),
                mapping.original_url.cyan()
            );
            println!(
                "  Created: {}",
                mapping
                    .created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black()
            );
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("❌ No mapping for {}", short_url).red());
        }
        Err(e) => return Err(anyhow::anyhow!("Lookup failed: {}", e)),
    }

    Ok(())
}

/// Registers a URL through the same path as the HTTP API.
async fn handle_shorten(shortener: &ShortenerService, url: &str) -> Result<()> {
    if !is_url(url) {
        println!("{}", "❌ Invalid URL".red());
        return Ok(());
    }

    let mapping = shortener
        .register_or_fetch(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Short URL ready".green().bold());
    println!(
        "  {} → {}",
        mapping.short_url.to_string().bright_yellow().bold(),
        mapping.original_url.cyan()
    );

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1")
                .fetch_one(pool)
                .await
                .context("Database check failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            migrate(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
