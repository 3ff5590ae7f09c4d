//! CLI administration tool for starwars-api.
//!
//! # Usage
//!
//! ```bash
//! # Row counts per table
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Create the tables without starting the server
//! cargo run --bin admin -- db init
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): PostgreSQL or SQLite URL, same default as the server

use starwars_api::config::Config;
use starwars_api::infrastructure::persistence::{connect, ping, run_migrations};
use starwars_api::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::AnyPool;
use std::sync::Arc;

/// CLI tool for managing starwars-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show row counts
    Stats,

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

    /// Create missing tables
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let backend = config.backend()?;

    let pool = connect(&config.database_url, 1, config.db_connect_timeout)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => handle_stats(pool).await?,
        Commands::Db { action } => match action {
            DbAction::Check => {
                ping(&pool).await.context("Database check failed")?;
                println!("{}", "Database connection OK".green().bold());
            }
            DbAction::Init => {
                run_migrations(&pool, backend)
                    .await
                    .context("Failed to apply schema migrations")?;
                println!("{}", "Schema is up to date".green().bold());
            }
        },
    }

    Ok(())
}

/// Displays row counts for every table.
async fn handle_stats(pool: AnyPool) -> Result<()> {
    let state = AppState::new(Arc::new(pool));

    let users = state
        .user_service
        .count_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count users: {}", e))?;
    let planets = state
        .planet_service
        .count_planets()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count planets: {}", e))?;
    let characters = state
        .character_service
        .count_characters()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count characters: {}", e))?;
    let favorites = state
        .favorite_service
        .count_favorites()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count favorites: {}", e))?;

    println!("{}", "Statistics".bright_blue().bold());
    println!();

    for (label, count) in [
        ("Users", users),
        ("Planets", planets),
        ("Characters", characters),
        ("Favorites", favorites),
    ] {
        println!(
            "  {:<12} {}",
            label.bright_white(),
            count.to_string().bright_yellow().bold()
        );
    }

    println!();
    Ok(())
}
