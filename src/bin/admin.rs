//! CLI administration tool for minipress.
//!
//! Provides commands for managing author accounts and their sessions,
//! viewing content statistics, and performing database operations without
//! going through the web interface.
//!
//! # Usage
//!
//! ```bash
//! # Create an author account
//! cargo run --bin admin -- user create --username alice
//!
//! # List authors
//! cargo run --bin admin -- user list
//!
//! # Issue a session token for an author
//! cargo run --bin admin -- session issue alice
//!
//! # Revoke a session token
//! cargo run --bin admin -- session revoke <token>
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `SESSION_SIGNING_SECRET` (required for session commands): HMAC secret,
//!   must match the server's
//!
//! # Features
//!
//! - **Account Management**: Create and list author accounts
//! - **Session Management**: Issue and revoke login tokens
//! - **Statistics**: Post, comment, and account counts
//! - **Interactive Prompts**: Confirmation dialogs via `dialoguer`
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use minipress::application::services::AuthService;
use minipress::domain::repositories::UserRepository;
use minipress::infrastructure::persistence::{PgSessionRepository, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing minipress.
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
    /// Manage author accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage login sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new author account
    Create {
        /// Account username
        #[arg(short, long)]
        username: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all accounts
    List,
}

/// Session management subcommands.
#[derive(Subcommand)]
enum SessionAction {
    /// Issue a session token for an author
    Issue {
        /// Username of the account
        username: String,
    },

    /// Revoke a session token
    Revoke {
        /// The raw session token to revoke
        token: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Session { action } => handle_session_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches account management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create { username, yes } => {
            create_user(repo, username, yes).await?;
        }
        UserAction::List => {
            list_users(repo).await?;
        }
    }

    Ok(())
}

/// Creates a new author account with interactive prompts.
async fn create_user(
    repo: Arc<PgUserRepository>,
    username: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create Author Account".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    if repo
        .find_by_username(&username)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .is_some()
    {
        println!("{}", "⚠️  An account with this username already exists".yellow());
        return Ok(());
    }

    println!("  Username: {}", username.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this account?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = repo
        .create(&username)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

    println!();
    println!("{}", "✅ Account created successfully!".green().bold());
    println!("  ID: {}", user.id.to_string().bright_black());
    println!();
    println!(
        "  Issue a login token with: {} admin session issue {}",
        "cargo run --bin".bright_cyan(),
        username
    );
    println!();

    Ok(())
}

/// Lists all author accounts.
async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 Author Accounts".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No accounts found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {:<20}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(57).bright_black());

    for user in &users {
        println!(
            "  {:<5} {:<30} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Dispatches session management commands.
async fn handle_session_action(action: SessionAction, pool: &PgPool) -> Result<()> {
    let signing_secret =
        std::env::var("SESSION_SIGNING_SECRET").context("SESSION_SIGNING_SECRET must be set")?;

    let session_repo = Arc::new(PgSessionRepository::new(Arc::new(pool.clone())));
    let auth = AuthService::new(session_repo, signing_secret);

    match action {
        SessionAction::Issue { username } => {
            let user_repo = PgUserRepository::new(Arc::new(pool.clone()));
            issue_session(&auth, &user_repo, &username).await?;
        }
        SessionAction::Revoke { token } => {
            revoke_session(&auth, &token).await?;
        }
    }

    Ok(())
}

/// Issues a session token for an author.
///
/// # Security
///
/// - Only the HMAC-SHA256 hash of the token is stored
/// - The raw token is displayed once and cannot be retrieved later
async fn issue_session(
    auth: &AuthService<PgSessionRepository>,
    users: &PgUserRepository,
    username: &str,
) -> Result<()> {
    println!("{}", "🔑 Issue Session Token".bright_blue().bold());
    println!();

    let user = users
        .find_by_username(username)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Account not found")?;

    let token = auth
        .issue_session(user.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to issue session: {}", e))?;

    println!("  Account: {}", user.username.cyan());
    println!("  Token:   {}", token.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();
    println!("{}", "Log in by pasting it on the /login page.".bright_white());
    println!();

    Ok(())
}

/// Revokes a session token with a confirmation prompt.
async fn revoke_session(auth: &AuthService<PgSessionRepository>, token: &str) -> Result<()> {
    println!("{}", "🔒 Revoke Session Token".bright_blue().bold());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this session?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let revoked = auth
        .revoke_session(token)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke session: {}", e))?;

    println!();
    if revoked {
        println!("{}", "✅ Session revoked successfully!".green().bold());
    } else {
        println!("{}", "⚠️  No live session matches this token".yellow());
    }
    println!();

    Ok(())
}

/// Displays content statistics.
///
/// Shows:
/// - Published and draft post counts
/// - Comment counts by moderation status
/// - Number of author accounts
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let published: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE status = 'published'")
            .fetch_one(pool)
            .await?;

    let drafts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE status = 'draft'")
        .fetch_one(pool)
        .await?;

    let pending_comments: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE status = 'unchecked'")
            .fetch_one(pool)
            .await?;

    let accepted_comments: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE status = 'accepted'")
            .fetch_one(pool)
            .await?;

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    println!(
        "  Published posts:   {}",
        published.to_string().bright_green().bold()
    );
    println!(
        "  Draft posts:       {}",
        drafts.to_string().bright_green().bold()
    );
    println!(
        "  Pending comments:  {}",
        pending_comments.to_string().bright_green().bold()
    );
    println!(
        "  Accepted comments: {}",
        accepted_comments.to_string().bright_green().bold()
    );
    println!(
        "  Authors:           {}",
        users_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
