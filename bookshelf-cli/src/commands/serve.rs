//! HTTP server command
//!
//! Resolves database settings from flags or environment, builds the store
//! and runs the book API until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf_server::db::{create_pool_with_options, DatabaseConfig, DEFAULT_MAX_CONNECTIONS};
use bookshelf_server::http::server::DEFAULT_TIMEOUT_SECS;
use bookshelf_server::{run_server, BookStore, MemoryBookStore, PgBookStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BOOKSHELF_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Full database URL (overrides the individual --db-* settings)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "127.0.0.1")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = "bookTest_db")]
    pub db_name: String,

    /// Maximum pooled database connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Per-request timeout in seconds
    #[arg(long, env = "BOOKSHELF_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Keep books in process memory instead of Postgres (data is lost on exit)
    #[arg(long)]
    pub memory: bool,
}

impl ServeArgs {
    fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database_url.clone(),
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            name: self.db_name.clone(),
        }
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
            request_timeout: Duration::from_secs(self.timeout),
        }
    }
}

async fn open_store(args: &ServeArgs) -> Result<Arc<dyn BookStore>> {
    if args.memory {
        tracing::warn!("Using in-memory store; books will not survive a restart");
        return Ok(Arc::new(MemoryBookStore::new()));
    }

    let options = args
        .database_config()
        .connect_options()
        .context("Invalid database settings")?;

    let pool = create_pool_with_options(&options, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        host = options.get_host(),
        database = options.get_database().unwrap_or_default(),
        "Connected to database"
    );

    Ok(Arc::new(PgBookStore::new(pool)))
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting bookshelf server on {}", args.bind);

    let store = open_store(&args).await?;

    // Run server (blocks until shutdown)
    run_server(store, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
