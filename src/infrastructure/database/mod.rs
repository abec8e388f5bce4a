pub mod entities;
pub mod repositories;
pub mod schema;

pub use repositories::SeaOrmRepositoryProvider;
pub use schema::create_schema;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

const DEFAULT_URL: &str = "sqlite://./lunchly.db?mode=rwc";

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "postgres://localhost/lunchly" or "sqlite://./lunchly.db?mode=rwc")
    pub url: String,
    /// Upper bound on pooled connections; 1 keeps a single shared connection
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            max_connections: 1,
        }
    }
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// In-memory SQLite database, gone once the connection closes
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }

    /// Create config from `DATABASE_URL`, loading `.env` first
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::new(std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_URL.to_string()))
    }
}

/// Open the shared database connection.
///
/// The connection is established eagerly; callers treat an error here as fatal.
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    info!("Connecting to database: {}", redact_url(&config.url));
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections.max(1))
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}

/// Close the shared connection at shutdown.
pub async fn close_database(db: DatabaseConnection) -> Result<(), DbErr> {
    db.close().await?;
    info!("Database connection closed");
    Ok(())
}

/// Hide the password part of a connection URL before logging it.
fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    match rest.split_once('@') {
        Some((credentials, host)) => {
            let user = credentials.split(':').next().unwrap_or_default();
            format!("{}://{}:***@{}", scheme, user, host)
        }
        None => url.to_string(),
    }
}
