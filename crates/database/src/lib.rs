//! SQLite persistence layer for customer complaints.
//!
//! This crate owns the single `complaints` table and the operations on it:
//! creating a complaint (with id generation and input trimming) and reading
//! one back by id. Records are never updated or deleted.
//!
//! # Example
//!
//! ```no_run
//! use database::{complaint, Database, NewComplaint};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:complaints.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     let receipt = complaint::create_complaint(
//!         db.pool(),
//!         &NewComplaint::new("Deepak", "9876543210", "deepak@example.com", "Order delayed"),
//!     )
//!     .await?;
//!
//!     let stored = complaint::get_complaint(db.pool(), &receipt.complaint_id).await?;
//!     assert!(stored.is_some());
//!     Ok(())
//! }
//! ```

pub mod complaint;
pub mod error;
pub mod models;
pub mod validation;

pub use error::{DatabaseError, Result};
pub use models::{Complaint, ComplaintReceipt, NewComplaint};
pub use validation::{FieldViolation, ValidationError};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    ///
    /// Every operation is a single statement, so a handful of connections is
    /// plenty for the request rate a complaint desk sees.
    pub const DEFAULT_POOL_SIZE: u32 = 5;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:complaints.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing, keep a single connection)
    /// let db = database::Database::connect_with_pool_size("sqlite::memory:", 1).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size.max(1))
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// Creates the `complaints` table if it does not exist yet. Safe to call
    /// on every startup.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
