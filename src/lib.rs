//! # Lunchly
//!
//! Customers and reservations of a restaurant, stored in a relational
//! database (PostgreSQL or SQLite) through SeaORM.
//!
//! ## Architecture
//!
//! - **domain**: Customer and Reservation entities, their validation rules
//!   and repository traits
//! - **infrastructure**: Database connection, entities and SeaORM repositories
//! - **shared**: Error types
//! - **config** / **telemetry**: Configuration loading and tracing setup
//!
//! ```ignore
//! let db = init_database(&DatabaseConfig::from_env()).await?;
//! let repos = SeaOrmRepositoryProvider::new(db.clone());
//!
//! let mut jane = Customer::new("Jane", "Doe").with_phone("555-1234");
//! repos.customers().save(&mut jane).await?;
//!
//! close_database(db).await?;
//! ```

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;
pub mod telemetry;

pub use config::{default_config_path, AppConfig};

pub use domain::{
    Customer, CustomerRepository, DomainError, DomainResult, RepositoryProvider, Reservation,
    ReservationRepository, SaveAction,
};

// Re-export database types for easy access
pub use infrastructure::{
    close_database, create_schema, init_database, DatabaseConfig, SeaOrmRepositoryProvider,
};
