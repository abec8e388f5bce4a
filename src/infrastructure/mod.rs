//! Infrastructure layer - external concerns

pub mod database;

pub use database::{
    close_database, create_schema, init_database, DatabaseConfig, SeaOrmRepositoryProvider,
};
