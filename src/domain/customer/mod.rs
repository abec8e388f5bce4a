//! Customer aggregate
//!
//! Contains the Customer entity and its repository interface.

pub mod model;
pub mod repository;

pub use model::Customer;
pub use repository::CustomerRepository;
