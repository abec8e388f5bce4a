pub mod customer;
pub mod repositories;
pub mod reservation;

// Re-export commonly used types
pub use customer::{Customer, CustomerRepository};
pub use repositories::{DomainResult, RepositoryProvider, SaveAction};
pub use reservation::{Reservation, ReservationRepository};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
