//! Database entities module

pub mod customer;
pub mod reservation;

pub use customer::Entity as Customer;
pub use reservation::Entity as Reservation;
