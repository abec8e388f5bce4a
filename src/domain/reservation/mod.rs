//! Reservation aggregate
//!
//! Contains the Reservation entity and its repository interface.

pub mod model;
pub mod repository;

pub use model::{parse_start_at, Reservation};
pub use repository::ReservationRepository;
