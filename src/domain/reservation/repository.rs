//! Reservation repository interface

use async_trait::async_trait;

use super::model::Reservation;
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// All reservations of a customer, in storage order
    async fn for_customer(&self, customer_id: i32) -> DomainResult<Vec<Reservation>>;

    /// Insert a transient reservation (assigning its ID) or update a persisted one
    async fn save(&self, reservation: &mut Reservation) -> DomainResult<()>;
}
