//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::customer::CustomerRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::ReservationRepository;

use super::customer_repository::SeaOrmCustomerRepository;
use super::reservation_repository::SeaOrmReservationRepository;

/// Unified repository provider backed by SeaORM.
///
/// Both repositories share the one connection handle.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let customer = repos.customers().get(1).await?;
/// let reservations = customer.reservations(repos.reservations()).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    customers: SeaOrmCustomerRepository,
    reservations: SeaOrmReservationRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            customers: SeaOrmCustomerRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn customers(&self) -> &dyn CustomerRepository {
        &self.customers
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }
}
