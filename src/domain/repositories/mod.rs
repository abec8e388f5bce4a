//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to the per-aggregate repositories
//! - `SaveAction` — insert-or-update decision for an entity
//! - `DomainResult` — standard result type for domain operations

use super::customer::CustomerRepository;
use super::reservation::ReservationRepository;

pub use crate::shared::errors::DomainResult;

// ── SaveAction ──────────────────────────────────────────────────

/// What `save` does with an entity: a transient entity is inserted,
/// a persisted one has its row updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    Insert,
    Update(i32),
}

impl SaveAction {
    pub fn for_id(id: Option<i32>) -> Self {
        match id {
            Some(id) => Self::Update(id),
            None => Self::Insert,
        }
    }
}

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn show(repos: &dyn RepositoryProvider, id: i32) -> DomainResult<()> {
///     let customer = repos.customers().get(id).await?;
///     let reservations = customer.reservations(repos.reservations()).await?;
///     Ok(())
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn customers(&self) -> &dyn CustomerRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
}
