//! Customer repository interface

use async_trait::async_trait;

use super::model::Customer;
use crate::domain::DomainResult;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All customers, ordered by last name then first name
    async fn all(&self) -> DomainResult<Vec<Customer>>;

    /// Find customer by ID, failing with `NotFound` when there is none
    async fn get(&self, id: i32) -> DomainResult<Customer>;

    /// Customers whose "first last" name contains `name`, ignoring case
    async fn search_by_name(&self, name: &str) -> DomainResult<Vec<Customer>>;

    /// Top 10 customers by reservation count, with the count filled in
    async fn best_customers(&self) -> DomainResult<Vec<Customer>>;

    /// Insert a transient customer (assigning its ID) or update a persisted one
    async fn save(&self, customer: &mut Customer) -> DomainResult<()>;
}
