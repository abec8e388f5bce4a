//! Customer domain entity

use serde::Serialize;

use crate::domain::reservation::{Reservation, ReservationRepository};
use crate::domain::{DomainResult, SaveAction};

/// Customer of the restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    phone: Option<String>,
    notes: String,
    /// Number of reservations; filled in by `best_customers` only.
    reservation_count: i64,
}

impl Customer {
    /// A new customer that has not been saved yet.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: None,
            notes: String::new(),
            reservation_count: 0,
        }
    }

    /// Rebuild a customer from a stored row.
    pub fn from_row(
        id: i32,
        first_name: String,
        last_name: String,
        phone: Option<String>,
        notes: Option<String>,
    ) -> Self {
        let mut customer = Self::new(first_name, last_name);
        customer.id = Some(id);
        customer.set_phone(phone.as_deref());
        customer.set_notes(notes.as_deref());
        customer
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.set_phone(Some(phone));
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.set_notes(Some(notes));
        self
    }

    pub(crate) fn with_reservation_count(mut self, count: i64) -> Self {
        self.reservation_count = count;
        self
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn save_action(&self) -> SaveAction {
        SaveAction::for_id(self.id)
    }

    pub(crate) fn mark_persisted(&mut self, id: i32) {
        self.id = Some(id);
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Empty input clears the phone number.
    pub fn set_phone(&mut self, phone: Option<&str>) {
        self.phone = phone.filter(|p| !p.is_empty()).map(str::to_owned);
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, notes: Option<&str>) {
        self.notes = notes.unwrap_or_default().to_owned();
    }

    pub fn reservation_count(&self) -> i64 {
        self.reservation_count
    }

    /// All reservations belonging to this customer.
    pub async fn reservations(
        &self,
        reservations: &dyn ReservationRepository,
    ) -> DomainResult<Vec<Reservation>> {
        match self.id {
            Some(id) => reservations.for_customer(id).await,
            None => Ok(Vec::new()),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_customer_is_transient() {
        let c = Customer::new("Jane", "Doe");
        assert_eq!(c.id(), None);
        assert!(!c.is_persisted());
        assert_eq!(c.save_action(), SaveAction::Insert);
        assert_eq!(c.notes(), "");
        assert_eq!(c.phone(), None);
        assert_eq!(c.reservation_count(), 0);
    }

    #[test]
    fn full_name_joins_with_space() {
        let c = Customer::new("Jane", "Doe");
        assert_eq!(c.full_name(), "Jane Doe");
    }

    #[test]
    fn empty_phone_is_absent() {
        let mut c = Customer::new("Jane", "Doe");
        c.set_phone(Some(""));
        assert_eq!(c.phone(), None);
        c.set_phone(Some("555-1234"));
        assert_eq!(c.phone(), Some("555-1234"));
        c.set_phone(None);
        assert_eq!(c.phone(), None);
    }

    #[test]
    fn absent_notes_are_empty() {
        let mut c = Customer::new("Jane", "Doe").with_notes("window seat");
        assert_eq!(c.notes(), "window seat");
        c.set_notes(None);
        assert_eq!(c.notes(), "");
        c.set_notes(Some(""));
        assert_eq!(c.notes(), "");
    }

    #[test]
    fn from_row_normalizes_fields() {
        let c = Customer::from_row(7, "Ann".into(), "Lee".into(), Some(String::new()), None);
        assert_eq!(c.id(), Some(7));
        assert_eq!(c.save_action(), SaveAction::Update(7));
        assert_eq!(c.phone(), None);
        assert_eq!(c.notes(), "");
    }
}
