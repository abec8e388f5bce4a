//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use tracing::debug;

use super::db_err;
use crate::domain::reservation::{Reservation, ReservationRepository};
use crate::domain::{DomainError, DomainResult, SaveAction};
use crate::infrastructure::database::entities::reservation;

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> Reservation {
    Reservation::from_row(m.id, m.customer_id, m.num_guests, m.start_at, Some(m.notes))
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn for_customer(&self, customer_id: i32) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .filter(reservation::Column::CustomerId.eq(customer_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn save(&self, r: &mut Reservation) -> DomainResult<()> {
        let customer_id = r
            .customer_id()
            .ok_or_else(|| DomainError::validation("Reservation has no customer"))?;

        let mut model = reservation::ActiveModel {
            id: NotSet,
            customer_id: Set(customer_id),
            num_guests: Set(r.num_guests()),
            start_at: Set(r.start_at()),
            notes: Set(r.notes().to_owned()),
        };

        match r.save_action() {
            SaveAction::Insert => {
                debug!("Inserting reservation for customer: {}", customer_id);
                let inserted = model.insert(&self.db).await.map_err(db_err)?;
                r.mark_persisted(inserted.id);
            }
            SaveAction::Update(id) => {
                debug!("Updating reservation: {}", id);
                model.id = Set(id);
                model.update(&self.db).await.map_err(|e| match e {
                    DbErr::RecordNotUpdated => DomainError::not_found("reservation", "id", id),
                    other => db_err(other),
                })?;
            }
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::domain::customer::{Customer, CustomerRepository};
    use crate::infrastructure::database::repositories::test_support::test_db;
    use crate::infrastructure::database::repositories::SeaOrmCustomerRepository;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    async fn setup() -> (SeaOrmCustomerRepository, SeaOrmReservationRepository) {
        let db = test_db().await;
        (
            SeaOrmCustomerRepository::new(db.clone()),
            SeaOrmReservationRepository::new(db),
        )
    }

    async fn customer(repo: &SeaOrmCustomerRepository, first: &str) -> i32 {
        let mut c = Customer::new(first, "Doe");
        repo.save(&mut c).await.unwrap();
        c.id().unwrap()
    }

    #[tokio::test]
    async fn saved_reservation_is_found_for_customer() {
        let (customers, reservations) = setup().await;
        let jane = customer(&customers, "Jane").await;

        let mut r = Reservation::new(jane, 4, at(2024, 1, 1, 18, 30)).unwrap();
        reservations.save(&mut r).await.unwrap();
        assert!(r.is_persisted());

        let found = reservations.for_customer(jane).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), r.id());
        assert_eq!(found[0].customer_id(), Some(jane));
        assert_eq!(found[0].num_guests(), 4);
        assert_eq!(found[0].start_at(), at(2024, 1, 1, 18, 30));
        assert_eq!(found[0].notes(), "");
        assert_eq!(found[0].formatted_start_at(), "January 1st 2024, 6:30 pm");
    }

    #[tokio::test]
    async fn second_save_updates_in_place() {
        let (customers, reservations) = setup().await;
        let jane = customer(&customers, "Jane").await;

        let mut r = Reservation::new(jane, 2, at(2024, 5, 3, 12, 0)).unwrap();
        reservations.save(&mut r).await.unwrap();
        let id = r.id();

        r.set_num_guests(6).unwrap();
        r.set_start_at(at(2024, 5, 4, 19, 45));
        r.set_notes(Some("anniversary"));
        reservations.save(&mut r).await.unwrap();
        assert_eq!(r.id(), id);

        let found = reservations.for_customer(jane).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].num_guests(), 6);
        assert_eq!(found[0].start_at(), at(2024, 5, 4, 19, 45));
        assert_eq!(found[0].notes(), "anniversary");
    }

    #[tokio::test]
    async fn for_customer_only_returns_own_reservations() {
        let (customers, reservations) = setup().await;
        let jane = customer(&customers, "Jane").await;
        let john = customer(&customers, "John").await;

        for guests in [1, 2, 3] {
            let mut r = Reservation::new(jane, guests, at(2024, 2, 1, 12, 0)).unwrap();
            reservations.save(&mut r).await.unwrap();
        }
        let mut other = Reservation::new(john, 5, at(2024, 2, 2, 12, 0)).unwrap();
        reservations.save(&mut other).await.unwrap();

        let mut guests: Vec<i32> = reservations
            .for_customer(jane)
            .await
            .unwrap()
            .iter()
            .map(Reservation::num_guests)
            .collect();
        guests.sort_unstable();
        assert_eq!(guests, [1, 2, 3]);
        assert!(reservations.for_customer(999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unassigned_reservation_cannot_be_saved() {
        let (_, reservations) = setup().await;

        let mut r = Reservation::unassigned(2, at(2024, 1, 1, 12, 0)).unwrap();
        let err = reservations.save(&mut r).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(!r.is_persisted());
    }

    #[tokio::test]
    async fn unknown_customer_is_storage_error() {
        let (_, reservations) = setup().await;

        let mut r = Reservation::new(404, 2, at(2024, 1, 1, 12, 0)).unwrap();
        let err = reservations.save(&mut r).await.unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert_eq!(r.id(), None);
    }
}
