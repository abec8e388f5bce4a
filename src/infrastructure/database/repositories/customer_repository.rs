//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, DatabaseConnection, DbBackend, DbErr,
    EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    Set,
};
use tracing::debug;

use super::db_err;
use crate::domain::customer::{Customer, CustomerRepository};
use crate::domain::{DomainError, DomainResult, SaveAction};
use crate::infrastructure::database::entities::{customer, reservation};

const BEST_CUSTOMERS_LIMIT: u64 = 10;

pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: customer::Model) -> Customer {
    Customer::from_row(m.id, m.first_name, m.last_name, m.phone, Some(m.notes))
}

/// Customer row joined with its reservation count
#[derive(Debug, FromQueryResult)]
struct CustomerWithCount {
    id: i32,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    notes: String,
    reservation_count: i64,
}

impl From<CustomerWithCount> for Customer {
    fn from(row: CustomerWithCount) -> Self {
        Customer::from_row(
            row.id,
            row.first_name,
            row.last_name,
            row.phone,
            Some(row.notes),
        )
        .with_reservation_count(row.reservation_count)
    }
}

/// Unicode-aware "first last" containment, for stores whose LOWER/LIKE only fold ASCII.
fn full_name_contains(customer: &Customer, needle: &str) -> bool {
    customer.full_name().to_lowercase().contains(needle)
}

// ── CustomerRepository impl ─────────────────────────────────────

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn all(&self) -> DomainResult<Vec<Customer>> {
        let models = customer::Entity::find()
            .order_by_asc(customer::Column::LastName)
            .order_by_asc(customer::Column::FirstName)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn get(&self, id: i32) -> DomainResult<Customer> {
        let model = customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        match model {
            Some(m) => Ok(model_to_domain(m)),
            None => {
                debug!("No such customer: {}", id);
                Err(DomainError::not_found("customer", "id", id))
            }
        }
    }

    async fn search_by_name(&self, name: &str) -> DomainResult<Vec<Customer>> {
        let query = customer::Entity::find()
            .order_by_asc(customer::Column::LastName)
            .order_by_asc(customer::Column::FirstName);

        // PostgreSQL folds case per locale; SQLite only folds ASCII, so match in Rust there
        if self.db.get_database_backend() == DbBackend::Postgres {
            let models = query
                .filter(Expr::cust_with_values(
                    "(first_name || ' ' || last_name) ILIKE ?",
                    [format!("%{}%", name)],
                ))
                .all(&self.db)
                .await
                .map_err(db_err)?;
            return Ok(models.into_iter().map(model_to_domain).collect());
        }

        let needle = name.to_lowercase();
        let models = query.all(&self.db).await.map_err(db_err)?;
        Ok(models
            .into_iter()
            .map(model_to_domain)
            .filter(|c| full_name_contains(c, &needle))
            .collect())
    }

    async fn best_customers(&self) -> DomainResult<Vec<Customer>> {
        let rows = customer::Entity::find()
            .select_only()
            .columns([
                customer::Column::Id,
                customer::Column::FirstName,
                customer::Column::LastName,
                customer::Column::Phone,
                customer::Column::Notes,
            ])
            .column_as(
                Expr::col((reservation::Entity, reservation::Column::Id)).count(),
                "reservation_count",
            )
            .join(JoinType::LeftJoin, customer::Relation::Reservations.def())
            .group_by(customer::Column::Id)
            .group_by(customer::Column::FirstName)
            .group_by(customer::Column::LastName)
            .group_by(customer::Column::Phone)
            .group_by(customer::Column::Notes)
            .order_by_desc(Expr::col((reservation::Entity, reservation::Column::Id)).count())
            .order_by_asc(customer::Column::Id)
            .limit(BEST_CUSTOMERS_LIMIT)
            .into_model::<CustomerWithCount>()
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn save(&self, c: &mut Customer) -> DomainResult<()> {
        let mut model = customer::ActiveModel {
            id: NotSet,
            first_name: Set(c.first_name.clone()),
            last_name: Set(c.last_name.clone()),
            phone: Set(c.phone().map(str::to_owned)),
            notes: Set(c.notes().to_owned()),
        };

        match c.save_action() {
            SaveAction::Insert => {
                debug!("Inserting customer: {}", c.full_name());
                let inserted = model.insert(&self.db).await.map_err(db_err)?;
                c.mark_persisted(inserted.id);
            }
            SaveAction::Update(id) => {
                debug!("Updating customer: {}", id);
                model.id = Set(id);
                model.update(&self.db).await.map_err(|e| match e {
                    DbErr::RecordNotUpdated => DomainError::not_found("customer", "id", id),
                    other => db_err(other),
                })?;
            }
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
