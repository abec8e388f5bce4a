//! Table bootstrap from the entity definitions
//!
//! Creates `customers` and `reservations` when they are missing. There is no
//! versioning; an existing table is left untouched.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};
use tracing::info;

use super::entities::{customer, reservation};

pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(db, customer::Entity).await?;
    create_table(db, reservation::Entity).await?;
    info!("Database schema ready");
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::{init_database, DatabaseConfig};

    #[tokio::test]
    async fn create_schema_is_idempotent() {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        create_schema(&db).await.unwrap();
        create_schema(&db).await.unwrap();

        let customers = customer::Entity::find().all(&db).await.unwrap();
        let reservations = reservation::Entity::find().all(&db).await.unwrap();
        assert!(customers.is_empty());
        assert!(reservations.is_empty());
    }
}
