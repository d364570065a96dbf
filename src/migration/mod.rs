use sea_orm_migration::prelude::*;

mod m20241129_000001_create_users_and_people;
mod m20241202_201206_create_planets;
mod m20241202_201207_create_favorites;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241129_000001_create_users_and_people::Migration),
            Box::new(m20241202_201206_create_planets::Migration),
            Box::new(m20241202_201207_create_favorites::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};
    use sea_orm_migration::{MigratorTrait, SchemaManager};

    use super::Migrator;

    async fn memory_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);
        Database::connect(options)
            .await
            .expect("in-memory sqlite should open")
    }

    async fn has_table(db: &DatabaseConnection, table: &str) -> bool {
        SchemaManager::new(db)
            .has_table(table)
            .await
            .expect("table lookup should succeed")
    }

    #[tokio::test]
    async fn planets_step_is_reversible() {
        let db = memory_db().await;

        Migrator::up(&db, None).await.expect("migrations should apply");
        assert!(has_table(&db, "planets").await);
        assert!(has_table(&db, "favorites").await);

        // favorites references planets, so rolling back planets takes two steps
        Migrator::down(&db, Some(2)).await.expect("rollback should apply");
        assert!(!has_table(&db, "favorites").await);
        assert!(!has_table(&db, "planets").await);
        assert!(has_table(&db, "users").await);

        Migrator::up(&db, None).await.expect("migrations should re-apply");
        assert!(has_table(&db, "planets").await);
    }
}
