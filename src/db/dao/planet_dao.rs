use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};

use super::{DaoBase, DaoResult};
use crate::db::entities::{planet, prelude::Planet};

#[derive(Clone)]
pub struct PlanetDao {
    db: DatabaseConnection,
}

impl DaoBase for PlanetDao {
    type Entity = Planet;
    const ENTITY_NAME: &'static str = "Planet";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl PlanetDao {
    pub async fn list_planets(&self) -> DaoResult<Vec<planet::Model>> {
        self.find_all(|query| query).await
    }

    pub async fn list_by_id(&self, id: i32) -> DaoResult<Vec<planet::Model>> {
        self.find_all(move |query| query.filter(planet::Column::Id.eq(id)))
            .await
    }

    pub async fn create_planet(
        &self,
        name: &str,
        climate: &str,
        terrain: &str,
    ) -> DaoResult<planet::Model> {
        let model = planet::ActiveModel {
            name: Set(name.to_string()),
            climate: Set(climate.to_string()),
            terrain: Set(terrain.to_string()),
            ..Default::default()
        };
        self.create(model).await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::db::entities::planet;

    use super::PlanetDao;
    use crate::db::dao::DaoBase;

    fn tatooine() -> planet::Model {
        planet::Model {
            id: 1,
            name: "Tatooine".to_string(),
            climate: "arid".to_string(),
            terrain: "desert".to_string(),
        }
    }

    #[tokio::test]
    async fn list_by_id_returns_single_match() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[tatooine()]])
            .into_connection();
        let dao = PlanetDao::new(&db);

        let rows = dao.list_by_id(1).await.expect("query should succeed");
        assert_eq!(rows, vec![tatooine()]);
    }

    #[tokio::test]
    async fn find_by_id_returns_none_when_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<planet::Model>::new()])
            .into_connection();
        let dao = PlanetDao::new(&db);

        let planet = dao.find_by_id(404).await.expect("query should succeed");
        assert!(planet.is_none());
    }
}
