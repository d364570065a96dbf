use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};

use super::{DaoBase, DaoResult};
use crate::db::entities::{favorite, prelude::Favorite};

#[derive(Clone)]
pub struct FavoriteDao {
    db: DatabaseConnection,
}

impl DaoBase for FavoriteDao {
    type Entity = Favorite;
    const ENTITY_NAME: &'static str = "Favorite";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl FavoriteDao {
    pub async fn create_for_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> DaoResult<favorite::Model> {
        let model = favorite::ActiveModel {
            user_id: Set(user_id),
            planet_id: Set(Some(planet_id)),
            people_id: Set(None),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn create_for_people(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> DaoResult<favorite::Model> {
        let model = favorite::ActiveModel {
            user_id: Set(user_id),
            planet_id: Set(None),
            people_id: Set(Some(people_id)),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn list_by_user(&self, user_id: i32) -> DaoResult<Vec<favorite::Model>> {
        self.find_all(move |query| query.filter(favorite::Column::UserId.eq(user_id)))
            .await
    }

    /// Lowest-id favorite for the pair; duplicates are removed one at a time.
    pub async fn find_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> DaoResult<Option<favorite::Model>> {
        self.find_first(move |query| {
            query
                .filter(favorite::Column::UserId.eq(user_id))
                .filter(favorite::Column::PlanetId.eq(planet_id))
        })
        .await
    }

    pub async fn find_people_favorite(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> DaoResult<Option<favorite::Model>> {
        self.find_first(move |query| {
            query
                .filter(favorite::Column::UserId.eq(user_id))
                .filter(favorite::Column::PeopleId.eq(people_id))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::db::entities::favorite;

    use super::FavoriteDao;
    use crate::db::dao::{DaoBase, DaoLayerError};

    fn favorite_model(
        id: i32,
        user_id: i32,
        planet_id: Option<i32>,
        people_id: Option<i32>,
    ) -> favorite::Model {
        favorite::Model {
            id,
            user_id,
            planet_id,
            people_id,
        }
    }

    #[tokio::test]
    async fn create_for_planet_leaves_people_unset() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[favorite_model(1, 2, Some(3), None)]])
            .into_connection();
        let dao = FavoriteDao::new(&db);

        let created = dao
            .create_for_planet(2, 3)
            .await
            .expect("insert should succeed");
        assert_eq!(created.planet_id, Some(3));
        assert_eq!(created.people_id, None);
    }

    #[tokio::test]
    async fn find_planet_favorite_returns_none_when_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<favorite::Model>::new()])
            .into_connection();
        let dao = FavoriteDao::new(&db);

        let found = dao
            .find_planet_favorite(1, 1)
            .await
            .expect("query should succeed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn find_people_favorite_returns_first_match() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[favorite_model(4, 1, None, Some(7))]])
            .into_connection();
        let dao = FavoriteDao::new(&db);

        let found = dao
            .find_people_favorite(1, 7)
            .await
            .expect("query should succeed");
        assert_eq!(found.map(|fav| fav.id), Some(4));
    }

    #[tokio::test]
    async fn delete_reports_not_found_when_nothing_removed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let dao = FavoriteDao::new(&db);

        let err = dao.delete(5).await.expect_err("delete should fail");
        assert!(matches!(
            err,
            DaoLayerError::NotFound { entity: "Favorite", id: 5 }
        ));
    }
}
