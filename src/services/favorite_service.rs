use tracing::info;

use crate::{
    db::dao::{DaoBase, FavoriteDao, PeopleDao, PlanetDao, UserDao},
    db::entities::favorite,
    error::AppError,
};

const FAVORITE_NOT_FOUND: &str = "Favorite not found";

#[derive(Clone)]
pub struct FavoriteService {
    favorite_dao: FavoriteDao,
    user_dao: UserDao,
    people_dao: PeopleDao,
    planet_dao: PlanetDao,
}

impl FavoriteService {
    pub fn new(
        favorite_dao: FavoriteDao,
        user_dao: UserDao,
        people_dao: PeopleDao,
        planet_dao: PlanetDao,
    ) -> Self {
        Self {
            favorite_dao,
            user_dao,
            people_dao,
            planet_dao,
        }
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<favorite::Model>, AppError> {
        Ok(self.favorite_dao.list_by_user(user_id).await?)
    }

    /// Not idempotent: every call inserts a new row.
    pub async fn add_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<favorite::Model, AppError> {
        self.user_dao.require_by_id(user_id).await?;
        self.planet_dao.require_by_id(planet_id).await?;

        let created = self
            .favorite_dao
            .create_for_planet(user_id, planet_id)
            .await?;
        info!(favorite_id = created.id, user_id, planet_id, "favorite planet added");
        Ok(created)
    }

    pub async fn add_people(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> Result<favorite::Model, AppError> {
        self.user_dao.require_by_id(user_id).await?;
        self.people_dao.require_by_id(people_id).await?;

        let created = self
            .favorite_dao
            .create_for_people(user_id, people_id)
            .await?;
        info!(favorite_id = created.id, user_id, people_id, "favorite person added");
        Ok(created)
    }

    pub async fn remove_planet(&self, user_id: i32, planet_id: i32) -> Result<(), AppError> {
        let favorite = self
            .favorite_dao
            .find_planet_favorite(user_id, planet_id)
            .await?
            .ok_or_else(|| AppError::not_found(FAVORITE_NOT_FOUND))?;

        self.remove(favorite).await
    }

    pub async fn remove_people(&self, user_id: i32, people_id: i32) -> Result<(), AppError> {
        let favorite = self
            .favorite_dao
            .find_people_favorite(user_id, people_id)
            .await?
            .ok_or_else(|| AppError::not_found(FAVORITE_NOT_FOUND))?;

        self.remove(favorite).await
    }

    async fn remove(&self, favorite: favorite::Model) -> Result<(), AppError> {
        // a concurrent delete of the same row surfaces as not found
        self.favorite_dao.delete(favorite.id).await?;
        info!(
            favorite_id = favorite.id,
            user_id = favorite.user_id,
            "favorite removed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::{
        db::entities::{favorite, people, planet, user},
        services::ServiceContext,
    };

    fn user_model(id: i32) -> user::Model {
        user::Model {
            id,
            email: format!("pilot{id}@rebellion.org"),
            password: "secret".to_string(),
            is_active: true,
        }
    }

    fn planet_model(id: i32) -> planet::Model {
        planet::Model {
            id,
            name: "Hoth".to_string(),
            climate: "frozen".to_string(),
            terrain: "tundra".to_string(),
        }
    }

    #[tokio::test]
    async fn add_planet_rejects_unknown_planet_before_insert() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user_model(1)]])
            .append_query_results([Vec::<planet::Model>::new()])
            .into_connection();
        let service = ServiceContext::new(&db).favorite();

        let err = service
            .add_planet(1, 404)
            .await
            .expect_err("unknown planet should fail");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Planet not found");
    }

    #[tokio::test]
    async fn add_planet_links_only_the_planet() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user_model(1)]])
            .append_query_results([[planet_model(5)]])
            .append_query_results([[favorite::Model {
                id: 11,
                user_id: 1,
                planet_id: Some(5),
                people_id: None,
            }]])
            .into_connection();
        let service = ServiceContext::new(&db).favorite();

        let created = service.add_planet(1, 5).await.expect("insert should succeed");
        assert_eq!(created.user_id, 1);
        assert_eq!(created.planet_id, Some(5));
        assert_eq!(created.people_id, None);
    }

    #[tokio::test]
    async fn add_people_rejects_unknown_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();
        let service = ServiceContext::new(&db).favorite();

        let err = service
            .add_people(9, 1)
            .await
            .expect_err("unknown user should fail");
        assert_eq!(err.message(), "User not found");
    }

    #[tokio::test]
    async fn add_people_returns_created_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user_model(1)]])
            .append_query_results([[people::Model {
                id: 4,
                name: "Leia Organa".to_string(),
                gender: "female".to_string(),
            }]])
            .append_query_results([[favorite::Model {
                id: 10,
                user_id: 1,
                planet_id: None,
                people_id: Some(4),
            }]])
            .into_connection();
        let service = ServiceContext::new(&db).favorite();

        let created = service.add_people(1, 4).await.expect("insert should succeed");
        assert_eq!(created.id, 10);
        assert_eq!(created.people_id, Some(4));
        assert_eq!(created.planet_id, None);
    }

    #[tokio::test]
    async fn remove_planet_without_match_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<favorite::Model>::new()])
            .into_connection();
        let service = ServiceContext::new(&db).favorite();

        let err = service
            .remove_planet(1, 2)
            .await
            .expect_err("missing favorite should fail");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Favorite not found");
    }

    #[tokio::test]
    async fn remove_planet_deletes_matching_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[favorite::Model {
                id: 3,
                user_id: 1,
                planet_id: Some(2),
                people_id: None,
            }]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let service = ServiceContext::new(&db).favorite();

        service
            .remove_planet(1, 2)
            .await
            .expect("delete should succeed");
    }
}
