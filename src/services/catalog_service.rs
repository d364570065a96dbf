use crate::{
    db::dao::{PeopleDao, PlanetDao, UserDao},
    db::entities::{people, planet, user},
    error::AppError,
};

/// Read-only access to users and the people/planet catalog.
#[derive(Clone)]
pub struct CatalogService {
    user_dao: UserDao,
    people_dao: PeopleDao,
    planet_dao: PlanetDao,
}

impl CatalogService {
    pub fn new(user_dao: UserDao, people_dao: PeopleDao, planet_dao: PlanetDao) -> Self {
        Self {
            user_dao,
            people_dao,
            planet_dao,
        }
    }

    pub async fn list_users(&self) -> Result<Vec<user::Model>, AppError> {
        Ok(self.user_dao.list_users().await?)
    }

    pub async fn list_people(&self) -> Result<Vec<people::Model>, AppError> {
        Ok(self.people_dao.list_people().await?)
    }

    pub async fn people_by_id(&self, id: i32) -> Result<Vec<people::Model>, AppError> {
        Ok(self.people_dao.list_by_id(id).await?)
    }

    pub async fn list_planets(&self) -> Result<Vec<planet::Model>, AppError> {
        Ok(self.planet_dao.list_planets().await?)
    }

    pub async fn planets_by_id(&self, id: i32) -> Result<Vec<planet::Model>, AppError> {
        Ok(self.planet_dao.list_by_id(id).await?)
    }
}
