use sea_orm::DatabaseConnection;

use super::{DaoBase, FavoriteDao, PeopleDao, PlanetDao, UserDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn user(&self) -> UserDao {
        DaoBase::new(&self.db)
    }

    pub fn people(&self) -> PeopleDao {
        DaoBase::new(&self.db)
    }

    pub fn planet(&self) -> PlanetDao {
        DaoBase::new(&self.db)
    }

    pub fn favorite(&self) -> FavoriteDao {
        DaoBase::new(&self.db)
    }
}
