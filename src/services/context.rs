use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{catalog_service::CatalogService, favorite_service::FavoriteService},
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn catalog(&self) -> CatalogService {
        CatalogService::new(self.daos.user(), self.daos.people(), self.daos.planet())
    }

    pub fn favorite(&self) -> FavoriteService {
        FavoriteService::new(
            self.daos.favorite(),
            self.daos.user(),
            self.daos.people(),
            self.daos.planet(),
        )
    }
}
