pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod favorite_dao;
pub mod people_dao;
pub mod planet_dao;
pub mod user_dao;

pub use base::DaoBase;
pub use base_traits::HasIdColumn;
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use favorite_dao::FavoriteDao;
pub use people_dao::PeopleDao;
pub use planet_dao::PlanetDao;
pub use user_dao::UserDao;
