#[allow(unused_imports)]
pub mod prelude {
    pub use super::favorite::Entity as Favorite;
    pub use super::people::Entity as People;
    pub use super::planet::Entity as Planet;
    pub use super::user::Entity as User;
}

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
