use sea_orm::entity::prelude::*;

use crate::db::dao::HasIdColumn;

/// Links a user to one liked planet or one liked person. The endpoints set
/// exactly one of `planet_id` / `people_id`; the table does not enforce it.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,
    #[sea_orm(belongs_to, from = "planet_id", to = "id")]
    pub planet: HasOne<super::planet::Entity>,
    #[sea_orm(belongs_to, from = "people_id", to = "id")]
    pub people: HasOne<super::people::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

impl HasIdColumn for Entity {
    fn id_column() -> Column {
        Column::Id
    }
}
