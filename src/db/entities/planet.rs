use sea_orm::entity::prelude::*;

use crate::db::dao::HasIdColumn;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    #[sea_orm(has_many)]
    pub favorites: HasMany<super::favorite::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

impl HasIdColumn for Entity {
    fn id_column() -> Column {
        Column::Id
    }
}
