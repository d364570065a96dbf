use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};

use super::{DaoBase, DaoResult};
use crate::db::entities::{people, prelude::People};

#[derive(Clone)]
pub struct PeopleDao {
    db: DatabaseConnection,
}

impl DaoBase for PeopleDao {
    type Entity = People;
    const ENTITY_NAME: &'static str = "Person";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl PeopleDao {
    pub async fn list_people(&self) -> DaoResult<Vec<people::Model>> {
        self.find_all(|query| query).await
    }

    /// Zero or one row; an unknown id is an empty result, not an error.
    pub async fn list_by_id(&self, id: i32) -> DaoResult<Vec<people::Model>> {
        self.find_all(move |query| query.filter(people::Column::Id.eq(id)))
            .await
    }

    pub async fn create_person(&self, name: &str, gender: &str) -> DaoResult<people::Model> {
        let model = people::ActiveModel {
            name: Set(name.to_string()),
            gender: Set(gender.to_string()),
            ..Default::default()
        };
        self.create(model).await
    }
}
