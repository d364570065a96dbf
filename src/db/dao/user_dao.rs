use sea_orm::{DatabaseConnection, Set};

use super::{DaoBase, DaoResult};
use crate::db::entities::{prelude::User, user};

#[derive(Clone)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl DaoBase for UserDao {
    type Entity = User;
    const ENTITY_NAME: &'static str = "User";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserDao {
    pub async fn list_users(&self) -> DaoResult<Vec<user::Model>> {
        self.find_all(|query| query).await
    }

    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        is_active: bool,
    ) -> DaoResult<user::Model> {
        let model = user::ActiveModel {
            email: Set(email.to_string()),
            password: Set(password.to_string()),
            is_active: Set(is_active),
            ..Default::default()
        };
        self.create(model).await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::db::entities::user;

    use super::UserDao;
    use crate::db::dao::{DaoBase, DaoLayerError};

    fn user_model(id: i32, email: &str) -> user::Model {
        user::Model {
            id,
            email: email.to_string(),
            password: "hunter2".to_string(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn list_users_returns_all_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[
                user_model(1, "luke@rebellion.org"),
                user_model(2, "leia@rebellion.org"),
            ]])
            .into_connection();
        let dao = UserDao::new(&db);

        let users = dao.list_users().await.expect("query should succeed");
        let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn require_by_id_reports_missing_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();
        let dao = UserDao::new(&db);

        let err = dao.require_by_id(42).await.expect_err("lookup should fail");
        assert!(matches!(
            err,
            DaoLayerError::NotFound { entity: "User", id: 42 }
        ));
    }

    #[tokio::test]
    async fn create_user_returns_inserted_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user_model(3, "han@falcon.net")]])
            .into_connection();
        let dao = UserDao::new(&db);

        let user = dao
            .create_user("han@falcon.net", "hunter2", true)
            .await
            .expect("insert should succeed");
        assert_eq!(user.id, 3);
        assert!(user.is_active);
    }
}
