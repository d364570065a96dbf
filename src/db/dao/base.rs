use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult, IntoActiveModel,
    PrimaryKeyTrait, QueryOrder, Select,
};

use super::base_traits::HasIdColumn;
use super::error::{DaoLayerError, DaoResult};

type ModelOf<D> = <<D as DaoBase>::Entity as EntityTrait>::Model;
type ActiveModelOf<D> = <<D as DaoBase>::Entity as EntityTrait>::ActiveModel;

/// Single-table data access shared by every entity DAO.
///
/// Reads are always ordered by ascending id so list responses are stable
/// across backends.
#[async_trait::async_trait]
pub trait DaoBase: Clone + Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model:
        FromQueryResult + IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send + Sync,
    <Self::Entity as EntityTrait>::ActiveModel: ActiveModelTrait<Entity = Self::Entity> + Send,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType:
        From<i32> + Send + Sync,
{
    type Entity: EntityTrait + HasIdColumn + Send + Sync;

    /// Human readable name used in not-found errors.
    const ENTITY_NAME: &'static str;

    fn new(db: &DatabaseConnection) -> Self;

    fn db(&self) -> &DatabaseConnection;

    async fn create(&self, active: ActiveModelOf<Self>) -> DaoResult<ModelOf<Self>> {
        Ok(active.insert(self.db()).await?)
    }

    async fn find_all(
        &self,
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<Vec<ModelOf<Self>>> {
        let rows = apply(Self::Entity::find())
            .order_by_asc(Self::Entity::id_column())
            .all(self.db())
            .await?;
        Ok(rows)
    }

    async fn find_first(
        &self,
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<Option<ModelOf<Self>>> {
        let row = apply(Self::Entity::find())
            .order_by_asc(Self::Entity::id_column())
            .one(self.db())
            .await?;
        Ok(row)
    }

    async fn find_by_id(&self, id: i32) -> DaoResult<Option<ModelOf<Self>>> {
        Ok(Self::Entity::find_by_id(id).one(self.db()).await?)
    }

    async fn require_by_id(&self, id: i32) -> DaoResult<ModelOf<Self>> {
        self.find_by_id(id).await?.ok_or(DaoLayerError::NotFound {
            entity: Self::ENTITY_NAME,
            id,
        })
    }

    async fn delete(&self, id: i32) -> DaoResult<i32> {
        let result = Self::Entity::delete_by_id(id).exec(self.db()).await?;

        if result.rows_affected == 0 {
            return Err(DaoLayerError::NotFound {
                entity: Self::ENTITY_NAME,
                id,
            });
        }

        Ok(id)
    }
}
