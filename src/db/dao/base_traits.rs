/// Entities keyed by a single integer `id` column, used for stable ordering.
pub trait HasIdColumn: sea_orm::EntityTrait {
    fn id_column() -> Self::Column;
}
