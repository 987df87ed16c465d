// src/repositories/crud_repository.rs
//
// Generic persistence contract shared by every entity repository.
// Entity-specific repositories extend it with their own queries.

use crate::error::AppResult;

pub trait CrudRepository<T>: Send + Sync {
    /// Insert a draft (id assigned by the store) or update an existing row.
    /// Returns the entity as persisted.
    fn save(&self, entity: &T) -> AppResult<T>;

    fn find_by_id(&self, id: i64) -> AppResult<Option<T>>;

    fn find_all(&self) -> AppResult<Vec<T>>;

    /// Deleting a missing id is `AppError::NotFound`
    fn delete_by_id(&self, id: i64) -> AppResult<()>;
}
