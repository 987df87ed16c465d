// src/services/crud_service.rs
//
// Generic CRUD orchestration
//
// One implementation serves every entity: validate, delegate to the
// repository, log the write. Entity services wrap it and add their own
// workflows on top.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::domain::{Course, DomainError, Entity, Piste};
use crate::error::{AppError, AppResult};
use crate::repositories::{CourseRepository, CrudRepository, PisteRepository};

pub struct CrudService<T, R: CrudRepository<T> + ?Sized> {
    repo: Arc<R>,
    _entity: PhantomData<fn() -> T>,
}

/// Pistes need nothing beyond CRUD
pub type PisteService = CrudService<Piste, dyn PisteRepository>;

/// Courses need nothing beyond CRUD
pub type CourseService = CrudService<Course, dyn CourseRepository>;

impl<T: Entity, R: CrudRepository<T> + ?Sized> CrudService<T, R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            _entity: PhantomData,
        }
    }

    /// Underlying repository, for entity-specific queries
    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    /// Persist a new entity. One that already carries an id goes through `update`.
    pub fn add(&self, entity: &T) -> AppResult<T> {
        if let Some(id) = entity.id() {
            return Err(DomainError::InvariantViolation(format!(
                "New {} must not carry an id (got {})",
                T::NAME,
                id
            ))
            .into());
        }
        entity.validate()?;

        let saved = self.repo.save(entity)?;
        log::info!("{} {:?} added", T::NAME, saved.id());

        Ok(saved)
    }

    pub fn retrieve_all(&self) -> AppResult<Vec<T>> {
        self.repo.find_all()
    }

    pub fn retrieve(&self, id: i64) -> AppResult<Option<T>> {
        self.repo.find_by_id(id)
    }

    /// Like `retrieve`, but a missing row is `AppError::NotFound`
    pub fn require(&self, id: i64) -> AppResult<T> {
        self.repo
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found(T::NAME, id))
    }

    /// The entity must carry the id of an existing row
    pub fn update(&self, entity: &T) -> AppResult<T> {
        let id = entity.id().ok_or_else(|| {
            DomainError::InvariantViolation(format!("{} update requires an id", T::NAME))
        })?;

        entity.validate()?;
        self.require(id)?;

        let saved = self.repo.save(entity)?;
        log::info!("{} {} updated", T::NAME, id);

        Ok(saved)
    }

    pub fn remove(&self, id: i64) -> AppResult<()> {
        self.repo.delete_by_id(id)?;
        log::info!("{} {} removed", T::NAME, id);
        Ok(())
    }
}
