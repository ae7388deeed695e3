use crate::domain::dish::{self, Dish, DishPayload};
use crate::domain::errors::DomainError;
use crate::domain::ports::{Located, Repository};

/// Runs the dish pipelines over a repository. Each stage returns a
/// `Result`, so `?` is the short-circuit between stages.
pub struct DishService<R> {
    repo: R,
}

impl<R: Repository<Dish>> DishService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// validate → append
    pub fn create(&self, payload: Option<DishPayload>) -> Result<Dish, DomainError> {
        let dish = dish::validate(payload, None)?;
        self.repo.append(dish.clone());
        Ok(dish)
    }

    /// lookup
    pub fn read(&self, dish_id: &str) -> Result<Dish, DomainError> {
        Ok(self.lookup(dish_id)?.entity)
    }

    /// lookup → validate → merge. The merged dish goes back to the caller
    /// but is not written to the collection; the stored entry is unchanged.
    pub fn update(&self, dish_id: &str, payload: Option<DishPayload>) -> Result<Dish, DomainError> {
        let found = self.lookup(dish_id)?;
        let incoming = dish::validate(payload, Some(dish_id))?;
        Ok(dish::merge(found.entity, incoming))
    }

    pub fn list(&self) -> Vec<Dish> {
        self.repo.all()
    }

    fn lookup(&self, dish_id: &str) -> Result<Located<Dish>, DomainError> {
        self.repo
            .find_by_id(dish_id)
            .ok_or_else(|| DomainError::not_found(format!("Dish does not exist: {dish_id}.")))
    }
}
