//! Directory service - registration and lifecycle for one person kind.
//!
//! One implementation serves both directories; construction picks the
//! backing repository and the kind used in error messages.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{PersonKind, PersonResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::PersonRepository;

/// Directory service trait for dependency injection.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Register a new person
    async fn create(&self, name: String, age: i32, group: String) -> AppResult<PersonResponse>;

    /// Overwrite name, age and group of an existing person
    async fn update(
        &self,
        id: Uuid,
        name: String,
        age: i32,
        group: String,
    ) -> AppResult<PersonResponse>;

    /// Remove a person together with their course memberships
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation over one person directory.
pub struct DirectoryManager {
    repo: Arc<dyn PersonRepository>,
    kind: PersonKind,
}

impl DirectoryManager {
    /// Create new service instance with repository
    pub fn new(repo: Arc<dyn PersonRepository>, kind: PersonKind) -> Self {
        Self { repo, kind }
    }
}

#[async_trait]
impl DirectoryService for DirectoryManager {
    async fn create(&self, name: String, age: i32, group: String) -> AppResult<PersonResponse> {
        // Two people may share a name; the (name, group, age) triple
        // must be unique within the directory.
        if self
            .repo
            .find_by_natural_key(&name, &group, age)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "{} with name {} already exists",
                self.kind, name
            )));
        }

        let person = self.repo.create(name, age, group).await?;
        Ok(PersonResponse::from_parts(person, Vec::new()))
    }

    async fn update(
        &self,
        id: Uuid,
        name: String,
        age: i32,
        group: String,
    ) -> AppResult<PersonResponse> {
        let current = self.repo.find_with_courses(id).await?.ok_or_else(|| {
            AppError::not_found(format!("{} with ID {} does not exist", self.kind, id))
        })?;

        // Memberships are untouched by an update.
        let person = self.repo.update(id, name, age, group).await?;
        Ok(PersonResponse::from_parts(person, current.courses))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let person = self.repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(format!("{} with ID {} does not exist", self.kind, id))
        })?;

        self.repo.delete(person.id).await
    }
}
