use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Account, Comment, EventPosting, JobPosting};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `list_all` exists because the moderation contract is fetch-all: listing
/// endpoints return the full collection and callers partition it locally.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Fetch the full collection, no server-side filtering.
    async fn list_all(&self) -> Result<Vec<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. `NotFound` when nothing matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Account repository with domain-specific lookups.
#[async_trait]
pub trait AccountRepository: BaseRepository<Account, Uuid> {
    /// Find an account by its email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepoError>;

    /// Find an account by roll number within a department. Roll numbers are
    /// only unique per department.
    async fn find_by_roll_no(
        &self,
        roll_no: &str,
        department: &str,
    ) -> Result<Option<Account>, RepoError>;
}

/// Job posting repository.
#[async_trait]
pub trait JobRepository: BaseRepository<JobPosting, Uuid> {
    /// Append one comment to the posting's comment list, preserving order.
    /// `NotFound` when the id does not resolve.
    async fn append_comment(&self, id: Uuid, comment: Comment) -> Result<(), RepoError>;
}

/// Event posting repository.
#[async_trait]
pub trait EventRepository: BaseRepository<EventPosting, Uuid> {
    /// Append one comment to the posting's comment list, preserving order.
    /// `NotFound` when the id does not resolve.
    async fn append_comment(&self, id: Uuid, comment: Comment) -> Result<(), RepoError>;
}
