//! In-memory repositories.
//!
//! A fully functional document store over a `Vec` behind an async RwLock,
//! preserving insertion order. Used as the fallback when no database is
//! configured and as the backing store for handler-level tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use alumnet_core::domain::{Account, Comment, EventPosting, JobPosting};
use alumnet_core::error::RepoError;
use alumnet_core::moderation::Moderated;
use alumnet_core::ports::{
    AccountRepository, BaseRepository, EventRepository, JobRepository,
};

/// Generic in-memory repository for any moderated entity.
pub struct MemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

/// In-memory account repository.
pub type MemoryAccountRepository = MemoryRepository<Account>;

/// In-memory job posting repository.
pub type MemoryJobRepository = MemoryRepository<JobPosting>;

/// In-memory event posting repository.
pub type MemoryEventRepository = MemoryRepository<EventPosting>;

impl<T> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> BaseRepository<T, Uuid> for MemoryRepository<T>
where
    T: Moderated + Clone + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id() == entity.id()) {
            Some(existing) => *existing = entity.clone(),
            None => records.push(entity.clone()),
        }
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for MemoryRepository<Account> {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepoError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|a| a.email == email).cloned())
    }

    async fn find_by_roll_no(
        &self,
        roll_no: &str,
        department: &str,
    ) -> Result<Option<Account>, RepoError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|a| a.roll_no == roll_no && a.department == department)
            .cloned())
    }
}

#[async_trait]
impl JobRepository for MemoryRepository<JobPosting> {
    async fn append_comment(&self, id: Uuid, comment: Comment) -> Result<(), RepoError> {
        let mut records = self.records.write().await;
        let job = records
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or(RepoError::NotFound)?;
        job.push_comment(comment);
        Ok(())
    }
}

#[async_trait]
impl EventRepository for MemoryRepository<EventPosting> {
    async fn append_comment(&self, id: Uuid, comment: Comment) -> Result<(), RepoError> {
        let mut records = self.records.write().await;
        let event = records
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(RepoError::NotFound)?;
        event.push_comment(comment);
        Ok(())
    }
}
