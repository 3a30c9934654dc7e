//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, Set};
use uuid::Uuid;

use alumnet_core::domain::{Account, Comment};
use alumnet_core::error::RepoError;
use alumnet_core::ports::{AccountRepository, EventRepository, JobRepository};

use super::entity::account::{self, Entity as AccountEntity};
use super::entity::event_posting::Entity as EventEntity;
use super::entity::job_posting::{self as job_posting, Entity as JobEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL account repository.
pub type PostgresAccountRepository = PostgresBaseRepository<AccountEntity>;

/// PostgreSQL job posting repository.
pub type PostgresJobRepository = PostgresBaseRepository<JobEntity>;

/// PostgreSQL event posting repository.
pub type PostgresEventRepository = PostgresBaseRepository<EventEntity>;

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepoError> {
        let result = AccountEntity::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn find_by_roll_no(
        &self,
        roll_no: &str,
        department: &str,
    ) -> Result<Option<Account>, RepoError> {
        let result = AccountEntity::find()
            .filter(account::Column::RollNo.eq(roll_no))
            .filter(account::Column::Department.eq(department))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl JobRepository for PostgresJobRepository {
    async fn append_comment(&self, id: Uuid, comment: Comment) -> Result<(), RepoError> {
        let model = JobEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
            .ok_or(RepoError::NotFound)?;

        let mut comments = job_posting::comments_from_json(model.comments.clone());
        comments.push(comment);

        let mut active = model.into_active_model();
        active.comments = Set(job_posting::comments_to_json(&comments));
        active
            .update(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn append_comment(&self, id: Uuid, comment: Comment) -> Result<(), RepoError> {
        let model = EventEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
            .ok_or(RepoError::NotFound)?;

        let mut comments = job_posting::comments_from_json(model.comments.clone());
        comments.push(comment);

        let mut active = model.into_active_model();
        active.comments = Set(job_posting::comments_to_json(&comments));
        active
            .update(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }
}
