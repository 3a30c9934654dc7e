//! Job posting handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use alumnet_core::domain::{Comment, JobPosting};
use alumnet_core::moderation::Moderated;
use alumnet_shared::dto::{
    CommentRequest, CreateJobRequest, CreateResult, DeleteResult, JobDoc, UpdateResult,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Build the stored comment from a submission. The client picks the id and
/// timestamp so it can mirror the object locally; the author email always
/// comes from the authenticated identity.
pub(super) fn comment_from_request(req: CommentRequest, identity: &Identity) -> Comment {
    Comment {
        id: req.id.unwrap_or_else(Uuid::new_v4),
        text: req.text,
        author_name: req.author_name,
        author_email: identity.email.clone(),
        author_avatar: req.author_avatar,
        posted_at: req.posted_at.unwrap_or_else(chrono::Utc::now),
    }
}

/// Posting requires a verified account; pending registrations can browse but
/// not publish.
pub(super) async fn require_verified_poster(
    state: &AppState,
    identity: &Identity,
) -> AppResult<String> {
    let account = state
        .accounts
        .find_by_id(identity.account_id)
        .await?
        .ok_or(AppError::Unauthorized)?;
    if !account.verified {
        return Err(alumnet_core::DomainError::PendingVerification.into());
    }
    Ok(account.name)
}

/// POST /jobs - create a posting. Always enters the queue unverified.
pub async fn create_job(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateJobRequest>,
) -> AppResult<HttpResponse> {
    let posted_by = require_verified_poster(&state, &identity).await?;
    let req = body.into_inner();

    if req.title.is_empty() || req.company.is_empty() {
        return Err(AppError::BadRequest(
            "Title and company are required".to_string(),
        ));
    }

    let job = JobPosting::new(
        req.title,
        req.company,
        req.location,
        req.job_type,
        req.description,
        req.apply_link,
        req.attachment,
        posted_by,
    );

    let saved = state.jobs.save(job).await?;
    tracing::info!(job_id = %saved.id, "Job posting created, pending approval");

    Ok(HttpResponse::Created().json(CreateResult {
        inserted_id: saved.id,
    }))
}

/// GET /jobs - the full collection, verified and pending alike.
pub async fn list_jobs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let jobs = state.jobs.list_all().await?;
    let docs: Vec<JobDoc> = jobs.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(docs))
}

/// PATCH /jobApprove/{id} - approve a pending posting. Idempotent.
pub async fn approve_job(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    identity.require_admin()?;

    let mut job = state
        .jobs
        .find_by_id(*path)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    let modified = job.approve();
    if modified {
        state.jobs.save(job).await?;
        tracing::info!(job_id = %path, "Job posting approved");
    }

    Ok(HttpResponse::Ok().json(UpdateResult::new(1, u64::from(modified))))
}

/// PATCH /jobComment/{id} - append one comment.
pub async fn comment_job(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    identity: Identity,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let comment = comment_from_request(body.into_inner(), &identity);

    match state.jobs.append_comment(*path, comment).await {
        Ok(()) => Ok(HttpResponse::Ok().json(UpdateResult::new(1, 1))),
        Err(alumnet_core::error::RepoError::NotFound) => {
            Err(AppError::NotFound("Job not found".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// DELETE /jobRemove/{id} - reject a posting. Destructive.
pub async fn remove_job(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    identity.require_admin()?;

    match state.jobs.delete(*path).await {
        Ok(()) => {
            tracing::info!(job_id = %path, "Job posting removed");
            Ok(HttpResponse::Ok().json(DeleteResult {
                message: "job deleted successfully".to_string(),
                deleted_count: 1,
            }))
        }
        Err(alumnet_core::error::RepoError::NotFound) => {
            Err(AppError::NotFound("job not found".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
