//! Event posting handlers. Same lifecycle as job postings.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use alumnet_core::domain::EventPosting;
use alumnet_core::moderation::Moderated;
use alumnet_shared::dto::{
    CommentRequest, CreateEventRequest, CreateResult, DeleteResult, EventDoc, UpdateResult,
};

use super::jobs::{comment_from_request, require_verified_poster};
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /events - create a posting. Always enters the queue unverified.
pub async fn create_event(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateEventRequest>,
) -> AppResult<HttpResponse> {
    let posted_by = require_verified_poster(&state, &identity).await?;
    let req = body.into_inner();

    if req.name.is_empty() || req.location.is_empty() {
        return Err(AppError::BadRequest(
            "Event name and location are required".to_string(),
        ));
    }

    let event = EventPosting::new(
        req.name,
        req.date,
        req.time,
        req.location,
        req.event_type,
        req.description,
        req.rsvp_link,
        req.attachment,
        posted_by,
    );

    let saved = state.events.save(event).await?;
    tracing::info!(event_id = %saved.id, "Event posting created, pending approval");

    Ok(HttpResponse::Created().json(CreateResult {
        inserted_id: saved.id,
    }))
}

/// GET /events - the full collection, verified and pending alike.
pub async fn list_events(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let events = state.events.list_all().await?;
    let docs: Vec<EventDoc> = events.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(docs))
}

/// PATCH /eventApprove/{id} - approve a pending posting. Idempotent.
pub async fn approve_event(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    identity.require_admin()?;

    let mut event = state
        .events
        .find_by_id(*path)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    let modified = event.approve();
    if modified {
        state.events.save(event).await?;
        tracing::info!(event_id = %path, "Event posting approved");
    }

    Ok(HttpResponse::Ok().json(UpdateResult::new(1, u64::from(modified))))
}

/// PATCH /eventComment/{id} - append one comment.
pub async fn comment_event(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    identity: Identity,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let comment = comment_from_request(body.into_inner(), &identity);

    match state.events.append_comment(*path, comment).await {
        Ok(()) => Ok(HttpResponse::Ok().json(UpdateResult::new(1, 1))),
        Err(alumnet_core::error::RepoError::NotFound) => {
            Err(AppError::NotFound("Event not found".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// DELETE /eventRemove/{id} - reject a posting. Destructive.
pub async fn remove_event(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    identity.require_admin()?;

    match state.events.delete(*path).await {
        Ok(()) => {
            tracing::info!(event_id = %path, "Event posting removed");
            Ok(HttpResponse::Ok().json(DeleteResult {
                message: "Event deleted successfully".to_string(),
                deleted_count: 1,
            }))
        }
        Err(alumnet_core::error::RepoError::NotFound) => {
            Err(AppError::NotFound("Event not found".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
