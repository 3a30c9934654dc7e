//! Account collection handlers - the legacy fetch-all surface plus the
//! moderation transitions.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use alumnet_core::domain::Account;
use alumnet_core::moderation::Moderated;
use alumnet_shared::dto::{AccountDoc, DeleteResult, UpdateAccountRequest, UpdateResult};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Resolve an account by UUID or, failing that, by email. Users are the only
/// collection addressable by a natural key.
async fn resolve_account(state: &AppState, id: &str) -> AppResult<Account> {
    if let Ok(uuid) = Uuid::parse_str(id) {
        if let Some(account) = state.accounts.find_by_id(uuid).await? {
            return Ok(account);
        }
    }
    state
        .accounts
        .find_by_email(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

/// GET /users - the full collection; partitioning is a client concern.
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let accounts = state.accounts.list_all().await?;
    let docs: Vec<AccountDoc> = accounts.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(docs))
}

/// GET /user/{id} - one account by id or email.
pub async fn get_user(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let account = resolve_account(&state, &path).await?;
    Ok(HttpResponse::Ok().json(AccountDoc::from(account)))
}

/// PATCH /user/{id} - owner profile update.
///
/// Role, verification state and credentials are not reachable from this
/// endpoint regardless of the request body.
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
    identity: Identity,
    body: web::Json<UpdateAccountRequest>,
) -> AppResult<HttpResponse> {
    let mut account = resolve_account(&state, &path).await?;

    // Owners edit themselves; admins may edit anyone.
    if account.id != identity.account_id && !identity.is_admin() {
        return Err(AppError::Forbidden(
            "You can only edit your own profile".to_string(),
        ));
    }

    account.apply_profile_update(body.into_inner().into());
    state.accounts.save(account).await?;

    Ok(HttpResponse::Ok()
        .json(UpdateResult::new(1, 1).with_message("User updated successfully")))
}

/// PATCH /userVerify/{id} - approve a pending registration.
///
/// Idempotent: approving an already-verified account reports a modified
/// count of zero.
pub async fn verify_user(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    identity.require_admin()?;

    let mut account = state
        .accounts
        .find_by_id(*path)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let modified = account.approve();
    if modified {
        state.accounts.save(account).await?;
        tracing::info!(account_id = %path, "Account verified");
    }

    Ok(HttpResponse::Ok().json(UpdateResult::new(1, u64::from(modified))))
}

/// DELETE /userRemove/{id} - reject a registration. Destructive; there is no
/// soft-delete or undo.
pub async fn remove_user(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    identity.require_admin()?;

    match state.accounts.delete(*path).await {
        Ok(()) => {
            tracing::info!(account_id = %path, "Account removed");
            Ok(HttpResponse::Ok().json(DeleteResult {
                message: "user deleted successfully".to_string(),
                deleted_count: 1,
            }))
        }
        Err(alumnet_core::error::RepoError::NotFound) => {
            Err(AppError::NotFound("user not found".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
