//! Authentication handlers.
//!
//! Credentials are verified server-side against Argon2 hashes and a bearer
//! token is issued on success; unverified accounts are refused until an
//! admin approves them.

use actix_web::{HttpResponse, web};
use serde::Serialize;
use std::sync::Arc;

use alumnet_core::domain::{Academics, Account, Role};
use alumnet_core::ports::{PasswordService, TokenService};
use alumnet_shared::dto::{AccountDoc, AuthResponse, LoginRequest, RegisterRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    if req.roll_no.is_empty() || req.department.is_empty() {
        return Err(AppError::BadRequest(
            "Roll number and department are required".to_string(),
        ));
    }

    // Check if the email is already registered
    if state.accounts.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    // Roll numbers are unique within a department
    if state
        .accounts
        .find_by_roll_no(&req.roll_no, &req.department)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(
            "Roll number already registered for this department".to_string(),
        ));
    }

    // Hash password
    let password_hash = password_service
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // Create the account; it stays out of the directory until approved.
    let mut account = Account::register(req.name, req.email, password_hash, Academics {
        roll_no: req.roll_no,
        series: req.series,
        section: req.section,
        department: req.department,
        passing_year: req.passing_year,
    });
    account.contact_no = req.contact_no;
    account.address = req.address;

    let saved = state.accounts.save(account).await?;
    tracing::info!(account_id = %saved.id, "Alumni account registered, pending verification");

    Ok(HttpResponse::Created().json(AccountDoc::from(saved)))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Find the account by email
    let account = state
        .accounts
        .find_by_email(&req.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    // Alumni logins present a roll number; it must match.
    if account.role == Role::Alumni {
        match req.roll_no.as_deref() {
            Some(roll_no) if roll_no == account.roll_no => {}
            _ => return Err(AppError::Unauthorized),
        }
    }

    // Verify password
    let valid = password_service
        .verify(&req.password, &account.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized);
    }

    // Correct credentials, but the account still awaits moderation.
    if !account.verified {
        return Err(alumnet_core::DomainError::PendingVerification.into());
    }

    // Generate token
    let token = token_service
        .generate_token(account.id, &account.email, account.role)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds() as u64,
        account: AccountDoc::from(account),
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MeResponse {
    account_id: String,
    email: String,
    role: Role,
}

/// GET /api/auth/me - Protected route
pub async fn me(identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(MeResponse {
        account_id: identity.account_id.to_string(),
        email: identity.email,
        role: identity.role,
    }))
}
