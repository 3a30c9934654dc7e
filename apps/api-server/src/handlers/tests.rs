//! Handler-level scenario tests driving the full router over the in-memory
//! repositories.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, Error, test, web};
use serde_json::json;
use uuid::Uuid;

use alumnet_core::moderation::QueuePartition;
use alumnet_core::ports::{PasswordService, TokenService};
use alumnet_infra::auth::JwtConfig;
use alumnet_infra::{Argon2PasswordService, JwtTokenService};
use alumnet_shared::dto::{
    AccountDoc, AuthResponse, CreateResult, EventDoc, JobDoc, StatsResponse, UpdateResult,
};

use crate::config::AdminBootstrap;
use crate::handlers::configure_routes;
use crate::state::AppState;

const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "admin-password";

struct TestContext {
    state: AppState,
    token_service: Arc<dyn TokenService>,
    password_service: Arc<dyn PasswordService>,
}

impl TestContext {
    async fn new() -> Self {
        let state = AppState::in_memory();
        let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
            issuer: "test-issuer".to_string(),
        }));
        let password_service: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        state
            .bootstrap_admin(
                &AdminBootstrap {
                    email: ADMIN_EMAIL.to_string(),
                    password: ADMIN_PASSWORD.to_string(),
                },
                password_service.as_ref(),
            )
            .await
            .unwrap();

        Self {
            state,
            token_service,
            password_service,
        }
    }

    async fn app(
        &self,
    ) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = Error> {
        test::init_service(
            App::new()
                .app_data(web::Data::new(self.state.clone()))
                .app_data(web::Data::new(self.token_service.clone()))
                .app_data(web::Data::new(self.password_service.clone()))
                .configure(configure_routes),
        )
        .await
    }
}

fn register_body(email: &str, roll_no: &str, department: &str) -> serde_json::Value {
    json!({
        "name": "Jane Doe",
        "email": email,
        "password": "secret-password",
        "rollNo": roll_no,
        "series": "17",
        "section": "A",
        "department": department,
        "passingYear": 2021,
    })
}

async fn login(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
    email: &str,
    password: &str,
    roll_no: Option<&str>,
) -> AuthResponse {
    let mut body = json!({ "email": email, "password": password });
    if let Some(roll_no) = roll_no {
        body["rollNo"] = json!(roll_no);
    }
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(&body)
        .to_request();
    test::call_and_read_body_json(app, req).await
}

async fn admin_token(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
) -> String {
    login(app, ADMIN_EMAIL, ADMIN_PASSWORD, None).await.access_token
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

/// Register an alumni account and approve it, returning a usable token.
async fn verified_alumni(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
    email: &str,
    roll_no: &str,
) -> AuthResponse {
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body(email, roll_no, "CSE"))
        .to_request();
    let account: AccountDoc = test::call_and_read_body_json(app, req).await;

    let token = admin_token(app).await;
    let req = test::TestRequest::patch()
        .uri(&format!("/userVerify/{}", account.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success());

    login(app, email, "secret-password", Some(roll_no)).await
}

#[actix_web::test]
async fn health_check_is_public() {
    let ctx = TestContext::new().await;
    let app = ctx.app().await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn registration_lands_in_pending_queue_and_approval_moves_it() {
    let ctx = TestContext::new().await;
    let app = ctx.app().await;

    // Register: rollNo 1701001, department CSE, starts unverified.
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body("jane@example.com", "1701001", "CSE"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let account: AccountDoc = test::read_body_json(resp).await;
    assert!(!account.is_verified);

    // Fetch-all, partition client-side: the account is pending.
    let req = test::TestRequest::get().uri("/users").to_request();
    let accounts: Vec<AccountDoc> = test::call_and_read_body_json(&app, req).await;
    let queue = QueuePartition::partition(accounts);
    assert!(queue.pending.iter().any(|a| a.id == account.id));

    // Correct credentials are refused while pending.
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "email": "jane@example.com",
            "password": "secret-password",
            "rollNo": "1701001",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    // Admin approves.
    let token = admin_token(&app).await;
    let req = test::TestRequest::patch()
        .uri(&format!("/userVerify/{}", account.id))
        .insert_header(bearer(&token))
        .to_request();
    let result: UpdateResult = test::call_and_read_body_json(&app, req).await;
    assert_eq!(result.modified_count, 1);

    // Approving again is a server-side no-op.
    let req = test::TestRequest::patch()
        .uri(&format!("/userVerify/{}", account.id))
        .insert_header(bearer(&token))
        .to_request();
    let result: UpdateResult = test::call_and_read_body_json(&app, req).await;
    assert_eq!(result.matched_count, 1);
    assert_eq!(result.modified_count, 0);

    // Now verified: present in the CSE directory, absent from pending.
    let req = test::TestRequest::get().uri("/users").to_request();
    let accounts: Vec<AccountDoc> = test::call_and_read_body_json(&app, req).await;
    let queue = QueuePartition::partition(accounts);
    assert!(queue.pending.iter().all(|a| a.id != account.id));
    assert!(
        queue
            .verified
            .iter()
            .any(|a| a.id == account.id && a.department == "CSE")
    );

    // And login succeeds.
    let auth = login(&app, "jane@example.com", "secret-password", Some("1701001")).await;
    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(bearer(&auth.access_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn duplicate_email_and_roll_number_are_rejected() {
    let ctx = TestContext::new().await;
    let app = ctx.app().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body("jane@example.com", "1701001", "CSE"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    // Same email.
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body("jane@example.com", "1701002", "CSE"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 409);

    // Same roll number in the same department.
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body("other@example.com", "1701001", "CSE"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 409);

    // Same roll number in another department is fine.
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body("third@example.com", "1701001", "EEE"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);
}

#[actix_web::test]
async fn job_posting_is_hidden_until_approved() {
    let ctx = TestContext::new().await;
    let app = ctx.app().await;
    let alumni = verified_alumni(&app, "jane@example.com", "1701001").await;

    let req = test::TestRequest::post()
        .uri("/jobs")
        .insert_header(bearer(&alumni.access_token))
        .set_json(json!({
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Dhaka",
            "type": "Full-time",
            "description": "Build services",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let created: CreateResult = test::read_body_json(resp).await;

    // Present in the fetch-all, but the public board filter excludes it.
    let req = test::TestRequest::get().uri("/jobs").to_request();
    let jobs: Vec<JobDoc> = test::call_and_read_body_json(&app, req).await;
    assert!(jobs.iter().any(|j| j.id == created.inserted_id));
    let visible: Vec<&JobDoc> = jobs.iter().filter(|j| j.is_verified).collect();
    assert!(visible.iter().all(|j| j.id != created.inserted_id));
    // The poster's name was denormalized server-side.
    assert_eq!(
        jobs.iter()
            .find(|j| j.id == created.inserted_id)
            .unwrap()
            .posted_by,
        "Jane Doe"
    );

    // Approve, then it appears on the board.
    let token = admin_token(&app).await;
    let req = test::TestRequest::patch()
        .uri(&format!("/jobApprove/{}", created.inserted_id))
        .insert_header(bearer(&token))
        .to_request();
    let result: UpdateResult = test::call_and_read_body_json(&app, req).await;
    assert_eq!(result.modified_count, 1);

    let req = test::TestRequest::get().uri("/jobs").to_request();
    let jobs: Vec<JobDoc> = test::call_and_read_body_json(&app, req).await;
    assert!(
        jobs.iter()
            .any(|j| j.id == created.inserted_id && j.is_verified)
    );
}

#[actix_web::test]
async fn rejected_job_never_reappears() {
    let ctx = TestContext::new().await;
    let app = ctx.app().await;
    let alumni = verified_alumni(&app, "jane@example.com", "1701001").await;

    let req = test::TestRequest::post()
        .uri("/jobs")
        .insert_header(bearer(&alumni.access_token))
        .set_json(json!({
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Dhaka",
            "type": "Full-time",
            "description": "Build services",
        }))
        .to_request();
    let created: CreateResult = test::call_and_read_body_json(&app, req).await;

    let token = admin_token(&app).await;
    let req = test::TestRequest::delete()
        .uri(&format!("/jobRemove/{}", created.inserted_id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get().uri("/jobs").to_request();
    let jobs: Vec<JobDoc> = test::call_and_read_body_json(&app, req).await;
    assert!(jobs.iter().all(|j| j.id != created.inserted_id));

    // Deleting again resolves nothing.
    let req = test::TestRequest::delete()
        .uri(&format!("/jobRemove/{}", created.inserted_id))
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
async fn sequential_event_comments_preserve_order() {
    let ctx = TestContext::new().await;
    let app = ctx.app().await;
    let alumni = verified_alumni(&app, "jane@example.com", "1701001").await;

    let req = test::TestRequest::post()
        .uri("/events")
        .insert_header(bearer(&alumni.access_token))
        .set_json(json!({
            "name": "Annual Reunion",
            "date": "2024-06-01",
            "time": "18:30",
            "location": "Auditorium",
            "type": "Reunion",
            "description": "All series welcome",
        }))
        .to_request();
    let created: CreateResult = test::call_and_read_body_json(&app, req).await;

    for text in ["Great event!", "See you there"] {
        let req = test::TestRequest::patch()
            .uri(&format!("/eventComment/{}", created.inserted_id))
            .insert_header(bearer(&alumni.access_token))
            .set_json(json!({ "text": text, "authorName": "Jane Doe" }))
            .to_request();
        let result: UpdateResult = test::call_and_read_body_json(&app, req).await;
        assert_eq!(result.modified_count, 1);
    }

    let req = test::TestRequest::get().uri("/events").to_request();
    let events: Vec<EventDoc> = test::call_and_read_body_json(&app, req).await;
    let event = events.iter().find(|e| e.id == created.inserted_id).unwrap();
    assert_eq!(event.comments.len(), 2);
    assert_eq!(event.comments[0].text, "Great event!");
    assert_eq!(event.comments[1].text, "See you there");
    // The author email comes from the token, not the body.
    assert_eq!(event.comments[0].author_email, "jane@example.com");

    // Commenting on a missing event is a 404.
    let req = test::TestRequest::patch()
        .uri(&format!("/eventComment/{}", Uuid::new_v4()))
        .insert_header(bearer(&alumni.access_token))
        .set_json(json!({ "text": "lost", "authorName": "Jane Doe" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
async fn moderation_endpoints_require_admin() {
    let ctx = TestContext::new().await;
    let app = ctx.app().await;
    let alumni = verified_alumni(&app, "jane@example.com", "1701001").await;

    // No token.
    let req = test::TestRequest::patch()
        .uri(&format!("/jobApprove/{}", Uuid::new_v4()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);

    // Alumni token.
    let req = test::TestRequest::patch()
        .uri(&format!("/jobApprove/{}", Uuid::new_v4()))
        .insert_header(bearer(&alumni.access_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);

    // Admin token against a missing record is a 404, not a permission error.
    let token = admin_token(&app).await;
    let req = test::TestRequest::patch()
        .uri(&format!("/jobApprove/{}", Uuid::new_v4()))
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
async fn profile_update_cannot_touch_protected_fields() {
    let ctx = TestContext::new().await;
    let app = ctx.app().await;
    let alumni = verified_alumni(&app, "jane@example.com", "1701001").await;

    // Addressed by email; protected fields in the body are ignored.
    let req = test::TestRequest::patch()
        .uri("/user/jane@example.com")
        .insert_header(bearer(&alumni.access_token))
        .set_json(json!({
            "bio": "Hello there",
            "role": "admin",
            "isVerified": false,
            "email": "hijack@example.com",
        }))
        .to_request();
    let result: UpdateResult = test::call_and_read_body_json(&app, req).await;
    assert_eq!(result.modified_count, 1);

    let req = test::TestRequest::get()
        .uri("/user/jane@example.com")
        .to_request();
    let account: AccountDoc = test::call_and_read_body_json(&app, req).await;
    assert_eq!(account.bio.as_deref(), Some("Hello there"));
    assert_eq!(account.role, alumnet_core::domain::Role::Alumni);
    assert!(account.is_verified);
    assert_eq!(account.email, "jane@example.com");

    // Another alumni cannot edit someone else's profile.
    let other = verified_alumni(&app, "other@example.com", "1701002").await;
    let req = test::TestRequest::patch()
        .uri("/user/jane@example.com")
        .insert_header(bearer(&other.access_token))
        .set_json(json!({ "bio": "defaced" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);
}

#[actix_web::test]
async fn admin_stats_agree_with_partition_sizes() {
    let ctx = TestContext::new().await;
    let app = ctx.app().await;
    let alumni = verified_alumni(&app, "jane@example.com", "1701001").await;

    // One extra pending registration and one pending job.
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body("pending@example.com", "1701002", "CSE"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::post()
        .uri("/jobs")
        .insert_header(bearer(&alumni.access_token))
        .set_json(json!({
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Dhaka",
            "type": "Full-time",
            "description": "Build services",
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let token = admin_token(&app).await;
    let req = test::TestRequest::get()
        .uri("/api/admin/stats")
        .insert_header(bearer(&token))
        .to_request();
    let stats: StatsResponse = test::call_and_read_body_json(&app, req).await;

    // Admin + verified alumni + pending registration.
    assert_eq!(stats.total_accounts, 3);
    assert_eq!(stats.pending_accounts, 1);
    assert_eq!(stats.verified_accounts, 2);
    assert_eq!(stats.total_jobs, 1);
    assert_eq!(stats.pending_jobs, 1);
    assert_eq!(stats.total_events, 0);

    // Stats are admin-only.
    let req = test::TestRequest::get()
        .uri("/api/admin/stats")
        .insert_header(bearer(&alumni.access_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);
}

#[actix_web::test]
async fn pending_account_cannot_post() {
    let ctx = TestContext::new().await;
    let app = ctx.app().await;

    // Registered but never approved; mint a token directly to probe the
    // posting guard.
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body("pending@example.com", "1701009", "CSE"))
        .to_request();
    let account: AccountDoc = test::call_and_read_body_json(&app, req).await;
    let token = ctx
        .token_service
        .generate_token(account.id, &account.email, account.role)
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/jobs")
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Dhaka",
            "type": "Full-time",
            "description": "Build services",
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);
}
