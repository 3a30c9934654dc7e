//! HTTP handlers and route configuration.

mod accounts;
mod auth;
mod events;
mod health;
mod jobs;
mod stats;

#[cfg(test)]
mod tests;

use actix_web::web;

/// Configure all application routes.
///
/// The flat collection paths are the legacy surface consumed by existing
/// clients; the redesigned auth and admin endpoints live under `/api`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Accounts
        .route("/users", web::get().to(accounts::list_users))
        .route("/user/{id}", web::get().to(accounts::get_user))
        .route("/user/{id}", web::patch().to(accounts::update_user))
        .route("/userVerify/{id}", web::patch().to(accounts::verify_user))
        .route("/userRemove/{id}", web::delete().to(accounts::remove_user))
        // Job postings
        .route("/jobs", web::post().to(jobs::create_job))
        .route("/jobs", web::get().to(jobs::list_jobs))
        .route("/jobApprove/{id}", web::patch().to(jobs::approve_job))
        .route("/jobComment/{id}", web::patch().to(jobs::comment_job))
        .route("/jobRemove/{id}", web::delete().to(jobs::remove_job))
        // Event postings
        .route("/events", web::post().to(events::create_event))
        .route("/events", web::get().to(events::list_events))
        .route("/eventApprove/{id}", web::patch().to(events::approve_event))
        .route("/eventComment/{id}", web::patch().to(events::comment_event))
        .route("/eventRemove/{id}", web::delete().to(events::remove_event))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .route("/admin/stats", web::get().to(stats::admin_stats))
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register))
                        .route("/login", web::post().to(auth::login))
                        .route("/me", web::get().to(auth::me)),
                ),
        );
}
