//! Admin dashboard counts.

use std::time::Duration;

use actix_web::{HttpResponse, web};

use alumnet_core::moderation::QueuePartition;
use alumnet_shared::dto::StatsResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

const STATS_CACHE_KEY: &str = "admin.stats";
const STATS_CACHE_TTL: Duration = Duration::from_secs(30);

/// GET /api/admin/stats - pending/verified counts per entity kind.
///
/// Counts are derived from the same fetch-all + partition the moderation
/// queues use, so the dashboard always agrees with the queue views. Briefly
/// cached; the dashboard tolerates 30s of staleness.
pub async fn admin_stats(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    identity.require_admin()?;

    if let Some(cached) = state.cache.get(STATS_CACHE_KEY).await {
        if let Ok(stats) = serde_json::from_str::<StatsResponse>(&cached) {
            return Ok(HttpResponse::Ok().json(stats));
        }
    }

    let accounts = QueuePartition::partition(state.accounts.list_all().await?);
    let jobs = QueuePartition::partition(state.jobs.list_all().await?);
    let events = QueuePartition::partition(state.events.list_all().await?);

    let stats = StatsResponse {
        total_accounts: accounts.len() as u64,
        pending_accounts: accounts.pending.len() as u64,
        verified_accounts: accounts.verified.len() as u64,
        total_jobs: jobs.len() as u64,
        pending_jobs: jobs.pending.len() as u64,
        verified_jobs: jobs.verified.len() as u64,
        total_events: events.len() as u64,
        pending_events: events.pending.len() as u64,
        verified_events: events.verified.len() as u64,
    };

    if let Ok(raw) = serde_json::to_string(&stats) {
        if let Err(e) = state
            .cache
            .set(STATS_CACHE_KEY, &raw, Some(STATS_CACHE_TTL))
            .await
        {
            tracing::warn!("Failed to cache admin stats: {}", e);
        }
    }

    Ok(HttpResponse::Ok().json(stats))
}
