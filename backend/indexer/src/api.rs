//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::db;
use crate::errors::{IndexerError, Result};
use crate::events::EventRecord;

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CampaignEventsResponse {
    pub campaign_id: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for IndexerError {
    fn into_response(self) -> Response {
        error!("API request failed: {self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/events", get(get_all_events))
        .route("/campaigns/:id/events", get(get_campaign_events))
        .route("/campaigns/:id/donations", get(get_campaign_donations))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /campaigns/:id/events`
pub async fn get_campaign_events(
    State(state): State<Arc<ApiState>>,
    Path(campaign_id): Path<String>,
) -> Result<Json<CampaignEventsResponse>> {
    let events = db::get_events_for_campaign(&state.pool, &campaign_id).await?;
    Ok(Json(CampaignEventsResponse {
        campaign_id,
        count: events.len(),
        events,
    }))
}

/// `GET /campaigns/:id/donations`
///
/// Only `donation_received` events, oldest first.
pub async fn get_campaign_donations(
    State(state): State<Arc<ApiState>>,
    Path(campaign_id): Path<String>,
) -> Result<Json<CampaignEventsResponse>> {
    let events = db::get_donations_for_campaign(&state.pool, &campaign_id).await?;
    Ok(Json(CampaignEventsResponse {
        campaign_id,
        count: events.len(),
        events,
    }))
}

/// `GET /events`
pub async fn get_all_events(State(state): State<Arc<ApiState>>) -> Result<Json<AllEventsResponse>> {
    let events = db::get_all_events(&state.pool).await?;
    Ok(Json(AllEventsResponse {
        count: events.len(),
        events,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{CampaignEvent, EventKind};
    use serde_json::Value;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn serve(pool: SqlitePool) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(Arc::new(ApiState { pool }));
        tokio::spawn(async move { axum::serve(listener, app).await });
        format!("http://{addr}")
    }

    async fn seeded_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        db::migrate(&pool).await.unwrap();

        let event = |kind: EventKind, campaign: &str, actor: Option<&str>, ledger: i64| {
            CampaignEvent {
                event_id: format!("{ledger}-{}", kind.as_str()),
                event_type: kind.as_str().to_string(),
                campaign_id: Some(campaign.to_string()),
                actor: actor.map(String::from),
                amount: Some("10".to_string()),
                ledger,
                timestamp: 1_700_000_000 + ledger,
                contract_id: "CONTRACT1".to_string(),
                tx_hash: None,
            }
        };
        db::insert_events(
            &pool,
            &[
                event(EventKind::CampaignCreated, "7", Some("GCREATOR"), 1),
                event(EventKind::DonationReceived, "7", Some("GDONOR"), 2),
                event(EventKind::GoalReached, "7", None, 2),
                event(EventKind::DonationReceived, "8", Some("GOTHER"), 3),
            ],
        )
        .await
        .unwrap();
        pool
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let base = serve(seeded_pool().await).await;

        let body: Value = reqwest::get(format!("{base}/health"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn donations_route_returns_only_that_campaigns_donations() {
        let base = serve(seeded_pool().await).await;

        let resp = reqwest::get(format!("{base}/campaigns/7/donations"))
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["campaign_id"], "7");
        assert_eq!(body["count"], 1);
        assert_eq!(body["events"][0]["event_type"], "donation_received");
        assert_eq!(body["events"][0]["actor"], "GDONOR");
    }

    #[tokio::test]
    async fn campaign_events_route_lists_every_kind() {
        let base = serve(seeded_pool().await).await;

        let body: Value = reqwest::get(format!("{base}/campaigns/7/events"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["count"], 3);
        let all: Value = reqwest::get(format!("{base}/events"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(all["count"], 4);
    }
}
