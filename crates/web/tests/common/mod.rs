#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
};
use chrono::{NaiveDate, NaiveDateTime};
use matchpool_web::{AppState, routes};
use serde_json::Value;
use storage::{
    MatchRepository, PredictionRepository,
    error::{Result, StorageError},
    models::{Match, MatchId, Prediction, ScoreLine},
    repository::{InMemoryMatchRepository, InMemoryPredictionRepository},
};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub matches: Arc<InMemoryMatchRepository>,
    pub predictions: Arc<InMemoryPredictionRepository>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }
}

pub fn kickoff(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Opening fixtures, deliberately stored out of schedule order.
pub fn opening_fixtures() -> Vec<Match> {
    vec![
        Match::scheduled("3", "Spain", "Croatia", kickoff(15, 18)),
        Match::scheduled("1", "Germany", "Scotland", kickoff(14, 21)),
        Match::scheduled("2", "Hungary", "Switzerland", kickoff(15, 15)),
    ]
}

pub fn spawn_app() -> TestApp {
    let matches = Arc::new(InMemoryMatchRepository::with_matches(opening_fixtures()));
    let predictions = Arc::new(InMemoryPredictionRepository::new());
    let router = routes::router(AppState::new(matches.clone(), predictions.clone()));

    TestApp {
        router,
        matches,
        predictions,
    }
}

/// App whose match store fails every call
pub fn spawn_app_with_broken_store() -> Router {
    routes::router(AppState::new(
        Arc::new(UnavailableMatchStore),
        Arc::new(InMemoryPredictionRepository::new()),
    ))
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request");

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn post_raw(router: &Router, path: &str, body: impl Into<Body>) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    send(router, request).await
}

impl TestApp {
    pub async fn action(&self, body: Value) -> TestResponse {
        post_raw(&self.router, "/", body.to_string()).await
    }

    pub async fn stored_match(&self, id: &str) -> Match {
        self.matches
            .get(&MatchId::new(id))
            .await
            .unwrap()
            .expect("Match is missing from the store")
    }

    pub async fn stored_prediction(&self, user_id: &str, id: &str) -> Option<Prediction> {
        self.predictions.get(user_id, &MatchId::new(id)).await.unwrap()
    }
}

pub struct UnavailableMatchStore;

#[async_trait]
impl MatchRepository for UnavailableMatchStore {
    async fn get_all(&self) -> Result<Vec<Match>> {
        Err(StorageError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn get(&self, _match_id: &MatchId) -> Result<Option<Match>> {
        Err(StorageError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn put(&self, _game: &Match) -> Result<()> {
        Err(StorageError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn update_result(&self, _match_id: &MatchId, _result: ScoreLine) -> Result<Match> {
        Err(StorageError::Database(sqlx::Error::PoolTimedOut))
    }
}
