//! Shared fixtures for REST API tests.
//!
//! The router is wired to in-memory repositories that enforce the same
//! foreign keys and cascades as the MySQL schema.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use nzwalks_config::ServerConfig;
use nzwalks_core::{
    Difficulty, DifficultyId, NzWalksError, NzWalksResult, Region, RegionDraft, RegionId, Walk, WalkDraft, WalkId,
};
use nzwalks_repository::{DifficultyRepository, RegionRepository, WalkRepository};
use nzwalks_rest::{build_router, AppState};
use nzwalks_service::{DifficultyServiceComponent, RegionServiceComponent, WalkServiceComponent};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
struct Tables {
    regions: BTreeMap<RegionId, Region>,
    walks: BTreeMap<WalkId, Walk>,
}

/// In-memory storage shared by the three repositories.
#[derive(Clone)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    difficulties: Arc<Vec<Difficulty>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(Mutex::new(Tables::default())),
            difficulties: Arc::new(Difficulty::seeded()),
        }
    }

    fn difficulty(&self, id: DifficultyId) -> Option<Difficulty> {
        self.difficulties.iter().find(|d| d.id == id).cloned()
    }

    fn resolve(&self, tables: &Tables, walk: &Walk) -> Walk {
        walk.clone().with_relations(
            tables.regions.get(&walk.region_id).cloned(),
            self.difficulty(walk.difficulty_id),
        )
    }

    fn check_references(&self, tables: &Tables, draft: &WalkDraft) -> NzWalksResult<()> {
        if !tables.regions.contains_key(&draft.region_id) {
            return Err(NzWalksError::referential_integrity(format!(
                "Region {} does not exist",
                draft.region_id
            )));
        }
        if self.difficulty(draft.difficulty_id).is_none() {
            return Err(NzWalksError::referential_integrity(format!(
                "Difficulty {} does not exist",
                draft.difficulty_id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl RegionRepository for MemoryStore {
    async fn get_all(&self) -> NzWalksResult<Vec<Region>> {
        let tables = self.tables.lock().unwrap();
        let mut regions: Vec<Region> = tables.regions.values().cloned().collect();
        regions.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(regions)
    }

    async fn get_by_id(&self, id: RegionId) -> NzWalksResult<Option<Region>> {
        Ok(self.tables.lock().unwrap().regions.get(&id).cloned())
    }

    async fn create(&self, draft: &RegionDraft) -> NzWalksResult<Region> {
        let region = Region::from_draft(RegionId::new(), draft.clone());
        self.tables.lock().unwrap().regions.insert(region.id, region.clone());
        Ok(region)
    }

    async fn update(&self, id: RegionId, draft: &RegionDraft) -> NzWalksResult<Option<Region>> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables.regions.get_mut(&id).map(|region| {
            region.apply(draft.clone());
            region.clone()
        }))
    }

    async fn delete(&self, id: RegionId) -> NzWalksResult<Option<Region>> {
        let mut tables = self.tables.lock().unwrap();
        let removed = tables.regions.remove(&id);
        if removed.is_some() {
            tables.walks.retain(|_, walk| walk.region_id != id);
        }
        Ok(removed)
    }

    async fn count(&self) -> NzWalksResult<u64> {
        Ok(self.tables.lock().unwrap().regions.len() as u64)
    }
}

#[async_trait]
impl WalkRepository for MemoryStore {
    async fn get_all(&self) -> NzWalksResult<Vec<Walk>> {
        let tables = self.tables.lock().unwrap();
        let mut walks: Vec<Walk> = tables.walks.values().map(|w| self.resolve(&tables, w)).collect();
        walks.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(walks)
    }

    async fn get_by_id(&self, id: WalkId) -> NzWalksResult<Option<Walk>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.walks.get(&id).map(|w| self.resolve(&tables, w)))
    }

    async fn create(&self, draft: &WalkDraft) -> NzWalksResult<Walk> {
        let mut tables = self.tables.lock().unwrap();
        self.check_references(&tables, draft)?;

        let walk = Walk::from_draft(WalkId::new(), draft.clone());
        tables.walks.insert(walk.id, walk.clone());
        Ok(self.resolve(&tables, &walk))
    }

    async fn update(&self, id: WalkId, draft: &WalkDraft) -> NzWalksResult<Option<Walk>> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.walks.contains_key(&id) {
            return Ok(None);
        }
        self.check_references(&tables, draft)?;

        let Some(walk) = tables.walks.get_mut(&id) else {
            return Ok(None);
        };
        walk.apply(draft.clone());
        let walk = walk.clone();
        Ok(Some(self.resolve(&tables, &walk)))
    }

    async fn delete(&self, id: WalkId) -> NzWalksResult<Option<Walk>> {
        let mut tables = self.tables.lock().unwrap();
        let removed = tables.walks.remove(&id);
        Ok(removed.map(|w| self.resolve(&tables, &w)))
    }

    async fn count(&self) -> NzWalksResult<u64> {
        Ok(self.tables.lock().unwrap().walks.len() as u64)
    }
}

#[async_trait]
impl DifficultyRepository for MemoryStore {
    async fn get_all(&self) -> NzWalksResult<Vec<Difficulty>> {
        Ok(self.difficulties.to_vec())
    }

    async fn get_by_id(&self, id: DifficultyId) -> NzWalksResult<Option<Difficulty>> {
        Ok(self.difficulty(id))
    }

    async fn count(&self) -> NzWalksResult<u64> {
        Ok(self.difficulties.len() as u64)
    }
}

/// Builds the application router over a fresh in-memory store.
pub fn test_app() -> Router {
    test_app_with(&ServerConfig::default())
}

/// Builds the application router with the given server settings.
pub fn test_app_with(server_config: &ServerConfig) -> Router {
    let store = MemoryStore::new();
    let state = AppState::new(
        Arc::new(RegionServiceComponent::new(Arc::new(store.clone()))),
        Arc::new(WalkServiceComponent::new(Arc::new(store.clone()))),
        Arc::new(DifficultyServiceComponent::new(Arc::new(store))),
    );
    build_router(state, server_config)
}

/// A decoded response.
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// Sends a request through the router.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    send_request(app, request).await
}

/// Sends a prepared request through the router.
pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let location = headers.get(header::LOCATION).map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();

    TestResponse {
        status,
        location,
        headers,
        body,
    }
}

/// Creates a region through the API and returns its JSON.
pub async fn create_region(app: &Router, code: &str, name: &str) -> Value {
    let response = send(
        app,
        Method::POST,
        "/api/regions",
        Some(serde_json::json!({
            "code": code,
            "name": name,
            "regionImageUrl": format!("https://images.example/{}.jpg", code.to_lowercase()),
        })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.json()
}

/// JSON body for a walk in the given region.
pub fn walk_body(name: &str, region_id: &str, difficulty_id: DifficultyId) -> Value {
    serde_json::json!({
        "name": name,
        "description": "A day walk through native bush",
        "lengthInKm": 12.5,
        "walkImageUrl": null,
        "difficultyId": difficulty_id.to_string(),
        "regionId": region_id,
    })
}
