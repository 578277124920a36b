//! In-memory `GalleryStore` that records every call it receives.
//!
//! Mirrors the ownership semantics of the SQL in `GalleryRepo` closely enough
//! to drive `GalleryAccess` without a database.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use atelier_core::gallery::GalleryFilters;
use atelier_core::pagination::RowRange;
use atelier_core::status::GalleryStatus;
use atelier_core::types::{DbId, Timestamp, UserId};
use atelier_db::models::gallery::{CreateGallery, Gallery, ProjectSummary, UpdateGallery};
use atelier_db::GalleryStore;
use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    List {
        owner: UserId,
        filters: GalleryFilters,
        range: RowRange,
    },
    FindById(DbId),
    FindByProject(DbId),
    IsOwned(DbId),
    Insert(DbId),
    Update(DbId),
    Delete(DbId),
}

/// How the next calls should misbehave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Failure {
    #[default]
    None,
    /// Every call returns a transport-style error.
    Transport,
    /// Single-row fetches report the driver's "no rows" error.
    NoRows,
}

#[derive(Debug, Clone)]
struct StoredProject {
    id: DbId,
    user_id: UserId,
    title: String,
    status: String,
}

#[derive(Debug, Clone)]
struct StoredGallery {
    id: DbId,
    project_id: DbId,
    status: GalleryStatus,
    metadata: serde_json::Value,
    created_at: Timestamp,
    updated_at: Timestamp,
}

#[derive(Default)]
pub struct MemoryStore {
    projects: Mutex<Vec<StoredProject>>,
    galleries: Mutex<Vec<StoredGallery>>,
    calls: Mutex<Vec<StoreCall>>,
    failure: Mutex<Failure>,
    clock: Mutex<i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_project(&self, user_id: UserId, title: &str) -> DbId {
        let id = Uuid::new_v4();
        self.projects.lock().unwrap().push(StoredProject {
            id,
            user_id,
            title: title.to_string(),
            status: "active".to_string(),
        });
        id
    }

    /// Insert a gallery directly, bypassing the call log.
    pub fn add_gallery(&self, project_id: DbId, status: GalleryStatus) -> DbId {
        let id = Uuid::new_v4();
        let now = self.tick();
        self.galleries.lock().unwrap().push(StoredGallery {
            id,
            project_id,
            status,
            metadata: serde_json::json!({}),
            created_at: now,
            updated_at: now,
        });
        id
    }

    pub fn gallery_status(&self, id: DbId) -> Option<GalleryStatus> {
        self.galleries
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.status)
    }

    pub fn gallery_count(&self) -> usize {
        self.galleries.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fail_with(&self, failure: Failure) {
        *self.failure.lock().unwrap() = failure;
    }

    fn tick(&self) -> Timestamp {
        let mut clock = self.clock.lock().unwrap();
        *clock += 1;
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(*clock)
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn failure(&self) -> Failure {
        *self.failure.lock().unwrap()
    }

    fn transport_error() -> sqlx::Error {
        sqlx::Error::Protocol("simulated connection reset".to_string())
    }

    fn owner_of(&self, project_id: DbId) -> Option<UserId> {
        self.projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == project_id)
            .map(|p| p.user_id)
    }

    fn owned_by(&self, gallery: &StoredGallery, owner: UserId) -> bool {
        self.owner_of(gallery.project_id) == Some(owner)
    }

    fn joined(&self, gallery: &StoredGallery) -> Gallery {
        let projects = self.projects.lock().unwrap();
        let project = projects
            .iter()
            .find(|p| p.id == gallery.project_id)
            .expect("gallery references a known project");
        Gallery {
            id: gallery.id,
            project_id: gallery.project_id,
            status: gallery.status,
            metadata: gallery.metadata.clone(),
            created_at: gallery.created_at,
            updated_at: gallery.updated_at,
            project: ProjectSummary {
                id: project.id,
                title: project.title.clone(),
                status: project.status.clone(),
            },
        }
    }

    fn single(&self, found: Option<Gallery>) -> Result<Option<Gallery>, sqlx::Error> {
        match (self.failure(), found) {
            (Failure::Transport, _) => Err(Self::transport_error()),
            (Failure::NoRows, None) => Err(sqlx::Error::RowNotFound),
            (_, found) => Ok(found),
        }
    }
}

#[async_trait]
impl GalleryStore for MemoryStore {
    async fn list_owned(
        &self,
        owner: UserId,
        filters: &GalleryFilters,
        range: RowRange,
    ) -> Result<Vec<Gallery>, sqlx::Error> {
        self.record(StoreCall::List {
            owner,
            filters: filters.clone(),
            range,
        });
        if self.failure() == Failure::Transport {
            return Err(Self::transport_error());
        }

        let mut matching: Vec<StoredGallery> = self
            .galleries
            .lock()
            .unwrap()
            .iter()
            .filter(|g| filters.status.map_or(true, |s| g.status == s))
            .filter(|g| filters.project_id.map_or(true, |p| g.project_id == p))
            .cloned()
            .collect();
        matching.retain(|g| self.owned_by(g, owner));
        matching.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        Ok(matching
            .iter()
            .skip(range.offset() as usize)
            .take(range.limit() as usize)
            .map(|g| self.joined(g))
            .collect())
    }

    async fn find_owned(&self, owner: UserId, id: DbId) -> Result<Option<Gallery>, sqlx::Error> {
        self.record(StoreCall::FindById(id));
        let stored = self
            .galleries
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == id)
            .cloned();
        let found = stored
            .filter(|g| self.owned_by(g, owner))
            .map(|g| self.joined(&g));
        self.single(found)
    }

    async fn find_owned_by_project(
        &self,
        owner: UserId,
        project_id: DbId,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        self.record(StoreCall::FindByProject(project_id));
        let stored = self
            .galleries
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.project_id == project_id)
            .max_by_key(|g| (g.created_at, g.id))
            .cloned();
        let found = stored
            .filter(|g| self.owned_by(g, owner))
            .map(|g| self.joined(&g));
        self.single(found)
    }

    async fn is_owned(&self, owner: UserId, id: DbId) -> Result<bool, sqlx::Error> {
        self.record(StoreCall::IsOwned(id));
        if self.failure() == Failure::Transport {
            return Err(Self::transport_error());
        }
        let stored = self
            .galleries
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == id)
            .cloned();
        Ok(stored.is_some_and(|g| self.owned_by(&g, owner)))
    }

    async fn insert(&self, input: &CreateGallery) -> Result<Gallery, sqlx::Error> {
        if self.failure() == Failure::Transport {
            return Err(Self::transport_error());
        }
        if self.owner_of(input.project_id).is_none() {
            return Err(sqlx::Error::Protocol(
                "violates foreign key constraint galleries_project_id_fkey".to_string(),
            ));
        }
        let now = self.tick();
        let stored = StoredGallery {
            id: Uuid::new_v4(),
            project_id: input.project_id,
            status: input.status,
            metadata: input
                .metadata
                .clone()
                .unwrap_or_else(|| serde_json::json!({})),
            created_at: now,
            updated_at: now,
        };
        self.record(StoreCall::Insert(stored.id));
        self.galleries.lock().unwrap().push(stored.clone());
        Ok(self.joined(&stored))
    }

    async fn update_owned(
        &self,
        owner: UserId,
        id: DbId,
        input: &UpdateGallery,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        self.record(StoreCall::Update(id));
        if self.failure() == Failure::Transport {
            return Err(Self::transport_error());
        }
        if let Some(target) = input.project_id {
            if self.owner_of(target) != Some(owner) {
                return Ok(None);
            }
        }
        let now = self.tick();
        let updated = {
            let mut galleries = self.galleries.lock().unwrap();
            let Some(gallery) = galleries.iter_mut().find(|g| g.id == id) else {
                return Ok(None);
            };
            if self.owner_of(gallery.project_id) != Some(owner) {
                return Ok(None);
            }
            if let Some(project_id) = input.project_id {
                gallery.project_id = project_id;
            }
            if let Some(status) = input.status {
                gallery.status = status;
            }
            if let Some(metadata) = &input.metadata {
                gallery.metadata = metadata.clone();
            }
            gallery.updated_at = now;
            gallery.clone()
        };
        Ok(Some(self.joined(&updated)))
    }

    async fn delete_owned(&self, owner: UserId, id: DbId) -> Result<bool, sqlx::Error> {
        self.record(StoreCall::Delete(id));
        if self.failure() == Failure::Transport {
            return Err(Self::transport_error());
        }
        let mut galleries = self.galleries.lock().unwrap();
        let before = galleries.len();
        let projects = self.projects.lock().unwrap();
        galleries.retain(|g| {
            let owned = projects
                .iter()
                .any(|p| p.id == g.project_id && p.user_id == owner);
            !(g.id == id && owned)
        });
        Ok(galleries.len() < before)
    }
}
