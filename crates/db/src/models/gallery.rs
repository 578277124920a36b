//! Gallery entity model and DTOs.

use atelier_core::status::GalleryStatus;
use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A gallery joined with a summary of its parent project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gallery {
    pub id: DbId,
    pub project_id: DbId,
    pub status: GalleryStatus,
    /// Free-form attributes; stored as JSONB and never interpreted here.
    pub metadata: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub project: ProjectSummary,
}

/// The project fields returned alongside every gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub id: DbId,
    pub title: String,
    pub status: String,
}

/// Flat row produced by the `galleries JOIN projects` select.
#[derive(Debug, FromRow)]
pub(crate) struct GalleryRow {
    pub id: DbId,
    pub project_id: DbId,
    #[sqlx(try_from = "String")]
    pub status: GalleryStatus,
    pub metadata: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub project_title: String,
    pub project_status: String,
}

impl From<GalleryRow> for Gallery {
    fn from(row: GalleryRow) -> Self {
        Self {
            id: row.id,
            project_id: row.project_id,
            status: row.status,
            metadata: row.metadata,
            created_at: row.created_at,
            updated_at: row.updated_at,
            project: ProjectSummary {
                id: row.project_id,
                title: row.project_title,
                status: row.project_status,
            },
        }
    }
}

/// DTO for creating a gallery. Id and timestamps are generated by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGallery {
    pub project_id: DbId,
    pub status: GalleryStatus,
    /// Defaults to an empty object if omitted.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// DTO for updating an existing gallery. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGallery {
    /// Moves the gallery; the target project must belong to the same user.
    pub project_id: Option<DbId>,
    pub status: Option<GalleryStatus>,
    /// Replaces the whole metadata object.
    pub metadata: Option<serde_json::Value>,
}
