//! Query-side values for gallery listing.

use serde::Deserialize;

use crate::status::GalleryStatus;
use crate::types::DbId;

/// Optional narrowing applied to a gallery listing.
///
/// A `None` field means "no constraint", never "match empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GalleryFilters {
    pub status: Option<GalleryStatus>,
    pub project_id: Option<DbId>,
}

impl GalleryFilters {
    /// Keep only galleries with the given status.
    pub fn with_status(mut self, status: GalleryStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Keep only galleries attached to the given project.
    pub fn with_project(mut self, project_id: DbId) -> Self {
        self.project_id = Some(project_id);
        self
    }
}
