//! Repository for the `galleries` table.
//!
//! Every query joins `projects` and filters on `projects.user_id`, so a row is
//! only ever visible to the user who owns its parent project.

use atelier_core::gallery::GalleryFilters;
use atelier_core::pagination::RowRange;
use atelier_core::status::GalleryStatus;
use atelier_core::types::{DbId, UserId};
use sqlx::PgPool;

use crate::models::gallery::{CreateGallery, Gallery, GalleryRow, UpdateGallery};

/// Select list for a gallery aliased `g` joined to its project aliased `p`.
const COLUMNS: &str = "g.id, g.project_id, g.status, g.metadata, g.created_at, g.updated_at, \
     p.title AS project_title, p.status AS project_status";

/// Provides owner-scoped CRUD operations for galleries.
pub struct GalleryRepo;

impl GalleryRepo {
    /// List one page of galleries owned by `owner`, most recently created first.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner: UserId,
        filters: &GalleryFilters,
        range: RowRange,
    ) -> Result<Vec<Gallery>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM galleries g \
             JOIN projects p ON p.id = g.project_id \
             WHERE p.user_id = $1 \
               AND ($2::TEXT IS NULL OR g.status = $2) \
               AND ($3::UUID IS NULL OR g.project_id = $3) \
             ORDER BY g.created_at DESC, g.id DESC \
             LIMIT $4 OFFSET $5"
        );
        let rows = sqlx::query_as::<_, GalleryRow>(&query)
            .bind(owner)
            .bind(filters.status.map(GalleryStatus::as_str))
            .bind(filters.project_id)
            .bind(range.limit())
            .bind(range.offset())
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Gallery::from).collect())
    }

    /// Find a gallery by id, if `owner` owns its project.
    pub async fn find_by_id_for_owner(
        pool: &PgPool,
        owner: UserId,
        id: DbId,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM galleries g \
             JOIN projects p ON p.id = g.project_id \
             WHERE g.id = $1 AND p.user_id = $2"
        );
        let row = sqlx::query_as::<_, GalleryRow>(&query)
            .bind(id)
            .bind(owner)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Gallery::from))
    }

    /// Find the gallery attached to a project, if `owner` owns that project.
    ///
    /// Should a project carry several galleries, the most recent one wins.
    pub async fn find_by_project_for_owner(
        pool: &PgPool,
        owner: UserId,
        project_id: DbId,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM galleries g \
             JOIN projects p ON p.id = g.project_id \
             WHERE g.project_id = $1 AND p.user_id = $2 \
             ORDER BY g.created_at DESC, g.id DESC \
             LIMIT 1"
        );
        let row = sqlx::query_as::<_, GalleryRow>(&query)
            .bind(project_id)
            .bind(owner)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Gallery::from))
    }

    /// Whether the gallery exists and its project belongs to `owner`.
    pub async fn is_owned_by(pool: &PgPool, owner: UserId, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS( \
                SELECT 1 FROM galleries g \
                JOIN projects p ON p.id = g.project_id \
                WHERE g.id = $1 AND p.user_id = $2)",
        )
        .bind(id)
        .bind(owner)
        .fetch_one(pool)
        .await
    }

    /// Insert a new gallery, returning it joined with its project.
    ///
    /// No ownership filter: the caller is trusted to pass one of its projects.
    pub async fn create(pool: &PgPool, input: &CreateGallery) -> Result<Gallery, sqlx::Error> {
        let query = format!(
            "WITH g AS ( \
                INSERT INTO galleries (project_id, status, metadata) \
                VALUES ($1, $2, COALESCE($3, '{{}}'::JSONB)) \
                RETURNING *) \
             SELECT {COLUMNS} FROM g \
             JOIN projects p ON p.id = g.project_id"
        );
        let row = sqlx::query_as::<_, GalleryRow>(&query)
            .bind(input.project_id)
            .bind(input.status.as_str())
            .bind(&input.metadata)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Update a gallery owned by `owner`. Only non-`None` fields are applied.
    ///
    /// Returns `None` if the gallery is missing, belongs to someone else, or
    /// `project_id` points at a project `owner` does not own.
    pub async fn update_for_owner(
        pool: &PgPool,
        owner: UserId,
        id: DbId,
        input: &UpdateGallery,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!(
            "WITH g AS ( \
                UPDATE galleries AS t SET \
                    project_id = COALESCE($3, t.project_id), \
                    status = COALESCE($4, t.status), \
                    metadata = COALESCE($5, t.metadata), \
                    updated_at = NOW() \
                FROM projects owner_project \
                WHERE t.id = $1 \
                  AND owner_project.id = t.project_id \
                  AND owner_project.user_id = $2 \
                  AND ($3::UUID IS NULL OR EXISTS ( \
                      SELECT 1 FROM projects target \
                      WHERE target.id = $3 AND target.user_id = $2)) \
                RETURNING t.*) \
             SELECT {COLUMNS} FROM g \
             JOIN projects p ON p.id = g.project_id"
        );
        let row = sqlx::query_as::<_, GalleryRow>(&query)
            .bind(id)
            .bind(owner)
            .bind(input.project_id)
            .bind(input.status.map(GalleryStatus::as_str))
            .bind(&input.metadata)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Gallery::from))
    }

    /// Delete a gallery owned by `owner`. Returns `true` if a row was removed.
    pub async fn delete_for_owner(
        pool: &PgPool,
        owner: UserId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM galleries g USING projects p \
             WHERE g.id = $1 AND p.id = g.project_id AND p.user_id = $2",
        )
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
