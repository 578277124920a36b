//! Trait seams over the repositories.
//!
//! [`GalleryAccess`](crate::GalleryAccess) and the seeding tool depend on
//! these traits rather than on `PgPool`, so they can be driven by a
//! substitute store in tests. `PgPool` implements both by delegating to the
//! repositories.

use async_trait::async_trait;
use atelier_core::gallery::GalleryFilters;
use atelier_core::pagination::RowRange;
use atelier_core::types::{DbId, UserId};
use sqlx::PgPool;

use crate::models::client::{Client, NewClient};
use crate::models::gallery::{CreateGallery, Gallery, UpdateGallery};
use crate::repositories::{ClientRepo, GalleryRepo};

/// Owner-scoped gallery storage.
#[async_trait]
pub trait GalleryStore: Send + Sync {
    async fn list_owned(
        &self,
        owner: UserId,
        filters: &GalleryFilters,
        range: RowRange,
    ) -> Result<Vec<Gallery>, sqlx::Error>;

    async fn find_owned(&self, owner: UserId, id: DbId) -> Result<Option<Gallery>, sqlx::Error>;

    async fn find_owned_by_project(
        &self,
        owner: UserId,
        project_id: DbId,
    ) -> Result<Option<Gallery>, sqlx::Error>;

    async fn is_owned(&self, owner: UserId, id: DbId) -> Result<bool, sqlx::Error>;

    async fn insert(&self, input: &CreateGallery) -> Result<Gallery, sqlx::Error>;

    /// `Ok(None)` when no row owned by `owner` matched.
    async fn update_owned(
        &self,
        owner: UserId,
        id: DbId,
        input: &UpdateGallery,
    ) -> Result<Option<Gallery>, sqlx::Error>;

    /// `Ok(false)` when no row owned by `owner` matched.
    async fn delete_owned(&self, owner: UserId, id: DbId) -> Result<bool, sqlx::Error>;
}

/// Bulk client storage used by the seeding tool.
#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn insert_clients(&self, clients: &[NewClient]) -> Result<Vec<Client>, sqlx::Error>;
}

#[async_trait]
impl GalleryStore for PgPool {
    async fn list_owned(
        &self,
        owner: UserId,
        filters: &GalleryFilters,
        range: RowRange,
    ) -> Result<Vec<Gallery>, sqlx::Error> {
        GalleryRepo::list_for_owner(self, owner, filters, range).await
    }

    async fn find_owned(&self, owner: UserId, id: DbId) -> Result<Option<Gallery>, sqlx::Error> {
        GalleryRepo::find_by_id_for_owner(self, owner, id).await
    }

    async fn find_owned_by_project(
        &self,
        owner: UserId,
        project_id: DbId,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        GalleryRepo::find_by_project_for_owner(self, owner, project_id).await
    }

    async fn is_owned(&self, owner: UserId, id: DbId) -> Result<bool, sqlx::Error> {
        GalleryRepo::is_owned_by(self, owner, id).await
    }

    async fn insert(&self, input: &CreateGallery) -> Result<Gallery, sqlx::Error> {
        GalleryRepo::create(self, input).await
    }

    async fn update_owned(
        &self,
        owner: UserId,
        id: DbId,
        input: &UpdateGallery,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        GalleryRepo::update_for_owner(self, owner, id, input).await
    }

    async fn delete_owned(&self, owner: UserId, id: DbId) -> Result<bool, sqlx::Error> {
        GalleryRepo::delete_for_owner(self, owner, id).await
    }
}

#[async_trait]
impl ClientStore for PgPool {
    async fn insert_clients(&self, clients: &[NewClient]) -> Result<Vec<Client>, sqlx::Error> {
        ClientRepo::create_batch(self, clients).await
    }
}

#[async_trait]
impl<'a, T: GalleryStore + ?Sized> GalleryStore for &'a T {
    async fn list_owned(
        &self,
        owner: UserId,
        filters: &GalleryFilters,
        range: RowRange,
    ) -> Result<Vec<Gallery>, sqlx::Error> {
        (**self).list_owned(owner, filters, range).await
    }

    async fn find_owned(&self, owner: UserId, id: DbId) -> Result<Option<Gallery>, sqlx::Error> {
        (**self).find_owned(owner, id).await
    }

    async fn find_owned_by_project(
        &self,
        owner: UserId,
        project_id: DbId,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        (**self).find_owned_by_project(owner, project_id).await
    }

    async fn is_owned(&self, owner: UserId, id: DbId) -> Result<bool, sqlx::Error> {
        (**self).is_owned(owner, id).await
    }

    async fn insert(&self, input: &CreateGallery) -> Result<Gallery, sqlx::Error> {
        (**self).insert(input).await
    }

    async fn update_owned(
        &self,
        owner: UserId,
        id: DbId,
        input: &UpdateGallery,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        (**self).update_owned(owner, id, input).await
    }

    async fn delete_owned(&self, owner: UserId, id: DbId) -> Result<bool, sqlx::Error> {
        (**self).delete_owned(owner, id).await
    }
}
