//! Authorization-checked CRUD over galleries.
//!
//! Every operation except [`create`](GalleryAccess::create) first asks the
//! identity provider for the acting user and fails with
//! [`AccessError::Unauthenticated`] before touching the store. Reads are
//! scoped to galleries whose project the user owns. Mutations re-verify
//! ownership with a separate lookup and then issue an owner-filtered write,
//! so a gallery that changes hands between the two calls is still refused.

use atelier_core::gallery::GalleryFilters;
use atelier_core::identity::IdentityProvider;
use atelier_core::pagination::Pagination;
use atelier_core::types::{DbId, UserId};

use crate::error::{AccessError, AccessResult};
use crate::models::gallery::{CreateGallery, Gallery, UpdateGallery};
use crate::store::GalleryStore;

/// Gallery CRUD bound to one store handle and one caller identity.
pub struct GalleryAccess<S, I> {
    store: S,
    identity: I,
}

impl<S, I> GalleryAccess<S, I>
where
    S: GalleryStore,
    I: IdentityProvider,
{
    pub fn new(store: S, identity: I) -> Self {
        Self { store, identity }
    }

    /// One page of the caller's galleries, most recent first.
    pub async fn list(
        &self,
        filters: &GalleryFilters,
        pagination: Pagination,
    ) -> AccessResult<Vec<Gallery>> {
        let user_id = self.require_user()?;
        let range = pagination.range();
        tracing::debug!(%user_id, from = range.from, to = range.to, "Listing galleries");

        self.store
            .list_owned(user_id, filters, range)
            .await
            .map_err(store_error("fetch galleries"))
    }

    pub async fn get_by_id(&self, id: DbId) -> AccessResult<Option<Gallery>> {
        let user_id = self.require_user()?;

        absent_on_no_rows(self.store.find_owned(user_id, id).await)
            .map_err(store_error("fetch gallery"))
    }

    pub async fn get_by_project_id(&self, project_id: DbId) -> AccessResult<Option<Gallery>> {
        let user_id = self.require_user()?;

        absent_on_no_rows(self.store.find_owned_by_project(user_id, project_id).await)
            .map_err(store_error("fetch gallery"))
    }

    /// Insert a gallery. Ownership of `input.project_id` is not checked here.
    pub async fn create(&self, input: &CreateGallery) -> AccessResult<Gallery> {
        let gallery = self
            .store
            .insert(input)
            .await
            .map_err(store_error("create gallery"))?;
        tracing::debug!(gallery_id = %gallery.id, project_id = %gallery.project_id, "Gallery created");
        Ok(gallery)
    }

    pub async fn update(&self, id: DbId, input: &UpdateGallery) -> AccessResult<Gallery> {
        let user_id = self.require_user()?;
        self.verify_ownership(user_id, id).await?;

        match self.store.update_owned(user_id, id, input).await {
            Ok(Some(gallery)) => Ok(gallery),
            Ok(None) => {
                tracing::debug!(%user_id, gallery_id = %id, "Gallery no longer owned at write time");
                Err(AccessError::NotFoundOrUnauthorized)
            }
            Err(source) => Err(AccessError::Store {
                operation: "update gallery",
                source,
            }),
        }
    }

    pub async fn delete(&self, id: DbId) -> AccessResult<()> {
        let user_id = self.require_user()?;
        self.verify_ownership(user_id, id).await?;

        match self.store.delete_owned(user_id, id).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                tracing::debug!(%user_id, gallery_id = %id, "Gallery no longer owned at write time");
                Err(AccessError::NotFoundOrUnauthorized)
            }
            Err(source) => Err(AccessError::Store {
                operation: "delete gallery",
                source,
            }),
        }
    }

    fn require_user(&self) -> AccessResult<UserId> {
        self.identity
            .current_user()
            .ok_or(AccessError::Unauthenticated)
    }

    /// Any failure of the lookup, including a store error, is reported as
    /// not-found so existence under another owner never leaks.
    async fn verify_ownership(&self, user_id: UserId, id: DbId) -> AccessResult<()> {
        match self.store.is_owned(user_id, id).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                tracing::debug!(%user_id, gallery_id = %id, "Ownership check rejected");
                Err(AccessError::NotFoundOrUnauthorized)
            }
            Err(err) => {
                tracing::debug!(%user_id, gallery_id = %id, error = %err, "Ownership check failed");
                Err(AccessError::NotFoundOrUnauthorized)
            }
        }
    }
}

fn store_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> AccessError {
    move |source| AccessError::Store { operation, source }
}

/// Treat the driver's "no rows" signal on a single-row fetch as absence.
fn absent_on_no_rows<T>(
    result: Result<Option<T>, sqlx::Error>,
) -> Result<Option<T>, sqlx::Error> {
    match result {
        Err(sqlx::Error::RowNotFound) => Ok(None),
        other => other,
    }
}
