//! Data access for the hosted Postgres backend.
//!
//! - [`repositories`] hold the raw SQL, one unit struct per table.
//! - [`store`] puts those repositories behind object-safe traits.
//! - [`gallery_access`] is the authorization-checked gallery facade.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

pub mod error;
pub mod gallery_access;
pub mod models;
pub mod repositories;
pub mod store;

pub use error::{AccessError, AccessResult};
pub use gallery_access::GalleryAccess;
pub use store::{ClientStore, GalleryStore};

/// Create a pool that only connects when first used.
///
/// Connection failures then surface from the first query instead of here.
pub fn connect_lazy_with(options: PgConnectOptions, max_connections: u32) -> PgPool {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(options)
}
