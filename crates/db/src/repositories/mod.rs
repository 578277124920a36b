//! Repository layer: one unit struct per table, every method takes a
//! `&PgPool` and returns raw `sqlx` results.

pub mod client_repo;
pub mod gallery_repo;

pub use client_repo::ClientRepo;
pub use gallery_repo::GalleryRepo;
