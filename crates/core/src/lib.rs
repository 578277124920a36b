//! Domain types shared by the gallery access layer and the seeding tool.
//!
//! This crate has no database dependency: it holds identifiers, enumerated
//! statuses, filter/pagination values, and the caller identity seam.

pub mod error;
pub mod gallery;
pub mod identity;
pub mod pagination;
pub mod status;
pub mod types;
