/// Failures surfaced by [`GalleryAccess`](crate::GalleryAccess).
///
/// A zero-row single fetch is not an error; it comes back as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    /// No authenticated identity was available. Raised before any store call.
    #[error("You must be signed in to access galleries")]
    Unauthenticated,

    /// The gallery does not exist or belongs to another user. The two cases
    /// are deliberately indistinguishable.
    #[error("Gallery not found or access denied")]
    NotFoundOrUnauthorized,

    /// The store rejected the primary call.
    #[error("Failed to {operation}: {source}")]
    Store {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Convenience alias for gallery access results.
pub type AccessResult<T> = Result<T, AccessError>;
