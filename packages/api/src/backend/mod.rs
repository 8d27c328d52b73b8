//! # Backend seam
//!
//! The pages are pure views over pre-fetched data; everything they cannot do
//! themselves (feed queries, follow relationships, the profile-update
//! capability check) lives behind the [`SocialBackend`] trait. The server
//! functions in the crate root call whichever implementation was registered at
//! startup via [`set_backend`], so the view layer stays decoupled from any
//! particular storage or policy engine.
//!
//! [`MemoryBackend`] is the bundled `Arc<Mutex<_>>` implementation used by the
//! demo server and by tests.

mod memory;

pub use memory::MemoryBackend;

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{FeedPage, PostPage, ProfileData};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("not logged in")]
    Unauthenticated,
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// The external collaborators the pages depend on, behind one seam.
///
/// `viewer` is the id of the requesting user, or None for anonymous visitors.
/// Implementations own the follow-relationship bookkeeping, the pagination
/// link computation, and the `(update, profile)` capability decision; the
/// view layer only consumes their results.
#[async_trait]
pub trait SocialBackend: Send + Sync {
    /// One page of the feed, newest posts first. Pages are 1-based.
    async fn feed_page(&self, page: u32) -> Result<FeedPage, BackendError>;

    /// A single post plus the viewer's follow state towards its author.
    async fn post(&self, post_id: &str, viewer: Option<&str>) -> Result<PostPage, BackendError>;

    /// Everything the profile page needs for `user_id`, as seen by `viewer`.
    async fn profile(
        &self,
        user_id: &str,
        viewer: Option<&str>,
    ) -> Result<ProfileData, BackendError>;

    /// Set whether `viewer` follows `user_id`; returns the confirmed state.
    async fn set_follow(
        &self,
        viewer: &str,
        user_id: &str,
        follows: bool,
    ) -> Result<bool, BackendError>;
}

static BACKEND: OnceLock<Arc<dyn SocialBackend>> = OnceLock::new();

/// Register the backend implementation. Call once during server startup,
/// before the first request; later calls are ignored.
pub fn set_backend(backend: Arc<dyn SocialBackend>) {
    let _ = BACKEND.set(backend);
}

/// The registered backend, or `Unavailable` if startup never registered one.
pub fn registered() -> Result<Arc<dyn SocialBackend>, BackendError> {
    BACKEND
        .get()
        .cloned()
        .ok_or_else(|| BackendError::Unavailable("no backend registered".to_string()))
}
