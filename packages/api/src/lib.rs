//! # API crate — shared fullstack server functions for Photogram
//!
//! This crate defines every Dioxus server function the web frontend calls,
//! along with the view models those functions return and the backend seam they
//! delegate to.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`models`] | — | View models (`PostInfo`, `UserInfo`, `ProfileInfo`, `FeedPage`, …) that cross the server/client boundary |
//! | [`backend`] | — | The [`SocialBackend`](backend::SocialBackend) trait, its registration point, and the in-memory implementation |
//! | [`session`] | partial | The session key for the viewer's user id and the server-side reader for it |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` or `#[post(...)]` and compiled twice: once with the real
//! logic (behind `#[cfg(feature = "server")]`) and once as a thin client stub
//! that forwards the call over HTTP.
//!
//! - `get_feed` — one page of the post feed with pagination links
//! - `get_post` — a single post plus the viewer's follow state
//! - `get_profile` — a user's profile, posts, counts, and the viewer's capabilities
//! - `set_follow` — toggle the viewer's follow edge towards a user

use dioxus::prelude::*;

pub mod backend;
pub mod models;
pub mod session;

pub use backend::{registered, set_backend, BackendError, MemoryBackend, SocialBackend};
pub use models::{
    FeedPage, PageLink, PostInfo, PostPage, ProfileData, ProfileInfo, UserInfo,
    DEFAULT_PROFILE_IMAGE,
};
pub use session::SESSION_USER_ID_KEY;

/// Fetch one page of the feed. Pages are 1-based; 0 is treated as 1.
#[cfg(feature = "server")]
#[get("/api/feed/:page")]
pub async fn get_feed(page: u32) -> Result<FeedPage, ServerFnError> {
    let backend = registered().map_err(|e| ServerFnError::new(e.to_string()))?;
    backend
        .feed_page(page)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/feed/:page")]
pub async fn get_feed(page: u32) -> Result<FeedPage, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch a single post along with the viewer's follow state for its author.
#[cfg(feature = "server")]
#[get("/api/posts/:post_id", session: tower_sessions::Session)]
pub async fn get_post(post_id: String) -> Result<PostPage, ServerFnError> {
    let viewer = session::viewer_id(&session).await?;
    let backend = registered().map_err(|e| ServerFnError::new(e.to_string()))?;
    backend
        .post(&post_id, viewer.as_deref())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/posts/:post_id")]
pub async fn get_post(post_id: String) -> Result<PostPage, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch a user's profile as seen by the current viewer. The returned
/// `can_update` is the pre-evaluated `(update, profile)` capability check;
/// the page only branches on it.
#[cfg(feature = "server")]
#[get("/api/profiles/:user_id", session: tower_sessions::Session)]
pub async fn get_profile(user_id: String) -> Result<ProfileData, ServerFnError> {
    let viewer = session::viewer_id(&session).await?;
    let backend = registered().map_err(|e| ServerFnError::new(e.to_string()))?;
    backend
        .profile(&user_id, viewer.as_deref())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/profiles/:user_id")]
pub async fn get_profile(user_id: String) -> Result<ProfileData, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Set whether the viewer follows `user_id`. Returns the confirmed state so
/// the follow button can settle on whatever the server decided.
#[cfg(feature = "server")]
#[post("/api/follow", session: tower_sessions::Session)]
pub async fn set_follow(user_id: String, follows: bool) -> Result<bool, ServerFnError> {
    let Some(viewer) = session::viewer_id(&session).await? else {
        return Err(ServerFnError::new(BackendError::Unauthenticated.to_string()));
    };
    let backend = registered().map_err(|e| ServerFnError::new(e.to_string()))?;
    tracing::debug!("viewer {viewer} sets follow({user_id}) = {follows}");
    backend
        .set_follow(&viewer, &user_id, follows)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/follow")]
pub async fn set_follow(user_id: String, follows: bool) -> Result<bool, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
