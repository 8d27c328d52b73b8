//! Viewer identity plumbing.
//!
//! Authentication itself lives outside this repository; the server only reads
//! a user id that some upstream login flow has placed in the session.

/// Session key under which the logged-in user's id is stored.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Read the viewer's user id from the session, if any.
#[cfg(feature = "server")]
pub async fn viewer_id(
    session: &tower_sessions::Session,
) -> Result<Option<String>, dioxus::prelude::ServerFnError> {
    use dioxus::prelude::ServerFnError;

    session
        .get::<String>(SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
