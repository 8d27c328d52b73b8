use dioxus::prelude::*;

use views::{Feed, PostDetail, Profile, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/?:page")]
        Feed { page: u32 },
        #[route("/p/:post_id")]
        PostDetail { post_id: String },
        #[route("/profile/:user_id")]
        Profile { user_id: String },
}

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use axum::routing::get;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::sync::Arc;
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Wire the pages to their collaborators. The demo ships the in-memory
    // backend; a deployment swaps in its own SocialBackend here.
    api::set_backend(Arc::new(api::MemoryBackend::seeded()));

    // Session layer configuration
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    // Build the Dioxus app with custom routes
    let router = axum::Router::new()
        // Demo-only viewer selection; real logins live outside this repo
        .route("/auth/demo/{user_id}", get(demo_login))
        // Then serve the Dioxus application
        .serve_dioxus_application(ServeConfig::new(), App)
        // Add session layer to all routes
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

/// Stamp the session with a viewer id and bounce back to the feed. Stands in
/// for the external login flow so follow state and edit links can be seen.
#[cfg(feature = "server")]
async fn demo_login(
    axum::extract::Path(user_id): axum::extract::Path<String>,
    session: tower_sessions::Session,
) -> axum::response::Redirect {
    use axum::response::Redirect;

    if let Err(e) = session.insert(api::SESSION_USER_ID_KEY, user_id).await {
        tracing::error!("Failed to set session: {}", e);
        return Redirect::to("/?error=session_error");
    }
    Redirect::to("/")
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
