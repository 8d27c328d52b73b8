use dioxus::prelude::*;
use ui::views::PostDetailView;

/// Post-detail route: fetch the post and the viewer's follow state in one
/// round trip, then render the pure view.
#[component]
pub fn PostDetail(post_id: String) -> Element {
    // Track the id in a signal so use_resource re-runs on route param change
    let mut id_signal = use_signal(|| post_id.clone());
    if *id_signal.peek() != post_id {
        id_signal.set(post_id.clone());
    }

    let page = use_resource(move || {
        let id = id_signal();
        async move { api::get_post(id).await }
    });

    match page() {
        Some(Ok(data)) => rsx! {
            PostDetailView { post: data.post, follows: data.follows }
        },
        Some(Err(e)) => rsx! {
            div { class: "load-error", "Could not load this post: {e}" }
        },
        None => rsx! {
            div { class: "loading", "Loading..." }
        },
    }
}
