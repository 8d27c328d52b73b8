use dioxus::prelude::*;
use ui::views::ProfileView;

/// Profile route: fetch the user's profile as seen by the current viewer.
#[component]
pub fn Profile(user_id: String) -> Element {
    let mut id_signal = use_signal(|| user_id.clone());
    if *id_signal.peek() != user_id {
        id_signal.set(user_id.clone());
    }

    let profile = use_resource(move || {
        let id = id_signal();
        async move { api::get_profile(id).await }
    });

    match profile() {
        Some(Ok(data)) => rsx! {
            ProfileView { data }
        },
        Some(Err(e)) => rsx! {
            div { class: "load-error", "Could not load this profile: {e}" }
        },
        None => rsx! {
            div { class: "loading", "Loading..." }
        },
    }
}
