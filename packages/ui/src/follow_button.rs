use dioxus::prelude::*;

/// Follow/unfollow toggle for a user.
///
/// Renders the `follows` prop as its initial state, then owns the state
/// itself: a click flips it optimistically and sends the command to the
/// server, settling on the confirmed value or reverting on error.
#[component]
pub fn FollowButton(user_id: String, follows: bool) -> Element {
    let mut following = use_signal(|| follows);
    let mut pending = use_signal(|| false);

    let toggle = move |_| {
        if pending() {
            return;
        }
        let user_id = user_id.clone();
        let target = !following();
        following.set(target);
        pending.set(true);
        spawn(async move {
            match api::set_follow(user_id.clone(), target).await {
                Ok(confirmed) => following.set(confirmed),
                Err(e) => {
                    tracing::error!("Follow toggle for {user_id} failed: {e}");
                    following.set(!target);
                }
            }
            pending.set(false);
        });
    };

    rsx! {
        button {
            class: if following() { "btn btn-primary follow-button ml-4" } else { "btn btn-outline-primary follow-button ml-4" },
            onclick: toggle,
            if following() { "Following" } else { "Follow" }
        }
    }
}
