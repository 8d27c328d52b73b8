use api::ProfileData;
use dioxus::prelude::*;

use crate::FollowButton;

/// A user's profile: header with avatar, follow toggle, owner-only edit
/// links, the three counts, bio, and a grid of all their posts.
///
/// Whether the viewer may edit the profile was decided server-side; this view
/// only branches on `data.can_update`.
#[component]
pub fn ProfileView(data: ProfileData) -> Element {
    // Count of the same sequence the grid renders.
    let post_count = data.posts.len();

    rsx! {
        div {
            class: "container",
            div {
                class: "row",
                div {
                    class: "col-3 p-3",
                    img {
                        class: "rounded-circle avatar-lg",
                        src: "{data.user.profile.profile_image()}",
                    }
                }
                div {
                    class: "col-9 pt-3",
                    div {
                        class: "d-flex justify-content-between align-items-baseline",
                        div {
                            class: "d-flex align-items-center pb-2",
                            div { class: "h3", "{data.user.username}" }
                            FollowButton { user_id: data.user.id.clone(), follows: data.follows }
                        }
                        if data.can_update {
                            a { href: "/p/create", "Add New Post" }
                        }
                    }
                    if data.can_update {
                        div {
                            class: "pt-3 pb-3",
                            a { href: "/profile/{data.user.id}/edit", "Edit Profile" }
                        }
                    }
                    div {
                        class: "d-flex",
                        div { class: "pr-4", strong { "{post_count}" } " posts" }
                        div { class: "pr-4", strong { "{data.follower_count}" } " followers" }
                        div { class: "pr-4", strong { "{data.following_count}" } " following" }
                    }
                    div { class: "pt-2 font-weight-bold", "{data.user.profile.title}" }
                    div { class: "pt-1", "{data.user.profile.description}" }
                    div {
                        if let Some(url) = data.user.profile.url.as_ref() {
                            a { href: "{url}", "{url}" }
                        } else {
                            "N/A"
                        }
                    }
                }
            }
            div {
                class: "row pt-5",
                for post in data.posts.iter() {
                    div {
                        class: "col-4 pb-4",
                        a {
                            href: "/p/{post.id}",
                            img { class: "w-100", src: "{post.image_url()}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::{PostInfo, ProfileInfo, UserInfo};

    use super::*;

    fn data(posts: usize, url: Option<&str>, can_update: bool, follows: bool) -> ProfileData {
        let user = UserInfo {
            id: "9".to_string(),
            username: "grace".to_string(),
            profile: ProfileInfo {
                title: "Compiler person".to_string(),
                description: "Ships and machine rooms.".to_string(),
                url: url.map(str::to_string),
                image: None,
            },
        };
        let posts = (0..posts)
            .map(|i| PostInfo {
                id: format!("p{i}"),
                image: format!("uploads/p{i}.jpg"),
                caption: format!("caption {i}"),
                author: user.clone(),
            })
            .collect();
        ProfileData {
            user,
            posts,
            follower_count: 12,
            following_count: 3,
            follows,
            can_update,
        }
    }

    #[test]
    fn renders_counts_and_post_grid() {
        let html = dioxus_ssr::render_element(rsx! {
            ProfileView { data: data(4, Some("https://grace.example"), false, false) }
        });
        assert!(html.contains("<strong>4</strong>"));
        assert!(html.contains("<strong>12</strong>"));
        assert!(html.contains("<strong>3</strong>"));
        assert_eq!(html.matches("href=\"/p/p").count(), 4);
        assert!(html.contains("href=\"https://grace.example\""));
        assert!(!html.contains("N/A"));
    }

    #[test]
    fn missing_url_renders_na() {
        let html = dioxus_ssr::render_element(rsx! {
            ProfileView { data: data(1, None, false, false) }
        });
        assert!(html.contains("N/A"));
    }

    #[test]
    fn owner_sees_edit_links_others_do_not() {
        let owner = dioxus_ssr::render_element(rsx! {
            ProfileView { data: data(1, None, true, false) }
        });
        assert!(owner.contains("Add New Post"));
        assert!(owner.contains("href=\"/profile/9/edit\""));

        let visitor = dioxus_ssr::render_element(rsx! {
            ProfileView { data: data(1, None, false, false) }
        });
        assert!(!visitor.contains("Add New Post"));
        assert!(!visitor.contains("Edit Profile"));
    }

    #[test]
    fn follow_button_reflects_follow_state() {
        let html = dioxus_ssr::render_element(rsx! {
            ProfileView { data: data(1, None, false, true) }
        });
        assert!(html.contains("Following"));
    }

    #[test]
    fn zero_posts_renders_zero_count_and_empty_grid() {
        let html = dioxus_ssr::render_element(rsx! {
            ProfileView { data: data(0, None, false, false) }
        });
        assert!(html.contains("<strong>0</strong>"));
        assert_eq!(html.matches("href=\"/p/p").count(), 0);
    }
}
