use api::PostInfo;
use dioxus::prelude::*;

use crate::FollowButton;

/// A single post, full size, with its author and a follow toggle.
#[component]
pub fn PostDetailView(post: PostInfo, follows: bool) -> Element {
    rsx! {
        div {
            class: "container",
            div {
                class: "row pt-5",
                div {
                    class: "col-6",
                    img { class: "w-100", src: "{post.image_url()}" }
                }
                div {
                    class: "col-4",
                    div {
                        class: "d-flex align-items-center",
                        img {
                            class: "rounded-circle avatar-sm",
                            src: "{post.author.profile.profile_image()}",
                        }
                        h4 {
                            class: "pl-4 font-weight-bold",
                            a { href: "/profile/{post.author.id}", "{post.author.username}" }
                        }
                        FollowButton { user_id: post.author.id.clone(), follows }
                    }
                    hr {}
                    h5 { class: "post-caption", "{post.caption}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::{ProfileInfo, UserInfo};

    use super::*;

    fn sample(caption: &str) -> PostInfo {
        PostInfo {
            id: "42".to_string(),
            image: "uploads/42.jpg".to_string(),
            caption: caption.to_string(),
            author: UserInfo {
                id: "7".to_string(),
                username: "ada".to_string(),
                profile: ProfileInfo {
                    title: String::new(),
                    description: String::new(),
                    url: None,
                    image: Some("avatars/ada.jpg".to_string()),
                },
            },
        }
    }

    #[test]
    fn renders_post_author_and_follow_state() {
        let html = dioxus_ssr::render_element(rsx! {
            PostDetailView { post: sample("hello world"), follows: true }
        });
        assert!(html.contains("src=\"/storage/uploads/42.jpg\""));
        assert!(html.contains("src=\"/storage/avatars/ada.jpg\""));
        assert!(html.contains("href=\"/profile/7\""));
        assert!(html.contains("hello world"));
        assert!(html.contains("Following"));
    }

    #[test]
    fn empty_caption_renders_empty_region() {
        let html = dioxus_ssr::render_element(rsx! {
            PostDetailView { post: sample(""), follows: false }
        });
        assert!(html.contains("post-caption"));
        assert!(!html.contains("Following"));
    }
}
