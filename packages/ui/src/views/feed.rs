use api::FeedPage;
use dioxus::prelude::*;

use crate::Pagination;

/// The paginated post feed.
///
/// One block per post in the order the backend returned them: the image
/// linking to the post's detail page, then an author row with avatar,
/// username link, and caption. Pagination controls follow the list and are
/// rendered even when the page is empty.
#[component]
pub fn FeedView(feed: FeedPage) -> Element {
    rsx! {
        div {
            class: "container",
            for post in feed.posts.iter() {
                div {
                    class: "row",
                    div {
                        class: "col-6 offset-3",
                        a {
                            href: "/p/{post.id}",
                            img { class: "w-100", src: "{post.image_url()}" }
                        }
                    }
                }
                div {
                    class: "row pt-2 pb-5",
                    div {
                        class: "col-6 offset-3",
                        div {
                            class: "d-flex align-items-center",
                            img {
                                class: "rounded-circle avatar-sm",
                                src: "{post.author.profile.profile_image()}",
                            }
                            h4 {
                                class: "pl-3 font-weight-bold",
                                a { href: "/profile/{post.author.id}", "{post.author.username}" }
                            }
                            h5 { class: "pl-3", "{post.caption}" }
                        }
                        hr {}
                    }
                }
            }
            div {
                class: "row",
                div {
                    class: "col-12 d-flex justify-content-center",
                    Pagination { links: feed.links.clone() }
                }
            }
        }
    }
}
