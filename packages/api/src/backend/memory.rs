use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{BackendError, SocialBackend};
use crate::models::{FeedPage, PageLink, PostInfo, PostPage, ProfileData, ProfileInfo, UserInfo};

const POSTS_PER_PAGE: usize = 5;

#[derive(Debug, Default)]
struct Inner {
    users: Vec<UserInfo>,
    /// Newest first; the feed renders in this order.
    posts: Vec<PostInfo>,
    /// Directed (follower, followee) edges.
    follows: HashSet<(String, String)>,
}

/// In-memory [`SocialBackend`] for the demo server and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-populated with a handful of users and posts, enough to
    /// click through every page.
    pub fn seeded() -> Self {
        let backend = Self::new();

        backend.add_user(UserInfo {
            id: "1".to_string(),
            username: "ada".to_string(),
            profile: ProfileInfo {
                title: "Analytical Engine enjoyer".to_string(),
                description: "Sketches of machines and the occasional garden.".to_string(),
                url: Some("https://ada.example".to_string()),
                image: Some("avatars/ada.jpg".to_string()),
            },
        });
        backend.add_user(UserInfo {
            id: "2".to_string(),
            username: "grace".to_string(),
            profile: ProfileInfo {
                title: "Compiler person".to_string(),
                description: "Ships, moths, and machine rooms.".to_string(),
                url: None,
                image: None,
            },
        });
        backend.add_user(UserInfo {
            id: "3".to_string(),
            username: "edsger".to_string(),
            profile: ProfileInfo {
                title: "Fountain pen photography".to_string(),
                description: "Mostly handwritten notes.".to_string(),
                url: Some("https://ewd.example".to_string()),
                image: Some("avatars/edsger.jpg".to_string()),
            },
        });

        let captions = [
            ("1", "Gears of the difference engine"),
            ("2", "Mark I panel, freshly wired"),
            ("1", "Punch cards at golden hour"),
            ("3", "Today's manuscript page"),
            ("2", "First actual bug, taped in"),
            ("1", "Garden notes"),
            ("3", "A well-behaved loop"),
        ];
        for (i, (author, caption)) in captions.iter().enumerate() {
            let id = (i + 1).to_string();
            backend.add_post_by(author, &id, &format!("uploads/{id}.jpg"), caption);
        }

        backend.follow("2", "1");
        backend.follow("3", "1");
        backend.follow("1", "2");
        backend
    }

    pub fn add_user(&self, user: UserInfo) {
        self.inner.lock().unwrap().users.push(user);
    }

    /// Insert a post by an existing user at the head of the feed.
    /// Panics if the author is unknown; seed data is assembled users-first.
    pub fn add_post_by(&self, author_id: &str, post_id: &str, image: &str, caption: &str) {
        let mut inner = self.inner.lock().unwrap();
        let author = inner
            .users
            .iter()
            .find(|u| u.id == author_id)
            .expect("post author must be added before their posts")
            .clone();
        inner.posts.insert(
            0,
            PostInfo {
                id: post_id.to_string(),
                image: image.to_string(),
                caption: caption.to_string(),
                author,
            },
        );
    }

    fn follow(&self, follower: &str, followee: &str) {
        self.inner
            .lock()
            .unwrap()
            .follows
            .insert((follower.to_string(), followee.to_string()));
    }
}

fn page_url(page: u32) -> String {
    format!("/?page={page}")
}

/// Previous, one numbered link per page, next. Disabled entries carry no URL.
fn build_links(current: u32, last: u32) -> Vec<PageLink> {
    let mut links = Vec::with_capacity(last as usize + 2);
    links.push(PageLink {
        label: "« Previous".to_string(),
        url: (current > 1).then(|| page_url(current - 1)),
        active: false,
    });
    for page in 1..=last {
        links.push(PageLink {
            label: page.to_string(),
            url: Some(page_url(page)),
            active: page == current,
        });
    }
    links.push(PageLink {
        label: "Next »".to_string(),
        url: (current < last).then(|| page_url(current + 1)),
        active: false,
    });
    links
}

#[async_trait]
impl SocialBackend for MemoryBackend {
    async fn feed_page(&self, page: u32) -> Result<FeedPage, BackendError> {
        let inner = self.inner.lock().unwrap();
        let page = page.max(1);
        let last = (inner.posts.len().div_ceil(POSTS_PER_PAGE)).max(1) as u32;
        let posts = inner
            .posts
            .iter()
            .skip((page as usize - 1) * POSTS_PER_PAGE)
            .take(POSTS_PER_PAGE)
            .cloned()
            .collect();
        Ok(FeedPage {
            posts,
            links: build_links(page, last),
            current_page: page,
        })
    }

    async fn post(&self, post_id: &str, viewer: Option<&str>) -> Result<PostPage, BackendError> {
        let inner = self.inner.lock().unwrap();
        let post = inner
            .posts
            .iter()
            .find(|p| p.id == post_id)
            .cloned()
            .ok_or_else(|| BackendError::NotFound(format!("post {post_id}")))?;
        let follows = viewer.is_some_and(|v| {
            inner
                .follows
                .contains(&(v.to_string(), post.author.id.clone()))
        });
        Ok(PostPage { post, follows })
    }

    async fn profile(
        &self,
        user_id: &str,
        viewer: Option<&str>,
    ) -> Result<ProfileData, BackendError> {
        let inner = self.inner.lock().unwrap();
        let user = inner
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(|| BackendError::NotFound(format!("user {user_id}")))?;
        let posts: Vec<PostInfo> = inner
            .posts
            .iter()
            .filter(|p| p.author.id == user_id)
            .cloned()
            .collect();
        let follower_count = inner.follows.iter().filter(|(_, to)| to == user_id).count() as u64;
        let following_count = inner
            .follows
            .iter()
            .filter(|(from, _)| from == user_id)
            .count() as u64;
        let follows =
            viewer.is_some_and(|v| inner.follows.contains(&(v.to_string(), user_id.to_string())));
        // Owners may edit their own profile; nobody else.
        let can_update = viewer == Some(user_id);
        Ok(ProfileData {
            user,
            posts,
            follower_count,
            following_count,
            follows,
            can_update,
        })
    }

    async fn set_follow(
        &self,
        viewer: &str,
        user_id: &str,
        follows: bool,
    ) -> Result<bool, BackendError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.users.iter().any(|u| u.id == user_id) {
            return Err(BackendError::NotFound(format!("user {user_id}")));
        }
        let edge = (viewer.to_string(), user_id.to_string());
        if follows {
            inner.follows.insert(edge.clone());
        } else {
            inner.follows.remove(&edge);
        }
        Ok(inner.follows.contains(&edge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn feed_pages_slice_newest_first() {
        let backend = MemoryBackend::seeded();

        let first = backend.feed_page(1).await.unwrap();
        assert_eq!(first.posts.len(), POSTS_PER_PAGE);
        // Seed inserts at the head, so the last caption added comes first.
        assert_eq!(first.posts[0].caption, "A well-behaved loop");
        assert_eq!(first.current_page, 1);

        let second = backend.feed_page(2).await.unwrap();
        assert_eq!(second.posts.len(), 2);

        // Entries: previous + 2 numbered pages + next.
        assert_eq!(second.links.len(), 4);
        assert!(second.links[0].url.is_some(), "previous enabled on page 2");
        assert!(second.links[3].url.is_none(), "next disabled on last page");
        assert!(second.links[2].active);
    }

    #[tokio::test]
    async fn feed_page_zero_is_treated_as_first() {
        let backend = MemoryBackend::seeded();
        let page = backend.feed_page(0).await.unwrap();
        assert_eq!(page.current_page, 1);
        assert!(page.links[0].url.is_none(), "previous disabled on page 1");
    }

    #[tokio::test]
    async fn empty_feed_still_has_pagination_links() {
        let backend = MemoryBackend::new();
        let page = backend.feed_page(1).await.unwrap();
        assert!(page.posts.is_empty());
        // Previous, page 1, next — all pointing nowhere new.
        assert_eq!(page.links.len(), 3);
        assert!(page.links[0].url.is_none());
        assert!(page.links[2].url.is_none());
    }

    #[tokio::test]
    async fn profile_counts_match_relations() {
        let backend = MemoryBackend::seeded();

        let ada = backend.profile("1", None).await.unwrap();
        assert_eq!(ada.posts.len(), 3);
        assert_eq!(ada.follower_count, 2);
        assert_eq!(ada.following_count, 1);
        assert!(!ada.follows, "anonymous viewer follows nobody");
        assert!(!ada.can_update, "anonymous viewer owns nothing");
    }

    #[tokio::test]
    async fn only_the_owner_can_update_a_profile() {
        let backend = MemoryBackend::seeded();
        assert!(backend.profile("1", Some("1")).await.unwrap().can_update);
        assert!(!backend.profile("1", Some("2")).await.unwrap().can_update);
    }

    #[tokio::test]
    async fn follow_toggle_roundtrip() {
        let backend = MemoryBackend::seeded();

        assert!(!backend.post("4", Some("1")).await.unwrap().follows);
        assert!(backend.set_follow("1", "3", true).await.unwrap());
        assert!(backend.post("4", Some("1")).await.unwrap().follows);
        assert!(!backend.set_follow("1", "3", false).await.unwrap());
        assert!(!backend.post("4", Some("1")).await.unwrap().follows);
    }

    #[tokio::test]
    async fn missing_post_and_user_are_not_found() {
        let backend = MemoryBackend::seeded();
        assert!(matches!(
            backend.post("999", None).await,
            Err(BackendError::NotFound(_))
        ));
        assert!(matches!(
            backend.profile("999", None).await,
            Err(BackendError::NotFound(_))
        ));
        assert!(matches!(
            backend.set_follow("1", "999", true).await,
            Err(BackendError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn user_with_no_posts_counts_zero() {
        let backend = MemoryBackend::new();
        backend.add_user(UserInfo {
            id: "7".to_string(),
            username: "lurker".to_string(),
            profile: ProfileInfo {
                title: String::new(),
                description: String::new(),
                url: None,
                image: None,
            },
        });
        let data = backend.profile("7", None).await.unwrap();
        assert!(data.posts.is_empty());
        assert_eq!(data.follower_count, 0);
        assert_eq!(data.following_count, 0);
    }
}
