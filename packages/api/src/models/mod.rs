//! View models shared between the server functions and the UI.

mod feed;
mod post;
mod user;

pub use feed::{FeedPage, PageLink};
pub use post::{PostInfo, PostPage};
pub use user::{ProfileInfo, UserInfo, DEFAULT_PROFILE_IMAGE};

use serde::{Deserialize, Serialize};

/// Everything the profile page needs, fetched in one round trip.
///
/// `follows` and `can_update` are computed on the server for the requesting
/// viewer; the page itself never evaluates policy, it only branches on these
/// booleans.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    pub user: UserInfo,
    /// All of the user's posts, newest first.
    pub posts: Vec<PostInfo>,
    pub follower_count: u64,
    pub following_count: u64,
    /// Whether the viewer currently follows this user.
    pub follows: bool,
    /// Whether the viewer may edit this profile and add posts to it.
    pub can_update: bool,
}
