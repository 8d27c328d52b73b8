use serde::{Deserialize, Serialize};

use super::UserInfo;

/// A published post: image, caption, and its one author.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostInfo {
    pub id: String,
    /// Storage path of the image, e.g. "uploads/123.jpg".
    pub image: String,
    pub caption: String,
    pub author: UserInfo,
}

impl PostInfo {
    /// Resolve the image URL served by the storage endpoint.
    pub fn image_url(&self) -> String {
        format!("/storage/{}", self.image)
    }
}

/// Post-detail fetch result: the post plus the viewer's follow state
/// towards its author.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostPage {
    pub post: PostInfo,
    pub follows: bool,
}
