//! # User and profile view models
//!
//! Defines the two client-safe representations that travel together across the
//! server/client boundary:
//!
//! ## [`UserInfo`]
//!
//! The identity anchor. Every post carries exactly one author `UserInfo`, and
//! every `UserInfo` carries exactly one nested [`ProfileInfo`] — neither is
//! optional, so a post without an author or a user without a profile cannot be
//! represented at all.
//!
//! ## [`ProfileInfo`]
//!
//! Extended per-user metadata: the bio title and description, an optional
//! website URL, and an optional avatar image stored under `/storage/`.
//! [`ProfileInfo::profile_image`] resolves the avatar URL and never returns an
//! empty value — when no image has been uploaded it falls back to
//! [`DEFAULT_PROFILE_IMAGE`], so the pages can never render a broken `<img>`.

use serde::{Deserialize, Serialize};

/// Storage path of the placeholder avatar used when a profile has no image.
pub const DEFAULT_PROFILE_IMAGE: &str = "profile/default.jpg";

/// A user as the pages see them: id, username, and their profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub profile: ProfileInfo,
}

/// Per-user profile metadata (1:1 with the owning user).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileInfo {
    /// Short headline shown above the description.
    pub title: String,
    /// Free-form bio text.
    pub description: String,
    /// Optional website; the profile page renders `N/A` when unset.
    pub url: Option<String>,
    /// Storage path of the avatar, or None for the default image.
    pub image: Option<String>,
}

impl ProfileInfo {
    /// Resolve the avatar URL, falling back to the default image asset.
    pub fn profile_image(&self) -> String {
        let path = self.image.as_deref().unwrap_or(DEFAULT_PROFILE_IMAGE);
        format!("/storage/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_image_falls_back_to_default() {
        let profile = ProfileInfo {
            title: String::new(),
            description: String::new(),
            url: None,
            image: None,
        };
        assert_eq!(profile.profile_image(), "/storage/profile/default.jpg");
    }

    #[test]
    fn profile_image_uses_uploaded_avatar() {
        let profile = ProfileInfo {
            title: String::new(),
            description: String::new(),
            url: None,
            image: Some("avatars/sam.png".to_string()),
        };
        assert_eq!(profile.profile_image(), "/storage/avatars/sam.png");
    }
}
