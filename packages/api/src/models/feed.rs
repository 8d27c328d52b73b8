use serde::{Deserialize, Serialize};

use super::PostInfo;

/// One entry in the pagination control set.
///
/// The backend paginator produces the full set (previous, page numbers, next);
/// the UI renders entries verbatim: an anchor when `url` is present, an inert
/// span otherwise, and the `active` entry highlighted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageLink {
    pub label: String,
    /// None for disabled entries (e.g. "Previous" on the first page).
    pub url: Option<String>,
    pub active: bool,
}

/// One page of the feed: the posts in display order plus pagination metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedPage {
    pub posts: Vec<PostInfo>,
    pub links: Vec<PageLink>,
    pub current_page: u32,
}
