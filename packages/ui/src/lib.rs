//! This crate contains all shared UI for the workspace: the three page views
//! (feed, post detail, profile), the layout shell they render into, and the
//! interactive widgets they embed.

use dioxus::prelude::*;

pub mod views;

pub const PHOTOGRAM_CSS: Asset = asset!("/assets/photogram.css");

mod navbar;
pub use navbar::Navbar;

mod follow_button;
pub use follow_button::FollowButton;

mod pagination;
pub use pagination::Pagination;
