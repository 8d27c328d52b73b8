use dioxus::prelude::*;
use ui::views::AppShell;

use crate::Route;

/// Router layout: wraps every page in the shared [`AppShell`], passing the
/// outlet as its content slot.
#[component]
pub fn Shell() -> Element {
    rsx! {
        AppShell {
            Outlet::<Route> {}
        }
    }
}
