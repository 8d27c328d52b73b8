use dioxus::prelude::*;

use crate::{Navbar, PHOTOGRAM_CSS};

/// Application layout: stylesheet, navbar, and a content slot.
///
/// Pages hand their markup in as `children` instead of inheriting a parent
/// template, so each page stays a plain function of its props.
#[component]
pub fn AppShell(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: PHOTOGRAM_CSS }
        Navbar {}
        main {
            class: "py-4",
            {children}
        }
    }
}
