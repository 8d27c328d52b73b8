use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCameraRetro;
use dioxus_free_icons::Icon;

/// Top navigation bar: brand link back to the feed.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav {
            class: "navbar",
            div {
                class: "container",
                a {
                    class: "navbar-brand d-flex align-items-center",
                    href: "/",
                    Icon { icon: FaCameraRetro, width: 22, height: 22 }
                    span { class: "pl-2", "Photogram" }
                }
            }
        }
    }
}
