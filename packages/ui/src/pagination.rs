use api::PageLink;
use dioxus::prelude::*;

fn item_class(link: &PageLink) -> &'static str {
    if link.active {
        "page-item active"
    } else if link.url.is_none() {
        "page-item disabled"
    } else {
        "page-item"
    }
}

/// Pagination controls rendered verbatim from backend-supplied link metadata.
/// No page-window computation happens here; disabled entries become inert
/// spans, the active entry is highlighted.
#[component]
pub fn Pagination(links: Vec<PageLink>) -> Element {
    rsx! {
        nav {
            ul {
                class: "pagination",
                for link in links.iter() {
                    li {
                        class: item_class(link),
                        if let Some(url) = link.url.as_ref() {
                            a { class: "page-link", href: "{url}", "{link.label}" }
                        } else {
                            span { class: "page-link", "{link.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: &str, url: Option<&str>, active: bool) -> PageLink {
        PageLink {
            label: label.to_string(),
            url: url.map(str::to_string),
            active,
        }
    }

    #[test]
    fn renders_anchors_spans_and_active_marker() {
        let html = dioxus_ssr::render_element(rsx! {
            Pagination {
                links: vec![
                    link("« Previous", None, false),
                    link("1", Some("/?page=1"), true),
                    link("2", Some("/?page=2"), false),
                    link("Next »", Some("/?page=2"), false),
                ],
            }
        });
        assert!(html.contains("page-item disabled"));
        assert!(html.contains("page-item active"));
        assert_eq!(html.matches("<a ").count(), 3);
        assert!(html.contains("href=\"/?page=2\""));
    }
}
