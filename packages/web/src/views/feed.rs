use dioxus::prelude::*;
use ui::views::FeedView;

/// Feed route: fetch the requested page, then hand the data to the pure view.
/// A missing `?page` query deserializes to 0, which is read as page 1.
#[component]
pub fn Feed(page: u32) -> Element {
    // Track the page in a signal so use_resource re-runs when pagination
    // links change the query parameter.
    let mut page_signal = use_signal(|| page.max(1));
    if *page_signal.peek() != page.max(1) {
        page_signal.set(page.max(1));
    }

    let feed = use_resource(move || {
        let page = page_signal();
        async move { api::get_feed(page).await }
    });

    match feed() {
        Some(Ok(data)) => rsx! {
            FeedView { feed: data }
        },
        Some(Err(e)) => rsx! {
            div { class: "load-error", "Could not load the feed: {e}" }
        },
        None => rsx! {
            div { class: "loading", "Loading..." }
        },
    }
}
