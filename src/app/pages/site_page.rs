//! Catch-all page for every CMS-routed path.

use dioxus::prelude::*;

use super::page_title;
use crate::app::components::Layout;

/// Page for `/:..segments`.
#[component]
pub fn SitePage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    let title = page_title(&path);

    rsx! {
        Layout { title, current_path: path.clone(),
            PageBody { path: path.clone() }
        }
    }
}

/// Placeholder body; the real content is rendered by the CMS front-end.
#[component]
pub fn PageBody(path: String) -> Element {
    let heading = page_title(&path);

    rsx! {
        section { class: "tracking-tighter",
            "data-page": "{path}",
            h1 { class: "uppercase text-4xl md:text-6xl font-extrabold", "{heading}" }
        }
    }
}
