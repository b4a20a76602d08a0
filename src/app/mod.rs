//! Dioxus fullstack application entry point.
//!
//! `App` is the hydrated client root with routing. `ServerPage` is what the
//! axum server renders for a single request path.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod navigation_context;
pub mod pages;

use crate::content::NavigationData;
use components::Layout;
use navigation_context::use_navigation_provider;
use pages::{page_title, Home, PageBody, SitePage};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Content is fetched from /api/navigation on the client
    use_navigation_provider(None);

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    SitePage { segments: Vec<String> },
}

#[derive(Props, Clone, PartialEq)]
pub struct ServerPageProps {
    pub data: NavigationData,
    /// Request path
    pub path: String,
}

/// One page rendered on the server, content supplied up front.
#[component]
pub fn ServerPage(props: ServerPageProps) -> Element {
    use_navigation_provider(Some(props.data.clone()));
    let title = page_title(&props.path);

    rsx! {
        Layout { title, current_path: props.path.clone(),
            PageBody { path: props.path.clone() }
        }
    }
}
