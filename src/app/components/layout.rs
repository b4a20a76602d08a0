//! Layout component wrapping all pages with the navbar.

use dioxus::prelude::*;

use super::navbar::Navbar;
use crate::app::navigation_context::use_navigation;
use crate::app::pages::document_title;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Current route path, used for active-route coloring
    pub current_path: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let navigation = use_navigation();
    let full_title = document_title(&props.title);

    rsx! {
        document::Title { "{full_title}" }

        Navbar {
            data: navigation.data(),
            current_path: props.current_path.clone(),
        }
        main { class: "min-h-screen px-4 md:px-16 lg:px-32 pt-24 pb-24",
            {props.children}
        }
    }
}
