//! Home page component.

use dioxus::prelude::*;

use super::PageBody;
use crate::app::components::Layout;

#[component]
pub fn Home() -> Element {
    rsx! {
        Layout { title: "Home", current_path: "/",
            PageBody { path: "/" }
        }
    }
}
