//! Full-screen color overlay shown behind the navbar while an item is hovered.

use dioxus::prelude::*;

use crate::nav::OverlayState;

#[component]
pub fn HoverOverlay(overlay: OverlayState) -> Element {
    let style = overlay.css();
    let state = if overlay.visible { "visible" } else { "hidden" };

    rsx! {
        div { class: "fixed inset-0 z-20 overflow-hidden",
            "data-overlay": "{state}",
            "aria-hidden": "true",
            style: "{style}",
            {overlay.artwork.map(|art| rsx! {
                img {
                    class: art.class,
                    src: art.src,
                    alt: art.alt,
                    width: "2500",
                    height: "2500",
                }
            })}
        }
    }
}
