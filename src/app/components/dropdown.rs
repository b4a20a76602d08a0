//! Staggered dropdown list for the Artists and Collections entries.

use dioxus::prelude::*;

use crate::nav::{Dropdown, DropdownKind};

/// Always rendered so entries can slide back out; `open` drives the
/// per-entry transition target. A closed list takes no pointer events, so
/// the empty area under its title can't re-open it.
#[component]
pub fn DropdownList(dropdown: Dropdown) -> Element {
    let open = dropdown.open;
    let state = if open { "open" } else { "closed" };
    let hidden = !open;
    let tabindex = if open { "0" } else { "-1" };
    let pointer = if open { "auto" } else { "none" };
    let width = match dropdown.kind {
        DropdownKind::Artists => "min-w-max",
        DropdownKind::Collections => "w-full",
    };
    let section = dropdown.kind.title();
    let links: Vec<(usize, String, String, String)> = dropdown
        .links
        .iter()
        .map(|link| {
            (
                link.position,
                link.href.clone(),
                link.label.clone(),
                link.style(open),
            )
        })
        .collect();

    rsx! {
        div { class: "absolute left-0 ml-3 md:ml-6 uppercase tracking-tighter text-lg font-extrabold hover:text-black md:text-2xl {width}",
            "data-dropdown": "{section}",
            "data-state": "{state}",
            "aria-hidden": "{hidden}",
            style: "pointer-events: {pointer};",
            for (position, href, label, style) in links {
                div { key: "{position}",
                    "data-dropdown-item": "{label}",
                    style: "{style}",
                    a { class: "block text-black hover:text-[#fff]",
                        href: "{href}",
                        tabindex: "{tabindex}",
                        "{label}"
                    }
                }
            }
        }
    }
}
