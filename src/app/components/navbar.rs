//! Site navigation bar: two bands of menu links, hover overlay, dropdowns.

use dioxus::prelude::*;

use super::dropdown::DropdownList;
use super::overlay::HoverOverlay;
use crate::content::{NavigationData, SiteRoutes};
use crate::nav::{
    build_dropdown, layout_menu, Dropdown, DropdownKind, HoverEvent, NavEntry, NavbarState,
};

#[derive(Props, Clone, PartialEq)]
pub struct NavbarProps {
    pub data: NavigationData,
    /// Current route path, e.g. "/artists/ana-mendieta"
    pub current_path: String,
    /// Hover to start from (server-rendered previews, tests)
    pub initial_hover: Option<String>,
}

/// Navigation bar component.
///
/// The first two menu items sit in a band across the top of the page and
/// can open the Artists/Collections dropdowns; the rest are pinned to the
/// bottom edge.
#[component]
pub fn Navbar(props: NavbarProps) -> Element {
    let mut state = use_signal(|| NavbarState::new(props.initial_hover.clone()));

    let snapshot = state.read().clone();
    let hovered = snapshot.hovered();
    let layout = layout_menu(
        &props.data.settings.menu_items,
        &SiteRoutes,
        &props.current_path,
        hovered,
    );
    let artists = build_dropdown(DropdownKind::Artists, &props.data, &SiteRoutes, hovered);
    let collections =
        build_dropdown(DropdownKind::Collections, &props.data, &SiteRoutes, hovered);

    let dropdown_for = |entry: &NavEntry| -> Option<Dropdown> {
        entry.dropdown.map(|kind| match kind {
            DropdownKind::Artists => artists.clone(),
            DropdownKind::Collections => collections.clone(),
        })
    };
    let top: Vec<(NavEntry, Option<Dropdown>)> = layout
        .top
        .iter()
        .map(|entry| (entry.clone(), dropdown_for(entry)))
        .collect();

    rsx! {
        HoverOverlay { overlay: snapshot.overlay }

        nav { class: "fixed top-0 w-full z-50 flex flex-wrap items-center justify-between gap-x-0 px-4 md:px-16 lg:px-32 text-black tracking-tighter",
            "aria-label": "Main",
            for (entry, dropdown) in top {
                TopBandItem {
                    key: "{entry.palette_index}",
                    entry: entry.clone(),
                    dropdown: dropdown.clone(),
                    on_hover: move |event: HoverEvent| state.write().apply(event),
                }
            }

            div { class: "fixed bottom-0 left-0 w-full z-10 flex flex-wrap items-center justify-between gap-x-0 px-4 md:px-16 lg:px-32 text-black tracking-tighter",
                for entry in layout.bottom {
                    BottomBandItem {
                        key: "{entry.palette_index}",
                        entry: entry.clone(),
                        on_hover: move |event: HoverEvent| state.write().apply(event),
                    }
                }
            }
        }
    }
}

/// Top-band entry: a colored bar above the title, plus an optional dropdown
/// that stays open while the pointer is anywhere inside the entry.
#[component]
fn TopBandItem(
    entry: NavEntry,
    dropdown: Option<Dropdown>,
    on_hover: EventHandler<HoverEvent>,
) -> Element {
    let title = entry.title.clone();

    rsx! {
        div { class: "relative px-0 pb-2",
            "data-nav-item": "{entry.title}",
            "data-active": "{entry.active}",
            "data-hovered": "{entry.hovered}",
            onmouseenter: move |_| on_hover.call(HoverEvent::Enter(title.clone())),
            onmouseleave: move |_| on_hover.call(HoverEvent::Leave),
            a { class: "uppercase tracking-tighter text-lg font-extrabold hover:text-black md:text-2xl cursor-pointer",
                href: "{entry.href}",
                div { class: "h-2 w-full z-20 relative",
                    "data-role": "border",
                    style: "background-color: {entry.border_color};",
                }
                div { class: "z-10",
                    style: "color: {entry.text_color};",
                    "{entry.title}"
                }
            }
            {dropdown.map(|dropdown| rsx! { DropdownList { dropdown } })}
        }
    }
}

/// Bottom-band entry: a link with an 8px underline in the border color.
#[component]
fn BottomBandItem(entry: NavEntry, on_hover: EventHandler<HoverEvent>) -> Element {
    let title = entry.title.clone();

    rsx! {
        a { class: "uppercase text-lg font-extrabold tracking-tighter hover:text-black md:text-2xl",
            href: "{entry.href}",
            "data-nav-item": "{entry.title}",
            "data-active": "{entry.active}",
            "data-hovered": "{entry.hovered}",
            style: "border-bottom: 8px solid {entry.border_color}; color: {entry.text_color};",
            div { class: "z-10",
                onmouseenter: move |_| on_hover.call(HoverEvent::Enter(title.clone())),
                onmouseleave: move |_| on_hover.call(HoverEvent::Leave),
                "{entry.title}"
            }
        }
    }
}
