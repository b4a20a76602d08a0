//! Pure derivation of the rendered navigation from inputs + hover.

use crate::content::{HrefResolver, MenuItem, NavigationData};

use super::motion::{slide_style, Transition};
use super::style::{border_color, is_active_route, text_color};

/// Number of menu items placed in the top band.
pub const TOP_BAND_LEN: usize = 2;

/// First palette index used by the bottom band, so colors continue from
/// the top band.
pub const BOTTOM_BAND_PALETTE_OFFSET: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    /// Overlays the top of the page; items here can open dropdowns.
    Top,
    /// Fixed to the bottom edge of the viewport.
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownKind {
    Artists,
    Collections,
}

impl DropdownKind {
    pub fn for_title(title: &str) -> Option<Self> {
        match title {
            "Artists" => Some(Self::Artists),
            "Collections" => Some(Self::Collections),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Artists => "Artists",
            Self::Collections => "Collections",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavEntry {
    pub title: String,
    pub href: String,
    pub band: Band,
    pub palette_index: usize,
    pub active: bool,
    pub hovered: bool,
    pub border_color: &'static str,
    pub text_color: &'static str,
    pub dropdown: Option<DropdownKind>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavLayout {
    pub top: Vec<NavEntry>,
    pub bottom: Vec<NavEntry>,
}

impl NavLayout {
    pub fn entries(&self) -> impl Iterator<Item = &NavEntry> {
        self.top.iter().chain(self.bottom.iter())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DropdownLink {
    pub label: String,
    pub href: String,
    /// Position in the source list, unresolved entries included.
    pub position: usize,
}

impl DropdownLink {
    pub fn transition(&self) -> Transition {
        Transition::dropdown_item(self.position)
    }

    pub fn style(&self, open: bool) -> String {
        slide_style(open, self.transition())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dropdown {
    pub kind: DropdownKind,
    pub open: bool,
    pub links: Vec<DropdownLink>,
}

/// Build the two bands of menu entries.
///
/// Items whose destination doesn't resolve are skipped, but they still
/// occupy their palette slot.
pub fn layout_menu(
    items: &[MenuItem],
    resolver: &impl HrefResolver,
    path: &str,
    hovered: Option<&str>,
) -> NavLayout {
    let split = items.len().min(TOP_BAND_LEN);
    let (top, bottom) = items.split_at(split);

    let top = top
        .iter()
        .enumerate()
        .filter_map(|(i, item)| entry(item, Band::Top, i, resolver, path, hovered))
        .collect();
    let bottom = bottom
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            entry(
                item,
                Band::Bottom,
                i + BOTTOM_BAND_PALETTE_OFFSET,
                resolver,
                path,
                hovered,
            )
        })
        .collect();

    NavLayout { top, bottom }
}

fn entry(
    item: &MenuItem,
    band: Band,
    palette_index: usize,
    resolver: &impl HrefResolver,
    path: &str,
    hovered: Option<&str>,
) -> Option<NavEntry> {
    let Some(href) = resolver.resolve(&item.doc_type, item.slug.as_deref()) else {
        tracing::trace!(
            "Skipping menu item {:?}: unresolvable {} document",
            item.title,
            item.doc_type
        );
        return None;
    };

    let active = is_active_route(path, &item.title);
    let is_hovered = hovered == Some(item.title.as_str());

    Some(NavEntry {
        title: item.title.clone(),
        href,
        band,
        palette_index,
        active,
        hovered: is_hovered,
        border_color: border_color(palette_index, active, is_hovered),
        text_color: text_color(active),
        dropdown: match band {
            Band::Top => DropdownKind::for_title(&item.title),
            Band::Bottom => None,
        },
    })
}

/// Build the dropdown list for `kind`. It is open only while its exact
/// title is hovered.
pub fn build_dropdown(
    kind: DropdownKind,
    data: &NavigationData,
    resolver: &impl HrefResolver,
    hovered: Option<&str>,
) -> Dropdown {
    let sources: Vec<(&str, Option<&str>, &str)> = match kind {
        DropdownKind::Artists => data
            .artists
            .iter()
            .map(|a| (a.doc_type.as_str(), a.slug.as_deref(), a.name.as_str()))
            .collect(),
        DropdownKind::Collections => data
            .collections
            .iter()
            .map(|c| (c.doc_type.as_str(), c.slug.as_deref(), c.title.as_str()))
            .collect(),
    };

    let links = sources
        .into_iter()
        .enumerate()
        .filter_map(|(position, (doc_type, slug, label))| {
            let href = resolver.resolve(doc_type, slug)?;
            Some(DropdownLink {
                label: label.to_string(),
                href,
                position,
            })
        })
        .collect();

    Dropdown {
        kind,
        open: hovered == Some(kind.title()),
        links,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::content::{ArtistSummary, CollectionSummary, SettingsPayload, SiteRoutes};
    use crate::nav::palette::{MUTED_GRAY, TRANSPARENT};

    fn item(doc_type: &str, slug: Option<&str>, title: &str) -> MenuItem {
        MenuItem {
            doc_type: doc_type.into(),
            slug: slug.map(Into::into),
            title: title.into(),
        }
    }

    fn menu() -> Vec<MenuItem> {
        vec![
            item("page", Some("artists"), "Artists"),
            item("page", Some("collections"), "Collections"),
            item("page", Some("blog"), "Blog"),
            item("page", Some("merch"), "Merch"),
            item("page", Some("info"), "Info"),
        ]
    }

    #[test]
    fn test_partition_into_bands() {
        let layout = layout_menu(&menu(), &SiteRoutes, "/", None);
        let top: Vec<_> = layout.top.iter().map(|e| e.title.as_str()).collect();
        let bottom: Vec<_> = layout.bottom.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(top, ["Artists", "Collections"]);
        assert_eq!(bottom, ["Blog", "Merch", "Info"]);
    }

    #[test]
    fn test_short_menu_has_no_bottom_band() {
        let layout = layout_menu(&menu()[..1], &SiteRoutes, "/", None);
        assert_eq!(layout.top.len(), 1);
        assert!(layout.bottom.is_empty());
    }

    #[test]
    fn test_palette_continues_across_bands() {
        let layout = layout_menu(&menu(), &SiteRoutes, "/", None);
        let colors: Vec<_> = layout.entries().map(|e| e.border_color).collect();
        assert_eq!(colors, ["#C6F042", "#FF4517", "#B798DF", "#FE2B97", "#000"]);
    }

    #[test]
    fn test_unresolvable_items_are_dropped_but_keep_their_slot() {
        let mut items = menu();
        items[2] = item("page", None, "Blog");
        let layout = layout_menu(&items, &SiteRoutes, "/", None);

        assert!(layout.entries().all(|e| e.title != "Blog"));
        let merch = layout.bottom.iter().find(|e| e.title == "Merch").unwrap();
        assert_eq!(merch.palette_index, 3);
        assert_eq!(merch.border_color, "#FE2B97");
    }

    #[test]
    fn test_active_route_scenario() {
        let layout = layout_menu(&menu(), &SiteRoutes, "/artists", None);
        for e in layout.entries() {
            if e.title == "Artists" {
                assert!(e.active);
                assert_eq!(e.border_color, "#C6F042");
                assert_eq!(e.text_color, "black");
            } else {
                assert!(!e.active);
                assert_eq!(e.border_color, MUTED_GRAY);
                assert_eq!(e.text_color, MUTED_GRAY);
            }
        }
    }

    #[test]
    fn test_hovered_border_is_transparent() {
        for path in ["/", "/artists", "/somewhere-else"] {
            let layout = layout_menu(&menu(), &SiteRoutes, path, Some("Merch"));
            let merch = layout.entries().find(|e| e.title == "Merch").unwrap();
            assert!(merch.hovered);
            assert_eq!(merch.border_color, TRANSPARENT);
            assert_eq!(layout.entries().filter(|e| e.hovered).count(), 1);
        }
    }

    #[test]
    fn test_only_top_band_gets_dropdowns() {
        let items = vec![
            item("page", Some("blog"), "Blog"),
            item("page", Some("artists"), "Artists"),
            item("page", Some("collections"), "Collections"),
        ];
        let layout = layout_menu(&items, &SiteRoutes, "/", None);
        assert_eq!(layout.top[1].dropdown, Some(DropdownKind::Artists));
        assert_eq!(layout.bottom[0].dropdown, None);
    }

    fn data() -> NavigationData {
        NavigationData {
            settings: SettingsPayload { menu_items: menu() },
            artists: vec![
                ArtistSummary {
                    doc_type: "artist".into(),
                    slug: Some("a".into()),
                    name: "Ana".into(),
                },
                ArtistSummary {
                    doc_type: "artist".into(),
                    slug: None,
                    name: "Nobody".into(),
                },
                ArtistSummary {
                    doc_type: "artist".into(),
                    slug: Some("c".into()),
                    name: "Cy".into(),
                },
            ],
            collections: vec![CollectionSummary {
                doc_type: "collection".into(),
                slug: Some("spring".into()),
                title: "Spring".into(),
            }],
        }
    }

    #[test]
    fn test_dropdown_open_only_for_exact_title() {
        let data = data();
        assert!(build_dropdown(DropdownKind::Artists, &data, &SiteRoutes, Some("Artists")).open);
        assert!(!build_dropdown(DropdownKind::Artists, &data, &SiteRoutes, Some("Collections")).open);
        assert!(!build_dropdown(DropdownKind::Artists, &data, &SiteRoutes, Some("artists")).open);
        assert!(!build_dropdown(DropdownKind::Collections, &data, &SiteRoutes, None).open);
    }

    #[test]
    fn test_dropdown_drops_unresolved_and_staggers_by_position() {
        let dropdown = build_dropdown(DropdownKind::Artists, &data(), &SiteRoutes, Some("Artists"));
        let labels: Vec<_> = dropdown.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Ana", "Cy"]);
        assert_eq!(dropdown.links[0].transition().delay_ms, 0);
        assert_eq!(dropdown.links[1].transition().delay_ms, 140);
        assert_eq!(dropdown.links[1].href, "/artists/c");
    }

    #[test]
    fn test_collection_dropdown_uses_titles() {
        let dropdown = build_dropdown(
            DropdownKind::Collections,
            &data(),
            &SiteRoutes,
            Some("Collections"),
        );
        assert_eq!(dropdown.links[0].label, "Spring");
        assert_eq!(dropdown.links[0].href, "/collections/spring");
    }
}
