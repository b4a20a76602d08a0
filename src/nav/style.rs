//! Route-based coloring rules.

use super::palette::{border_palette, ACTIVE_TEXT, MUTED_GRAY, TRANSPARENT};

/// Whether a menu title counts as "active" for the current path.
///
/// The root and the info page color every item; otherwise the path must
/// contain the lower-cased title.
pub fn is_active_route(path: &str, title: &str) -> bool {
    if path == "/" || path == "/info" {
        return true;
    }
    path.contains(&title.to_lowercase())
}

pub fn text_color(active: bool) -> &'static str {
    if active {
        ACTIVE_TEXT
    } else {
        MUTED_GRAY
    }
}

/// Hover wins over route coloring: a hovered item's border goes
/// transparent so the overlay shows through.
pub fn border_color(palette_index: usize, active: bool, hovered: bool) -> &'static str {
    if hovered {
        TRANSPARENT
    } else if active {
        border_palette(palette_index)
    } else {
        MUTED_GRAY
    }
}
