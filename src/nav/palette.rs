//! Fixed colors and overlay artwork keyed by menu title.

/// Border colors, cycled by palette index across both bands.
pub const BORDER_COLORS: [&str; 5] = ["#C6F042", "#FF4517", "#B798DF", "#FE2B97", "#000"];

/// Muted gray for items that don't match the current route.
/// Used for both text and border.
pub const MUTED_GRAY: &str = "rgba(255, 255, 255, 0.25)";

pub const ACTIVE_TEXT: &str = "black";

pub const TRANSPARENT: &str = "transparent";

pub fn border_palette(index: usize) -> &'static str {
    BORDER_COLORS[index % BORDER_COLORS.len()]
}

/// Overlay background for a hovered title.
pub fn overlay_color(title: &str) -> &'static str {
    match title {
        "Artists" => "#C6F042",
        "Blog" => "#CC96FF",
        "Collections" => "#FF4517",
        "Merch" => "#d28a04",
        _ => TRANSPARENT,
    }
}

/// Decorative image shown inside the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Artwork {
    pub src: &'static str,
    pub alt: &'static str,
    pub class: &'static str,
}

const ARTISTS_ARTWORK: Artwork = Artwork {
    src: "/images/blobs/artists.svg",
    alt: "Artists Image",
    class: "z-50 absolute left-1/3 md:right-0 bottom-16 md:top-0 w-[100vw] md:w-[70vw]",
};

const COLLECTIONS_ARTWORK: Artwork = Artwork {
    src: "/images/blobs/collectionsTris.svg",
    alt: "Collections Image",
    class: "z-50 absolute right-[13vw] md:left-32 bottom-16 md:bottom-0 w-[80vw] md:w-[55vw] -rotate-12",
};

pub fn overlay_artwork(title: &str) -> Option<Artwork> {
    match title {
        "Artists" => Some(ARTISTS_ARTWORK),
        "Collections" => Some(COLLECTIONS_ARTWORK),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_wraps() {
        assert_eq!(border_palette(0), "#C6F042");
        assert_eq!(border_palette(4), "#000");
        assert_eq!(border_palette(5), "#C6F042");
        assert_eq!(border_palette(7), "#B798DF");
    }

    #[test]
    fn test_overlay_colors() {
        assert_eq!(overlay_color("Artists"), "#C6F042");
        assert_eq!(overlay_color("Blog"), "#CC96FF");
        assert_eq!(overlay_color("Collections"), "#FF4517");
        assert_eq!(overlay_color("Merch"), "#d28a04");
        assert_eq!(overlay_color("Info"), TRANSPARENT);
        // Lookup is exact, not case-folded
        assert_eq!(overlay_color("artists"), TRANSPARENT);
    }

    #[test]
    fn test_artwork_only_for_dropdown_sections() {
        assert!(overlay_artwork("Artists").is_some());
        assert!(overlay_artwork("Collections").is_some());
        assert!(overlay_artwork("Blog").is_none());
    }
}
