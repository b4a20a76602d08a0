//! Hover state and the overlay that follows it.
//!
//! `HoverState` is the single source of truth: at most one title is hovered.
//! `OverlayState` is the overlay's transition target, reconciled from the
//! hover after every event. It keeps the last color while fading out.

use super::motion::{Transition, OVERLAY_FADE_IN, OVERLAY_FADE_OUT};
use super::palette::{overlay_artwork, overlay_color, Artwork, TRANSPARENT};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: Option<String>,
}

impl HoverState {
    pub fn new(hovered: Option<String>) -> Self {
        Self { hovered }
    }

    /// Pointer entered `title`. Replaces any previous hover.
    pub fn enter(&mut self, title: impl Into<String>) {
        self.hovered = Some(title.into());
    }

    /// Pointer left an item without entering another.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn current(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn is_hovered(&self, title: &str) -> bool {
        self.current() == Some(title)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayState {
    pub visible: bool,
    pub color: &'static str,
    pub artwork: Option<Artwork>,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            visible: false,
            color: TRANSPARENT,
            artwork: None,
        }
    }
}

impl OverlayState {
    /// Move toward the target implied by `hovered`.
    ///
    /// Hovering shows the overlay in that title's color immediately, even
    /// when switching straight from another item. Un-hovering hides it but
    /// keeps color and artwork so the fade-out has something to fade.
    pub fn follow(&mut self, hovered: Option<&str>) {
        match hovered {
            Some(title) => {
                self.visible = true;
                self.color = overlay_color(title);
                self.artwork = overlay_artwork(title);
            }
            None => self.visible = false,
        }
    }

    pub fn opacity(&self) -> u8 {
        u8::from(self.visible)
    }

    pub fn transition(&self) -> Transition {
        if self.visible {
            OVERLAY_FADE_IN
        } else {
            OVERLAY_FADE_OUT
        }
    }

    pub fn css(&self) -> String {
        let pointer = if self.visible { "auto" } else { "none" };
        format!(
            "background-color: {}; opacity: {}; pointer-events: {}; transition: {};",
            self.color,
            self.opacity(),
            pointer,
            self.transition().css("opacity")
        )
    }
}

/// Pointer event on a menu item, as delivered by the item's handlers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    Enter(String),
    Leave,
}

/// Everything the navbar mutates on pointer events, updated together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavbarState {
    pub hover: HoverState,
    pub overlay: OverlayState,
}

impl NavbarState {
    pub fn new(hovered: Option<String>) -> Self {
        let hover = HoverState::new(hovered);
        let mut overlay = OverlayState::default();
        overlay.follow(hover.current());
        Self { hover, overlay }
    }

    pub fn enter(&mut self, title: impl Into<String>) {
        let title = title.into();
        tracing::trace!("nav hover enter: {}", title);
        self.overlay.follow(Some(title.as_str()));
        self.hover.enter(title);
    }

    pub fn leave(&mut self) {
        tracing::trace!("nav hover leave");
        self.hover.leave();
        self.overlay.follow(None);
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hover.current()
    }

    /// Apply one pointer event from a menu item.
    pub fn apply(&mut self, event: HoverEvent) {
        match event {
            HoverEvent::Enter(title) => self.enter(title),
            HoverEvent::Leave => self.leave(),
        }
    }
}
