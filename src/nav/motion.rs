//! CSS transition timing for the overlay and dropdown entries.

/// Ease used for dropdown entries (a strong ease-in-out).
pub const DROPDOWN_EASE: &str = "cubic-bezier(0.76, 0, 0.24, 1)";

pub const OVERLAY_FADE_IN: Transition = Transition {
    delay_ms: 0,
    duration_ms: 100,
    easing: "ease",
};

/// Fade-out waits a beat so a quick hop between items doesn't flash.
pub const OVERLAY_FADE_OUT: Transition = Transition {
    delay_ms: 200,
    duration_ms: 400,
    easing: "ease",
};

pub const DROPDOWN_ITEM_DURATION_MS: u32 = 300;
pub const DROPDOWN_STAGGER_MS: u32 = 70;
/// Horizontal start offset of a hidden dropdown entry.
pub const DROPDOWN_OFFSET_PX: i32 = -50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub easing: &'static str,
}

impl Transition {
    /// Render as a single `transition` list entry for `property`.
    pub fn css(&self, property: &str) -> String {
        format!(
            "{} {}ms {} {}ms",
            property, self.duration_ms, self.easing, self.delay_ms
        )
    }

    /// Timing for the dropdown entry at `position`.
    pub fn dropdown_item(position: usize) -> Self {
        let position = u32::try_from(position).unwrap_or(u32::MAX);
        Self {
            delay_ms: position.saturating_mul(DROPDOWN_STAGGER_MS),
            duration_ms: DROPDOWN_ITEM_DURATION_MS,
            easing: DROPDOWN_EASE,
        }
    }
}

/// Inline style for a dropdown entry sliding in (`open`) or back out.
pub fn slide_style(open: bool, transition: Transition) -> String {
    let (opacity, offset) = if open { (1, 0) } else { (0, DROPDOWN_OFFSET_PX) };
    let pointer = if open { "auto" } else { "none" };
    format!(
        "opacity: {}; transform: translateX({}px); pointer-events: {}; transition: {}, {};",
        opacity,
        offset,
        pointer,
        transition.css("opacity"),
        transition.css("transform")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_css() {
        assert_eq!(OVERLAY_FADE_OUT.css("opacity"), "opacity 400ms ease 200ms");
        assert_eq!(OVERLAY_FADE_IN.css("opacity"), "opacity 100ms ease 0ms");
    }

    #[test]
    fn test_dropdown_stagger_is_proportional_to_position() {
        assert_eq!(Transition::dropdown_item(0).delay_ms, 0);
        assert_eq!(Transition::dropdown_item(1).delay_ms, 70);
        assert_eq!(Transition::dropdown_item(4).delay_ms, 280);
        assert_eq!(Transition::dropdown_item(4).duration_ms, 300);
    }

    #[test]
    fn test_slide_style() {
        let t = Transition::dropdown_item(2);
        let open = slide_style(true, t);
        assert!(open.contains("opacity: 1;"));
        assert!(open.contains("translateX(0px)"));
        assert!(open.contains("140ms"));

        let closed = slide_style(false, t);
        assert!(closed.contains("opacity: 0;"));
        assert!(closed.contains("translateX(-50px)"));
        assert!(closed.contains("pointer-events: none"));
    }
}
