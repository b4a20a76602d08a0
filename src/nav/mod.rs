//! Navigation bar state and style derivation.
//!
//! Everything here is plain data and pure functions; the Dioxus components
//! in `app::components` only read what these produce.

pub mod hover;
pub mod model;
pub mod motion;
pub mod palette;
pub mod style;

pub use hover::{HoverEvent, HoverState, NavbarState, OverlayState};
pub use model::{
    build_dropdown, layout_menu, Band, Dropdown, DropdownKind, DropdownLink, NavEntry, NavLayout,
};
pub use style::{border_color, is_active_route, text_color};
