//! Shared UI components for the Dioxus fullstack site.

pub mod dropdown;
pub mod layout;
pub mod navbar;
pub mod overlay;

pub use dropdown::DropdownList;
pub use layout::Layout;
pub use navbar::Navbar;
pub use overlay::HoverOverlay;
