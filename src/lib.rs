//! Gallery Navbar
//!
//! The gallery storefront's navigation bar, rendered with Dioxus.
//!
//! This library provides:
//! - Content types for the CMS menu, artist and collection payloads
//! - Pure hover / active-route / color derivation for the navbar
//! - Dioxus components (navbar, hover overlay, staggered dropdowns)
//! - An axum server that renders pages and serves the navigation payload

pub mod app;
pub mod content;
pub mod nav;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;
