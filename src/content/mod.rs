//! Content-managed navigation inputs.
//!
//! These mirror the CMS payloads: the site settings with its ordered menu,
//! plus the artist and collection summaries used to fill the dropdowns.
//! All of it is read-only once loaded.

pub mod resolve;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use resolve::{HrefResolver, SiteRoutes};

/// A top-level menu entry. Identity is the slug; order is array position.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ArtistSummary {
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CollectionSummary {
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: String,
}

/// Site-wide settings document. A missing menu means no menu items.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPayload {
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
}

/// Everything the navigation bar needs, as served by `/api/navigation`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct NavigationData {
    #[serde(default)]
    pub settings: SettingsPayload,
    #[serde(default)]
    pub artists: Vec<ArtistSummary>,
    #[serde(default)]
    pub collections: Vec<CollectionSummary>,
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid content JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl NavigationData {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Load the navigation content file from disk.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_navigation(path: &std::path::Path) -> Result<NavigationData, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let data = NavigationData::from_json(&raw)?;
    tracing::debug!(
        "Loaded navigation content: {} menu items, {} artists, {} collections",
        data.settings.menu_items.len(),
        data.artists.len(),
        data.collections.len()
    );
    Ok(data)
}
