//! Document-to-URL resolution.

/// Maps a CMS document (type + slug) to a navigable path.
///
/// `None` means the destination can't be resolved; callers drop the entry.
pub trait HrefResolver {
    fn resolve(&self, doc_type: &str, slug: Option<&str>) -> Option<String>;
}

/// Route table for the gallery site.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SiteRoutes;

impl HrefResolver for SiteRoutes {
    fn resolve(&self, doc_type: &str, slug: Option<&str>) -> Option<String> {
        let slug = slug.map(str::trim).filter(|s| !s.is_empty());
        let prefix = match doc_type {
            "home" => return Some("/".to_string()),
            "page" => "",
            "artist" => "/artists",
            "collection" => "/collections",
            "product" => "/products",
            "post" => "/blog",
            _ => return None,
        };
        slug.map(|s| format!("{}/{}", prefix, urlencoding::encode(s)))
    }
}
