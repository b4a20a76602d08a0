//! Dioxus page components.
//!
//! Page content itself is owned by the CMS; these shells only place the
//! navbar and a heading for the current route.

mod home;
mod site_page;

pub use home::Home;
pub use site_page::{PageBody, SitePage};

/// Browser-tab title for a path: the first segment, capitalized.
pub fn page_title(path: &str) -> String {
    let first = path.trim_matches('/').split('/').next().unwrap_or_default();
    let mut chars = first.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => "Home".to_string(),
    }
}

/// Full `<title>` text for a page titled `title`.
pub fn document_title(title: &str) -> String {
    format!("{} - Gallery", title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title() {
        assert_eq!(page_title("/"), "Home");
        assert_eq!(page_title(""), "Home");
        assert_eq!(page_title("/artists"), "Artists");
        assert_eq!(page_title("/collections/spring/"), "Collections");
    }

    #[test]
    fn test_document_title() {
        assert_eq!(document_title("Artists"), "Artists - Gallery");
    }
}
