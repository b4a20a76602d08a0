//! Navigation content shared via context.
//!
//! The server hands the content in directly when rendering; the browser
//! fetches it from `/api/navigation` once at startup.

use dioxus::prelude::*;

use crate::content::NavigationData;

#[derive(Clone, Copy)]
pub struct NavigationContext {
    data: Signal<NavigationData>,
    /// Whether content has been loaded (from the server or the API)
    loaded: Signal<bool>,
}

impl NavigationContext {
    pub fn data(&self) -> NavigationData {
        (self.data)()
    }

    pub fn is_loaded(&self) -> bool {
        (self.loaded)()
    }

    pub fn set(&self, data: NavigationData) {
        let mut d = self.data;
        let mut loaded = self.loaded;
        d.set(data);
        loaded.set(true);
    }
}

/// Initialize navigation context provider - call once at app root.
///
/// Pass `Some` when the content is already at hand (server rendering).
pub fn use_navigation_provider(initial: Option<NavigationData>) {
    let already_loaded = initial.is_some();
    let data = use_signal(|| initial.unwrap_or_default());
    let loaded = use_signal(|| already_loaded);

    let ctx = NavigationContext { data, loaded };
    use_context_provider(|| ctx);

    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            if ctx.is_loaded() {
                return;
            }
            spawn(async move {
                match crate::app::api::fetch_json::<NavigationData>("/api/navigation").await {
                    Ok(data) => ctx.set(data),
                    Err(e) => tracing::warn!("Failed to load navigation: {}", e),
                }
            });
        });
    }
}

/// Get navigation context - use in any component
pub fn use_navigation() -> NavigationContext {
    use_context::<NavigationContext>()
}
