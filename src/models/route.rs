//! Hash-based routing so folder locations survive reloads and history.

use super::StoragePath;

/// Browser location of the storage browser.
/// URL format: `#/folder/subfolder` (e.g., `#/`, `#/reports/2024`)
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// Folder being browsed
    pub path: StoragePath,
}

impl Route {
    pub fn new(path: StoragePath) -> Self {
        Self { path }
    }

    /// Parse URL hash into Route.
    ///
    /// Segments are percent-decoded; a segment that does not decode to UTF-8
    /// is kept as written.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .split('/')
            .filter(|s| !s.is_empty())
            .fold(StoragePath::root(), |path, segment| {
                match urlencoding::decode(segment) {
                    Ok(decoded) => path.join(&decoded),
                    Err(_) => path.join(segment),
                }
            });
        Self::new(path)
    }

    /// Convert Route to URL hash, percent-encoding each segment
    pub fn to_hash(&self) -> String {
        let encoded: Vec<_> = self
            .path
            .segments()
            .iter()
            .map(|s| urlencoding::encode(s))
            .collect();
        format!("#/{}", encoded.join("/"))
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Update browser URL to match this route (using pushState)
    pub fn push(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let hash = self.to_hash();
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&hash));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::new(StoragePath::root()));
        assert_eq!(Route::from_hash("#"), Route::new(StoragePath::root()));
        assert_eq!(Route::from_hash("#/"), Route::new(StoragePath::root()));
        assert_eq!(
            Route::from_hash("#/reports/2024"),
            Route::new(StoragePath::parse("reports/2024"))
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(Route::new(StoragePath::root()).to_hash(), "#/");
        assert_eq!(
            Route::new(StoragePath::parse("reports/2024")).to_hash(),
            "#/reports/2024"
        );
    }

    #[test]
    fn test_hash_encodes_segments() {
        let route = Route::new(StoragePath::parse("My Docs/Café"));
        assert_eq!(route.to_hash(), "#/My%20Docs/Caf%C3%A9");
    }

    #[test]
    fn test_encoded_hash_decodes_to_folder_names() {
        // location.hash hands back the percent-encoded form
        let route = Route::from_hash("#/My%20Docs/Caf%C3%A9");
        assert_eq!(route.path.segments(), ["My Docs", "Café"]);
        assert_eq!(route.path.display("storage"), "/storage/My Docs/Café");

        let original = Route::new(StoragePath::parse("My Docs/Café"));
        assert_eq!(Route::from_hash(&original.to_hash()), original);
    }

    #[test]
    fn test_unencoded_hash_is_accepted() {
        assert_eq!(
            Route::from_hash("#/My Docs"),
            Route::new(StoragePath::parse("My Docs"))
        );
        assert_eq!(
            Route::from_hash("#/bad%FF"),
            Route::new(StoragePath::parse("bad%FF"))
        );
    }
}
