//! Storage browser navigation and listing construction.
//!
//! Navigation is modelled as explicit requests: [`Navigator::begin`] bumps a
//! generation counter and returns a [`NavRequest`] carrying the target path
//! and manifest URL. When the manifest arrives, the result is applied only if
//! [`Navigator::is_current`] still holds for that request. A slow response
//! for a folder the user already left is dropped instead of overwriting the
//! newer listing.
//!
//! Listing construction ([`ListingState::from_result`]) is pure, so the whole
//! fetch-and-render flow is testable with a mock fetcher via [`load_listing`].

use std::future::Future;

use crate::config::{BrowserConfig, captions};
use crate::core::error::FetchError;
use crate::models::{FileIcon, Manifest, StoragePath};
use crate::utils::format::format_item_count;
use crate::utils::log;

// =============================================================================
// Navigation
// =============================================================================

/// A single navigation: target folder plus the generation it was issued at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavRequest {
    pub generation: u64,
    pub path: StoragePath,
    pub manifest_url: String,
}

/// Tracks the active navigation.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    generation: u64,
    current: StoragePath,
}

impl Navigator {
    /// Start navigating to `path`, superseding any request in flight.
    pub fn begin(&mut self, path: StoragePath, config: &BrowserConfig) -> NavRequest {
        self.generation += 1;
        self.current = path.clone();
        NavRequest {
            generation: self.generation,
            manifest_url: path.manifest_url(config.storage_base, config.manifest_file),
            path,
        }
    }

    /// Whether `request` is still the latest navigation.
    pub fn is_current(&self, request: &NavRequest) -> bool {
        request.generation == self.generation
    }

    /// Pass `state` through if `request` is still current, dropping it
    /// otherwise.
    pub fn accept(&self, request: &NavRequest, state: ListingState) -> Option<ListingState> {
        if self.is_current(request) {
            Some(state)
        } else {
            log::warn(&format!(
                "Discarding stale manifest for /{} (generation {})",
                request.path, request.generation
            ));
            None
        }
    }

    pub fn current(&self) -> &StoragePath {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// =============================================================================
// Cards
// =============================================================================

/// File card data.
#[derive(Clone, Debug, PartialEq)]
pub struct FileCard {
    pub label: String,
    pub caption: String,
    /// Physical name, used as the download file name
    pub filename: String,
    /// Resolved URL: `storage/` + path prefix + filename
    pub url: String,
    pub size: Option<u64>,
    pub icon: FileIcon,
}

/// One rendered unit in the grid.
#[derive(Clone, Debug, PartialEq)]
pub enum Card {
    /// "Go up one level"
    Parent { target: StoragePath },
    Folder {
        label: String,
        caption: String,
        target: StoragePath,
    },
    File(FileCard),
}

impl Card {
    /// Navigation target for folder-like cards.
    pub fn target(&self) -> Option<&StoragePath> {
        match self {
            Self::Parent { target } | Self::Folder { target, .. } => Some(target),
            Self::File(_) => None,
        }
    }

    pub fn caption(&self) -> &str {
        match self {
            Self::Parent { .. } => captions::PARENT,
            Self::Folder { caption, .. } => caption,
            Self::File(file) => &file.caption,
        }
    }
}

/// Build the card list for a loaded manifest, in render order.
pub fn build_cards(path: &StoragePath, manifest: &Manifest, config: &BrowserConfig) -> Vec<Card> {
    let mut cards = Vec::with_capacity(manifest.item_count() + 1);

    if config.nested_folders {
        if !path.is_root() {
            cards.push(Card::Parent {
                target: path.parent(),
            });
        }

        cards.extend(manifest.folders.iter().map(|folder| {
            let (label, caption) = if config.show_metadata {
                (folder.label(), folder.caption())
            } else {
                (folder.foldername.as_str(), captions::FOLDER)
            };
            Card::Folder {
                label: label.to_string(),
                caption: caption.to_string(),
                target: path.join(&folder.foldername),
            }
        }));
    }

    cards.extend(manifest.files.iter().map(|file| {
        let (label, caption, size) = if config.show_metadata {
            (file.label(), file.caption(), file.size)
        } else {
            (file.filename.as_str(), captions::FILE, None)
        };
        Card::File(FileCard {
            label: label.to_string(),
            caption: caption.to_string(),
            filename: file.filename.clone(),
            url: path.file_url(config.storage_base, &file.filename),
            size,
            icon: FileIcon::from_path(&file.filename),
        })
    }));

    cards
}

// =============================================================================
// Listing State
// =============================================================================

/// What the grid currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ListingState {
    /// Manifest request in flight
    Loading { path: StoragePath },
    /// Manifest loaded with at least one entry
    Ready {
        path: StoragePath,
        cards: Vec<Card>,
        item_count: usize,
    },
    /// Manifest loaded but lists nothing
    Empty { path: StoragePath },
    /// Manifest unreachable or malformed
    Failed { path: StoragePath, reason: String },
}

impl Default for ListingState {
    fn default() -> Self {
        Self::Loading {
            path: StoragePath::root(),
        }
    }
}

impl ListingState {
    /// Convert a manifest fetch result into the state to render.
    pub fn from_result(
        path: StoragePath,
        result: Result<Manifest, FetchError>,
        config: &BrowserConfig,
    ) -> Self {
        match result {
            Ok(manifest) => {
                let item_count = if config.nested_folders {
                    manifest.item_count()
                } else {
                    manifest.files.len()
                };
                if item_count == 0 {
                    Self::Empty { path }
                } else {
                    let cards = build_cards(&path, &manifest, config);
                    Self::Ready {
                        path,
                        cards,
                        item_count,
                    }
                }
            }
            Err(e) => Self::Failed {
                path,
                reason: e.to_string(),
            },
        }
    }

    pub fn path(&self) -> &StoragePath {
        match self {
            Self::Loading { path }
            | Self::Ready { path, .. }
            | Self::Empty { path }
            | Self::Failed { path, .. } => path,
        }
    }

    /// Header label: item count, a loading hint, or the error marker.
    pub fn count_label(&self) -> String {
        match self {
            Self::Loading { .. } => "Loading...".to_string(),
            Self::Ready { item_count, .. } => format_item_count(*item_count),
            Self::Empty { .. } => format_item_count(0),
            Self::Failed { .. } => "Error loading files".to_string(),
        }
    }

    /// Escape link offered by the placeholder states.
    ///
    /// Empty folders link to their parent, failures link back to the root.
    /// Nothing is offered at the root itself.
    pub fn escape_target(&self) -> Option<StoragePath> {
        match self {
            Self::Empty { path } if !path.is_root() => Some(path.parent()),
            Self::Failed { path, .. } if !path.is_root() => Some(StoragePath::root()),
            _ => None,
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Fetch the manifest for `request` and build the resulting listing.
///
/// `fetch` receives the manifest URL. Staleness is not checked here; the
/// caller compares the request against its [`Navigator`] before applying.
pub async fn load_listing<F, Fut>(
    request: &NavRequest,
    config: &BrowserConfig,
    fetch: F,
) -> ListingState
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<Manifest, FetchError>>,
{
    log::debug(&format!("Loading manifest from: {}", request.manifest_url));

    let result = fetch(request.manifest_url.clone()).await;
    match &result {
        Ok(manifest) => log::debug(&format!(
            "Loaded manifest: {} files, {} folders",
            manifest.files.len(),
            manifest.folders.len()
        )),
        Err(e) => log::error(&format!(
            "Error loading {}: {}",
            request.manifest_url, e
        )),
    }

    ListingState::from_result(request.path.clone(), result, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileEntry, FolderEntry};

    fn file(name: &str) -> FileEntry {
        FileEntry {
            filename: name.to_string(),
            name: None,
            description: None,
            size: None,
        }
    }

    fn folder(name: &str) -> FolderEntry {
        FolderEntry {
            foldername: name.to_string(),
            name: None,
            description: None,
        }
    }

    fn manifest(files: &[&str], folders: &[&str]) -> Manifest {
        Manifest {
            files: files.iter().map(|f| file(f)).collect(),
            folders: folders.iter().map(|f| folder(f)).collect(),
        }
    }

    const CONFIG: BrowserConfig = BrowserConfig::DEFAULT;

    // =========================================================================
    // Navigator Tests
    // =========================================================================

    #[test]
    fn test_begin_builds_manifest_url() {
        let mut nav = Navigator::default();
        let req = nav.begin(StoragePath::root(), &CONFIG);
        assert_eq!(req.manifest_url, "storage/files.json");

        let req = nav.begin(StoragePath::parse("a/b"), &CONFIG);
        assert_eq!(req.manifest_url, "storage/a/b/files.json");
        assert_eq!(nav.current().as_string(), "a/b");
    }

    #[test]
    fn test_newer_navigation_supersedes_older() {
        let mut nav = Navigator::default();
        let parent = nav.begin(StoragePath::root(), &CONFIG);
        let child = nav.begin(StoragePath::parse("a"), &CONFIG);

        assert!(!nav.is_current(&parent));
        assert!(nav.is_current(&child));
        assert_eq!(nav.generation(), 2);
    }

    #[test]
    fn test_renavigating_same_path_still_supersedes() {
        let mut nav = Navigator::default();
        let first = nav.begin(StoragePath::parse("a"), &CONFIG);
        let second = nav.begin(StoragePath::parse("a"), &CONFIG);
        assert_eq!(first.path, second.path);
        assert!(!nav.is_current(&first));
        assert!(nav.is_current(&second));
    }

    // =========================================================================
    // Card Tests
    // =========================================================================

    #[test]
    fn test_cards_at_root_have_no_parent() {
        let cards = build_cards(&StoragePath::root(), &manifest(&["x.txt"], &["a"]), &CONFIG);
        assert_eq!(cards.len(), 2);
        assert!(matches!(cards[0], Card::Folder { .. }));
        assert!(matches!(cards[1], Card::File(_)));
    }

    #[test]
    fn test_card_order_parent_folders_files() {
        let path = StoragePath::parse("a/b");
        let cards = build_cards(&path, &manifest(&["f1", "f2"], &["c", "d"]), &CONFIG);

        assert_eq!(
            cards[0],
            Card::Parent {
                target: StoragePath::parse("a")
            }
        );
        assert_eq!(cards[1].target(), Some(&StoragePath::parse("a/b/c")));
        assert_eq!(cards[2].target(), Some(&StoragePath::parse("a/b/d")));
        assert!(matches!(&cards[3], Card::File(f) if f.filename == "f1"));
        assert!(matches!(&cards[4], Card::File(f) if f.filename == "f2"));
    }

    #[test]
    fn test_file_card_resolution() {
        let path = StoragePath::parse("docs");
        let mut entry = file("report.pdf");
        entry.name = Some("Annual Report".to_string());
        entry.size = Some(1024);
        let manifest = Manifest {
            files: vec![entry],
            folders: vec![],
        };

        let cards = build_cards(&path, &manifest, &CONFIG);
        let Card::File(card) = &cards[1] else {
            panic!("expected file card, got {:?}", cards[1]);
        };
        assert_eq!(card.label, "Annual Report");
        assert_eq!(card.caption, captions::FILE);
        assert_eq!(card.url, "storage/docs/report.pdf");
        assert_eq!(card.size, Some(1024));
        assert_eq!(card.icon, FileIcon::Pdf);
    }

    #[test]
    fn test_without_metadata_uses_raw_names() {
        let config = BrowserConfig {
            show_metadata: false,
            ..CONFIG
        };
        let mut entry = file("a.txt");
        entry.name = Some("Pretty".to_string());
        entry.size = Some(10);
        let manifest = Manifest {
            files: vec![entry],
            folders: vec![FolderEntry {
                foldername: "raw".to_string(),
                name: Some("Nice".to_string()),
                description: Some("desc".to_string()),
            }],
        };

        let cards = build_cards(&StoragePath::root(), &manifest, &config);
        assert!(matches!(&cards[0], Card::Folder { label, .. } if label == "raw"));
        assert_eq!(cards[0].caption(), captions::FOLDER);
        assert!(matches!(&cards[1], Card::File(f) if f.label == "a.txt" && f.size.is_none()));
    }

    #[test]
    fn test_flat_browser_ignores_folders() {
        let config = BrowserConfig {
            nested_folders: false,
            ..CONFIG
        };
        let state = ListingState::from_result(
            StoragePath::parse("a"),
            Ok(manifest(&["x.txt"], &["sub", "sub2"])),
            &config,
        );
        let ListingState::Ready {
            cards, item_count, ..
        } = state
        else {
            panic!("expected ready listing");
        };
        assert_eq!(item_count, 1);
        assert_eq!(cards.len(), 1);
        assert!(matches!(cards[0], Card::File(_)));
    }

    #[test]
    fn test_duplicate_filenames_render_independently() {
        let cards = build_cards(
            &StoragePath::root(),
            &manifest(&["same.txt", "same.txt"], &[]),
            &CONFIG,
        );
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0], cards[1]);
    }

    // =========================================================================
    // ListingState Tests
    // =========================================================================

    #[test]
    fn test_item_count_is_files_plus_folders() {
        for (n, m) in [(1, 0), (0, 1), (3, 2)] {
            let files: Vec<String> = (0..n).map(|i| format!("f{i}.txt")).collect();
            let folders: Vec<String> = (0..m).map(|i| format!("d{i}")).collect();
            let files: Vec<&str> = files.iter().map(String::as_str).collect();
            let folders: Vec<&str> = folders.iter().map(String::as_str).collect();

            let state =
                ListingState::from_result(StoragePath::root(), Ok(manifest(&files, &folders)), &CONFIG);
            assert!(matches!(state, ListingState::Ready { item_count, .. } if item_count == n + m));
        }
    }

    #[test]
    fn test_empty_manifest() {
        let state = ListingState::from_result(StoragePath::root(), Ok(Manifest::default()), &CONFIG);
        assert_eq!(
            state,
            ListingState::Empty {
                path: StoragePath::root()
            }
        );
        assert_eq!(state.count_label(), "0 items");
        assert_eq!(state.escape_target(), None);

        let nested =
            ListingState::from_result(StoragePath::parse("a/b"), Ok(Manifest::default()), &CONFIG);
        assert_eq!(nested.escape_target(), Some(StoragePath::parse("a")));
    }

    #[test]
    fn test_failure_at_root_offers_no_escape() {
        let state =
            ListingState::from_result(StoragePath::root(), Err(FetchError::HttpError(404)), &CONFIG);
        assert_eq!(
            state,
            ListingState::Failed {
                path: StoragePath::root(),
                reason: "HTTP error: 404".to_string()
            }
        );
        assert_eq!(state.count_label(), "Error loading files");
        assert_eq!(state.escape_target(), None);
    }

    #[test]
    fn test_nested_failure_links_to_root() {
        let state = ListingState::from_result(
            StoragePath::parse("a/b"),
            Err(FetchError::JsonParseError("bad".into())),
            &CONFIG,
        );
        assert_eq!(state.escape_target(), Some(StoragePath::root()));
    }

    #[test]
    fn test_count_labels() {
        assert_eq!(ListingState::default().count_label(), "Loading...");
        let state =
            ListingState::from_result(StoragePath::root(), Ok(manifest(&["a"], &[])), &CONFIG);
        assert_eq!(state.count_label(), "1 item");
    }

    // =========================================================================
    // Loading Tests
    // =========================================================================

    #[tokio::test]
    async fn test_load_child_manifest_url() {
        let mut nav = Navigator::default();
        let root_req = nav.begin(StoragePath::root(), &CONFIG);
        let root = load_listing(&root_req, &CONFIG, |_| async { Ok(manifest(&[], &["a"])) }).await;

        let ListingState::Ready { cards, .. } = root else {
            panic!("expected ready root listing");
        };
        let target = cards[0].target().cloned().expect("folder card has a target");

        let child_req = nav.begin(target, &CONFIG);
        let mut requested = None;
        let child = load_listing(&child_req, &CONFIG, |url| {
            requested = Some(url);
            async { Ok(manifest(&["inner.txt"], &[])) }
        })
        .await;

        assert_eq!(requested.as_deref(), Some("storage/a/files.json"));
        assert_eq!(child.path(), &StoragePath::parse("a"));
        let ListingState::Ready { cards, .. } = child else {
            panic!("expected ready child listing");
        };
        assert_eq!(cards[0].target(), Some(&StoragePath::root()));
    }

    #[tokio::test]
    async fn test_load_failure_becomes_failed_state() {
        let mut nav = Navigator::default();
        let req = nav.begin(StoragePath::root(), &CONFIG);
        let state = load_listing(&req, &CONFIG, |_| async {
            Err(FetchError::NetworkError("Failed to fetch".into()))
        })
        .await;

        assert!(matches!(
            state,
            ListingState::Failed { ref reason, .. } if reason == "Network error: Failed to fetch"
        ));
    }

    #[tokio::test]
    async fn test_stale_response_is_dropped() {
        let mut nav = Navigator::default();
        let slow = nav.begin(StoragePath::root(), &CONFIG);
        let fast = nav.begin(StoragePath::parse("child"), &CONFIG);

        let fast_state = load_listing(&fast, &CONFIG, |_| async { Ok(manifest(&["c.txt"], &[])) }).await;
        let slow_state = load_listing(&slow, &CONFIG, |_| async { Ok(manifest(&["r.txt"], &[])) }).await;

        let applied = nav.accept(&fast, fast_state).expect("latest request is applied");
        assert_eq!(applied.path(), &StoragePath::parse("child"));
        assert_eq!(nav.accept(&slow, slow_state), None);
    }

    #[test]
    fn test_accept_after_renavigation() {
        let mut nav = Navigator::default();
        let first = nav.begin(StoragePath::parse("a"), &CONFIG);
        let state = ListingState::Loading {
            path: StoragePath::parse("a"),
        };
        assert_eq!(nav.accept(&first, state.clone()), Some(state.clone()));

        nav.begin(StoragePath::parse("a"), &CONFIG);
        assert_eq!(nav.accept(&first, state), None);
    }
}
