//! # Client State Synchronizer
//!
//! [`SnippetSync`] mirrors the remote snippet collection in memory and keeps
//! the derived category and tag views consistent with it.
//!
//! ## Consistency
//!
//! - Remote mutations (`create`, `persist`, `delete`) touch the local snapshot
//!   only after the server accepted them. A failed request leaves it as it was.
//! - `update` and `toggle_favorite` are local drafts until `persist` is called.
//! - After every change to the snippet list the tag list is rebuilt by
//!   [`recompute_tags`].
//! - The state lock is never held across a network call, so concurrent
//!   operations interleave and each applies its result when it resolves.
//!
//! ## Subscribers
//!
//! [`SnippetSync::subscribe`] hands out a broadcast receiver. Every change
//! publishes the full affected snapshot as a [`SyncEvent`].

pub mod search;
pub mod stats;
pub mod tags;

use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};

use crate::client::api::SnippetApiClient;
use crate::client::config::Config;
use crate::client::error::{ClientError, SyncError};
use crate::client::export::ExportBundle;
use crate::shared::category::default_categories;
use crate::shared::{
    Category, CategoryPatch, NewCategory, NewSnippet, NewTag, SearchFilters, Snippet,
    SnippetPatch, SnippetStats, Tag,
};

pub use search::{filter_snippets, recent, RECENT_LIMIT};
pub use stats::compute_stats;
pub use tags::recompute_tags;

/// Capacity of the event channel
const EVENT_CAPACITY: usize = 64;

/// A snapshot published to subscribers after a change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    Snippets(Vec<Snippet>),
    Categories(Vec<Category>),
    Tags(Vec<Tag>),
}

/// Whether the synchronizer has talked to the server yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    /// Only the seeded defaults are present
    Uninitialized,
    /// At least one fetch has been attempted
    Initialized,
}

#[derive(Debug)]
struct SyncState {
    phase: SyncPhase,
    snippets: Vec<Snippet>,
    categories: Vec<Category>,
    tags: Vec<Tag>,
}

impl SyncState {
    fn seeded() -> Self {
        Self {
            phase: SyncPhase::Uninitialized,
            snippets: Vec::new(),
            categories: default_categories(),
            tags: Vec::new(),
        }
    }

    fn retag(&mut self) {
        self.tags = recompute_tags(&self.tags, &self.snippets);
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.snippets.iter().position(|s| s.id == id)
    }

    fn category_name_taken(&self, name: &str, except_id: Option<&str>) -> bool {
        self.categories
            .iter()
            .any(|c| c.name == name && Some(c.id.as_str()) != except_id)
    }
}

/// Local mirror of the snippet library
///
/// Cloning is cheap; clones share state and subscribers.
#[derive(Clone)]
pub struct SnippetSync {
    api: SnippetApiClient,
    state: Arc<RwLock<SyncState>>,
    events: broadcast::Sender<SyncEvent>,
}

impl SnippetSync {
    pub fn new(config: Config) -> Self {
        Self::with_api(SnippetApiClient::new(config))
    }

    pub fn with_api(api: SnippetApiClient) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            api,
            state: Arc::new(RwLock::new(SyncState::seeded())),
            events,
        }
    }

    pub fn api(&self) -> &SnippetApiClient {
        &self.api
    }

    /// Register for snapshot updates
    pub fn subscribe(&self) -> broadcast::Receiver<SyncEvent> {
        self.events.subscribe()
    }

    pub async fn phase(&self) -> SyncPhase {
        self.state.read().await.phase
    }

    // ---- Reads ------------------------------------------------------------

    /// Cached snippets in snapshot order
    pub async fn list(&self) -> Vec<Snippet> {
        self.state.read().await.snippets.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Snippet> {
        let state = self.state.read().await;
        state.snippets.iter().find(|s| s.id == id).cloned()
    }

    pub async fn categories(&self) -> Vec<Category> {
        self.state.read().await.categories.clone()
    }

    pub async fn tags(&self) -> Vec<Tag> {
        self.state.read().await.tags.clone()
    }

    pub async fn search(&self, filters: &SearchFilters) -> Vec<Snippet> {
        filter_snippets(&self.state.read().await.snippets, filters)
    }

    pub async fn stats(&self) -> SnippetStats {
        let state = self.state.read().await;
        compute_stats(&state.snippets, &state.categories, &state.tags)
    }

    pub async fn recent_snippets(&self) -> Vec<Snippet> {
        recent(&self.state.read().await.snippets, RECENT_LIMIT)
    }

    // ---- Remote -----------------------------------------------------------

    /// First load; may be called again to reload
    ///
    /// Fetch failures are logged and otherwise ignored.
    pub async fn initialize(&self) {
        if let Err(e) = self.refresh().await {
            tracing::warn!("Initial snippet load failed, keeping cached state: {}", e);
        }
        let mut state = self.state.write().await;
        if state.phase == SyncPhase::Uninitialized {
            tracing::info!("Snippet synchronizer initialized");
            state.phase = SyncPhase::Initialized;
        }
    }

    /// Replace the snapshot with the server's collection
    ///
    /// On failure the current snapshot is left untouched.
    pub async fn refresh(&self) -> Result<(), SyncError> {
        let snippets = self.api.list().await.map_err(SyncError::RemoteRead)?;

        let (snippets, tags) = {
            let mut state = self.state.write().await;
            state.snippets = snippets;
            state.retag();
            (state.snippets.clone(), state.tags.clone())
        };

        tracing::info!("Loaded {} snippets from server", snippets.len());
        self.publish(SyncEvent::Snippets(snippets));
        self.publish(SyncEvent::Tags(tags));
        Ok(())
    }

    /// Create a snippet on the server and append it locally
    ///
    /// If the snapshot already holds the returned id it is replaced in place.
    pub async fn create(&self, input: NewSnippet) -> Result<Snippet, SyncError> {
        input.validate()?;

        let created = self.api.create(&input).await.map_err(|e| {
            tracing::error!("Failed to create snippet: {}", e);
            SyncError::RemoteWrite(e)
        })?;

        let (snippets, tags) = {
            let mut state = self.state.write().await;
            // a refresh that finished meanwhile may already hold it
            match state.position(&created.id) {
                Some(index) => state.snippets[index] = created.clone(),
                None => state.snippets.push(created.clone()),
            }
            state.retag();
            (state.snippets.clone(), state.tags.clone())
        };

        tracing::info!(id = %created.id, "Snippet created");
        self.publish(SyncEvent::Snippets(snippets));
        self.publish(SyncEvent::Tags(tags));
        Ok(created)
    }

    /// Push the cached version of a snippet to the server
    ///
    /// The cached entry is replaced by what the server returns.
    pub async fn persist(&self, id: &str) -> Result<Snippet, SyncError> {
        let patch = self
            .get(id)
            .await
            .ok_or_else(|| SyncError::not_found(id))?
            .to_patch();

        let saved = match self.api.update(id, &patch).await {
            Ok(Some(saved)) => saved,
            Ok(None) => {
                tracing::error!(id = %id, "Server has no snippet to update");
                return Err(SyncError::RemoteWrite(ClientError::malformed(format!(
                    "server has no snippet {}",
                    id
                ))));
            }
            Err(e) => {
                tracing::error!(id = %id, "Failed to save snippet: {}", e);
                return Err(SyncError::RemoteWrite(e));
            }
        };

        let (snippets, tags) = {
            let mut state = self.state.write().await;
            match state.position(id) {
                Some(index) => state.snippets[index] = saved.clone(),
                None => tracing::warn!(id = %id, "Snippet removed locally while saving"),
            }
            state.retag();
            (state.snippets.clone(), state.tags.clone())
        };

        self.publish(SyncEvent::Snippets(snippets));
        self.publish(SyncEvent::Tags(tags));
        Ok(saved)
    }

    /// Delete on the server, then locally
    ///
    /// Ids unknown to the local snapshot are rejected without a request.
    pub async fn delete(&self, id: &str) -> Result<(), SyncError> {
        if self.get(id).await.is_none() {
            return Err(SyncError::not_found(id));
        }

        self.api.delete(id).await.map_err(|e| {
            tracing::error!(id = %id, "Failed to delete snippet: {}", e);
            SyncError::RemoteWrite(e)
        })?;

        let (snippets, tags) = {
            let mut state = self.state.write().await;
            state.snippets.retain(|s| s.id != id);
            state.retag();
            (state.snippets.clone(), state.tags.clone())
        };

        tracing::info!(id = %id, "Snippet deleted");
        self.publish(SyncEvent::Snippets(snippets));
        self.publish(SyncEvent::Tags(tags));
        Ok(())
    }

    // ---- Local drafts -----------------------------------------------------

    /// Merge `patch` into the cached snippet without contacting the server
    pub async fn update(&self, id: &str, patch: SnippetPatch) -> Result<Snippet, SyncError> {
        patch.validate()?;
        self.edit_local(id, |_| patch).await
    }

    /// Flip the favorite flag of a cached snippet
    pub async fn toggle_favorite(&self, id: &str) -> Result<Snippet, SyncError> {
        self.edit_local(id, |current| {
            SnippetPatch::default().favorite(!current.is_favorite)
        })
        .await
    }

    async fn edit_local<F>(&self, id: &str, make_patch: F) -> Result<Snippet, SyncError>
    where
        F: FnOnce(&Snippet) -> SnippetPatch,
    {
        let (updated, snippets, tags) = {
            let mut state = self.state.write().await;
            let index = state.position(id).ok_or_else(|| SyncError::not_found(id))?;
            let patch = make_patch(&state.snippets[index]);
            state.snippets[index].apply_patch(patch);
            let updated = state.snippets[index].clone();
            state.retag();
            (updated, state.snippets.clone(), state.tags.clone())
        };

        tracing::debug!(id = %id, "Snippet edited locally");
        self.publish(SyncEvent::Snippets(snippets));
        self.publish(SyncEvent::Tags(tags));
        Ok(updated)
    }

    // ---- Categories -------------------------------------------------------

    pub async fn add_category(&self, input: NewCategory) -> Result<Category, SyncError> {
        input.validate()?;

        let (category, categories) = {
            let mut state = self.state.write().await;
            if state.category_name_taken(&input.name, None) {
                return Err(SyncError::validation(
                    "name",
                    format!("Category '{}' already exists", input.name),
                ));
            }
            let category = input.into_category();
            state.categories.push(category.clone());
            (category, state.categories.clone())
        };

        self.publish(SyncEvent::Categories(categories));
        Ok(category)
    }

    pub async fn update_category(
        &self,
        id: &str,
        patch: CategoryPatch,
    ) -> Result<Category, SyncError> {
        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return Err(SyncError::validation("name", "Name is required"));
            }
        }

        let (category, categories) = {
            let mut state = self.state.write().await;
            if let Some(name) = &patch.name {
                if state.category_name_taken(name, Some(id)) {
                    return Err(SyncError::validation(
                        "name",
                        format!("Category '{}' already exists", name),
                    ));
                }
            }
            let category = state
                .categories
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| SyncError::not_found(id))?;
            category.apply_patch(patch);
            let category = category.clone();
            (category, state.categories.clone())
        };

        self.publish(SyncEvent::Categories(categories));
        Ok(category)
    }

    /// Remove a category that no cached snippet refers to
    ///
    /// Returns `false` and changes nothing if the category is in use or
    /// does not exist.
    pub async fn delete_category(&self, id: &str) -> bool {
        let categories = {
            let mut state = self.state.write().await;
            if state.snippets.iter().any(|s| s.category == id) {
                tracing::debug!(id = %id, "Category in use, not deleting");
                return false;
            }
            let before = state.categories.len();
            state.categories.retain(|c| c.id != id);
            if state.categories.len() == before {
                return false;
            }
            state.categories.clone()
        };

        self.publish(SyncEvent::Categories(categories));
        true
    }

    // ---- Tags -------------------------------------------------------------

    /// Register a tag by name, or return the existing one
    pub async fn add_tag(&self, input: NewTag) -> Result<Tag, SyncError> {
        if input.name.trim().is_empty() {
            return Err(SyncError::validation("name", "Name is required"));
        }

        let (tag, tags) = {
            let mut state = self.state.write().await;
            if let Some(existing) = state.tags.iter().find(|t| t.name == input.name) {
                return Ok(existing.clone());
            }
            let tag = input.into_tag();
            state.tags.push(tag.clone());
            (tag, state.tags.clone())
        };

        self.publish(SyncEvent::Tags(tags));
        Ok(tag)
    }

    // ---- Bundles ----------------------------------------------------------

    pub async fn export_bundle(&self) -> ExportBundle {
        let state = self.state.read().await;
        ExportBundle {
            snippets: state.snippets.clone(),
            categories: state.categories.clone(),
            tags: state.tags.clone(),
        }
    }

    /// Load a bundle into the local state
    ///
    /// Categories are replaced. Snippets are merged by id, bundle entries
    /// winning. Bundle tags seed ids and colors before counts are rebuilt.
    /// Nothing is sent to the server.
    pub async fn import_bundle(&self, bundle: ExportBundle) {
        let (snippets, categories, tags) = {
            let mut state = self.state.write().await;
            for snippet in bundle.snippets {
                match state.position(&snippet.id) {
                    Some(index) => state.snippets[index] = snippet,
                    None => state.snippets.push(snippet),
                }
            }
            state.categories = bundle.categories;

            let mut seed = bundle.tags;
            seed.extend(state.tags.iter().cloned());
            state.tags = recompute_tags(&seed, &state.snippets);

            (
                state.snippets.clone(),
                state.categories.clone(),
                state.tags.clone(),
            )
        };

        tracing::info!("Imported bundle, {} snippets cached", snippets.len());
        self.publish(SyncEvent::Snippets(snippets));
        self.publish(SyncEvent::Categories(categories));
        self.publish(SyncEvent::Tags(tags));
    }

    /// Drop all cached data and return to the seeded defaults
    pub async fn reset(&self) {
        let (categories, tags) = {
            let mut state = self.state.write().await;
            let phase = state.phase;
            *state = SyncState::seeded();
            state.phase = phase;
            (state.categories.clone(), state.tags.clone())
        };

        tracing::info!("Local snippet state reset");
        self.publish(SyncEvent::Snippets(Vec::new()));
        self.publish(SyncEvent::Categories(categories));
        self.publish(SyncEvent::Tags(tags));
    }

    fn publish(&self, event: SyncEvent) -> usize {
        match self.events.send(event) {
            Ok(subscriber_count) => {
                tracing::debug!("Snapshot sent to {} subscribers", subscriber_count);
                subscriber_count
            }
            Err(_) => {
                tracing::debug!("No subscribers for snapshot");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    /// A synchronizer pointed at a port nothing listens on; fine for
    /// operations that never reach the network.
    fn offline() -> SnippetSync {
        SnippetSync::new(Config::with_server_url("http://127.0.0.1:9").unwrap())
    }

    fn cached(id: &str, input: NewSnippet) -> Snippet {
        input.into_snippet(id.to_string(), crate::shared::snippet::timestamp_now())
    }

    async fn seeded_with(snippets: Vec<Snippet>) -> SnippetSync {
        let sync = offline();
        sync.import_bundle(ExportBundle {
            snippets,
            categories: default_categories(),
            tags: Vec::new(),
        })
        .await;
        sync
    }

    #[tokio::test]
    async fn test_starts_with_defaults() {
        let sync = offline();
        assert_eq!(sync.phase().await, SyncPhase::Uninitialized);
        assert!(sync.list().await.is_empty());
        assert_eq!(sync.categories().await.len(), 8);
        assert!(sync.tags().await.is_empty());
    }

    #[tokio::test]
    async fn test_initialize_absorbs_read_failure() {
        let sync = offline();
        sync.initialize().await;
        assert_eq!(sync.phase().await, SyncPhase::Initialized);
        assert!(sync.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_validates_before_request() {
        let sync = offline();
        let err = sync.create(NewSnippet::new("", "x", "js")).await.unwrap_err();
        assert_matches!(err, SyncError::Validation(_));
    }

    #[tokio::test]
    async fn test_create_network_failure_is_remote_write() {
        let sync = offline();
        let err = sync.create(NewSnippet::new("A", "x", "js")).await.unwrap_err();
        assert_matches!(err, SyncError::RemoteWrite(ClientError::Network(_)));
        assert!(sync.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_local_update_and_tags() {
        let sync = seeded_with(vec![cached("s1", NewSnippet::new("A", "x", "js").with_tags(["demo"]))]).await;
        let before = sync.get("s1").await.unwrap();

        let updated = sync
            .update("s1", SnippetPatch::default().title("B").tags(["other"]))
            .await
            .unwrap();
        assert_eq!(updated.title, "B");
        assert_eq!(updated.created_at, before.created_at);
        assert!(updated.updated_at >= before.updated_at);

        let tags = sync.tags().await;
        assert_eq!(tags.len(), 2);
        assert_eq!((tags[0].name.as_str(), tags[0].count), ("demo", 0));
        assert_eq!((tags[1].name.as_str(), tags[1].count), ("other", 1));
    }

    #[tokio::test]
    async fn test_update_errors() {
        let sync = seeded_with(vec![cached("s1", NewSnippet::new("A", "x", "js"))]).await;
        assert_matches!(
            sync.update("nope", SnippetPatch::default().title("B")).await,
            Err(SyncError::NotFound(_))
        );
        assert_matches!(
            sync.update("s1", SnippetPatch::default().code("  ")).await,
            Err(SyncError::Validation(_))
        );
    }

    #[tokio::test]
    async fn test_toggle_favorite() {
        let sync = seeded_with(vec![cached("s1", NewSnippet::new("A", "x", "js"))]).await;
        assert!(sync.toggle_favorite("s1").await.unwrap().is_favorite);
        assert!(!sync.toggle_favorite("s1").await.unwrap().is_favorite);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_skips_request() {
        let sync = offline();
        assert_matches!(sync.delete("ghost").await, Err(SyncError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_category_referential_integrity() {
        let sync = seeded_with(vec![cached("s1", NewSnippet::new("A", "x", "js").with_category("1"))]).await;

        assert!(!sync.delete_category("1").await);
        assert_eq!(sync.categories().await.len(), 8);

        assert!(sync.delete_category("2").await);
        assert_eq!(sync.categories().await.len(), 7);

        assert!(!sync.delete_category("2").await);
    }

    #[tokio::test]
    async fn test_category_names_are_unique() {
        let sync = offline();
        assert_matches!(
            sync.add_category(NewCategory::new("Rust", "#dea584")).await,
            Ok(Category { ref name, .. }) if name == "Rust"
        );
        assert_matches!(
            sync.add_category(NewCategory::new("Rust", "#000000")).await,
            Err(SyncError::Validation(_))
        );
        assert_matches!(
            sync.add_category(NewCategory::new("  ", "#000000")).await,
            Err(SyncError::Validation(_))
        );
        assert_matches!(
            sync.update_category("1", CategoryPatch { name: Some("Python".into()), ..Default::default() }).await,
            Err(SyncError::Validation(_))
        );

        let renamed = sync
            .update_category("1", CategoryPatch { name: Some("JS".into()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(renamed.name, "JS");
        assert_eq!(renamed.color, "#f7df1e");
    }

    #[tokio::test]
    async fn test_add_tag_is_idempotent_by_name() {
        let sync = offline();
        let first = sync.add_tag(NewTag::new("rust")).await.unwrap();
        let second = sync.add_tag(NewTag::new("rust").with_color("#000000")).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.count, 0);
        assert_eq!(sync.tags().await.len(), 1);
    }

    #[tokio::test]
    async fn test_manual_tag_survives_recompute() {
        let sync = offline();
        let manual = sync.add_tag(NewTag::new("demo").with_color("#123456")).await.unwrap();
        sync.import_bundle(ExportBundle {
            snippets: vec![cached("s1", NewSnippet::new("A", "x", "js").with_tags(["demo"]))],
            categories: default_categories(),
            tags: Vec::new(),
        })
        .await;

        let tags = sync.tags().await;
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].id, manual.id);
        assert_eq!(tags[0].color, "#123456");
        assert_eq!(tags[0].count, 1);
    }

    #[tokio::test]
    async fn test_subscribers_receive_snapshots() {
        let sync = seeded_with(vec![cached("s1", NewSnippet::new("A", "x", "js"))]).await;
        let mut rx = sync.subscribe();

        sync.toggle_favorite("s1").await.unwrap();

        assert_matches!(rx.recv().await, Ok(SyncEvent::Snippets(list)) if list[0].is_favorite);
        assert_matches!(rx.recv().await, Ok(SyncEvent::Tags(_)));
    }

    #[tokio::test]
    async fn test_export_import_reset() {
        let sync = seeded_with(vec![cached("s1", NewSnippet::new("A", "x", "js").with_tags(["demo"]))]).await;
        let bundle = sync.export_bundle().await;
        assert_eq!(bundle.snippets.len(), 1);
        assert_eq!(bundle.tags.len(), 1);

        sync.reset().await;
        assert!(sync.list().await.is_empty());
        assert!(sync.tags().await.is_empty());
        assert_eq!(sync.categories().await, default_categories());

        sync.import_bundle(bundle.clone()).await;
        assert_eq!(sync.export_bundle().await, bundle);
    }

    #[tokio::test]
    async fn test_stats_track_snapshot() {
        let sync = seeded_with(vec![
            cached("a", NewSnippet::new("A", "x", "js")),
            cached("b", NewSnippet::new("B", "x", "js")),
            cached("c", NewSnippet::new("C", "x", "py")),
        ])
        .await;

        let stats = sync.stats().await;
        assert_eq!(stats.total_snippets, sync.list().await.len());
        assert_eq!(stats.top_languages[0].language, "js");
        assert_eq!(stats.top_languages[0].count, 2);
        assert_eq!(sync.recent_snippets().await.len(), 3);
    }
}
