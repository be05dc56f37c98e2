//! Bookmark list controller for Stashboard.
//!
//! Owns the in-memory bookmark collection for one workspace: fetch,
//! client-side filtering, and optimistic mutation with resync-on-failure.
//!
//! Mutations apply locally before the network call resolves; when a call
//! fails, recovery is a full reload with the last filter rather than a
//! targeted rollback. Loads carry a monotonically increasing sequence
//! number so a stale response can never overwrite a newer one.

use std::sync::Arc;

use crate::services::api_client::{BookmarkPatch, ContentApi, ListQuery};
use crate::types::bookmark::{Bookmark, BookmarkKind};
use crate::types::errors::ApiError;

/// Dashboard view filters layered on top of the fetched set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    All,
    FavoritesOnly,
    ProfilesOnly,
    /// LinkedIn feed posts, excluding saved profiles.
    LinkedinPosts,
}

pub struct BookmarkListController {
    api: Arc<dyn ContentApi>,
    workspace_id: String,
    bookmarks: Vec<Bookmark>,
    loading: bool,
    last_query: ListQuery,
    load_seq: u64,
}

impl BookmarkListController {
    pub fn new(api: Arc<dyn ContentApi>, workspace_id: impl Into<String>) -> Self {
        Self {
            api,
            workspace_id: workspace_id.into(),
            bookmarks: Vec::new(),
            loading: false,
            last_query: ListQuery::default(),
            load_seq: 0,
        }
    }

    /// The current fetched set, unfiltered.
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fetch the workspace list. Replaces the whole in-memory list on
    /// success; on failure the previous list stays intact and the error is
    /// returned for the caller to surface.
    pub async fn load(&mut self, query: ListQuery) -> Result<(), ApiError> {
        let seq = self.begin_load(query.clone());
        let result = self.api.list_bookmarks(&self.workspace_id, &query).await;
        self.finish_load(seq, result)
    }

    /// Start a load and get its sequence number. Split from [`finish_load`]
    /// so the response can be applied when the event loop hands it back.
    pub fn begin_load(&mut self, query: ListQuery) -> u64 {
        self.load_seq += 1;
        self.loading = true;
        self.last_query = query;
        self.load_seq
    }

    /// Apply a load response. A response whose sequence number is not the
    /// newest issued one is stale and is discarded without touching state.
    pub fn finish_load(
        &mut self,
        seq: u64,
        result: Result<Vec<Bookmark>, ApiError>,
    ) -> Result<(), ApiError> {
        if seq != self.load_seq {
            tracing::debug!(seq, newest = self.load_seq, "discarding stale list response");
            return Ok(());
        }
        self.loading = false;
        match result {
            Ok(bookmarks) => {
                tracing::debug!(count = bookmarks.len(), "list loaded");
                self.bookmarks = bookmarks;
                Ok(())
            }
            Err(ApiError::Cancelled) => Ok(()),
            Err(err) => {
                tracing::warn!(%err, "list load failed; keeping previous list");
                Err(err)
            }
        }
    }

    /// Optimistically flip the favorite flag, then persist. On failure the
    /// list is resynced with a full reload.
    pub async fn toggle_favorite(&mut self, id: &str) -> Result<(), ApiError> {
        let Some(bookmark) = self.bookmarks.iter_mut().find(|b| b.id == id) else {
            return Ok(());
        };
        bookmark.is_favorite = !bookmark.is_favorite;
        let target = bookmark.is_favorite;

        match self.api.set_favorite(id, target).await {
            Ok(()) => Ok(()),
            Err(ApiError::Cancelled) => Ok(()),
            Err(err) => {
                tracing::warn!(%err, id, "favorite toggle failed; resyncing");
                self.resync().await;
                Err(err)
            }
        }
    }

    /// Optimistically remove the bookmark, then persist. A failed delete
    /// resyncs the same way a failed favorite toggle does, so the row
    /// reappears if the server still has it.
    pub async fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.id != id);
        if self.bookmarks.len() == before {
            return Ok(());
        }

        match self.api.delete_bookmark(id).await {
            Ok(()) => Ok(()),
            Err(ApiError::Cancelled) => Ok(()),
            Err(err) => {
                tracing::warn!(%err, id, "delete failed; resyncing");
                self.resync().await;
                Err(err)
            }
        }
    }

    /// Optimistically update the notes field, then persist.
    pub async fn update_notes(&mut self, id: &str, notes: Option<String>) -> Result<(), ApiError> {
        let Some(bookmark) = self.bookmarks.iter_mut().find(|b| b.id == id) else {
            return Ok(());
        };
        bookmark.notes = notes.clone();

        let patch = BookmarkPatch {
            notes,
            ..BookmarkPatch::default()
        };
        match self.api.update_bookmark(id, &patch).await {
            Ok(()) => Ok(()),
            Err(ApiError::Cancelled) => Ok(()),
            Err(err) => {
                tracing::warn!(%err, id, "notes update failed; resyncing");
                self.resync().await;
                Err(err)
            }
        }
    }

    /// Client-side filter pass: free-text search first, then the view
    /// filter. Search matches case-insensitively against title, description,
    /// tags, and url.
    pub fn filtered(&self, view: ListView, query: &str) -> Vec<&Bookmark> {
        let needle = query.trim().to_lowercase();
        self.bookmarks
            .iter()
            .filter(|b| needle.is_empty() || matches_query(b, &needle))
            .filter(|b| match view {
                ListView::All => true,
                ListView::FavoritesOnly => b.is_favorite,
                ListView::ProfilesOnly => b.is_profile(),
                ListView::LinkedinPosts => {
                    b.kind == BookmarkKind::Linkedin && !b.is_profile()
                }
            })
            .collect()
    }

    /// Corrective full reload after a failed optimistic mutation. The reload
    /// outcome is deliberately ignored: the original failure is what the
    /// caller surfaces.
    async fn resync(&mut self) {
        let query = self.last_query.clone();
        let _ = self.load(query).await;
    }
}

fn matches_query(bookmark: &Bookmark, needle: &str) -> bool {
    bookmark.title.to_lowercase().contains(needle)
        || bookmark
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
        || bookmark
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(needle))
        || bookmark.url.to_lowercase().contains(needle)
}
