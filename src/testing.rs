//! Test doubles for the injected seams: a scripted [`ContentApi`] fake and a
//! recording bridge bus. Used by the integration test suites.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::services::api_client::{BookmarkPatch, ContentApi, ListQuery};
use crate::services::extension_bridge::{BridgeBus, BridgeEvent};
use crate::types::bookmark::Bookmark;
use crate::types::errors::ApiError;
use crate::types::generation::{GenerateRequest, GenerateResponse, GeneratedPost, ToneAuthor};

/// Scripted fake for [`ContentApi`].
///
/// Responses are queued per endpoint and popped in order; when a queue is
/// empty, list-shaped endpoints return empty collections and unit-shaped
/// mutations succeed, while generation endpoints fail loudly so a test that
/// forgot to script them cannot pass by accident.
#[derive(Default)]
pub struct FakeContentApi {
    list_responses: Mutex<VecDeque<Result<Vec<Bookmark>, ApiError>>>,
    favorite_results: Mutex<VecDeque<Result<(), ApiError>>>,
    delete_results: Mutex<VecDeque<Result<(), ApiError>>>,
    update_results: Mutex<VecDeque<Result<(), ApiError>>>,
    tone_authors: Mutex<Vec<ToneAuthor>>,
    posts: Mutex<Vec<GeneratedPost>>,
    generate_responses: Mutex<VecDeque<Result<GenerateResponse, ApiError>>>,
    regenerate_responses: Mutex<VecDeque<Result<GeneratedPost, ApiError>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeContentApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_list(&self, response: Result<Vec<Bookmark>, ApiError>) {
        self.list_responses.lock().unwrap().push_back(response);
    }

    pub fn queue_favorite(&self, result: Result<(), ApiError>) {
        self.favorite_results.lock().unwrap().push_back(result);
    }

    pub fn queue_delete(&self, result: Result<(), ApiError>) {
        self.delete_results.lock().unwrap().push_back(result);
    }

    pub fn queue_update(&self, result: Result<(), ApiError>) {
        self.update_results.lock().unwrap().push_back(result);
    }

    pub fn set_tone_authors(&self, authors: Vec<ToneAuthor>) {
        *self.tone_authors.lock().unwrap() = authors;
    }

    pub fn set_posts(&self, posts: Vec<GeneratedPost>) {
        *self.posts.lock().unwrap() = posts;
    }

    pub fn queue_generate(&self, response: Result<GenerateResponse, ApiError>) {
        self.generate_responses.lock().unwrap().push_back(response);
    }

    pub fn queue_regenerate(&self, response: Result<GeneratedPost, ApiError>) {
        self.regenerate_responses.lock().unwrap().push_back(response);
    }

    /// Every call made, in order, as `"endpoint:detail"` strings.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ContentApi for FakeContentApi {
    async fn list_bookmarks(
        &self,
        workspace_id: &str,
        _query: &ListQuery,
    ) -> Result<Vec<Bookmark>, ApiError> {
        self.record(format!("list:{}", workspace_id));
        self.list_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn set_favorite(&self, id: &str, favorite: bool) -> Result<(), ApiError> {
        self.record(format!("favorite:{}:{}", id, favorite));
        self.favorite_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn delete_bookmark(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("delete:{}", id));
        self.delete_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn update_bookmark(&self, id: &str, _patch: &BookmarkPatch) -> Result<(), ApiError> {
        self.record(format!("update:{}", id));
        self.update_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn list_tone_authors(&self, workspace_id: &str) -> Result<Vec<ToneAuthor>, ApiError> {
        self.record(format!("authors:{}", workspace_id));
        Ok(self.tone_authors.lock().unwrap().clone())
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
        self.record(format!("generate:{:?}", request.content_type));
        self.generate_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ApiError::Network(
                    "no scripted generate response".to_string(),
                ))
            })
    }

    async fn list_posts(
        &self,
        _workspace_id: &str,
        bookmark_id: &str,
        limit: u32,
    ) -> Result<Vec<GeneratedPost>, ApiError> {
        self.record(format!("posts:{}:{}", bookmark_id, limit));
        Ok(self.posts.lock().unwrap().clone())
    }

    async fn regenerate(&self, post_id: &str) -> Result<GeneratedPost, ApiError> {
        self.record(format!("regenerate:{}", post_id));
        self.regenerate_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ApiError::Network(
                    "no scripted regenerate response".to_string(),
                ))
            })
    }
}

/// Bridge bus that records every published event.
#[derive(Default)]
pub struct RecordingBus {
    events: Mutex<Vec<BridgeEvent>>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<BridgeEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl BridgeBus for RecordingBus {
    fn publish(&self, event: BridgeEvent) {
        self.events.lock().unwrap().push(event);
    }
}
