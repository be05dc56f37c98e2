//! Typed REST client for the Stashboard backend.
//!
//! A thin wrapper over `reqwest` that attaches the bearer token and the
//! fixed app-identifying header, (de)serializes JSON bodies, and classifies
//! failures into the [`ApiError`] taxonomy: non-2xx responses carry the
//! status and the parsed server message, transport failures map to
//! `Network`, malformed bodies to `Parse`. `Cancelled` is produced by
//! callers that abort an in-flight request and is re-thrown unwrapped so it
//! stays distinguishable from real failures.
//!
//! Managers depend on the [`ContentApi`] trait, not the concrete client, so
//! tests can substitute a fake.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::types::auth::{AuthResponse, AuthUser, Credentials};
use crate::types::bookmark::{Bookmark, BookmarkKind};
use crate::types::errors::ApiError;
use crate::types::generation::{GenerateRequest, GenerateResponse, GeneratedPost, ToneAuthor};

/// Fixed app-identifying header sent on every request.
pub const APP_HEADER: &str = "x-stashboard-client";
const APP_HEADER_VALUE: &str = "web";

/// Server-side filter options for the workspace list call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub kind: Option<BookmarkKind>,
    pub folder: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ListQuery {
    /// Query-string pairs in the order the backend documents them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(kind) = self.kind {
            // serde gives us the canonical kebab-case name
            let value = serde_json::to_value(kind)
                .ok()
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            pairs.push(("type", value));
        }
        if let Some(folder) = &self.folder {
            pairs.push(("folder", folder.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }
}

/// Body for creating a bookmark from the web "Add Bookmark" form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBookmark {
    pub workspace_id: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<BookmarkKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
}

/// Partial update body for `PUT /api/bookmarks/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FavoriteBody {
    is_favorite: bool,
}

/// Error body shapes the backend uses interchangeably.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// The operations the list controller and the wizard consume.
#[async_trait]
pub trait ContentApi: Send + Sync {
    async fn list_bookmarks(
        &self,
        workspace_id: &str,
        query: &ListQuery,
    ) -> Result<Vec<Bookmark>, ApiError>;
    async fn set_favorite(&self, id: &str, favorite: bool) -> Result<(), ApiError>;
    async fn delete_bookmark(&self, id: &str) -> Result<(), ApiError>;
    async fn update_bookmark(&self, id: &str, patch: &BookmarkPatch) -> Result<(), ApiError>;
    async fn list_tone_authors(&self, workspace_id: &str) -> Result<Vec<ToneAuthor>, ApiError>;
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError>;
    async fn list_posts(
        &self,
        workspace_id: &str,
        bookmark_id: &str,
        limit: u32,
    ) -> Result<Vec<GeneratedPost>, ApiError>;
    async fn regenerate(&self, post_id: &str) -> Result<GeneratedPost, ApiError>;
}

/// Concrete client over `reqwest`.
///
/// The token lives behind a lock so the auth service can swap it on
/// login/logout while managers share the client through an `Arc`.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: std::sync::RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: std::sync::RwLock::new(token),
        }
    }

    /// Replace the bearer token after login/logout.
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self
            .http
            .request(method, url)
            .header(APP_HEADER, APP_HEADER_VALUE);
        let token = self.token.read().ok().and_then(|g| g.clone());
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let resp = req.send().await.map_err(classify_transport)?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message.or(b.error))
                .unwrap_or(body);
            tracing::warn!(status = status.as_u16(), %message, "API request failed");
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Fire a request whose response body the caller does not need.
    async fn execute_unit(&self, req: reqwest::RequestBuilder) -> Result<(), ApiError> {
        let resp = req.send().await.map_err(classify_transport)?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message.or(b.error))
                .unwrap_or(body);
            tracing::warn!(status = status.as_u16(), %message, "API request failed");
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    // ─── Auth ───

    pub async fn register(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let req = self
            .request(reqwest::Method::POST, "/api/bookmark-auth/register")
            .json(credentials);
        self.execute(req).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let req = self
            .request(reqwest::Method::POST, "/api/bookmark-auth/login")
            .json(credentials);
        self.execute(req).await
    }

    pub async fn me(&self) -> Result<AuthUser, ApiError> {
        let req = self.request(reqwest::Method::GET, "/api/bookmark-auth/me");
        self.execute(req).await
    }

    // ─── Bookmarks ───

    pub async fn create_bookmark(&self, new: &NewBookmark) -> Result<Bookmark, ApiError> {
        let req = self
            .request(reqwest::Method::POST, "/api/bookmarks")
            .json(new);
        self.execute(req).await
    }
}

fn classify_transport(err: reqwest::Error) -> ApiError {
    // No response landed at all; the product treats these as "status 0".
    ApiError::Network(err.to_string())
}

#[async_trait]
impl ContentApi for ApiClient {
    async fn list_bookmarks(
        &self,
        workspace_id: &str,
        query: &ListQuery,
    ) -> Result<Vec<Bookmark>, ApiError> {
        tracing::debug!(workspace_id, "listing bookmarks");
        let path = format!("/api/bookmarks/workspace/{}", workspace_id);
        let req = self
            .request(reqwest::Method::GET, &path)
            .query(&query.to_pairs());
        self.execute(req).await
    }

    async fn set_favorite(&self, id: &str, favorite: bool) -> Result<(), ApiError> {
        let path = format!("/api/bookmarks/{}/favorite", id);
        let req = self
            .request(reqwest::Method::PATCH, &path)
            .json(&FavoriteBody {
                is_favorite: favorite,
            });
        self.execute_unit(req).await
    }

    async fn delete_bookmark(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/bookmarks/{}", id);
        let req = self.request(reqwest::Method::DELETE, &path);
        self.execute_unit(req).await
    }

    async fn update_bookmark(&self, id: &str, patch: &BookmarkPatch) -> Result<(), ApiError> {
        let path = format!("/api/bookmarks/{}", id);
        let req = self.request(reqwest::Method::PUT, &path).json(patch);
        self.execute_unit(req).await
    }

    async fn list_tone_authors(&self, workspace_id: &str) -> Result<Vec<ToneAuthor>, ApiError> {
        let path = format!("/api/bookmarks/workspace/{}/authors", workspace_id);
        let req = self.request(reqwest::Method::GET, &path);
        self.execute(req).await
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
        tracing::debug!(
            content_type = ?request.content_type,
            platform = ?request.platform,
            "requesting generation"
        );
        let req = self
            .request(reqwest::Method::POST, "/api/content-studio/generate")
            .json(request);
        self.execute(req).await
    }

    async fn list_posts(
        &self,
        workspace_id: &str,
        bookmark_id: &str,
        limit: u32,
    ) -> Result<Vec<GeneratedPost>, ApiError> {
        let path = format!("/api/content-studio/posts/{}", workspace_id);
        let req = self.request(reqwest::Method::GET, &path).query(&[
            ("bookmarkId", bookmark_id.to_string()),
            ("limit", limit.to_string()),
        ]);
        self.execute(req).await
    }

    async fn regenerate(&self, post_id: &str) -> Result<GeneratedPost, ApiError> {
        let path = format!("/api/content-studio/{}/regenerate", post_id);
        let req = self.request(reqwest::Method::POST, &path);
        self.execute(req).await
    }
}
