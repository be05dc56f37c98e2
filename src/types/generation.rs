//! Types for the AI post-generation wizard and the content-studio API.

use serde::{Deserialize, Serialize};

/// Target platform for generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Linkedin,
}

/// What the generation endpoint should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Hook,
    Post,
}

/// The wizard's finite states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    SelectPlatform,
    GeneratingHooks,
    PickHook,
    GeneratingPost,
    PostReady,
}

/// Events fed into the wizard reducer. User actions and call outcomes only;
/// every transition in the wizard goes through one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    GenerateHooks,
    HooksReady(Vec<String>),
    HooksFailed,
    GeneratePost,
    PostGenerated { id: String, content: String },
    PostFailed,
    Regenerate,
    Regenerated { id: String, content: String },
    RegenerateFailed,
    StartOver,
}

/// A previously generated post, as returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPost {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub hook_text: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A bookmark author whose voice can steer generation style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneAuthor {
    pub name: String,
    #[serde(default)]
    pub username: String,
}

impl ToneAuthor {
    /// Stable selection key sent to the generation endpoint.
    pub fn key(&self) -> String {
        format!("{}||{}", self.name, self.username)
    }
}

/// Request body for `POST /api/content-studio/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub workspace_id: String,
    pub bookmark_ids: Vec<String>,
    pub platform: Platform,
    pub content_type: ContentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone_author_key: Option<String>,
}

/// Response from the generation endpoint: hooks for `ContentType::Hook`,
/// posts for `ContentType::Post`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub hooks: Vec<String>,
    #[serde(default)]
    pub posts: Vec<GeneratedPost>,
}
