//! Persisted client-side state.
//!
//! The browser product keeps these three values in localStorage; here they
//! live in a JSON file under the platform config directory.

use serde::{Deserialize, Serialize};

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::System
    }
}

/// Everything the client persists locally between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalState {
    /// Bearer auth token; `None` when logged out.
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Dismissal flag for the promotional banner.
    #[serde(default)]
    pub banner_dismissed: bool,
    #[serde(default)]
    pub theme: Theme,
}
