// Stashboard local store
// Persists the client-side state the web product keeps in localStorage:
// the auth token, the promotional-banner dismissal flag, and the theme.
// Stored as a JSON file at the platform-specific config path.

use std::fs;
use std::path::Path;

use crate::platform;
use crate::types::errors::StoreError;
use crate::types::local::{LocalState, Theme};

/// Trait defining the local store interface.
pub trait LocalStoreTrait {
    fn load(&mut self) -> Result<LocalState, StoreError>;
    fn save(&self) -> Result<(), StoreError>;
    fn state(&self) -> &LocalState;
    fn auth_token(&self) -> Option<&str>;
    fn set_auth_token(&mut self, token: Option<String>) -> Result<(), StoreError>;
    fn dismiss_banner(&mut self) -> Result<(), StoreError>;
    fn set_theme(&mut self, theme: Theme) -> Result<(), StoreError>;
}

/// Local store implementation that persists state as JSON on disk.
pub struct LocalStore {
    state_path: String,
    state: LocalState,
}

impl LocalStore {
    /// Creates a new `LocalStore`.
    ///
    /// If `path_override` is `Some`, uses that path for the state file.
    /// Otherwise, uses the platform-specific config directory with `state.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let state_path = match path_override {
            Some(p) => p,
            None => {
                let config_dir = platform::get_config_dir();
                config_dir.join("state.json").to_string_lossy().to_string()
            }
        };

        Self {
            state_path,
            state: LocalState::default(),
        }
    }
}

impl LocalStoreTrait for LocalStore {
    /// Loads state from the JSON file.
    ///
    /// If the file does not exist, returns default state (logged out,
    /// banner visible, system theme). If the file exists but is malformed,
    /// returns a serialization error.
    fn load(&mut self) -> Result<LocalState, StoreError> {
        let path = Path::new(&self.state_path);

        if !path.exists() {
            self.state = LocalState::default();
            return Ok(self.state.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| StoreError::Io(format!("Failed to read state file: {}", e)))?;

        let state: LocalState = serde_json::from_str(&content)
            .map_err(|e| StoreError::Serialization(format!("Failed to parse state file: {}", e)))?;

        self.state = state;
        Ok(self.state.clone())
    }

    /// Saves the current state to the JSON file, creating parent
    /// directories if they don't exist.
    fn save(&self) -> Result<(), StoreError> {
        let path = Path::new(&self.state_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::Io(format!("Failed to create state directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(&self.state)
            .map_err(|e| StoreError::Serialization(format!("Failed to serialize state: {}", e)))?;

        fs::write(path, json)
            .map_err(|e| StoreError::Io(format!("Failed to write state file: {}", e)))?;

        Ok(())
    }

    fn state(&self) -> &LocalState {
        &self.state
    }

    fn auth_token(&self) -> Option<&str> {
        self.state.auth_token.as_deref()
    }

    /// Stores or clears the bearer token and persists immediately.
    fn set_auth_token(&mut self, token: Option<String>) -> Result<(), StoreError> {
        self.state.auth_token = token;
        self.save()
    }

    fn dismiss_banner(&mut self) -> Result<(), StoreError> {
        self.state.banner_dismissed = true;
        self.save()
    }

    fn set_theme(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.state.theme = theme;
        self.save()
    }
}
