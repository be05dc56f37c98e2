//! Application wiring: builds the shared service graph and hands out
//! managers bound to it.

use std::sync::{Arc, Mutex};

use crate::managers::bookmark_list::BookmarkListController;
use crate::managers::wizard::GenerationWizard;
use crate::services::api_client::ApiClient;
use crate::services::auth_service::AuthService;
use crate::services::extension_bridge::{BridgeBus, ExtensionBridge, ListenerBus};
use crate::services::local_store::{LocalStore, LocalStoreTrait};
use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

pub struct App {
    pub store: Arc<Mutex<LocalStore>>,
    pub bus: Arc<ListenerBus>,
    pub api: Arc<ApiClient>,
    pub auth: AuthService,
    pub bridge: ExtensionBridge,
}

impl App {
    /// Build the service graph. Loads persisted local state from disk so the
    /// API client starts with whatever token survived the last session.
    pub fn new(base_url: &str, store_path_override: Option<String>) -> Result<Self, StoreError> {
        let mut store = LocalStore::new(store_path_override);
        store.load()?;
        let token = store.auth_token().map(str::to_string);

        let store = Arc::new(Mutex::new(store));
        let bus = Arc::new(ListenerBus::new());
        let api = Arc::new(ApiClient::new(base_url, token));

        let shared_bus: Arc<dyn BridgeBus> = bus.clone();
        let auth = AuthService::new(api.clone(), store.clone(), shared_bus.clone());
        let bridge = ExtensionBridge::new(store.clone(), shared_bus);

        Ok(Self {
            store,
            bus,
            api,
            auth,
            bridge,
        })
    }

    /// A list controller bound to the given workspace.
    pub fn list_controller(&self, workspace_id: impl Into<String>) -> BookmarkListController {
        BookmarkListController::new(self.api.clone(), workspace_id)
    }

    /// Open a generation wizard session for one bookmark.
    pub async fn open_wizard(
        &self,
        workspace_id: impl Into<String>,
        bookmark: &Bookmark,
    ) -> GenerationWizard {
        GenerationWizard::open(self.api.clone(), workspace_id, bookmark).await
    }
}
