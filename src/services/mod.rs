// Stashboard services
// Services provide core functionality: the REST client, auth/session
// lifecycle, bookmark normalization, profile extraction, the extension
// bridge, and persisted local state.

pub mod api_client;
pub mod auth_service;
pub mod extension_bridge;
pub mod local_store;
pub mod normalizer;
pub mod profile_extractor;
