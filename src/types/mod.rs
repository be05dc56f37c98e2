// Stashboard shared type definitions
// Each submodule defines types used across the application.

pub mod auth;
pub mod bookmark;
pub mod display;
pub mod errors;
pub mod generation;
pub mod local;
pub mod profile;
