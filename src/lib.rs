//! Stashboard client core.
//!
//! The native engine behind the bookmark dashboard: payload normalization
//! into display cards, LinkedIn profile extraction, the workspace bookmark
//! list with optimistic mutations, the AI generation wizard, session
//! management, and the browser-extension bridge.

pub mod app;
pub mod managers;
pub mod platform;
pub mod services;
pub mod testing;
pub mod types;
