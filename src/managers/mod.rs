// Stashboard state managers
// Managers own stateful flows: the workspace bookmark list and the
// generation wizard session.

pub mod bookmark_list;
pub mod wizard;
