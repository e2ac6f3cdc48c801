// StartPage state managers
// Managers own the in-memory bookmark list and history log.

pub mod bookmark_manager;
pub mod history_manager;
