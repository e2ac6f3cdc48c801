//! StartPage: a browser start screen with search, bookmarks and history.
//!
//! All state is in memory; the page is rendered as HTML and shown in a native
//! webview (`gui` feature) or driven over JSON-RPC (`startpage-rpc`).

pub mod app;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod store;
pub mod types;
pub mod ui;
