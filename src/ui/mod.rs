//! StartPage UI layer.
//!
//! The page is plain HTML/CSS/JS produced by [`page`]. With the `gui` feature
//! it is shown in a `wry` webview; the page talks back over wry IPC and its
//! messages are decoded by [`intent`].

pub mod intent;
pub mod page;

#[cfg(feature = "gui")]
pub mod webview_app;
