//! StartPage: a browser start screen with search, bookmarks and history.
//!
//! Entry point: opens the start page in a native webview window.
//! When built without the `gui` feature, runs a console walkthrough instead.

use startpage::app::App;

fn load_app() -> App {
    match App::new(None) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("startpage: failed to load settings: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "gui")]
fn main() {
    let app = load_app();
    startpage::logging::init(&app.settings().logging.level);

    if let Err(e) = startpage::ui::webview_app::run(app) {
        tracing::error!(error = %e, "start page window failed");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use startpage::managers::bookmark_manager::BookmarkManagerTrait;
    use startpage::managers::history_manager::HistoryManagerTrait;
    use startpage::types::view::ActiveTab;
    use startpage::ui::page::format_visit_time;

    let mut app = load_app();
    startpage::logging::init(&app.settings().logging.level);

    println!("StartPage v{} (console mode)", env!("CARGO_PKG_VERSION"));
    println!();

    app.page.subscribe(|state| {
        println!(
            "  [state] tab={} query={:?} bookmarks={} history={}",
            state.active_tab,
            state.search_query,
            state.bookmarks.len(),
            state.history.len()
        );
    });

    app.page.submit_search("cats");
    app.page.submit_search("   ");
    let id = app.page.add_bookmark("Example", "https://example.com");
    app.page.select_tab(ActiveTab::Bookmarks);
    app.page.remove_bookmark(&id);
    app.page.select_tab(ActiveTab::History);

    let state = app.page.snapshot();
    println!();
    println!("Bookmarks:");
    for b in state.bookmarks.list_bookmarks() {
        println!("  {:<10} {}", b.title, b.url);
    }
    println!("History:");
    for h in state.history.entries() {
        println!("  {}  {:<16} {}", format_visit_time(h.visited_at), h.title, h.url);
    }
}
