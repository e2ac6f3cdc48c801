//! WebView shell for the start page using `wry` + `tao`.
//!
//! Architecture:
//! - The document is rendered once by `App::render_document` and loaded with
//!   `with_html`.
//! - IPC from JS → Rust via `window.ipc.postMessage()`; messages are decoded
//!   by `ui::intent` and applied to the store.
//! - A store subscriber posts `StateChanged` to the event loop, which
//!   re-renders `#app` through `evaluate_script`.

use std::sync::{Arc, Mutex, MutexGuard};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tao::window::WindowBuilder;
use tracing::{debug, info, warn};
use wry::WebViewBuilder;

use crate::app::App;
use crate::services::localization_engine::LocalizationEngineTrait;
use crate::ui::intent::{self, Intent};

#[derive(Debug)]
enum UserEvent {
    /// The store installed a new snapshot.
    StateChanged,
    EvalScript(String),
}

fn lock(state: &Mutex<App>) -> MutexGuard<'_, App> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn render_script(app: &App) -> String {
    format!(
        "if(window.__sp_render)window.__sp_render({})",
        app.render_payload()
    )
}

fn handle_ipc(app: &mut App, message: &str) -> Option<UserEvent> {
    match intent::decode(message) {
        Ok(Intent::UiReady) => Some(UserEvent::EvalScript(render_script(app))),
        Ok(intent) => {
            // Changes reach the page through the store subscription.
            app.apply_intent(intent);
            None
        }
        Err(e) => {
            warn!(error = %e, "ignoring page message");
            None
        }
    }
}

/// Opens the start page window and runs the event loop until it is closed.
pub fn run(app: App) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let (title, width, height, html) = {
        let appearance = &app.settings().appearance;
        (
            app.localization_engine.t("app.title", None),
            appearance.window_width,
            appearance.window_height,
            app.render_document(),
        )
    };

    let state = Arc::new(Mutex::new(app));
    {
        let change_proxy = proxy.clone();
        lock(&state).page.subscribe(move |_snapshot| {
            let _ = change_proxy.send_event(UserEvent::StateChanged);
        });
    }

    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(tao::dpi::LogicalSize::new(width, height))
        .build(&event_loop)?;

    let ipc_state = Arc::clone(&state);
    let ipc_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_html(html)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            debug!(message = %intent::log_preview(body), "ipc");
            let event = handle_ipc(&mut lock(&ipc_state), body);
            if let Some(event) = event {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().ok_or("failed to get GTK vbox")?;
        builder.build_gtk(vbox)?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window)?;

    info!("start page window opened");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::StateChanged) => {
                let script = render_script(&lock(&state));
                if let Err(e) = webview.evaluate_script(&script) {
                    warn!(error = %e, "re-render failed");
                }
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                if let Err(e) = webview.evaluate_script(&js) {
                    warn!(error = %e, "script evaluation failed");
                }
            }

            _ => {}
        }
    });
}
