//! Session analytics and recording, mounted once at the document root.

use std::rc::Rc;

use log::{debug, info};
use serde_json::Value;
use yew::prelude::*;

use super::browser::{self, BrowserSpawner, JsHandle, WindowSlot};
use super::messaging::Messaging;
use super::{InitOptions, IntegrationLifecycle, Registry, Unavailable};
use crate::config;

/// Registry key, and `window.__sessionTracker` for the console.
pub const SESSION_TRACKER: &str = "sessionTracker";

const INIT_EXPORT: &str = "init";

/// Emitted by the tracker once a recording session has an id.
const SESSION_STARTED: &str = "session_started";

fn log_session_started(body: Value) {
    match body.get("sessionId").and_then(Value::as_str) {
        Some(id) => info!("session tracker started session {}", id),
        None => debug!("session tracker started a session without an id"),
    }
}

async fn load_session_tracker(module_url: String, options: InitOptions) -> Result<JsHandle, Unavailable> {
    let options = serde_wasm_bindgen::to_value(&options).map_err(|e| Unavailable::Init(e.to_string()))?;
    let module = browser::load_module(&module_url).await?;
    let tracker = browser::initialize(&module, INIT_EXPORT, &options).await?;
    if let Some(channel) = tracker.messaging() {
        tracker.keep(channel.on(SESSION_STARTED, Box::new(log_session_started)));
    }
    Ok(tracker)
}

/// The tracker handle of whichever mount is currently active, if any.
pub fn active_tracker() -> Option<Rc<JsHandle>> {
    Registry::lookup::<JsHandle>(SESSION_TRACKER)
}

/// Sends `body` over the active tracker's messaging channel. Does nothing when
/// no tracker is loaded.
pub fn notify_tracker(body: &Value) {
    let Some(channel) = active_tracker().and_then(|tracker| tracker.messaging()) else {
        return;
    };
    if let Err(err) = channel.send(body) {
        if config::is_development() {
            debug!("session tracker rejected message: {}", err);
        }
    }
}

/// Loads the session tracker for as long as this component is mounted.
/// Renders nothing. Mount it at most once per page.
#[function_component(SessionRecorder)]
pub fn session_recorder() -> Html {
    use_effect_with_deps(
        move |_| {
            let lifecycle = IntegrationLifecycle::<JsHandle>::new(SESSION_TRACKER, (Registry, WindowSlot));
            let module_url = config::session_tracker_module_url();
            lifecycle.activate(
                &config::session_tracker_config(),
                move |options| load_session_tracker(module_url, options),
                &BrowserSpawner,
            );
            move || lifecycle.deactivate()
        },
        (),
    );

    html! {}
}
