//! Browser side of the integrations: spawning on the microtask queue, ES module
//! imports, JS handles and the `window` exposure slot.

use std::fmt;
use std::rc::Rc;

use futures::task::{LocalFutureObj, LocalSpawn, SpawnError};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Function, Object, Promise, Reflect};

use super::messaging::{MessageHandler, Messaging, Subscription, Subscriptions};
use super::{ExposureSlot, IntegrationHandle, Unavailable};

#[wasm_bindgen(inline_js = "export function import_module(url) { return import(url); }")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn import_module(url: &str) -> Result<Promise, JsValue>;
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<web_sys::js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Runs futures with `wasm_bindgen_futures::spawn_local`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSpawner;

impl LocalSpawn for BrowserSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}

/// Imports the ES module at `url`.
pub async fn load_module(url: &str) -> Result<JsValue, Unavailable> {
    let promise = import_module(url).map_err(|e| Unavailable::Load(describe(&e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| Unavailable::Load(describe(&e)))
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

/// Calls the module's `name` export with `options` and waits for the handle if
/// the initializer is asynchronous.
pub async fn initialize(module: &JsValue, name: &str, options: &JsValue) -> Result<JsHandle, Unavailable> {
    let init = method(module, name).ok_or_else(|| Unavailable::Init(format!("module has no `{}` export", name)))?;
    let returned = init
        .call1(&JsValue::NULL, options)
        .map_err(|e| Unavailable::Init(describe(&e)))?;
    let handle = match returned.dyn_into::<Promise>() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .map_err(|e| Unavailable::Init(describe(&e)))?,
        Err(value) => value,
    };
    JsHandle::new(handle)
}

/// A handle object created by a JS integration, plus the messaging
/// subscriptions that must end with it.
pub struct JsHandle {
    inner: JsValue,
    subscriptions: Subscriptions,
}

impl fmt::Debug for JsHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsHandle").field("inner", &self.inner).finish()
    }
}

impl JsHandle {
    /// Rejects values without a callable `destroy`.
    pub fn new(inner: JsValue) -> Result<Self, Unavailable> {
        if inner.is_object() && method(&inner, "destroy").is_some() {
            Ok(Self {
                inner,
                subscriptions: Subscriptions::default(),
            })
        } else {
            Err(Unavailable::InvalidHandle)
        }
    }

    pub fn as_js(&self) -> &JsValue {
        &self.inner
    }

    pub fn messaging(&self) -> Option<JsMessaging> {
        let channel = Reflect::get(&self.inner, &JsValue::from_str("messaging")).ok()?;
        (channel.is_object() && method(&channel, "send").is_some()).then_some(JsMessaging { channel })
    }

    /// Holds `subscription` until the handle is destroyed.
    pub fn keep(&self, subscription: Subscription) {
        self.subscriptions.keep(subscription);
    }
}

impl IntegrationHandle for JsHandle {
    fn destroy(&self) {
        self.subscriptions.release_all();
        if let Some(destroy) = method(&self.inner, "destroy") {
            if let Err(err) = destroy.call0(&self.inner) {
                log::debug!("integration destroy threw: {}", describe(&err));
            }
        }
    }
}

/// The `messaging` object of a [`JsHandle`].
#[derive(Debug, Clone)]
pub struct JsMessaging {
    channel: JsValue,
}

impl Messaging for JsMessaging {
    fn send(&self, body: &Value) -> Result<(), Unavailable> {
        let send = method(&self.channel, "send").ok_or(Unavailable::InvalidHandle)?;
        let body = serde_wasm_bindgen::to_value(body).map_err(|e| Unavailable::Init(e.to_string()))?;
        send.call1(&self.channel, &body)
            .map(|_| ())
            .map_err(|e| Unavailable::Init(describe(&e)))
    }

    fn on(&self, event: &str, handler: MessageHandler) -> Subscription {
        let Some(on) = method(&self.channel, "on") else {
            return Subscription::inert();
        };
        let listener = Closure::<dyn FnMut(JsValue)>::new(move |raw: JsValue| {
            let value = serde_wasm_bindgen::from_value::<Value>(raw).unwrap_or(Value::Null);
            handler(value);
        });
        let unsubscribe = match on.call2(&self.channel, &JsValue::from_str(event), listener.as_ref()) {
            Ok(value) => value.dyn_into::<Function>().ok(),
            Err(err) => {
                log::debug!("messaging.on threw: {}", describe(&err));
                return Subscription::inert();
            }
        };
        // Keep the closure alive until the JS side has let go of it.
        Subscription::new(move || {
            if let Some(unsubscribe) = unsubscribe {
                let _ = unsubscribe.call0(&JsValue::NULL);
            }
            drop(listener);
        })
    }
}

/// Publishes a handle as `window.__<kind>` for debugging from the console.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowSlot;

impl WindowSlot {
    fn key(kind: &str) -> JsValue {
        JsValue::from_str(&format!("__{}", kind))
    }
}

impl ExposureSlot<JsHandle> for WindowSlot {
    fn publish(&self, kind: &'static str, handle: &Rc<JsHandle>) {
        if let Some(window) = web_sys::window() {
            let _ = Reflect::set(&window, &Self::key(kind), handle.as_js());
        }
    }

    fn retract(&self, kind: &'static str, handle: &Rc<JsHandle>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let key = Self::key(kind);
        let current = Reflect::get(&window, &key).unwrap_or(JsValue::UNDEFINED);
        if Object::is(&current, handle.as_js()) {
            let _ = Reflect::delete_property(&window, &key);
        }
    }
}
