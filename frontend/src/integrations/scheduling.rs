//! Bridge from the embedded scheduling widget's `postMessage` events to
//! component callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MessageEvent;
use yew::prelude::*;

use super::messaging::Subscription;

pub const DATE_AND_TIME_SELECTED: &str = "date_and_time_selected";
pub const EVENT_SCHEDULED: &str = "event_scheduled";

/// Message body posted by the widget frame.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WidgetMessage {
    pub event: String,
    #[serde(default)]
    pub payload: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchedulingEvent {
    DateAndTimeSelected,
    EventScheduled(Value),
}

impl SchedulingEvent {
    /// `None` for every tag other than the two the site reacts to.
    pub fn from_message(message: WidgetMessage) -> Option<Self> {
        match message.event.as_str() {
            DATE_AND_TIME_SELECTED => Some(Self::DateAndTimeSelected),
            EVENT_SCHEDULED => Some(Self::EventScheduled(message.payload.unwrap_or(Value::Null))),
            _ => None,
        }
    }
}

#[derive(Clone, Default, PartialEq)]
pub struct BridgeCallbacks {
    pub on_date_and_time_selected: Option<Callback<()>>,
    pub on_event_scheduled: Option<Callback<Value>>,
}

/// Origin filter plus a single-slot cell holding the latest callbacks.
///
/// The listener registered with the browser holds a clone of this and reads
/// the cell on every message, so callbacks replaced on a re-render take effect
/// without re-registering.
#[derive(Clone)]
pub struct MessageBridge {
    origin: Rc<str>,
    callbacks: Rc<RefCell<BridgeCallbacks>>,
}

impl MessageBridge {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: Rc::from(origin),
            callbacks: Rc::new(RefCell::new(BridgeCallbacks::default())),
        }
    }

    pub fn set_callbacks(&self, callbacks: BridgeCallbacks) {
        *self.callbacks.borrow_mut() = callbacks;
    }

    /// Returns whether a callback ran.
    pub fn dispatch(&self, origin: &str, message: WidgetMessage) -> bool {
        if origin != &*self.origin {
            return false;
        }
        let Some(event) = SchedulingEvent::from_message(message) else {
            return false;
        };

        // Clone out of the cell first: a callback may trigger a re-render that
        // writes new callbacks.
        match event {
            SchedulingEvent::DateAndTimeSelected => {
                let callback = self.callbacks.borrow().on_date_and_time_selected.clone();
                callback.map(|cb| cb.emit(())).is_some()
            }
            SchedulingEvent::EventScheduled(payload) => {
                let callback = self.callbacks.borrow().on_event_scheduled.clone();
                callback.map(|cb| cb.emit(payload)).is_some()
            }
        }
    }

    fn dispatch_event(&self, event: &MessageEvent) {
        if let Ok(message) = serde_wasm_bindgen::from_value::<WidgetMessage>(event.data()) {
            self.dispatch(&event.origin(), message);
        }
    }
}

/// Somewhere widget messages arrive from. Listening stops when the returned
/// subscription is dropped.
pub trait MessageSource {
    fn listen(&self, bridge: MessageBridge) -> Subscription;
}

/// `message` events on the browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowMessages;

impl MessageSource for WindowMessages {
    fn listen(&self, bridge: MessageBridge) -> Subscription {
        let Some(window) = web_sys::window() else {
            return Subscription::inert();
        };
        let listener = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            bridge.dispatch_event(&event);
        });
        if window
            .add_event_listener_with_callback("message", listener.as_ref().unchecked_ref())
            .is_err()
        {
            return Subscription::inert();
        }
        Subscription::new(move || {
            let _ = window.remove_event_listener_with_callback("message", listener.as_ref().unchecked_ref());
        })
    }
}

/// Listens for scheduling widget messages from `origin` while the calling
/// component is mounted. `callbacks` may be new instances on every render.
#[hook]
pub fn use_scheduling_bridge(origin: String, callbacks: BridgeCallbacks) {
    let bridge = use_memo(|origin| MessageBridge::new(origin), origin.clone());
    bridge.set_callbacks(callbacks);

    use_effect_with_deps(
        move |_| {
            let subscription = WindowMessages.listen((*bridge).clone());
            move || drop(subscription)
        },
        origin,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const WIDGET_ORIGIN: &str = "https://calendly.com";

    fn message(event: &str, payload: Option<Value>) -> WidgetMessage {
        WidgetMessage {
            event: event.to_string(),
            payload,
        }
    }

    fn recording_bridge() -> (MessageBridge, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let bridge = MessageBridge::new(WIDGET_ORIGIN);
        let selected = log.clone();
        let scheduled = log.clone();
        bridge.set_callbacks(BridgeCallbacks {
            on_date_and_time_selected: Some(Callback::from(move |_| selected.borrow_mut().push("selected".into()))),
            on_event_scheduled: Some(Callback::from(move |payload: Value| {
                scheduled.borrow_mut().push(format!("scheduled:{}", payload))
            })),
        });
        (bridge, log)
    }

    #[test]
    fn test_message_deserializes_without_payload() {
        let parsed: WidgetMessage = serde_json::from_value(json!({"event": "event_scheduled"})).unwrap();
        assert_eq!(parsed, message(EVENT_SCHEDULED, None));
        assert_eq!(
            SchedulingEvent::from_message(parsed),
            Some(SchedulingEvent::EventScheduled(Value::Null))
        );
    }

    #[test]
    fn test_foreign_origin_never_dispatches() {
        let (bridge, log) = recording_bridge();
        for tag in [DATE_AND_TIME_SELECTED, EVENT_SCHEDULED, "profile_page_viewed"] {
            assert!(!bridge.dispatch("https://evil.example", message(tag, Some(json!({"x": 1})))));
            assert!(!bridge.dispatch("https://calendly.com.evil.example", message(tag, None)));
        }
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_scheduled_forwards_payload_once() {
        let (bridge, log) = recording_bridge();
        let payload = json!({"invitee": {"uri": "https://api.example/invitees/1"}});
        assert!(bridge.dispatch(WIDGET_ORIGIN, message(EVENT_SCHEDULED, Some(payload.clone()))));
        assert_eq!(*log.borrow(), vec![format!("scheduled:{}", payload)]);
    }

    #[test]
    fn test_date_selected_carries_no_payload() {
        let (bridge, log) = recording_bridge();
        assert!(bridge.dispatch(WIDGET_ORIGIN, message(DATE_AND_TIME_SELECTED, Some(json!("ignored")))));
        assert_eq!(*log.borrow(), vec!["selected".to_string()]);
    }

    #[test]
    fn test_unknown_tag_is_ignored() {
        let (bridge, log) = recording_bridge();
        assert!(!bridge.dispatch(WIDGET_ORIGIN, message("event_type_viewed", None)));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_latest_callback_wins() {
        let bridge = MessageBridge::new(WIDGET_ORIGIN);
        let calls = Rc::new(RefCell::new(Vec::new()));

        let first = calls.clone();
        bridge.set_callbacks(BridgeCallbacks {
            on_event_scheduled: Some(Callback::from(move |_| first.borrow_mut().push("first"))),
            ..Default::default()
        });
        // The clone stands in for the listener captured at registration time.
        let listener_view = bridge.clone();
        listener_view.dispatch(WIDGET_ORIGIN, message(EVENT_SCHEDULED, None));

        let second = calls.clone();
        bridge.set_callbacks(BridgeCallbacks {
            on_event_scheduled: Some(Callback::from(move |_| second.borrow_mut().push("second"))),
            ..Default::default()
        });
        listener_view.dispatch(WIDGET_ORIGIN, message(EVENT_SCHEDULED, None));

        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_missing_callback_is_not_an_error() {
        let bridge = MessageBridge::new(WIDGET_ORIGIN);
        assert!(!bridge.dispatch(WIDGET_ORIGIN, message(EVENT_SCHEDULED, None)));
    }

    #[test]
    fn test_callback_may_replace_callbacks_while_dispatching() {
        let bridge = MessageBridge::new(WIDGET_ORIGIN);
        let inner = bridge.clone();
        bridge.set_callbacks(BridgeCallbacks {
            on_date_and_time_selected: Some(Callback::from(move |_| inner.set_callbacks(BridgeCallbacks::default()))),
            ..Default::default()
        });
        assert!(bridge.dispatch(WIDGET_ORIGIN, message(DATE_AND_TIME_SELECTED, None)));
        assert!(!bridge.dispatch(WIDGET_ORIGIN, message(DATE_AND_TIME_SELECTED, None)));
    }

    #[derive(Default)]
    struct FakeSource {
        listeners: Rc<RefCell<Vec<MessageBridge>>>,
    }

    impl FakeSource {
        fn post(&self, origin: &str, msg: WidgetMessage) {
            let listeners = self.listeners.borrow().clone();
            for listener in listeners {
                listener.dispatch(origin, msg.clone());
            }
        }
    }

    impl MessageSource for FakeSource {
        fn listen(&self, bridge: MessageBridge) -> Subscription {
            self.listeners.borrow_mut().push(bridge);
            let listeners = self.listeners.clone();
            Subscription::new(move || {
                listeners.borrow_mut().pop();
            })
        }
    }

    #[test]
    fn test_single_listener_sees_rerendered_callbacks_until_dropped() {
        let source = FakeSource::default();
        let (bridge, log) = recording_bridge();
        let subscription = source.listen(bridge.clone());

        // Re-renders only swap callbacks; the registration stays the same.
        let rerendered = log.clone();
        bridge.set_callbacks(BridgeCallbacks {
            on_date_and_time_selected: Some(Callback::from(move |_| rerendered.borrow_mut().push("rerendered".into()))),
            ..Default::default()
        });
        assert_eq!(source.listeners.borrow().len(), 1);
        source.post(WIDGET_ORIGIN, message(DATE_AND_TIME_SELECTED, None));
        assert_eq!(*log.borrow(), vec!["rerendered".to_string()]);

        drop(subscription);
        assert!(source.listeners.borrow().is_empty());
        source.post(WIDGET_ORIGIN, message(DATE_AND_TIME_SELECTED, None));
        assert_eq!(log.borrow().len(), 1);
    }
}
