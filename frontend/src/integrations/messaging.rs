use std::cell::RefCell;

use serde_json::Value;

use super::Unavailable;

pub type MessageHandler = Box<dyn Fn(Value)>;

/// Messaging capability some integration handles expose.
pub trait Messaging {
    fn send(&self, body: &Value) -> Result<(), Unavailable>;

    /// Listens for `event` until the returned subscription is dropped.
    fn on(&self, event: &str, handler: MessageHandler) -> Subscription;
}

/// Unsubscribes when dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    pub fn inert() -> Self {
        Self { unsubscribe: None }
    }

    fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

/// Subscriptions tied to the lifetime of a handle, released together.
#[derive(Default)]
pub struct Subscriptions {
    held: RefCell<Vec<Subscription>>,
}

impl Subscriptions {
    pub fn keep(&self, subscription: Subscription) {
        self.held.borrow_mut().push(subscription);
    }

    /// Unsubscribes everything held so far.
    pub fn release_all(&self) {
        let held = std::mem::take(&mut *self.held.borrow_mut());
        drop(held);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Default)]
    struct Channel {
        sent: RefCell<Vec<Value>>,
        handlers: Rc<RefCell<HashMap<String, Vec<(u32, Rc<MessageHandler>)>>>>,
        next_id: RefCell<u32>,
    }

    impl Channel {
        fn emit(&self, event: &str, body: Value) {
            let handlers: Vec<_> = self
                .handlers
                .borrow()
                .get(event)
                .map(|hs| hs.iter().map(|(_, h)| h.clone()).collect())
                .unwrap_or_default();
            for handler in handlers {
                (**handler)(body.clone());
            }
        }
    }

    impl Messaging for Channel {
        fn send(&self, body: &Value) -> Result<(), Unavailable> {
            self.sent.borrow_mut().push(body.clone());
            Ok(())
        }

        fn on(&self, event: &str, handler: MessageHandler) -> Subscription {
            let id = {
                let mut next = self.next_id.borrow_mut();
                *next += 1;
                *next
            };
            self.handlers
                .borrow_mut()
                .entry(event.to_string())
                .or_default()
                .push((id, Rc::new(handler)));

            let handlers = self.handlers.clone();
            let event = event.to_string();
            Subscription::new(move || {
                if let Some(list) = handlers.borrow_mut().get_mut(&event) {
                    list.retain(|(existing, _)| *existing != id);
                }
            })
        }
    }

    #[test]
    fn test_send_reaches_channel() {
        let channel = Channel::default();
        channel.send(&json!({"type": "ping"})).unwrap();
        assert_eq!(*channel.sent.borrow(), vec![json!({"type": "ping"})]);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let channel = Channel::default();
        let received = Rc::new(RefCell::new(Vec::new()));

        let sink = received.clone();
        let subscription = channel.on("ready", Box::new(move |v| sink.borrow_mut().push(v)));
        channel.emit("ready", json!(1));
        drop(subscription);
        channel.emit("ready", json!(2));

        assert_eq!(*received.borrow(), vec![json!(1)]);
    }

    #[test]
    fn test_unsubscribe_runs_once() {
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let mut subscription = Subscription::new(move || *counter.borrow_mut() += 1);
        subscription.release();
        drop(subscription);
        assert_eq!(*calls.borrow(), 1);

        drop(Subscription::inert());
    }

    #[test]
    fn test_release_all_unsubscribes_every_held_subscription() {
        let channel = Channel::default();
        let received = Rc::new(RefCell::new(Vec::new()));
        let held = Subscriptions::default();

        for event in ["session_started", "session_ended"] {
            let sink = received.clone();
            held.keep(channel.on(event, Box::new(move |v| sink.borrow_mut().push(v))));
        }
        channel.emit("session_started", json!("a"));
        held.release_all();
        channel.emit("session_started", json!("b"));
        channel.emit("session_ended", json!("c"));

        assert_eq!(*received.borrow(), vec![json!("a")]);
        held.release_all();
    }
}
