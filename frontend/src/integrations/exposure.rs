use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// A well-known place where an active handle is published for out-of-band
/// access. Slots never own the handle; the mounting component does.
pub trait ExposureSlot<H> {
    fn publish(&self, kind: &'static str, handle: &Rc<H>);

    /// Clears the slot, but only if it still refers to `handle`.
    fn retract(&self, kind: &'static str, handle: &Rc<H>);
}

impl<H, A, B> ExposureSlot<H> for (A, B)
where
    A: ExposureSlot<H>,
    B: ExposureSlot<H>,
{
    fn publish(&self, kind: &'static str, handle: &Rc<H>) {
        self.0.publish(kind, handle);
        self.1.publish(kind, handle);
    }

    fn retract(&self, kind: &'static str, handle: &Rc<H>) {
        self.0.retract(kind, handle);
        self.1.retract(kind, handle);
    }
}

thread_local! {
    static ENTRIES: RefCell<HashMap<&'static str, Weak<dyn Any>>> = RefCell::new(HashMap::new());
}

/// In-process registry of active integration handles, keyed by kind.
///
/// Entries are weak: a lookup only succeeds while the owner keeps the handle
/// alive, and the owner retracts it on teardown.
#[derive(Debug, Clone, Copy, Default)]
pub struct Registry;

impl Registry {
    pub fn lookup<H: Any>(kind: &str) -> Option<Rc<H>> {
        let entry = ENTRIES.with(|entries| entries.borrow().get(kind).and_then(Weak::upgrade))?;
        entry.downcast::<H>().ok()
    }

    #[cfg(test)]
    pub fn is_published(kind: &str) -> bool {
        ENTRIES.with(|entries| {
            entries
                .borrow()
                .get(kind)
                .map(|weak| weak.strong_count() > 0)
                .unwrap_or(false)
        })
    }
}

fn same_allocation<H>(weak: &Weak<dyn Any>, handle: &Rc<H>) -> bool {
    weak.as_ptr() as *const () == Rc::as_ptr(handle) as *const ()
}

impl<H: Any> ExposureSlot<H> for Registry {
    fn publish(&self, kind: &'static str, handle: &Rc<H>) {
        let erased: Rc<dyn Any> = handle.clone();
        let weak = Rc::downgrade(&erased);
        ENTRIES.with(|entries| {
            entries.borrow_mut().insert(kind, weak);
        });
    }

    fn retract(&self, kind: &'static str, handle: &Rc<H>) {
        ENTRIES.with(|entries| {
            let mut entries = entries.borrow_mut();
            let owned = entries
                .get(kind)
                .map(|weak| same_allocation(weak, handle))
                .unwrap_or(false);
            if owned {
                entries.remove(kind);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker(u32);

    #[test]
    fn test_lookup_returns_published_handle() {
        let handle = Rc::new(Marker(7));
        Registry.publish("test-lookup", &handle);
        let found = Registry::lookup::<Marker>("test-lookup").unwrap();
        assert_eq!(found.0, 7);
        assert!(Rc::ptr_eq(&found, &handle));
    }

    #[test]
    fn test_registry_does_not_keep_handle_alive() {
        let handle = Rc::new(Marker(1));
        Registry.publish("test-weak", &handle);
        assert!(Registry::is_published("test-weak"));
        drop(handle);
        assert!(!Registry::is_published("test-weak"));
        assert!(Registry::lookup::<Marker>("test-weak").is_none());
    }

    #[test]
    fn test_lookup_with_wrong_type_is_none() {
        let handle = Rc::new(Marker(1));
        Registry.publish("test-type", &handle);
        assert!(Registry::lookup::<String>("test-type").is_none());
    }

    #[test]
    fn test_retract_only_clears_own_handle() {
        let older = Rc::new(Marker(1));
        let newer = Rc::new(Marker(2));
        Registry.publish("test-retract", &older);
        Registry.publish("test-retract", &newer);

        // The older mount tearing down must not clear the newer one.
        Registry.retract("test-retract", &older);
        assert_eq!(Registry::lookup::<Marker>("test-retract").unwrap().0, 2);

        Registry.retract("test-retract", &newer);
        assert!(Registry::lookup::<Marker>("test-retract").is_none());
    }

    #[test]
    fn test_pair_publishes_to_both() {
        struct Counting(RefCell<Vec<&'static str>>);
        impl ExposureSlot<Marker> for Rc<Counting> {
            fn publish(&self, kind: &'static str, _: &Rc<Marker>) {
                self.0.borrow_mut().push(kind);
            }
            fn retract(&self, _: &'static str, _: &Rc<Marker>) {
                self.0.borrow_mut().clear();
            }
        }

        let counting = Rc::new(Counting(RefCell::new(Vec::new())));
        let pair = (Registry, counting.clone());
        let handle = Rc::new(Marker(3));

        pair.publish("test-pair", &handle);
        assert!(Registry::is_published("test-pair"));
        assert_eq!(*counting.0.borrow(), vec!["test-pair"]);

        pair.retract("test-pair", &handle);
        assert!(!Registry::is_published("test-pair"));
        assert!(counting.0.borrow().is_empty());
    }
}
