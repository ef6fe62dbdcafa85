use std::cell::{Cell, RefCell};
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::task::{LocalSpawn, LocalSpawnExt};
use log::{debug, warn};

use super::{ExposureSlot, InitOptions, IntegrationConfig, IntegrationHandle, Unavailable};

/// Observable phase of a mount's integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Idle,
    /// Terminal: not configured, or the load failed.
    Inactive,
    Loading,
    Active,
    Destroyed,
}

enum MountState<H> {
    Idle,
    Inactive,
    Loading { teardown_requested: bool },
    Active(Rc<H>),
    Destroyed,
}

impl<H> MountState<H> {
    fn phase(&self) -> LifecyclePhase {
        match self {
            MountState::Idle => LifecyclePhase::Idle,
            MountState::Inactive => LifecyclePhase::Inactive,
            MountState::Loading { .. } => LifecyclePhase::Loading,
            MountState::Active(_) => LifecyclePhase::Active,
            MountState::Destroyed => LifecyclePhase::Destroyed,
        }
    }
}

struct Inner<H> {
    kind: &'static str,
    state: RefCell<MountState<H>>,
    debug: Cell<bool>,
    slot: Box<dyn ExposureSlot<H>>,
}

/// Load, expose and tear down one optional integration for the lifetime of a
/// single mount point.
///
/// One instance per mount: `activate` once when the element becomes live,
/// `deactivate` when it goes away. Mounting the same kind twice on a page is
/// the caller's problem; nothing here deduplicates.
pub struct IntegrationLifecycle<H: IntegrationHandle> {
    inner: Rc<Inner<H>>,
}

impl<H: IntegrationHandle> Clone for IntegrationLifecycle<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<H: IntegrationHandle> fmt::Debug for IntegrationLifecycle<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegrationLifecycle")
            .field("kind", &self.inner.kind)
            .field("phase", &self.phase())
            .finish()
    }
}

impl<H: IntegrationHandle> IntegrationLifecycle<H> {
    pub fn new<S>(kind: &'static str, slot: S) -> Self
    where
        S: ExposureSlot<H> + 'static,
    {
        Self {
            inner: Rc::new(Inner {
                kind,
                state: RefCell::new(MountState::Idle),
                debug: Cell::new(false),
                slot: Box::new(slot),
            }),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.inner.kind
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.inner.state.borrow().phase()
    }

    /// The owned handle while active.
    #[cfg(test)]
    pub fn handle(&self) -> Option<Rc<H>> {
        match &*self.inner.state.borrow() {
            MountState::Active(handle) => Some(handle.clone()),
            _ => None,
        }
    }

    /// Starts loading the integration on `spawner` and returns immediately.
    ///
    /// Missing configuration is not an error: the mount simply stays inactive
    /// and `load` is never called. Load failures are absorbed the same way.
    pub fn activate<L, Fut, S>(&self, config: &IntegrationConfig, load: L, spawner: &S)
    where
        L: FnOnce(InitOptions) -> Fut,
        Fut: Future<Output = Result<H, Unavailable>> + 'static,
        S: LocalSpawn + ?Sized,
    {
        if self.phase() != LifecyclePhase::Idle {
            debug!("{}: activate ignored in phase {:?}", self.kind(), self.phase());
            return;
        }
        self.inner.debug.set(config.debug_mode);

        let Some(options) = config.init_options() else {
            self.diagnose(&Unavailable::NotConfigured);
            *self.inner.state.borrow_mut() = MountState::Inactive;
            return;
        };

        *self.inner.state.borrow_mut() = MountState::Loading {
            teardown_requested: false,
        };

        let lifecycle = self.clone();
        let pending = load(options);
        let spawned = spawner.spawn_local(async move {
            let outcome = pending.await;
            lifecycle.settle(outcome);
        });

        if spawned.is_err() {
            // The future was dropped unpolled, so no handle can ever arrive.
            self.diagnose(&Unavailable::Spawn);
            let mut state = self.inner.state.borrow_mut();
            *state = match *state {
                MountState::Loading {
                    teardown_requested: true,
                } => MountState::Destroyed,
                _ => MountState::Inactive,
            };
        }
    }

    /// Signals that the owning element is going away. Safe to call in any
    /// phase and any number of times.
    pub fn deactivate(&self) {
        let previous = std::mem::replace(&mut *self.inner.state.borrow_mut(), MountState::Destroyed);
        match previous {
            MountState::Idle | MountState::Inactive | MountState::Destroyed => {}
            MountState::Loading { .. } => {
                debug!("{}: teardown requested while loading", self.kind());
                *self.inner.state.borrow_mut() = MountState::Loading {
                    teardown_requested: true,
                };
            }
            MountState::Active(handle) => {
                debug!("{}: destroying active handle", self.kind());
                handle.destroy();
                self.inner.slot.retract(self.kind(), &handle);
            }
        }
    }

    fn settle(&self, outcome: Result<H, Unavailable>) {
        let teardown_requested = match &*self.inner.state.borrow() {
            MountState::Loading { teardown_requested } => *teardown_requested,
            _ => true,
        };

        match outcome {
            Ok(handle) if teardown_requested => {
                debug!("{}: load resolved after teardown, discarding handle", self.kind());
                *self.inner.state.borrow_mut() = MountState::Destroyed;
                handle.destroy();
            }
            Ok(handle) => {
                let handle = Rc::new(handle);
                *self.inner.state.borrow_mut() = MountState::Active(handle.clone());
                self.inner.slot.publish(self.kind(), &handle);
                debug!("{}: active", self.kind());
            }
            Err(err) => {
                self.diagnose(&err);
                *self.inner.state.borrow_mut() = if teardown_requested {
                    MountState::Destroyed
                } else {
                    MountState::Inactive
                };
            }
        }
    }

    // Development builds only; production failures stay invisible.
    fn diagnose(&self, err: &Unavailable) {
        if self.inner.debug.get() {
            warn!("{} unavailable: {}", self.kind(), err);
        }
    }
}
