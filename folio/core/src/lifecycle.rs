//! Component Lifecycle
//!
//! Framework-independent mount / timer / unmount hooks for the page widgets.
//!
//! # Design
//!
//! A [`Mounted`] instance owns its component and a private [`Scheduler`].
//! Hooks receive a [`Context`] to arm and clear timers and to flag that the
//! component's visible state changed. Surfaces either poll the dirty flag or
//! register an observer with [`Mounted::on_state_change`].
//!
//! ```text
//! mount ──► on_mount(ctx) ──► advance_to(t) ──► on_timer(..) ... ──► unmount
//!                                  ▲                                  │
//!                  update(|c, ctx| input handler)          on_unmount + clear_all
//! ```
//!
//! `unmount` consumes the instance, so no timer can fire against a torn-down
//! component.

use std::time::Duration;

use crate::scheduler::{Scheduler, TimerId};

/// A widget driven by lifecycle hooks and timers
pub trait Component {
    /// Payload carried by this component's timers
    type Timer: Clone;

    /// Called once when the component is mounted, at virtual time zero
    fn on_mount(&mut self, ctx: &mut Context<'_, Self::Timer>);

    /// Called for every timer that comes due
    fn on_timer(&mut self, timer: Self::Timer, ctx: &mut Context<'_, Self::Timer>);

    /// Called once before the component is torn down
    fn on_unmount(&mut self, _ctx: &mut Context<'_, Self::Timer>) {}
}

/// Handle given to lifecycle hooks and input handlers
pub struct Context<'a, T> {
    scheduler: &'a mut Scheduler<T>,
    dirty: bool,
}

impl<'a, T> Context<'a, T> {
    fn new(scheduler: &'a mut Scheduler<T>) -> Self {
        Self {
            scheduler,
            dirty: false,
        }
    }

    /// Current virtual time since mount
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Arm a one-shot timer
    pub fn set_timeout(&mut self, delay: Duration, timer: T) -> TimerId {
        self.scheduler.set_timeout(delay, timer)
    }

    /// Arm a repeating timer
    pub fn set_interval(&mut self, period: Duration, timer: T) -> TimerId {
        self.scheduler.set_interval(period, timer)
    }

    /// Cancel a timer (no-op if it already fired or was cleared)
    pub fn clear_timer(&mut self, id: TimerId) -> bool {
        self.scheduler.clear(id)
    }

    /// Flag that visible state changed and the component needs a render
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn finish(self) -> bool {
        self.dirty
    }
}

type Observer<C> = Box<dyn FnMut(&C)>;

/// A mounted component together with its timers
pub struct Mounted<C: Component> {
    component: C,
    scheduler: Scheduler<C::Timer>,
    dirty: bool,
    observers: Vec<Observer<C>>,
}

impl<C: Component> Mounted<C> {
    /// Mount a component, running its `on_mount` hook
    pub fn mount(mut component: C) -> Self {
        let mut scheduler = Scheduler::new();
        let mut ctx = Context::new(&mut scheduler);
        component.on_mount(&mut ctx);
        let dirty = ctx.finish();

        Self {
            component,
            scheduler,
            dirty,
            observers: Vec::new(),
        }
    }

    /// Register a render observer, called after every state change
    pub fn on_state_change(&mut self, observer: impl FnMut(&C) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Fire every timer due up to `elapsed` (time since mount)
    ///
    /// Returns `true` if any handler changed visible state.
    pub fn advance_to(&mut self, elapsed: Duration) -> bool {
        let mut changed = false;

        while let Some(fired) = self.scheduler.pop_due(elapsed) {
            let mut ctx = Context::new(&mut self.scheduler);
            self.component.on_timer(fired.payload, &mut ctx);
            if ctx.finish() {
                changed = true;
                self.notify();
            }
        }
        self.scheduler.advance_clock(elapsed);

        self.dirty |= changed;
        changed
    }

    /// Run an input handler against the component at the current time
    ///
    /// Surfaces should `advance_to` the input's timestamp first so the
    /// handler sees up-to-date state.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut C, &mut Context<'_, C::Timer>) -> R) -> R {
        let mut ctx = Context::new(&mut self.scheduler);
        let out = f(&mut self.component, &mut ctx);
        if ctx.finish() {
            self.dirty = true;
            self.notify();
        }
        out
    }

    /// Tear the component down, cancelling everything it left armed
    pub fn unmount(mut self) -> C {
        let mut ctx = Context::new(&mut self.scheduler);
        self.component.on_unmount(&mut ctx);
        drop(ctx);

        let leaked = self.scheduler.clear_all();
        if leaked > 0 {
            tracing::debug!(leaked, "Cancelled timers left armed at unmount");
        }

        self.component
    }

    /// The component's current state
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Virtual time since mount
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Number of armed timers
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Earliest time something will happen on its own
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Whether state changed since the last `take_dirty`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and reset the dirty flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer(&self.component);
        }
    }
}
