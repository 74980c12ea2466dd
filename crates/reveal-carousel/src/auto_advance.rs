//! Periodic auto-advance that yields to the user's finger.
//!
//! ```text
//! start ──▶ tick, tick, tick ...            (every `interval`)
//! drag start ──▶ stop (ticks + pending resume cancelled)
//! drag end   ──▶ resume after `quiet_period` ──▶ start
//! ```
//!
//! Timer callbacks only hold a weak handle, so a dropped timer never fires,
//! and every tick re-checks the running flag before advancing.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use reveal_core::{Dispose, TimerKey, TimerQueue, on_unmount};
use web_time::Duration;

type AdvanceFn = Box<dyn FnMut(usize)>;

#[derive(Clone)]
pub struct AutoAdvanceTimer(Rc<Inner>);

struct Inner {
    timers: TimerQueue,
    interval: Duration,
    quiet_period: Duration,
    state: RefCell<AdvanceState>,
    on_advance: RefCell<Option<AdvanceFn>>,
    tick: Cell<Option<TimerKey>>,
    resume: Cell<Option<TimerKey>>,
    torn_down: Cell<bool>,
}

#[derive(Debug, Default)]
struct AdvanceState {
    current_index: usize,
    item_count: usize,
    running: bool,
}

impl AutoAdvanceTimer {
    pub fn new(timers: TimerQueue, interval: Duration, quiet_period: Duration) -> Self {
        Self(Rc::new(Inner {
            timers,
            interval,
            quiet_period,
            state: RefCell::new(AdvanceState::default()),
            on_advance: RefCell::new(None),
            tick: Cell::new(None),
            resume: Cell::new(None),
            torn_down: Cell::new(false),
        }))
    }

    /// Begins advancing through `item_count` items, calling `on_advance` with
    /// each new index. Calling it again replaces the schedule, never stacks it.
    pub fn start(&self, item_count: usize, on_advance: impl FnMut(usize) + 'static) {
        if self.0.torn_down.get() {
            log::warn!("auto-advance: start after teardown ignored");
            return;
        }
        *self.0.on_advance.borrow_mut() = Some(Box::new(on_advance));
        {
            let mut st = self.0.state.borrow_mut();
            st.item_count = item_count;
            if item_count > 0 {
                st.current_index %= item_count;
            } else {
                st.current_index = 0;
            }
        }
        Inner::restart(&self.0);
    }

    pub fn stop(&self) {
        self.0.stop();
    }

    /// Drag ended: start again once the user has been hands-off for the
    /// quiet period. A later drag start cancels the pending resume.
    pub fn resume_after_quiet_period(&self) {
        if self.0.torn_down.get() || self.0.on_advance.borrow().is_none() {
            return;
        }
        self.0.cancel_resume();
        let weak = Rc::downgrade(&self.0);
        let key = self.0.timers.schedule_once(self.0.quiet_period, move || {
            if let Some(inner) = weak.upgrade() {
                inner.resume.set(None);
                Inner::restart(&inner);
            }
        });
        log::debug!("auto-advance: resume in {:?}", self.0.quiet_period);
        self.0.resume.set(Some(key));
    }

    /// Syncs the index after the user settles on an item by hand.
    pub fn set_current_index(&self, index: usize) {
        let mut st = self.0.state.borrow_mut();
        if st.item_count > 0 {
            st.current_index = index % st.item_count;
        }
    }

    pub fn current_index(&self) -> usize {
        self.0.state.borrow().current_index
    }

    pub fn is_running(&self) -> bool {
        self.0.state.borrow().running
    }

    pub fn is_resume_pending(&self) -> bool {
        self.0.resume.get().is_some()
    }

    /// Guard that stops the timer when the owning view is torn down.
    pub fn teardown(&self) -> Dispose {
        let weak: Weak<Inner> = Rc::downgrade(&self.0);
        on_unmount(move || {
            if let Some(inner) = weak.upgrade() {
                inner.torn_down.set(true);
                inner.stop();
                inner.on_advance.borrow_mut().take();
            }
        })
    }
}

impl Inner {
    fn restart(this: &Rc<Inner>) {
        this.cancel_tick();
        this.cancel_resume();
        if this.torn_down.get() {
            return;
        }

        let item_count = this.state.borrow().item_count;
        if this.interval.is_zero() || item_count == 0 {
            log::debug!("auto-advance: disabled (interval {:?}, {item_count} items)", this.interval);
            this.state.borrow_mut().running = false;
            return;
        }

        let weak = Rc::downgrade(this);
        let key = this.timers.schedule_repeating(this.interval, move || {
            if let Some(inner) = weak.upgrade() {
                inner.advance();
            }
        });
        this.tick.set(Some(key));
        this.state.borrow_mut().running = true;
        log::debug!("auto-advance: running every {:?}", this.interval);
    }

    fn advance(&self) {
        let next = {
            let mut st = self.state.borrow_mut();
            if !st.running || st.item_count == 0 {
                return;
            }
            st.current_index = (st.current_index + 1) % st.item_count;
            st.current_index
        };
        log::trace!("auto-advance: -> {next}");

        // Run outside the borrow so the callback may restart or stop us.
        let cb = self.on_advance.borrow_mut().take();
        if let Some(mut cb) = cb {
            cb(next);
            let mut slot = self.on_advance.borrow_mut();
            if slot.is_none() && !self.torn_down.get() {
                *slot = Some(cb);
            }
        }
    }

    fn stop(&self) {
        self.cancel_tick();
        self.cancel_resume();
        let mut st = self.state.borrow_mut();
        if st.running {
            log::debug!("auto-advance: stopped at {}", st.current_index);
        }
        st.running = false;
    }

    fn cancel_tick(&self) {
        if let Some(key) = self.tick.take() {
            self.timers.cancel(key);
        }
    }

    fn cancel_resume(&self) {
        if let Some(key) = self.resume.take() {
            self.timers.cancel(key);
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.cancel_tick();
        self.cancel_resume();
    }
}

impl std::fmt::Debug for AutoAdvanceTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoAdvanceTimer")
            .field("interval", &self.0.interval)
            .field("quiet_period", &self.0.quiet_period)
            .field("state", &*self.0.state.borrow())
            .field("resume_pending", &self.is_resume_pending())
            .finish()
    }
}
