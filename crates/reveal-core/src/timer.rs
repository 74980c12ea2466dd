//! Host-pumped timers.
//!
//! Nothing here spawns a thread. The host calls [`TimerQueue::run_due`] from
//! its event loop (a frame tick, an OS timer, a test) and every entry whose
//! deadline has passed fires in deadline order. Callbacks are taken out of the
//! queue while they run, so they may schedule or cancel other timers, or
//! cancel themselves.
//!
//! A repeating timer fires at most once per pump. If the host pumps late, the
//! missed periods are dropped and the next deadline stays on the original
//! period grid.

use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use web_time::{Duration, Instant};

use crate::SharedClock;

new_key_type! {
    /// Handle to a scheduled callback. Stale keys are harmless: cancelling a
    /// fired or cancelled timer is a no-op.
    pub struct TimerKey;
}

/// Repeating timers never fire faster than this.
const MIN_PERIOD: Duration = Duration::from_millis(1);

struct Entry {
    due: Instant,
    period: Option<Duration>,
    callback: Option<Box<dyn FnMut()>>,
}

#[derive(Clone)]
pub struct TimerQueue {
    clock: SharedClock,
    entries: Rc<RefCell<SlotMap<TimerKey, Entry>>>,
}

impl TimerQueue {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            clock,
            entries: Rc::new(RefCell::new(SlotMap::with_key())),
        }
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn schedule_once(&self, delay: Duration, f: impl FnOnce() + 'static) -> TimerKey {
        let mut f = Some(f);
        self.insert(delay, None, move || {
            if let Some(f) = f.take() {
                f()
            }
        })
    }

    /// First fires one `period` from now, then every `period` after.
    pub fn schedule_repeating(&self, period: Duration, f: impl FnMut() + 'static) -> TimerKey {
        let period = period.max(MIN_PERIOD);
        self.insert(period, Some(period), f)
    }

    fn insert(
        &self,
        delay: Duration,
        period: Option<Duration>,
        f: impl FnMut() + 'static,
    ) -> TimerKey {
        let due = self.now() + delay;
        let key = self.entries.borrow_mut().insert(Entry {
            due,
            period,
            callback: Some(Box::new(f)),
        });
        log::trace!("timer {key:?} scheduled in {delay:?} (period {period:?})");
        key
    }

    /// Returns whether a live timer was removed.
    pub fn cancel(&self, key: TimerKey) -> bool {
        let removed = self.entries.borrow_mut().remove(key).is_some();
        if removed {
            log::trace!("timer {key:?} cancelled");
        }
        removed
    }

    pub fn is_scheduled(&self, key: TimerKey) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn pending(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Fires everything due at the clock's current instant. A repeating timer
    /// that fell several periods behind fires once. Returns the number of
    /// callbacks invoked.
    pub fn run_due(&self) -> usize {
        let now = self.now();
        let mut fired = 0;

        while let Some((key, mut callback)) = self.take_next_due(now) {
            callback();
            fired += 1;

            // Put repeating callbacks back unless they were cancelled meanwhile.
            let mut entries = self.entries.borrow_mut();
            match entries.get(key).map(|e| e.period.is_some()) {
                Some(true) => {
                    if let Some(entry) = entries.get_mut(key) {
                        entry.callback = Some(callback);
                    }
                }
                Some(false) => {
                    entries.remove(key);
                }
                None => {}
            }
        }
        fired
    }

    fn take_next_due(&self, now: Instant) -> Option<(TimerKey, Box<dyn FnMut()>)> {
        let mut entries = self.entries.borrow_mut();
        let key = entries
            .iter()
            .filter(|(_, e)| e.callback.is_some() && e.due <= now)
            .min_by_key(|(_, e)| e.due)
            .map(|(k, _)| k)?;

        let entry = entries.get_mut(key)?;
        if let Some(period) = entry.period {
            entry.due = next_after(entry.due, period, now);
        }
        let callback = entry.callback.take()?;
        Some((key, callback))
    }
}

/// First deadline on the `due + k * period` grid that lies after `now`.
fn next_after(due: Instant, period: Duration, now: Instant) -> Instant {
    let behind = now.saturating_duration_since(due).as_nanos();
    let skipped = behind / period.as_nanos().max(1);
    let steps = u32::try_from(skipped + 1).ok();
    match steps.and_then(|n| period.checked_mul(n)) {
        Some(jump) => due + jump,
        None => now + period,
    }
}

impl std::fmt::Debug for TimerQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerQueue")
            .field("pending", &self.pending())
            .finish()
    }
}
