//! Feedback signals and the host-side haptics adapter.
//!
//! Controllers only *request* feedback by returning a [`FeedbackKind`]. The
//! host forwards those to [`Haptics`], which knows whether the platform can
//! vibrate at all and drops bursts that arrive too close together.

use web_time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    ImpactLight,
    ImpactMedium,
    ImpactHeavy,
    NotifySuccess,
    NotifyWarning,
    NotifyError,
    Selection,
}

/// Minimum spacing between two physical signals.
pub const HAPTIC_DEBOUNCE: Duration = Duration::from_millis(100);

/// Platform vibration backend, implemented by the host.
pub trait HapticEngine {
    fn play(&mut self, kind: FeedbackKind);
}

/// Debouncing wrapper around an optional [`HapticEngine`].
pub struct Haptics<E: HapticEngine> {
    engine: Option<E>,
    min_gap: Duration,
    last: Option<Instant>,
}

impl<E: HapticEngine> Haptics<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine: Some(engine),
            min_gap: HAPTIC_DEBOUNCE,
            last: None,
        }
    }

    /// For platforms without a vibration motor; every signal is dropped.
    pub fn unsupported() -> Self {
        Self {
            engine: None,
            min_gap: HAPTIC_DEBOUNCE,
            last: None,
        }
    }

    pub fn with_min_gap(mut self, gap: Duration) -> Self {
        self.min_gap = gap;
        self
    }

    pub fn is_supported(&self) -> bool {
        self.engine.is_some()
    }

    /// Returns whether the engine was actually asked to play.
    pub fn fire(&mut self, kind: FeedbackKind, now: Instant) -> bool {
        let Some(engine) = self.engine.as_mut() else {
            return false;
        };
        if let Some(last) = self.last
            && now.saturating_duration_since(last) < self.min_gap
        {
            log::trace!("haptics: {kind:?} debounced");
            return false;
        }
        engine.play(kind);
        self.last = Some(now);
        true
    }

    pub fn engine(&self) -> Option<&E> {
        self.engine.as_ref()
    }
}

impl<E: HapticEngine> std::fmt::Debug for Haptics<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Haptics")
            .field("supported", &self.is_supported())
            .field("min_gap", &self.min_gap)
            .finish()
    }
}
