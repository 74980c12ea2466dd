use std::cell::Cell;
use std::rc::Rc;
use web_time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
pub enum Easing {
    Linear,
    Spring { damping: f32, stiffness: f32 },
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::Spring { damping, stiffness } => {
                let omega = (stiffness / damping).sqrt();
                let zeta = damping / (2.0 * (stiffness * damping).sqrt());

                if zeta < 1.0 {
                    // Underdamped
                    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
                    let t = t * 2.0;
                    1.0 - ((-zeta * omega * t).exp() * (omega_d * t).cos())
                } else {
                    t * (2.0 - t)
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Sliding tab indicator: stiff, lightly damped.
    pub fn tab_slide() -> Self {
        Self::spring_phys(25.0, 250.0, Duration::from_millis(400))
    }

    pub fn spring_phys(damping: f32, stiffness: f32, duration: Duration) -> Self {
        Self {
            duration,
            easing: Easing::Spring { damping, stiffness },
        }
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

/// Time source for animations and timers.
pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

pub type SharedClock = Rc<dyn Clock>;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl SystemClock {
    pub fn shared() -> SharedClock {
        Rc::new(SystemClock)
    }
}

/// A clock you drive by hand. Clones share the same instant, so a test can
/// keep one handle and give another to the code under test.
#[derive(Clone, Debug)]
pub struct TestClock {
    t: Rc<Cell<Instant>>,
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }
    pub fn starting_at(t: Instant) -> Self {
        Self {
            t: Rc::new(Cell::new(t)),
        }
    }
    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }
    pub fn shared(&self) -> SharedClock {
        Rc::new(self.clone())
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}

/// Animated value that transitions smoothly
#[derive(Debug)]
pub struct AnimatedValue<T: Interpolate + Clone> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
}

impl<T: Interpolate + Clone> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
        }
    }

    /// Retargets from wherever the value currently is.
    pub fn set_target(&mut self, target: T, now: Instant) {
        self.start = self.current.clone();
        self.target = target;
        self.start_time = Some(now);
    }

    /// Jumps straight to `value` and stops any running transition.
    pub fn snap_to(&mut self, value: T) {
        self.current = value.clone();
        self.start = value.clone();
        self.target = value;
        self.start_time = None;
    }

    pub fn update(&mut self, now: Instant) -> bool {
        if let Some(start) = self.start_time {
            let animation_time = now.saturating_duration_since(start);

            if animation_time >= self.spec.duration {
                self.current = self.target.clone();
                self.start_time = None;
                return false;
            }

            let t = animation_time.as_secs_f32() / self.spec.duration.as_secs_f32();
            let eased_t = self.spec.easing.interpolate(t);
            self.current = self.start.interpolate(&self.target, eased_t);

            true
        } else {
            false
        }
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_animating(&self) -> bool {
        self.start_time.is_some()
    }
}
