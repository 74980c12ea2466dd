//! # Signals, Scopes, Clocks, and Timers
//!
//! Reveal drives every carousel visual from a handful of small, single
//! threaded primitives. Nothing here knows about carousels; the controllers
//! in `reveal-carousel` are built on top.
//!
//! - `Signal<T>` / `ReadSignal<T>`: a shared value with exactly one writer
//!   handle and any number of read-only handles.
//! - `Scope` / `Dispose`: teardown bookkeeping so timers never outlive the
//!   view that owns them.
//! - `Clock` / `TestClock` / `AnimatedValue`: time as an injected
//!   collaborator, so animation and timers can be driven deterministically.
//! - `Interpolation`: piecewise-linear mapping from an input (usually a
//!   scroll offset) to an output (opacity, width, translation).
//! - `TimerQueue`: cancellable one-shot and repeating callbacks fired when
//!   the host pumps `run_due`.
//!
//! ## Signals
//!
//! ```rust
//! use reveal_core::*;
//!
//! let offset = signal(0.0f32);
//! let reader = offset.read_only();
//! offset.set(42.0);
//! assert_eq!(reader.get(), 42.0);
//! ```
//!
//! ## Interpolation
//!
//! ```rust
//! use reveal_core::*;
//!
//! let fade = Interpolation::new(&[50.0, 70.0], &[0.0, 1.0]).unwrap();
//! assert_eq!(fade.eval(60.0), 0.5);
//! assert_eq!(fade.eval(500.0), 1.0); // clamped
//! ```
//!
//! ## Timers
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use web_time::Duration;
//! use reveal_core::*;
//!
//! let clock = TestClock::new();
//! let timers = TimerQueue::new(clock.shared());
//! let fired = Rc::new(Cell::new(0));
//! let f = fired.clone();
//! timers.schedule_repeating(Duration::from_millis(100), move || f.set(f.get() + 1));
//!
//! clock.advance(Duration::from_millis(100));
//! timers.run_due();
//! clock.advance(Duration::from_millis(100));
//! timers.run_due();
//! assert_eq!(fired.get(), 2);
//!
//! // a late pump fires once, not once per missed period
//! clock.advance(Duration::from_millis(1000));
//! timers.run_due();
//! assert_eq!(fired.get(), 3);
//! ```

pub mod animation;
pub mod effects;
pub mod error;
pub mod interpolation;
pub mod scope;
pub mod signal;
pub mod tests;
pub mod timer;

pub use animation::*;
pub use effects::*;
pub use error::*;
pub use interpolation::*;
pub use scope::*;
pub use signal::*;
pub use timer::*;
