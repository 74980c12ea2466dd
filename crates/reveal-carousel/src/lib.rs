//! # Edge-reveal carousel
//!
//! Controllers for a horizontally scrolling carousel split into two groups.
//! Overscrolling past the end of a group reveals a pill ("Next" on the right,
//! "Previous" on the left); releasing the drag far enough past it switches to
//! the other group.
//!
//! Everything is derived from one scroll offset:
//!
//! - [`ScrollOffsetTracker`] owns the offset; readers get an [`OffsetReader`].
//! - [`EdgeIndicator`] runs the per-edge reveal machine and pill styling.
//! - [`PaginationIndicator`] turns the offset into dot widths, opacity and scale.
//! - [`TabSwitchController`] decides switches on drag release or tab press;
//!   [`TabIndicator`] animates the highlight under the active tab.
//! - [`AutoAdvanceTimer`] steps through items and pauses while the user drags.
//! - [`Haptics`] debounces feedback for hosts that have a haptic engine.
//!
//! [`Carousel`] wires these together behind the host's event callbacks and
//! answers each input with a list of [`Command`]s.
//!
//! ```rust
//! use reveal_carousel::*;
//!
//! let cfg: CarouselConfig = serde_json::from_str(r#"{ "item_count": 3 }"#).unwrap();
//! let clock = reveal_core::TestClock::new();
//! let mut carousel = Carousel::new(cfg, clock.shared()).unwrap();
//!
//! carousel.on_scroll(100.0);
//! assert_eq!(carousel.dots().len(), 3);
//! assert_eq!(carousel.active_group(), Group::First);
//! ```

pub mod auto_advance;
pub mod carousel;
pub mod config;
pub mod edge;
pub mod feedback;
pub mod pagination;
pub mod scroll;
pub mod tabs;

pub use auto_advance::*;
pub use carousel::*;
pub use config::*;
pub use edge::*;
pub use feedback::*;
pub use pagination::*;
pub use scroll::*;
pub use tabs::*;
