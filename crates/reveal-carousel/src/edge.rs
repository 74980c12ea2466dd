//! # Edge pills
//!
//! A pill is revealed when the list is dragged past one of its ends by more
//! than `pill_width`. Each edge runs a three-phase machine:
//!
//! ```text
//!            past threshold             (fires feedback)
//! Hidden ─────────────────▶ VisibleNotFired ──────────▶ VisibleFired
//!   ▲                                                       │
//!   └──────────────── back under threshold ─────────────────┘
//! ```
//!
//! The feedback signal is emitted on the way through `VisibleNotFired`, so it
//! fires once per reveal and can never be left "fired but hidden".
//!
//! Independently of visibility, `ready_to_switch` tracks whether the drag has
//! gone `overscroll_buffer` further still; the tab controller reads it when
//! the finger lifts.

use reveal_core::{Error, Interpolation, Result};

use crate::FeedbackKind;

/// How far a pill slides while fading in.
pub const PILL_SLIDE: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
}

impl Edge {
    pub fn label(self) -> &'static str {
        match self {
            Edge::Left => "Previous",
            Edge::Right => "Next",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgePhase {
    Hidden,
    VisibleNotFired,
    VisibleFired,
}

/// Flattened view of an edge for hosts and the tab controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeState {
    pub visible: bool,
    pub haptic_fired: bool,
    pub ready_to_switch: bool,
}

/// Offset-driven pill appearance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PillStyle {
    pub opacity: f32,
    pub translate_x: f32,
}

#[derive(Clone, Debug)]
pub struct EdgeIndicator {
    edge: Edge,
    pill_width: f32,
    buffer: f32,
    max_scroll_offset: f32,
    phase: EdgePhase,
    ready_to_switch: bool,
    fade: Interpolation,
    slide: Interpolation,
}

impl EdgeIndicator {
    pub fn new(edge: Edge, pill_width: f32, buffer: f32, max_scroll_offset: f32) -> Result<Self> {
        for (name, v) in [("pill_width", pill_width), ("overscroll_buffer", buffer)] {
            if !v.is_finite() || v < 0.0 {
                return Err(Error::InvalidConfiguration(format!(
                    "{name} must be finite and >= 0, got {v}"
                )));
            }
        }
        let (fade, slide) = pill_curves(edge, pill_width, buffer, max_scroll_offset)?;
        Ok(Self {
            edge,
            pill_width,
            buffer,
            max_scroll_offset,
            phase: EdgePhase::Hidden,
            ready_to_switch: false,
            fade,
            slide,
        })
    }

    /// Called when the content or viewport size changes.
    pub fn set_max_scroll_offset(&mut self, max_scroll_offset: f32) -> Result<()> {
        let (fade, slide) = pill_curves(self.edge, self.pill_width, self.buffer, max_scroll_offset)?;
        self.max_scroll_offset = max_scroll_offset;
        self.fade = fade;
        self.slide = slide;
        Ok(())
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn phase(&self) -> EdgePhase {
        self.phase
    }

    pub fn show_threshold(&self) -> f32 {
        match self.edge {
            Edge::Right => self.max_scroll_offset + self.pill_width,
            Edge::Left => -self.pill_width,
        }
    }

    pub fn past_show_threshold(&self, offset: f32) -> bool {
        match self.edge {
            Edge::Right => offset > self.show_threshold(),
            Edge::Left => offset < self.show_threshold(),
        }
    }

    pub fn past_switch_threshold(&self, offset: f32) -> bool {
        match self.edge {
            Edge::Right => offset > self.show_threshold() + self.buffer,
            Edge::Left => offset < self.show_threshold() - self.buffer,
        }
    }

    /// Advances the machine for a new offset. Returns the feedback to emit,
    /// if this update revealed the pill.
    pub fn on_offset(&mut self, offset: f32) -> Option<FeedbackKind> {
        self.ready_to_switch = self.past_switch_threshold(offset);

        match (self.phase, self.past_show_threshold(offset)) {
            (EdgePhase::Hidden, true) => {
                log::debug!("edge {:?}: revealed at offset {offset}", self.edge);
                self.phase = EdgePhase::VisibleNotFired;
                self.fire()
            }
            (EdgePhase::VisibleNotFired | EdgePhase::VisibleFired, false) => {
                log::debug!("edge {:?}: hidden at offset {offset}", self.edge);
                self.phase = EdgePhase::Hidden;
                None
            }
            _ => None,
        }
    }

    fn fire(&mut self) -> Option<FeedbackKind> {
        if self.phase != EdgePhase::VisibleNotFired {
            return None;
        }
        self.phase = EdgePhase::VisibleFired;
        Some(FeedbackKind::ImpactLight)
    }

    pub fn reset(&mut self) {
        if self.phase != EdgePhase::Hidden || self.ready_to_switch {
            log::debug!("edge {:?}: reset", self.edge);
        }
        self.phase = EdgePhase::Hidden;
        self.ready_to_switch = false;
    }

    pub fn is_visible(&self) -> bool {
        self.phase != EdgePhase::Hidden
    }

    pub fn ready_to_switch(&self) -> bool {
        self.ready_to_switch
    }

    pub fn state(&self) -> EdgeState {
        EdgeState {
            visible: self.is_visible(),
            haptic_fired: self.phase == EdgePhase::VisibleFired,
            ready_to_switch: self.ready_to_switch,
        }
    }

    /// Fades in across the buffer zone while sliding in from the outside.
    pub fn pill_style(&self, offset: f32) -> PillStyle {
        PillStyle {
            opacity: self.fade.eval(offset),
            translate_x: self.slide.eval(offset),
        }
    }
}

fn pill_curves(
    edge: Edge,
    pill_width: f32,
    buffer: f32,
    max_scroll_offset: f32,
) -> Result<(Interpolation, Interpolation)> {
    match edge {
        Edge::Right => {
            let start = max_scroll_offset + pill_width;
            let range = [start, start + buffer];
            Ok((
                Interpolation::new(&range, &[0.0, 1.0])?,
                Interpolation::new(&range, &[PILL_SLIDE, 0.0])?,
            ))
        }
        Edge::Left => {
            let end = -pill_width;
            let range = [end - buffer, end];
            Ok((
                Interpolation::new(&range, &[1.0, 0.0])?,
                Interpolation::new(&range, &[0.0, -PILL_SLIDE])?,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right(max: f32) -> EdgeIndicator {
        EdgeIndicator::new(Edge::Right, 50.0, 20.0, max).unwrap()
    }

    fn left() -> EdgeIndicator {
        EdgeIndicator::new(Edge::Left, 50.0, 20.0, 0.0).unwrap()
    }

    fn fires(edge: &mut EdgeIndicator, offsets: &[f32]) -> usize {
        offsets
            .iter()
            .filter_map(|&o| edge.on_offset(o))
            .count()
    }

    #[test]
    fn test_right_edge_stays_hidden_under_threshold() {
        // The threshold is strict: 50 itself does not reveal.
        let mut e = right(0.0);
        assert_eq!(fires(&mut e, &[0.0, 10.0, 40.0, 50.0]), 0);
        assert_eq!(e.phase(), EdgePhase::Hidden);

        let mut e = right(0.0);
        assert_eq!(fires(&mut e, &[0.0, 10.0, 40.0, 65.0]), 1);
        assert!(!e.ready_to_switch());
    }

    #[test]
    fn test_right_edge_fires_once_on_reveal() {
        let mut e = right(0.0);
        assert_eq!(e.on_offset(0.0), None);
        assert_eq!(e.on_offset(55.0), Some(FeedbackKind::ImpactLight));
        assert_eq!(e.phase(), EdgePhase::VisibleFired);
        assert_eq!(e.on_offset(75.0), None);
        assert!(e.state().visible && e.state().haptic_fired);
    }

    #[test]
    fn test_fire_count_matches_reveals() {
        let mut e = right(100.0);
        let offsets = [
            0.0, 120.0, 151.0, 160.0, 149.0, 155.0, 190.0, 40.0, 151.0, 151.0, -10.0,
        ];
        let mut reveals = 0;
        let mut fired = 0;
        for o in offsets {
            let was_hidden = e.phase() == EdgePhase::Hidden;
            if e.on_offset(o).is_some() {
                fired += 1;
            }
            if was_hidden && e.is_visible() {
                reveals += 1;
            }
            // never fired-but-hidden
            let s = e.state();
            assert!(!s.haptic_fired || s.visible);
        }
        assert_eq!(fired, 3);
        assert_eq!(fired, reveals);
    }

    #[test]
    fn test_left_edge_thresholds() {
        let mut e = left();
        assert_eq!(e.on_offset(-50.0), None);
        assert!(!e.is_visible());
        assert_eq!(e.on_offset(-51.0), Some(FeedbackKind::ImpactLight));
        assert!(!e.ready_to_switch());
        e.on_offset(-71.0);
        assert!(e.ready_to_switch());
        assert_eq!(e.on_offset(-80.0), None);
    }

    #[test]
    fn test_ready_to_switch_needs_buffer() {
        let mut e = right(0.0);
        e.on_offset(60.0);
        assert!(e.is_visible());
        assert!(!e.ready_to_switch());
        e.on_offset(70.0);
        assert!(!e.ready_to_switch());
        e.on_offset(70.5);
        assert!(e.ready_to_switch());
        e.on_offset(69.0);
        assert!(!e.ready_to_switch());
    }

    #[test]
    fn test_reset_hides_and_rearms() {
        let mut e = right(0.0);
        e.on_offset(90.0);
        assert!(e.ready_to_switch());
        e.reset();
        assert_eq!(e.state(), EdgeState::default());
        assert_eq!(e.on_offset(90.0), Some(FeedbackKind::ImpactLight));
    }

    #[test]
    fn test_pill_style_fades_across_buffer() {
        let e = right(100.0);
        assert_eq!(e.pill_style(150.0), PillStyle { opacity: 0.0, translate_x: 20.0 });
        assert_eq!(e.pill_style(170.0), PillStyle { opacity: 1.0, translate_x: 0.0 });
        let mid = e.pill_style(160.0);
        assert!((mid.opacity - 0.5).abs() < 1e-6);
        assert!((mid.translate_x - 10.0).abs() < 1e-6);

        let l = left();
        assert_eq!(l.pill_style(-70.0), PillStyle { opacity: 1.0, translate_x: 0.0 });
        assert_eq!(l.pill_style(0.0), PillStyle { opacity: 0.0, translate_x: -20.0 });
    }

    #[test]
    fn test_max_offset_moves_right_threshold() {
        let mut e = right(0.0);
        e.set_max_scroll_offset(300.0).unwrap();
        assert_eq!(e.show_threshold(), 350.0);
        assert!(!e.past_show_threshold(340.0));
        assert!(e.set_max_scroll_offset(f32::NAN).is_err());
        assert_eq!(e.show_threshold(), 350.0);
    }

    #[test]
    fn test_rejects_negative_pill_width() {
        assert!(EdgeIndicator::new(Edge::Right, -5.0, 20.0, 0.0).is_err());
    }
}
