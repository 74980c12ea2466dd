use reveal_core::{AnimatedValue, AnimationSpec};
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::{Edge, EdgeState};

/// The two item sets sharing one carousel viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    #[default]
    First,
    Second,
}

impl Group {
    pub const COUNT: usize = 2;

    pub fn index(self) -> usize {
        match self {
            Group::First => 0,
            Group::Second => 1,
        }
    }

    pub fn other(self) -> Group {
        match self {
            Group::First => Group::Second,
            Group::Second => Group::First,
        }
    }

    /// The edge whose pill leads to the other group.
    pub fn exit_edge(self) -> Edge {
        match self {
            Group::First => Edge::Right,
            Group::Second => Edge::Left,
        }
    }
}

/// Decides group switches. Only a finger lift or a direct tab press can
/// change the active group; scrolling alone never does.
#[derive(Clone, Debug, Default)]
pub struct TabSwitchController {
    active: Group,
}

impl TabSwitchController {
    pub fn new(active: Group) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Group {
        self.active
    }

    /// Evaluated once per drag release. Returns the newly active group.
    pub fn on_drag_end(&mut self, left: EdgeState, right: EdgeState) -> Option<Group> {
        let exit = match self.active.exit_edge() {
            Edge::Left => left,
            Edge::Right => right,
        };
        if !exit.ready_to_switch {
            return None;
        }
        self.switch_to(self.active.other())
    }

    /// Direct tab press. Returns `None` when `group` is already active.
    pub fn select(&mut self, group: Group) -> Option<Group> {
        if group == self.active {
            return None;
        }
        self.switch_to(group)
    }

    fn switch_to(&mut self, group: Group) -> Option<Group> {
        log::debug!("tabs: {:?} -> {:?}", self.active, group);
        self.active = group;
        Some(group)
    }
}

/// Inset of the sliding highlight inside its track.
const TRACK_INSET: f32 = 4.0;

/// Highlight that slides under the active tab label.
#[derive(Debug)]
pub struct TabIndicator {
    container_width: f32,
    x: AnimatedValue<f32>,
}

impl TabIndicator {
    pub fn new(spec: AnimationSpec) -> Self {
        Self {
            container_width: 0.0,
            x: AnimatedValue::new(0.0, spec),
        }
    }

    pub fn segment_width(&self) -> f32 {
        ((self.container_width - TRACK_INSET) / Group::COUNT as f32).max(0.0)
    }

    /// Layout changed; jump to the resting spot for `active` without animating.
    pub fn set_container_width(&mut self, width: f32, active: Group) {
        if !width.is_finite() || width < 0.0 {
            log::warn!("tabs: ignoring container width {width}");
            return;
        }
        self.container_width = width;
        self.x.snap_to(self.rest_x(active));
    }

    pub fn slide_to(&mut self, group: Group, now: Instant) {
        self.x.set_target(self.rest_x(group), now);
    }

    pub fn translate_x(&mut self, now: Instant) -> f32 {
        self.x.update(now);
        *self.x.get()
    }

    pub fn is_animating(&self) -> bool {
        self.x.is_animating()
    }

    fn rest_x(&self, group: Group) -> f32 {
        group.index() as f32 * self.segment_width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reveal_core::{Clock, Easing, TestClock};
    use web_time::Duration;

    fn ready() -> EdgeState {
        EdgeState {
            visible: true,
            haptic_fired: true,
            ready_to_switch: true,
        }
    }

    #[test]
    fn test_switches_forward_on_right_release() {
        let mut tabs = TabSwitchController::default();
        assert_eq!(tabs.on_drag_end(EdgeState::default(), ready()), Some(Group::Second));
        assert_eq!(tabs.active(), Group::Second);
    }

    #[test]
    fn test_switches_back_on_left_release() {
        let mut tabs = TabSwitchController::new(Group::Second);
        assert_eq!(tabs.on_drag_end(EdgeState::default(), ready()), None);
        assert_eq!(tabs.on_drag_end(ready(), EdgeState::default()), Some(Group::First));
    }

    #[test]
    fn test_visible_but_not_ready_stays() {
        let mut tabs = TabSwitchController::default();
        let shown = EdgeState {
            visible: true,
            haptic_fired: true,
            ready_to_switch: false,
        };
        assert_eq!(tabs.on_drag_end(EdgeState::default(), shown), None);
        assert_eq!(tabs.active(), Group::First);
    }

    #[test]
    fn test_select_is_noop_for_active() {
        let mut tabs = TabSwitchController::default();
        assert_eq!(tabs.select(Group::First), None);
        assert_eq!(tabs.select(Group::Second), Some(Group::Second));
    }

    #[test]
    fn test_indicator_slides_between_segments() {
        let clock = TestClock::new();
        let mut ind = TabIndicator::new(AnimationSpec::tween(
            Duration::from_millis(200),
            Easing::Linear,
        ));
        ind.set_container_width(204.0, Group::First);
        assert_eq!(ind.segment_width(), 100.0);
        assert_eq!(ind.translate_x(clock.now()), 0.0);

        ind.slide_to(Group::Second, clock.now());
        clock.advance(Duration::from_millis(100));
        assert!((ind.translate_x(clock.now()) - 50.0).abs() < 0.01);
        clock.advance(Duration::from_millis(100));
        assert_eq!(ind.translate_x(clock.now()), 100.0);
        assert!(!ind.is_animating());

        ind.set_container_width(404.0, Group::Second);
        assert_eq!(ind.translate_x(clock.now()), 200.0);
    }
}
