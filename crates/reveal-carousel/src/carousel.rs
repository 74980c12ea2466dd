//! # Carousel
//!
//! `Carousel` wires the controllers together behind the host's event
//! callbacks. Every input returns the [`Command`]s the host must carry out;
//! visual state is pulled on demand (`edge_view`, `dots`, `tab_indicator_x`).
//!
//! ```rust
//! use reveal_carousel::*;
//! use reveal_core::TestClock;
//!
//! let clock = TestClock::new();
//! let cfg = CarouselConfig { item_count: 3, item_extent: 100.0, ..Default::default() };
//! let mut c = Carousel::new(cfg, clock.shared()).unwrap();
//!
//! c.on_drag_start();
//! c.on_scroll(200.0 + 50.0 + 25.0); // max offset 200, past pill + buffer
//! let cmds = c.on_drag_end();
//! assert!(cmds.contains(&Command::SwitchGroup(Group::Second)));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use reveal_core::{AnimationSpec, Result, Scope, SharedClock, TimerQueue};

use crate::{
    AutoAdvanceTimer, CarouselConfig, DotState, DotStates, DotStyle, Edge, EdgeIndicator,
    EdgeState, FeedbackKind, Group, OffsetReader, PaginationIndicator, ScrollOffsetTracker,
    TabIndicator, TabSwitchController, max_scroll_offset,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTarget {
    Index(usize),
    Offset(f32),
}

/// Something the host must do in response to an input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Play a haptic; safe to ignore where unsupported.
    Feedback(FeedbackKind),
    SwitchGroup(Group),
    ScrollTo(ScrollTarget),
}

pub type Commands = Vec<Command>;

/// What the host draws for one edge pill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeView {
    pub visible: bool,
    pub label: &'static str,
    pub opacity: f32,
    pub translate_x: f32,
}

pub struct Carousel {
    config: CarouselConfig,
    clock: SharedClock,
    scope: Scope,
    timers: TimerQueue,
    tracker: ScrollOffsetTracker,
    left: EdgeIndicator,
    right: EdgeIndicator,
    dots: PaginationIndicator,
    tabs: TabSwitchController,
    tab_indicator: TabIndicator,
    auto_advance: AutoAdvanceTimer,
    outbox: Rc<RefCell<Commands>>,
    viewport_extent: f32,
    dragging: bool,
}

impl Carousel {
    /// Mounts a carousel showing [`Group::First`]. The viewport defaults to a
    /// single card until the host reports its real width.
    pub fn new(config: CarouselConfig, clock: SharedClock) -> Result<Self> {
        config.validate()?;

        let viewport_extent = config.item_extent - config.item_spacing;
        let max = content_max(&config, viewport_extent);
        let left = EdgeIndicator::new(
            Edge::Left,
            config.pill_width,
            config.overscroll_buffer,
            max,
        )?;
        let right = EdgeIndicator::new(
            Edge::Right,
            config.pill_width,
            config.overscroll_buffer,
            max,
        )?;
        let dots = PaginationIndicator::new(
            DotStyle::default(),
            config.item_count,
            config.item_extent,
        )?;

        let scope = Scope::new();
        let timers = TimerQueue::new(clock.clone());
        let auto_advance = AutoAdvanceTimer::new(
            timers.clone(),
            config.auto_advance_interval(),
            config.auto_advance_quiet_period(),
        );
        scope.adopt(auto_advance.teardown());
        {
            let timers = timers.clone();
            scope.add_disposer(move || timers.clear());
        }

        let outbox: Rc<RefCell<Commands>> = Rc::new(RefCell::new(Vec::new()));
        if config.auto_advance_enabled() {
            let outbox = outbox.clone();
            auto_advance.start(config.item_count, move |i| {
                outbox
                    .borrow_mut()
                    .push(Command::ScrollTo(ScrollTarget::Index(i)));
            });
        }

        log::debug!(
            "carousel: mounted {} items x {} (auto-advance {})",
            config.item_count,
            config.item_extent,
            if config.auto_advance_enabled() { "on" } else { "off" }
        );

        Ok(Self {
            config,
            clock,
            scope,
            timers,
            tracker: ScrollOffsetTracker::new(),
            left,
            right,
            dots,
            tabs: TabSwitchController::default(),
            tab_indicator: TabIndicator::new(AnimationSpec::tab_slide()),
            auto_advance,
            outbox,
            viewport_extent,
            dragging: false,
        })
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn reader(&self) -> OffsetReader {
        self.tracker.reader()
    }

    pub fn offset(&self) -> f32 {
        self.tracker.current()
    }

    pub fn active_group(&self) -> Group {
        self.tabs.active()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_mounted(&self) -> bool {
        !self.scope.is_disposed()
    }

    pub fn max_scroll_offset(&self) -> f32 {
        content_max(&self.config, self.viewport_extent)
    }

    /// Host layout pass reporting the visible width of the list.
    pub fn set_viewport_extent(&mut self, extent: f32) -> Result<()> {
        if !extent.is_finite() || extent < 0.0 {
            log::warn!("carousel: ignoring viewport extent {extent}");
            return Ok(());
        }
        let max = content_max(&self.config, extent);
        self.left.set_max_scroll_offset(max)?;
        self.right.set_max_scroll_offset(max)?;
        self.viewport_extent = extent;
        Ok(())
    }

    pub fn set_tab_container_width(&mut self, width: f32) {
        self.tab_indicator
            .set_container_width(width, self.tabs.active());
    }

    pub fn on_scroll(&mut self, offset: f32) -> Commands {
        let mut out = Commands::new();
        if !self.is_mounted() || !self.tracker.update(offset) {
            return out;
        }
        let offset = self.tracker.current();
        if let Some(kind) = self.exit_edge_mut().on_offset(offset) {
            out.push(Command::Feedback(kind));
        }
        out
    }

    pub fn on_drag_start(&mut self) -> Commands {
        if !self.is_mounted() {
            return Commands::new();
        }
        self.dragging = true;
        self.left.reset();
        self.right.reset();
        self.auto_advance.stop();
        Commands::new()
    }

    pub fn on_drag_end(&mut self) -> Commands {
        let mut out = Commands::new();
        if !self.is_mounted() {
            return out;
        }
        if !self.dragging {
            log::warn!("carousel: drag end without drag start");
            return out;
        }
        self.dragging = false;

        if let Some(group) = self
            .tabs
            .on_drag_end(self.left.state(), self.right.state())
        {
            self.apply_switch(group, &mut out);
        }
        if self.config.auto_advance_enabled() {
            self.auto_advance.resume_after_quiet_period();
        }
        out
    }

    /// Scroll settled; keep auto-advance counting from where the user left off.
    pub fn on_momentum_end(&mut self) -> Commands {
        if self.is_mounted() {
            let index = self.dots.active_index(self.tracker.current());
            self.auto_advance.set_current_index(index);
        }
        Commands::new()
    }

    pub fn on_timer_tick(&mut self) -> Commands {
        if !self.is_mounted() {
            return Commands::new();
        }
        self.timers.run_due();
        std::mem::take(&mut *self.outbox.borrow_mut())
    }

    /// Pill tap: jump to the near end of the current group.
    pub fn press_pill(&mut self, edge: Edge) -> Commands {
        if !self.is_mounted() || edge != self.tabs.active().exit_edge() {
            return Commands::new();
        }
        let target = match edge {
            Edge::Right => self.max_scroll_offset(),
            Edge::Left => 0.0,
        };
        vec![
            Command::Feedback(FeedbackKind::ImpactLight),
            Command::ScrollTo(ScrollTarget::Offset(target)),
        ]
    }

    /// Tab label tap.
    pub fn select_group(&mut self, group: Group) -> Commands {
        let mut out = Commands::new();
        if !self.is_mounted() {
            return out;
        }
        if let Some(group) = self.tabs.select(group) {
            self.apply_switch(group, &mut out);
        }
        out
    }

    fn apply_switch(&mut self, group: Group, out: &mut Commands) {
        log::debug!("carousel: switching to {group:?}");
        self.tracker.reset();
        self.left.reset();
        self.right.reset();
        self.auto_advance.set_current_index(0);
        self.tab_indicator.slide_to(group, self.clock.now());
        out.push(Command::Feedback(FeedbackKind::ImpactLight));
        out.push(Command::SwitchGroup(group));
        out.push(Command::ScrollTo(ScrollTarget::Offset(0.0)));
    }

    fn exit_edge_mut(&mut self) -> &mut EdgeIndicator {
        match self.tabs.active().exit_edge() {
            Edge::Left => &mut self.left,
            Edge::Right => &mut self.right,
        }
    }

    fn edge(&self, edge: Edge) -> &EdgeIndicator {
        match edge {
            Edge::Left => &self.left,
            Edge::Right => &self.right,
        }
    }

    pub fn edge_state(&self, edge: Edge) -> EdgeState {
        self.edge(edge).state()
    }

    /// Pills only exist on the edge that leads to the other group.
    pub fn edge_view(&self, edge: Edge) -> EdgeView {
        let indicator = self.edge(edge);
        if edge != self.tabs.active().exit_edge() {
            return EdgeView {
                visible: false,
                label: edge.label(),
                opacity: 0.0,
                translate_x: 0.0,
            };
        }
        let style = indicator.pill_style(self.tracker.current());
        EdgeView {
            visible: indicator.is_visible(),
            label: edge.label(),
            opacity: style.opacity,
            translate_x: style.translate_x,
        }
    }

    pub fn dots(&self) -> DotStates {
        self.dots.states(self.tracker.current())
    }

    pub fn dot(&self, index: usize) -> Result<DotState> {
        self.dots.state_for(index, self.tracker.current())
    }

    pub fn tab_indicator_x(&mut self) -> f32 {
        self.tab_indicator.translate_x(self.clock.now())
    }

    pub fn auto_advance_index(&self) -> usize {
        self.auto_advance.current_index()
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance.is_running()
    }

    /// Tears the view down: timers are cancelled and later inputs are ignored.
    pub fn unmount(&mut self) {
        if self.is_mounted() {
            log::debug!("carousel: unmounted");
        }
        self.scope.dispose();
        self.outbox.borrow_mut().clear();
    }
}

fn content_max(config: &CarouselConfig, viewport_extent: f32) -> f32 {
    max_scroll_offset(
        config.item_count,
        config.item_extent,
        config.item_spacing,
        viewport_extent,
    )
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("active", &self.tabs.active())
            .field("offset", &self.tracker.current())
            .field("dragging", &self.dragging)
            .field("left", &self.left.state())
            .field("right", &self.right.state())
            .field("auto_advance", &self.auto_advance)
            .finish()
    }
}
