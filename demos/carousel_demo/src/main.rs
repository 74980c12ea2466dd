//! Replays a scripted session against a carousel and logs what the host
//! would be told to do.
//!
//! ```text
//! RUST_LOG=debug cargo run -p carousel_demo -- [config.json]
//! ```

use std::path::Path;

use anyhow::Context;
use reveal_carousel::*;
use reveal_core::{Clock, TestClock};
use web_time::Duration;

struct LogEngine;

impl HapticEngine for LogEngine {
    fn play(&mut self, kind: FeedbackKind) {
        log::info!("  haptic: {kind:?}");
    }
}

enum Step {
    DragStart,
    Scroll(f32),
    DragEnd,
    MomentumEnd,
    Wait(u64),
    PressPill(Edge),
    SelectGroup(Group),
}

fn load_config(path: Option<&str>) -> anyhow::Result<CarouselConfig> {
    let Some(path) = path else {
        return Ok(CarouselConfig::default());
    };
    let text = std::fs::read_to_string(Path::new(path))
        .with_context(|| format!("reading config {path}"))?;
    let cfg = serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?;
    Ok(cfg)
}

fn script(cfg: &CarouselConfig, max: f32) -> Vec<Step> {
    let past_switch = max + cfg.pill_width + cfg.overscroll_buffer + 10.0;
    let shown = max + cfg.pill_width + cfg.overscroll_buffer / 2.0;
    vec![
        Step::Wait(cfg.auto_advance_interval_ms),
        Step::DragStart,
        Step::Scroll(cfg.item_extent),
        Step::Scroll(max),
        Step::Scroll(shown),
        Step::DragEnd,
        Step::Scroll(max),
        Step::MomentumEnd,
        Step::DragStart,
        Step::Scroll(shown),
        Step::Scroll(past_switch),
        Step::DragEnd,
        Step::Wait(cfg.auto_advance_quiet_period_ms),
        Step::DragStart,
        Step::Scroll(-(cfg.pill_width + cfg.overscroll_buffer + 10.0)),
        Step::DragEnd,
        Step::PressPill(Edge::Right),
        Step::SelectGroup(Group::Second),
        Step::PressPill(Edge::Left),
    ]
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let arg = std::env::args().nth(1);
    let cfg = load_config(arg.as_deref())?;
    log::info!("config: {}", serde_json::to_string(&cfg)?);

    let clock = TestClock::new();
    let mut carousel = Carousel::new(cfg.clone(), clock.shared())?;
    carousel.set_viewport_extent(cfg.item_extent - cfg.item_spacing)?;
    carousel.set_tab_container_width(204.0);
    let mut haptics = Haptics::new(LogEngine);
    let offset = carousel.reader();

    for step in script(&cfg, carousel.max_scroll_offset()) {
        let (name, cmds) = match step {
            Step::DragStart => ("drag start".to_string(), carousel.on_drag_start()),
            Step::Scroll(o) => (format!("scroll {o}"), carousel.on_scroll(o)),
            Step::DragEnd => ("drag end".to_string(), carousel.on_drag_end()),
            Step::MomentumEnd => ("momentum end".to_string(), carousel.on_momentum_end()),
            Step::Wait(ms) => {
                clock.advance(Duration::from_millis(ms));
                (format!("wait {ms}ms"), carousel.on_timer_tick())
            }
            Step::PressPill(edge) => (format!("press {}", edge.label()), carousel.press_pill(edge)),
            Step::SelectGroup(g) => (format!("select {g:?}"), carousel.select_group(g)),
        };
        log::info!("{name}");
        for cmd in cmds {
            match cmd {
                Command::Feedback(kind) => {
                    haptics.fire(kind, clock.now());
                }
                other => log::info!("  {other:?}"),
            }
        }
        let right = carousel.edge_view(Edge::Right);
        let left = carousel.edge_view(Edge::Left);
        let active_dot = carousel
            .dots()
            .iter()
            .position(|d| d.width >= 32.0)
            .unwrap_or(0);
        let tab_x = carousel.tab_indicator_x();
        log::info!(
            "  group {:?} offset {} pills L{}/R{} dot {active_dot} tab x {tab_x:.1}",
            carousel.active_group(),
            offset.get(),
            left.visible,
            right.visible,
        );
        // Let animations settle between steps.
        clock.advance(Duration::from_millis(16));
    }

    carousel.unmount();
    log::info!("unmounted: {carousel:?}");
    Ok(())
}
