use reveal_core::{Error, Result};
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Everything a host may tune on a carousel. Distances are in content units
/// (the same units as scroll offsets), times in milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// How far past the content edge the pill appears.
    pub pill_width: f32,
    /// Extra overscroll past the pill before a release switches groups.
    pub overscroll_buffer: f32,
    /// `0` disables auto-advance.
    pub auto_advance_interval_ms: u64,
    pub auto_advance_quiet_period_ms: u64,
    /// One item plus its trailing spacing; also the snap interval.
    pub item_extent: f32,
    /// Gap between neighbouring items, included in `item_extent`.
    pub item_spacing: f32,
    pub item_count: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            pill_width: 50.0,
            overscroll_buffer: 20.0,
            auto_advance_interval_ms: 5000,
            auto_advance_quiet_period_ms: 2000,
            item_extent: 288.0,
            item_spacing: 8.0,
            item_count: 5,
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.pill_width.is_finite() || self.pill_width < 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "pill_width must be finite and >= 0, got {}",
                self.pill_width
            )));
        }
        if !self.overscroll_buffer.is_finite() || self.overscroll_buffer < 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "overscroll_buffer must be finite and >= 0, got {}",
                self.overscroll_buffer
            )));
        }
        if !self.item_extent.is_finite() || self.item_extent <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "item_extent must be finite and > 0, got {}",
                self.item_extent
            )));
        }
        if !self.item_spacing.is_finite()
            || self.item_spacing < 0.0
            || self.item_spacing >= self.item_extent
        {
            return Err(Error::InvalidConfiguration(format!(
                "item_spacing must be finite, >= 0 and below item_extent, got {}",
                self.item_spacing
            )));
        }
        if self.item_count == 0 {
            return Err(Error::InvalidConfiguration(
                "item_count must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn auto_advance_interval(&self) -> Duration {
        Duration::from_millis(self.auto_advance_interval_ms)
    }

    pub fn auto_advance_quiet_period(&self) -> Duration {
        Duration::from_millis(self.auto_advance_quiet_period_ms)
    }

    pub fn auto_advance_enabled(&self) -> bool {
        self.auto_advance_interval_ms > 0
    }
}
