use reveal_core::{Error, Result};
use smallvec::SmallVec;

/// Look of the "growing active dot" indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotStyle {
    pub min_width: f32,
    pub max_width: f32,
    pub min_opacity: f32,
    /// Opacity lost per item of distance from the current position.
    pub opacity_falloff: f32,
    pub base_scale: f32,
    pub min_scale: f32,
    pub scale_falloff: f32,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            min_width: 8.0,
            max_width: 32.0,
            min_opacity: 0.3,
            opacity_falloff: 0.7,
            base_scale: 1.0,
            min_scale: 0.8,
            scale_falloff: 0.2,
        }
    }
}

impl DotStyle {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            self.min_width,
            self.max_width,
            self.min_opacity,
            self.opacity_falloff,
            self.base_scale,
            self.min_scale,
            self.scale_falloff,
        ];
        if fields.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(Error::InvalidConfiguration(format!(
                "dot style values must be finite and >= 0: {self:?}"
            )));
        }
        if self.min_width > self.max_width {
            return Err(Error::InvalidConfiguration(format!(
                "dot min_width {} exceeds max_width {}",
                self.min_width, self.max_width
            )));
        }
        if self.min_opacity <= 0.0 || self.min_scale <= 0.0 {
            return Err(Error::InvalidConfiguration(
                "dots must keep a positive opacity and scale floor".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotState {
    pub width: f32,
    pub opacity: f32,
    pub scale: f32,
}

pub type DotStates = SmallVec<[DotState; 8]>;

/// Pagination dots derived from the scroll offset alone.
#[derive(Clone, Debug)]
pub struct PaginationIndicator {
    style: DotStyle,
    item_count: usize,
    item_extent: f32,
}

impl PaginationIndicator {
    pub fn new(style: DotStyle, item_count: usize, item_extent: f32) -> Result<Self> {
        style.validate()?;
        if item_count == 0 {
            return Err(Error::InvalidConfiguration(
                "pagination needs at least one item".into(),
            ));
        }
        if !item_extent.is_finite() || item_extent <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "item_extent must be finite and > 0, got {item_extent}"
            )));
        }
        Ok(Self {
            style,
            item_count,
            item_extent,
        })
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Continuous item position, held inside the list during overscroll.
    pub fn position(&self, offset: f32) -> f32 {
        let last = (self.item_count - 1) as f32;
        if offset.is_nan() {
            return 0.0;
        }
        (offset / self.item_extent).clamp(0.0, last)
    }

    /// Item the offset is closest to.
    pub fn active_index(&self, offset: f32) -> usize {
        self.position(offset).round() as usize
    }

    pub fn state_for(&self, index: usize, offset: f32) -> Result<DotState> {
        if index >= self.item_count {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.item_count,
            });
        }
        Ok(self.compute(index, self.position(offset)))
    }

    pub fn states(&self, offset: f32) -> DotStates {
        let position = self.position(offset);
        (0..self.item_count)
            .map(|i| self.compute(i, position))
            .collect()
    }

    fn compute(&self, index: usize, position: f32) -> DotState {
        let s = &self.style;
        let floor = position.floor();
        let progress = position - floor;
        let current = floor as usize;
        let distance = (position - index as f32).abs();

        let span = s.max_width - s.min_width;
        let width = if index == current {
            s.max_width - span * progress
        } else if index == current + 1 {
            s.min_width + span * progress
        } else {
            s.min_width
        };

        DotState {
            width,
            opacity: (1.0 - distance * s.opacity_falloff).max(s.min_opacity),
            scale: (s.base_scale - distance * s.scale_falloff).max(s.min_scale),
        }
    }
}
