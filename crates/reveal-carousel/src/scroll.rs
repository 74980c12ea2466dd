use reveal_core::{ReadSignal, Signal, signal};

/// Sole owner of the carousel's horizontal offset.
///
/// The scroll event source writes through [`ScrollOffsetTracker::update`];
/// everything else samples an [`OffsetReader`], which has no way to write the
/// value back.
#[derive(Debug)]
pub struct ScrollOffsetTracker {
    offset: Signal<f32>,
}

#[derive(Clone, Debug)]
pub struct OffsetReader(ReadSignal<f32>);

impl OffsetReader {
    pub fn get(&self) -> f32 {
        self.0.get()
    }
}

impl Default for ScrollOffsetTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollOffsetTracker {
    pub fn new() -> Self {
        Self { offset: signal(0.0) }
    }

    /// Stores `offset`; non-finite values are dropped. Returns whether the
    /// value was accepted.
    pub fn update(&self, offset: f32) -> bool {
        if !offset.is_finite() {
            log::debug!("scroll: ignoring non-finite offset {offset}");
            return false;
        }
        log::trace!("scroll: offset {offset}");
        self.offset.set(offset);
        true
    }

    pub fn current(&self) -> f32 {
        self.offset.get()
    }

    pub fn reset(&self) {
        self.offset.set(0.0);
    }

    pub fn reader(&self) -> OffsetReader {
        OffsetReader(self.offset.read_only())
    }
}

/// Furthest a list can rest without overscrolling.
///
/// `item_extent` is one item plus the gap after it; the last item has no gap,
/// so `item_spacing` is taken off the content width once.
pub fn max_scroll_offset(
    item_count: usize,
    item_extent: f32,
    item_spacing: f32,
    viewport_extent: f32,
) -> f32 {
    if item_count == 0 {
        return 0.0;
    }
    let content = item_count as f32 * item_extent - item_spacing;
    (content - viewport_extent).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_zero() {
        assert_eq!(ScrollOffsetTracker::new().current(), 0.0);
    }

    #[test]
    fn test_ignores_non_finite() {
        let t = ScrollOffsetTracker::new();
        assert!(t.update(-35.5));
        assert!(!t.update(f32::NAN));
        assert!(!t.update(f32::INFINITY));
        assert_eq!(t.current(), -35.5);
    }

    #[test]
    fn test_reader_follows_writer() {
        let t = ScrollOffsetTracker::new();
        let r = t.reader();
        t.update(120.0);
        assert_eq!(r.get(), 120.0);
        t.reset();
        assert_eq!(r.get(), 0.0);
    }

    #[test]
    fn test_max_scroll_offset() {
        assert_eq!(max_scroll_offset(5, 100.0, 0.0, 250.0), 250.0);
        assert_eq!(max_scroll_offset(2, 100.0, 0.0, 400.0), 0.0);
        assert_eq!(max_scroll_offset(0, 100.0, 8.0, 0.0), 0.0);
    }

    #[test]
    fn test_max_scroll_offset_drops_trailing_gap() {
        // 3 cards of 92 with 8 between them: 3 * 100 - 8 = 292 of content.
        assert_eq!(max_scroll_offset(3, 100.0, 8.0, 200.0), 92.0);
    }
}
