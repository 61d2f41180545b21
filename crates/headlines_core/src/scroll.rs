/// Fraction of the visible length from the list end at which more items are requested.
pub const END_REACHED_THRESHOLD: f32 = 0.5;

/// Visible window over the list, in item units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub first: usize,
    pub len: usize,
}

impl Viewport {
    pub fn end(&self) -> usize {
        self.first.saturating_add(self.len)
    }
}

/// True when the distance from the viewport end to the list end is within
/// `threshold` visible lengths.
pub fn end_reached(viewport: Viewport, item_count: usize, threshold: f32) -> bool {
    if item_count == 0 || viewport.len == 0 {
        return false;
    }
    let remaining = item_count.saturating_sub(viewport.end());
    remaining as f32 <= threshold * viewport.len as f32
}
