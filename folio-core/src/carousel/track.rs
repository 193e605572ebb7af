//! Slot layout of the repeated item list.

/// The item list laid out `repeat_factor` times end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    item_count: usize,
    repeat_factor: usize,
}

impl Track {
    pub fn new(item_count: usize, repeat_factor: usize) -> Self {
        Self {
            item_count,
            repeat_factor,
        }
    }

    /// Number of rendered slots.
    pub fn len(&self) -> usize {
        self.item_count * self.repeat_factor
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(copy, item_index)` for an absolute slot index.
    pub fn slot(&self, slot: usize) -> Option<(usize, usize)> {
        (slot < self.len())
            .then(|| (slot / self.item_count, slot % self.item_count))
    }

    /// Whether every viewport column is backed by an item pixel at any
    /// position in `[0, pass_width)`: the track must extend one full
    /// viewport beyond the last lap start.
    pub fn covers_viewport(
        &self,
        pass_width: f64,
        viewport_width: f64,
    ) -> bool {
        self.repeat_factor as f64 * pass_width >= pass_width + viewport_width
    }
}
