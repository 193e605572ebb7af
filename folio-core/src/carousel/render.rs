//! Render output handed back to the host.

use std::fmt::{self, Display};

/// Stable key for a rendered slot: the item's own key plus the absolute slot
/// index, so duplicated copies of an item never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellKey<K> {
    pub item: K,
    pub copy: usize,
    pub slot: usize,
}

impl<K: Display> Display for CellKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.item, self.slot)
    }
}

/// One slot of the track.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<K, V> {
    Rendered { key: CellKey<K>, view: V },
    /// The item's renderer failed. The slot keeps its place on the track so
    /// the pass width is unaffected; the host draws an empty cell.
    Fallback { key: CellKey<K> },
}

impl<K, V> Cell<K, V> {
    pub fn key(&self) -> &CellKey<K> {
        match self {
            Cell::Rendered { key, .. } | Cell::Fallback { key } => key,
        }
    }

    pub fn view(&self) -> Option<&V> {
        match self {
            Cell::Rendered { view, .. } => Some(view),
            Cell::Fallback { .. } => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Cell::Fallback { .. })
    }
}

/// Everything the host needs to draw the carousel for the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackView<K, V> {
    /// Horizontal translation to apply to the whole track (`-position`).
    pub translate_x: f64,
    pub cells: Vec<Cell<K, V>>,
}

impl<K, V> TrackView<K, V> {
    /// Nothing to draw (no items, or not mounted).
    pub fn empty() -> Self {
        Self {
            translate_x: 0.0,
            cells: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn fallback_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_fallback()).count()
    }
}
