//! Pass width measurement.
//!
//! Item sizes are intrinsic (image aspect ratios), so the width of one pass
//! over the item list is only known after the host has laid the track out.
//! Hosts report what they measured as a [`Layout`]; this module turns it
//! into [`PassMetrics`] or explains why it can't yet.

use crate::error::MeasureError;

/// What the host measured after a layout pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Layout {
    /// Rendered width of each item in one pass, in item order, plus the gap
    /// the host puts after every item.
    Items {
        widths: Vec<f64>,
        gap: f64,
        viewport_width: f64,
    },
    /// Only the total rendered width of the whole track is known (for
    /// example a native scroll width). Items are assumed equally wide.
    Track { width: f64, viewport_width: f64 },
}

impl Layout {
    /// Equal-width cards, the common case for fixed-width poster strips.
    pub fn uniform(
        count: usize,
        item_width: f64,
        gap: f64,
        viewport_width: f64,
    ) -> Self {
        Layout::Items {
            widths: vec![item_width; count],
            gap,
            viewport_width,
        }
    }

    pub fn viewport_width(&self) -> f64 {
        match self {
            Layout::Items { viewport_width, .. }
            | Layout::Track { viewport_width, .. } => *viewport_width,
        }
    }
}

/// Geometry of one pass over the item list.
#[derive(Debug, Clone, PartialEq)]
pub struct PassMetrics {
    /// Left edge of each item within the pass.
    starts: Vec<f64>,
    widths: Vec<f64>,
    pass_width: f64,
}

impl PassMetrics {
    /// Measure a layout report for `item_count` mounted items laid out
    /// `repeat_factor` times.
    pub fn measure(
        layout: &Layout,
        item_count: usize,
        repeat_factor: usize,
    ) -> Result<Self, MeasureError> {
        if item_count == 0 || repeat_factor == 0 {
            return Err(MeasureError::NothingMounted);
        }
        match layout {
            Layout::Items { widths, gap, .. } => {
                if widths.len() != item_count {
                    return Err(MeasureError::ItemCountMismatch {
                        expected: item_count,
                        measured: widths.len(),
                    });
                }
                Self::from_item_widths(widths, *gap)
            }
            Layout::Track { width, .. } => {
                check_width(*width)?;
                let stride = width / (repeat_factor * item_count) as f64;
                Self::from_item_widths(&vec![stride; item_count], 0.0)
            }
        }
    }

    fn from_item_widths(
        widths: &[f64],
        gap: f64,
    ) -> Result<Self, MeasureError> {
        check_width(gap)?;
        let mut starts = Vec::with_capacity(widths.len());
        let mut cursor = 0.0;
        for &width in widths {
            check_width(width)?;
            starts.push(cursor);
            cursor += width + gap;
        }
        if cursor <= 0.0 {
            return Err(MeasureError::ZeroWidth);
        }
        Ok(Self {
            starts,
            widths: widths.to_vec(),
            pass_width: cursor,
        })
    }

    pub fn pass_width(&self) -> f64 {
        self.pass_width
    }

    pub fn item_count(&self) -> usize {
        self.widths.len()
    }

    /// Index of the item drawn at `offset` px into a pass (any offset is
    /// folded into one pass first). `None` when the offset falls in a gap.
    pub fn item_at(&self, offset: f64) -> Option<usize> {
        let offset = super::state::wrap_position(offset, self.pass_width);
        // Last item whose start is at or before the offset.
        let idx = self.starts.partition_point(|&start| start <= offset);
        let idx = idx.checked_sub(1)?;
        (offset < self.starts[idx] + self.widths[idx]).then_some(idx)
    }
}

fn check_width(width: f64) -> Result<(), MeasureError> {
    if width.is_finite() && width >= 0.0 {
        Ok(())
    } else {
        Err(MeasureError::InvalidWidth(width))
    }
}
