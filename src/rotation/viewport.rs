//! Responsive "items per view" policy.

/// Width thresholds, in viewport units, for the responsive breakpoint table.
///
/// `width < narrow` shows 1 item, `width < wide` shows 2, anything wider
/// shows 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    /// Upper bound (exclusive) of the single-item range.
    pub narrow: u32,
    /// Upper bound (exclusive) of the two-item range.
    pub wide: u32,
}

impl Breakpoints {
    /// Look up how many items fit at the given viewport width.
    pub fn items_per_view(&self, width: u32) -> usize {
        if width < self.narrow {
            1
        } else if width < self.wide {
            2
        } else {
            3
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            narrow: 768,
            wide: 1024,
        }
    }
}

/// How a surface decides its `items_per_view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPolicy {
    /// Always show this many items. Zero is treated as one.
    Fixed(usize),
    /// Follow the breakpoint table.
    Responsive(Breakpoints),
}

impl ViewPolicy {
    /// Resolve the policy for a viewport width. Never returns zero.
    pub fn items_per_view(&self, width: u32) -> usize {
        match self {
            ViewPolicy::Fixed(n) => (*n).max(1),
            ViewPolicy::Responsive(bp) => bp.items_per_view(width),
        }
    }
}

/// Convert terminal columns to viewport units.
///
/// `cell_width` is how many viewport units one column stands for, so the
/// breakpoint table keeps its familiar pixel values (768/1024) on a
/// terminal: with the default of 8, 96 columns is the first breakpoint.
pub fn viewport_width(columns: u16, cell_width: u16) -> u32 {
    u32::from(columns) * u32::from(cell_width.max(1))
}
