#![forbid(unsafe_code)]

//! Geometric primitives.

/// A panel rectangle in terminal cells.
///
/// Coordinates are 0-indexed with the origin at the top-left of the screen.
/// They are signed because a drag can push a panel partially off-screen;
/// clamping is the host's business, not the rectangle's.
///
/// `bottom()` and `right()` are *inclusive*, so for any rectangle
/// `lines == bottom - top + 1` and `cols == right - left + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelRect {
    /// Top row (inclusive).
    pub top: i32,
    /// Left column (inclusive).
    pub left: i32,
    /// Height in rows.
    pub lines: i32,
    /// Width in columns.
    pub cols: i32,
}

impl PanelRect {
    /// Create a new rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(top: i32, left: i32, lines: i32, cols: i32) -> Self {
        Self {
            top,
            left,
            lines,
            cols,
        }
    }

    /// Create a rectangle from inclusive corner coordinates.
    #[inline]
    pub const fn from_corners(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self::new(
            top,
            left,
            bottom.saturating_sub(top).saturating_add(1),
            right.saturating_sub(left).saturating_add(1),
        )
    }

    /// Bottom row (inclusive). Saturates at the `i32` bounds.
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.top.saturating_add(self.lines).saturating_sub(1)
    }

    /// Right column (inclusive). Saturates at the `i32` bounds.
    #[inline]
    pub const fn right(&self) -> i32 {
        self.left.saturating_add(self.cols).saturating_sub(1)
    }

    /// Area in cells. Degenerate rectangles report zero.
    #[inline]
    pub const fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.lines as i64 * self.cols as i64
        }
    }

    /// Check if the rectangle has no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.lines <= 0 || self.cols <= 0
    }

    /// Check if an absolute screen cell lies inside the rectangle.
    #[inline]
    pub const fn contains(&self, line: i32, col: i32) -> bool {
        line >= self.top && line <= self.bottom() && col >= self.left && col <= self.right()
    }

    /// Convert an absolute screen cell into coordinates relative to this
    /// rectangle's top-left corner.
    #[inline]
    pub const fn relative(&self, line: i32, col: i32) -> (i32, i32) {
        (line.saturating_sub(self.top), col.saturating_sub(self.left))
    }

    /// Same size, shifted by the given deltas.
    #[inline]
    #[must_use]
    pub const fn translate(&self, d_lines: i32, d_cols: i32) -> Self {
        Self::new(
            self.top.saturating_add(d_lines),
            self.left.saturating_add(d_cols),
            self.lines,
            self.cols,
        )
    }

    /// Whether the rectangle is at least `min_lines` tall and `min_cols` wide.
    #[inline]
    pub const fn fits_minimum(&self, min_lines: i32, min_cols: i32) -> bool {
        self.lines >= min_lines && self.cols >= min_cols
    }
}
