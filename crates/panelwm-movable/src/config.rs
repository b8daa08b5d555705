#![forbid(unsafe_code)]

//! Per-instance configuration.

use crate::error::{MovableError, SizeAxis};
use crate::hit_test::DEFAULT_TITLE_RESERVED_COLS;
use crate::host::HostPanel;

/// Size limits and title-bar layout for one [`Movable`](crate::Movable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovableConfig {
    /// Smallest height a resize may produce (default: 2).
    pub min_height: i32,
    /// Smallest width a resize may produce (default: 2).
    pub min_width: i32,
    /// Columns at the right end of the top row that are not title bar
    /// (default: 2).
    pub title_reserved_cols: i32,
}

impl Default for MovableConfig {
    fn default() -> Self {
        Self {
            min_height: 2,
            min_width: 2,
            title_reserved_cols: DEFAULT_TITLE_RESERVED_COLS,
        }
    }
}

impl MovableConfig {
    /// Defaults with the minimums taken from the host type's constants,
    /// raised to one cell if the host declares less.
    #[must_use]
    pub fn for_host<H: HostPanel>() -> Self {
        Self {
            min_height: H::MIN_HEIGHT.max(1),
            min_width: H::MIN_WIDTH.max(1),
            ..Self::default()
        }
    }

    /// Set the minimum height.
    #[must_use]
    pub fn min_height(mut self, value: i32) -> Self {
        self.min_height = value;
        self
    }

    /// Set the minimum width.
    #[must_use]
    pub fn min_width(mut self, value: i32) -> Self {
        self.min_width = value;
        self
    }

    /// Set how many right-hand title columns are reserved.
    #[must_use]
    pub fn title_reserved_cols(mut self, value: i32) -> Self {
        self.title_reserved_cols = value;
        self
    }

    /// Reject minimums below one cell and a negative reserved strip.
    pub fn validate(&self) -> Result<(), MovableError> {
        if self.min_height < 1 {
            return Err(MovableError::InvalidMinimum {
                axis: SizeAxis::Height,
                value: self.min_height,
            });
        }
        if self.min_width < 1 {
            return Err(MovableError::InvalidMinimum {
                axis: SizeAxis::Width,
                value: self.min_width,
            });
        }
        if self.title_reserved_cols < 0 {
            return Err(MovableError::NegativeReservedCols {
                value: self.title_reserved_cols,
            });
        }
        Ok(())
    }
}
