#![forbid(unsafe_code)]

//! Geometry planners for one drag tick.
//!
//! Each planner is a pure function from the drag state and the cursor's
//! panel-relative position to the candidate rectangle. None of them check
//! minimum sizes; [`Movable`](crate::Movable) gates the result.
//!
//! Resizes are computed against `origin`, the rectangle captured at press
//! time, never against the previous tick's rectangle. A tick dropped for
//! being too small therefore cannot skew later ticks.
//!
//! When a north or west side moves, the new size is measured from the moved
//! side to the origin's bottom or right *row/column index*
//! (`origin.bottom - new_top`), which is one less than the inclusive span.
//! South and east sides use `line + 1` / `col + 1`, so a north or west drag
//! shrinks the panel by one as soon as it starts.

use panelwm_core::PanelRect;

use crate::direction::{Corner, Edge};

/// Translate the *current* rectangle by the cursor's offset from the anchor.
///
/// The event coordinates are relative to the current rectangle, so once a
/// tick is applied the cursor is back at the anchor and deltas compound.
#[must_use]
pub fn plan_move(
    current: &PanelRect,
    anchor_line: i32,
    anchor_col: i32,
    line: i32,
    col: i32,
) -> PanelRect {
    current.translate(line.saturating_sub(anchor_line), col.saturating_sub(anchor_col))
}

/// Drag `corner` to `(line, col)`; the opposite corner stays put.
///
/// Equivalent to dragging the corner's row edge and then its column edge.
#[must_use]
pub fn plan_corner_resize(origin: &PanelRect, corner: Corner, line: i32, col: i32) -> PanelRect {
    let rows = plan_edge_resize(origin, corner.vertical_edge(), line, col);
    plan_edge_resize(&rows, corner.horizontal_edge(), line, col)
}

/// Drag `edge` to `(line, col)`; only the dimension across that edge changes.
///
/// All arithmetic saturates, so cursor coordinates far outside the screen
/// yield an oversized or collapsed candidate instead of overflowing.
#[must_use]
pub fn plan_edge_resize(origin: &PanelRect, edge: Edge, line: i32, col: i32) -> PanelRect {
    match edge {
        Edge::North => {
            let top = origin.top.saturating_add(line);
            PanelRect::new(
                top,
                origin.left,
                origin.bottom().saturating_sub(top),
                origin.cols,
            )
        }
        Edge::South => PanelRect::new(
            origin.top,
            origin.left,
            line.saturating_add(1),
            origin.cols,
        ),
        Edge::East => PanelRect::new(
            origin.top,
            origin.left,
            origin.lines,
            col.saturating_add(1),
        ),
        Edge::West => {
            let left = origin.left.saturating_add(col);
            PanelRect::new(
                origin.top,
                left,
                origin.lines,
                origin.right().saturating_sub(left),
            )
        }
    }
}
