#![forbid(unsafe_code)]

//! Drag-session state.
//!
//! ```text
//! Idle --press(corner)--> ResizingFromCorner --release--> Idle
//!      --press(title)---> Moving             --release--> Idle
//!      --press(edge)----> ResizingFromEdge   --release--> Idle
//! ```
//!
//! A press while a session is live replaces it outright.

use panelwm_core::PanelRect;

use crate::direction::{Corner, Edge};

/// What the current drag is doing, with the data captured at press time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "snake_case"))]
pub enum DragMode {
    #[default]
    Idle,
    /// Title-bar drag. The anchor is the panel-relative press position.
    Moving { anchor_line: i32, anchor_col: i32 },
    /// Corner drag. `origin` is the rectangle at press time.
    ResizingFromCorner { corner: Corner, origin: PanelRect },
    /// Edge drag. `origin` is the rectangle at press time.
    ResizingFromEdge { edge: Edge, origin: PanelRect },
}

impl DragMode {
    /// Summary of the mode without its payload, or `None` when idle.
    #[must_use]
    pub const fn kind(&self) -> Option<DragKind> {
        match *self {
            Self::Idle => None,
            Self::Moving { .. } => Some(DragKind::Move),
            Self::ResizingFromCorner { corner, .. } => Some(DragKind::Corner(corner)),
            Self::ResizingFromEdge { edge, .. } => Some(DragKind::Edge(edge)),
        }
    }
}

/// Payload-free description of a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DragKind {
    Move,
    Corner(Corner),
    Edge(Edge),
}

impl DragKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Corner(Corner::NorthWest) => "resize_nw",
            Self::Corner(Corner::NorthEast) => "resize_ne",
            Self::Corner(Corner::SouthWest) => "resize_sw",
            Self::Corner(Corner::SouthEast) => "resize_se",
            Self::Edge(Edge::North) => "resize_n",
            Self::Edge(Edge::East) => "resize_e",
            Self::Edge(Edge::South) => "resize_s",
            Self::Edge(Edge::West) => "resize_w",
        }
    }
}

/// The one live drag, owned by a [`Movable`](crate::Movable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragSession {
    mode: DragMode,
}

impl DragSession {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: DragMode::Idle,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> &DragMode {
        &self.mode
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self.mode, DragMode::Idle)
    }

    /// Enter `mode`, replacing any live session. Returns `true` if the
    /// session was idle before, i.e. input capture still has to be taken.
    pub fn begin(&mut self, mode: DragMode) -> bool {
        let was_idle = !self.is_active();
        self.mode = mode;
        was_idle
    }

    /// Return to idle, reporting the session that ended.
    pub fn end(&mut self) -> Option<DragKind> {
        std::mem::take(&mut self.mode).kind()
    }
}
