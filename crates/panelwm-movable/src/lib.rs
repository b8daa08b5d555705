#![forbid(unsafe_code)]

//! Window-manager style move and resize for character-cell panels.
//!
//! # Role in panelwm
//! `panelwm-movable` is a behavior, not a widget. It renders nothing and owns
//! no rectangle. A host panel implements [`HostPanel`], wraps itself in a
//! [`Movable`], and forwards its pointer events; the behavior decides what
//! rectangle the panel should have and asks the host to apply it.
//!
//! # Interaction model
//! - Primary press on a corner: resize from that corner, opposite corner fixed.
//! - Primary press on the title bar: move.
//! - Primary press on an edge: resize that edge only.
//! - Primary press elsewhere: absorbed, nothing starts.
//! - Drag: recompute the rectangle; resizes below the minimum are dropped.
//! - Release (any button): end the drag and release input capture.
//!
//! # Example
//!
//! ```
//! use panelwm_core::{MouseEvent, PanelRect};
//! use panelwm_movable::{HostPanel, Movable, MouseOutcome};
//!
//! struct Pane(PanelRect);
//!
//! impl HostPanel for Pane {
//!     type Claim = ();
//!     fn rectangle(&self) -> Option<PanelRect> { Some(self.0) }
//!     fn change_geometry(&mut self, target: PanelRect) -> bool { self.0 = target; true }
//!     fn set_steal_input(&mut self, _steal: bool) {}
//! }
//!
//! let mut pane = Movable::new(Pane(PanelRect::from_corners(0, 0, 9, 9)));
//! pane.on_mouse(&MouseEvent::press(9, 9))?;
//! let out = pane.on_mouse(&MouseEvent::drag(14, 14))?;
//! assert_eq!(out.applied_rect(), Some(PanelRect::new(0, 0, 15, 15)));
//! pane.on_mouse(&MouseEvent::release(14, 14))?;
//! # Ok::<(), panelwm_movable::MovableError>(())
//! ```

pub mod config;
pub mod direction;
pub mod error;
pub mod host;
pub mod movable;
pub mod outcome;
pub mod resize;
pub mod session;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use config::MovableConfig;
pub use direction::{Corner, Edge};
pub use error::{MovableError, SizeAxis};
pub use hit_test::PressTarget;
pub use host::HostPanel;
pub use movable::Movable;
pub use outcome::{GeometryOutcome, IgnoreReason, MouseOutcome};
pub use session::{DragKind, DragMode, DragSession};
