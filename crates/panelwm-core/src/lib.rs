#![forbid(unsafe_code)]

//! Core: panel geometry, pointer events, and the logging facade.
//!
//! # Role in panelwm
//! `panelwm-core` holds the value types shared between a host panel and the
//! behaviors attached to it. It knows nothing about rendering or about how a
//! host stores its rectangle; it only describes rectangles and the pointer
//! events addressed to them.
//!
//! # Primary responsibilities
//! - **PanelRect**: signed cell rectangle with inclusive bottom/right edges.
//! - **MouseEvent**: panel-relative pointer events with a button bitmask.
//! - **logging**: `tracing` re-exports, or no-op shims when the feature is off.

pub mod event;
pub mod geometry;
pub mod logging;

pub use event::{Modifiers, MouseButtons, MouseEvent, MouseEventKind};
pub use geometry::PanelRect;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
