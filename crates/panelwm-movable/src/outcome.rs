#![forbid(unsafe_code)]

//! What happened to each event handed to [`Movable`](crate::Movable).

use panelwm_core::PanelRect;

use crate::session::DragKind;

/// Why an event was let through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// Press or drag without the primary button.
    SecondaryButton,
    /// Move, scroll, or any other kind the behavior does not act on.
    UnsupportedKind,
    /// Press or drag while the host had no rectangle.
    NoActiveWindow,
    /// Drag with no session, e.g. a drag that started on another panel.
    IdleWithoutSession,
}

/// Result of one geometry request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryOutcome<C> {
    /// The host applied the rectangle.
    Applied(PanelRect),
    /// The host's geometry primitive refused the rectangle.
    Refused(PanelRect),
    /// `before_change_geometry` claimed the request; nothing was applied.
    Intercepted(C),
    /// The candidate was smaller than the minimum and was dropped.
    BelowMinimum(PanelRect),
}

impl<C> GeometryOutcome<C> {
    /// Whether the host's rectangle was updated by this request.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Result of one pointer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MouseOutcome<C> {
    /// Not for us; the host should route the event elsewhere.
    Ignored(IgnoreReason),
    /// `before_mouse_press` claimed the press.
    Claimed(C),
    /// The press started a drag.
    Started(DragKind),
    /// The press landed on content. Swallowed so it never reaches whatever
    /// sits under the panel, but no drag starts.
    Absorbed,
    /// A drag tick issued a geometry request.
    Geometry(GeometryOutcome<C>),
    /// Release. Carries the drag that ended, if there was one.
    Released(Option<DragKind>),
}

impl<C> MouseOutcome<C> {
    /// Whether the event was handled by the panel.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored(_))
    }

    /// The applied rectangle, if this tick changed the host.
    #[must_use]
    pub fn applied_rect(&self) -> Option<PanelRect> {
        match self {
            Self::Geometry(GeometryOutcome::Applied(rect)) => Some(*rect),
            _ => None,
        }
    }
}
