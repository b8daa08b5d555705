#![forbid(unsafe_code)]

//! The capability interface a panel exposes to [`Movable`](crate::Movable).

use panelwm_core::PanelRect;

/// A panel that owns a screen rectangle and can be asked to change it.
///
/// The two `before_*` methods are optional hooks. Their default
/// implementations return `None`, which lets the behavior proceed. Returning
/// `Some(claim)` short-circuits the behavior and hands `claim` back to the
/// caller of [`Movable::on_mouse`](crate::Movable::on_mouse) untouched.
///
/// # Example
///
/// ```
/// use panelwm_core::PanelRect;
/// use panelwm_movable::HostPanel;
///
/// struct Pane {
///     rect: PanelRect,
///     capture: bool,
/// }
///
/// impl HostPanel for Pane {
///     type Claim = &'static str;
///
///     fn rectangle(&self) -> Option<PanelRect> {
///         Some(self.rect)
///     }
///
///     fn change_geometry(&mut self, target: PanelRect) -> bool {
///         self.rect = target;
///         true
///     }
///
///     fn set_steal_input(&mut self, steal: bool) {
///         self.capture = steal;
///     }
///
///     fn before_mouse_press(&mut self, line: i32, col: i32) -> Option<Self::Claim> {
///         // The two rightmost title cells are a close button.
///         (line == 0 && col >= self.rect.cols - 2 && col < self.rect.cols - 1).then_some("close")
///     }
/// }
/// ```
pub trait HostPanel {
    /// Value a hook returns to claim an event.
    type Claim;

    /// Smallest height a resize may produce. Values below 1 are treated
    /// as 1.
    const MIN_HEIGHT: i32 = 2;

    /// Smallest width a resize may produce. Values below 1 are treated as 1.
    const MIN_WIDTH: i32 = 2;

    /// The panel's current rectangle, or `None` while it is unmapped.
    fn rectangle(&self) -> Option<PanelRect>;

    /// Apply a new rectangle. Returns `false` if the host refused it.
    fn change_geometry(&mut self, target: PanelRect) -> bool;

    /// Route all pointer input to this panel (`true`) or stop doing so.
    fn set_steal_input(&mut self, steal: bool);

    /// Called before a primary press is classified.
    fn before_mouse_press(&mut self, _line: i32, _col: i32) -> Option<Self::Claim> {
        None
    }

    /// Called before every geometry request reaches
    /// [`change_geometry`](HostPanel::change_geometry). Hosts use this to
    /// clamp the panel on-screen or to cascade the change to linked panels.
    fn before_change_geometry(&mut self, _target: PanelRect) -> Option<Self::Claim> {
        None
    }
}
