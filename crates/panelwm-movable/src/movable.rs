#![forbid(unsafe_code)]

//! The move/resize state machine.

use panelwm_core::{MouseEvent, MouseEventKind, PanelRect};
use panelwm_core::{debug, debug_span, trace};

use crate::config::MovableConfig;
use crate::direction::{Corner, Edge};
use crate::error::MovableError;
use crate::hit_test::{PressTarget, classify};
use crate::host::HostPanel;
use crate::outcome::{GeometryOutcome, IgnoreReason, MouseOutcome};
use crate::resize::{plan_corner_resize, plan_edge_resize, plan_move};
use crate::session::{DragKind, DragMode, DragSession};

/// Window-manager style move and resize for a host panel.
///
/// Forward every pointer event addressed to the panel into
/// [`on_mouse`](Self::on_mouse). A primary press on a corner or edge starts a
/// resize, a press on the title bar starts a move, and the matching release
/// ends it. While a drag is live the host is asked to steal input so the
/// drag keeps arriving after the cursor leaves the panel.
///
/// Hit-testing uses the host's live rectangle; resize math uses the
/// rectangle captured at press time.
#[derive(Debug)]
pub struct Movable<H: HostPanel> {
    host: H,
    session: DragSession,
    config: MovableConfig,
}

impl<H: HostPanel> Movable<H> {
    /// Wrap `host` with minimums taken from its type constants. Constants
    /// below one cell are raised to one.
    pub fn new(host: H) -> Self {
        Self {
            host,
            session: DragSession::new(),
            config: MovableConfig::for_host::<H>(),
        }
    }

    /// Wrap `host` with an explicit configuration.
    pub fn with_config(host: H, config: MovableConfig) -> Result<Self, MovableError> {
        config.validate()?;
        Ok(Self {
            host,
            session: DragSession::new(),
            config,
        })
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Unwrap the host, dropping any live session without touching input
    /// capture.
    #[must_use]
    pub fn into_inner(self) -> H {
        self.host
    }

    #[must_use]
    pub fn config(&self) -> &MovableConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> &DragMode {
        self.session.mode()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_active()
    }

    /// Handle one pointer event.
    ///
    /// Release is always processed, whatever the buttons. Press and drag
    /// are processed only with the primary button; other kinds are ignored.
    ///
    /// # Errors
    ///
    /// [`MovableError::NoActiveWindow`] if a release arrives while the host
    /// has no rectangle.
    pub fn on_mouse(&mut self, event: &MouseEvent) -> Result<MouseOutcome<H::Claim>, MovableError> {
        let _span = debug_span!(
            "movable.on_mouse",
            kind = ?event.kind,
            buttons = event.buttons.bits(),
            line = event.line,
            col = event.col
        )
        .entered();

        match event.kind {
            MouseEventKind::Release => self.mouse_release(event.line, event.col),
            MouseEventKind::Press | MouseEventKind::Drag if !event.is_primary() => {
                Ok(MouseOutcome::Ignored(IgnoreReason::SecondaryButton))
            }
            MouseEventKind::Press => Ok(self.mouse_press(event.line, event.col)),
            MouseEventKind::Drag => Ok(self.mouse_drag(event.line, event.col)),
            _ => Ok(MouseOutcome::Ignored(IgnoreReason::UnsupportedKind)),
        }
    }

    /// Classify a primary press and start the matching drag.
    ///
    /// Presses that hit no chrome are still consumed
    /// ([`MouseOutcome::Absorbed`]) and leave any live session alone.
    pub fn mouse_press(&mut self, line: i32, col: i32) -> MouseOutcome<H::Claim> {
        let Some(rect) = self.host.rectangle() else {
            return MouseOutcome::Ignored(IgnoreReason::NoActiveWindow);
        };
        if let Some(claim) = self.host.before_mouse_press(line, col) {
            debug!(line, col, "press claimed by host");
            return MouseOutcome::Claimed(claim);
        }

        match classify(line, col, &rect, self.config.title_reserved_cols) {
            PressTarget::Corner(corner) => self.start_resize_from_corner(corner, rect),
            PressTarget::Title => self.start_moving(line, col),
            PressTarget::Edge(edge) => self.start_resize_from_edge(edge, rect),
            PressTarget::Content => MouseOutcome::Absorbed,
        }
    }

    /// Advance the live drag to `(line, col)`.
    pub fn mouse_drag(&mut self, line: i32, col: i32) -> MouseOutcome<H::Claim> {
        let candidate = match *self.session.mode() {
            DragMode::Idle => return MouseOutcome::Ignored(IgnoreReason::IdleWithoutSession),
            DragMode::Moving {
                anchor_line,
                anchor_col,
            } => {
                let Some(current) = self.host.rectangle() else {
                    return MouseOutcome::Ignored(IgnoreReason::NoActiveWindow);
                };
                let target = plan_move(&current, anchor_line, anchor_col, line, col);
                trace!(top = target.top, left = target.left, "move tick");
                return MouseOutcome::Geometry(self.request_geometry(target));
            }
            DragMode::ResizingFromCorner { corner, origin } => {
                plan_corner_resize(&origin, corner, line, col)
            }
            DragMode::ResizingFromEdge { edge, origin } => {
                plan_edge_resize(&origin, edge, line, col)
            }
        };
        MouseOutcome::Geometry(self.request_resize(candidate))
    }

    /// End the live drag, if any, and release input capture.
    ///
    /// Safe to call with no session. The host must still have a rectangle.
    ///
    /// # Errors
    ///
    /// [`MovableError::NoActiveWindow`] if the host has no rectangle. The
    /// session and input capture are left as they were; use
    /// [`cancel_drag`](Self::cancel_drag) to tear them down regardless.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn mouse_release(
        &mut self,
        line: i32,
        col: i32,
    ) -> Result<MouseOutcome<H::Claim>, MovableError> {
        if self.host.rectangle().is_none() {
            return Err(MovableError::NoActiveWindow);
        }
        self.host.set_steal_input(false);
        let ended = self.session.end();
        if let Some(kind) = ended {
            debug!(kind = kind.as_str(), line, col, "drag session ended");
        }
        Ok(MouseOutcome::Released(ended))
    }

    /// Abandon the live drag without a release event, e.g. on focus loss.
    ///
    /// Returns the drag that was cancelled. Does nothing and returns `None`
    /// when idle. Needs no host rectangle.
    pub fn cancel_drag(&mut self) -> Option<DragKind> {
        let kind = self.session.end()?;
        self.host.set_steal_input(false);
        debug!(kind = kind.as_str(), "drag session cancelled");
        Some(kind)
    }

    /// Ask the host to take a new rectangle.
    ///
    /// `before_change_geometry` sees the request first and may claim it;
    /// otherwise it goes to the host verbatim. Minimum sizes are not checked
    /// here.
    pub fn change_geometry(
        &mut self,
        top: i32,
        left: i32,
        lines: i32,
        cols: i32,
    ) -> GeometryOutcome<H::Claim> {
        self.request_geometry(PanelRect::new(top, left, lines, cols))
    }

    fn start_moving(&mut self, line: i32, col: i32) -> MouseOutcome<H::Claim> {
        self.start(
            DragMode::Moving {
                anchor_line: line,
                anchor_col: col,
            },
            DragKind::Move,
        )
    }

    fn start_resize_from_corner(
        &mut self,
        corner: Corner,
        origin: PanelRect,
    ) -> MouseOutcome<H::Claim> {
        self.start(
            DragMode::ResizingFromCorner { corner, origin },
            DragKind::Corner(corner),
        )
    }

    fn start_resize_from_edge(&mut self, edge: Edge, origin: PanelRect) -> MouseOutcome<H::Claim> {
        self.start(
            DragMode::ResizingFromEdge { edge, origin },
            DragKind::Edge(edge),
        )
    }

    fn start(&mut self, mode: DragMode, kind: DragKind) -> MouseOutcome<H::Claim> {
        // Capture is already held when a press replaces a live session.
        if self.session.begin(mode) {
            self.host.set_steal_input(true);
        }
        debug!(kind = kind.as_str(), "drag session started");
        MouseOutcome::Started(kind)
    }

    fn request_resize(&mut self, candidate: PanelRect) -> GeometryOutcome<H::Claim> {
        if !candidate.fits_minimum(self.config.min_height, self.config.min_width) {
            debug!(
                lines = candidate.lines,
                cols = candidate.cols,
                min_height = self.config.min_height,
                min_width = self.config.min_width,
                "resize below minimum dropped"
            );
            return GeometryOutcome::BelowMinimum(candidate);
        }
        trace!(
            top = candidate.top,
            left = candidate.left,
            lines = candidate.lines,
            cols = candidate.cols,
            "resize tick"
        );
        self.request_geometry(candidate)
    }

    fn request_geometry(&mut self, target: PanelRect) -> GeometryOutcome<H::Claim> {
        if let Some(claim) = self.host.before_change_geometry(target) {
            return GeometryOutcome::Intercepted(claim);
        }
        if self.host.change_geometry(target) {
            GeometryOutcome::Applied(target)
        } else {
            GeometryOutcome::Refused(target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelwm_core::MouseButtons;

    /// Minimal host: applies every request, records capture toggles.
    #[derive(Debug, Default)]
    struct Pane {
        rect: Option<PanelRect>,
        steal: Vec<bool>,
        claim_press: bool,
    }

    impl Pane {
        fn at(rect: PanelRect) -> Self {
            Self {
                rect: Some(rect),
                ..Self::default()
            }
        }
    }

    impl HostPanel for Pane {
        type Claim = &'static str;

        fn rectangle(&self) -> Option<PanelRect> {
            self.rect
        }

        fn change_geometry(&mut self, target: PanelRect) -> bool {
            self.rect = Some(target);
            true
        }

        fn set_steal_input(&mut self, steal: bool) {
            self.steal.push(steal);
        }

        fn before_mouse_press(&mut self, _line: i32, _col: i32) -> Option<Self::Claim> {
            self.claim_press.then_some("claimed")
        }
    }

    /// Host declaring a zero minimum height.
    #[derive(Debug, Default)]
    struct Sliver(Pane);

    impl HostPanel for Sliver {
        type Claim = &'static str;
        const MIN_HEIGHT: i32 = 0;

        fn rectangle(&self) -> Option<PanelRect> {
            self.0.rectangle()
        }

        fn change_geometry(&mut self, target: PanelRect) -> bool {
            self.0.change_geometry(target)
        }

        fn set_steal_input(&mut self, steal: bool) {
            self.0.set_steal_input(steal);
        }
    }

    fn movable(rect: PanelRect) -> Movable<Pane> {
        Movable::new(Pane::at(rect))
    }

    #[test]
    fn corner_press_starts_corner_resize() {
        let mut m = movable(PanelRect::new(0, 0, 10, 10));
        let out = m.on_mouse(&MouseEvent::press(0, 0)).unwrap();
        assert_eq!(out, MouseOutcome::Started(DragKind::Corner(Corner::NorthWest)));
        assert!(m.is_dragging());
        assert_eq!(m.host().steal, vec![true]);
    }

    #[test]
    fn title_press_starts_move() {
        let mut m = movable(PanelRect::new(0, 0, 10, 10));
        let out = m.on_mouse(&MouseEvent::press(0, 4)).unwrap();
        assert_eq!(out, MouseOutcome::Started(DragKind::Move));
        assert_eq!(
            m.mode(),
            &DragMode::Moving {
                anchor_line: 0,
                anchor_col: 4
            }
        );
    }

    #[test]
    fn content_press_is_absorbed() {
        let mut m = movable(PanelRect::new(0, 0, 10, 10));
        let out = m.on_mouse(&MouseEvent::press(4, 4)).unwrap();
        assert_eq!(out, MouseOutcome::Absorbed);
        assert!(out.is_consumed());
        assert!(!m.is_dragging());
        assert!(m.host().steal.is_empty());
    }

    #[test]
    fn press_without_window_is_ignored() {
        let mut m = Movable::new(Pane::default());
        let out = m.on_mouse(&MouseEvent::press(0, 0)).unwrap();
        assert_eq!(out, MouseOutcome::Ignored(IgnoreReason::NoActiveWindow));
        assert!(!out.is_consumed());
    }

    #[test]
    fn press_hook_short_circuits() {
        let mut pane = Pane::at(PanelRect::new(0, 0, 10, 10));
        pane.claim_press = true;
        let mut m = Movable::new(pane);
        let out = m.on_mouse(&MouseEvent::press(0, 0)).unwrap();
        assert_eq!(out, MouseOutcome::Claimed("claimed"));
        assert!(!m.is_dragging());
    }

    #[test]
    fn secondary_press_and_drag_are_ignored() {
        let mut m = movable(PanelRect::new(0, 0, 10, 10));
        let press = MouseEvent::press(0, 4).with_buttons(MouseButtons::SECONDARY);
        assert_eq!(
            m.on_mouse(&press).unwrap(),
            MouseOutcome::Ignored(IgnoreReason::SecondaryButton)
        );
        m.on_mouse(&MouseEvent::press(0, 4)).unwrap();
        let drag = MouseEvent::drag(3, 7).with_buttons(MouseButtons::SECONDARY);
        assert_eq!(
            m.on_mouse(&drag).unwrap(),
            MouseOutcome::Ignored(IgnoreReason::SecondaryButton)
        );
        assert_eq!(m.host().rect, Some(PanelRect::new(0, 0, 10, 10)));
    }

    #[test]
    fn unsupported_kinds_are_ignored() {
        let mut m = movable(PanelRect::new(0, 0, 10, 10));
        let ev = MouseEvent::new(MouseEventKind::ScrollUp, MouseButtons::NONE, 0, 4);
        assert_eq!(
            m.on_mouse(&ev).unwrap(),
            MouseOutcome::Ignored(IgnoreReason::UnsupportedKind)
        );
    }

    #[test]
    fn drag_without_session_is_noop() {
        let mut m = movable(PanelRect::new(0, 0, 10, 10));
        assert_eq!(
            m.on_mouse(&MouseEvent::drag(3, 3)).unwrap(),
            MouseOutcome::Ignored(IgnoreReason::IdleWithoutSession)
        );
    }

    #[test]
    fn release_with_secondary_button_still_ends_session() {
        let mut m = movable(PanelRect::new(0, 0, 10, 10));
        m.on_mouse(&MouseEvent::press(0, 4)).unwrap();
        let release = MouseEvent::release(0, 4).with_buttons(MouseButtons::SECONDARY);
        assert_eq!(
            m.on_mouse(&release).unwrap(),
            MouseOutcome::Released(Some(DragKind::Move))
        );
        assert_eq!(m.host().steal, vec![true, false]);
    }

    #[test]
    fn release_without_window_is_error() {
        let mut m = Movable::new(Pane::default());
        assert_eq!(
            m.on_mouse(&MouseEvent::release(0, 0)),
            Err(MovableError::NoActiveWindow)
        );
    }

    #[test]
    fn cancel_drag_releases_capture_once() {
        let mut m = movable(PanelRect::new(0, 0, 10, 10));
        m.on_mouse(&MouseEvent::press(9, 9)).unwrap();
        m.host_mut().rect = None;
        assert_eq!(m.cancel_drag(), Some(DragKind::Corner(Corner::SouthEast)));
        assert_eq!(m.cancel_drag(), None);
        assert_eq!(m.host().steal, vec![true, false]);
    }

    #[test]
    fn change_geometry_goes_to_host() {
        let mut m = movable(PanelRect::new(0, 0, 10, 10));
        let out = m.change_geometry(1, 2, 1, 1);
        assert_eq!(out, GeometryOutcome::Applied(PanelRect::new(1, 2, 1, 1)));
        assert_eq!(m.into_inner().rect, Some(PanelRect::new(1, 2, 1, 1)));
    }

    #[test]
    fn with_config_validates() {
        let bad = MovableConfig::default().min_width(0);
        assert!(Movable::with_config(Pane::default(), bad).is_err());
        let good = MovableConfig::default().min_width(4);
        let m = Movable::with_config(Pane::default(), good).unwrap();
        assert_eq!(m.config().min_width, 4);
    }

    #[test]
    fn with_config_rejects_negative_reserved_cols() {
        let bad = MovableConfig::default().title_reserved_cols(-1);
        assert_eq!(
            Movable::with_config(Pane::default(), bad).err(),
            Some(MovableError::NegativeReservedCols { value: -1 })
        );
    }

    #[test]
    fn zero_host_minimum_still_rejects_empty_panels() {
        let mut m = Movable::new(Sliver(Pane::at(PanelRect::new(0, 0, 10, 10))));
        assert_eq!(m.config().min_height, 1);
        m.on_mouse(&MouseEvent::press(9, 9)).unwrap();

        let out = m.on_mouse(&MouseEvent::drag(0, 5)).unwrap();
        assert_eq!(out.applied_rect(), Some(PanelRect::new(0, 0, 1, 6)));

        let out = m.on_mouse(&MouseEvent::drag(-1, 5)).unwrap();
        assert_eq!(
            out,
            MouseOutcome::Geometry(GeometryOutcome::BelowMinimum(PanelRect::new(0, 0, 0, 6)))
        );
        assert_eq!(m.host().rectangle(), Some(PanelRect::new(0, 0, 1, 6)));
    }

    #[test]
    fn extreme_drag_coordinates_do_not_overflow() {
        let mut m = movable(PanelRect::new(0, 0, 10, 10));
        m.on_mouse(&MouseEvent::press(9, 9)).unwrap();
        let out = m.on_mouse(&MouseEvent::drag(i32::MAX, 5)).unwrap();
        assert_eq!(out.applied_rect(), Some(PanelRect::new(0, 0, i32::MAX, 6)));
        let out = m.on_mouse(&MouseEvent::drag(i32::MIN, i32::MIN)).unwrap();
        assert_eq!(
            out,
            MouseOutcome::Geometry(GeometryOutcome::BelowMinimum(PanelRect::new(
                0,
                0,
                i32::MIN + 1,
                i32::MIN + 1
            )))
        );
        m.on_mouse(&MouseEvent::release(0, 0)).unwrap();

        m.on_mouse(&MouseEvent::press(0, 0)).unwrap();
        let out = m.on_mouse(&MouseEvent::drag(i32::MIN, i32::MAX)).unwrap();
        assert!(matches!(
            out,
            MouseOutcome::Geometry(GeometryOutcome::BelowMinimum(_))
        ));
        m.on_mouse(&MouseEvent::release(0, 0)).unwrap();

        m.on_mouse(&MouseEvent::press(0, 3)).unwrap();
        let out = m.on_mouse(&MouseEvent::drag(i32::MIN, i32::MAX)).unwrap();
        assert!(out.applied_rect().is_some());
    }
}
