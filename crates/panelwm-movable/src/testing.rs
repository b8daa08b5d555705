#![forbid(unsafe_code)]

//! Recording host for tests.
//!
//! [`RecordingHost`] applies every geometry request it receives and keeps a
//! log of everything the behavior asked of it, so tests can assert on the
//! exact call sequence.

use std::fmt;

use panelwm_core::PanelRect;

use crate::host::HostPanel;

type PressHook = Box<dyn FnMut(i32, i32) -> Option<String>>;
type GeometryHook = Box<dyn FnMut(PanelRect) -> Option<String>>;

/// A [`HostPanel`] that records calls. Its claim type is `String`.
pub struct RecordingHost {
    /// Current rectangle. `None` simulates an unmapped panel.
    pub rect: Option<PanelRect>,
    /// Every `set_steal_input` argument, in order.
    pub steal_calls: Vec<bool>,
    /// Every rectangle that reached `change_geometry`, in order.
    pub requests: Vec<PanelRect>,
    /// Every `before_change_geometry` argument, in order.
    pub intercepted: Vec<PanelRect>,
    refuse: bool,
    press_hook: Option<PressHook>,
    geometry_hook: Option<GeometryHook>,
}

impl fmt::Debug for RecordingHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingHost")
            .field("rect", &self.rect)
            .field("steal_calls", &self.steal_calls)
            .field("requests", &self.requests)
            .field("refuse", &self.refuse)
            .field("press_hook", &self.press_hook.is_some())
            .field("geometry_hook", &self.geometry_hook.is_some())
            .finish()
    }
}

impl RecordingHost {
    /// A mapped panel at `rect`.
    #[must_use]
    pub fn new(rect: PanelRect) -> Self {
        Self {
            rect: Some(rect),
            steal_calls: Vec::new(),
            requests: Vec::new(),
            intercepted: Vec::new(),
            refuse: false,
            press_hook: None,
            geometry_hook: None,
        }
    }

    /// A panel with no rectangle.
    #[must_use]
    pub fn unmapped() -> Self {
        Self {
            rect: None,
            ..Self::new(PanelRect::default())
        }
    }

    /// Record requests but never apply them.
    #[must_use]
    pub fn refusing(mut self) -> Self {
        self.refuse = true;
        self
    }

    /// Start or stop refusing geometry requests.
    pub fn set_refusing(&mut self, refuse: bool) {
        self.refuse = refuse;
    }

    /// Install a `before_mouse_press` hook.
    #[must_use]
    pub fn with_press_hook(
        mut self,
        hook: impl FnMut(i32, i32) -> Option<String> + 'static,
    ) -> Self {
        self.press_hook = Some(Box::new(hook));
        self
    }

    /// Install a `before_change_geometry` hook.
    #[must_use]
    pub fn with_geometry_hook(
        mut self,
        hook: impl FnMut(PanelRect) -> Option<String> + 'static,
    ) -> Self {
        self.geometry_hook = Some(Box::new(hook));
        self
    }

    /// Whether input capture is currently held, judging by the last call.
    #[must_use]
    pub fn is_capturing(&self) -> bool {
        self.steal_calls.last().copied().unwrap_or(false)
    }

    /// Number of `set_steal_input(false)` calls seen.
    #[must_use]
    pub fn releases(&self) -> usize {
        self.steal_calls.iter().filter(|steal| !**steal).count()
    }
}

impl HostPanel for RecordingHost {
    type Claim = String;

    fn rectangle(&self) -> Option<PanelRect> {
        self.rect
    }

    fn change_geometry(&mut self, target: PanelRect) -> bool {
        self.requests.push(target);
        if self.refuse {
            return false;
        }
        self.rect = Some(target);
        true
    }

    fn set_steal_input(&mut self, steal: bool) {
        self.steal_calls.push(steal);
    }

    fn before_mouse_press(&mut self, line: i32, col: i32) -> Option<Self::Claim> {
        self.press_hook.as_mut().and_then(|hook| hook(line, col))
    }

    fn before_change_geometry(&mut self, target: PanelRect) -> Option<Self::Claim> {
        self.intercepted.push(target);
        self.geometry_hook.as_mut().and_then(|hook| hook(target))
    }
}
