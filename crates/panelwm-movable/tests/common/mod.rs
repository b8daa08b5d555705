#![allow(dead_code)]

use panelwm_core::PanelRect;
use panelwm_movable::HostPanel;

/// Host call, as seen from the panel side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Steal(bool),
    Geometry(PanelRect),
}

/// Panel that applies every request and logs the calls it received.
#[derive(Debug, Default)]
pub struct LoggingPane {
    pub rect: Option<PanelRect>,
    pub calls: Vec<Call>,
    /// Screen size used by the clamping hook, if set.
    pub screen: Option<(i32, i32)>,
}

impl LoggingPane {
    pub fn at(rect: PanelRect) -> Self {
        Self {
            rect: Some(rect),
            ..Self::default()
        }
    }

    pub fn geometry_calls(&self) -> Vec<PanelRect> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Geometry(rect) => Some(*rect),
                Call::Steal(_) => None,
            })
            .collect()
    }

    pub fn steal_calls(&self) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Steal(steal) => Some(*steal),
                Call::Geometry(_) => None,
            })
            .collect()
    }
}

impl HostPanel for LoggingPane {
    type Claim = PanelRect;

    fn rectangle(&self) -> Option<PanelRect> {
        self.rect
    }

    fn change_geometry(&mut self, target: PanelRect) -> bool {
        self.calls.push(Call::Geometry(target));
        self.rect = Some(target);
        true
    }

    fn set_steal_input(&mut self, steal: bool) {
        self.calls.push(Call::Steal(steal));
    }

    /// Keep the panel on-screen: out-of-bounds moves are clamped, applied
    /// directly, and reported as claimed.
    fn before_change_geometry(&mut self, target: PanelRect) -> Option<Self::Claim> {
        let (height, width) = self.screen?;
        let top = target.top.clamp(0, (height - target.lines).max(0));
        let left = target.left.clamp(0, (width - target.cols).max(0));
        if top == target.top && left == target.left {
            return None;
        }
        let clamped = PanelRect::new(top, left, target.lines, target.cols);
        self.calls.push(Call::Geometry(clamped));
        self.rect = Some(clamped);
        Some(clamped)
    }
}

/// Same as `LoggingPane` but with a larger minimum size.
#[derive(Debug, Default)]
pub struct RoomyPane(pub LoggingPane);

impl HostPanel for RoomyPane {
    type Claim = PanelRect;

    const MIN_HEIGHT: i32 = 4;
    const MIN_WIDTH: i32 = 6;

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
