#![forbid(unsafe_code)]

//! Pointer event types consumed by panel behaviors.
//!
//! # Design Notes
//!
//! - Coordinates are 0-indexed and *relative to the receiving panel's own
//!   top-left cell*. A drag that leaves the panel produces negative or
//!   out-of-range values; consumers must not assume `0 <= line < lines`.
//! - `MouseButtons` is a bitmask rather than a single button so that hosts
//!   reporting chorded presses (primary + secondary) lose nothing.
//! - Only `Press`, `Drag` and `Release` carry meaning for move/resize; the
//!   remaining kinds exist so a host can forward its whole pointer stream
//!   without pre-filtering.

use bitflags::bitflags;

bitflags! {
    /// Buttons held (or released) for a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MouseButtons: u8 {
        /// No buttons.
        const NONE      = 0b000;
        /// Primary (usually left) button. Bit 1 of the mask.
        const PRIMARY   = 0b001;
        /// Middle button (wheel click).
        const MIDDLE    = 0b010;
        /// Secondary (usually right) button.
        const SECONDARY = 0b100;
    }
}

impl Default for MouseButtons {
    fn default() -> Self {
        Self::NONE
    }
}

bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MouseEventKind {
    /// Button pressed down.
    Press,
    /// Pointer moved while a button is held.
    Drag,
    /// Button released.
    Release,
    /// Pointer moved with no button held.
    Moved,
    /// Wheel scrolled up.
    ScrollUp,
    /// Wheel scrolled down.
    ScrollDown,
    /// Wheel scrolled left.
    ScrollLeft,
    /// Wheel scrolled right.
    ScrollRight,
}

/// A pointer event addressed to one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MouseEvent {
    /// The type of event.
    pub kind: MouseEventKind,

    /// Buttons involved in the event.
    pub buttons: MouseButtons,

    /// Row, relative to the panel's top row.
    pub line: i32,

    /// Column, relative to the panel's left column.
    pub col: i32,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: MouseEventKind, buttons: MouseButtons, line: i32, col: i32) -> Self {
        Self {
            kind,
            buttons,
            line,
            col,
            modifiers: Modifiers::NONE,
        }
    }

    /// Primary-button press at `(line, col)`.
    #[must_use]
    pub const fn press(line: i32, col: i32) -> Self {
        Self::new(MouseEventKind::Press, MouseButtons::PRIMARY, line, col)
    }

    /// Primary-button drag to `(line, col)`.
    #[must_use]
    pub const fn drag(line: i32, col: i32) -> Self {
        Self::new(MouseEventKind::Drag, MouseButtons::PRIMARY, line, col)
    }

    /// Primary-button release at `(line, col)`.
    #[must_use]
    pub const fn release(line: i32, col: i32) -> Self {
        Self::new(MouseEventKind::Release, MouseButtons::PRIMARY, line, col)
    }

    /// Replace the button mask.
    #[must_use]
    pub const fn with_buttons(mut self, buttons: MouseButtons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Create a pointer event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Whether the primary button bit is set.
    #[must_use]
    pub const fn is_primary(&self) -> bool {
        self.buttons.contains(MouseButtons::PRIMARY)
    }

    /// Get the position as a `(line, col)` tuple.
    #[must_use]
    pub const fn position(&self) -> (i32, i32) {
        (self.line, self.col)
    }
}

#[cfg(feature = "crossterm")]
mod crossterm_compat {
    use super::{Modifiers, MouseButtons, MouseEvent, MouseEventKind};
    use crossterm::event as ct;

    fn button_mask(button: ct::MouseButton) -> MouseButtons {
        match button {
            ct::MouseButton::Left => MouseButtons::PRIMARY,
            ct::MouseButton::Middle => MouseButtons::MIDDLE,
            ct::MouseButton::Right => MouseButtons::SECONDARY,
        }
    }

    fn modifiers(mods: ct::KeyModifiers) -> Modifiers {
        let mut out = Modifiers::NONE;
        if mods.contains(ct::KeyModifiers::SHIFT) {
            out |= Modifiers::SHIFT;
        }
        if mods.contains(ct::KeyModifiers::ALT) {
            out |= Modifiers::ALT;
        }
        if mods.contains(ct::KeyModifiers::CONTROL) {
            out |= Modifiers::CTRL;
        }
        if mods.contains(ct::KeyModifiers::SUPER) {
            out |= Modifiers::SUPER;
        }
        out
    }

    impl MouseEvent {
        /// Convert an absolute crossterm mouse event into one relative to a
        /// panel whose top-left cell is at `origin` (`(top, left)`).
        #[must_use]
        pub fn from_crossterm(event: ct::MouseEvent, origin: (i32, i32)) -> Self {
            let (kind, buttons) = match event.kind {
                ct::MouseEventKind::Down(b) => (MouseEventKind::Press, button_mask(b)),
                ct::MouseEventKind::Drag(b) => (MouseEventKind::Drag, button_mask(b)),
                ct::MouseEventKind::Up(b) => (MouseEventKind::Release, button_mask(b)),
                ct::MouseEventKind::Moved => (MouseEventKind::Moved, MouseButtons::NONE),
                ct::MouseEventKind::ScrollUp => (MouseEventKind::ScrollUp, MouseButtons::NONE),
                ct::MouseEventKind::ScrollDown => {
                    (MouseEventKind::ScrollDown, MouseButtons::NONE)
                }
                ct::MouseEventKind::ScrollLeft => {
                    (MouseEventKind::ScrollLeft, MouseButtons::NONE)
                }
                ct::MouseEventKind::ScrollRight => {
                    (MouseEventKind::ScrollRight, MouseButtons::NONE)
                }
            };
            MouseEvent {
                kind,
                buttons,
                line: i32::from(event.row).saturating_sub(origin.0),
                col: i32::from(event.column).saturating_sub(origin.1),
                modifiers: modifiers(event.modifiers),
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_use_primary_button() {
        assert!(MouseEvent::press(0, 0).is_primary());
        assert!(MouseEvent::drag(1, 2).is_primary());
        assert!(MouseEvent::release(1, 2).is_primary());
        assert_eq!(MouseEvent::drag(1, 2).position(), (1, 2));
    }

    #[test]
    fn secondary_only_is_not_primary() {
        let ev = MouseEvent::press(0, 0).with_buttons(MouseButtons::SECONDARY);
        assert!(!ev.is_primary());
    }

    #[test]
    fn chorded_mask_still_primary() {
        let ev = MouseEvent::drag(0, 0).with_buttons(MouseButtons::PRIMARY | MouseButtons::MIDDLE);
        assert!(ev.is_primary());
    }

    #[test]
    fn with_modifiers_sets_mask() {
        let ev = MouseEvent::press(0, 0).with_modifiers(Modifiers::ALT | Modifiers::SHIFT);
        assert!(ev.modifiers.contains(Modifiers::ALT));
        assert!(!ev.modifiers.contains(Modifiers::CTRL));
    }

    #[test]
    fn defaults_are_empty() {
        assert_eq!(MouseButtons::default(), MouseButtons::NONE);
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }

    #[test]
    fn primary_is_bit_one() {
        assert_eq!(MouseButtons::PRIMARY.bits(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let ev = MouseEvent::drag(-3, 7).with_modifiers(Modifiers::CTRL);
        let json = serde_json::to_string(&ev).expect("serialize event");
        let back: MouseEvent = serde_json::from_str(&json).expect("deserialize event");
        assert_eq!(back, ev);
    }
}
