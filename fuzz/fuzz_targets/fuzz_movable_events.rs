#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use panelwm_core::{MouseButtons, MouseEvent, MouseEventKind, PanelRect};
use panelwm_movable::testing::RecordingHost;
use panelwm_movable::{DragMode, GeometryOutcome, Movable, MouseOutcome};

#[derive(Debug, Arbitrary)]
enum Step {
    Event { kind: u8, buttons: u8, line: i32, col: i32 },
    Unmap,
    Remap { top: i32, left: i32, lines: u8, cols: u8 },
    Refuse(bool),
    Cancel,
}

#[derive(Debug, Arbitrary)]
struct Input {
    top: i32,
    left: i32,
    lines: u8,
    cols: u8,
    steps: Vec<Step>,
}

fn kind(raw: u8) -> MouseEventKind {
    match raw % 6 {
        0 => MouseEventKind::Press,
        1 | 2 => MouseEventKind::Drag,
        3 => MouseEventKind::Release,
        4 => MouseEventKind::Moved,
        _ => MouseEventKind::ScrollUp,
    }
}

fn rect(top: i32, left: i32, lines: u8, cols: u8) -> PanelRect {
    // 1..=64 keeps sizes sane while still reaching 1x1 panels.
    PanelRect::new(
        top,
        left,
        i32::from(lines % 64) + 1,
        i32::from(cols % 64) + 1,
    )
}

fuzz_target!(|input: Input| {
    let host = RecordingHost::new(rect(input.top, input.left, input.lines, input.cols));
    let mut m = Movable::new(host);

    for step in input.steps.iter().take(512) {
        match *step {
            Step::Event {
                kind: k,
                buttons,
                line,
                col,
            } => {
                let event = MouseEvent::new(
                    kind(k),
                    MouseButtons::from_bits_truncate(buttons),
                    line,
                    col,
                );
                let was_resizing = matches!(
                    m.mode(),
                    DragMode::ResizingFromCorner { .. } | DragMode::ResizingFromEdge { .. }
                );
                match m.on_mouse(&event) {
                    Ok(outcome) => {
                        if was_resizing && event.kind == MouseEventKind::Drag {
                            if let Some(applied) = outcome.applied_rect() {
                                assert!(applied.lines >= 2 && applied.cols >= 2);
                            }
                        }
                        if let MouseOutcome::Geometry(GeometryOutcome::BelowMinimum(r)) = outcome {
                            assert!(r.lines < 2 || r.cols < 2);
                        }
                        if event.kind == MouseEventKind::Release {
                            assert!(!m.is_dragging());
                        }
                    }
                    Err(_) => {
                        assert_eq!(event.kind, MouseEventKind::Release);
                        assert!(m.host().rect.is_none());
                    }
                }
            }
            Step::Unmap => m.host_mut().rect = None,
            Step::Remap {
                top,
                left,
                lines,
                cols,
            } => m.host_mut().rect = Some(rect(top, left, lines, cols)),
            Step::Refuse(refuse) => m.host_mut().set_refusing(refuse),
            Step::Cancel => {
                let _ = m.cancel_drag();
            }
        }

        // Capture is held exactly while a session is live.
        assert_eq!(m.is_dragging(), m.host().is_capturing());
    }
});
