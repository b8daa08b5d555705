//! Benchmark: hit-testing and drag-tick throughput.
//!
//! Run with: `cargo bench -p panelwm-movable --bench drag_bench`
//!
//! A drag emits one event per cell crossed, so a fast mouse sweep across a
//! wide terminal produces a few hundred ticks in a burst.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use panelwm_core::{MouseEvent, PanelRect};
use panelwm_movable::hit_test::classify;
use panelwm_movable::{HostPanel, Movable};

struct BenchPane {
    rect: PanelRect,
}

impl HostPanel for BenchPane {
    type Claim = ();

    fn rectangle(&self) -> Option<PanelRect> {
        Some(self.rect)
    }

    fn change_geometry(&mut self, target: PanelRect) -> bool {
        self.rect = target;
        true
    }

    fn set_steal_input(&mut self, _steal: bool) {}
}

fn bench_classify(c: &mut Criterion) {
    let rect = PanelRect::new(0, 0, 40, 120);
    c.bench_function("classify_full_panel", |b| {
        b.iter(|| {
            for line in 0..rect.lines {
                for col in 0..rect.cols {
                    black_box(classify(black_box(line), black_box(col), &rect, 2));
                }
            }
        });
    });
}

fn bench_drag_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_ticks");

    group.bench_function("move_sweep", |b| {
        b.iter(|| {
            let mut m = Movable::new(BenchPane {
                rect: PanelRect::new(0, 0, 20, 60),
            });
            let _ = m.on_mouse(&MouseEvent::press(0, 10));
            for step in 0..200 {
                let _ = black_box(m.on_mouse(&MouseEvent::drag(step % 3, 10 + step % 5)));
            }
            let _ = m.on_mouse(&MouseEvent::release(0, 10));
        });
    });

    group.bench_function("corner_resize_sweep", |b| {
        b.iter(|| {
            let mut m = Movable::new(BenchPane {
                rect: PanelRect::new(0, 0, 20, 60),
            });
            let _ = m.on_mouse(&MouseEvent::press(19, 59));
            for step in 0..200 {
                let _ = black_box(m.on_mouse(&MouseEvent::drag(step % 40 - 5, step - 5)));
            }
            let _ = m.on_mouse(&MouseEvent::release(0, 0));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_drag_ticks);
criterion_main!(benches);
