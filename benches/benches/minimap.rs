// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Affine, Point, Rect, Size, Vec2};
use understory_minimap::{DragController, Minimap, MinimapConfig, MirrorMode, compute_viewport_rect};
use understory_minimap_demos::{DemoGraph, LogDocument};

const MAIN: Size = Size::new(800.0, 600.0);

fn bench_viewport_rect(c: &mut Criterion) {
    let mini = Size::new(200.0, 120.0);
    let transform = Affine::translate(Vec2::new(-340.0, -120.0)) * Affine::scale(3.0);
    c.bench_function("minimap/compute_viewport_rect", |b| {
        b.iter(|| compute_viewport_rect(black_box(transform), MAIN, mini));
    });
}

fn bench_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimap/sync");

    // Each grid node carries a key shape and a label; edges chain neighbors.
    for side in [8usize, 32, 64] {
        let mut graph = DemoGraph::grid(MAIN, side, side, 60.0);
        graph.set_view(Affine::scale(2.0));
        group.throughput(Throughput::Elements((side * side) as u64));

        for mode in [MirrorMode::FullClone, MirrorMode::KeyShapesOnly] {
            let config = MinimapConfig::default().with_mirror(mode);
            let Ok(mut minimap) = Minimap::new(LogDocument::new(), &graph, config) else {
                continue;
            };
            let id = BenchmarkId::new(format!("{mode:?}"), side);
            group.bench_with_input(id, &graph, |b, graph| {
                b.iter(|| black_box(minimap.on_host_repaint(graph)));
            });
        }
    }

    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimap/drag");

    for moves in [16usize, 256] {
        let pointers: Vec<Point> = (0..moves)
            .map(|i| {
                let t = i as f64 * 0.37;
                Point::new(t.sin() * 150.0, t.cos() * 90.0)
            })
            .collect();
        group.throughput(Throughput::Elements(moves as u64));

        let id = BenchmarkId::new("update", moves);
        group.bench_with_input(id, &pointers, |b, pointers| {
            b.iter_batched(
                || {
                    let mut drag = DragController::new(Size::new(200.0, 120.0));
                    let rect = Rect::from_origin_size((50.0, 30.0), (100.0, 60.0));
                    drag.begin(rect, Point::ORIGIN, Vec2::new(4.0, 5.0));
                    drag
                },
                |mut drag| {
                    for &pointer in pointers {
                        black_box(drag.update(pointer));
                    }
                    drag
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_viewport_rect, bench_sync, bench_drag);
criterion_main!(benches);
