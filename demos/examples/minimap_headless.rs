// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless minimap walkthrough.
//!
//! Builds a grid graph, attaches a minimap, zooms the host in, then drags the
//! viewport rectangle across the minimap until it hits the right edge.
//!
//! Run:
//! - `cargo run -p understory_minimap_demos --example minimap_headless`
//! - `RUST_LOG=trace cargo run -p understory_minimap_demos --example minimap_headless`

use kurbo::{Affine, Point, Size};
use understory_minimap::{
    Container, HostCanvas, Minimap, MinimapConfig, MirrorMode, PointerEvent, PointerTarget,
};
use understory_minimap_demos::{DemoGraph, LogDocument, init_logging};

fn main() {
    init_logging();

    let mut graph = DemoGraph::grid(Size::new(800.0, 600.0), 12, 8, 90.0);
    let config = MinimapConfig::default()
        .with_container(Container::Id("graph".into()))
        .with_mirror(MirrorMode::KeyShapesOnly);

    let mut minimap = match Minimap::new(LogDocument::new(), &graph, config) {
        Ok(minimap) => minimap,
        Err(err) => {
            eprintln!("cannot create minimap: {err}");
            return;
        }
    };
    let shapes = minimap.canvas().content().shape_count();
    println!("mirrored {shapes} shapes");

    graph.set_view(Affine::scale(2.5));
    match minimap.on_host_repaint(&graph) {
        Ok(outcome) => println!(
            "zoomed in: viewport {:?}, world {:?}",
            outcome.viewport, outcome.world_size
        ),
        Err(err) => println!("sync skipped: {err}"),
    }

    let Some(start) = minimap.viewport().map(|overlay| overlay.rect().center()) else {
        return;
    };
    minimap.handle_pointer(
        &mut graph,
        PointerEvent::Down {
            position: start,
            target: PointerTarget::Viewport,
        },
    );
    for step in 1..=10 {
        let position = Point::new(start.x + f64::from(step) * 25.0, start.y);
        if let Some(step) = minimap.handle_pointer(&mut graph, PointerEvent::Move { position }) {
            println!("rect at {:?}, pan {:?}", step.rect.origin(), step.pan);
        }
        // The host repaints after every pan.
        let _ = minimap.on_host_repaint(&graph);
    }
    minimap.handle_pointer(&mut graph, PointerEvent::Up);

    println!("final view transform: {:?}", graph.transform().as_coeffs());
    minimap.destroy();
}
