//! Print how many shapes each generator draws per depth, for a quick check of
//! the growth rates.
//!
//! Usage:
//!   cargo run -p broccoli --example draw_counts -- broccoli
//!   cargo run -p broccoli --example draw_counts -- split
//!
//! broccoli mode grows triangles and quads on the triangle and square scenes;
//! split mode runs both barycentric splits.

use broccoli::prelude::*;

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "broccoli".to_string());
    match mode.as_str() {
        "broccoli" => show_broccoli(),
        "split" => show_split(),
        _ => {
            eprintln!("usage: draw_counts [broccoli|split]");
        }
    }
}

fn show_broccoli() {
    let scenes = [
        (
            "triangle/triangle",
            BaseShape::default_triangle(),
            BroccoliCfg::default_triangle(),
        ),
        (
            "square/quad",
            BaseShape::default_quadrilateral(),
            BroccoliCfg::default_quadrilateral(),
        ),
    ];
    for (name, base, preset) in scenes {
        for depth in 1..=8 {
            let cfg = BroccoliCfg {
                iterations: depth,
                on_degenerate: DegeneratePolicy::SkipSubtree,
                ..preset.clone()
            };
            let stats = broccoli(&base, &cfg, &mut |_: DrawInstructions| {}).unwrap();
            println!(
                "{name} depth {depth}: drawn={}, skipped={}",
                stats.drawn, stats.skipped
            );
        }
    }
}

fn show_split() {
    let tree = SeedTree::generate(8, 3, 2025);
    let triangle = SplitCfg::default_triangle();
    for depth in 1..=8 {
        let cfg = SplitCfg {
            iterations: depth,
            ..SplitCfg::default()
        };
        let stats =
            barycentric_split(&triangle, &cfg, &tree, &mut |_: DrawInstructions| {}).unwrap();
        println!("triangle split depth {depth}: drawn={}", stats.drawn);
    }

    let square = OrientedPolygon::new(vec![
        Point::new(100.0, 100.0),
        Point::new(400.0, 100.0),
        Point::new(400.0, 400.0),
        Point::new(100.0, 400.0),
    ])
    .unwrap();
    for depth in 1..=5 {
        let cfg = QuadSplitCfg {
            iterations: depth,
            ..QuadSplitCfg::default()
        };
        let stats = quadrilateral_split(&square, &cfg, &mut |_: DrawInstructions| {}).unwrap();
        println!("quad split depth {depth}: drawn={}", stats.drawn);
    }
}
