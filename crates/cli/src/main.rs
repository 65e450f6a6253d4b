use anyhow::{Context, Result};
use broccoli::fractal::{barycentric_split, broccoli, quadrilateral_split, RunStats};
use broccoli::homotopy::draw_circle_image;
use broccoli::prelude::*;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod scene;

use provenance::Payload;
use scene::{BroccoliScene, HomotopyScene, SplitScene, CANVAS_SIZE};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Render fractal and circle-image scenes to SVG")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Grow a broccoli fractal from a base polygon
    Broccoli {
        #[command(flatten)]
        scene: BroccoliScene,
        /// JSON scene file; replaces the flags above
        #[arg(long)]
        from: Option<PathBuf>,
        #[arg(long, default_value = "broccoli.svg")]
        out: PathBuf,
    },
    /// Recursive barycentric split of a triangle or quadrilateral
    Split {
        #[command(flatten)]
        scene: SplitScene,
        #[arg(long)]
        from: Option<PathBuf>,
        #[arg(long, default_value = "split.svg")]
        out: PathBuf,
    },
    /// Image of a circle under a complex polynomial
    Homotopy {
        #[command(flatten)]
        scene: HomotopyScene,
        #[arg(long)]
        from: Option<PathBuf>,
        /// Output file; numbered per frame when more than one is rendered
        #[arg(long, default_value = "homotopy.svg")]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Broccoli { scene, from, out } => render_broccoli(&pick(scene, from)?, &out),
        Action::Split { scene, from, out } => render_split(&pick(scene, from)?, &out),
        Action::Homotopy { scene, from, out } => {
            render_homotopy(&pick(scene, from)?, &out).map(|_| ())
        }
        Action::Report => report(),
    }
}

fn pick<T: DeserializeOwned>(flags: T, from: Option<PathBuf>) -> Result<T> {
    match from {
        Some(path) => scene::load(&path),
        None => Ok(flags),
    }
}

fn stats_json(stats: &RunStats) -> serde_json::Value {
    json!({
        "drawn": stats.drawn,
        "skipped": stats.skipped,
        "max_level": stats.max_level,
    })
}

fn save(canvas: &SvgCanvas, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    canvas
        .save(out)
        .with_context(|| format!("writing {}", out.display()))
}

fn params<T: Serialize>(scene: &T) -> Result<serde_json::Value> {
    serde_json::to_value(scene).context("serializing scene parameters")
}

fn render_broccoli(scene: &BroccoliScene, out: &Path) -> Result<()> {
    let base = scene.base()?;
    let cfg = scene.config()?;
    let mut canvas = SvgCanvas::new(CANVAS_SIZE, CANVAS_SIZE).with_background(Colour::WHITE);
    let stats = broccoli(&base, &cfg, &mut canvas)?;
    save(&canvas, out)?;
    tracing::info!(out = %out.display(), drawn = stats.drawn, skipped = stats.skipped, "broccoli");
    provenance::write_sidecar(
        out,
        Payload::new("broccoli", params(scene)?).with_stats(stats_json(&stats)),
    )?;
    Ok(())
}

fn render_split(scene: &SplitScene, out: &Path) -> Result<()> {
    let mut canvas = SvgCanvas::new(CANVAS_SIZE, CANVAS_SIZE).with_background(Colour::WHITE);
    let stats = if scene.quad {
        quadrilateral_split(&scene.outer_quad()?, &scene.quad_config()?, &mut canvas)?
    } else {
        let cfg = scene.config()?;
        barycentric_split(&scene.triangle(), &cfg, &scene.seeds(), &mut canvas)?
    };
    save(&canvas, out)?;
    tracing::info!(out = %out.display(), drawn = stats.drawn, quad = scene.quad, "split");
    provenance::write_sidecar(
        out,
        Payload::new("split", params(scene)?).with_stats(stats_json(&stats)),
    )?;
    Ok(())
}

/// `out` itself for a single frame, otherwise `<stem>_<frame>.<ext>`.
fn frame_path(out: &Path, frame: usize, frames: usize) -> PathBuf {
    if frames == 1 {
        return out.to_path_buf();
    }
    let stem = out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    let name = match out.extension() {
        Some(ext) => format!("{stem}_{frame:04}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{frame:04}"),
    };
    out.with_file_name(name)
}

fn render_homotopy(scene: &HomotopyScene, out: &Path) -> Result<Vec<PathBuf>> {
    let poly = scene.polynomial()?;
    let cfg = scene.config()?;
    let radii = scene.radii()?;
    tracing::info!(polynomial = %poly, frames = radii.len(), "homotopy");

    let mut written = Vec::with_capacity(radii.len());
    for (frame, &radius) in radii.iter().enumerate() {
        let segments = circle_image_segments(&poly, radius, cfg.samples)?;
        let viewport = Viewport::fit_symmetric(
            segments.iter().map(|s| s.start),
            CANVAS_SIZE,
            CANVAS_SIZE,
        );
        let mut canvas = SvgCanvas::new(CANVAS_SIZE, CANVAS_SIZE)
            .with_background(Colour::WHITE)
            .with_viewport(viewport);
        let drawn = draw_circle_image(&poly, radius, &cfg, &mut canvas)?;

        let path = frame_path(out, frame, radii.len());
        save(&canvas, &path)?;
        tracing::debug!(frame, radius, drawn, out = %path.display(), "frame");
        provenance::write_sidecar(
            &path,
            Payload::new("homotopy", params(scene)?).with_stats(json!({
                "frame": frame,
                "radius": radius,
                "polynomial": poly.to_string(),
                "drawn": drawn,
            })),
        )?;
        written.push(path);
    }
    Ok(written)
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": broccoli::VERSION,
        "scenes": ["broccoli", "split", "homotopy"],
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene::Drag;
    use serde_json::Value;
    use tempfile::tempdir;

    fn sidecar(path: &Path) -> Value {
        let prov = path.with_file_name(format!(
            "{}.provenance.json",
            path.file_stem().unwrap().to_string_lossy()
        ));
        serde_json::from_slice(&fs::read(prov).unwrap()).unwrap()
    }

    #[test]
    fn broccoli_writes_svg_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("b.svg");
        let scene = BroccoliScene {
            depth: 3,
            drags: vec![Drag {
                index: 1,
                to: [460.0, 380.0],
            }],
            ..BroccoliScene::default()
        };
        render_broccoli(&scene, &out).unwrap();

        let svg = fs::read_to_string(&out).unwrap();
        // base plus 3 children plus 6 grandchildren
        assert_eq!(svg.matches("<polygon").count(), 2 * 10);
        let prov = sidecar(&out);
        assert_eq!(prov["scene"], "broccoli");
        assert_eq!(prov["stats"]["drawn"], 10);
        assert_eq!(prov["params"]["depth"], 3);
    }

    #[test]
    fn broccoli_errors_leave_no_output() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("bad.svg");
        let scene = BroccoliScene {
            start: 0.5,
            end: 0.5,
            ..BroccoliScene::default()
        };
        assert!(render_broccoli(&scene, &out).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn split_modes_draw_expected_counts() {
        let dir = tempdir().unwrap();
        let tri = dir.path().join("tri.svg");
        let scene = SplitScene {
            depth: 3,
            seed: 7,
            ..SplitScene::default()
        };
        render_split(&scene, &tri).unwrap();
        assert_eq!(sidecar(&tri)["stats"]["drawn"], 9);

        let quad = dir.path().join("quad.svg");
        let scene = SplitScene {
            quad: true,
            depth: 2,
            outline: true,
            ..SplitScene::default()
        };
        render_split(&scene, &quad).unwrap();
        assert_eq!(sidecar(&quad)["stats"]["drawn"], 25);
    }

    #[test]
    fn homotopy_numbers_frames() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("h.svg");
        let scene = HomotopyScene {
            frames: 3,
            samples: 16,
            ..HomotopyScene::default()
        };
        let written = render_homotopy(&scene, &out).unwrap();
        assert_eq!(
            written,
            (0..3)
                .map(|i| dir.path().join(format!("h_{i:04}.svg")))
                .collect::<Vec<_>>()
        );
        for (i, path) in written.iter().enumerate() {
            let svg = fs::read_to_string(path).unwrap();
            assert_eq!(svg.matches("<polyline").count(), 16);
            let prov = sidecar(path);
            assert_eq!(prov["stats"]["frame"], i);
            assert_eq!(prov["stats"]["drawn"], 16);
        }

        let single = dir.path().join("one.svg");
        let scene = HomotopyScene {
            radius: Some(1.0),
            samples: 8,
            ..HomotopyScene::default()
        };
        assert_eq!(render_homotopy(&scene, &single).unwrap(), vec![single]);
    }

    #[test]
    fn frame_paths() {
        assert_eq!(frame_path(Path::new("a/b.svg"), 0, 1), Path::new("a/b.svg"));
        assert_eq!(frame_path(Path::new("a/b.svg"), 12, 20), Path::new("a/b_0012.svg"));
        assert_eq!(frame_path(Path::new("a/b"), 3, 5), Path::new("a/b_0003"));
    }

    #[test]
    fn cli_parses_subcommands() {
        let cmd = Cmd::try_parse_from([
            "cli", "broccoli", "--quad", "--depth", "4", "--out", "x.svg",
        ])
        .unwrap();
        match cmd.action {
            Action::Broccoli { scene, from, out } => {
                assert!(scene.quad);
                assert_eq!(scene.depth, 4);
                assert!(from.is_none());
                assert_eq!(out, PathBuf::from("x.svg"));
            }
            _ => panic!("expected broccoli"),
        }
        let cmd = Cmd::try_parse_from(["cli", "homotopy", "--coefficients", "-1 0 1"]).unwrap();
        match cmd.action {
            Action::Homotopy { scene, .. } => assert_eq!(scene.coefficients, "-1 0 1"),
            _ => panic!("expected homotopy"),
        }
        assert!(Cmd::try_parse_from(["cli", "split", "--depth", "x"]).is_err());

        let cmd = Cmd::try_parse_from(["cli", "split", "--from", "scene.json"]).unwrap();
        match cmd.action {
            Action::Split { from, .. } => assert_eq!(from, Some(PathBuf::from("scene.json"))),
            _ => panic!("expected split"),
        }
        assert!(Cmd::try_parse_from(["cli", "split", "--scene", "scene.json"]).is_err());
    }
}
