use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geodiag::demos::{tutorial_page, Example};
use geodiag::diagram::Diagram;
use geodiag::scene_file::SceneFile;
use nalgebra::Vector2;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod manifest;

use manifest::Stats;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Render the geometry tutorial diagrams")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Render every example block into the tutorial page
    Page {
        #[arg(long)]
        out: PathBuf,
    },
    /// Render one example block as a standalone SVG
    Svg {
        /// intro, plot, rotation, fixed or annotated
        #[arg(long)]
        example: Example,
        #[arg(long)]
        out: PathBuf,
        /// Drag the rotatable line towards a logical point `x,y` (repeatable)
        #[arg(long = "drag", value_parser = parse_point)]
        drag: Vec<Vector2<f64>>,
    },
    /// Render a diagram described by a JSON scene file
    Scene {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long = "drag", value_parser = parse_point)]
        drag: Vec<Vector2<f64>>,
    },
    /// Print version and code revision
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Page { out } => page(&out),
        Action::Svg { example, out, drag } => svg(example, &out, &drag),
        Action::Scene { file, out, drag } => scene(&file, &out, &drag),
        Action::Report => report(),
    }
}

fn page(out: &Path) -> Result<()> {
    tracing::info!(out = %out.display(), "page");
    let stats: Vec<Stats> = Example::ALL
        .iter()
        .map(|ex| ex.build().map(|d| stats_of(&d)))
        .collect::<geodiag::Result<_>>()?;
    let html = tutorial_page()?.into_html();
    write_artifact(out, html.as_bytes())?;
    let names: Vec<_> = Example::ALL.iter().map(|ex| ex.name()).collect();
    manifest::write_sidecar(out, "page", &json!({ "examples": names }), &stats)?;
    Ok(())
}

fn svg(example: Example, out: &Path, drag: &[Vector2<f64>]) -> Result<()> {
    tracing::info!(%example, out = %out.display(), drags = drag.len(), "svg");
    let mut diagram = example.build()?;
    apply_drag(&mut diagram, drag)?;
    write_artifact(out, diagram.to_svg().as_bytes())?;
    let params = json!({ "example": example.name(), "drag": points_json(drag) });
    manifest::write_sidecar(out, "svg", &params, &[stats_of(&diagram)])?;
    Ok(())
}

fn scene(file: &Path, out: &Path, drag: &[Vector2<f64>]) -> Result<()> {
    tracing::info!(file = %file.display(), out = %out.display(), "scene");
    let text = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let spec = SceneFile::from_json(&text).with_context(|| format!("parsing {}", file.display()))?;
    let (mut diagram, _) = spec.build()?;
    apply_drag(&mut diagram, drag)?;
    write_artifact(out, diagram.to_svg().as_bytes())?;
    let params = json!({ "file": file.to_string_lossy(), "drag": points_json(drag) });
    manifest::write_sidecar(out, "scene", &params, &[stats_of(&diagram)])?;
    Ok(())
}

fn report() -> Result<()> {
    let examples: Vec<_> = Example::ALL
        .iter()
        .map(|ex| json!({ "name": ex.name(), "mount": ex.mount_id() }))
        .collect();
    let obj = json!({
        "version": geodiag::VERSION,
        "code_rev": manifest::current_git_rev(),
        "examples": examples,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn apply_drag(diagram: &mut Diagram, drag: &[Vector2<f64>]) -> Result<()> {
    if drag.is_empty() {
        return Ok(());
    }
    let line = diagram
        .drag_first_to(drag)
        .context("diagram has no rotatable line to drag")?;
    tracing::info!(line = line.0, moves = drag.len(), "dragged");
    Ok(())
}

fn write_artifact(out: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, bytes).with_context(|| format!("writing {}", out.display()))
}

fn stats_of(diagram: &Diagram) -> Stats {
    Stats {
        elements: diagram.graph.surface().len(),
        rotatable_lines: diagram.rotatable_lines().len(),
    }
}

fn points_json(points: &[Vector2<f64>]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

/// Parse `x,y` into a logical point.
fn parse_point(s: &str) -> std::result::Result<Vector2<f64>, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or_else(|| format!("invalid coordinate `{v}`"))
    };
    Ok(Vector2::new(parse(x)?, parse(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_point_accepts_pairs() {
        assert_eq!(parse_point("5,5").unwrap(), Vector2::new(5.0, 5.0));
        assert_eq!(parse_point(" 4.5 , -1 ").unwrap(), Vector2::new(4.5, -1.0));
        assert!(parse_point("5").is_err());
        assert!(parse_point("a,1").is_err());
        assert!(parse_point("inf,1").is_err());
    }

    #[test]
    fn svg_command_writes_artifact_and_manifest() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("annotated.svg");
        svg(Example::Annotated, &out, &[Vector2::new(5.0, 5.0)]).unwrap();
        let body = fs::read_to_string(&out).unwrap();
        assert!(body.contains("90°"));
        assert!(dir.path().join("nested").join("annotated.manifest.json").exists());
    }

    #[test]
    fn dragging_a_static_block_fails() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("plot.svg");
        assert!(svg(Example::Plot, &out, &[Vector2::new(1.0, 1.0)]).is_err());
    }

    #[test]
    fn page_command_mounts_all_blocks() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("index.html");
        page(&out).unwrap();
        let html = fs::read_to_string(&out).unwrap();
        assert_eq!(html.matches("<svg ").count(), Example::ALL.len());
    }

    #[test]
    fn scene_command_reads_json() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scene.json");
        fs::write(
            &file,
            r#"{ "points": [ { "name": "o", "x": 2, "y": 2, "text": "o" },
                             { "name": "p", "x": 4, "y": 2, "text": "p" } ],
                 "lines": [ { "start": "o", "end": "p", "rotatable": true } ] }"#,
        )
        .unwrap();
        let out = dir.path().join("scene.svg");
        scene(&file, &out, &[Vector2::new(2.0, 5.0)]).unwrap();
        let body = fs::read_to_string(&out).unwrap();
        // p rotated to (2, 4): pixel (100, 220).
        assert!(body.contains(r#"cx="100" cy="220""#));
    }
}
