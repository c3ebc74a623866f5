/// Wire3D Terminal Demo - Rotating Platonic solids
///
/// Controls:
///   - WASD / Arrow Keys: Rotate the solid
///   - E/R: Roll rotation
///   - V: Toggle vertex markers
///   - P: Toggle orthographic / weak perspective
///   - Q/ESC: Quit

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};
use wire3d_core::{Camera, ProjectionMode, RecordingRenderer, RenderOptions, Scene, SolidKind};
use wire3d_terminal::{stage, Orientation, TerminalApp};

#[derive(Parser)]
#[command(name = "wire3d-terminal", about = "Wireframe Platonic solids in the terminal")]
struct Cli {
    /// Solid to draw (tetrahedron, octahedron, cube, icosahedron, dodecahedron)
    #[arg(long, default_value = "cube")]
    solid: SolidKind,

    /// Edge size of the solid
    #[arg(long, default_value_t = 2.0)]
    size: f32,

    /// Camera position, added to every vertex before projection
    #[arg(
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        default_values_t = [0.0, 0.0, 5.0],
        allow_negative_numbers = true
    )]
    camera: Vec<f32>,

    /// Use orthographic instead of weak-perspective projection
    #[arg(long)]
    ortho: bool,

    /// Draw vertex markers and index labels
    #[arg(long)]
    vertices: bool,

    /// Do not draw edges
    #[arg(long)]
    no_edges: bool,

    /// Print the draw calls of a single frame instead of starting the viewer
    #[arg(long)]
    dump: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file. The interactive viewer owns the terminal, so
    /// without it logs are dropped while the viewer runs.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Where log lines go
#[derive(Debug, PartialEq)]
enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

/// `--dump` leaves the terminal alone, so it logs to stderr unless a file is
/// given. The viewer never logs to the terminal it draws on.
fn log_target(dump: bool, log_file: Option<&Path>) -> LogTarget {
    match (log_file, dump) {
        (Some(path), _) => LogTarget::File(path.to_path_buf()),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Discard,
    }
}

fn init_logging(verbose: bool, target: LogTarget) -> anyhow::Result<()> {
    let filter = if verbose { "debug" } else { "info" };
    let writer = match target {
        LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogTarget::File(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        LogTarget::Discard => BoxMakeWriter::new(std::io::sink),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, log_target(cli.dump, cli.log_file.as_deref()))?;

    let camera = match cli.camera.as_slice() {
        &[x, y, z] => Camera::new(x, y, z),
        other => anyhow::bail!("expected three camera coordinates, got {}", other.len()),
    };
    let options = RenderOptions {
        vertices: cli.vertices,
        edges: !cli.no_edges,
        mode: if cli.ortho {
            ProjectionMode::Orthographic
        } else {
            ProjectionMode::Perspective
        },
    };
    let mesh = cli.solid.mesh(cli.size);
    tracing::info!(solid = %cli.solid, size = cli.size, "starting");

    if cli.dump {
        let mut scene = Scene::new();
        stage(&mut scene, &mesh, Orientation::default());
        let mut recorder = RecordingRenderer::new();
        scene.render(&camera, &mut recorder, options)?;
        for call in recorder.calls() {
            println!("{call}");
        }
        return Ok(());
    }

    let mut app = TerminalApp::new(mesh, camera, options)?;
    app.run()?;

    println!("Thank you for using Wire3D!");
    Ok(())
}
