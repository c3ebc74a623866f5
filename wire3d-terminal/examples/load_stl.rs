/// Example: Load an STL file and render it as a wireframe in the terminal
///
/// Usage: cargo run --example load_stl -- path/to/file.stl

use anyhow::Context;
use std::env;
use std::fs;
use wire3d_core::{stl, Camera, RenderOptions, SolidKind};
use wire3d_terminal::TerminalApp;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let mesh = match args.get(1) {
        Some(stl_path) => {
            println!("Loading STL file: {}", stl_path);
            let data = fs::read(stl_path)
                .with_context(|| format!("failed to read STL file {stl_path}"))?;
            stl::parse_stl(&data).context("failed to parse STL")?
        }
        None => {
            eprintln!("Usage: {} <stl-file>", args[0]);
            eprintln!("\nNo STL file provided, using default icosahedron...");
            SolidKind::Icosahedron.mesh(2.0)
        }
    };

    println!(
        "Loaded {} vertices and {} edges",
        mesh.vertices().len(),
        mesh.edges().len()
    );
    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(mesh, Camera::new(0.0, 0.0, 5.0), RenderOptions::default())?;
    app.run()?;

    Ok(())
}
