/// Terminal front-end for the wireframe scene
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use wire3d_core::{Camera, GeometryError, Mesh, ProjectionMode, RenderOptions, Scene};

pub mod renderer;

pub use renderer::AsciiRenderer;

/// Scene rotation around three axes (in radians)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Orientation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Orientation {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

/// Rebuild `scene` with `mesh` under `orientation`, applied Z, then Y, then X.
pub fn stage(scene: &mut Scene, mesh: &Mesh, orientation: Orientation) {
    scene.reset();
    scene.rotate_z(orientation.z);
    scene.rotate_y(orientation.y);
    scene.rotate_x(orientation.x);
    scene.add(mesh.clone());
}

/// Main application struct for terminal wireframe rendering
pub struct TerminalApp {
    mesh: Mesh,
    scene: Scene,
    orientation: Orientation,
    options: RenderOptions,
    renderer: AsciiRenderer,
    running: bool,
    status: Option<GeometryError>,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh, camera: Camera, options: RenderOptions) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let mut scene = Scene::new();
        scene.add_camera(camera);

        Ok(Self {
            mesh,
            scene,
            orientation: Orientation::new(0.3, 0.3, 0.0),
            options,
            renderer: AsciiRenderer::new(width as usize, height as usize),
            running: true,
            status: None,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.update();

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.orientation.rotate(0.1, 0.0, 0.0);
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.orientation.rotate(-0.1, 0.0, 0.0);
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.orientation.rotate(0.0, -0.1, 0.0);
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.orientation.rotate(0.0, 0.1, 0.0);
                }
                KeyCode::Char('e') => {
                    self.orientation.rotate(0.0, 0.0, 0.1);
                }
                KeyCode::Char('r') => {
                    self.orientation.rotate(0.0, 0.0, -0.1);
                }
                KeyCode::Char('v') => {
                    self.options.vertices = !self.options.vertices;
                }
                KeyCode::Char('p') => {
                    self.options.mode = match self.options.mode {
                        ProjectionMode::Perspective => ProjectionMode::Orthographic,
                        ProjectionMode::Orthographic => ProjectionMode::Perspective,
                    };
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn update(&mut self) {
        // Continuous slow rotation for demo effect
        self.orientation.rotate(0.01, 0.015, 0.0);
        stage(&mut self.scene, &self.mesh, self.orientation);
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();

        let camera = self.scene.camera(0).copied().unwrap_or_default();
        self.status = match self.scene.render(&camera, &mut self.renderer, self.options) {
            Ok(()) => None,
            Err(e) => {
                if self.status.as_ref() != Some(&e) {
                    tracing::warn!(error = %e, "frame not rendered");
                }
                Some(e)
            }
        };

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        let mode = match self.options.mode {
            ProjectionMode::Perspective => "perspective",
            ProjectionMode::Orthographic => "ortho",
        };
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Wire3D | FPS: {:.1} | {} | WASD=Rotate E/R=Roll V=Vertices P=Projection Q=Quit",
                self.fps, mode
            )),
            ResetColor
        )?;

        if let Some(e) = &self.status {
            queue!(
                stdout,
                cursor::MoveTo(0, 1),
                SetForegroundColor(Color::Red),
                Print(e.to_string()),
                ResetColor
            )?;
        }

        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire3d_core::{RecordingRenderer, SolidKind};

    #[test]
    fn test_orientation_rotate() {
        let mut state = Orientation::default();
        assert_eq!(state, Orientation::new(0.0, 0.0, 0.0));

        state.rotate(0.1, 0.2, 0.3);
        assert!((state.x - 0.1).abs() < 1e-6);
        assert!((state.y - 0.2).abs() < 1e-6);
        assert!((state.z - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_stage_replaces_previous_frame() {
        let mesh = SolidKind::Octahedron.mesh(1.0);
        let mut scene = Scene::new();
        scene.add_camera(Camera::new(0.0, 0.0, 5.0));

        stage(&mut scene, &mesh, Orientation::new(0.1, 0.2, 0.3));
        stage(&mut scene, &mesh, Orientation::new(0.4, 0.5, 0.6));

        assert_eq!(scene.objects().len(), 1);
        assert_eq!(scene.cameras().len(), 1);

        let mut recorder = RecordingRenderer::new();
        scene
            .render(&scene.cameras()[0], &mut recorder, RenderOptions::default())
            .unwrap();
        assert_eq!(recorder.lines().count(), 12);
    }

    #[test]
    fn test_stage_draws_into_grid() {
        let mesh = SolidKind::Cube.mesh(2.0);
        let mut scene = Scene::new();
        stage(&mut scene, &mesh, Orientation::default());

        let mut grid = AsciiRenderer::new(80, 40);
        scene
            .render(&Camera::new(0.0, 0.0, 5.0), &mut grid, RenderOptions::default())
            .unwrap();
        assert!(grid.rows().any(|row| row.contains('-')));
        assert!(grid.rows().any(|row| row.contains('|')));
    }
}
