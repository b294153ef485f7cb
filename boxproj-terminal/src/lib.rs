/// Terminal-based wireframe viewer for the cube projection pipeline
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use boxproj_core::{render_scene, BoxPose, CameraPose};

pub mod renderer;

pub use renderer::WireframePlot;

const ROTATE_STEP_DEG: f64 = 5.0;
const ZOOM_STEP: f64 = 1.1;

/// Main application struct for the interactive cube viewer
pub struct TerminalApp {
    box_pose: BoxPose,
    camera: CameraPose,
    plot: WireframePlot,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            box_pose: BoxPose::default(),
            camera: CameraPose::default(),
            plot: WireframePlot::new(width as usize, height as usize),
            running: true,
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
                    self.box_pose.rotation.x += ROTATE_STEP_DEG;
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.box_pose.rotation.x -= ROTATE_STEP_DEG;
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.box_pose.rotation.y -= ROTATE_STEP_DEG;
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.box_pose.rotation.y += ROTATE_STEP_DEG;
                }
                KeyCode::Char('e') => {
                    self.box_pose.rotation.z += ROTATE_STEP_DEG;
                }
                KeyCode::Char('r') => {
                    self.box_pose.rotation.z -= ROTATE_STEP_DEG;
                }
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.camera.zoom *= ZOOM_STEP;
                }
                KeyCode::Char('-') => {
                    self.camera.zoom /= ZOOM_STEP;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn update(&mut self) {
        // Continuous slow rotation for demo effect
        self.box_pose.rotation.x += 0.4;
        self.box_pose.rotation.y += 0.6;
    }

    fn render(&mut self) -> io::Result<()> {
        self.plot.clear();

        let status = match render_scene(&self.box_pose, &self.camera) {
            Ok(points) => {
                self.plot.plot(&points);
                None
            }
            Err(err) => Some(err.to_string()),
        };

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.plot.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "BoxProj Viewer | FPS: {:.1} | Zoom: {:.2} | WASD/Arrows=Rotate E/R=Roll +/-=Zoom Q=Quit",
                self.fps, self.camera.zoom
            )),
            ResetColor
        )?;

        if let Some(message) = status {
            queue!(
                stdout,
                cursor::MoveTo(0, 1),
                SetForegroundColor(Color::Red),
                Print(format!("degenerate projection: {}", message)),
                ResetColor
            )?;
        }

        stdout.flush()?;
        Ok(())
    }
}
