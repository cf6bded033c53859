/// Terminal frontend for the WF3D wireframe visualizer
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseEvent,
        MouseEventKind,
    },
    execute, queue,
    style::Color,
    terminal,
};
use log::{debug, info};
use nalgebra::Point3;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use wf3d_core::{MoveInput, Polygon, Rgb, Viewpoint, ViewpointConfig, WireframeRenderer};

pub mod canvas;

pub use canvas::Canvas;

/// Everything the frontend needs to know up front, built once by the
/// entry point and passed down. No ambient globals.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upper bound on frames per second.
    pub fps_cap: u32,
    /// Initial field of view in degrees.
    pub fov: f64,
    /// Initial viewpoint position.
    pub position: Point3<f64>,
    /// Wireframe stroke color and width.
    pub stroke: Rgb,
    pub stroke_width: u32,
    pub viewpoint: ViewpointConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fps_cap: 144,
            fov: 90.0,
            position: Point3::new(-10.0, 0.0, -10.0),
            stroke: Rgb(255, 255, 255),
            stroke_width: 2,
            viewpoint: ViewpointConfig::default(),
        }
    }
}

/// Input gathered from the event queue for one frame.
#[derive(Debug, Default, Clone, Copy)]
struct FrameInput {
    movement: MoveInput,
    scroll: i32,
    quit: bool,
}

/// Main application struct driving the frame loop.
pub struct TerminalApp {
    scene: Vec<Polygon>,
    viewpoint: Viewpoint,
    renderer: WireframeRenderer,
    canvas: Canvas,
    fps_cap: u32,
    running: bool,
    dt: f64,
    last_frame: Instant,
    frame_count: u32,
    fps: f64,
}

impl TerminalApp {
    pub fn new(scene: Vec<Polygon>, config: AppConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        info!(
            "starting with {} polygon(s) on a {width}x{height} canvas",
            scene.len()
        );

        Ok(Self {
            scene,
            viewpoint: Viewpoint::new(config.position, config.fov, config.viewpoint),
            renderer: WireframeRenderer::new(config.stroke, config.stroke_width),
            canvas: Canvas::new(width as usize, height as usize),
            fps_cap: config.fps_cap.max(1),
            running: true,
            // Fixed small first-frame delta so startup time never turns
            // into a movement spike.
            dt: 1.0 / config.fps_cap.max(1) as f64,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(
            stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_secs(1) / self.fps_cap;

        while self.running {
            let frame_start = Instant::now();

            let input = self.poll_input()?;
            if input.quit {
                debug!("quit requested");
                self.running = false;
                break;
            }

            self.update(&input);
            self.render()?;

            // Frame pacing
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // One measured delta per frame, passed explicitly to consumers.
            self.dt = frame_start.elapsed().as_secs_f64();

            // Update FPS counter
            self.frame_count += 1;
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f64 / (now - self.last_frame).as_secs_f64();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    /// Drain the event queue into the per-frame input contract: six
    /// movement flags and one signed scroll notch count.
    fn poll_input(&mut self) -> io::Result<FrameInput> {
        let mut input = FrameInput::default();

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(KeyEvent { code, .. }) => match code {
                    KeyCode::Char('q') | KeyCode::Esc => input.quit = true,
                    KeyCode::Char('w') | KeyCode::Up => input.movement.forward = true,
                    KeyCode::Char('s') | KeyCode::Down => input.movement.back = true,
                    KeyCode::Char('a') | KeyCode::Left => input.movement.left = true,
                    KeyCode::Char('d') | KeyCode::Right => input.movement.right = true,
                    KeyCode::Char(' ') => input.movement.up = true,
                    KeyCode::Char('c') => input.movement.down = true,
                    _ => {}
                },
                Event::Mouse(MouseEvent { kind, .. }) => match kind {
                    MouseEventKind::ScrollUp => input.scroll += 1,
                    MouseEventKind::ScrollDown => input.scroll -= 1,
                    _ => {}
                },
                Event::Resize(width, height) => {
                    debug!("resize to {width}x{height}");
                    self.canvas = Canvas::new(width as usize, height as usize);
                }
                _ => {}
            }
        }

        Ok(input)
    }

    fn update(&mut self, input: &FrameInput) {
        self.viewpoint.apply_movement(self.dt, &input.movement);
        if input.scroll != 0 {
            self.viewpoint.adjust_fov(self.dt, input.scroll);
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let commands = self.renderer.render(
            &self.scene,
            &self.viewpoint,
            self.canvas.width() as u32,
            self.canvas.height() as u32,
        );

        self.canvas.clear();
        for command in &commands {
            self.canvas.draw_line(command);
        }

        // Status overlays: fov, position (2 decimals), measured fps.
        let position = self.viewpoint.position();
        self.canvas.overlay_text(
            0,
            &format!("FOV {} deg.", self.viewpoint.fov().round()),
            Color::Yellow,
        );
        self.canvas.overlay_text(
            1,
            &format!(
                "POS [{:.2}, {:.2}, {:.2}]",
                position.x, position.y, position.z
            ),
            Color::Yellow,
        );
        self.canvas
            .overlay_text(2, &format!("FPS {:.2}", self.fps), Color::Yellow);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.canvas.present(&mut stdout)?;
        stdout.flush()?;
        Ok(())
    }
}
