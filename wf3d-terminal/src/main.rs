/// WF3D Terminal Demo - Wireframe Cube
///
/// A translating viewpoint looks at a static cube drawn as a wireframe.
/// Controls:
///   - W/S: move forward / back
///   - A/D: move left / right
///   - Space/C: move up / down
///   - Mouse wheel: zoom (field of view)
///   - Q/ESC: quit

use log::info;
use nalgebra::Point3;
use std::io;
use wf3d_core::Cube;
use wf3d_terminal::{AppConfig, TerminalApp};

fn main() -> io::Result<()> {
    env_logger::init();

    let cube = Cube::new(Point3::new(0.0, 0.0, 0.0), 10.0)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    info!(
        "demo scene: cube at {:?}, side {}",
        cube.anchor(),
        cube.side_length()
    );

    let scene = vec![cube.into_polygon()];
    let mut app = TerminalApp::new(scene, AppConfig::default())?;
    app.run()
}
