/// Wireframe renderer: polygons + viewpoint -> screen-space line commands
use log::trace;

use crate::geometry::Polygon;
use crate::projection::{project, Projection, ScreenPoint};
use crate::viewpoint::Viewpoint;

/// Stroke color, kept platform-neutral so frontends map it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// One line-draw request for the drawing-surface collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCommand {
    pub start: ScreenPoint,
    pub end: ScreenPoint,
    pub color: Rgb,
    pub width: u32,
}

/// How projected vertices are connected into line segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Connect each polygon's explicit edge-index pairs, independently of
    /// every other polygon.
    #[default]
    EdgeList,
    /// Visual-parity mode reproducing the original demo: every projected
    /// vertex, across all polygons, is connected to every vertex projected
    /// before it in the frame. Quadratic and draws spurious lines between
    /// unrelated polygons; kept only for comparison against the original.
    ChainedLegacy,
}

/// Turns a scene of polygons into line commands for the current frame.
#[derive(Debug, Clone)]
pub struct WireframeRenderer {
    color: Rgb,
    stroke_width: u32,
    mode: RenderMode,
}

impl WireframeRenderer {
    pub fn new(color: Rgb, stroke_width: u32) -> Self {
        Self {
            color,
            stroke_width,
            mode: RenderMode::EdgeList,
        }
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Produce the frame's line segments.
    ///
    /// Vertices flagged behind-the-viewpoint or with zero depth offset
    /// drop every edge they touch for this frame; the rest of the scene
    /// still draws.
    pub fn render(
        &self,
        polygons: &[Polygon],
        viewpoint: &Viewpoint,
        width: u32,
        height: u32,
    ) -> Vec<LineCommand> {
        match self.mode {
            RenderMode::EdgeList => self.render_edge_list(polygons, viewpoint, width, height),
            RenderMode::ChainedLegacy => self.render_chained(polygons, viewpoint, width, height),
        }
    }

    fn render_edge_list(
        &self,
        polygons: &[Polygon],
        viewpoint: &Viewpoint,
        width: u32,
        height: u32,
    ) -> Vec<LineCommand> {
        let position = viewpoint.position();
        let fov = viewpoint.fov();
        let mut commands = Vec::new();

        for polygon in polygons {
            let projected: Vec<Projection> = polygon
                .vertices()
                .iter()
                .map(|vertex| project(vertex, &position, fov, width, height))
                .collect();

            for &[a, b] in polygon.edges() {
                match (projected[a].screen_point(), projected[b].screen_point()) {
                    (Some(start), Some(end)) => commands.push(LineCommand {
                        start,
                        end,
                        color: self.color,
                        width: self.stroke_width,
                    }),
                    _ => trace!("skipping edge [{a}, {b}]: endpoint not visible"),
                }
            }
        }

        commands
    }

    fn render_chained(
        &self,
        polygons: &[Polygon],
        viewpoint: &Viewpoint,
        width: u32,
        height: u32,
    ) -> Vec<LineCommand> {
        let position = viewpoint.position();
        let fov = viewpoint.fov();
        let mut points: Vec<ScreenPoint> = Vec::new();
        let mut commands = Vec::new();

        for polygon in polygons {
            for vertex in polygon.vertices() {
                let Some(point) = project(vertex, &position, fov, width, height).screen_point()
                else {
                    continue;
                };
                for &earlier in &points {
                    commands.push(LineCommand {
                        start: earlier,
                        end: point,
                        color: self.color,
                        width: self.stroke_width,
                    });
                }
                points.push(point);
            }
        }

        commands
    }
}
