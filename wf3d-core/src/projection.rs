/// Angle-based perspective projection from world space to screen space
use nalgebra::Point3;

/// A projected position in raster coordinates: origin top-left, y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Outcome of projecting one vertex for one frame.
///
/// The two non-visible cases are recoverable per-frame conditions, not
/// errors: callers skip every edge touching such a vertex and try again
/// next frame once the viewpoint has moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// In front of the viewpoint; the formula produced a finite point.
    Visible(ScreenPoint),
    /// Behind the viewpoint (negative depth offset). The raw arctangent
    /// would mirror the point onto the screen, so it must not be drawn.
    Behind,
    /// Depth offset is exactly zero; the angle ratio is undefined.
    Degenerate,
}

impl Projection {
    pub fn screen_point(&self) -> Option<ScreenPoint> {
        match self {
            Projection::Visible(point) => Some(*point),
            Projection::Behind | Projection::Degenerate => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Projection::Visible(_))
    }
}

/// Project a world vertex onto the screen as seen from `viewpoint_position`.
///
/// The mapping is angle-based rather than matrix-based: the offsets from
/// the viewpoint are converted to angles with `atan(dx / dz)` and
/// `atan(dy / dz)`, and each angle's share of the full field of view
/// (not the half fov) picks the position across the half screen:
///
/// ```text
/// screen_x =  (x_angle_deg / fov_deg) * (width  / 2) + (width  / 2)
/// screen_y = -(y_angle_deg / fov_deg) * (height / 2) + (height / 2)
/// ```
///
/// Y is inverted because world space is y-up while the screen is y-down.
/// A vertex with zero depth offset reports [`Projection::Degenerate`]
/// and one behind the viewpoint reports [`Projection::Behind`]; the
/// function never divides in either case, so it cannot return NaN or
/// infinity.
pub fn project(
    vertex: &Point3<f64>,
    viewpoint_position: &Point3<f64>,
    fov_degrees: f64,
    width: u32,
    height: u32,
) -> Projection {
    let dx = vertex.x - viewpoint_position.x;
    let dy = vertex.y - viewpoint_position.y;
    let dz = vertex.z - viewpoint_position.z;

    if dz == 0.0 {
        return Projection::Degenerate;
    }
    if dz < 0.0 {
        return Projection::Behind;
    }

    let x_angle = (dx / dz).atan().to_degrees();
    let y_angle = (dy / dz).atan().to_degrees();

    let half_width = width as f64 / 2.0;
    let half_height = height as f64 / 2.0;
    let x = (x_angle / fov_degrees) * half_width + half_width;
    let y = -(y_angle / fov_degrees) * half_height + half_height;

    Projection::Visible(ScreenPoint::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn origin() -> Point3<f64> {
        Point3::new(0.0, 0.0, 0.0)
    }

    #[test]
    fn test_straight_ahead_maps_to_screen_center() {
        for distance in [0.5, 5.0, 5000.0] {
            let vertex = Point3::new(0.0, 0.0, distance);
            match project(&vertex, &origin(), 40.0, 1000, 1000) {
                Projection::Visible(point) => {
                    assert_eq!(point.x, 500.0);
                    assert_eq!(point.y, 500.0);
                }
                other => panic!("expected visible projection, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_scale_invariance_of_angle_ratio() {
        let base = Point3::new(3.0, -2.0, 7.0);
        let reference = project(&base, &origin(), 60.0, 1000, 800)
            .screen_point()
            .unwrap();

        for k in [0.25, 2.0, 1000.0] {
            let scaled = Point3::new(base.x * k, base.y * k, base.z * k);
            let point = project(&scaled, &origin(), 60.0, 1000, 800)
                .screen_point()
                .unwrap();
            assert!((point.x - reference.x).abs() < EPS);
            assert!((point.y - reference.y).abs() < EPS);
        }
    }

    #[test]
    fn test_zero_depth_is_degenerate() {
        let viewpoint = Point3::new(1.0, 2.0, 3.0);
        let vertex = Point3::new(9.0, 9.0, 3.0);
        assert_eq!(
            project(&vertex, &viewpoint, 90.0, 1000, 1000),
            Projection::Degenerate,
        );
    }

    #[test]
    fn test_behind_viewpoint_is_flagged() {
        let vertex = Point3::new(0.0, 0.0, -1.0);
        assert_eq!(
            project(&vertex, &origin(), 90.0, 1000, 1000),
            Projection::Behind,
        );
    }

    #[test]
    fn test_y_axis_is_inverted() {
        // A vertex above the viewpoint's forward axis lands in the upper
        // screen half (smaller y in raster coordinates).
        let above = project(&Point3::new(0.0, 2.0, 5.0), &origin(), 90.0, 1000, 1000)
            .screen_point()
            .unwrap();
        assert!(above.y < 500.0);

        let below = project(&Point3::new(0.0, -2.0, 5.0), &origin(), 90.0, 1000, 1000)
            .screen_point()
            .unwrap();
        assert!(below.y > 500.0);
    }

    #[test]
    fn test_full_fov_convention() {
        // A 45-degree offset under fov 90 sits halfway between the center
        // and the screen edge: 500 + (45 / 90) * 500 = 750.
        let vertex = Point3::new(5.0, 0.0, 5.0);
        let point = project(&vertex, &origin(), 90.0, 1000, 1000)
            .screen_point()
            .unwrap();
        assert!((point.x - 750.0).abs() < EPS);
        assert!((point.y - 500.0).abs() < EPS);
    }

    #[test]
    fn test_viewpoint_offset_is_subtracted() {
        let viewpoint = Point3::new(-10.0, 0.0, -10.0);
        let vertex = Point3::new(-10.0, 0.0, 20.0);
        let point = project(&vertex, &viewpoint, 40.0, 1000, 1000)
            .screen_point()
            .unwrap();
        assert_eq!(point.x, 500.0);
        assert_eq!(point.y, 500.0);
    }
}
