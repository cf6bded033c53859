/// Viewpoint state and per-frame movement/zoom updates
use nalgebra::{Point3, Vector3};

/// Lowest and highest field of view the viewpoint will ever report.
pub const FOV_MIN: f64 = 1.0;
pub const FOV_MAX: f64 = 180.0;

/// Movement flags for one frame, as reported by the input collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveInput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Movement and zoom speeds, in world units (or degrees) per second.
#[derive(Debug, Clone, Copy)]
pub struct ViewpointConfig {
    pub move_speed: f64,
    pub zoom_speed: f64,
}

impl Default for ViewpointConfig {
    fn default() -> Self {
        Self {
            move_speed: 100.0,
            zoom_speed: 100.0,
        }
    }
}

/// The observer: a position and a field of view. It translates and zooms
/// but never rotates, so there is no orientation state.
///
/// Invariant: `FOV_MIN <= fov <= FOV_MAX` at all times, enforced by every
/// mutation including construction.
#[derive(Debug, Clone)]
pub struct Viewpoint {
    position: Point3<f64>,
    fov: f64,
    config: ViewpointConfig,
}

impl Viewpoint {
    pub fn new(position: Point3<f64>, fov_degrees: f64, config: ViewpointConfig) -> Self {
        Self {
            position,
            fov: fov_degrees.clamp(FOV_MIN, FOV_MAX),
            config,
        }
    }

    /// Translate the viewpoint for one frame.
    ///
    /// Each active direction contributes `move_speed * dt` on its own axis,
    /// so opposing flags cancel and diagonals are deliberately not
    /// normalized (they move sqrt(2) times faster, as the reference does).
    pub fn apply_movement(&mut self, dt_seconds: f64, input: &MoveInput) {
        let step = self.config.move_speed * dt_seconds;
        let axis = |positive: bool, negative: bool| -> f64 {
            (positive as i8 - negative as i8) as f64
        };

        self.position += Vector3::new(
            axis(input.right, input.left) * step,
            axis(input.up, input.down) * step,
            axis(input.forward, input.back) * step,
        );
    }

    /// Apply one frame of mouse-wheel zoom. Positive notches zoom in
    /// (narrower fov). The result is clamped, never an error.
    pub fn adjust_fov(&mut self, dt_seconds: f64, scroll_delta: i32) {
        self.fov -= self.config.zoom_speed * scroll_delta as f64 * dt_seconds;
        self.fov = self.fov.clamp(FOV_MIN, FOV_MAX);
    }

    /// Snapshot of the current position.
    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    /// Current field of view in degrees, always within `[FOV_MIN, FOV_MAX]`.
    pub fn fov(&self) -> f64 {
        self.fov
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewpoint_at_origin() -> Viewpoint {
        Viewpoint::new(
            Point3::new(0.0, 0.0, 0.0),
            90.0,
            ViewpointConfig::default(),
        )
    }

    #[test]
    fn test_forward_moves_z_only() {
        let mut vp = viewpoint_at_origin();
        let input = MoveInput {
            forward: true,
            ..MoveInput::none()
        };
        vp.apply_movement(1.0, &input);
        assert_eq!(vp.position(), Point3::new(0.0, 0.0, 100.0));
    }

    #[test]
    fn test_opposing_directions_cancel() {
        let mut vp = viewpoint_at_origin();
        let input = MoveInput {
            left: true,
            right: true,
            up: true,
            down: true,
            ..MoveInput::none()
        };
        vp.apply_movement(0.5, &input);
        assert_eq!(vp.position(), Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let mut vp = viewpoint_at_origin();
        let input = MoveInput {
            forward: true,
            right: true,
            ..MoveInput::none()
        };
        vp.apply_movement(1.0, &input);
        // Full speed on both axes: sqrt(2) * 100 along the diagonal.
        assert_eq!(vp.position(), Point3::new(100.0, 0.0, 100.0));
    }

    #[test]
    fn test_movement_scales_with_dt() {
        let mut vp = viewpoint_at_origin();
        let input = MoveInput {
            down: true,
            ..MoveInput::none()
        };
        vp.apply_movement(0.01, &input);
        assert!((vp.position().y - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_fov_clamps_low() {
        let mut vp = viewpoint_at_origin();
        // Zoom in hard: 100 deg/s * 10 notches * 1s = 1000 degrees inward.
        vp.adjust_fov(1.0, 10);
        assert_eq!(vp.fov(), FOV_MIN);
    }

    #[test]
    fn test_fov_clamps_high() {
        let mut vp = viewpoint_at_origin();
        vp.adjust_fov(1.0, -10);
        assert_eq!(vp.fov(), FOV_MAX);
    }

    #[test]
    fn test_fov_stays_in_range_for_arbitrary_sequences() {
        let mut vp = viewpoint_at_origin();
        let notches = [3, -7, 100, -100, 0, 1, -1, 55, -2, 9];
        for (i, &scroll) in notches.iter().enumerate() {
            vp.adjust_fov(0.1 + i as f64 * 0.37, scroll);
            assert!(vp.fov() >= FOV_MIN && vp.fov() <= FOV_MAX);
        }
    }

    #[test]
    fn test_fov_clamped_at_construction() {
        let vp = Viewpoint::new(
            Point3::new(0.0, 0.0, 0.0),
            500.0,
            ViewpointConfig::default(),
        );
        assert_eq!(vp.fov(), FOV_MAX);
    }

    #[test]
    fn test_zero_scroll_is_a_no_op() {
        let mut vp = viewpoint_at_origin();
        vp.adjust_fov(1.0, 0);
        assert_eq!(vp.fov(), 90.0);
    }
}
