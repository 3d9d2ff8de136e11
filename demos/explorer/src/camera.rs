//! Minimal orbit camera for the surface view
use nalgebra::{Rotation3, Vector3};

/// Per-pixel rotation speed, eyeballed for pleasant UI
const ROTATE_SPEED: f32 = 0.01;

/// Orbit camera storing yaw, pitch, and zoom
///
/// The camera always looks at the center of the scene.  Dragging spins the
/// model about its vertical axis and tilts it toward or away from the viewer;
/// scrolling zooms.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    yaw: f32,
    pitch: f32,
    scale: f32,
}

impl Default for Camera {
    fn default() -> Self {
        // Three-quarter view, slightly above the horizon
        Camera {
            yaw: 0.6,
            pitch: -1.05,
            scale: 1.0,
        }
    }
}

impl Camera {
    /// Model-to-view rotation for the current yaw and pitch
    pub fn rotation(&self) -> Rotation3<f32> {
        let yaw = Rotation3::from_axis_angle(&Vector3::z_axis(), self.yaw);
        let pitch = Rotation3::from_axis_angle(&Vector3::x_axis(), self.pitch);
        pitch * yaw
    }

    /// Applies a drag of `(dx, dy)` screen points
    ///
    /// Returns `true` if the camera has changed
    pub fn drag(&mut self, dx: f32, dy: f32) -> bool {
        let prev = (self.yaw, self.pitch);
        self.yaw = (self.yaw - dx * ROTATE_SPEED) % std::f32::consts::TAU;
        self.pitch = (self.pitch + dy * ROTATE_SPEED)
            .clamp(-std::f32::consts::FRAC_PI_2, 0.0);
        (self.yaw, self.pitch) != prev
    }

    /// Applies a scroll-wheel zoom
    ///
    /// Returns `true` if the camera has changed
    pub fn zoom(&mut self, scroll: f32) -> bool {
        let prev = self.scale;
        if scroll != 0.0 {
            self.scale = (self.scale * (scroll / 100.0).exp2()).clamp(0.2, 5.0);
        }
        self.scale != prev
    }

    /// Current zoom factor
    pub fn scale(&self) -> f32 {
        self.scale
    }
}
