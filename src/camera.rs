use glam::{Mat4, Vec3};
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

pub const ORBIT_SPEED: f32 = 0.005;
pub const ZOOM_SPEED: f32 = 0.5;
pub const MIN_DISTANCE: f32 = 3.0;
pub const MAX_DISTANCE: f32 = 60.0;
const PITCH_LIMIT: f32 = 1.5;

/// Orbit camera around the origin: pointer drag rotates, scroll zooms.
/// Starts at (5, 5, 10) looking at the polytope.
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
    aspect: f32,
    fov_y: f32,
    dragging: bool,
    last_cursor: Option<(f64, f64)>,
}

impl OrbitCamera {
    pub fn new(aspect: f32) -> Self {
        let position = Vec3::new(5.0, 5.0, 10.0);
        let offset = position; // target is the origin
        let distance = offset.length();

        Self {
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).asin(),
            distance,
            target: Vec3::ZERO,
            aspect,
            fov_y: std::f32::consts::FRAC_PI_4,
            dragging: false,
            last_cursor: None,
        }
    }

    pub fn position(&self) -> Vec3 {
        let direction = Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        );
        self.target + direction * self.distance
    }

    pub fn view_projection(&self) -> Mat4 {
        let projection = Mat4::perspective_rh(self.fov_y, self.aspect, 0.1, 200.0);
        let view = Mat4::look_at_rh(self.position(), self.target, Vec3::Y);
        projection * view
    }

    /// Resize only touches the aspect ratio; orbit state is untouched.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state.is_pressed();
            if !self.dragging {
                self.last_cursor = None;
            }
        }
    }

    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        if self.dragging {
            if let Some((last_x, last_y)) = self.last_cursor {
                self.yaw -= (x - last_x) as f32 * ORBIT_SPEED;
                self.pitch = (self.pitch + (y - last_y) as f32 * ORBIT_SPEED)
                    .clamp(-PITCH_LIMIT, PITCH_LIMIT);
            }
        }
        self.last_cursor = Some((x, y));
    }

    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        let steps = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 40.0,
        };
        self.distance = (self.distance - steps * ZOOM_SPEED).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}
