use macroquad::prelude::{Camera3D, Vec3, vec3};

/// Fly-camera movement directions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

const HOME: Vec3 = Vec3::new(25.0, 25.0, 90.0);
const YAW: f32 = -90.0;
const PITCH: f32 = 0.0;
const FOV: f32 = 45.0;
pub const WALK_SPEED: f32 = 5.0;
pub const RUN_SPEED: f32 = 10.0;
const SENSITIVITY: f32 = 0.1;

/// FlyCamera is a free-look camera with yaw/pitch in degrees.
/// Zoom narrows the vertical field of view.
pub struct FlyCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub movement_speed: f32,
    pub sensitivity: f32,
}

impl FlyCamera {
    pub fn new() -> Self {
        Self {
            position: HOME,
            yaw: YAW,
            pitch: PITCH,
            fov: FOV,
            movement_speed: WALK_SPEED,
            sensitivity: SENSITIVITY,
        }
    }

    /// Start somewhere other than the default home position
    pub fn looking_from(position: Vec3) -> Self {
        Self { position, ..Self::new() }
    }

    /// Unit view direction
    pub fn front(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        vec3(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.front().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.front()).normalize()
    }

    /// Move along the view axes for `delta_time` seconds
    pub fn travel(&mut self, direction: Movement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        let step = match direction {
            Movement::Forward => self.front(),
            Movement::Backward => -self.front(),
            Movement::Left => -self.right(),
            Movement::Right => self.right(),
            Movement::Up => self.up(),
            Movement::Down => -self.up(),
        };
        self.position += step * velocity;
    }

    /// Turn by a mouse delta. Pitch stops short of straight up or down.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity).clamp(-89.0, 89.0);
    }

    /// Zoom with the scroll wheel
    pub fn zoom(&mut self, wheel: f32) {
        self.fov = (self.fov - wheel).clamp(1.0, 45.0);
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// macroquad camera for the current pose
    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position,
            target: self.position + self.front(),
            up: Vec3::Y,
            fovy: self.fov.to_radians(),
            ..Default::default()
        }
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_starts_looking_down_negative_z() {
        let camera = FlyCamera::new();
        assert!(close(camera.front(), vec3(0.0, 0.0, -1.0)));
        assert!(close(camera.right(), vec3(1.0, 0.0, 0.0)));
        assert!(close(camera.up(), vec3(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_travel_scales_with_time_and_speed() {
        let mut camera = FlyCamera::new();
        camera.travel(Movement::Forward, 2.0);
        assert!(close(camera.position, vec3(25.0, 25.0, 80.0)));

        camera.movement_speed = RUN_SPEED;
        camera.travel(Movement::Right, 1.0);
        assert!(close(camera.position, vec3(35.0, 25.0, 80.0)));

        camera.travel(Movement::Down, 0.5);
        assert!(close(camera.position, vec3(35.0, 20.0, 80.0)));
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = FlyCamera::new();
        camera.look(0.0, 10_000.0);
        assert_eq!(camera.pitch, 89.0);
        camera.look(0.0, -10_000.0);
        assert_eq!(camera.pitch, -89.0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = FlyCamera::new();
        camera.zoom(100.0);
        assert_eq!(camera.fov, 1.0);
        camera.zoom(-100.0);
        assert_eq!(camera.fov, 45.0);
    }

    #[test]
    fn test_reset_returns_home() {
        let mut camera = FlyCamera::new();
        camera.travel(Movement::Up, 3.0);
        camera.look(40.0, 20.0);
        camera.reset();
        assert_eq!(camera.position, vec3(25.0, 25.0, 90.0));
        assert_eq!(camera.yaw, -90.0);
    }
}
