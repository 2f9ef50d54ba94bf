use crate::ui::UiState;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

/// Spherical orbit camera. Bound to the middle mouse button so the left and
/// right buttons stay free for the resize drags.
#[derive(Component)]
pub struct OrbitCamera {
    pub x: f32,
    pub y: f32,
    pub distance: f32,
    pub center: Vec3,
    pub rotate_sensitivity: f32,
    pub pan_sensitivity: f32,
    pub zoom_sensitivity: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: std::f32::consts::FRAC_PI_2,
            distance: 10.0,
            center: Vec3::ZERO,
            rotate_sensitivity: 1.0,
            pan_sensitivity: 1.0,
            zoom_sensitivity: 0.8,
        }
    }
}

/// Points the camera so that it sits at `eye` looking towards `at`.
pub fn look_at(camera: &mut OrbitCamera, eye: Vec3, at: Vec3) {
    camera.center = at;

    let view_dir = eye - at;
    camera.distance = view_dir.length();

    if camera.distance > 0.0 {
        camera.y = (view_dir.y / camera.distance).acos();
        camera.x = (-view_dir.z).atan2(view_dir.x) - std::f32::consts::FRAC_PI_2;
    }
}

pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (mouse_orbit_and_pan, mouse_zoom, update_camera_transform).chain(),
        );
    }
}

fn mouse_orbit_and_pan(
    ui_state: Res<UiState>,
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut motions: EventReader<MouseMotion>,
    time: Res<Time>,
    mut cameras: Query<(&mut OrbitCamera, &Transform)>,
) {
    let mut delta = Vec2::ZERO;
    for motion in motions.read() {
        delta += motion.delta;
    }

    if !ui_state.inputs_enabled || !mouse.pressed(MouseButton::Middle) {
        return;
    }

    let panning =
        keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    for (mut camera, transform) in cameras.iter_mut() {
        if panning {
            let right = transform.right();
            let up = transform.up();
            let amount = camera.pan_sensitivity * camera.distance * time.delta_seconds();
            camera.center -= right * delta.x * amount * 0.1;
            camera.center += up * delta.y * amount * 0.1;
        } else {
            camera.x -= delta.x * camera.rotate_sensitivity * time.delta_seconds();
            camera.y -= delta.y * camera.rotate_sensitivity * time.delta_seconds();
            camera.y = camera.y.clamp(0.01, std::f32::consts::PI - 0.01);
        }
    }
}

fn mouse_zoom(
    ui_state: Res<UiState>,
    mut wheel: EventReader<MouseWheel>,
    mut cameras: Query<&mut OrbitCamera>,
) {
    let mut total = 0.0;
    for event in wheel.read() {
        total += event.y;
    }

    if !ui_state.inputs_enabled || total == 0.0 {
        return;
    }

    for mut camera in cameras.iter_mut() {
        camera.distance *= camera.zoom_sensitivity.powf(total.signum());
        camera.distance = camera.distance.max(0.1);
    }
}

fn update_camera_transform(mut cameras: Query<(&OrbitCamera, &mut Transform)>) {
    for (camera, mut transform) in cameras.iter_mut() {
        let azimuth = camera.x + std::f32::consts::FRAC_PI_2;
        let view_dir = Vec3::new(
            camera.y.sin() * azimuth.cos(),
            camera.y.cos(),
            -camera.y.sin() * azimuth.sin(),
        );
        let eye = camera.center + view_dir * camera.distance;
        *transform = Transform::from_translation(eye).looking_at(camera.center, Vec3::Y);
    }
}
