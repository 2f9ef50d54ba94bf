use crate::MainCamera;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_rapier::prelude::*;

/// Rays cast from the camera are bounded to this length; anything farther is
/// not grabbable.
pub const MAX_PICK_DISTANCE: f32 = 100.0;

/// Per-frame snapshot of the pointer, refreshed before any interaction system
/// runs.
#[derive(Default, Copy, Clone, Debug, Resource)]
pub struct SceneMouse {
    /// Cursor position in pixels, origin at the bottom-left of the window
    /// (bevy reports it top-left, y down; the resize math wants y up).
    pub screen_point: Option<Vec2>,
    /// Origin and normalized direction of the ray under the cursor.
    pub ray: Option<(Vect, Vect)>,
}

#[derive(Copy, Clone, Debug)]
pub struct PickHit {
    pub entity: Entity,
    /// Exact world-space point where the ray met the collider.
    pub point: Vect,
}

pub struct PickingPlugin;

impl Plugin for PickingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SceneMouse::default())
            .add_systems(PreUpdate, track_mouse_state);
    }
}

pub fn track_mouse_state(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scene_mouse: ResMut<SceneMouse>,
    camera: Query<(&GlobalTransform, &Camera), With<MainCamera>>,
) {
    scene_mouse.screen_point = None;
    scene_mouse.ray = None;

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    scene_mouse.screen_point = Some(Vec2::new(cursor.x, window.height() - cursor.y));

    for (camera_transform, camera) in camera.iter() {
        if let Some(ray) = camera.viewport_to_world(camera_transform, cursor) {
            scene_mouse.ray = Some((ray.origin, *ray.direction));
        }
    }
}

/// Read-only raycast against the collision world. Returns the first object
/// hit along `ray`, if any.
pub fn pick(physics: &RapierContext, ray: (Vect, Vect)) -> Option<PickHit> {
    physics
        .cast_ray_and_get_normal(ray.0, ray.1, MAX_PICK_DISTANCE, true, QueryFilter::default())
        .map(|(entity, inter)| PickHit {
            entity,
            point: inter.point,
        })
}
