use crate::picking::SceneMouse;
use crate::resize::{resolve_transform, DragState, ResizeParams};
use crate::MainCamera;
use bevy::prelude::*;

/// Applies the resolver to every live session, once per frame.
///
/// A missing cursor or camera pauses resolution for the frame; the sessions
/// themselves survive until their button is released.
pub fn update_active_drags(
    drag_state: Res<DragState>,
    params: Res<ResizeParams>,
    scene_mouse: Res<SceneMouse>,
    camera: Query<&GlobalTransform, With<MainCamera>>,
    mut transforms: Query<&mut Transform>,
) {
    if drag_state.is_empty() {
        return;
    }

    let (Some(screen_point), Some((_, ray_dir))) = (scene_mouse.screen_point, scene_mouse.ray)
    else {
        return;
    };
    let Ok(camera_transform) = camera.get_single() else {
        return;
    };
    let camera_pos = camera_transform.translation();

    for session in drag_state.sessions() {
        let Ok(mut transform) = transforms.get_mut(session.target) else {
            continue;
        };

        let (scale, center) = resolve_transform(
            session,
            screen_point.y,
            &params,
            transform.rotation,
            camera_pos,
            ray_dir,
        );
        transform.scale = scale;
        transform.translation = center;
    }
}
