use crate::picking::{pick, SceneMouse};
use crate::resize::{
    inverse_transform_point, DragMode, DragSession, DragState, ResizeEnded, ResizeStarted,
};
use crate::ui::UiState;
use crate::MainCamera;
use bevy::prelude::*;
use bevy_rapier::prelude::*;
use strum::IntoEnumIterator;

/// Session begin/end transitions, one independent state machine per button.
///
/// A press that hits nothing leaves both slots untouched. A release always
/// ends its mode's session, even if the cursor left the target long ago.
pub fn handle_resize_click(
    mut drag_state: ResMut<DragState>,
    ui_state: Res<UiState>,
    scene_mouse: Res<SceneMouse>,
    mouse: Res<ButtonInput<MouseButton>>,
    physics: Res<RapierContext>,
    camera: Query<&GlobalTransform, With<MainCamera>>,
    transforms: Query<&Transform>,
    mut started: EventWriter<ResizeStarted>,
    mut ended: EventWriter<ResizeEnded>,
) {
    for mode in DragMode::iter() {
        if ui_state.inputs_enabled && mouse.just_pressed(mode.button()) {
            let session =
                capture_session(mode, &scene_mouse, &physics, &camera, &transforms);

            if let Some(session) = session {
                if let Some(prev) = drag_state.begin(session) {
                    ended.send(ResizeEnded {
                        target: prev.target,
                        mode: prev.mode,
                    });
                }
                started.send(ResizeStarted {
                    target: session.target,
                    mode,
                });
            }
        }

        // Not gated on `inputs_enabled`: releasing over the UI must still
        // end the drag.
        if mouse.just_released(mode.button()) {
            if let Some(prev) = drag_state.end(mode) {
                ended.send(ResizeEnded {
                    target: prev.target,
                    mode: prev.mode,
                });
            }
        }
    }
}

fn capture_session(
    mode: DragMode,
    scene_mouse: &SceneMouse,
    physics: &RapierContext,
    camera: &Query<&GlobalTransform, With<MainCamera>>,
    transforms: &Query<&Transform>,
) -> Option<DragSession> {
    let screen_point = scene_mouse.screen_point?;
    let ray = scene_mouse.ray?;
    let hit = pick(physics, ray)?;
    let transform = transforms.get(hit.entity).ok()?;
    let camera_pos = camera.get_single().ok()?.translation();

    Some(DragSession {
        mode,
        target: hit.entity,
        local_hit_point: inverse_transform_point(transform, hit.point),
        initial_scale: transform.scale,
        initial_center: transform.translation,
        initial_camera_distance: camera_pos.distance(transform.translation),
        mouse_y0: screen_point.y,
    })
}

/// Ends any session whose target was despawned mid-drag, with the usual
/// end-of-session feedback.
pub fn clear_lost_sessions(
    mut drag_state: ResMut<DragState>,
    transforms: Query<&Transform>,
    mut ended: EventWriter<ResizeEnded>,
) {
    for mode in DragMode::iter() {
        let lost = drag_state
            .get(mode)
            .map_or(false, |session| transforms.get(session.target).is_err());

        if lost {
            if let Some(session) = drag_state.end(mode) {
                ended.send(ResizeEnded {
                    target: session.target,
                    mode: session.mode,
                });
            }
        }
    }
}
