use crate::picking::SceneMouse;
use crate::resize::{
    scale_factor, within_dead_zone, DragMode, DragSession, DragState, ResizeParams,
};
use crate::ui::UiState;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy_egui::{egui, EguiContexts};
use strum::IntoEnumIterator;

pub(super) fn ui(
    ui_context: &mut EguiContexts,
    ui_state: &mut UiState,
    drag_state: &DragState,
    scene_mouse: &SceneMouse,
    params: &ResizeParams,
    diagnostics: &DiagnosticsStore,
) {
    egui::Window::new("ℹ Session infos")
        .open(&mut ui_state.session_infos_open)
        .resizable(false)
        .show(ui_context.ctx_mut(), |ui| {
            for mode in DragMode::iter() {
                match drag_state.get(mode) {
                    Some(session) => {
                        ui.label(session_string(session, scene_mouse, params));
                    }
                    None => {
                        ui.label(format!("{mode}: idle"));
                    }
                }
            }

            if let Some(fps) = diagnostics
                .get(&FrameTimeDiagnosticsPlugin::FPS)
                .and_then(|fps| fps.smoothed())
            {
                ui.separator();
                ui.label(format!("FPS: {fps:.0}"));
            }
        });
}

fn session_string(session: &DragSession, scene_mouse: &SceneMouse, params: &ResizeParams) -> String {
    let factor = scene_mouse.screen_point.map(|point| {
        let delta_y = point.y - session.mouse_y0;
        if within_dead_zone(delta_y) {
            1.0
        } else {
            scale_factor(session.mode, delta_y, params)
        }
    });

    match factor {
        Some(factor) => format!(
            "{}: {:?}, factor {:.3}",
            session.mode, session.target, factor
        ),
        None => format!("{}: {:?}, cursor off-window", session.mode, session.target),
    }
}
