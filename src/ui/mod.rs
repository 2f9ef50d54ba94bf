use crate::feedback::ResizeAudio;
use crate::picking::SceneMouse;
use crate::resize::{DragState, ResizeParams};
use crate::styling::Theme;
use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

pub use self::plugin::ResizeUiPlugin;
pub use self::ui_state::UiState;

use self::input_blocking::focus_ui;

mod input_blocking;
mod plugin;
mod session_infos;
mod settings;
mod ui_state;

pub fn update_ui(
    mut ui_context: EguiContexts,
    mut ui_state: ResMut<UiState>,
    mut theme: ResMut<Theme>,
    mut params: ResMut<ResizeParams>,
    mut audio: ResMut<ResizeAudio>,
    drag_state: Res<DragState>,
    scene_mouse: Res<SceneMouse>,
    diagnostics: Res<DiagnosticsStore>,
) {
    settings::ui(
        &mut ui_context,
        &mut ui_state,
        &mut theme,
        &mut params,
        &mut audio,
    );
    session_infos::ui(
        &mut ui_context,
        &mut ui_state,
        &drag_state,
        &scene_mouse,
        &params,
        &diagnostics,
    );
}
