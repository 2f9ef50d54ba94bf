use crate::ui::UiState;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

pub fn focus_ui(mut ui_context: EguiContexts, mut ui_state: ResMut<UiState>) {
    ui_state.inputs_enabled = !ui_context.ctx_mut().wants_pointer_input();
}
