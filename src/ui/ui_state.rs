use bevy::prelude::*;

#[derive(Resource)]
pub struct UiState {
    /// False while egui wants the pointer; gates every scene interaction.
    pub inputs_enabled: bool,
    pub settings_open: bool,
    pub session_infos_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            inputs_enabled: true,
            settings_open: true,
            session_infos_open: false,
        }
    }
}
