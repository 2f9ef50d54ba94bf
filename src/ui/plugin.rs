use super::UiState;
use bevy::prelude::*;

/// Plugin responsible for the panels exposing the interaction tunables and
/// the live session state.
pub struct ResizeUiPlugin;

impl Plugin for ResizeUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(bevy_egui::EguiPlugin)
            .insert_resource(UiState::default())
            .add_systems(
                PreUpdate,
                super::focus_ui.after(bevy_egui::EguiSet::BeginFrame),
            )
            .add_systems(Update, super::update_ui);
    }
}
