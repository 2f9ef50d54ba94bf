use crate::feedback::ResizeAudio;
use crate::resize::ResizeParams;
use crate::styling::Theme;
use crate::ui::UiState;
use bevy_egui::{egui, EguiContexts};

pub(super) fn ui(
    ui_context: &mut EguiContexts,
    ui_state: &mut UiState,
    theme: &mut Theme,
    params: &mut ResizeParams,
    audio: &mut ResizeAudio,
) {
    egui::Window::new("⛭ Resize settings")
        .open(&mut ui_state.settings_open)
        .resizable(false)
        .show(ui_context.ctx_mut(), |ui| {
            ui.add(
                egui::Slider::new(&mut params.shrink_sensitivity, 0.001..=0.02)
                    .logarithmic(true)
                    .text("shrink sensitivity"),
            );
            ui.add(
                egui::Slider::new(&mut params.min_scale_factor, 0.01..=1.0)
                    .text("min scale factor"),
            );

            ui.separator();
            ui.add(egui::Slider::new(&mut audio.volume, 0.0..=1.0).text("volume"));
            ui.checkbox(&mut audio.muted, "mute");

            ui.separator();
            ui.checkbox(&mut theme.dark_mode, "dark mode");
        });
}
