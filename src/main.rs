use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::render::camera::Projection;
use bevy::winit::WinitWindows;
use bevy_rapier3d::prelude::*;
use clap::Parser;
use winit::window::Icon;

use stretchum::camera::{look_at, OrbitCamera, OrbitCameraPlugin};
use stretchum::cli::{self, CliArgs, ResizeSettings};
use stretchum::resize::ResizeParams;
use stretchum::MainCamera;

fn main() {
    let args = CliArgs::parse();
    let settings = load_settings_or_default(&args);
    let params = ResizeParams {
        shrink_sensitivity: settings
            .shrink_sensitivity
            .unwrap_or(ResizeParams::default().shrink_sensitivity),
        min_scale_factor: settings
            .min_scale_factor
            .unwrap_or(ResizeParams::default().min_scale_factor),
    };

    App::new()
        .insert_resource(args)
        .insert_resource(settings)
        .insert_resource(params)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Stretchum 3D".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(OrbitCameraPlugin)
        .add_plugins(stretchum::picking::PickingPlugin)
        .add_plugins(stretchum::resize::ResizePlugin)
        .add_plugins(stretchum::feedback::FeedbackPlugin)
        .add_plugins(stretchum::scene::ScenePlugin)
        .add_plugins(stretchum::styling::StylingPlugin)
        .add_plugins(stretchum::ui::ResizeUiPlugin)
        .add_systems(Startup, (setup_graphics, set_window_icon))
        .run();
}

fn load_settings_or_default(args: &CliArgs) -> ResizeSettings {
    let Some(path) = &args.settings else {
        return ResizeSettings::default();
    };

    match cli::load_settings(path) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("ignoring settings file: {err:#}");
            ResizeSettings::default()
        }
    }
}

fn setup_graphics(mut commands: Commands) {
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: false,
            ..Default::default()
        },
        transform: Transform {
            translation: Vec3::new(10.0, 2.0, 10.0),
            rotation: Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4),
            ..Default::default()
        },
        ..Default::default()
    });

    let mut orbit = OrbitCamera {
        pan_sensitivity: 4.0,
        rotate_sensitivity: 0.1,
        ..OrbitCamera::default()
    };
    look_at(&mut orbit, Vec3::new(8.0, 6.0, 8.0), Vec3::new(0.0, 1.0, 0.0));

    commands
        .spawn(Camera3dBundle {
            projection: Projection::Perspective(PerspectiveProjection {
                far: 10_000.0,
                ..PerspectiveProjection::default()
            }),
            ..Default::default()
        })
        .insert(orbit)
        .insert(MainCamera);
}

fn set_window_icon(windows: NonSend<WinitWindows>) {
    // Best-effort: a missing or unreadable icon is not worth failing startup.
    let Ok(image) = image::open("assets/window_icon.png") else {
        return;
    };

    let image = image.into_rgba8();
    let (width, height) = image.dimensions();
    match Icon::from_rgba(image.into_raw(), width, height) {
        Ok(icon) => {
            for window in windows.windows.values() {
                window.set_window_icon(Some(icon.clone()));
            }
        }
        Err(err) => log::warn!("failed to decode window icon: {err}"),
    }
}
