extern crate bevy_rapier3d as bevy_rapier;

use bevy::prelude::*;

pub mod camera;
pub mod cli;
pub mod feedback;
pub mod picking;
pub mod resize;
pub mod scene;
pub mod styling;
pub mod ui;
pub mod utils;

/// Marker for the camera the picker and the resize resolver cast rays from.
#[derive(Component)]
pub struct MainCamera;
