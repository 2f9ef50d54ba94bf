//! The demo playground: a grid floor and a handful of dynamic bodies to grab.

use crate::styling::ColorGenerator;
use crate::utils::{ColliderBundle, RigidBodyBundle};
use bevy::prelude::*;
use bevy_infinite_grid::{InfiniteGridBundle, InfiniteGridPlugin, InfiniteGridSettings};
use bevy_rapier::prelude::*;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InfiniteGridPlugin)
            .add_systems(Startup, (setup_floor, setup_playground));
    }
}

fn setup_floor(mut commands: Commands) {
    commands.spawn(InfiniteGridBundle {
        settings: InfiniteGridSettings {
            ..Default::default()
        },
        ..Default::default()
    });

    // The grid is purely visual; the grabbable ground is this fixed slab.
    // Anything with a collider can be resized, the ground included.
    commands.spawn((
        RigidBodyBundle::fixed(),
        ColliderBundle::new(Collider::cuboid(50.0, 0.1, 50.0)),
        TransformBundle::from(Transform::from_xyz(0.0, -0.1, 0.0)),
    ));
}

fn setup_playground(
    mut commands: Commands,
    mut colors: ResMut<ColorGenerator>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let cube_mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let ball_mesh = meshes.add(Sphere::new(0.5));
    let capsule_mesh = meshes.add(Capsule3d::new(0.4, 1.0));

    // A small stack of cubes.
    let stack_height = 3;
    for i in 0..stack_height {
        for j in 0..(stack_height - i) {
            let x = j as f32 + i as f32 * 0.5 - stack_height as f32 * 0.5;
            let y = i as f32 + 0.5;
            spawn_body(
                &mut commands,
                &mut colors,
                &mut materials,
                cube_mesh.clone(),
                Collider::cuboid(0.5, 0.5, 0.5),
                Vec3::new(x, y, -2.0),
            );
        }
    }

    // A few loose spheres.
    for k in 0..3 {
        spawn_body(
            &mut commands,
            &mut colors,
            &mut materials,
            ball_mesh.clone(),
            Collider::ball(0.5),
            Vec3::new(k as f32 * 1.5 - 1.5, 0.5, 1.5),
        );
    }

    spawn_body(
        &mut commands,
        &mut colors,
        &mut materials,
        capsule_mesh,
        Collider::capsule_y(0.5, 0.4),
        Vec3::new(2.5, 0.9, 0.0),
    );
}

fn spawn_body(
    commands: &mut Commands,
    colors: &mut ColorGenerator,
    materials: &mut Assets<StandardMaterial>,
    mesh: Handle<Mesh>,
    collider: Collider,
    position: Vec3,
) {
    commands.spawn((
        RigidBodyBundle::dynamic(),
        ColliderBundle::new(collider),
        PbrBundle {
            mesh,
            material: materials.add(StandardMaterial::from(colors.gen_color())),
            transform: Transform::from_translation(position),
            ..Default::default()
        },
    ));
}
