use bevy::prelude::*;
use bevy_rapier::prelude::*;

#[derive(Clone, Bundle, Default)]
pub struct ColliderBundle {
    pub collider: Collider,
    pub mass_properties: ColliderMassProperties,
    pub collision_groups: CollisionGroups,
}

impl ColliderBundle {
    pub fn new(collider: Collider) -> Self {
        Self {
            collider,
            mass_properties: Default::default(),
            collision_groups: Default::default(),
        }
    }
}

#[derive(Copy, Clone, Default, Bundle)]
pub struct RigidBodyBundle {
    pub rigid_body: RigidBody,
    pub velocity: Velocity,
    pub additional_mass_properties: AdditionalMassProperties,
    pub mass_properties: ReadMassProperties,
    pub forces: ExternalForce,
    pub gravity_scale: GravityScale,
    pub sleeping: Sleeping,
    pub damping: Damping,
}

impl RigidBodyBundle {
    pub fn dynamic() -> Self {
        Self {
            rigid_body: RigidBody::Dynamic,
            ..Default::default()
        }
    }

    pub fn fixed() -> Self {
        Self {
            rigid_body: RigidBody::Fixed,
            ..Default::default()
        }
    }
}
