use crate::resize::{ResizeEnded, ResizeStarted};
use bevy::prelude::*;
use bevy::utils::HashMap;
use bevy_rapier::prelude::*;

/// Bookkeeping for bodies whose simulation is paused by an active drag.
///
/// A body may be held by both sessions at once; the body type recorded by the
/// first hold is the one restored when the last hold is released.
#[derive(Default, Resource)]
pub struct SuspendedBodies {
    held: HashMap<Entity, Hold>,
}

#[derive(Copy, Clone, Debug)]
struct Hold {
    prev_body: RigidBody,
    holds: u32,
}

impl SuspendedBodies {
    /// Records a hold on `target`, whose body type is currently `current`.
    /// Returns the body type to install when this is the first hold.
    pub fn begin_hold(&mut self, target: Entity, current: RigidBody) -> Option<RigidBody> {
        let hold = self.held.entry(target).or_insert(Hold {
            prev_body: current,
            holds: 0,
        });
        hold.holds += 1;
        (hold.holds == 1).then_some(RigidBody::KinematicPositionBased)
    }

    /// Releases one hold on `target`. Returns the body type to restore when
    /// this was the last hold.
    pub fn end_hold(&mut self, target: Entity) -> Option<RigidBody> {
        let hold = self.held.get_mut(&target)?;
        hold.holds = hold.holds.saturating_sub(1);

        if hold.holds == 0 {
            let prev = hold.prev_body;
            self.held.remove(&target);
            Some(prev)
        } else {
            None
        }
    }

    /// Drops all bookkeeping for a target that no longer exists.
    pub fn forget(&mut self, target: Entity) {
        self.held.remove(&target);
    }

    pub fn is_suspended(&self, target: Entity) -> bool {
        self.held.contains_key(&target)
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

pub fn suspend_on_resize_start(
    mut commands: Commands,
    mut suspended: ResMut<SuspendedBodies>,
    mut started: EventReader<ResizeStarted>,
    bodies: Query<&RigidBody>,
) {
    for event in started.read() {
        // Targets without a rigid-body are dragged as-is, nothing to suspend.
        let Ok(&body) = bodies.get(event.target) else {
            continue;
        };

        if let Some(kinematic) = suspended.begin_hold(event.target, body) {
            if let Some(mut entity) = commands.get_entity(event.target) {
                entity.insert(kinematic);
            }
        }
    }
}

pub fn restore_on_resize_end(
    mut commands: Commands,
    mut suspended: ResMut<SuspendedBodies>,
    mut ended: EventReader<ResizeEnded>,
    bodies: Query<&RigidBody>,
) {
    for event in ended.read() {
        if bodies.get(event.target).is_err() {
            // Despawned (or never simulated) targets leave no hold behind.
            suspended.forget(event.target);
            continue;
        }

        if let Some(prev) = suspended.end_hold(event.target) {
            if let Some(mut entity) = commands.get_entity(event.target) {
                entity.insert(prev);
            }
        }
    }
}
