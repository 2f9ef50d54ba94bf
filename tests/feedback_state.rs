use bevy::prelude::Entity;
use bevy_rapier3d::prelude::RigidBody;
use stretchum::feedback::SuspendedBodies;

#[test]
fn first_hold_suspends() {
    let mut suspended = SuspendedBodies::default();
    let target = Entity::from_raw(1);

    let install = suspended.begin_hold(target, RigidBody::Dynamic);
    assert!(matches!(install, Some(RigidBody::KinematicPositionBased)));
    assert!(suspended.is_suspended(target));
}

#[test]
fn second_hold_does_not_resuspend() {
    let mut suspended = SuspendedBodies::default();
    let target = Entity::from_raw(2);

    suspended.begin_hold(target, RigidBody::Dynamic);
    // The second session observes the already-kinematic body; it must not
    // overwrite the recorded original, nor re-install anything.
    let install = suspended.begin_hold(target, RigidBody::KinematicPositionBased);
    assert!(install.is_none());
}

#[test]
fn restore_happens_on_last_release_only() {
    let mut suspended = SuspendedBodies::default();
    let target = Entity::from_raw(3);

    suspended.begin_hold(target, RigidBody::Dynamic);
    suspended.begin_hold(target, RigidBody::KinematicPositionBased);

    assert!(suspended.end_hold(target).is_none());
    assert!(suspended.is_suspended(target));

    let restore = suspended.end_hold(target);
    assert!(matches!(restore, Some(RigidBody::Dynamic)));
    assert!(!suspended.is_suspended(target));
    assert!(suspended.is_empty());
}

#[test]
fn restores_the_original_body_type() {
    let mut suspended = SuspendedBodies::default();
    let target = Entity::from_raw(4);

    suspended.begin_hold(target, RigidBody::Fixed);
    let restore = suspended.end_hold(target);
    assert!(matches!(restore, Some(RigidBody::Fixed)));
}

#[test]
fn release_without_hold_is_a_no_op() {
    let mut suspended = SuspendedBodies::default();
    let target = Entity::from_raw(5);

    assert!(suspended.end_hold(target).is_none());
    assert!(suspended.end_hold(target).is_none());
    assert!(suspended.is_empty());
}

#[test]
fn targets_are_isolated() {
    let mut suspended = SuspendedBodies::default();
    let a = Entity::from_raw(6);
    let b = Entity::from_raw(7);

    suspended.begin_hold(a, RigidBody::Dynamic);
    suspended.begin_hold(b, RigidBody::Dynamic);

    suspended.end_hold(a);
    assert!(!suspended.is_suspended(a));
    assert!(suspended.is_suspended(b));
}

#[test]
fn forget_drops_all_holds() {
    let mut suspended = SuspendedBodies::default();
    let target = Entity::from_raw(8);

    suspended.begin_hold(target, RigidBody::Dynamic);
    suspended.begin_hold(target, RigidBody::KinematicPositionBased);

    // A despawned target is forgotten wholesale; no restore is pending.
    suspended.forget(target);
    assert!(!suspended.is_suspended(target));
    assert!(suspended.end_hold(target).is_none());
}
