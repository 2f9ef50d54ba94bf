use bevy::prelude::{Entity, Vec3};
use stretchum::resize::{DragMode, DragSession, DragState};

fn session(mode: DragMode, target: Entity) -> DragSession {
    DragSession {
        mode,
        target,
        local_hit_point: Vec3::new(0.1, 0.2, 0.3),
        initial_scale: Vec3::ONE,
        initial_center: Vec3::new(0.0, 1.0, 0.0),
        initial_camera_distance: 8.0,
        mouse_y0: 400.0,
    }
}

#[test]
fn slots_start_empty() {
    let state = DragState::default();
    assert!(state.is_empty());
    assert!(state.get(DragMode::Enlarge).is_none());
    assert!(state.get(DragMode::Shrink).is_none());
}

#[test]
fn begin_end_lifecycle() {
    let mut state = DragState::default();
    let target = Entity::from_raw(7);

    assert!(state.begin(session(DragMode::Enlarge, target)).is_none());
    assert_eq!(state.get(DragMode::Enlarge).map(|s| s.target), Some(target));
    assert!(!state.is_empty());

    let ended = state.end(DragMode::Enlarge).unwrap();
    assert_eq!(ended.target, target);
    assert!(state.is_empty());
}

#[test]
fn ending_an_idle_slot_is_a_no_op() {
    let mut state = DragState::default();
    assert!(state.end(DragMode::Shrink).is_none());
    assert!(state.end(DragMode::Shrink).is_none());
}

#[test]
fn slots_are_independent() {
    let mut state = DragState::default();
    let a = Entity::from_raw(1);
    let b = Entity::from_raw(2);

    state.begin(session(DragMode::Enlarge, a));
    state.begin(session(DragMode::Shrink, b));

    // Ending one button's session leaves the other untouched.
    state.end(DragMode::Enlarge);
    assert!(state.get(DragMode::Enlarge).is_none());
    assert_eq!(state.get(DragMode::Shrink).map(|s| s.target), Some(b));
}

#[test]
fn both_buttons_may_hold_the_same_target() {
    let mut state = DragState::default();
    let target = Entity::from_raw(3);

    state.begin(session(DragMode::Enlarge, target));
    state.begin(session(DragMode::Shrink, target));

    assert!(state.holds_target(DragMode::Enlarge, target));
    assert!(state.holds_target(DragMode::Shrink, target));
    assert_eq!(state.sessions().count(), 2);

    state.end(DragMode::Shrink);
    assert!(!state.holds_target(DragMode::Shrink, target));
    assert!(state.holds_target(DragMode::Enlarge, target));
    assert_eq!(state.sessions().count(), 1);
}

#[test]
fn holds_target_distinguishes_targets_and_modes() {
    let mut state = DragState::default();
    state.begin(session(DragMode::Shrink, Entity::from_raw(4)));

    assert!(state.holds_target(DragMode::Shrink, Entity::from_raw(4)));
    assert!(!state.holds_target(DragMode::Shrink, Entity::from_raw(5)));
    assert!(!state.holds_target(DragMode::Enlarge, Entity::from_raw(4)));
}

#[test]
fn begin_replaces_and_returns_previous_session() {
    let mut state = DragState::default();
    let first = Entity::from_raw(10);
    let second = Entity::from_raw(11);

    state.begin(session(DragMode::Enlarge, first));
    let replaced = state.begin(session(DragMode::Enlarge, second)).unwrap();

    assert_eq!(replaced.target, first);
    assert_eq!(
        state.get(DragMode::Enlarge).map(|s| s.target),
        Some(second)
    );
}

#[test]
fn frozen_fields_survive_unchanged() {
    let mut state = DragState::default();
    let target = Entity::from_raw(20);
    let original = session(DragMode::Shrink, target);

    state.begin(original);
    let held = state.get(DragMode::Shrink).unwrap();

    assert_eq!(held.local_hit_point, original.local_hit_point);
    assert_eq!(held.initial_scale, original.initial_scale);
    assert_eq!(held.initial_center, original.initial_center);
    assert_eq!(held.initial_camera_distance, original.initial_camera_distance);
    assert_eq!(held.mouse_y0, original.mouse_y0);
}
