//! Pure math of the drag: pixel delta to scale factor, and the rigid
//! transform keeping the grabbed point glued to the ray under the cursor.

use super::{DragMode, DragSession, ResizeParams};
use bevy::prelude::*;

/// Pixel dead zone under which a drag snaps back to its frozen capture state.
pub const DELTA_EPSILON: f32 = 0.1;

/// True when the pointer has not meaningfully moved since capture; the target
/// is then snapped back to its exact frozen scale and center.
pub fn within_dead_zone(delta_y: f32) -> bool {
    delta_y.abs() < DELTA_EPSILON
}

/// Computes the uniform scale factor for a vertical pixel displacement.
///
/// Enlarge mode inverts the shrink formula rather than carrying its own
/// sensitivity, so both modes respond to the same pixel distances. This also
/// means the sign convention is shared: increasing `delta_y` (pointer moving
/// up) shrinks, decreasing it enlarges, in both modes.
pub fn scale_factor(mode: DragMode, delta_y: f32, params: &ResizeParams) -> f32 {
    let shrink = (1.0 - delta_y * params.shrink_sensitivity).max(params.min_scale_factor);

    match mode {
        DragMode::Shrink => shrink,
        DragMode::Enlarge => {
            if shrink.abs() <= f32::EPSILON {
                1.0
            } else {
                // Never below the capture scale while enlarging.
                (1.0 / shrink).max(1.0)
            }
        }
    }
}

/// Solves for the target's new center so that the grabbed local point, at the
/// new scale, sits on the cursor ray at `initial_camera_distance * f` from
/// the camera.
pub fn resolve_center(
    session: &DragSession,
    f: f32,
    rotation: Quat,
    camera_pos: Vec3,
    ray_dir: Vec3,
) -> Vec3 {
    let ray_center_point = camera_pos + ray_dir * (session.initial_camera_distance * f);
    let rotated_offset = rotation * (session.local_hit_point * f);
    ray_center_point - rotated_offset
}

/// Computes the scale and center a live session assigns to its target for
/// the current cursor height: the exact frozen capture values inside the
/// dead zone, the resolved scale/center outside it.
pub fn resolve_transform(
    session: &DragSession,
    screen_y: f32,
    params: &ResizeParams,
    rotation: Quat,
    camera_pos: Vec3,
    ray_dir: Vec3,
) -> (Vec3, Vec3) {
    let delta_y = screen_y - session.mouse_y0;
    if within_dead_zone(delta_y) {
        return (session.initial_scale, session.initial_center);
    }

    let f = scale_factor(session.mode, delta_y, params);
    (
        session.initial_scale * f,
        resolve_center(session, f, rotation, camera_pos, ray_dir),
    )
}

/// Maps a world point into the local frame of `transform`, scale included.
pub fn inverse_transform_point(transform: &Transform, world_point: Vec3) -> Vec3 {
    let unrotated = transform.rotation.inverse() * (world_point - transform.translation);
    unrotated / transform.scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::Entity;

    fn params() -> ResizeParams {
        ResizeParams {
            shrink_sensitivity: 0.005,
            min_scale_factor: 0.1,
        }
    }

    fn session() -> DragSession {
        DragSession {
            mode: DragMode::Shrink,
            target: Entity::from_raw(0),
            local_hit_point: Vec3::new(0.5, 0.0, 0.0),
            initial_scale: Vec3::ONE,
            initial_center: Vec3::new(0.0, 1.0, -5.0),
            initial_camera_distance: 5.0,
            mouse_y0: 500.0,
        }
    }

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1.0e-4, "{a} != {b}");
    }

    #[test]
    fn shrink_reference_scenario() {
        // mouse_y0 = 500, cursor dragged down to y = 100.
        let f = scale_factor(DragMode::Shrink, 100.0 - 500.0, &params());
        assert_close(f, 3.0);
    }

    #[test]
    fn enlarge_reference_scenario() {
        // Same displacement, enlarge mode: the reciprocal lands below 1 and
        // is clamped back to the capture scale.
        let f = scale_factor(DragMode::Enlarge, 100.0 - 500.0, &params());
        assert_close(f, 1.0);
    }

    #[test]
    fn shrink_monotone_and_clamped() {
        let params = params();
        let mut prev = f32::INFINITY;
        for step in 0..200 {
            let delta_y = -500.0 + step as f32 * 10.0;
            let f = scale_factor(DragMode::Shrink, delta_y, &params);
            assert!(f <= prev, "shrink factor increased at delta_y = {delta_y}");
            assert!(f >= params.min_scale_factor);
            prev = f;
        }
        // Far enough up, the clamp is reached exactly.
        assert_close(
            scale_factor(DragMode::Shrink, 10_000.0, &params),
            params.min_scale_factor,
        );
    }

    #[test]
    fn enlarge_monotone_with_unit_floor() {
        let params = params();
        let mut prev = 0.0;
        for step in 0..200 {
            let delta_y = -500.0 + step as f32 * 10.0;
            let f = scale_factor(DragMode::Enlarge, delta_y, &params);
            assert!(f >= prev, "enlarge factor decreased at delta_y = {delta_y}");
            assert!(f >= 1.0);
            prev = f;
        }
    }

    #[test]
    fn enlarge_guards_reciprocal_of_zero() {
        let params = ResizeParams {
            shrink_sensitivity: 0.005,
            min_scale_factor: 0.0,
        };
        // 1 - 200 * 0.005 == 0 exactly; the reciprocal guard must kick in.
        let f = scale_factor(DragMode::Enlarge, 200.0, &params);
        assert_eq!(f, 1.0);
    }

    #[test]
    fn zero_displacement_is_identity() {
        let params = params();
        assert_close(scale_factor(DragMode::Shrink, 0.0, &params), 1.0);
        assert_close(scale_factor(DragMode::Enlarge, 0.0, &params), 1.0);
    }

    #[test]
    fn dead_zone_restores_exact_capture() {
        let mut session = session();
        session.initial_scale = Vec3::new(1.3, 1.3, 1.3);
        session.initial_center = Vec3::new(0.7, 2.1, -4.9);
        let params = params();
        let camera_pos = Vec3::new(3.0, 5.0, 1.0);
        let ray_dir = Vec3::new(0.2, -0.4, -0.8).normalize();
        let rotation = Quat::from_rotation_y(1.2);

        for mode in [DragMode::Enlarge, DragMode::Shrink] {
            session.mode = mode;
            for offset in [0.0, 0.05, -0.09] {
                let (scale, center) = resolve_transform(
                    &session,
                    session.mouse_y0 + offset,
                    &params,
                    rotation,
                    camera_pos,
                    ray_dir,
                );
                // Bit-exact, whatever the current ray and rotation are.
                assert_eq!(scale, session.initial_scale);
                assert_eq!(center, session.initial_center);
            }
        }
    }

    #[test]
    fn zero_displacement_round_trip() {
        let mut session = session();
        let params = params();
        let camera_pos = Vec3::new(0.0, 2.0, 3.0);
        let ray_dir = (session.initial_center - camera_pos).normalize();

        for mode in [DragMode::Enlarge, DragMode::Shrink] {
            session.mode = mode;

            // Drag far away from the capture point (upwards, so both the
            // shrink clamp and the enlarge reciprocal leave 1)...
            let (scale, _) = resolve_transform(
                &session,
                session.mouse_y0 + 300.0,
                &params,
                Quat::IDENTITY,
                camera_pos,
                ray_dir,
            );
            assert_ne!(scale, session.initial_scale);

            // ...then back to zero displacement: the write is exactly the
            // pre-drag transform, so releasing there leaves no trace.
            let (scale, center) = resolve_transform(
                &session,
                session.mouse_y0,
                &params,
                Quat::IDENTITY,
                camera_pos,
                ray_dir,
            );
            assert_eq!(scale, session.initial_scale);
            assert_eq!(center, session.initial_center);
        }
    }

    #[test]
    fn dead_zone_boundary() {
        assert!(within_dead_zone(0.0));
        assert!(within_dead_zone(0.099));
        assert!(within_dead_zone(-0.099));
        assert!(!within_dead_zone(DELTA_EPSILON));
        assert!(!within_dead_zone(-0.2));
    }

    #[test]
    fn resolved_grab_point_stays_on_ray() {
        let session = session();
        let camera_pos = Vec3::new(0.0, 2.0, 3.0);
        let ray_dir = (session.initial_center - camera_pos).normalize();
        let rotation = Quat::from_rotation_y(0.7);

        for f in [0.25, 1.0, 2.5] {
            let center = resolve_center(&session, f, rotation, camera_pos, ray_dir);
            let grab_point = center + rotation * (session.local_hit_point * f);
            let expected = camera_pos + ray_dir * (session.initial_camera_distance * f);
            assert!(grab_point.distance(expected) < 1.0e-4);
        }
    }

    #[test]
    fn resolve_center_at_unit_factor_recovers_hit_geometry() {
        // With f = 1 and the cursor ray unchanged, the center lands so that
        // the grabbed point sits exactly where it was clicked.
        let session = session();
        let camera_pos = Vec3::ZERO;
        let ray_dir = Vec3::new(0.0, 0.0, -1.0);
        let center = resolve_center(&session, 1.0, Quat::IDENTITY, camera_pos, ray_dir);
        let grab_point = center + session.local_hit_point;
        assert!(grab_point.distance(Vec3::new(0.0, 0.0, -5.0)) < 1.0e-4);
    }

    #[test]
    fn inverse_transform_point_round_trips() {
        let transform = Transform {
            translation: Vec3::new(1.0, -2.0, 3.0),
            rotation: Quat::from_euler(EulerRot::XYZ, 0.3, 1.1, -0.4),
            scale: Vec3::new(2.0, 0.5, 3.0),
        };
        let world = Vec3::new(-4.0, 2.5, 7.0);

        let local = inverse_transform_point(&transform, world);
        let back = transform.transform_point(local);
        assert!(back.distance(world) < 1.0e-3);
    }
}
