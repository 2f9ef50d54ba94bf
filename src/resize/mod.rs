use bevy::prelude::*;
use bevy_rapier::math::Vect;
use strum_macros::{Display, EnumIter};

pub use self::resolver::{
    inverse_transform_point, resolve_center, resolve_transform, scale_factor, within_dead_zone,
    DELTA_EPSILON,
};

pub mod mouse;
pub mod resolver;

/// The two drag variants, bound to separate pointer buttons.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum DragMode {
    Enlarge,
    Shrink,
}

impl DragMode {
    pub fn button(self) -> MouseButton {
        match self {
            DragMode::Enlarge => MouseButton::Left,
            DragMode::Shrink => MouseButton::Right,
        }
    }
}

/// State of one continuous button-held interaction with one target.
///
/// All fields are captured atomically when the drag starts and stay frozen
/// until it ends; every per-frame recompute derives from these plus the
/// current pointer position, so there is no drift to accumulate.
#[derive(Copy, Clone, Debug)]
pub struct DragSession {
    pub mode: DragMode,
    pub target: Entity,
    /// The clicked surface point in the target's local frame at capture time.
    pub local_hit_point: Vect,
    pub initial_scale: Vect,
    pub initial_center: Vect,
    /// Camera-to-target-center distance at capture time.
    pub initial_camera_distance: f32,
    /// Vertical pixel coordinate of the pointer at capture time, y up.
    pub mouse_y0: f32,
}

/// The two session slots, one per button. Both may be live at once, including
/// on the same target.
#[derive(Default, Clone, Debug, Resource)]
pub struct DragState {
    enlarge: Option<DragSession>,
    shrink: Option<DragSession>,
}

impl DragState {
    fn slot_mut(&mut self, mode: DragMode) -> &mut Option<DragSession> {
        match mode {
            DragMode::Enlarge => &mut self.enlarge,
            DragMode::Shrink => &mut self.shrink,
        }
    }

    pub fn get(&self, mode: DragMode) -> Option<&DragSession> {
        match mode {
            DragMode::Enlarge => self.enlarge.as_ref(),
            DragMode::Shrink => self.shrink.as_ref(),
        }
    }

    /// Installs `session` in its mode's slot, returning the session it
    /// replaced, if any.
    pub fn begin(&mut self, session: DragSession) -> Option<DragSession> {
        self.slot_mut(session.mode).replace(session)
    }

    pub fn end(&mut self, mode: DragMode) -> Option<DragSession> {
        self.slot_mut(mode).take()
    }

    /// True when `mode`'s slot currently drags `target`.
    pub fn holds_target(&self, mode: DragMode, target: Entity) -> bool {
        self.get(mode)
            .map_or(false, |session| session.target == target)
    }

    pub fn sessions(&self) -> impl Iterator<Item = &DragSession> {
        self.enlarge.iter().chain(self.shrink.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.enlarge.is_none() && self.shrink.is_none()
    }
}

/// Tunables of the scale/position resolver.
#[derive(Copy, Clone, Debug, Resource)]
pub struct ResizeParams {
    /// Pixels-to-factor slope shared by both modes.
    pub shrink_sensitivity: f32,
    /// Lower bound of the shrink factor.
    pub min_scale_factor: f32,
}

impl Default for ResizeParams {
    fn default() -> Self {
        Self {
            shrink_sensitivity: 0.005,
            min_scale_factor: 0.1,
        }
    }
}

#[derive(Event, Copy, Clone, Debug)]
pub struct ResizeStarted {
    pub target: Entity,
    pub mode: DragMode,
}

#[derive(Event, Copy, Clone, Debug)]
pub struct ResizeEnded {
    pub target: Entity,
    pub mode: DragMode,
}

#[derive(SystemSet, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResizeSystems {
    /// Session begin/end transitions.
    Sessions,
    /// Per-frame scale/position application for live sessions.
    Apply,
    /// Audio and physics-suspension reactions to session events.
    Feedback,
}

pub struct ResizePlugin;

impl Plugin for ResizePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(DragState::default())
            .init_resource::<ResizeParams>()
            .add_event::<ResizeStarted>()
            .add_event::<ResizeEnded>()
            .configure_sets(
                Update,
                (
                    ResizeSystems::Sessions,
                    ResizeSystems::Apply,
                    ResizeSystems::Feedback,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (mouse::handle_resize_click, mouse::clear_lost_sessions)
                    .chain()
                    .in_set(ResizeSystems::Sessions),
            )
            .add_systems(
                Update,
                mouse::update_active_drags.in_set(ResizeSystems::Apply),
            );
    }
}
