//! Transient drag feedback: looped audio on the target and physics
//! suspension for the duration of the session.

use crate::resize::ResizeSystems;
use bevy::prelude::*;

pub use self::audio::ResizeAudio;
pub use self::physics::SuspendedBodies;

pub mod audio;
pub mod physics;

pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SuspendedBodies::default())
            .add_systems(Startup, audio::setup_resize_audio)
            .add_systems(
                Update,
                (
                    physics::suspend_on_resize_start,
                    physics::restore_on_resize_end,
                    audio::play_on_resize_start,
                    audio::stop_on_resize_end,
                    audio::sync_volume,
                )
                    .chain()
                    .in_set(ResizeSystems::Feedback),
            );
    }
}
