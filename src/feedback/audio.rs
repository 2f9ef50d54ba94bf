use crate::cli::{CliArgs, ResizeSettings};
use crate::resize::{DragMode, DragState, ResizeEnded, ResizeStarted};
use bevy::audio::{AudioSink, AudioSinkPlayback, AudioSource, PlaybackSettings, Volume};
use bevy::prelude::*;

const SAMPLE_RATE: u32 = 44_100;
const ENLARGE_TONE_HZ: f32 = 440.0;
const SHRINK_TONE_HZ: f32 = 220.0;
const DEFAULT_VOLUME: f32 = 0.6;

/// The two feedback clips and the playback controls shared by both modes.
#[derive(Resource)]
pub struct ResizeAudio {
    pub enlarge_clip: Handle<AudioSource>,
    pub shrink_clip: Handle<AudioSource>,
    pub volume: f32,
    pub muted: bool,
}

impl ResizeAudio {
    pub fn clip(&self, mode: DragMode) -> Handle<AudioSource> {
        match mode {
            DragMode::Enlarge => self.enlarge_clip.clone(),
            DragMode::Shrink => self.shrink_clip.clone(),
        }
    }

    /// Which mode's cue a clip handle belongs to, if it is one of ours.
    pub fn mode_of(&self, clip: &Handle<AudioSource>) -> Option<DragMode> {
        if *clip == self.enlarge_clip {
            Some(DragMode::Enlarge)
        } else if *clip == self.shrink_clip {
            Some(DragMode::Shrink)
        } else {
            None
        }
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }
}

/// Loads the feedback clips named by the settings file, synthesizing looping
/// sine tones for the ones left unset.
pub fn setup_resize_audio(
    mut commands: Commands,
    cli: Res<CliArgs>,
    settings: Res<ResizeSettings>,
    asset_server: Res<AssetServer>,
    mut sources: ResMut<Assets<AudioSource>>,
) {
    let enlarge_clip = match &settings.enlarge_clip {
        Some(path) => asset_server.load(path.clone()),
        None => sources.add(looping_tone(ENLARGE_TONE_HZ)),
    };
    let shrink_clip = match &settings.shrink_clip {
        Some(path) => asset_server.load(path.clone()),
        None => sources.add(looping_tone(SHRINK_TONE_HZ)),
    };

    commands.insert_resource(ResizeAudio {
        enlarge_clip,
        shrink_clip,
        volume: settings.volume.unwrap_or(DEFAULT_VOLUME),
        muted: cli.mute,
    });
}

/// Attach-or-replace the looping emitter on the target when a session starts.
/// A new session's clip fully replaces whatever the emitter was playing.
pub fn play_on_resize_start(
    mut commands: Commands,
    audio: Res<ResizeAudio>,
    mut started: EventReader<ResizeStarted>,
    sinks: Query<&AudioSink>,
) {
    for event in started.read() {
        if let Ok(sink) = sinks.get(event.target) {
            sink.stop();
        }

        let Some(mut entity) = commands.get_entity(event.target) else {
            continue;
        };
        entity.remove::<(Handle<AudioSource>, PlaybackSettings, AudioSink)>();
        entity.insert(AudioBundle {
            source: audio.clip(event.mode),
            settings: PlaybackSettings::LOOP
                .with_volume(Volume::new(audio.effective_volume())),
        });
    }
}

/// Whether a session end on `target` should silence its emitter, given which
/// mode's clip the emitter currently plays.
///
/// The cue survives exactly when a live session on the target still owns the
/// playing clip: a replacement drag of the same mode, or the other button's
/// takeover. An emitter left with the clip of a session that is gone goes
/// silent even if the other button still drags the target.
pub fn should_stop_emitter(drag_state: &DragState, target: Entity, playing: DragMode) -> bool {
    !drag_state.holds_target(playing, target)
}

/// Stops and detaches the emitter when a session ends, unless a live session
/// on the target still owns the playing clip.
pub fn stop_on_resize_end(
    mut commands: Commands,
    audio: Res<ResizeAudio>,
    drag_state: Res<DragState>,
    mut ended: EventReader<ResizeEnded>,
    emitters: Query<(&Handle<AudioSource>, Option<&AudioSink>)>,
) {
    for event in ended.read() {
        let Ok((source, sink)) = emitters.get(event.target) else {
            continue;
        };
        let Some(playing) = audio.mode_of(source) else {
            continue;
        };
        if !should_stop_emitter(&drag_state, event.target, playing) {
            continue;
        }

        if let Some(sink) = sink {
            sink.stop();
        }
        if let Some(mut entity) = commands.get_entity(event.target) {
            entity.remove::<(Handle<AudioSource>, PlaybackSettings, AudioSink)>();
        }
    }
}

/// Applies live volume/mute changes to the emitters of active sessions.
pub fn sync_volume(
    audio: Res<ResizeAudio>,
    drag_state: Res<DragState>,
    sinks: Query<&AudioSink>,
) {
    if !audio.is_changed() {
        return;
    }

    for session in drag_state.sessions() {
        if let Ok(sink) = sinks.get(session.target) {
            sink.set_volume(audio.effective_volume());
        }
    }
}

fn looping_tone(frequency: f32) -> AudioSource {
    AudioSource {
        bytes: wav_sine(frequency, SAMPLE_RATE).into(),
    }
}

/// Builds a mono 16-bit PCM WAV of roughly one second holding a whole number
/// of sine cycles, so looped playback has no seam.
fn wav_sine(frequency: f32, sample_rate: u32) -> Vec<u8> {
    let cycles = frequency.round().max(1.0);
    let num_samples = (cycles * sample_rate as f32 / frequency).round() as u32;
    let data_len = num_samples * 2;

    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk size
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * 2).to_le_bytes()); // byte rate
    bytes.extend_from_slice(&2u16.to_le_bytes()); // block align
    bytes.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());

    for i in 0..num_samples {
        let t = i as f32 / sample_rate as f32;
        let sample = (t * frequency * std::f32::consts::TAU).sin();
        bytes.extend_from_slice(&((sample * i16::MAX as f32 * 0.5) as i16).to_le_bytes());
    }

    bytes
}
