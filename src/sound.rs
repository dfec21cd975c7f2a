use anyhow::Result;
use bevy_ecs::prelude::*;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SizedSample};
use crossbeam_channel::{Receiver, Sender, bounded};
use fundsp::hacker32::*;
use log::{debug, error, info};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crate::config::AudioConfig;

// Sound effects the game can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    MenuSelect,
    GameStart,
    ActionRejected,
    Rotate,
    PieceLock,
    LineClearSingle,
    LineClearDouble,
    LineClearTriple,
    LineClearFour,
    LevelUp,
    GameOver,
    Victory,
}

impl SoundEffect {
    /// Line clear jingle for the number of rows cleared in one pass.
    #[must_use]
    pub fn for_lines(lines: usize) -> Option<Self> {
        match lines {
            0 => None,
            1 => Some(SoundEffect::LineClearSingle),
            2 => Some(SoundEffect::LineClearDouble),
            3 => Some(SoundEffect::LineClearTriple),
            _ => Some(SoundEffect::LineClearFour),
        }
    }

    /// How long the effect stays in the mix, in seconds.
    #[must_use]
    pub fn duration(self) -> f64 {
        match self {
            SoundEffect::MenuSelect | SoundEffect::ActionRejected | SoundEffect::Rotate => 0.08,
            SoundEffect::PieceLock => 0.15,
            SoundEffect::LineClearSingle | SoundEffect::LineClearDouble => 0.5,
            SoundEffect::LineClearTriple | SoundEffect::GameStart => 0.75,
            SoundEffect::LineClearFour | SoundEffect::LevelUp => 1.0,
            SoundEffect::GameOver | SoundEffect::Victory => 2.0,
        }
    }
}

/// Effects requested by the game logic during a frame. The front end drains
/// it into `AudioState` once the frame is done.
#[derive(Resource, Debug, Default)]
pub struct SoundQueue {
    pending: Vec<SoundEffect>,
}

impl SoundQueue {
    pub fn push(&mut self, effect: SoundEffect) {
        self.pending.push(effect);
    }

    #[must_use]
    pub fn pending(&self) -> &[SoundEffect] {
        &self.pending
    }

    #[must_use]
    pub fn contains(&self, effect: SoundEffect) -> bool {
        self.pending.contains(&effect)
    }

    pub fn drain(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.pending)
    }
}

// Command to control the audio thread
enum AudioCommand {
    PlaySound(SoundEffect),
    PlayMusic(bool), // true to start, false to stop
    SetVolume(f32),  // 0.0 to 1.0
    Quit,
}

#[derive(Resource)]
pub struct AudioState {
    sender: Option<Sender<AudioCommand>>,
    available: Arc<AtomicBool>,
    music_enabled: bool,
    sound_enabled: bool,
    volume: f32,
}

impl AudioState {
    /// Starts the audio thread. A missing or broken output device is logged
    /// by the thread and only marks the state as unavailable.
    #[must_use]
    pub fn new(config: &AudioConfig) -> Self {
        let (sender, receiver) = bounded(64);
        let available = Arc::new(AtomicBool::new(true));
        let thread_available = Arc::clone(&available);
        let volume = config.volume.clamp(0.0, 1.0);
        let music_enabled = config.music_enabled;

        let spawned = thread::Builder::new()
            .name("audio".into())
            .spawn(move || {
                if let Err(e) = run_audio_thread(&receiver, volume, music_enabled) {
                    error!("Audio thread error: {e}");
                }
                thread_available.store(false, Ordering::Relaxed);
            });

        let sender = match spawned {
            Ok(_) => Some(sender),
            Err(e) => {
                error!("Failed to start audio thread: {e}");
                available.store(false, Ordering::Relaxed);
                None
            }
        };

        Self {
            sender,
            available,
            music_enabled,
            sound_enabled: config.sound_enabled,
            volume,
        }
    }

    /// An audio state with no output behind it. Settings still work.
    #[must_use]
    pub fn detached(config: &AudioConfig) -> Self {
        Self {
            sender: None,
            available: Arc::new(AtomicBool::new(false)),
            music_enabled: config.music_enabled,
            sound_enabled: config.sound_enabled,
            volume: config.volume.clamp(0.0, 1.0),
        }
    }

    pub fn is_audio_available(&self) -> bool {
        self.sender.is_some() && self.available.load(Ordering::Relaxed)
    }

    /// Fire and forget. Returns false when sound effects are switched off.
    pub fn play_sound(&self, effect: SoundEffect) -> bool {
        if !self.sound_enabled {
            return false;
        }
        if let Some(sender) = &self.sender {
            if sender.try_send(AudioCommand::PlaySound(effect)).is_err() {
                debug!("Dropped sound effect {effect:?}");
            }
        }
        true
    }

    pub fn is_music_enabled(&self) -> bool {
        self.music_enabled
    }

    pub fn is_sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
    }

    pub fn get_volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);

        if let Some(sender) = &self.sender {
            let _ = sender.try_send(AudioCommand::SetVolume(self.volume));
        }
    }

    pub fn toggle_music(&mut self) {
        self.music_enabled = !self.music_enabled;

        if let Some(sender) = &self.sender {
            let _ = sender.try_send(AudioCommand::PlayMusic(self.music_enabled));
        }
    }

    /// Current settings, for saving back to the config file.
    #[must_use]
    pub fn settings(&self, volume_step: f32) -> AudioConfig {
        AudioConfig {
            music_enabled: self.music_enabled,
            sound_enabled: self.sound_enabled,
            volume: self.volume,
            volume_step,
        }
    }
}

impl Drop for AudioState {
    fn drop(&mut self) {
        if let Some(sender) = &self.sender {
            let _ = sender.try_send(AudioCommand::Quit);
        }
    }
}

fn run_audio_thread(
    receiver: &Receiver<AudioCommand>,
    mut volume: f32,
    mut music_enabled: bool,
) -> Result<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("No audio output device found"))?;
    let config = device.default_output_config()?;

    // Channels into the stream callback
    let (sound_sender, sound_receiver) = bounded::<SoundEffect>(64);
    let (cmd_sender, cmd_receiver) = bounded::<(bool, f32)>(16);

    let _stream = match config.sample_format() {
        cpal::SampleFormat::F32 => run_audio_stream::<f32>(
            &device,
            &config.into(),
            sound_receiver,
            cmd_receiver,
            volume,
            music_enabled,
        )?,
        cpal::SampleFormat::I16 => run_audio_stream::<i16>(
            &device,
            &config.into(),
            sound_receiver,
            cmd_receiver,
            volume,
            music_enabled,
        )?,
        cpal::SampleFormat::U16 => run_audio_stream::<u16>(
            &device,
            &config.into(),
            sound_receiver,
            cmd_receiver,
            volume,
            music_enabled,
        )?,
        _ => return Err(anyhow::anyhow!("Unsupported audio format")),
    };

    // Keep the stream alive until told to quit or the game side hangs up
    while let Ok(command) = receiver.recv() {
        match command {
            AudioCommand::PlaySound(effect) => {
                let _ = sound_sender.try_send(effect);
            }
            AudioCommand::PlayMusic(enabled) => {
                music_enabled = enabled;
                let _ = cmd_sender.try_send((music_enabled, volume));
            }
            AudioCommand::SetVolume(new_volume) => {
                volume = new_volume;
                let _ = cmd_sender.try_send((music_enabled, volume));
            }
            AudioCommand::Quit => break,
        }
    }

    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn run_audio_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    sound_receiver: Receiver<SoundEffect>,
    cmd_receiver: Receiver<(bool, f32)>,
    initial_volume: f32,
    initial_music_enabled: bool,
) -> Result<cpal::Stream>
where
    T: SizedSample + FromSample<f32>,
{
    let sample_rate = f64::from(config.sample_rate.0);
    let channels = config.channels as usize;

    let mut music_enabled = initial_music_enabled;
    let mut volume = initial_volume;
    let mut music = create_background_music();
    music.set_sample_rate(sample_rate);

    // Sounds currently playing, with their start time
    let mut active_sounds: Vec<(SoundEffect, f64)> = Vec::new();
    let mut current_time = 0.0;

    let mut next_value = move || {
        while let Ok((new_music_enabled, new_volume)) = cmd_receiver.try_recv() {
            music_enabled = new_music_enabled;
            volume = new_volume;
        }

        while let Ok(effect) = sound_receiver.try_recv() {
            active_sounds.push((effect, current_time));
        }

        active_sounds.retain(|(effect, start)| current_time - start <= effect.duration());

        let mut left = 0.0;
        let mut right = 0.0;
        for (effect, start) in &active_sounds {
            let (l, r) = generate_sound_sample(*effect, current_time - start);
            left += l;
            right += r;
        }

        if music_enabled {
            let (l, r) = music.get_stereo();
            left += l;
            right += r;
        }

        current_time += 1.0 / sample_rate;

        ((left * volume).clamp(-1.0, 1.0), (right * volume).clamp(-1.0, 1.0))
    };

    let err_fn = |err| error!("Error in audio stream: {err}");

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            for frame in data.chunks_mut(channels) {
                let (left, right) = next_value();
                let left = T::from_sample(left);
                let right = T::from_sample(right);

                for (channel, sample) in frame.iter_mut().enumerate() {
                    *sample = if channel & 1 == 0 { left } else { right };
                }
            }
        },
        err_fn,
        None,
    )?;

    stream.play()?;
    info!("Audio stream started on {}", device.name().unwrap_or_default());

    Ok(stream)
}

fn tone(t: f32, freq: f32, amp: f32) -> f32 {
    (t * freq * std::f32::consts::TAU).sin() * amp
}

/// Notes played back to back, each lasting `step` seconds.
fn arpeggio(t: f32, notes: &[f32], step: f32, amp: f32) -> f32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = (t / step) as usize;
    notes.get(index).map_or(0.0, |freq| tone(t, *freq, amp))
}

/// Sample of `effect` at `t` seconds after it started, as (left, right).
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn generate_sound_sample(effect: SoundEffect, t: f64) -> (f32, f32) {
    if t < 0.0 || t > effect.duration() {
        return (0.0, 0.0);
    }
    let t = t as f32;

    let sample = match effect {
        SoundEffect::MenuSelect => tone(t, 660.0, 0.25),
        SoundEffect::Rotate => tone(t, 440.0, 0.3),
        SoundEffect::ActionRejected => {
            // Low buzz with a square-ish edge
            tone(t, 110.0, 0.3).signum() * 0.12
        }
        SoundEffect::PieceLock => {
            let amp = (0.15 - t).max(0.0) * 3.0;
            let noise = fastrand::f32() * 0.1;
            (noise + tone(t, 80.0, 0.2)) * amp
        }
        SoundEffect::GameStart => arpeggio(t, &[392.0, 523.0, 659.0], 0.25, 0.3),
        SoundEffect::LineClearSingle | SoundEffect::LineClearDouble => {
            let freq = 300.0 + 500.0 * (t * 5.0).min(1.0);
            let amp = if t < 0.2 { 1.0 } else { (0.5 - t).max(0.0) * 2.0 };
            let boost = if effect == SoundEffect::LineClearDouble { 1.3 } else { 1.0 };
            tone(t, freq * boost, amp * 0.3)
        }
        SoundEffect::LineClearTriple => arpeggio(t, &[440.0, 554.0, 659.0], 0.25, 0.16),
        SoundEffect::LineClearFour => arpeggio(t, &[440.0, 554.0, 659.0, 880.0], 0.25, 0.16),
        SoundEffect::LevelUp => arpeggio(t, &[330.0, 392.0, 494.0, 659.0], 0.25, 0.16),
        SoundEffect::GameOver => {
            let freq = 600.0 - 200.0 * t;
            tone(t, freq, (2.0 - t).max(0.0) * 0.2)
        }
        SoundEffect::Victory => arpeggio(
            t,
            &[523.0, 659.0, 784.0, 1047.0, 784.0, 1047.0, 1319.0, 1568.0],
            0.25,
            0.16,
        ),
    };

    (sample, sample)
}

// Background loop: bass, a stepping pentatonic melody and a soft chord pad
fn create_background_music() -> Box<dyn AudioUnit + Send> {
    let bass = sine_hz(110.0) * 0.08;

    let melody = lfo(move |t: f32| -> f32 {
        let notes: [f32; 5] = [220.0, 261.63, 293.66, 349.23, 392.0];
        let idx = ((t * 0.5) % 5.0) as usize;
        notes[idx]
    }) >> sine() * 0.1;

    let chord = sine_hz(220.0) * 0.03 + sine_hz(329.63) * 0.02 + sine_hz(392.0) * 0.02;

    let rhythm =
        lfo(move |t: f32| -> f32 { if (t * 2.0) % 1.0 < 0.1 { 0.05 } else { 0.0 } }) * sine_hz(440.0);

    let music = (bass + melody + chord + rhythm) * 0.6;

    Box::new(music >> pan(0.0))
}
