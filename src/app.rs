#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::debug;
use std::error;
use std::time::Duration;

use crate::board::Board;
use crate::components::{DisplaySettings, DropTimers, GameProgress, PieceRng, Pieces};
use crate::config::{Config, DisplayConfig, GameplayConfig};
use crate::sound::{AudioState, SoundEffect, SoundQueue};

pub type AppResult<T> = std::result::Result<T, Box<dyn error::Error>>;

/// Everything a running game owns. Game state lives as resources in `world`
/// so the systems can work on it the same way.
pub struct GameSession {
    pub world: World,
    display: DisplayConfig,
    volume_step: f32,
}

impl GameSession {
    /// A session with a live audio thread.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::build(
            config,
            fastrand::Rng::new(),
            AudioState::new(&config.audio),
        )
    }

    /// A session without audio output.
    #[must_use]
    pub fn headless(config: &Config) -> Self {
        Self::build(
            config,
            fastrand::Rng::new(),
            AudioState::detached(&config.audio),
        )
    }

    /// Headless, with a fixed piece sequence.
    #[must_use]
    pub fn with_seed(config: &Config, seed: u64) -> Self {
        Self::build(
            config,
            fastrand::Rng::with_seed(seed),
            AudioState::detached(&config.audio),
        )
    }

    fn build(config: &Config, mut rng: fastrand::Rng, audio: AudioState) -> Self {
        let rules = config.gameplay.clone();
        let mut world = World::new();

        world.insert_resource(Pieces::random(&mut rng));
        world.insert_resource(PieceRng(rng));
        world.insert_resource(Board::new());
        world.insert_resource(GameProgress::new(&rules));
        world.insert_resource(DropTimers::new(&rules));
        world.insert_resource(SoundQueue::default());
        world.insert_resource(audio);
        world.insert_resource(DisplaySettings {
            show_ghost: config.display.show_ghost,
        });
        world.insert_resource(rules);

        debug!("Game session created");

        Self {
            world,
            display: config.display.clone(),
            volume_step: config.audio.volume_step,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.world.resource::<Board>()
    }

    pub fn board_mut(&mut self) -> Mut<'_, Board> {
        self.world.resource_mut::<Board>()
    }

    #[must_use]
    pub fn pieces(&self) -> &Pieces {
        self.world.resource::<Pieces>()
    }

    pub fn pieces_mut(&mut self) -> Mut<'_, Pieces> {
        self.world.resource_mut::<Pieces>()
    }

    #[must_use]
    pub fn progress(&self) -> &GameProgress {
        self.world.resource::<GameProgress>()
    }

    pub fn progress_mut(&mut self) -> Mut<'_, GameProgress> {
        self.world.resource_mut::<GameProgress>()
    }

    #[must_use]
    pub fn rules(&self) -> &GameplayConfig {
        self.world.resource::<GameplayConfig>()
    }

    #[must_use]
    pub fn timers(&self) -> &DropTimers {
        self.world.resource::<DropTimers>()
    }

    #[must_use]
    pub fn display(&self) -> &DisplaySettings {
        self.world.resource::<DisplaySettings>()
    }

    pub fn display_mut(&mut self) -> Mut<'_, DisplaySettings> {
        self.world.resource_mut::<DisplaySettings>()
    }

    #[must_use]
    pub fn audio(&self) -> &AudioState {
        self.world.resource::<AudioState>()
    }

    pub fn audio_mut(&mut self) -> Mut<'_, AudioState> {
        self.world.resource_mut::<AudioState>()
    }

    #[must_use]
    pub fn volume_step(&self) -> f32 {
        self.volume_step
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.display.frame_interval()
    }

    pub fn queue_sound(&mut self, effect: SoundEffect) {
        self.world.resource_mut::<SoundQueue>().push(effect);
    }

    #[must_use]
    pub fn pending_sounds(&self) -> &[SoundEffect] {
        self.world.resource::<SoundQueue>().pending()
    }

    /// Hands queued effects to the audio thread. Returns how many were queued.
    pub fn flush_sounds(&mut self) -> usize {
        let effects = self.world.resource_mut::<SoundQueue>().drain();
        let audio = self.world.resource::<AudioState>();
        for effect in &effects {
            audio.play_sound(*effect);
        }
        effects.len()
    }

    /// Current settings, including any changes made in the options screen.
    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            gameplay: self.rules().clone(),
            audio: self.audio().settings(self.volume_step),
            display: DisplayConfig {
                show_ghost: self.display().show_ghost,
                frame_interval_ms: self.display.frame_interval_ms,
            },
        }
    }
}
