#![warn(clippy::all, clippy::pedantic)]

use log::info;

use super::{ScreenTransition, ScreenUpdate, menu_lines};
use crate::app::GameSession;
use crate::input::{FrameInput, Key};
use crate::render::RenderList;
use crate::sound::SoundEffect;

fn on_off(enabled: bool) -> &'static str {
    if enabled { "ON" } else { "OFF" }
}

pub fn update(session: &mut GameSession, input: &FrameInput) -> ScreenUpdate {
    let step = session.volume_step();
    let mut changed = true;

    if input.was_pressed(Key::Char('g')) {
        let mut display = session.display_mut();
        display.show_ghost = !display.show_ghost;
        info!("Ghost piece {}", on_off(display.show_ghost));
    } else if input.was_pressed(Key::Char('+')) || input.was_pressed(Key::Char('=')) {
        let mut audio = session.audio_mut();
        let volume = audio.get_volume();
        audio.set_volume(volume + step);
    } else if input.was_pressed(Key::Char('-')) {
        let mut audio = session.audio_mut();
        let volume = audio.get_volume();
        audio.set_volume(volume - step);
    } else if input.was_pressed(Key::Char('m')) {
        session.audio_mut().toggle_music();
    } else if input.was_pressed(Key::Char('s')) {
        session.audio_mut().toggle_sound();
    } else {
        changed = false;
    }

    if changed {
        session.queue_sound(SoundEffect::MenuSelect);
    }

    let transition = if input.was_pressed(Key::Char('q')) || input.was_pressed(Key::Escape) {
        ScreenTransition::Pop
    } else {
        ScreenTransition::Stay
    };

    let audio = session.audio();
    let ghost = format!("(G)host piece: {}", on_off(session.display().show_ghost));
    let volume = format!("Volume (+/-): {:.0}%", audio.get_volume() * 100.0);
    let music = format!("(M)usic: {}", on_off(audio.is_music_enabled()));
    let sound = format!("(S)ound effects: {}", on_off(audio.is_sound_enabled()));

    let mut render = RenderList::new();
    menu_lines(
        &mut render,
        "OPTIONS",
        &[
            ghost.as_str(),
            volume.as_str(),
            music.as_str(),
            sound.as_str(),
            "(Q) Back",
        ],
    );

    ScreenUpdate::new(render, transition)
}
