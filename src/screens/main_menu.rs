#![warn(clippy::all, clippy::pedantic)]

use log::info;

use super::{ScreenId, ScreenTransition, ScreenUpdate, menu_lines};
use crate::app::GameSession;
use crate::input::{FrameInput, Key};
use crate::render::RenderList;
use crate::sound::SoundEffect;

pub fn update(session: &mut GameSession, input: &FrameInput) -> ScreenUpdate {
    let mut render = RenderList::new();
    menu_lines(
        &mut render,
        "STACKFALL",
        &["Start (G)ame", "(Q)uit game", "(O)ptions"],
    );

    let transition = if input.was_pressed(Key::Char('g')) {
        info!("Starting game");
        session.queue_sound(SoundEffect::GameStart);
        ScreenTransition::Push(ScreenId::Play)
    } else if input.was_pressed(Key::Char('o')) {
        session.queue_sound(SoundEffect::MenuSelect);
        ScreenTransition::Push(ScreenId::Options)
    } else if input.was_pressed(Key::Char('q')) || input.was_pressed(Key::Escape) {
        ScreenTransition::Pop
    } else {
        ScreenTransition::Stay
    };

    ScreenUpdate::new(render, transition)
}
