#![warn(clippy::all, clippy::pedantic)]

use super::{ScreenUpdate, exit_confirm, menu_lines};
use crate::app::GameSession;
use crate::input::FrameInput;
use crate::render::RenderList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    fn headline(self) -> &'static str {
        match self {
            Outcome::Win => "You Win!!!",
            Outcome::Loss => "You Lose.",
        }
    }
}

/// End-of-game screen. It sits alone on the stack, so quitting here ends
/// the program.
pub fn update(outcome: Outcome, _session: &mut GameSession, input: &FrameInput) -> ScreenUpdate {
    let mut render = RenderList::new();
    menu_lines(
        &mut render,
        "STACKFALL",
        &[outcome.headline(), "(Q)uit Game (Y or N)"],
    );

    ScreenUpdate::new(render, exit_confirm::answer(input))
}
