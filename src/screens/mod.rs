//! The screens of the game and the stack that sequences them.
//!
//! Only the top of the stack runs. Each frame it reads the input, may touch
//! the game session, and answers with draw commands plus a transition that
//! tells the stack what to do next.

#![warn(clippy::all, clippy::pedantic)]

pub mod exit_confirm;
pub mod main_menu;
pub mod options_menu;
pub mod outcome;
pub mod play;
pub mod stack;

pub use stack::{ScreenEntry, ScreenStack};

use crate::app::GameSession;
use crate::input::FrameInput;
use crate::render::RenderList;

// Left edge and line spacing of menu text, in window pixels
pub(crate) const MENU_TEXT_X: i32 = 100;
pub(crate) const MENU_TITLE_Y: i32 = 60;
pub(crate) const MENU_FIRST_LINE_Y: i32 = 120;
pub(crate) const MENU_LINE_SPACING: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Menu,
    Play,
    ExitConfirm,
    Win,
    Loss,
    Options,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    Stay,
    Push(ScreenId),
    /// Remove the top screen.
    Pop,
    /// Pop the top screen, then push these in order.
    Replace(Vec<ScreenId>),
    /// Empty the stack, then push these in order.
    Reset(Vec<ScreenId>),
    /// Empty the stack, ending the program.
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenUpdate {
    pub render: RenderList,
    pub transition: ScreenTransition,
}

impl ScreenUpdate {
    #[must_use]
    pub fn new(render: RenderList, transition: ScreenTransition) -> Self {
        Self { render, transition }
    }

    #[must_use]
    pub fn stay(render: RenderList) -> Self {
        Self::new(render, ScreenTransition::Stay)
    }
}

impl ScreenId {
    /// Runs one frame of this screen. A close request exits from any screen.
    pub fn update(self, session: &mut GameSession, input: &FrameInput) -> ScreenUpdate {
        if input.close_requested() {
            return ScreenUpdate::new(RenderList::new(), ScreenTransition::Exit);
        }

        match self {
            ScreenId::Menu => main_menu::update(session, input),
            ScreenId::Play => play::update(session, input),
            ScreenId::ExitConfirm => exit_confirm::update(session, input),
            ScreenId::Win => outcome::update(outcome::Outcome::Win, session, input),
            ScreenId::Loss => outcome::update(outcome::Outcome::Loss, session, input),
            ScreenId::Options => options_menu::update(session, input),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ScreenId::Menu => "menu",
            ScreenId::Play => "play",
            ScreenId::ExitConfirm => "exit confirm",
            ScreenId::Win => "win",
            ScreenId::Loss => "loss",
            ScreenId::Options => "options",
        }
    }
}

/// Adds menu lines below the title, one per entry.
pub(crate) fn menu_lines(render: &mut RenderList, title: &str, lines: &[&str]) {
    use crate::render::TextStyle;

    render.text(title, MENU_TEXT_X, MENU_TITLE_Y, TextStyle::Title);
    let mut y = MENU_FIRST_LINE_Y;
    for line in lines {
        render.text(*line, MENU_TEXT_X, y, TextStyle::Normal);
        y += MENU_LINE_SPACING;
    }
}
