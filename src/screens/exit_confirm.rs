#![warn(clippy::all, clippy::pedantic)]

use super::{ScreenId, ScreenTransition, ScreenUpdate, menu_lines};
use crate::app::GameSession;
use crate::input::{FrameInput, Key};
use crate::render::RenderList;

/// "Really quit?" Yes leaves this screen, no goes back to the menu with the
/// prompt kept underneath.
pub fn update(_session: &mut GameSession, input: &FrameInput) -> ScreenUpdate {
    let mut render = RenderList::new();
    menu_lines(&mut render, "STACKFALL", &["(Q)uit Game (Y or N)"]);

    ScreenUpdate::new(render, answer(input))
}

/// Shared by every screen that ends in the quit prompt.
pub(crate) fn answer(input: &FrameInput) -> ScreenTransition {
    if input.was_pressed(Key::Char('y')) || input.was_pressed(Key::Escape) {
        ScreenTransition::Pop
    } else if input.was_pressed(Key::Char('n')) {
        ScreenTransition::Replace(vec![ScreenId::ExitConfirm, ScreenId::Menu])
    } else {
        ScreenTransition::Stay
    }
}
