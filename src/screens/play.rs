#![warn(clippy::all, clippy::pedantic)]

use super::{ScreenId, ScreenTransition, ScreenUpdate};
use crate::app::GameSession;
use crate::components::{Direction, Rgb};
use crate::game::{
    GAME_AREA_BOTTOM, GAME_AREA_LEFT, GAME_AREA_RIGHT, GAME_AREA_TOP, INFO_PANEL_X,
    NEXT_BLOCK_Y, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::input::{FrameInput, Key};
use crate::render::{RenderList, TextStyle};
use crate::systems::{self, PlayOutcome};

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const PLAYFIELD: Rgb = Rgb::new(24, 24, 32);

// Rows of the side panel, in window pixels
const PANEL_NEXT_LABEL_Y: i32 = NEXT_BLOCK_Y - 60;
const PANEL_FIRST_STAT_Y: i32 = NEXT_BLOCK_Y + 100;
const PANEL_STAT_SPACING: i32 = 40;

pub fn update(session: &mut GameSession, input: &FrameInput) -> ScreenUpdate {
    if input.was_pressed(Key::Escape) {
        return ScreenUpdate::new(draw(session), ScreenTransition::Pop);
    }

    if input.was_pressed(Key::Up) {
        systems::try_rotate(&mut session.world);
    }

    // One sideways or down step per frame, left taking priority.
    // A tap released before the frame still counts as one step
    let held_move = if is_active(input, Key::Left) {
        Some(Direction::Left)
    } else if is_active(input, Key::Right) {
        Some(Direction::Right)
    } else if is_active(input, Key::Down) {
        Some(Direction::Down)
    } else {
        None
    };
    if let Some(direction) = held_move {
        systems::try_move(&mut session.world, direction);
    }

    let transition = match systems::gravity_tick(&mut session.world) {
        PlayOutcome::Continue => ScreenTransition::Stay,
        PlayOutcome::Won => ScreenTransition::Reset(vec![ScreenId::Win]),
        PlayOutcome::Lost => ScreenTransition::Reset(vec![ScreenId::Loss]),
    };

    ScreenUpdate::new(draw(session), transition)
}

fn is_active(input: &FrameInput, key: Key) -> bool {
    input.is_held(key) || input.was_pressed(key)
}

fn draw(session: &GameSession) -> RenderList {
    let mut render = RenderList::new();
    render.fill_rect(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, BACKGROUND);
    render.fill_rect(
        GAME_AREA_LEFT,
        GAME_AREA_TOP,
        GAME_AREA_RIGHT - GAME_AREA_LEFT,
        GAME_AREA_BOTTOM - GAME_AREA_TOP,
        PLAYFIELD,
    );

    let board = session.board();
    for square in board.squares() {
        render.fill_square(square, square.color());
    }

    let pieces = session.pieces();
    if session.display().show_ghost {
        let ghost = systems::ghost_block(&pieces.focus, board);
        for square in ghost.squares() {
            render.fill_square(square, square.color().dimmed());
        }
    }
    for square in pieces.focus.squares() {
        render.fill_square(square, square.color());
    }
    for square in pieces.next.squares() {
        render.fill_square(square, square.color());
    }

    let progress = session.progress();
    let rules = session.rules();
    render.text("Next:", INFO_PANEL_X, PANEL_NEXT_LABEL_Y, TextStyle::Highlight);

    let stats = [
        format!("Goal: {}", progress.needed_score(rules)),
        format!("Score: {}", progress.score),
        format!("Level: {}", progress.level),
        format!("Lines: {}", progress.lines_cleared),
    ];
    let mut y = PANEL_FIRST_STAT_Y;
    for line in stats {
        render.text(line, INFO_PANEL_X, y, TextStyle::Normal);
        y += PANEL_STAT_SPACING;
    }

    render
}
