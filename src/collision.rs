#![warn(clippy::all, clippy::pedantic)]

//! Pure collision predicates. Callers check first and mutate second; nothing
//! here ever moves a piece.

use crate::board::Board;
use crate::components::{Block, Direction, Square};
use crate::game::{CELL_SIZE, GAME_AREA_BOTTOM, GAME_AREA_LEFT, GAME_AREA_RIGHT};

/// Strict overlap: squares exactly one cell apart are neighbours, not a hit.
fn overlaps_board(x: i32, y: i32, board: &Board) -> bool {
    board
        .squares()
        .iter()
        .any(|s| (x - s.center_x()).abs() < CELL_SIZE && (y - s.center_y()).abs() < CELL_SIZE)
}

/// Whether a one-cell move would push the square past the left, right or
/// bottom edge. The top is open.
#[must_use]
pub fn square_hits_wall(square: &Square, direction: Direction) -> bool {
    let (x, y) = (square.center_x(), square.center_y());

    match direction {
        Direction::Down => y + CELL_SIZE > GAME_AREA_BOTTOM,
        Direction::Left => x - CELL_SIZE < GAME_AREA_LEFT,
        Direction::Right => x + CELL_SIZE > GAME_AREA_RIGHT,
    }
}

#[must_use]
pub fn block_hits_wall(block: &Block, direction: Direction) -> bool {
    block
        .squares()
        .iter()
        .any(|square| square_hits_wall(square, direction))
}

/// Whether a one-cell move would put the square on top of a settled one.
#[must_use]
pub fn square_hits_board(square: &Square, direction: Direction, board: &Board) -> bool {
    let (x, y) = square.projected(direction);
    overlaps_board(x, y, board)
}

#[must_use]
pub fn block_hits_board(block: &Block, direction: Direction, board: &Board) -> bool {
    block
        .squares()
        .iter()
        .any(|square| square_hits_board(square, direction, board))
}

/// Whether rotating the block would leave the playfield sideways, sink
/// below the floor, or overlap the board.
#[must_use]
pub fn rotation_collides(block: &Block, board: &Board) -> bool {
    block.rotated_squares().iter().any(|&(x, y)| {
        x < GAME_AREA_LEFT || x > GAME_AREA_RIGHT || y > GAME_AREA_BOTTOM || overlaps_board(x, y, board)
    })
}

#[must_use]
pub fn can_move(block: &Block, direction: Direction, board: &Board) -> bool {
    !block_hits_wall(block, direction) && !block_hits_board(block, direction, board)
}

/// Whether the block is resting on the floor or on settled squares.
#[must_use]
pub fn is_grounded(block: &Block, board: &Board) -> bool {
    !can_move(block, Direction::Down, board)
}
