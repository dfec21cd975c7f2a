#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Row indices are bounded by PLAYFIELD_ROWS, which fits in every integer type used here
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::{Block, Direction, Square};
use crate::game::{CELL_HALF_WIDTH, CELL_SIZE, GAME_AREA_BOTTOM, PLAYFIELD_COLUMNS, PLAYFIELD_ROWS};

/// Center of the top visible row, derived from the fixed bottom edge.
const TOP_ROW_CENTER: i32 =
    GAME_AREA_BOTTOM - CELL_HALF_WIDTH - (PLAYFIELD_ROWS as i32 - 1) * CELL_SIZE;

/// Row index of a pixel-space center. Row 0 is the top visible row; squares
/// above the field get negative indices.
#[must_use]
pub fn row_of(center_y: i32) -> i32 {
    (center_y - TOP_ROW_CENTER).div_euclid(CELL_SIZE)
}

/// Settled squares from every block that has locked so far.
#[derive(Resource, Debug, Clone, Default)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn push(&mut self, square: Square) {
        self.squares.push(square);
    }

    /// Takes ownership of a locked block's squares.
    pub fn absorb(&mut self, block: Block) {
        self.squares.extend(block.into_squares());
    }

    pub fn clear(&mut self) {
        self.squares.clear();
    }

    /// Whether some square is centered exactly at `(x, y)`.
    #[must_use]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.squares.iter().any(|s| s.center() == (x, y))
    }

    /// Occupied squares per visible row. Squares outside the visible rows
    /// are not counted.
    #[must_use]
    pub fn row_counts(&self) -> [usize; PLAYFIELD_ROWS] {
        let mut counts = [0; PLAYFIELD_ROWS];

        for square in &self.squares {
            let row = row_of(square.center_y());
            if (0..PLAYFIELD_ROWS as i32).contains(&row) {
                counts[row as usize] += 1;
            } else {
                warn!(
                    "Square at ({}, {}) lies outside the visible rows (row {row})",
                    square.center_x(),
                    square.center_y()
                );
            }
        }

        counts
    }

    /// Removes every full row and lets the squares above fall into the gap.
    /// Returns the number of rows cleared.
    pub fn check_completed_lines(&mut self) -> usize {
        let completed: Vec<i32> = self
            .row_counts()
            .iter()
            .enumerate()
            .filter(|(_, count)| **count == PLAYFIELD_COLUMNS)
            .map(|(row, _)| row as i32)
            .collect();

        if completed.is_empty() {
            return 0;
        }

        debug!("Completed rows: {completed:?}");

        self.squares
            .retain(|square| !completed.contains(&row_of(square.center_y())));

        // One cell down for every cleared row below the square
        for square in &mut self.squares {
            let row = row_of(square.center_y());
            let drop = completed.iter().filter(|line| row < **line).count();
            for _ in 0..drop {
                square.move_by(Direction::Down);
            }
        }

        completed.len()
    }
}
