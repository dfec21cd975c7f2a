#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;

use crate::config::GameplayConfig;
use crate::game::{
    BLOCK_START_X, BLOCK_START_Y, CELL_HALF_WIDTH, CELL_SIZE, NEXT_BLOCK_X, NEXT_BLOCK_Y,
    STARTING_LEVEL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    T,
    L,
    BackwardsL,
    Straight,
    S,
    BackwardsS,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Square,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::BackwardsL,
        ShapeKind::Straight,
        ShapeKind::S,
        ShapeKind::BackwardsS,
    ];

    /// Uniform pick over the seven kinds.
    #[must_use]
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self::ALL[rng.usize(..Self::ALL.len())]
    }

    /// Square offsets from the block center, in units of `CELL_HALF_WIDTH`.
    #[must_use]
    pub fn offsets(self) -> [(i32, i32); 4] {
        match self {
            ShapeKind::Square => [(-1, -1), (-1, 1), (1, -1), (1, 1)],
            ShapeKind::T => [(1, -1), (1, 1), (-1, 1), (3, 1)],
            ShapeKind::L => [(-1, -1), (-1, 1), (-1, 3), (1, 3)],
            ShapeKind::BackwardsL => [(1, -1), (1, 1), (1, 3), (-1, 3)],
            ShapeKind::Straight => [(1, -3), (1, -1), (1, 1), (1, 3)],
            ShapeKind::S => [(3, -1), (1, -1), (1, 1), (-1, 1)],
            ShapeKind::BackwardsS => [(-1, -1), (1, -1), (1, 1), (3, 1)],
        }
    }

    #[must_use]
    pub fn color(self) -> Rgb {
        match self {
            ShapeKind::Square => Rgb::new(247, 211, 8),
            ShapeKind::T => Rgb::new(173, 77, 156),
            ShapeKind::L => Rgb::new(239, 121, 33),
            ShapeKind::BackwardsL => Rgb::new(33, 0, 249),
            ShapeKind::Straight => Rgb::new(49, 199, 239),
            ShapeKind::S => Rgb::new(0, 255, 59),
            ShapeKind::BackwardsS => Rgb::new(255, 6, 35),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::T => "T",
            ShapeKind::L => "L",
            ShapeKind::BackwardsL => "backwards L",
            ShapeKind::Straight => "straight",
            ShapeKind::S => "S",
            ShapeKind::BackwardsS => "backwards S",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same hue at half brightness, used for the ghost piece.
    #[must_use]
    pub const fn dimmed(self) -> Self {
        Self {
            r: self.r / 2,
            g: self.g / 2,
            b: self.b / 2,
        }
    }
}

/// Directions a piece can be moved in. There is no `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Pixel displacement of a one-cell move.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-CELL_SIZE, 0),
            Direction::Right => (CELL_SIZE, 0),
            Direction::Down => (0, CELL_SIZE),
        }
    }
}

/// One cell of the playfield, owned either by a `Block` or by the `Board`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    center_x: i32,
    center_y: i32,
    color: Rgb,
    kind: ShapeKind,
}

impl Square {
    #[must_use]
    pub fn new(center_x: i32, center_y: i32, kind: ShapeKind) -> Self {
        Self {
            center_x,
            center_y,
            color: kind.color(),
            kind,
        }
    }

    #[must_use]
    pub fn center_x(&self) -> i32 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> i32 {
        self.center_y
    }

    #[must_use]
    pub fn center(&self) -> (i32, i32) {
        (self.center_x, self.center_y)
    }

    #[must_use]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn set_center(&mut self, center_x: i32, center_y: i32) {
        self.center_x = center_x;
        self.center_y = center_y;
    }

    pub fn move_by(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        self.center_x += dx;
        self.center_y += dy;
    }

    /// Center after a one-cell move, without moving.
    #[must_use]
    pub fn projected(&self, direction: Direction) -> (i32, i32) {
        let (dx, dy) = direction.delta();
        (self.center_x + dx, self.center_y + dy)
    }
}

/// A tetromino: four squares laid out around a center point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    center_x: i32,
    center_y: i32,
    kind: ShapeKind,
    squares: [Square; 4],
}

impl Block {
    #[must_use]
    pub fn new(center_x: i32, center_y: i32, kind: ShapeKind) -> Self {
        let mut block = Self {
            center_x,
            center_y,
            kind,
            squares: [Square::new(center_x, center_y, kind); 4],
        };
        block.setup_squares(center_x, center_y);
        block
    }

    /// Re-centers the block and lays its squares out from the shape table,
    /// discarding any rotation.
    pub fn setup_squares(&mut self, center_x: i32, center_y: i32) {
        self.center_x = center_x;
        self.center_y = center_y;

        let kind = self.kind;
        for (square, (ox, oy)) in self.squares.iter_mut().zip(kind.offsets()) {
            *square = Square::new(
                center_x + ox * CELL_HALF_WIDTH,
                center_y + oy * CELL_HALF_WIDTH,
                kind,
            );
        }
    }

    pub fn move_by(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        self.center_x += dx;
        self.center_y += dy;

        for square in &mut self.squares {
            square.move_by(direction);
        }
    }

    /// Rotates 90 degrees about the block center. Performs no bounds or
    /// overlap checks; validate with `collision::rotation_collides` first.
    pub fn rotate(&mut self) {
        let rotated = self.rotated_squares();
        for (square, (x, y)) in self.squares.iter_mut().zip(rotated) {
            square.set_center(x, y);
        }
    }

    /// Square centers the block would have after `rotate`, without mutating.
    #[must_use]
    pub fn rotated_squares(&self) -> [(i32, i32); 4] {
        self.squares.map(|square| {
            let dx = square.center_x() - self.center_x;
            let dy = square.center_y() - self.center_y;
            (self.center_x - dy, self.center_y + dx)
        })
    }

    #[must_use]
    pub fn squares(&self) -> &[Square; 4] {
        &self.squares
    }

    /// Gives up the squares, e.g. to hand them to the board on lock.
    #[must_use]
    pub fn into_squares(self) -> [Square; 4] {
        self.squares
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn center(&self) -> (i32, i32) {
        (self.center_x, self.center_y)
    }
}

/// The falling piece and the one queued behind it.
#[derive(Resource, Debug, Clone)]
pub struct Pieces {
    pub focus: Block,
    pub next: Block,
}

impl Pieces {
    #[must_use]
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self {
            focus: Block::new(BLOCK_START_X, BLOCK_START_Y, ShapeKind::random(rng)),
            next: Block::new(NEXT_BLOCK_X, NEXT_BLOCK_Y, ShapeKind::random(rng)),
        }
    }
}

/// Seeded source for piece selection.
#[derive(Resource, Debug, Clone)]
pub struct PieceRng(pub fastrand::Rng);

/// Score, level and gravity speed of the running game.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameProgress {
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    /// Frames between forced downward moves.
    pub fall_interval: u32,
}

impl GameProgress {
    #[must_use]
    pub fn new(rules: &GameplayConfig) -> Self {
        Self {
            score: 0,
            level: STARTING_LEVEL,
            lines_cleared: 0,
            fall_interval: rules.initial_fall_interval.max(rules.min_fall_interval),
        }
    }

    pub fn reset(&mut self, rules: &GameplayConfig) {
        *self = Self::new(rules);
    }

    /// Score at which the next level starts.
    #[must_use]
    pub fn needed_score(&self, rules: &GameplayConfig) -> u32 {
        self.level.saturating_mul(rules.points_per_level)
    }

    /// Credits `lines` cleared rows. Returns true when this pass also
    /// advanced the level.
    pub fn award_lines(&mut self, lines: u32, rules: &GameplayConfig) -> bool {
        if lines == 0 {
            return false;
        }

        self.lines_cleared += lines;
        self.score = self
            .score
            .saturating_add(rules.points_per_line.saturating_mul(lines));

        if self.score >= self.needed_score(rules) {
            self.level += 1;
            self.fall_interval = self
                .fall_interval
                .saturating_sub(rules.fall_interval_step)
                .max(rules.min_fall_interval)
                .max(1);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn has_won(&self, rules: &GameplayConfig) -> bool {
        self.level > rules.num_levels
    }
}

/// Frame counters driving gravity and the slide grace period.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct DropTimers {
    pub force_down: u32,
    pub slide: u32,
}

impl DropTimers {
    #[must_use]
    pub fn new(rules: &GameplayConfig) -> Self {
        Self {
            force_down: 0,
            slide: rules.slide_time,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    pub show_ghost: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { show_ghost: true }
    }
}
