#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_wrap)]

use std::time::Duration;

// Cell geometry, in window pixels
pub const CELL_HALF_WIDTH: i32 = 10;
pub const CELL_SIZE: i32 = CELL_HALF_WIDTH * 2;

// Playfield dimensions
pub const PLAYFIELD_COLUMNS: usize = 10;
pub const PLAYFIELD_ROWS: usize = 20;

// Playfield edges in window pixel space. There is no top edge: pieces may
// poke out above the visible field.
pub const GAME_AREA_LEFT: i32 = 20;
pub const GAME_AREA_TOP: i32 = 20;
pub const GAME_AREA_RIGHT: i32 = GAME_AREA_LEFT + PLAYFIELD_COLUMNS as i32 * CELL_SIZE;
pub const GAME_AREA_BOTTOM: i32 = GAME_AREA_TOP + PLAYFIELD_ROWS as i32 * CELL_SIZE;

// Where a new focus block appears
pub const BLOCK_START_X: i32 = GAME_AREA_LEFT + (PLAYFIELD_COLUMNS as i32 / 2) * CELL_SIZE;
pub const BLOCK_START_Y: i32 = GAME_AREA_TOP + 2 * CELL_SIZE;

// Where the next block is previewed
pub const NEXT_BLOCK_X: i32 = GAME_AREA_RIGHT + 4 * CELL_SIZE;
pub const NEXT_BLOCK_Y: i32 = GAME_AREA_TOP + 3 * CELL_SIZE;

// Side panel text column
pub const INFO_PANEL_X: i32 = GAME_AREA_RIGHT + 2 * CELL_SIZE;

// Logical window size
pub const WINDOW_WIDTH: i32 = 400;
pub const WINDOW_HEIGHT: i32 = GAME_AREA_BOTTOM + 2 * CELL_SIZE;

// Logic and render rate (~30 FPS)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

// Scoring and progression defaults, overridable from game.ini or the TOML settings
pub const POINTS_PER_LINE: u32 = 525;
pub const POINTS_PER_LEVEL: u32 = 6300;
pub const NUM_LEVELS: u32 = 5;
pub const STARTING_LEVEL: u32 = 1;

// Gravity defaults, counted in frames
pub const INITIAL_FALL_INTERVAL: u32 = 60;
pub const FALL_INTERVAL_STEP: u32 = 10;
pub const MIN_FALL_INTERVAL: u32 = 1;
pub const SLIDE_TIME: u32 = 15;

// Audio defaults
pub const DEFAULT_VOLUME: f32 = 0.5;
pub const VOLUME_STEP: f32 = 0.1;
