#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::board::Board;
use crate::collision::{block_hits_board, can_move, is_grounded, rotation_collides};
use crate::components::{
    Block, Direction, DropTimers, GameProgress, PieceRng, Pieces, ShapeKind,
};
use crate::config::GameplayConfig;
use crate::game::{BLOCK_START_X, BLOCK_START_Y, NEXT_BLOCK_X, NEXT_BLOCK_Y};
use crate::sound::{SoundEffect, SoundQueue};

/// What a play frame did to the game as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Continue,
    Won,
    Lost,
}

fn queue_sound(world: &mut World, effect: SoundEffect) {
    world.resource_mut::<SoundQueue>().push(effect);
}

/// Locks the focus block into the board, promotes the next block to the
/// spawn point and draws a fresh next block.
pub fn change_focus_block(world: &mut World) {
    let new_next = {
        let mut rng = world.resource_mut::<PieceRng>();
        Block::new(NEXT_BLOCK_X, NEXT_BLOCK_Y, ShapeKind::random(&mut rng.0))
    };

    let locked = {
        let mut pieces = world.resource_mut::<Pieces>();
        let mut promoted = std::mem::replace(&mut pieces.next, new_next);
        promoted.setup_squares(BLOCK_START_X, BLOCK_START_Y);
        std::mem::replace(&mut pieces.focus, promoted)
    };

    debug!("Locking {} block at {:?}", locked.kind().name(), locked.center());
    world.resource_mut::<Board>().absorb(locked);
    queue_sound(world, SoundEffect::PieceLock);
}

/// Full lock pipeline: lock, clear lines, score, level up, then check for
/// a win or a loss.
pub fn handle_bottom_collision(world: &mut World) -> PlayOutcome {
    change_focus_block(world);

    let lines = world.resource_mut::<Board>().check_completed_lines();

    if lines > 0 {
        let rules = world.resource::<GameplayConfig>().clone();
        let cleared = u32::try_from(lines).unwrap_or(u32::MAX);
        let leveled = world
            .resource_mut::<GameProgress>()
            .award_lines(cleared, &rules);

        if let Some(effect) = SoundEffect::for_lines(lines) {
            queue_sound(world, effect);
        }

        let progress = world.resource::<GameProgress>().clone();
        info!(
            "Cleared {lines} line(s), score {} level {}",
            progress.score, progress.level
        );

        if leveled {
            queue_sound(world, SoundEffect::LevelUp);
            info!(
                "Reached level {}, fall interval now {} frames",
                progress.level, progress.fall_interval
            );

            if progress.has_won(&rules) {
                info!("Final level completed with score {}", progress.score);
                reset_game(world);
                queue_sound(world, SoundEffect::Victory);
                return PlayOutcome::Won;
            }
        }
    }

    let spawn_blocked = {
        let pieces = world.resource::<Pieces>();
        let board = world.resource::<Board>();
        block_hits_board(&pieces.focus, Direction::Down, board)
    };

    if spawn_blocked {
        info!(
            "New block cannot fall, game over with score {}",
            world.resource::<GameProgress>().score
        );
        reset_game(world);
        queue_sound(world, SoundEffect::GameOver);
        return PlayOutcome::Lost;
    }

    PlayOutcome::Continue
}

/// Empties the board and restores progress, timers and pieces to a fresh game.
pub fn reset_game(world: &mut World) {
    let rules = world.resource::<GameplayConfig>().clone();

    world.resource_mut::<Board>().clear();
    world.resource_mut::<GameProgress>().reset(&rules);
    *world.resource_mut::<DropTimers>() = DropTimers::new(&rules);

    let pieces = {
        let mut rng = world.resource_mut::<PieceRng>();
        Pieces::random(&mut rng.0)
    };
    world.insert_resource(pieces);
    debug!("Game state reset");
}

/// Moves the focus block one cell if nothing is in the way. A blocked move
/// queues the rejection sound.
pub fn try_move(world: &mut World, direction: Direction) -> bool {
    let allowed = {
        let pieces = world.resource::<Pieces>();
        let board = world.resource::<Board>();
        can_move(&pieces.focus, direction, board)
    };

    if allowed {
        world.resource_mut::<Pieces>().focus.move_by(direction);
    } else {
        queue_sound(world, SoundEffect::ActionRejected);
    }
    allowed
}

pub fn try_rotate(world: &mut World) -> bool {
    let blocked = {
        let pieces = world.resource::<Pieces>();
        let board = world.resource::<Board>();
        rotation_collides(&pieces.focus, board)
    };

    if blocked {
        queue_sound(world, SoundEffect::ActionRejected);
    } else {
        world.resource_mut::<Pieces>().focus.rotate();
        queue_sound(world, SoundEffect::Rotate);
    }
    !blocked
}

/// One frame of gravity: forced drops on the fall interval, then the slide
/// grace period while the block rests on something.
pub fn gravity_tick(world: &mut World) -> PlayOutcome {
    let slide_time = world.resource::<GameplayConfig>().slide_time;
    let fall_interval = world.resource::<GameProgress>().fall_interval;

    let force_down = {
        let mut timers = world.resource_mut::<DropTimers>();
        timers.force_down = timers.force_down.saturating_add(1);
        timers.force_down
    };

    if force_down >= fall_interval {
        let can_fall = {
            let pieces = world.resource::<Pieces>();
            can_move(&pieces.focus, Direction::Down, world.resource::<Board>())
        };
        if can_fall {
            world.resource_mut::<Pieces>().focus.move_by(Direction::Down);
            world.resource_mut::<DropTimers>().force_down = 0;
        }
    }

    let grounded = {
        let pieces = world.resource::<Pieces>();
        is_grounded(&pieces.focus, world.resource::<Board>())
    };

    let lock_now = {
        let mut timers = world.resource_mut::<DropTimers>();
        if grounded {
            timers.slide = timers.slide.saturating_sub(1);
        } else {
            timers.slide = slide_time;
        }

        if grounded && timers.slide == 0 {
            timers.slide = slide_time;
            true
        } else {
            false
        }
    };

    if lock_now {
        handle_bottom_collision(world)
    } else {
        PlayOutcome::Continue
    }
}

/// Where the block would land if dropped straight down.
#[must_use]
pub fn ghost_block(block: &Block, board: &Board) -> Block {
    let mut ghost = block.clone();
    while can_move(&ghost, Direction::Down, board) {
        ghost.move_by(Direction::Down);
    }
    ghost
}
