#[cfg(test)]
mod tests {
    use crate::app::GameSession;
    use crate::components::{Block, Direction, DropTimers, ShapeKind};
    use crate::config::{Config, GameplayConfig};
    use crate::game::{
        BLOCK_START_X, BLOCK_START_Y, GAME_AREA_BOTTOM, NEXT_BLOCK_X, NEXT_BLOCK_Y,
    };
    use crate::sound::SoundEffect;
    use crate::systems::{
        PlayOutcome, change_focus_block, ghost_block, gravity_tick, handle_bottom_collision,
        reset_game, try_move, try_rotate,
    };
    use crate::tests::test_utils::{fill_row, session_with, square_at, test_session};

    /// Vertical straight filling rows 16 to 19 of column 0.
    fn straight_in_first_column() -> Block {
        Block::new(20, 380, ShapeKind::Straight)
    }

    /// Bottom row missing only column 0, with the focus block ready to fill it.
    fn session_one_line_from_clear(config: &Config) -> GameSession {
        let mut session = session_with(config);
        fill_row(&mut session.board_mut(), 19, &[0]);
        session.pieces_mut().focus = straight_in_first_column();
        session
    }

    #[test]
    fn test_change_focus_block_promotes_next() {
        let mut session = test_session();
        let next_kind = session.pieces().next.kind();

        change_focus_block(&mut session.world);

        assert_eq!(session.board().len(), 4);
        let pieces = session.pieces();
        assert_eq!(pieces.focus.kind(), next_kind);
        assert_eq!(pieces.focus.center(), (BLOCK_START_X, BLOCK_START_Y));
        assert_eq!(
            pieces.focus,
            Block::new(BLOCK_START_X, BLOCK_START_Y, next_kind)
        );
        assert_eq!(pieces.next.center(), (NEXT_BLOCK_X, NEXT_BLOCK_Y));
        assert!(session.pending_sounds().contains(&SoundEffect::PieceLock));
    }

    #[test]
    fn test_locked_squares_keep_their_cells() {
        let mut session = test_session();
        session.pieces_mut().focus = straight_in_first_column();

        change_focus_block(&mut session.world);

        let board = session.board();
        for row in 16..20 {
            let square = square_at(0, row);
            assert!(board.is_occupied(square.center_x(), square.center_y()));
        }
    }

    #[test]
    fn test_full_bottom_row_scores_one_line() {
        let config = Config::default();
        let mut session = session_one_line_from_clear(&config);
        assert_eq!(session.board().len(), 9);

        assert_eq!(handle_bottom_collision(&mut session.world), PlayOutcome::Continue);

        // 9 + 4 locked, minus the 10 cleared
        assert_eq!(session.board().len(), 3);
        let progress = session.progress();
        assert_eq!(progress.score, config.gameplay.points_per_line);
        assert_eq!(progress.lines_cleared, 1);
        assert_eq!(progress.level, 1);
        assert!(session.pending_sounds().contains(&SoundEffect::LineClearSingle));

        let board = session.board();
        for row in 17..20 {
            let square = square_at(0, row);
            assert!(board.is_occupied(square.center_x(), square.center_y()));
        }
    }

    #[test]
    fn test_reaching_level_threshold_levels_up_in_same_pass() {
        let config = Config::default();
        let rules = config.gameplay.clone();
        let mut session = session_one_line_from_clear(&config);
        session.progress_mut().score = rules.points_per_level - rules.points_per_line;

        assert_eq!(handle_bottom_collision(&mut session.world), PlayOutcome::Continue);

        let progress = session.progress();
        assert_eq!(progress.level, 2);
        assert_eq!(
            progress.fall_interval,
            rules.initial_fall_interval - rules.fall_interval_step
        );
        assert!(session.pending_sounds().contains(&SoundEffect::LevelUp));
    }

    #[test]
    fn test_passing_last_level_wins_and_resets() {
        let config = Config {
            gameplay: GameplayConfig {
                num_levels: 1,
                ..GameplayConfig::default()
            },
            ..Config::default()
        };
        let rules = config.gameplay.clone();
        let mut session = session_one_line_from_clear(&config);
        session.progress_mut().score = rules.points_per_level - rules.points_per_line;

        assert_eq!(handle_bottom_collision(&mut session.world), PlayOutcome::Won);

        assert!(session.board().is_empty());
        let progress = session.progress();
        assert_eq!(progress.score, 0);
        assert_eq!(progress.level, 1);
        assert_eq!(progress.lines_cleared, 0);
        assert_eq!(progress.fall_interval, rules.initial_fall_interval);
        assert!(session.pending_sounds().contains(&SoundEffect::Victory));
    }

    #[test]
    fn test_blocked_spawn_loses_and_resets() {
        let mut session = test_session();
        {
            let mut board = session.board_mut();
            for row in 3..20 {
                for column in 3..7 {
                    board.push(square_at(column, row));
                }
            }
        }
        session.progress_mut().score = 1050;
        session.pieces_mut().focus = straight_in_first_column();

        assert_eq!(handle_bottom_collision(&mut session.world), PlayOutcome::Lost);

        assert!(session.board().is_empty());
        assert_eq!(session.progress().score, 0);
        assert_eq!(session.progress().level, 1);
        assert!(session.pending_sounds().contains(&SoundEffect::GameOver));
    }

    #[test]
    fn test_gravity_moves_on_fall_interval() {
        let mut session = test_session();
        let start = session.pieces().focus.center();
        let interval = session.progress().fall_interval;

        for _ in 1..interval {
            assert_eq!(gravity_tick(&mut session.world), PlayOutcome::Continue);
        }
        assert_eq!(session.pieces().focus.center(), start);

        gravity_tick(&mut session.world);
        assert_eq!(session.pieces().focus.center(), (start.0, start.1 + 20));
        assert_eq!(session.timers().force_down, 0);
    }

    #[test]
    fn test_grounded_block_locks_after_slide_time() {
        let mut session = test_session();
        let slide_time = session.rules().slide_time;
        session.pieces_mut().focus = straight_in_first_column();

        for _ in 1..slide_time {
            assert_eq!(gravity_tick(&mut session.world), PlayOutcome::Continue);
            assert!(session.board().is_empty());
        }

        assert_eq!(gravity_tick(&mut session.world), PlayOutcome::Continue);
        assert_eq!(session.board().len(), 4);
        assert_eq!(session.timers().slide, slide_time);
    }

    #[test]
    fn test_slide_resets_when_block_can_fall_again() {
        let mut session = test_session();
        let slide_time = session.rules().slide_time;
        session.pieces_mut().focus = straight_in_first_column();

        gravity_tick(&mut session.world);
        gravity_tick(&mut session.world);
        assert_eq!(session.timers().slide, slide_time - 2);

        session.pieces_mut().focus = Block::new(120, 200, ShapeKind::Straight);
        gravity_tick(&mut session.world);
        assert_eq!(session.timers().slide, slide_time);
    }

    #[test]
    fn test_try_move_rejected_at_wall() {
        let mut session = test_session();
        session.pieces_mut().focus = straight_in_first_column();
        let before = session.pieces().focus.clone();

        assert!(!try_move(&mut session.world, Direction::Left));
        assert_eq!(session.pieces().focus, before);
        assert!(session.pending_sounds().contains(&SoundEffect::ActionRejected));

        assert!(try_move(&mut session.world, Direction::Right));
        assert_eq!(session.pieces().focus.center(), (40, 380));
    }

    #[test]
    fn test_try_rotate() {
        let mut session = test_session();
        session.pieces_mut().focus = Block::new(120, 200, ShapeKind::Straight);
        assert!(try_rotate(&mut session.world));
        assert!(session.pending_sounds().contains(&SoundEffect::Rotate));

        session.pieces_mut().focus = Block::new(40, 200, ShapeKind::Straight);
        let before = session.pieces().focus.clone();
        assert!(!try_rotate(&mut session.world));
        assert_eq!(session.pieces().focus, before);
        assert!(session.pending_sounds().contains(&SoundEffect::ActionRejected));
    }

    #[test]
    fn test_ghost_lands_on_floor_or_stack() {
        let session = test_session();
        let focus = Block::new(120, 60, ShapeKind::Straight);

        let ghost = ghost_block(&focus, session.board());
        let lowest = ghost.squares().iter().map(|s| s.center_y()).max();
        assert_eq!(lowest, Some(GAME_AREA_BOTTOM - 10));
        assert_eq!(ghost.kind(), ShapeKind::Straight);

        let mut board = crate::board::Board::new();
        board.push(square_at(5, 15));
        let ghost = ghost_block(&focus, &board);
        let lowest = ghost.squares().iter().map(|s| s.center_y()).max();
        assert_eq!(lowest, Some(square_at(5, 14).center_y()));
    }

    #[test]
    fn test_reset_game_restores_fresh_state() {
        let mut session = test_session();
        fill_row(&mut session.board_mut(), 10, &[1]);
        session.progress_mut().score = 4000;
        session.progress_mut().level = 3;

        reset_game(&mut session.world);

        let rules = session.rules().clone();
        assert!(session.board().is_empty());
        assert_eq!(session.progress().score, 0);
        assert_eq!(session.progress().level, 1);
        assert_eq!(*session.timers(), DropTimers::new(&rules));
        assert_eq!(session.pieces().focus.center(), (BLOCK_START_X, BLOCK_START_Y));
    }
}
