#[cfg(test)]
mod tests {
    use crate::game::*;

    #[test]
    fn test_playfield_dimensions() {
        assert_eq!(PLAYFIELD_COLUMNS, 10);
        assert_eq!(PLAYFIELD_ROWS, 20);
        assert_eq!(CELL_SIZE, 2 * CELL_HALF_WIDTH);
        assert_eq!(GAME_AREA_RIGHT - GAME_AREA_LEFT, 10 * CELL_SIZE);
        assert_eq!(GAME_AREA_BOTTOM - GAME_AREA_TOP, 20 * CELL_SIZE);
    }

    #[test]
    fn test_spawn_and_preview_points() {
        // Block centers sit on cell corners so squares land on cell centers
        assert_eq!((BLOCK_START_X - GAME_AREA_LEFT) % CELL_SIZE, 0);
        assert_eq!((BLOCK_START_Y - GAME_AREA_TOP) % CELL_SIZE, 0);
        assert!(NEXT_BLOCK_X > GAME_AREA_RIGHT);
        assert!(INFO_PANEL_X > GAME_AREA_RIGHT);
        assert!(WINDOW_WIDTH > NEXT_BLOCK_X);
        assert!(WINDOW_HEIGHT > GAME_AREA_BOTTOM);
    }

    #[test]
    fn test_progression_defaults() {
        assert_eq!(POINTS_PER_LINE, 525);
        assert_eq!(POINTS_PER_LEVEL, 6300);
        assert_eq!(NUM_LEVELS, 5);
        assert_eq!(STARTING_LEVEL, 1);
        assert_eq!(INITIAL_FALL_INTERVAL, 60);
        assert_eq!(FALL_INTERVAL_STEP, 10);
        assert_eq!(SLIDE_TIME, 15);
        assert!(MIN_FALL_INTERVAL >= 1);
    }
}
