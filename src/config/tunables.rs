#![warn(clippy::all, clippy::pedantic)]

//! The plain `game.ini` tunables file: one integer per line, in a fixed order.
//!
//! ```text
//! # points per line
//! 525
//! 6300
//! 60
//! 10
//! 15
//! ```

use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::GameplayConfig;

pub const TUNABLES_ENV_VAR: &str = "STACKFALL_TUNABLES";
const TUNABLES_FILE_NAME: &str = "game.ini";

const SLOT_NAMES: [&str; 5] = [
    "points per line",
    "points per level",
    "initial fall interval",
    "fall interval step",
    "slide time",
];

fn slot_mut(rules: &mut GameplayConfig, slot: usize) -> Option<&mut u32> {
    match slot {
        0 => Some(&mut rules.points_per_line),
        1 => Some(&mut rules.points_per_level),
        2 => Some(&mut rules.initial_fall_interval),
        3 => Some(&mut rules.fall_interval_step),
        4 => Some(&mut rules.slide_time),
        _ => None,
    }
}

/// Applies the values in `contents` to `rules`. Returns how many slots were
/// overridden. A bad value still occupies its slot, so later lines keep
/// their positions.
pub fn apply_tunables(contents: &str, rules: &mut GameplayConfig) -> usize {
    let mut slot = 0;
    let mut applied = 0;

    for (line_no, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(target) = slot_mut(rules, slot) else {
            warn!("game.ini line {}: extra value {line:?} ignored", line_no + 1);
            continue;
        };

        match line.parse::<u32>() {
            Ok(value) => {
                *target = value;
                applied += 1;
            }
            Err(err) => warn!(
                "game.ini line {}: {} {line:?} is not a non-negative integer ({err}), keeping {}",
                line_no + 1,
                SLOT_NAMES[slot],
                *target
            ),
        }
        slot += 1;
    }

    applied
}

/// Reads tunables from `path`. A missing file leaves `rules` untouched.
pub fn load_tunables(path: &Path, rules: &mut GameplayConfig) -> io::Result<usize> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!("No tunables file at {}, using settings as loaded", path.display());
            return Ok(0);
        }
        Err(err) => return Err(err),
    };

    let applied = apply_tunables(&contents, rules);
    info!("Applied {applied} tunables from {}", path.display());
    Ok(applied)
}

#[must_use]
pub fn tunables_file_path() -> PathBuf {
    std::env::var(TUNABLES_ENV_VAR).map_or_else(|_| PathBuf::from(TUNABLES_FILE_NAME), PathBuf::from)
}
