#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::time::Instant;

use crossterm::{
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use log::{debug, error, info, warn};
use ratatui::{Terminal, prelude::*};

use stackfall::FrameClock;
use stackfall::app::{AppResult, GameSession};
use stackfall::config::{Config, loader, tunables};
use stackfall::input::{FrameInput, map_key_event};
use stackfall::screens::ScreenStack;
use stackfall::ui;

fn main() -> AppResult<()> {
    // Create log file and redirect stderr to it
    let log_path = "stackfall.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    let stderr_fd = io::stderr().as_raw_fd();
    let log_file_fd = log_file.as_raw_fd();

    // Safety: both descriptors are open for the duration of the call
    unsafe {
        libc::dup2(log_file_fd, stderr_fd);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting Stackfall");

    let file_config = match loader::load_config_from_file() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load settings, using defaults: {e}");
            Config::default()
        }
    };

    // game.ini wins over the settings file for gameplay values
    let mut config = file_config.clone();
    let tunables_path = tunables::tunables_file_path();
    if let Err(e) = tunables::load_tunables(&tunables_path, &mut config.gameplay) {
        warn!("Could not read {}: {e}", tunables_path.display());
    }
    debug!("Gameplay rules: {:?}", config.gameplay);

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let reports_releases = supports_keyboard_enhancement().unwrap_or(false);
    if reports_releases {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    } else {
        info!("Terminal does not report key releases, held keys last one frame");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = GameSession::new(&config);
    let mut stack = ScreenStack::new(FrameClock::new(session.frame_interval()));
    let res = run_app(&mut terminal, &mut session, &mut stack, reports_releases);

    // Restore terminal
    if reports_releases {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Game error: {err:?}");
    }

    // Only the player's audio and display choices are written back
    let mut saved = file_config;
    let current = session.config();
    saved.audio = current.audio;
    saved.display = current.display;
    if let Err(e) = loader::save_config_to_file(&saved) {
        error!("Failed to save settings: {e}");
    }

    info!("Goodbye");
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut GameSession,
    stack: &mut ScreenStack,
    reports_releases: bool,
) -> AppResult<()> {
    let mut input = FrameInput::new();
    let mut audio_error_logged = false;

    // Drop anything typed before the game started
    while event::poll(std::time::Duration::from_millis(0))? {
        let _ = event::read()?;
    }

    while !stack.is_empty() {
        if let Some(render) = stack.run_frame(session, &input, Instant::now()) {
            terminal.draw(|f| ui::render(f, &render))?;
            session.flush_sounds();

            input.end_frame();
            if !reports_releases {
                input.release_all();
            }

            if !audio_error_logged && !session.audio().is_audio_available() {
                error!("Audio device is unavailable. Continuing without sound.");
                audio_error_logged = true;
            }
        }

        if event::poll(stack.until_next_frame(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                debug!("Key event: {key:?}");
                if let Some(event) = map_key_event(&key) {
                    input.apply(event);
                }
            }
        }
    }

    Ok(())
}
