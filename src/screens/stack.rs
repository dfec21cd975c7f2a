#![warn(clippy::all, clippy::pedantic)]

use log::{debug, info};
use std::time::{Duration, Instant};

use super::{ScreenId, ScreenTransition};
use crate::FrameClock;
use crate::app::GameSession;
use crate::input::FrameInput;
use crate::render::RenderList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenEntry {
    pub id: ScreenId,
    pub created_at: Instant,
}

/// Pushdown stack of screens. The program is over once it is empty.
#[derive(Debug, Clone)]
pub struct ScreenStack {
    entries: Vec<ScreenEntry>,
    clock: FrameClock,
}

impl ScreenStack {
    /// The starting stack: the menu, with the quit prompt beneath it.
    #[must_use]
    pub fn new(clock: FrameClock) -> Self {
        Self::with_screens(clock, &[ScreenId::ExitConfirm, ScreenId::Menu])
    }

    #[must_use]
    pub fn with_screens(clock: FrameClock, ids: &[ScreenId]) -> Self {
        let now = Instant::now();
        Self {
            entries: ids
                .iter()
                .map(|&id| ScreenEntry { id, created_at: now })
                .collect(),
            clock,
        }
    }

    #[must_use]
    pub fn top(&self) -> Option<ScreenId> {
        self.entries.last().map(|entry| entry.id)
    }

    /// Screen ids from bottom to top.
    #[must_use]
    pub fn ids(&self) -> Vec<ScreenId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    #[must_use]
    pub fn entries(&self) -> &[ScreenEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn until_next_frame(&self, now: Instant) -> Duration {
        self.clock.until_next(now)
    }

    pub fn push(&mut self, id: ScreenId) {
        self.entries.push(ScreenEntry {
            id,
            created_at: Instant::now(),
        });
    }

    pub fn pop(&mut self) -> Option<ScreenId> {
        self.entries.pop().map(|entry| entry.id)
    }

    pub fn apply(&mut self, transition: ScreenTransition) {
        match transition {
            ScreenTransition::Stay => return,
            ScreenTransition::Push(id) => self.push(id),
            ScreenTransition::Pop => {
                self.pop();
            }
            ScreenTransition::Replace(ids) => {
                self.pop();
                for id in ids {
                    self.push(id);
                }
            }
            ScreenTransition::Reset(ids) => {
                self.entries.clear();
                for id in ids {
                    self.push(id);
                }
            }
            ScreenTransition::Exit => {
                info!("Exit requested");
                self.entries.clear();
            }
        }

        debug!(
            "Screen stack now {:?}",
            self.entries.iter().map(|e| e.id.name()).collect::<Vec<_>>()
        );
    }

    /// Runs the top screen if a frame is due at `now`. Returns the frame's
    /// draw commands, or `None` when no frame ran.
    pub fn run_frame(
        &mut self,
        session: &mut GameSession,
        input: &FrameInput,
        now: Instant,
    ) -> Option<RenderList> {
        let top = self.top()?;
        if !self.clock.ready(now) {
            return None;
        }

        let update = top.update(session, input);
        self.apply(update.transition);
        Some(update.render)
    }
}
