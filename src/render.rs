#![warn(clippy::all, clippy::pedantic)]

use crate::components::{Rgb, Square};
use crate::game::CELL_HALF_WIDTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Normal,
    Highlight,
}

/// One drawing primitive in window pixel space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Rgb,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        style: TextStyle,
    },
}

/// Draw commands for a frame, in painting order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderList {
    commands: Vec<DrawCommand>,
}

impl RenderList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    pub fn text(&mut self, text: impl Into<String>, x: i32, y: i32, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            x,
            y,
            style,
        });
    }

    /// Fills the cell a square occupies.
    pub fn fill_square(&mut self, square: &Square, color: Rgb) {
        self.fill_rect(
            square.center_x() - CELL_HALF_WIDTH,
            square.center_y() - CELL_HALF_WIDTH,
            CELL_HALF_WIDTH * 2,
            CELL_HALF_WIDTH * 2,
            color,
        );
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text of every `Text` command, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::FillRect { .. } => None,
        })
    }
}
