#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Window coordinates are small and clamped to the frame before narrowing
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::components::Rgb;
use crate::game::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::render::{DrawCommand, RenderList, TextStyle};

/// Window pixels per terminal column and row. A playfield cell is two
/// columns by one row.
pub const PIXELS_PER_COLUMN: i32 = 10;
pub const PIXELS_PER_ROW: i32 = 20;

#[must_use]
pub fn window_columns() -> u16 {
    (WINDOW_WIDTH / PIXELS_PER_COLUMN) as u16
}

#[must_use]
pub fn window_rows() -> u16 {
    (WINDOW_HEIGHT / PIXELS_PER_ROW) as u16
}

/// Rasterises a frame's draw commands into the terminal, centered.
pub fn render(f: &mut Frame, list: &RenderList) {
    let area = f.area();
    let (columns, rows) = (window_columns(), window_rows());

    if area.width < columns || area.height < rows {
        let warning_text = Paragraph::new(format!(
            "Terminal too small!\nNeed {columns}x{rows}, have {}x{}.",
            area.width, area.height
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Stackfall"));

        f.render_widget(warning_text, centered_rect(40, 5, area));
        return;
    }

    let window = centered_rect(columns, rows, area);
    let buf = f.buffer_mut();

    for command in list.commands() {
        match command {
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => fill_rect(buf, window, (*x, *y, *width, *height), *color),
            DrawCommand::Text { text, x, y, style } => {
                draw_text(buf, window, text, (*x, *y), *style);
            }
        }
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn text_style(style: TextStyle) -> Style {
    match style {
        TextStyle::Title => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        TextStyle::Normal => Style::default().fg(Color::White),
        TextStyle::Highlight => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    }
}

fn fill_rect(buf: &mut Buffer, window: Rect, (x, y, width, height): (i32, i32, i32, i32), color: Rgb) {
    let left = x.div_euclid(PIXELS_PER_COLUMN).max(0);
    let top = y.div_euclid(PIXELS_PER_ROW).max(0);
    let right = (x + width).div_euclid(PIXELS_PER_COLUMN).min(i32::from(window.width));
    let bottom = (y + height).div_euclid(PIXELS_PER_ROW).min(i32::from(window.height));
    let bg = to_color(color);

    for row in top..bottom {
        for column in left..right {
            let position = (window.x + column as u16, window.y + row as u16);
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_char(' ').set_bg(bg);
            }
        }
    }
}

fn draw_text(buf: &mut Buffer, window: Rect, text: &str, (x, y): (i32, i32), style: TextStyle) {
    let column = x.div_euclid(PIXELS_PER_COLUMN);
    let row = y.div_euclid(PIXELS_PER_ROW);
    if column < 0 || row < 0 || column >= i32::from(window.width) || row >= i32::from(window.height) {
        return;
    }

    let max_width = usize::from(window.width) - column as usize;
    buf.set_stringn(
        window.x + column as u16,
        window.y + row as u16,
        text,
        max_width,
        text_style(style),
    );
}

/// A `width` x `height` rect centered in `r`, shrunk to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + r.width.saturating_sub(width) / 2;
    let y = r.y + r.height.saturating_sub(height) / 2;

    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
