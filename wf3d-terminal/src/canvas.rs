/// Character-cell drawing surface for the terminal frontend
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wf3d_core::{LineCommand, Rgb};

const LINE_CHAR: char = '#';
const BLANK_CHAR: char = ' ';

/// One drawable terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    color: Color,
}

const BLANK: Cell = Cell {
    glyph: BLANK_CHAR,
    color: Color::Reset,
};

/// A width x height cell buffer that accepts line commands and text
/// overlays, then queues the whole frame to a writer in one pass.
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Rasterize one line command with Bresenham's algorithm. Segments may
    /// extend past the canvas; out-of-bounds cells are simply dropped.
    pub fn draw_line(&mut self, command: &LineCommand) {
        let color = to_crossterm_color(command.color);

        let mut x0 = command.start.x.round() as i64;
        let mut y0 = command.start.y.round() as i64;
        let x1 = command.end.x.round() as i64;
        let y1 = command.end.y.round() as i64;

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let step_x = if x0 < x1 { 1 } else { -1 };
        let step_y = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                x0 += step_x;
            }
            if doubled <= dx {
                err += dx;
                y0 += step_y;
            }
        }
    }

    /// Write a status line into a row, truncated at the right edge.
    pub fn overlay_text(&mut self, row: usize, text: &str, color: Color) {
        if row >= self.height {
            return;
        }
        for (column, glyph) in text.chars().take(self.width).enumerate() {
            self.cells[row * self.width + column] = Cell { glyph, color };
        }
    }

    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = Cell {
            glyph: LINE_CHAR,
            color,
        };
    }

    #[cfg(test)]
    fn glyph_at(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x].glyph
    }

    /// Queue the frame to the writer. The caller positions the cursor
    /// beforehand and flushes afterwards.
    pub fn present<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current_color = None;
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];
                if current_color != Some(cell.color) {
                    writer.queue(SetForegroundColor(cell.color))?;
                    current_color = Some(cell.color);
                }
                writer.queue(Print(cell.glyph))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn to_crossterm_color(color: Rgb) -> Color {
    Color::Rgb {
        r: color.0,
        g: color.1,
        b: color.2,
    }
}
