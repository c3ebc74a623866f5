/// ASCII line rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wire3d_core::Renderer;

const VERTEX_GLYPH: char = 'o';

/// Character grid that implements the core drawing interface.
///
/// Screen coordinates arrive in pixels around the origin with +y up. They are
/// mapped onto cells around the grid centre, `cell_width` by `cell_height`
/// pixels per cell.
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    cell_width: f32,
    cell_height: f32,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cell_width: 4.0,
            cell_height: 8.0,
            char_buffer: vec![' '; width * height],
        }
    }

    pub fn with_cell_size(mut self, cell_width: f32, cell_height: f32) -> Self {
        self.cell_width = cell_width;
        self.cell_height = cell_height;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
    }

    /// Character at a cell, `None` outside the grid
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        (col < self.width && row < self.height).then(|| self.char_buffer[row * self.width + col])
    }

    /// Grid rows as strings, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.char_buffer
            .chunks(self.width.max(1))
            .map(|row| row.iter().collect())
    }

    fn to_cell(&self, x: f32, y: f32) -> (f32, f32) {
        let col = (self.width / 2) as f32 + x / self.cell_width;
        let row = (self.height / 2) as f32 - y / self.cell_height;
        (col, row)
    }

    /// Clip a cell-space segment to the grid (plus a one-cell margin)
    fn clip(&self, from: (f32, f32), to: (f32, f32)) -> Option<((i64, i64), (i64, i64))> {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let (mut t0, mut t1) = (0.0f32, 1.0f32);
        let bounds = [
            (-dx, from.0 + 1.0),
            (dx, self.width as f32 - from.0),
            (-dy, from.1 + 1.0),
            (dy, self.height as f32 - from.1),
        ];
        for (p, q) in bounds {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
            } else {
                let t = q / p;
                if p < 0.0 {
                    t0 = t0.max(t);
                } else {
                    t1 = t1.min(t);
                }
            }
        }
        if t0 > t1 {
            return None;
        }
        let at = |t: f32| ((from.0 + t * dx).round() as i64, (from.1 + t * dy).round() as i64);
        Some((at(t0), at(t1)))
    }

    fn plot(&mut self, col: i64, row: i64, c: char) {
        if col < 0 || row < 0 || col >= self.width as i64 || row >= self.height as i64 {
            return;
        }
        let idx = row as usize * self.width + col as usize;
        // Markers and labels win over line glyphs
        if self.char_buffer[idx] == VERTEX_GLYPH && c != VERTEX_GLYPH {
            return;
        }
        self.char_buffer[idx] = c;
    }

    /// Bresenham line between two cells
    fn line(&mut self, from: (i64, i64), to: (i64, i64)) {
        let glyph = line_glyph(to.0 - from.0, to.1 - from.1);
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, glyph);
            if (x, y) == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in 0..self.height {
            for col in 0..self.width {
                let c = self.char_buffer[row * self.width + col];

                let color = match c {
                    VERTEX_GLYPH => Color::Yellow,
                    '-' | '|' | '/' | '\\' => Color::Cyan,
                    c if c.is_ascii_digit() => Color::White,
                    _ => Color::DarkGrey,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            if row + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Renderer for AsciiRenderer {
    fn connect_points(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        if !(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()) {
            return;
        }
        if let Some((from, to)) = self.clip(self.to_cell(x1, y1), self.to_cell(x2, y2)) {
            self.line(from, to);
        }
    }

    fn draw_point(&mut self, x: f32, y: f32) {
        let (col, row) = self.to_cell(x, y);
        self.plot(col.round() as i64, row.round() as i64, VERTEX_GLYPH);
    }

    fn draw_label(&mut self, text: &str, x: f32, y: f32) {
        let (col, row) = self.to_cell(x, y);
        let (col, row) = (col.round() as i64, row.round() as i64);
        for (i, c) in text.chars().enumerate() {
            self.plot(col + i as i64, row, c);
        }
    }
}

/// Pick a glyph from the cell-space direction (rows grow downwards)
fn line_glyph(dx: i64, dy: i64) -> char {
    let (adx, ady) = (dx.abs(), dy.abs());
    if ady * 2 < adx {
        '-'
    } else if adx * 2 < ady {
        '|'
    } else if (dx > 0) == (dy > 0) {
        '\\'
    } else {
        '/'
    }
}
