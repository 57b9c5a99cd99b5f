//! Off-screen frame the viewer draws into before flushing to the terminal

use crossterm::style::Color;
use orbitsim_core::prediction::Trajectory;
use orbitsim_core::projector::{rasterize_disc_within, Camera, Cell, Viewport};
use orbitsim_core::runtime::BodyState;
use orbitsim_core::Tag;

pub const BODY_GLYPH: char = '●';
pub const PATH_GLYPH: char = '.';

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub color: Color,
    pub reverse: bool,
}

impl Glyph {
    const BLANK: Glyph = Glyph {
        ch: ' ',
        color: Color::Reset,
        reverse: false,
    };
}

/// Map a body's tag to a terminal color
pub fn tag_color(tag: Tag) -> Color {
    match tag.0 {
        1 => Color::Yellow,
        2 => Color::Blue,
        3 => Color::Green,
        5 => Color::Red,
        6 => Color::Grey,
        _ => Color::White,
    }
}

pub struct Frame {
    viewport: Viewport,
    glyphs: Vec<Glyph>,
}

impl Frame {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            glyphs: vec![Glyph::BLANK; viewport.rows as usize * viewport.cols as usize],
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Plot one glyph; cells off the viewport are dropped
    pub fn put(&mut self, cell: Cell, glyph: Glyph) {
        if !self.viewport.contains(cell) {
            return;
        }
        let idx = cell.row as usize * self.viewport.cols as usize + cell.col as usize;
        self.glyphs[idx] = glyph;
    }

    #[cfg(test)]
    pub fn get(&self, cell: Cell) -> Option<Glyph> {
        if !self.viewport.contains(cell) {
            return None;
        }
        let idx = cell.row as usize * self.viewport.cols as usize + cell.col as usize;
        Some(self.glyphs[idx])
    }

    pub fn text(&mut self, row: i32, col: i32, text: &str, color: Color, reverse: bool) {
        for (i, ch) in text.chars().enumerate() {
            self.put(Cell::new(row, col + i as i32), Glyph { ch, color, reverse });
        }
    }

    pub fn draw_bodies(&mut self, bodies: &[BodyState], camera: &Camera) {
        let center = self.viewport.center();
        for body in bodies {
            let screen = camera.project(body.pos, center);
            let Some(center_cell) = Cell::containing(screen) else {
                continue;
            };
            let glyph = Glyph {
                ch: BODY_GLYPH,
                color: tag_color(body.tag),
                reverse: false,
            };
            for cell in rasterize_disc_within(screen, body.radius, camera.zoom(), self.viewport) {
                self.put(cell, glyph);
            }
            // Bodies smaller than a cell still show up
            self.put(center_cell, glyph);
        }
    }

    pub fn draw_path(&mut self, trajectory: &Trajectory, camera: &Camera) {
        let center = self.viewport.center();
        let glyph = Glyph {
            ch: PATH_GLYPH,
            color: tag_color(trajectory.tag),
            reverse: false,
        };
        for pos in trajectory.positions() {
            if let Some(cell) = Cell::containing(camera.project(pos, center)) {
                self.put(cell, glyph);
            }
        }
    }

    /// Rows of glyphs, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        self.glyphs.chunks(self.viewport.cols.max(1) as usize)
    }
}
