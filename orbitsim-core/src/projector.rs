//! World-to-screen projection
//!
//! Screen space uses `x` for the column and `y` for the row, rows growing
//! downward. Nothing here knows the terminal size: callers pass the screen
//! center in and clip the cells they get back.

use crate::error::ConfigError;
use glam::DVec2;

/// Map a simulation coordinate onto the screen
pub fn to_screen(world_pos: DVec2, camera: DVec2, zoom: f64, screen_center: DVec2) -> DVec2 {
    (world_pos - camera) * zoom + screen_center
}

/// An integer screen cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell a screen position falls in
    ///
    /// Float-to-int casts saturate and send NaN to zero, so a non-finite
    /// position has no cell.
    pub fn containing(screen_pos: DVec2) -> Option<Self> {
        if !screen_pos.is_finite() {
            return None;
        }
        Some(Self {
            row: screen_pos.y.floor() as i32,
            col: screen_pos.x.floor() as i32,
        })
    }
}

/// Cells within `radius_world * zoom` of `center`
///
/// Candidates come from the disc's bounding box; nothing is clipped.
pub fn rasterize_disc(center: DVec2, radius_world: f64, zoom: f64) -> Vec<Cell> {
    let radius = radius_world * zoom;
    disc_cells(
        center,
        radius,
        (center.y - radius).floor(),
        (center.y + radius).ceil(),
        (center.x - radius).floor(),
        (center.x + radius).ceil(),
    )
}

/// `rasterize_disc` restricted to the cells of `viewport`
///
/// The bounding box is clamped before the distance test, so the work is
/// bounded by the viewport size however far the camera zooms in.
pub fn rasterize_disc_within(
    center: DVec2,
    radius_world: f64,
    zoom: f64,
    viewport: Viewport,
) -> Vec<Cell> {
    let radius = radius_world * zoom;
    if !(center.is_finite() && radius.is_finite()) || viewport.rows == 0 || viewport.cols == 0 {
        return Vec::new();
    }
    disc_cells(
        center,
        radius,
        (center.y - radius).floor().max(0.0),
        (center.y + radius).ceil().min(viewport.rows as f64 - 1.0),
        (center.x - radius).floor().max(0.0),
        (center.x + radius).ceil().min(viewport.cols as f64 - 1.0),
    )
}

fn disc_cells(
    center: DVec2,
    radius: f64,
    min_row: f64,
    max_row: f64,
    min_col: f64,
    max_col: f64,
) -> Vec<Cell> {
    let radius_sq = radius * radius;
    let (min_row, max_row) = (min_row as i32, max_row as i32);
    let (min_col, max_col) = (min_col as i32, max_col as i32);

    let mut cells = Vec::new();
    for row in min_row..=max_row {
        for col in min_col..=max_col {
            let offset = DVec2::new(col as f64, row as f64) - center;
            if offset.length_squared() <= radius_sq {
                cells.push(Cell { row, col });
            }
        }
    }
    cells
}

/// Unit pan steps, in screen orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pan {
    Up,
    Down,
    Left,
    Right,
}

impl Pan {
    fn unit(self) -> DVec2 {
        match self {
            Pan::Up => DVec2::new(0.0, -1.0),
            Pan::Down => DVec2::new(0.0, 1.0),
            Pan::Left => DVec2::new(-1.0, 0.0),
            Pan::Right => DVec2::new(1.0, 0.0),
        }
    }
}

/// Camera offset and zoom, mutated in discrete steps by the driver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset: DVec2,
    zoom: f64,
}

impl Camera {
    pub fn new(offset: DVec2, zoom: f64) -> Result<Self, ConfigError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(ConfigError::NonPositiveZoom(zoom));
        }
        Ok(Self { offset, zoom })
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Move by `pan_step` screen cells' worth of world distance
    pub fn pan(&mut self, direction: Pan, pan_step: f64) {
        self.offset += direction.unit() * (pan_step / self.zoom);
    }

    pub fn zoom_in(&mut self, factor: f64) {
        self.zoom *= factor;
    }

    pub fn zoom_out(&mut self, factor: f64) {
        self.zoom /= factor;
    }

    pub fn project(&self, world_pos: DVec2, screen_center: DVec2) -> DVec2 {
        to_screen(world_pos, self.offset, self.zoom, screen_center)
    }

    /// Inverse of `project`
    pub fn to_world(&self, screen_pos: DVec2, screen_center: DVec2) -> DVec2 {
        (screen_pos - screen_center) / self.zoom + self.offset
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: DVec2::ZERO,
            zoom: 1.0,
        }
    }
}

/// Terminal-sized drawing area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: u16,
    pub cols: u16,
}

impl Viewport {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.cols as f64 / 2.0, self.rows as f64 / 2.0)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as i64) < self.rows as i64
            && (cell.col as i64) < self.cols as i64
    }
}
