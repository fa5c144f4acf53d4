//! Mapping between world units and terminal cells.
//!
//! Each cell stands for the world point at its center, so a cell is painted
//! with whatever covers that point.

use crate::core::geometry::WorldRect;
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub area: Rect,
    field_width: f64,
    field_height: f64,
}

impl Viewport {
    pub fn new(area: Rect, field_width: f64, field_height: f64) -> Self {
        Self {
            area,
            field_width,
            field_height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.area.width == 0 || self.area.height == 0
    }

    /// Cells per world unit, horizontally.
    pub fn x_scale(&self) -> f64 {
        self.area.width as f64 / self.field_width
    }

    /// Cells per world unit, vertically.
    pub fn y_scale(&self) -> f64 {
        self.area.height as f64 / self.field_height
    }

    /// World x sampled by the cell at relative column `col`.
    pub fn world_x(&self, col: u16) -> f64 {
        (col as f64 + 0.5) / self.x_scale()
    }

    /// World y sampled by the cell at relative row `row`.
    pub fn world_y(&self, row: u16) -> f64 {
        (row as f64 + 0.5) / self.y_scale()
    }

    /// Relative row containing world `y`, clamped to the area.
    pub fn row_of(&self, y: f64) -> u16 {
        let row = (y * self.y_scale()).floor();
        row.clamp(0.0, self.area.height.saturating_sub(1) as f64) as u16
    }

    /// Relative column containing world `x`, clamped to the area.
    pub fn col_of(&self, x: f64) -> u16 {
        let col = (x * self.x_scale()).floor();
        col.clamp(0.0, self.area.width.saturating_sub(1) as f64) as u16
    }

    /// First relative row whose sample point is at or below `y`.
    pub fn first_row_at_or_below(&self, y: f64) -> u16 {
        (0..self.area.height)
            .find(|&row| self.world_y(row) >= y)
            .unwrap_or(self.area.height)
    }

    /// Absolute cells covering `rect`, never smaller than one cell as long
    /// as the rectangle overlaps the field. `None` when it is entirely off
    /// screen.
    pub fn cells_for(&self, rect: &WorldRect) -> Option<Rect> {
        if self.is_empty()
            || rect.right() <= 0.0
            || rect.left() >= self.field_width
            || rect.bottom() <= 0.0
            || rect.top() >= self.field_height
        {
            return None;
        }

        let first_col = self.col_of(rect.left());
        let last_col = self.col_of(rect.right() - f64::EPSILON).max(first_col);
        let first_row = self.row_of(rect.top());
        let last_row = self.row_of(rect.bottom() - f64::EPSILON).max(first_row);

        Some(Rect::new(
            self.area.x + first_col,
            self.area.y + first_row,
            last_col - first_col + 1,
            last_row - first_row + 1,
        ))
    }
}
