//! Square grid layout for a palette page.
//!
//! The grid takes the largest square that fits its parent, splits it into
//! equally wide columns with a fixed spacing between them, and centers the
//! swatches with a padding when rounding leaves some room unused.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("a grid needs at least one column")]
    NoColumns,
    #[error("{size}px is too small for {columns} columns spaced {spacing}px apart")]
    TooSmall { size: u32, columns: u32, spacing: u32 },
}

/// Number of columns for `swatches` entries, the smallest square that holds them all.
pub fn column_count(swatches: usize) -> usize {
    ((swatches as f64).sqrt().ceil() as usize).max(1)
}

pub fn row_count(swatches: usize, columns: usize) -> usize {
    swatches.div_ceil(columns.max(1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchRect {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

impl SwatchRect {
    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.x..self.x + self.size).contains(&x) && (self.y..self.y + self.size).contains(&y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    pub columns: u32,
    /// Side of the square the grid occupies.
    pub size: u32,
    pub column_width: u32,
    pub spacing: u32,
    pub padding: u32,
}

impl GridMetrics {
    pub fn measure(parent_width: u32, parent_height: u32, spacing: u32, columns: u32) -> Result<Self, GridError> {
        if columns == 0 {
            return Err(GridError::NoColumns);
        }
        let size = parent_width.min(parent_height);
        let column_spacing = spacing.saturating_mul(columns - 1);
        let column_width = size.saturating_sub(column_spacing) / columns;
        if column_width == 0 {
            return Err(GridError::TooSmall { size, columns, spacing });
        }

        let actual = columns * column_width + column_spacing;
        let padding = if actual + 1 < size { (size - actual) / 2 } else { 0 };

        Ok(Self {
            columns,
            size,
            column_width,
            spacing,
            padding,
        })
    }

    fn pitch(&self) -> u32 {
        self.column_width + self.spacing
    }

    pub fn swatch_rect(&self, index: usize) -> SwatchRect {
        let column = (index % self.columns as usize) as u32;
        let row = (index / self.columns as usize) as u32;
        SwatchRect {
            x: self.padding + column * self.pitch(),
            y: self.padding + row * self.pitch(),
            size: self.column_width,
        }
    }

    /// Index of the swatch under `(x, y)` in a grid of `count` swatches.
    pub fn hit_test(&self, x: u32, y: u32, count: usize) -> Option<usize> {
        let x = x.checked_sub(self.padding)?;
        let y = y.checked_sub(self.padding)?;

        let (column, column_offset) = (x / self.pitch(), x % self.pitch());
        let (row, row_offset) = (y / self.pitch(), y % self.pitch());
        if column >= self.columns || column_offset >= self.column_width || row_offset >= self.column_width {
            return None;
        }

        let index = row as usize * self.columns as usize + column as usize;
        (index < count).then_some(index)
    }
}
