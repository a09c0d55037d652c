use crate::constants::MAX_GRID_DIM;

/// Uniform grid laid over the canvas.
///
/// Used twice with independent resolutions: once for the direction field and
/// once for pointer bucketing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    pub rows: usize,
    pub cols: usize,
    pub cell_width: f32,
    pub cell_height: f32,
    inv_cell_width: f32,
    inv_cell_height: f32,
}

impl GridGeometry {
    /// A zero-sized canvas or grid dimension falls back to a divisor of 1.
    /// Dimensions are clamped to `1..=MAX_GRID_DIM`.
    pub fn new(rows: usize, cols: usize, width: f32, height: f32) -> Self {
        let rows = rows.clamp(1, MAX_GRID_DIM);
        let cols = cols.clamp(1, MAX_GRID_DIM);
        let cell_width = nonzero(width / cols as f32);
        let cell_height = nonzero(height / rows as f32);
        Self {
            rows,
            cols,
            cell_width,
            cell_height,
            inv_cell_width: 1.0 / cell_width,
            inv_cell_height: 1.0 / cell_height,
        }
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Column and row of `(x, y)`, clamped into the grid.
    #[inline]
    pub fn cell_coords(&self, x: f32, y: f32) -> (usize, usize) {
        (
            clamp_index(x * self.inv_cell_width, self.cols),
            clamp_index(y * self.inv_cell_height, self.rows),
        )
    }

    #[inline]
    pub fn cell_of(&self, x: f32, y: f32) -> usize {
        let (c, r) = self.cell_coords(x, y);
        r * self.cols + c
    }

    #[inline]
    pub fn cell_center(&self, col: usize, row: usize) -> (f32, f32) {
        (
            (col as f32 + 0.5) * self.cell_width,
            (row as f32 + 0.5) * self.cell_height,
        )
    }

    /// Squared distance from a cell's center to its corner.
    #[inline]
    pub fn max_center_dist_sq(&self) -> f32 {
        let hw = self.cell_width * 0.5;
        let hh = self.cell_height * 0.5;
        hw * hw + hh * hh
    }
}

#[inline]
fn nonzero(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        1.0
    }
}

#[inline]
fn clamp_index(scaled: f32, len: usize) -> usize {
    // `as` saturates negatives and NaN to 0
    (scaled as usize).min(len - 1)
}
