// viewport.rs - affine map between canvas pixels and grid cells

/// Wheel zoom direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

const ZOOM_IN_FACTOR: f32 = 1.1;
const ZOOM_OUT_FACTOR: f32 = 0.9;

/// Pan/zoom state of the canvas.
///
/// The transform is `pixel = cell_index * cell_size + offset` per axis,
/// columns along x and rows along y. The offset is unconstrained (panning
/// arbitrarily far past the grid is allowed and simply shows empty space);
/// `cell_size` is always clamped to the configured bounds.
#[derive(Clone, Debug)]
pub struct Viewport {
    cell_size: f32,
    offset_x: f32,
    offset_y: f32,
    min_cell_size: f32,
    max_cell_size: f32,
}

impl Viewport {
    pub fn new(cell_size: f32, min_cell_size: f32, max_cell_size: f32) -> Self {
        Self {
            cell_size: cell_size.clamp(min_cell_size, max_cell_size),
            offset_x: 0.0,
            offset_y: 0.0,
            min_cell_size,
            max_cell_size,
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    /// Cell under a canvas pixel, without bounds checking. The result can be
    /// negative or past the grid when the pixel lies off the cell field.
    pub fn cell_at_raw(&self, px: f32, py: f32) -> (i64, i64) {
        let col = ((px - self.offset_x) / self.cell_size).floor() as i64;
        let row = ((py - self.offset_y) / self.cell_size).floor() as i64;
        (row, col)
    }

    /// Cell under a canvas pixel, if it lies inside the grid.
    pub fn cell_at(&self, px: f32, py: f32, rows: usize, cols: usize) -> Option<(usize, usize)> {
        let (row, col) = self.cell_at_raw(px, py);
        if row >= 0 && (row as usize) < rows && col >= 0 && (col as usize) < cols {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }

    /// Canvas pixel of a cell's top-left corner.
    pub fn cell_origin(&self, row: i64, col: i64) -> (f32, f32) {
        (
            col as f32 * self.cell_size + self.offset_x,
            row as f32 * self.cell_size + self.offset_y,
        )
    }

    /// Zoom about a canvas pixel.
    ///
    /// The cell under the cursor stays under the cursor: the offset is
    /// rescaled around the cursor by the size ratio. When the clamp leaves
    /// `cell_size` unchanged (already at a bound) nothing moves.
    pub fn zoom_at(&mut self, px: f32, py: f32, direction: ZoomDirection) {
        let factor = match direction {
            ZoomDirection::In => ZOOM_IN_FACTOR,
            ZoomDirection::Out => ZOOM_OUT_FACTOR,
        };
        let new_size = (self.cell_size * factor).clamp(self.min_cell_size, self.max_cell_size);
        if (new_size - self.cell_size).abs() < f32::EPSILON {
            return;
        }
        let ratio = new_size / self.cell_size;
        self.offset_x = px - (px - self.offset_x) * ratio;
        self.offset_y = py - (py - self.offset_y) * ratio;
        self.cell_size = new_size;
    }

    /// Translate the view by a pixel delta. Unbounded.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Center the full grid in a canvas of the given size. Run at first
    /// layout and again whenever the canvas is resized.
    pub fn recenter(&mut self, canvas_w: f32, canvas_h: f32, rows: usize, cols: usize) {
        self.offset_x = -(cols as f32 * self.cell_size / 2.0).floor() + canvas_w / 2.0;
        self.offset_y = -(rows as f32 * self.cell_size / 2.0).floor() + canvas_h / 2.0;
    }
}
