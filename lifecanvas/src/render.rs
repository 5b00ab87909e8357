// render.rs - canvas render pass: grid snapshot + viewport -> draw commands

use egui::{Color32, Painter, Rect, Stroke};

use lifecanvas_core::{Grid, Viewport};

const BACKGROUND: Color32 = Color32::WHITE;
const ALIVE: Color32 = Color32::BLACK;

/// Paint the visible slice of the grid.
///
/// Alive cells inside the grid get filled squares. The cell lattice itself
/// is drawn across the whole visible range, so it extends past the grid
/// edges when panned or zoomed out; cells out there are just always dead.
pub fn draw(painter: &Painter, rect: Rect, grid: &Grid, viewport: &Viewport) {
    let painter = painter.with_clip_rect(rect);
    painter.rect_filled(rect, 0.0, BACKGROUND);

    let cell_size = viewport.cell_size();
    let (first_row, first_col) = viewport.cell_at_raw(0.0, 0.0);
    let (last_row, last_col) = viewport.cell_at_raw(rect.width(), rect.height());

    // Filled squares for the in-bounds alive cells.
    let row_end = last_row.min(grid.rows() as i64 - 1);
    let col_start = first_col.max(0);
    let col_end = last_col.min(grid.cols() as i64 - 1);
    for row in first_row.max(0)..=row_end {
        for col in col_start..=col_end {
            if grid.cell(row as usize, col as usize) {
                let (x, y) = viewport.cell_origin(row, col);
                let min = rect.min + egui::vec2(x, y);
                painter.rect_filled(
                    Rect::from_min_size(min, egui::Vec2::splat(cell_size)),
                    0.0,
                    ALIVE,
                );
            }
        }
    }

    // Cell outlines for everything visible, on-grid or off.
    let stroke = Stroke::new(0.5, Color32::from_gray(51));
    for col in first_col..=last_col + 1 {
        let x = rect.min.x + viewport.cell_origin(0, col).0;
        painter.line_segment([egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)], stroke);
    }
    for row in first_row..=last_row + 1 {
        let y = rect.min.y + viewport.cell_origin(row, 0).1;
        painter.line_segment([egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)], stroke);
    }
}
