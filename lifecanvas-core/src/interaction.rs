// interaction.rs - pointer state machine: paint, drag-paint, pan

use crate::grid::GridState;
use crate::viewport::Viewport;

/// What a paint stroke writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawMode {
    Draw,
    Erase,
}

/// Pointer buttons the controller distinguishes: primary paints, secondary
/// pans. Anything else is ignored by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum PointerState {
    Idle,
    Dragging,
    /// Panning, remembering where the pointer last was.
    Panning { last: (f32, f32) },
}

/// Turns pointer events into grid paints and viewport pans.
///
/// Dragging and panning are exclusive by construction (one enum state).
/// The draw mode is orthogonal: an external command flips it, and it only
/// decides the value a stroke writes.
pub struct InteractionController {
    state: PointerState,
    draw_mode: DrawMode,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self {
            state: PointerState::Idle,
            draw_mode: DrawMode::Draw,
        }
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    /// External command: flip between painting live and dead cells.
    pub fn toggle_draw_mode(&mut self) {
        self.draw_mode = match self.draw_mode {
            DrawMode::Draw => DrawMode::Erase,
            DrawMode::Erase => DrawMode::Draw,
        };
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.state, PointerState::Panning { .. })
    }

    pub fn is_dragging(&self) -> bool {
        self.state == PointerState::Dragging
    }

    /// Pointer press on the canvas, in canvas pixels.
    ///
    /// Secondary starts a pan. Primary paints the cell under the pointer and
    /// starts a drag stroke; a press outside the grid is ignored outright.
    /// Presses while already engaged are ignored.
    pub fn pointer_down(
        &mut self,
        pos: (f32, f32),
        button: PointerButton,
        viewport: &Viewport,
        grid: &mut GridState,
    ) {
        if self.state != PointerState::Idle {
            return;
        }
        match button {
            PointerButton::Secondary => {
                self.state = PointerState::Panning { last: pos };
            }
            PointerButton::Primary => {
                if self.paint(pos, viewport, grid) {
                    self.state = PointerState::Dragging;
                }
            }
        }
    }

    /// Pointer motion. While panning, the viewport follows the pointer
    /// delta; while dragging, every cell the pointer passes over is painted.
    pub fn pointer_move(&mut self, pos: (f32, f32), viewport: &mut Viewport, grid: &mut GridState) {
        match self.state {
            PointerState::Idle => {}
            PointerState::Dragging => {
                self.paint(pos, viewport, grid);
            }
            PointerState::Panning { last } => {
                viewport.pan_by(pos.0 - last.0, pos.1 - last.1);
                self.state = PointerState::Panning { last: pos };
            }
        }
    }

    /// Pointer release, anywhere (on or off the canvas).
    pub fn pointer_up(&mut self) {
        self.state = PointerState::Idle;
    }

    fn paint(&self, pos: (f32, f32), viewport: &Viewport, grid: &mut GridState) -> bool {
        match viewport.cell_at(pos.0, pos.1, grid.rows(), grid.cols()) {
            Some((row, col)) => {
                grid.set_cell(row, col, self.draw_mode == DrawMode::Draw);
                true
            }
            None => false,
        }
    }
}
