//! Simulation and interaction core for the Life canvas, with no GUI
//! dependency.
//!
//! Everything the GUI needs is exposed as plain state containers: the
//! copy-on-write [`Grid`] and its owning [`GridState`], the generation
//! [`step`] rule, the [`Viewport`] pixel/cell transform, the pointer
//! [`InteractionController`], and the polled [`Playback`] schedule.
//! APIs avoid panics; invalid coordinates read as dead cells and anomalous
//! inputs degrade to no-ops.
//!
//! # Example
//! ```
//! use lifecanvas_core::{step, Grid, GridState};
//! let mut state = GridState::new(Grid::dead(5, 5));
//! state.set_cell(1, 2, true);
//! let next = step(state.grid());
//! state.advance(next);
//! assert_eq!(state.generation(), 1);
//! ```

pub mod config;
pub mod grid;
pub mod interaction;
pub mod patterns;
pub mod playback;
pub mod step;
pub mod viewport;

pub use config::Config;
pub use grid::{Grid, GridState};
pub use interaction::{DrawMode, InteractionController, PointerButton};
pub use patterns::{Pattern, PATTERNS};
pub use playback::Playback;
pub use step::step;
pub use viewport::{Viewport, ZoomDirection};
