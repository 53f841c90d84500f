use crate::grid::GridModel;
use crate::mapper::{self, SurfaceBounds};
use crate::viewport::SurfaceLayout;

/// Whether a click changed visible grid state. The event loop schedules
/// a redraw only on StateChanged; no-op clicks cost nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    StateChanged,
    NoOp,
}

impl ClickOutcome {
    pub fn state_changed(&self) -> bool {
        matches!(self, ClickOutcome::StateChanged)
    }
}

/// Owns the click-to-mutation pipeline: pointer position in, cell toggle
/// against the model, redraw decision out. The model is passed in at
/// construction; there is no ambient shared state.
pub struct InteractionController<G: GridModel> {
    grid: G,
    layout: SurfaceLayout,
}

impl<G: GridModel> InteractionController<G> {
    pub fn new(mut grid: G, layout: SurfaceLayout) -> Self {
        grid.set_dimensions(layout.rows, layout.cols);
        Self { grid, layout }
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Handles one click, synchronously. Invalid positions clamp in the
    /// mapper and fall out as a NoOp through the model's bounds check;
    /// nothing here can fail.
    pub fn handle_click(&mut self, cursor_x: f64, cursor_y: f64, bounds: &SurfaceBounds) -> ClickOutcome {
        let hit = mapper::map_to_cell(cursor_x, cursor_y, bounds, &self.layout);
        log::debug!(
            "click at ({cursor_x:.1}, {cursor_y:.1}) -> cell ({}, {})",
            hit.row,
            hit.col
        );

        if self.grid.toggle(hit.row, hit.col, hit.pixel_x, hit.pixel_y) {
            ClickOutcome::StateChanged
        } else {
            ClickOutcome::NoOp
        }
    }
}
