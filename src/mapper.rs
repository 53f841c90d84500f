use crate::viewport::SurfaceLayout;

/// Where the surface is displayed, in window coordinates. The displayed
/// size can differ from the backing buffer size (hidpi scaling, or an
/// OS-imposed window resize stretching the presented texture), so mapping
/// has to correct for the ratio between the two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceBounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

/// Result of mapping a pointer position onto the grid: the logical cell,
/// plus the rounded position in backing-store pixels for collaborators
/// that want sub-cell precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellHit {
    pub row: u32,
    pub col: u32,
    pub pixel_x: u32,
    pub pixel_y: u32,
}

/// Maps a pointer position to a grid cell. Total function: positions
/// outside the surface clamp to the nearest valid cell index, never an
/// error. The clamp is in cell-index units (`rows - 1` / `cols - 1`), not
/// the surface pixel sizes.
pub fn map_to_cell(
    cursor_x: f64,
    cursor_y: f64,
    bounds: &SurfaceBounds,
    layout: &SurfaceLayout,
) -> CellHit {
    let scale_x = if bounds.width > 0.0 {
        layout.surface_width as f64 / bounds.width
    } else {
        1.0
    };
    let scale_y = if bounds.height > 0.0 {
        layout.surface_height as f64 / bounds.height
    } else {
        1.0
    };

    let local_x = (cursor_x - bounds.left) * scale_x;
    let local_y = (cursor_y - bounds.top) * scale_y;

    let cell = layout.cell_size as f64;
    let row = (local_y / cell).floor().max(0.0) as u32;
    let col = (local_x / cell).floor().max(0.0) as u32;

    CellHit {
        row: row.min(layout.rows.saturating_sub(1)),
        col: col.min(layout.cols.saturating_sub(1)),
        pixel_x: local_x.round().max(0.0) as u32,
        pixel_y: local_y.round().max(0.0) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> SurfaceLayout {
        SurfaceLayout::compute(640, 480, 20)
    }

    fn unscaled_bounds() -> SurfaceBounds {
        SurfaceBounds::new(0.0, 0.0, 320.0, 480.0)
    }

    #[test]
    fn top_left_corner_maps_to_origin_cell() {
        let hit = map_to_cell(0.0, 0.0, &unscaled_bounds(), &layout());
        assert_eq!((hit.row, hit.col), (0, 0));
        assert_eq!((hit.pixel_x, hit.pixel_y), (0, 0));
    }

    #[test]
    fn offset_bounds_are_subtracted() {
        let bounds = SurfaceBounds::new(100.0, 50.0, 320.0, 480.0);
        let hit = map_to_cell(100.0, 50.0, &bounds, &layout());
        assert_eq!((hit.row, hit.col), (0, 0));

        let hit = map_to_cell(145.0, 95.0, &bounds, &layout());
        assert_eq!((hit.row, hit.col), (2, 2));
        assert_eq!((hit.pixel_x, hit.pixel_y), (45, 45));
    }

    #[test]
    fn displayed_size_mismatch_is_rescaled() {
        // Surface displayed at double size, e.g. a 2x hidpi window.
        let bounds = SurfaceBounds::new(0.0, 0.0, 640.0, 960.0);
        let hit = map_to_cell(90.0, 110.0, &bounds, &layout());
        assert_eq!((hit.pixel_x, hit.pixel_y), (45, 55));
        assert_eq!((hit.row, hit.col), (2, 2));
    }

    #[test]
    fn in_bounds_pointer_stays_in_cell_range() {
        let layout = layout();
        let bounds = unscaled_bounds();
        for &(x, y) in &[(0.0, 0.0), (319.9, 479.9), (160.0, 240.0), (19.9, 20.0)] {
            let hit = map_to_cell(x, y, &bounds, &layout);
            assert!(hit.row < layout.rows, "({x}, {y}) row {}", hit.row);
            assert!(hit.col < layout.cols, "({x}, {y}) col {}", hit.col);
        }
    }

    #[test]
    fn out_of_range_pointer_clamps_to_edge_cells() {
        let layout = layout();
        let bounds = unscaled_bounds();

        let hit = map_to_cell(10_000.0, 10_000.0, &bounds, &layout);
        assert_eq!((hit.row, hit.col), (layout.rows - 1, layout.cols - 1));

        let hit = map_to_cell(-50.0, -50.0, &bounds, &layout);
        assert_eq!((hit.row, hit.col), (0, 0));
        assert_eq!((hit.pixel_x, hit.pixel_y), (0, 0));
    }

    #[test]
    fn empty_grid_maps_to_origin() {
        let layout = SurfaceLayout::compute(0, 0, 20);
        let hit = map_to_cell(5.0, 5.0, &SurfaceBounds::new(0.0, 0.0, 0.0, 0.0), &layout);
        assert_eq!((hit.row, hit.col), (0, 0));
    }
}
