/// Dimensions of the drawing surface, fixed at startup.
///
/// The surface occupies half of the available viewport width, and its
/// height is trimmed down to an exact multiple of the cell size so the
/// bottom row is never a partial cell. Width keeps the plain floored
/// half; any remainder past the last column is unclickable dead space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceLayout {
    pub rows: u32,
    pub cols: u32,
    pub surface_width: u32,
    pub surface_height: u32,
    pub cell_size: u32,
}

impl SurfaceLayout {
    pub fn compute(viewport_width: u32, viewport_height: u32, cell_size: u32) -> Self {
        let surface_height = viewport_height - viewport_height % cell_size;
        let surface_width = viewport_width / 2;

        Self {
            rows: surface_height / cell_size,
            cols: surface_width / cell_size,
            surface_width,
            surface_height,
            cell_size,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_is_trimmed_to_cell_multiple() {
        for height in [0, 1, 19, 20, 21, 479, 480, 481, 1000] {
            let layout = SurfaceLayout::compute(640, height, 20);
            assert_eq!(layout.surface_height % 20, 0, "height {height}");
            assert!(layout.rows * 20 <= layout.surface_height);
            assert!(layout.surface_height < (layout.rows + 1) * 20);
        }
    }

    #[test]
    fn reference_viewport() {
        let layout = SurfaceLayout::compute(640, 480, 20);
        assert_eq!(layout.surface_height, 480);
        assert_eq!(layout.rows, 24);
        assert_eq!(layout.surface_width, 320);
        assert_eq!(layout.cols, 16);
    }

    #[test]
    fn uneven_viewport_drops_partial_row() {
        let layout = SurfaceLayout::compute(500, 493, 20);
        assert_eq!(layout.surface_height, 480);
        assert_eq!(layout.rows, 24);
        assert_eq!(layout.surface_width, 250);
        assert_eq!(layout.cols, 12);
    }

    #[test]
    fn degenerate_viewport_yields_empty_grid() {
        let layout = SurfaceLayout::compute(0, 0, 20);
        assert_eq!(layout.rows, 0);
        assert_eq!(layout.cols, 0);
        assert!(layout.is_empty());

        let narrow = SurfaceLayout::compute(30, 480, 20);
        assert_eq!(narrow.cols, 0);
        assert!(narrow.is_empty());
    }
}
