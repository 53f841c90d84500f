use std::collections::HashSet;

/// A logical cell reference. Active points are unique by (row, col);
/// there are no ordering semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: u32,
    pub col: u32,
}

/// Contract the interaction layer requires of the grid model. The model
/// owns the authoritative active-point set; callers only request
/// mutations and read access, never hold their own copy.
pub trait GridModel {
    fn rows(&self) -> u32;
    fn cols(&self) -> u32;

    /// Set once at startup from the computed surface layout.
    fn set_dimensions(&mut self, rows: u32, cols: u32);

    /// Toggles the cell at (row, col). The exact click position in
    /// backing-store pixels is passed along for models that keep it.
    /// Returns true iff the visible state changed; out-of-bounds cells
    /// are a no-op and return false, never an error.
    fn toggle(&mut self, row: u32, col: u32, pixel_x: u32, pixel_y: u32) -> bool;

    fn active_points(&self) -> Vec<Point>;
}

/// Default grid model: plain set membership, no simulation rules.
#[derive(Debug, Default)]
pub struct PointGrid {
    rows: u32,
    cols: u32,
    active: HashSet<Point>,
}

impl PointGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        self.active.contains(&Point { row, col })
    }
}

impl GridModel for PointGrid {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn set_dimensions(&mut self, rows: u32, cols: u32) {
        self.rows = rows;
        self.cols = cols;
    }

    fn toggle(&mut self, row: u32, col: u32, _pixel_x: u32, _pixel_y: u32) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        let point = Point { row, col };
        if !self.active.insert(point) {
            self.active.remove(&point);
        }
        true
    }

    fn active_points(&self) -> Vec<Point> {
        self.active.iter().copied().collect()
    }
}
