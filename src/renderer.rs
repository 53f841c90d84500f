use crate::grid::Point;
use crate::viewport::SurfaceLayout;

const BACKGROUND_COLOR: [u8; 4] = [32, 32, 32, 255];
const GRID_LINE_COLOR: [u8; 4] = [96, 96, 96, 255];
const MARKER_COLOR: [u8; 4] = [200, 200, 200, 255];

/// Full redraw of the surface: clear, active-point markers, grid lines on
/// top. Pure function over the frame bytes so it stays testable without a
/// window; repeated calls with unchanged inputs produce identical frames.
pub fn draw(frame: &mut [u8], layout: &SurfaceLayout, active_points: &[Point]) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&BACKGROUND_COLOR);
    }

    for point in active_points {
        draw_marker(frame, layout, point);
    }

    draw_grid_lines(frame, layout);
}

fn draw_marker(frame: &mut [u8], layout: &SurfaceLayout, point: &Point) {
    if point.row >= layout.rows || point.col >= layout.cols {
        return;
    }
    let cell_x = point.col * layout.cell_size;
    let cell_y = point.row * layout.cell_size;

    for dy in 0..layout.cell_size {
        for dx in 0..layout.cell_size {
            put_pixel(frame, layout, cell_x + dx, cell_y + dy, MARKER_COLOR);
        }
    }
}

fn draw_grid_lines(frame: &mut [u8], layout: &SurfaceLayout) {
    let grid_pixel_width = layout.cols * layout.cell_size;
    let grid_pixel_height = layout.rows * layout.cell_size;

    // Vertical lines
    for col in 0..=layout.cols {
        let x = col * layout.cell_size;
        for y in 0..grid_pixel_height {
            put_pixel(frame, layout, x, y, GRID_LINE_COLOR);
        }
    }

    // Horizontal lines
    for row in 0..=layout.rows {
        let y = row * layout.cell_size;
        for x in 0..grid_pixel_width {
            put_pixel(frame, layout, x, y, GRID_LINE_COLOR);
        }
    }
}

fn put_pixel(frame: &mut [u8], layout: &SurfaceLayout, x: u32, y: u32, color: [u8; 4]) {
    if x >= layout.surface_width || y >= layout.surface_height {
        return;
    }
    let index = ((y * layout.surface_width + x) * 4) as usize;
    if index + 4 <= frame.len() {
        frame[index..index + 4].copy_from_slice(&color);
    }
}
