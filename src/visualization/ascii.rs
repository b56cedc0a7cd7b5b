//! Top-down ASCII view of body positions.
//!
//! Consumes `(marker, x, y)` tuples in AU and renders a square character
//! grid with the system center at the middle. Pure string building; the
//! CLI decides what to do with the result.

/// Render a `size` x `size` grid with `*` at the center.
///
/// Each body lands at `center + position * scale` (truncated), one marker
/// character per body; bodies outside the grid are silently dropped.
pub fn render_top_down(markers: &[(char, f64, f64)], size: usize, scale: f64) -> String {
    let mut grid = vec![vec![' '; size]; size];
    let center = (size / 2) as i64;
    grid[center as usize][center as usize] = '*';

    for &(marker, x, y) in markers {
        let gx = (center as f64 + x * scale) as i64;
        let gy = (center as f64 + y * scale) as i64;

        if gx >= 0 && gy >= 0 && (gx as usize) < size && (gy as usize) < size {
            grid[gy as usize][gx as usize] = marker;
        }
    }

    let mut out = String::with_capacity(size * (size + 1));
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    out
}
