//! PNG plot rendering for the binary star engine.
//!
//! Draws the three teaching plots into `image` framebuffers:
//! - orbit traces of both stars around the center of mass,
//! - radial velocity vs. time over two periods,
//! - a synthetic absorption-line spectrum at a chosen orbital phase.
//!
//! Everything here is coordinate scaling plus Bresenham lines; the engine
//! supplies plain numeric samples and this module owns the file output.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::SimResult;
use crate::simulation::binary::BinarySystem;
use crate::simulation::constants::H_ALPHA_NM;

const PLOT_W: u32 = 900;
const PLOT_H: u32 = 600;
const ORBIT_SIZE: u32 = 700; // orbit view is square to keep circles round
const MARGIN: i64 = 40;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([20, 20, 20]);
const GRAY: Rgb<u8> = Rgb([170, 170, 170]);
const BLUE: Rgb<u8> = Rgb([40, 80, 220]); // star 1
const RED: Rgb<u8> = Rgb([210, 50, 40]); // star 2

/// Minimal pixel canvas over an `image` framebuffer.
///
/// Coordinates are signed so callers may pass off-canvas points; drawing
/// clips at the edges.
struct Canvas {
    img: RgbImage,
}

impl Canvas {
    fn new(width: u32, height: u32) -> Self {
        Self {
            img: ImageBuffer::from_pixel(width, height, WHITE),
        }
    }

    fn set(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.img.width() && (y as u32) < self.img.height() {
            self.img.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Bresenham line between two pixel coordinates
    fn line(&mut self, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
        let (mut x0, mut y0) = from;
        let (x1, y1) = to;
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn polyline(&mut self, points: &[(i64, i64)], color: Rgb<u8>) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], color);
        }
    }

    /// Dashed vertical line (4 px on, 4 px off)
    fn dashed_vline(&mut self, x: i64, y0: i64, y1: i64, color: Rgb<u8>) {
        let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        for y in lo..=hi {
            if (y - lo) % 8 < 4 {
                self.set(x, y, color);
            }
        }
    }

    /// Dashed horizontal line (4 px on, 4 px off)
    fn dashed_hline(&mut self, y: i64, x0: i64, x1: i64, color: Rgb<u8>) {
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in lo..=hi {
            if (x - lo) % 8 < 4 {
                self.set(x, y, color);
            }
        }
    }

    /// Filled square blot of half-width `r`, used as a point marker
    fn blot(&mut self, x: i64, y: i64, r: i64, color: Rgb<u8>) {
        for dy in -r..=r {
            for dx in -r..=r {
                self.set(x + dx, y + dy, color);
            }
        }
    }

    fn save(&self, path: &Path) -> SimResult<()> {
        self.img.save(path)?;
        Ok(())
    }
}

/// `n` evenly spaced values covering [start, end] inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Map `v` from a data range onto a pixel range
fn map_range(v: f64, data: (f64, f64), pixels: (i64, i64)) -> i64 {
    let (d0, d1) = data;
    let (p0, p1) = pixels;
    let frac = (v - d0) / (d1 - d0);
    (p0 as f64 + frac * (p1 - p0) as f64).round() as i64
}

/// Orbit traces of both stars over one full period.
///
/// Star 1 in blue, star 2 in red, starting positions marked, the center
/// of mass drawn as a cross at the origin.
pub fn plot_orbits(system: &BinarySystem, path: &Path) -> SimResult<()> {
    let mut canvas = Canvas::new(ORBIT_SIZE, ORBIT_SIZE);
    let size = ORBIT_SIZE as i64;

    // Data extent: the larger orbital radius plus a margin, symmetric so
    // the center of mass lands mid-canvas
    let extent = system.r1.max(system.r2) * 1.15;
    let x_px = (MARGIN, size - MARGIN);
    let y_px = (size - MARGIN, MARGIN); // flip: pixel y grows downward

    let to_px = |x: f64, y: f64| {
        (
            map_range(x, (-extent, extent), x_px),
            map_range(y, (-extent, extent), y_px),
        )
    };

    // Light axes through the center of mass
    let mid = size / 2;
    canvas.line((MARGIN, mid), (size - MARGIN, mid), GRAY);
    canvas.line((mid, MARGIN), (mid, size - MARGIN), GRAY);

    let times = linspace(0.0, system.period, 400);
    let samples = system.sample_positions(&times);

    let trace1: Vec<(i64, i64)> = samples.iter().map(|(p1, _)| to_px(p1.x, p1.y)).collect();
    let trace2: Vec<(i64, i64)> = samples.iter().map(|(_, p2)| to_px(p2.x, p2.y)).collect();
    canvas.polyline(&trace1, BLUE);
    canvas.polyline(&trace2, RED);

    // Starting positions and the center-of-mass cross
    if let Some((p1, p2)) = samples.first() {
        let (x1, y1) = to_px(p1.x, p1.y);
        let (x2, y2) = to_px(p2.x, p2.y);
        canvas.blot(x1, y1, 5, BLUE);
        canvas.blot(x2, y2, 5, RED);
    }
    canvas.line((mid - 6, mid), (mid + 6, mid), BLACK);
    canvas.line((mid, mid - 6), (mid, mid + 6), BLACK);

    canvas.save(path)
}

/// Radial velocity curves of both stars over two periods.
///
/// The vertical scale is fixed by the orbital speeds (not the sampled
/// curve), so a face-on system draws visibly flat lines at zero.
pub fn plot_radial_velocities(system: &BinarySystem, inclination_deg: f64, path: &Path) -> SimResult<()> {
    let mut canvas = Canvas::new(PLOT_W, PLOT_H);
    let w = PLOT_W as i64;
    let h = PLOT_H as i64;

    let t_max = 2.0 * system.period;
    let v_extent = system.v1_kms.max(system.v2_kms) * 1.15;
    let x_px = (MARGIN, w - MARGIN);
    let y_px = (h - MARGIN, MARGIN);

    // Frame and the zero-velocity line
    canvas.line((MARGIN, MARGIN), (MARGIN, h - MARGIN), BLACK);
    canvas.line((MARGIN, h - MARGIN), (w - MARGIN, h - MARGIN), BLACK);
    let zero_y = map_range(0.0, (-v_extent, v_extent), y_px);
    canvas.dashed_hline(zero_y, MARGIN, w - MARGIN, GRAY);

    let times = linspace(0.0, t_max, 600);
    let samples = system.sample_radial_velocities(&times, inclination_deg);

    let curve = |pick: fn(&(f64, f64)) -> f64| -> Vec<(i64, i64)> {
        times
            .iter()
            .zip(samples.iter())
            .map(|(&t, rv)| {
                (
                    map_range(t, (0.0, t_max), x_px),
                    map_range(pick(rv), (-v_extent, v_extent), y_px),
                )
            })
            .collect()
    };

    canvas.polyline(&curve(|rv| rv.0), BLUE);
    canvas.polyline(&curve(|rv| rv.1), RED);

    canvas.save(path)
}

/// Synthetic spectrum at an orbital phase in [0, 1].
///
/// A flat continuum minus one Gaussian absorption line per star, each
/// centered on that star's Doppler-shifted H-alpha wavelength. Dashed
/// markers at the rest wavelength (gray) and the two shifted lines.
pub fn plot_spectrum(
    system: &BinarySystem,
    phase: f64,
    inclination_deg: f64,
    path: &Path,
) -> SimResult<()> {
    let mut canvas = Canvas::new(PLOT_W, PLOT_H);
    let w = PLOT_W as i64;
    let h = PLOT_H as i64;

    let time = phase * system.period;
    let (rv1, rv2) = system.radial_velocities_at(time, inclination_deg);
    let line1 = system.doppler_shift(rv1, H_ALPHA_NM);
    let line2 = system.doppler_shift(rv2, H_ALPHA_NM);

    // 2 nm window around the rest wavelength, flux plotted on [0, 1.2]
    let window = 2.0;
    let wl_range = (H_ALPHA_NM - window, H_ALPHA_NM + window);
    let flux_range = (0.0, 1.2);
    let x_px = (MARGIN, w - MARGIN);
    let y_px = (h - MARGIN, MARGIN);

    canvas.line((MARGIN, MARGIN), (MARGIN, h - MARGIN), BLACK);
    canvas.line((MARGIN, h - MARGIN), (w - MARGIN, h - MARGIN), BLACK);

    let wavelengths = linspace(wl_range.0, wl_range.1, 1000);
    let spectrum: Vec<(i64, i64)> = wavelengths
        .iter()
        .map(|&wl| {
            let flux = 1.0 - gaussian(wl, line1, 0.6, 0.05) - gaussian(wl, line2, 0.4, 0.05);
            (
                map_range(wl, wl_range, x_px),
                map_range(flux, flux_range, y_px),
            )
        })
        .collect();
    canvas.polyline(&spectrum, BLACK);

    for (center, color) in [(H_ALPHA_NM, GRAY), (line1, BLUE), (line2, RED)] {
        let x = map_range(center, wl_range, x_px);
        canvas.dashed_vline(x, MARGIN, h - MARGIN, color);
    }

    canvas.save(path)
}

/// Gaussian bump used for the absorption lines
fn gaussian(x: f64, center: f64, amplitude: f64, sigma: f64) -> f64 {
    amplitude * (-0.5 * ((x - center) / sigma).powi(2)).exp()
}
