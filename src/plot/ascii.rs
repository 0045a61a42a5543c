//! ASCII plotting of waveform amplitudes for terminal output.
//!
//! Fixed-size character grid, log-frequency x axis, `log10 |h|` y axis.
//! Deterministic output, so small plots double as golden tests.
//!
//! Plot elements:
//! - `|h+|`: `+` line
//! - `|h×|`: `x` line (drawn second, never over `+`)
//!
//! Bins with zero amplitude (above a model's cutoff) are left out.

use num_complex::Complex;

use crate::io::WaveformFile;

/// Render amplitude curves for one row of polarizations.
pub fn render_waveform_plot(
    frequencies: &[f64],
    plus: &[Complex<f64>],
    cross: &[Complex<f64>],
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let plus_pts = log_points(frequencies, plus);
    let cross_pts = log_points(frequencies, cross);

    let (x_min, x_max) = range(plus_pts.iter().chain(&cross_pts).map(|p| p.0)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = range(plus_pts.iter().chain(&cross_pts).map(|p| p.1)).unwrap_or((-1.0, 0.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    let frame = Frame {
        x_min,
        x_max,
        y_min,
        y_max,
    };
    draw_curve(&mut grid, &plus_pts, &frame, '+');
    draw_curve(&mut grid, &cross_pts, &frame, 'x');

    let mut out = format!(
        "Plot: f=[{:.1}, {:.1}] Hz (log) | log10|h|=[{y_min:.2}, {y_max:.2}] | +: plus, x: cross\n",
        10f64.powf(x_min),
        10f64.powf(x_max),
    );
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

/// Render a saved waveform file.
pub fn render_waveform_file(file: &WaveformFile, width: usize, height: usize) -> String {
    render_waveform_plot(&file.frequencies, &file.plus, &file.cross, width, height)
}

fn log_points(frequencies: &[f64], h: &[Complex<f64>]) -> Vec<(f64, f64)> {
    frequencies
        .iter()
        .zip(h)
        .filter_map(|(&f, z)| {
            let amp = z.norm();
            (f > 0.0 && amp > 0.0 && amp.is_finite()).then(|| (f.log10(), amp.log10()))
        })
        .collect()
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    (lo.is_finite() && hi.is_finite() && hi > lo).then_some((lo, hi))
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let pad = ((max - min).abs() * frac).max(1e-12);
    (min - pad, max + pad)
}

struct Frame {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

fn map_x(x: f64, frame: &Frame, width: usize) -> usize {
    let u = ((x - frame.x_min) / (frame.x_max - frame.x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, frame: &Frame, height: usize) -> usize {
    let u = ((y - frame.y_min) / (frame.y_max - frame.y_min)).clamp(0.0, 1.0);
    // Row 0 is the top.
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], points: &[(f64, f64)], frame: &Frame, ch: char) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in points {
        let (cx, cy) = (map_x(x, frame, width), map_y(y, frame, height));
        match prev {
            Some((x0, y0)) => draw_line(grid, x0, y0, cx, cy, ch),
            None if grid[cy][cx] == ' ' => grid[cy][cx] = ch,
            None => {}
        }
        prev = Some((cx, cy));
    }
}

/// Integer line drawing (Bresenham-ish); only fills blank cells.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

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
