//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual checks without the TUI
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - rate curve: `-` line, current sample `@`
//! - density: `#` columns from the baseline up to the sampled density
//! - scenarios: one digit per output-gap path, observed rate as a `.` line with
//!   the live point `@`

use crate::domain::{CurvePoint, DensityPoint};
use crate::rule::ScenarioCurve;

/// Glyphs for scenario paths, in input order.
const SERIES_GLYPHS: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Render the implied-rate curve; the marked sample is drawn as `@`.
pub fn render_curve_plot(curve: &[CurvePoint], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let xs: Vec<(f64, f64)> = curve.iter().map(|p| (p.inflation, p.rate)).collect();
    let (x_min, x_max) = x_range(&xs).unwrap_or((1.0, 3.0));
    let (y_min, y_max) = y_range(&xs).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    draw_polyline(&mut grid, &xs, x_min, x_max, y_min, y_max, '-');

    for p in curve {
        if let Some(rate) = p.current_sample {
            let x = map_x(p.inflation, x_min, x_max, width);
            let y = map_y(rate, y_min, y_max, height);
            grid[y][x] = '@';
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: inflation=[{x_min:.2}, {x_max:.2}]% | rate=[{y_min:.2}, {y_max:.2}]%\n"
    ));
    push_grid(&mut out, grid);
    out
}

/// Render the confidence density as filled columns over a zero baseline.
pub fn render_density_plot(density: &[DensityPoint], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let xs: Vec<(f64, f64)> = density.iter().map(|p| (p.x, p.density)).collect();
    let (x_min, x_max) = x_range(&xs).unwrap_or((0.0, 1.0));
    let peak = y_range(&xs).map(|(_, hi)| hi).unwrap_or(1.0);
    let (_, y_max) = pad_range(0.0, peak, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    for &(x, d) in &xs {
        if !(x.is_finite() && d.is_finite()) {
            continue;
        }
        let col = map_x(x, x_min, x_max, width);
        let top = map_y(d, 0.0, y_max, height);
        for row in grid.iter_mut().skip(top) {
            row[col] = '#';
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Density: rate=[{x_min:.2}, {x_max:.2}]% | peak={peak:.4}\n"
    ));
    push_grid(&mut out, grid);
    out
}

/// Render output-gap scenario paths over a shared inflation grid.
///
/// `observed` is `(live inflation, observed policy rate)`; it adds a
/// horizontal `.` line at the rate and an `@` at the live point.
pub fn render_scenario_plot(
    inflations: &[f64],
    curves: &[ScenarioCurve],
    observed: Option<(f64, f64)>,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = finite_range(inflations.iter().copied()).unwrap_or((0.0, 1.0));
    let rates = curves
        .iter()
        .flat_map(|c| c.rates.iter().copied())
        .chain(observed.map(|(_, rate)| rate));
    let (y_min, y_max) = finite_range(rates).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    for (i, c) in curves.iter().enumerate() {
        let points: Vec<(f64, f64)> = inflations.iter().copied().zip(c.rates.iter().copied()).collect();
        let glyph = SERIES_GLYPHS[i % SERIES_GLYPHS.len()];
        draw_polyline(&mut grid, &points, x_min, x_max, y_min, y_max, glyph);
    }

    if let Some((pi, rate)) = observed.filter(|(pi, rate)| pi.is_finite() && rate.is_finite()) {
        let row = map_y(rate, y_min, y_max, height);
        draw_line(&mut grid, 0, row, width - 1, row, '.');
        grid[row][map_x(pi, x_min, x_max, width)] = '@';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Scenarios: inflation=[{x_min:.2}, {x_max:.2}]% | rate=[{y_min:.2}, {y_max:.2}]%\n"
    ));
    push_grid(&mut out, grid);
    for (i, c) in curves.iter().enumerate() {
        out.push_str(&format!(
            "  {}: gap {:+.2}% (r*={:.2}%)\n",
            SERIES_GLYPHS[i % SERIES_GLYPHS.len()],
            c.output_gap,
            c.neutral_rate
        ));
    }
    if let Some((_, rate)) = observed {
        out.push_str(&format!("  .: observed {rate:.2}%\n"));
    }
    out
}

fn push_grid(out: &mut String, grid: Vec<Vec<char>>) {
    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }
}

fn x_range(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    finite_range(points.iter().map(|&(x, _)| x))
}

fn y_range(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    finite_range(points.iter().map(|&(_, y)| y))
}

fn finite_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() && max > min {
        Some((min, max))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_polyline(
    grid: &mut [Vec<char>],
    points: &[(f64, f64)],
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    ch: char,
) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in points {
        if !(x.is_finite() && y.is_finite()) {
            prev = None;
            continue;
        }
        let cx = map_x(x, x_min, x_max, width);
        let cy = map_y(y, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, cx, cy, ch);
        } else if grid[cy][cx] == ' ' {
            grid[cy][cx] = ch;
        }
        prev = Some((cx, cy));
    }
}

/// Integer line drawing (Bresenham-ish).
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Region;
    use crate::rule::{generate_confidence_density, generate_rate_curve};

    #[test]
    fn curve_plot_golden_snapshot_small() {
        let curve = vec![
            CurvePoint { inflation: 1.0, rate: 4.0, current_sample: None },
            CurvePoint { inflation: 2.0, rate: 5.0, current_sample: Some(5.0) },
            CurvePoint { inflation: 3.0, rate: 6.0, current_sample: None },
        ];

        let txt = render_curve_plot(&curve, 10, 5);
        let expected = concat!(
            "Plot: inflation=[1.00, 3.00]% | rate=[3.90, 6.10]%\n",
            "        --\n",
            "      --\n",
            "    -@\n",
            "  --\n",
            "--\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn curve_plot_marks_live_input_once() {
        let curve = generate_rate_curve(0.5, Region::Us, 2.2);
        let txt = render_curve_plot(&curve, 41, 12);
        let body: Vec<&str> = txt.lines().skip(1).collect();
        assert_eq!(body.len(), 12);

        let marks: Vec<(usize, usize)> = body
            .iter()
            .enumerate()
            .flat_map(|(row, line)| line.char_indices().filter(|&(_, c)| c == '@').map(move |(col, _)| (row, col)))
            .collect();
        assert_eq!(marks.len(), 1);
        // (2.2 - 1.0) / 2.0 of 40 columns.
        assert_eq!(marks[0].1, 24);
    }

    #[test]
    fn curve_plot_without_marker() {
        let curve = generate_rate_curve(0.5, Region::Us, 4.5);
        let txt = render_curve_plot(&curve, 41, 12);
        assert!(!txt.contains('@'));
        assert!(txt.starts_with("Plot: inflation=[1.00, 3.00]%"));
    }

    #[test]
    fn density_plot_peaks_in_the_middle() {
        let density = generate_confidence_density(5.3);
        let txt = render_density_plot(&density, 61, 10);
        let body: Vec<&str> = txt.lines().skip(1).collect();
        assert_eq!(body.len(), 10);

        let top = body[0];
        assert_eq!(top.chars().nth(30), Some('#'));
        assert!(top.chars().take(20).all(|c| c == ' '));

        // Bottom row is the baseline: every sampled column is filled.
        assert_eq!(body[9].chars().filter(|&c| c == '#').count(), 61);
        assert!(txt.starts_with("Density: rate=[3.80, 6.80]% | peak=0.9974"));
    }

    #[test]
    fn scenario_plot_draws_each_gap_path() {
        use crate::domain::RuleVariant;
        use crate::rule::{scenario_inflation_window, scenario_matrix};

        let pis = scenario_inflation_window(2.5);
        let curves = scenario_matrix(RuleVariant::Nonlinear, &[2.5], &pis, &[-1.0, 1.0]);
        let txt = render_scenario_plot(&pis, &curves, Some((2.5, 4.0)), 33, 12);
        let lines: Vec<&str> = txt.lines().collect();
        assert!(lines[0].starts_with("Scenarios: inflation=[2.10, 2.90]%"));

        let body = &lines[1..13];
        assert!(body.iter().any(|l| l.contains('1')));
        assert!(body.iter().any(|l| l.contains('2')));
        assert_eq!(body.iter().map(|l| l.matches('@').count()).sum::<usize>(), 1);
        // The higher-gap path sits above the lower one in the first column.
        let first_row = |glyph: char| body.iter().position(|l| l.starts_with(glyph)).unwrap();
        assert!(first_row('2') < first_row('1'));

        assert!(lines.contains(&"  1: gap -1.00% (r*=2.50%)"));
        assert!(lines.contains(&"  .: observed 4.00%"));
    }

    #[test]
    fn density_plot_survives_nan() {
        let density = generate_confidence_density(f64::NAN);
        let txt = render_density_plot(&density, 20, 5);
        assert!(!txt.contains('#'));
    }
}
