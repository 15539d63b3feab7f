//! Fixed-height ASCII line charts.
//!
//! ```text
//!  100.00 ┤╭╮
//!   50.00 ┤│╰─
//!    0.00 ┼╯
//! ```

const LABEL_PRECISION: usize = 2;

/// Render `series` as a line chart exactly `height` rows tall (minimum 1).
///
/// Each row starts with a right-aligned y-axis label.  A constant series is
/// drawn as a flat line through the middle row, a single value as one point
/// on the axis.  Non-finite values are plotted as zero.  An empty series
/// renders as an empty string.
pub fn render_graph(series: &[f64], height: usize) -> String {
    let points: Vec<f64> = series
        .iter()
        .map(|v| if v.is_finite() { *v } else { 0.0 })
        .collect();
    let Some(&first) = points.first() else {
        return String::new();
    };

    let rows = height.max(1);
    let (mut lo, mut hi) = min_max(&points);
    if hi == lo {
        // one unit per row, value on the middle row
        let below = ((rows - 1) / 2) as f64;
        lo -= below;
        hi += (rows - 1) as f64 - below;
    }
    let scale = Scale { lo, hi, rows };

    // grid[row][column], row 0 at the top
    let columns = points.len() - 1;
    let mut grid = vec![vec![' '; columns]; rows];
    for (x, pair) in points.windows(2).enumerate() {
        let y0 = scale.level(pair[0]);
        let y1 = scale.level(pair[1]);
        let row = |level: usize| rows - 1 - level;

        if y0 == y1 {
            grid[row(y0)][x] = '─';
            continue;
        }
        if y0 > y1 {
            grid[row(y1)][x] = '╰';
            grid[row(y0)][x] = '╮';
        } else {
            grid[row(y1)][x] = '╭';
            grid[row(y0)][x] = '╯';
        }
        for level in y0.min(y1) + 1..y0.max(y1) {
            grid[row(level)][x] = '│';
        }
    }

    let precision = label_precision(lo, hi);
    let width = format!("{hi:.precision$}")
        .len()
        .max(format!("{lo:.precision$}").len())
        + 1;
    let first_row = rows - 1 - scale.level(first);

    let lines: Vec<String> = grid
        .into_iter()
        .enumerate()
        .map(|(row, cells)| {
            let axis = if row == first_row { '┼' } else { '┤' };
            let label = scale.label(row);
            let cells: String = cells.into_iter().collect();
            let line = format!("{label:>width$.precision$} {axis}{cells}");
            line.trim_end().to_string()
        })
        .collect();

    lines.join("\n")
}

struct Scale {
    lo:   f64,
    hi:   f64,
    rows: usize,
}

impl Scale {
    /// Row index counted from the bottom.
    fn level(&self, value: f64) -> usize {
        if self.rows == 1 {
            return 0;
        }
        let top = (self.rows - 1) as f64;
        ((value - self.lo) / (self.hi - self.lo) * top)
            .round()
            .clamp(0.0, top) as usize
    }

    /// Axis value printed on `row` (counted from the top).
    fn label(&self, row: usize) -> f64 {
        if self.rows == 1 {
            return self.hi;
        }
        self.hi - row as f64 * (self.hi - self.lo) / (self.rows - 1) as f64
    }
}

fn min_max(points: &[f64]) -> (f64, f64) {
    points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// More decimals for small magnitudes, none for large ones.
fn label_precision(lo: f64, hi: f64) -> usize {
    let magnitude = lo.abs().max(hi.abs());
    if magnitude == 0.0 {
        return LABEL_PRECISION;
    }

    let log = magnitude.log10();
    if log < 0.0 {
        let extra = if log.fract() != 0.0 {
            log.abs() as usize
        } else {
            (log.abs() - 1.0) as usize
        };
        LABEL_PRECISION + extra
    } else if log > 2.0 {
        0
    } else {
        LABEL_PRECISION
    }
}
