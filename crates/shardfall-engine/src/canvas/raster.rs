//! Scanline rasterization shared by `PixelCanvas` fill and stroke.

use crate::coords::Vec2;

/// Visits every pixel whose center lies inside the polygon set described by
/// `edges`, using the nonzero winding rule.
///
/// Rows and columns are clipped to `width x height`. Each covered pixel is
/// visited exactly once, so overlapping edges never double-blend.
pub(crate) fn fill_nonzero<F>(edges: &[(Vec2, Vec2)], width: u32, height: u32, mut plot: F)
where
    F: FnMut(usize, usize),
{
    if edges.is_empty() || width == 0 || height == 0 {
        return;
    }

    let (mut y_min, mut y_max) = (f32::INFINITY, f32::NEG_INFINITY);
    for (a, b) in edges {
        if !a.is_finite() || !b.is_finite() {
            return;
        }
        y_min = y_min.min(a.y).min(b.y);
        y_max = y_max.max(a.y).max(b.y);
    }

    let row0 = (y_min - 0.5).ceil().max(0.0) as usize;
    let row1 = ((y_max - 0.5).ceil().max(0.0) as usize).min(height as usize);

    let mut crossings: Vec<(f32, i32)> = Vec::with_capacity(edges.len());

    for row in row0..row1 {
        let sy = row as f32 + 0.5;

        crossings.clear();
        for &(a, b) in edges {
            // Half-open in y so a vertex shared by two edges is counted once.
            let (winding, top, bottom) = if a.y <= sy && b.y > sy {
                (1, a, b)
            } else if b.y <= sy && a.y > sy {
                (-1, b, a)
            } else {
                continue;
            };
            let t = (sy - top.y) / (bottom.y - top.y);
            crossings.push((top.x + t * (bottom.x - top.x), winding));
        }

        if crossings.len() < 2 {
            continue;
        }
        crossings.sort_by(|l, r| l.0.total_cmp(&r.0));

        let mut winding = 0;
        for pair in crossings.windows(2) {
            winding += pair[0].1;
            if winding == 0 {
                continue;
            }
            plot_span(pair[0].0, pair[1].0, row, width, &mut plot);
        }
    }
}

/// Plots the pixels of `row` whose centers fall in `[x0, x1)`.
fn plot_span<F>(x0: f32, x1: f32, row: usize, width: u32, plot: &mut F)
where
    F: FnMut(usize, usize),
{
    let start = (x0 - 0.5).ceil().max(0.0) as usize;
    let end = ((x1 - 0.5).ceil().max(0.0) as usize).min(width as usize);
    for col in start..end {
        plot(col, row);
    }
}

/// Expands each segment into a quad `width` pixels wide.
///
/// All quads share the same orientation, so filling their union with the
/// nonzero rule paints overlapping joints once.
pub(crate) fn stroke_outline(segments: &[(Vec2, Vec2)], width: f32) -> Vec<(Vec2, Vec2)> {
    let half = width.max(0.0) * 0.5;
    let mut edges = Vec::with_capacity(segments.len() * 4);
    if half == 0.0 {
        return edges;
    }

    for &(a, b) in segments {
        let dir = b - a;
        let len = dir.length();
        if len <= f32::EPSILON {
            continue;
        }
        let n = dir.perp() * (half / len);

        let quad = [a + n, b + n, b - n, a - n];
        for i in 0..4 {
            edges.push((quad[i], quad[(i + 1) % 4]));
        }
    }

    edges
}
