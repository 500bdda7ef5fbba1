use crate::coords::Vec2;

/// A run of connected points started by `move_to`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubPath {
    pub points: Vec<Vec2>,
    pub closed: bool,
}

/// Current path of a canvas: a list of subpaths.
///
/// Mirrors 2D canvas path semantics:
/// - `line_to` without a prior `move_to` starts a subpath at that point
/// - after `close`, the next `line_to` starts a new subpath at the closed
///   subpath's first point
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<SubPath>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all subpaths. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.subpaths.clear();
    }

    pub fn move_to(&mut self, p: Vec2) {
        self.subpaths.push(SubPath {
            points: vec![p],
            closed: false,
        });
    }

    pub fn line_to(&mut self, p: Vec2) {
        let restart = match self.subpaths.last_mut() {
            Some(sub) if !sub.closed => {
                sub.points.push(p);
                return;
            }
            Some(sub) => sub.points[0],
            None => return self.move_to(p),
        };

        self.subpaths.push(SubPath {
            points: vec![restart, p],
            closed: false,
        });
    }

    pub fn close(&mut self) {
        if let Some(sub) = self.subpaths.last_mut() {
            if !sub.points.is_empty() {
                sub.closed = true;
            }
        }
    }

    /// Edges used for filling: every subpath is implicitly closed.
    pub fn fill_edges(&self) -> Vec<(Vec2, Vec2)> {
        let mut edges = Vec::new();
        for sub in &self.subpaths {
            let n = sub.points.len();
            if n < 2 {
                continue;
            }
            for i in 0..n {
                edges.push((sub.points[i], sub.points[(i + 1) % n]));
            }
        }
        edges
    }

    /// Segments used for stroking: the closing segment only exists for closed
    /// subpaths.
    pub fn stroke_segments(&self) -> Vec<(Vec2, Vec2)> {
        let mut segments = Vec::new();
        for sub in &self.subpaths {
            segments.extend(sub.points.windows(2).map(|w| (w[0], w[1])));
            if sub.closed && sub.points.len() > 2 {
                segments.push((sub.points[sub.points.len() - 1], sub.points[0]));
            }
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn line_to_without_move_starts_subpath() {
        let mut path = Path::new();
        path.line_to(v(1.0, 1.0));
        assert_eq!(path.subpaths.len(), 1);
        assert_eq!(path.subpaths[0].points, vec![v(1.0, 1.0)]);
    }

    #[test]
    fn fill_edges_close_implicitly() {
        let mut path = Path::new();
        path.move_to(v(0.0, 0.0));
        path.line_to(v(4.0, 0.0));
        path.line_to(v(0.0, 4.0));

        let edges = path.fill_edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (v(0.0, 4.0), v(0.0, 0.0)));
    }

    #[test]
    fn stroke_segments_respect_close() {
        let mut path = Path::new();
        path.move_to(v(0.0, 0.0));
        path.line_to(v(4.0, 0.0));
        path.line_to(v(0.0, 4.0));
        assert_eq!(path.stroke_segments().len(), 2);

        path.close();
        assert_eq!(path.stroke_segments().len(), 3);
    }

    #[test]
    fn line_to_after_close_restarts_from_first_point() {
        let mut path = Path::new();
        path.move_to(v(1.0, 2.0));
        path.line_to(v(3.0, 2.0));
        path.close();
        path.line_to(v(5.0, 5.0));

        assert_eq!(path.subpaths.len(), 2);
        assert_eq!(path.subpaths[1].points, vec![v(1.0, 2.0), v(5.0, 5.0)]);
    }

    #[test]
    fn clear_empties_path() {
        let mut path = Path::new();
        path.move_to(v(0.0, 0.0));
        path.clear();
        assert!(path.subpaths.is_empty());
        assert!(path.fill_edges().is_empty());
    }
}
