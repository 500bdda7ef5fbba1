//! Bounded, insertion-ordered triangle history with per-shape painted flags.

use std::collections::VecDeque;

use crate::config::MAX_SHAPES;
use crate::shapes::Triangle;

/// Identity of a buffered triangle.
///
/// Ids are assigned in insertion order and never reused, so two triangles
/// with equal coordinates remain distinct entries.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ShapeId(u64);

#[derive(Debug, Clone)]
struct Entry {
    id: ShapeId,
    triangle: Triangle,
    painted: bool,
}

/// Fixed-capacity FIFO of triangles.
///
/// Invariants:
/// - `len() <= capacity()` after every call
/// - entries are ordered oldest first; ids are strictly increasing
/// - a shape's painted flag lives and dies with its entry
#[derive(Debug, Clone)]
pub struct ShapeBuffer {
    entries: VecDeque<Entry>,
    capacity: usize,
    next_id: u64,
}

impl ShapeBuffer {
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "ShapeBuffer capacity must be non-zero");
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            next_id: 0,
        }
    }

    /// Appends `triangle` unpainted, evicting the oldest entry when full.
    pub fn insert(&mut self, triangle: Triangle) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;

        self.entries.push_back(Entry {
            id,
            triangle,
            painted: false,
        });

        if self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                log::trace!("evicted shape {:?}", evicted.id);
            }
        }

        id
    }

    /// Marks every entry unpainted. Membership and order are unchanged.
    pub fn reset_all_unpainted(&mut self) {
        for e in &mut self.entries {
            e.painted = false;
        }
    }

    /// Calls `paint` for each unpainted entry, oldest first, and marks it
    /// painted. Returns how many entries were painted.
    pub fn paint_pending<F>(&mut self, mut paint: F) -> usize
    where
        F: FnMut(ShapeId, &Triangle),
    {
        let mut count = 0;
        for e in self.entries.iter_mut().filter(|e| !e.painted) {
            paint(e.id, &e.triangle);
            e.painted = true;
            count += 1;
        }
        count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Triangle)> + '_ {
        self.entries.iter().map(|e| (e.id, &e.triangle))
    }

    pub fn ids(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    fn find(&self, id: ShapeId) -> Option<&Entry> {
        let idx = self.entries.binary_search_by_key(&id, |e| e.id).ok()?;
        self.entries.get(idx)
    }

    pub fn get(&self, id: ShapeId) -> Option<&Triangle> {
        self.find(id).map(|e| &e.triangle)
    }

    /// Painted flag of `id`, or `None` once the shape has been evicted.
    pub fn is_painted(&self, id: ShapeId) -> Option<bool> {
        self.find(id).map(|e| e.painted)
    }

    pub fn unpainted_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.painted).count()
    }
}

impl Default for ShapeBuffer {
    fn default() -> Self {
        Self::new(MAX_SHAPES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Point, Rgba};

    /// Distinguishable triangle; `n` is stored in the first vertex.
    fn tri(n: u32) -> Triangle {
        Triangle {
            p1: Point::new(n as f64, 0.0),
            p2: Point::new(0.0, 1.0),
            p3: Point::new(1.0, 0.0),
            color: Rgba { r: 0, g: 0, b: 0, a: 0.5 },
        }
    }

    fn tags(buf: &ShapeBuffer) -> Vec<u32> {
        buf.iter().map(|(_, t)| t.p1.x as u32).collect()
    }

    #[test]
    fn starts_empty_with_default_capacity() {
        let buf = ShapeBuffer::default();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 200);
    }

    #[test]
    fn length_is_bounded_and_keeps_the_newest() {
        let mut buf = ShapeBuffer::default();
        for n in 0..1_000 {
            buf.insert(tri(n));
            assert!(buf.len() <= 200);
        }
        assert_eq!(buf.len(), 200);
        assert_eq!(tags(&buf), (800..1_000).collect::<Vec<_>>());
    }

    #[test]
    fn capacity_three_evicts_oldest_with_flags() {
        let mut buf = ShapeBuffer::new(3);
        let ids: Vec<ShapeId> = (1..=5).map(|n| buf.insert(tri(n))).collect();

        assert_eq!(tags(&buf), vec![3, 4, 5]);
        assert_eq!(buf.ids().collect::<Vec<_>>(), ids[2..].to_vec());

        assert_eq!(buf.is_painted(ids[0]), None);
        assert_eq!(buf.is_painted(ids[1]), None);
        assert_eq!(buf.get(ids[0]), None);
        for id in &ids[2..] {
            assert_eq!(buf.is_painted(*id), Some(false));
        }
    }

    #[test]
    fn identical_triangles_are_distinct_entries() {
        let mut buf = ShapeBuffer::new(4);
        let a = buf.insert(tri(1));
        let b = buf.insert(tri(1));
        assert_ne!(a, b);
        assert_eq!(buf.len(), 2);

        buf.paint_pending(|id, _| assert!(id == a || id == b));
        assert_eq!(buf.is_painted(a), Some(true));
        assert_eq!(buf.is_painted(b), Some(true));
    }

    #[test]
    fn paint_pending_visits_each_unpainted_entry_once() {
        let mut buf = ShapeBuffer::new(10);
        for n in 0..4 {
            buf.insert(tri(n));
        }

        let mut seen = Vec::new();
        assert_eq!(buf.paint_pending(|_, t| seen.push(t.p1.x as u32)), 4);
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(buf.paint_pending(|_, _| panic!("already painted")), 0);

        buf.insert(tri(9));
        assert_eq!(buf.unpainted_count(), 1);
    }

    #[test]
    fn reset_marks_everything_unpainted_without_reordering() {
        let mut buf = ShapeBuffer::new(3);
        for n in 0..5 {
            buf.insert(tri(n));
        }
        buf.paint_pending(|_, _| {});
        assert_eq!(buf.unpainted_count(), 0);

        buf.reset_all_unpainted();
        assert_eq!(buf.unpainted_count(), 3);
        assert_eq!(tags(&buf), vec![2, 3, 4]);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn zero_capacity_is_treated_as_one() {
        let mut buf = ShapeBuffer::new(0);
        buf.insert(tri(1));
        buf.insert(tri(2));
        assert_eq!(tags(&buf), vec![2]);
    }
}
