//! Outline tracing
//!
//! A glyph's outline is recovered in three steps:
//!
//! 1. **Boundary detection** - a black pixel is on the boundary when its
//!    E, W, N, S, NW or SE neighbor is not black. NE and SW are not
//!    consulted. The glyph is treated as if padded by one white pixel, and
//!    points are reported in that padded coordinate space (`x` = column,
//!    `y` = row).
//! 2. **Chaining** - starting from the first unvisited boundary point in
//!    row-major order, repeatedly step to the first unvisited point found
//!    by walking [`CHAIN_OFFSETS`] in order, until no offset lands on one.
//! 3. **Selection** - keep the longest path, plus the runner-up when it is
//!    longer than a tenth of the longest.

use crate::error::{RegionError, RegionResult};
use glyphscan_core::PixelGrid;
use glyphscan_transform::apportion;
use std::collections::HashSet;
use tracing::trace;

/// Side length of the square space glyphs are normalized to before
/// tracing.
pub const NORMALIZED_SIZE: u32 = 200;

/// Upper bound on the number of points an outline is sampled down to.
pub const MAX_SAMPLES: usize = 200;

/// Step vectors `(dx, dy)` tried, in order, when extending a path.
///
/// Ring 1 is walked clockwise from straight down, rings 2 and 3 follow.
/// `(-1, 3)` and `(-2, 3)` are not part of the table.
pub const CHAIN_OFFSETS: [(i32, i32); 46] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 2),
    (1, 2),
    (2, 2),
    (2, 1),
    (2, 0),
    (2, -1),
    (2, -2),
    (1, -2),
    (0, -2),
    (-1, -2),
    (-2, -2),
    (-2, -1),
    (-2, 0),
    (-2, 1),
    (-2, 2),
    (-1, 2),
    (0, 3),
    (1, 3),
    (2, 3),
    (3, 3),
    (3, 2),
    (3, 1),
    (3, 0),
    (3, -1),
    (3, -2),
    (3, -3),
    (2, -3),
    (1, -3),
    (0, -3),
    (-1, -3),
    (-2, -3),
    (-3, -3),
    (-3, -2),
    (-3, -1),
    (-3, 0),
    (-3, 1),
    (-3, 2),
    (-3, 3),
];

/// A point on an outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate (column)
    pub x: i32,
    /// Y coordinate (row)
    pub y: i32,
}

impl Point {
    /// Create a new point
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point displaced by `(dx, dy)`
    #[inline]
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to `other`
    pub fn distance(self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// An ordered chain of boundary points
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outline {
    points: Vec<Point>,
}

impl Outline {
    /// Wrap an ordered point sequence.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in chain order
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Smallest y coordinate, or `None` for an empty outline
    pub fn min_y(&self) -> Option<i32> {
        self.points.iter().map(|p| p.y).min()
    }

    /// Largest y coordinate, or `None` for an empty outline
    pub fn max_y(&self) -> Option<i32> {
        self.points.iter().map(|p| p.y).max()
    }

    /// Down-sample to roughly `n` evenly spaced points.
    ///
    /// The sample indices are the boundaries of `apportion(len - 1, n)`;
    /// a point already taken is not taken again, so short outlines yield
    /// fewer than `n + 1` points. `n == 0` yields only the first point.
    pub fn sample(&self, n: usize) -> Vec<Point> {
        if self.points.is_empty() {
            return Vec::new();
        }
        let last = (self.points.len() - 1) as u32;
        let mut seen = HashSet::new();
        apportion(last, n as u32)
            .into_iter()
            .map(|i| self.points[i as usize])
            .filter(|p| seen.insert(*p))
            .collect()
    }
}

/// Sample count shared by every outline of one glyph.
///
/// [`MAX_SAMPLES`], unless some outline is shorter than that, in which
/// case one less than the shortest outline's length.
pub fn sample_count(outlines: &[Outline]) -> usize {
    match outlines.iter().map(Outline::len).min() {
        Some(shortest) if shortest < MAX_SAMPLES => shortest.saturating_sub(1),
        _ => MAX_SAMPLES,
    }
}

/// Collect the boundary pixels of `grid` in row-major order.
///
/// Coordinates are in the one-pixel padded space, so the top-left pixel
/// of the grid is reported as `(1, 1)`.
pub fn boundary_points(grid: &PixelGrid) -> Vec<Point> {
    let mut points = Vec::new();
    for y in 0..i64::from(grid.height()) {
        for x in 0..i64::from(grid.width()) {
            if !grid.is_black_at(x, y) {
                continue;
            }
            let exposed = !grid.is_black_at(x + 1, y)
                || !grid.is_black_at(x - 1, y)
                || !grid.is_black_at(x, y - 1)
                || !grid.is_black_at(x, y + 1)
                || !grid.is_black_at(x - 1, y - 1)
                || !grid.is_black_at(x + 1, y + 1);
            if exposed {
                points.push(Point::new(x as i32 + 1, y as i32 + 1));
            }
        }
    }
    points
}

/// Dense membership set over the bounding box of a point list.
struct PointSet {
    min_x: i32,
    min_y: i32,
    width: usize,
    height: usize,
    present: Vec<bool>,
}

impl PointSet {
    fn new(points: &[Point]) -> Self {
        let min_x = points.iter().map(|p| p.x).min().unwrap_or(0);
        let max_x = points.iter().map(|p| p.x).max().unwrap_or(-1);
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0);
        let max_y = points.iter().map(|p| p.y).max().unwrap_or(-1);
        let width = (max_x - min_x + 1).max(0) as usize;
        let height = (max_y - min_y + 1).max(0) as usize;

        let mut set = Self {
            min_x,
            min_y,
            width,
            height,
            present: vec![false; width * height],
        };
        for &p in points {
            if let Some(i) = set.slot(p) {
                set.present[i] = true;
            }
        }
        set
    }

    fn slot(&self, p: Point) -> Option<usize> {
        let dx = p.x - self.min_x;
        let dy = p.y - self.min_y;
        if dx < 0 || dy < 0 || dx as usize >= self.width || dy as usize >= self.height {
            return None;
        }
        Some(dy as usize * self.width + dx as usize)
    }

    fn contains(&self, p: Point) -> bool {
        self.slot(p).is_some_and(|i| self.present[i])
    }

    /// Remove `p`, returning whether it was present.
    fn remove(&mut self, p: Point) -> bool {
        match self.slot(p) {
            Some(i) if self.present[i] => {
                self.present[i] = false;
                true
            }
            _ => false,
        }
    }
}

/// Chain points into disjoint paths.
///
/// Seeds are taken in the order of `points`; each path grows by the
/// first [`CHAIN_OFFSETS`] step landing on a point not yet used.
pub fn chain_paths(points: &[Point]) -> Vec<Outline> {
    let mut remaining = PointSet::new(points);
    let mut paths = Vec::new();

    for &seed in points {
        if !remaining.remove(seed) {
            continue;
        }
        let mut path = vec![seed];
        let mut current = seed;
        while let Some(next) = CHAIN_OFFSETS
            .iter()
            .map(|&d| current.offset(d))
            .find(|&p| remaining.contains(p))
        {
            remaining.remove(next);
            path.push(next);
            current = next;
        }
        paths.push(Outline::new(path));
    }

    paths
}

/// Keep the longest path and, if long enough, the runner-up.
///
/// Ties on length go to the earlier path. The runner-up is kept when
/// its length exceeds a tenth of the longest.
pub fn select_outlines(mut paths: Vec<Outline>) -> Vec<Outline> {
    let Some(first) = longest_index(&paths) else {
        return Vec::new();
    };
    let longest = paths.remove(first);
    let mut kept = Vec::with_capacity(2);

    if let Some(second) = longest_index(&paths)
        && paths[second].len() * 10 > longest.len()
    {
        let runner_up = paths.swap_remove(second);
        kept.push(longest);
        kept.push(runner_up);
    } else {
        kept.push(longest);
    }
    kept
}

fn longest_index(paths: &[Outline]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, path) in paths.iter().enumerate() {
        if best.is_none_or(|b| path.len() > paths[b].len()) {
            best = Some(i);
        }
    }
    best
}

/// Trace the one or two dominant outlines of a binarized glyph.
///
/// The glyph is expected to already be normalized to
/// [`NORMALIZED_SIZE`] square; any size is accepted.
///
/// # Errors
///
/// Returns [`RegionError::NoContent`] if the glyph has no black pixels.
pub fn extract_outlines(grid: &PixelGrid) -> RegionResult<Vec<Outline>> {
    let points = boundary_points(grid);
    if points.is_empty() {
        return Err(RegionError::NoContent);
    }
    let paths = chain_paths(&points);
    let total = paths.len();
    let kept = select_outlines(paths);
    trace!(
        boundary = points.len(),
        paths = total,
        kept = kept.len(),
        "traced outlines"
    );
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphscan_core::Rgb;

    fn solid(width: u32, height: u32) -> PixelGrid {
        PixelGrid::new(width, height, Rgb::BLACK).unwrap()
    }

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_offset_table_is_unique_and_bounded() {
        let unique: HashSet<_> = CHAIN_OFFSETS.iter().collect();
        assert_eq!(unique.len(), CHAIN_OFFSETS.len());
        assert!(!CHAIN_OFFSETS.contains(&(0, 0)));
        assert!(!CHAIN_OFFSETS.contains(&(-1, 3)));
        assert!(!CHAIN_OFFSETS.contains(&(-2, 3)));
        for (dx, dy) in CHAIN_OFFSETS {
            assert!(dx.abs() <= 3 && dy.abs() <= 3);
        }
    }

    #[test]
    fn test_boundary_of_solid_square() {
        let points = boundary_points(&solid(3, 3));
        assert_eq!(points.len(), 8);
        assert_eq!(points[0], Point::new(1, 1));
        assert!(!points.contains(&Point::new(2, 2)));
    }

    #[test]
    fn test_boundary_ignores_ne_and_sw() {
        // Center pixel's only white neighbors are NE and SW
        let mut grid = solid(3, 3);
        grid.set_pixel(2, 0, Rgb::WHITE).unwrap();
        grid.set_pixel(0, 2, Rgb::WHITE).unwrap();
        let points = boundary_points(&grid);
        assert!(!points.contains(&Point::new(2, 2)));

        // A white NW neighbor does expose it
        let mut grid = solid(3, 3);
        grid.set_pixel(0, 0, Rgb::WHITE).unwrap();
        assert!(boundary_points(&grid).contains(&Point::new(2, 2)));
    }

    #[test]
    fn test_chain_order_around_square() {
        let paths = chain_paths(&boundary_points(&solid(3, 3)));
        assert_eq!(paths.len(), 1);
        assert_eq!(
            paths[0].points(),
            pts(&[
                (1, 1),
                (1, 2),
                (1, 3),
                (2, 3),
                (3, 3),
                (3, 2),
                (3, 1),
                (2, 1)
            ])
            .as_slice()
        );
    }

    #[test]
    fn test_chain_jumps_up_to_three() {
        let paths = chain_paths(&pts(&[(0, 0), (0, 3), (3, 6), (10, 10)]));
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].len(), 3);
        assert_eq!(paths[1].points(), pts(&[(10, 10)]).as_slice());
    }

    #[test]
    fn test_chain_skips_missing_offsets() {
        // (-1, 3) is not in the table, so these never join
        let paths = chain_paths(&pts(&[(5, 0), (4, 3)]));
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_select_outlines() {
        let path = |n: usize| Outline::new(vec![Point::default(); n]);

        let kept = select_outlines(vec![path(5), path(100), path(11), path(11)]);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].len(), 100);
        assert_eq!(kept[1].len(), 11);

        // exactly a tenth is not enough
        let kept = select_outlines(vec![path(100), path(10)]);
        assert_eq!(kept.len(), 1);

        assert!(select_outlines(Vec::new()).is_empty());
    }

    #[test]
    fn test_select_ties_prefer_earlier() {
        let a = Outline::new(pts(&[(0, 0), (0, 1)]));
        let b = Outline::new(pts(&[(9, 9), (9, 8)]));
        let kept = select_outlines(vec![a.clone(), b.clone()]);
        assert_eq!(kept, vec![a, b]);
    }

    #[test]
    fn test_extract_outlines_empty_glyph() {
        let blank = PixelGrid::new(4, 4, Rgb::WHITE).unwrap();
        assert!(matches!(
            extract_outlines(&blank),
            Err(RegionError::NoContent)
        ));
    }

    #[test]
    fn test_sample() {
        let outline = Outline::new((0..11).map(|i| Point::new(i, 0)).collect());
        // apportion(10, 3) = [0, 3, 6, 10]
        assert_eq!(outline.sample(3), pts(&[(0, 0), (3, 0), (6, 0), (10, 0)]));
        assert_eq!(outline.sample(0), pts(&[(0, 0)]));
        // more samples than points: repeated indices are dropped
        assert_eq!(outline.sample(40).len(), 11);
    }

    #[test]
    fn test_sample_dedupes_by_value() {
        let outline = Outline::new(pts(&[(0, 0), (1, 0), (0, 0), (2, 0)]));
        assert_eq!(outline.sample(3), pts(&[(0, 0), (1, 0), (2, 0)]));
    }

    #[test]
    fn test_sample_count() {
        let path = |n: usize| Outline::new(vec![Point::default(); n]);
        assert_eq!(sample_count(&[path(500), path(300)]), 200);
        assert_eq!(sample_count(&[path(500), path(120)]), 119);
        assert_eq!(sample_count(&[path(200)]), 200);
        assert_eq!(sample_count(&[path(199)]), 198);
        assert_eq!(sample_count(&[]), 200);
    }

    #[test]
    fn test_point_distance() {
        assert_eq!(Point::new(0, 0).distance(Point::new(3, 4)), 5.0);
    }
}
