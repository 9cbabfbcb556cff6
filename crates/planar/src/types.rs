//! Value types shared by the predicates and batch drivers.
//!
//! - `Segment`, `IndexSegment`: a segment by value or by vertex-pool indices.
//! - `CrossingPair`: positions `(i, j)`, `i < j`, of two crossing segments.
//! - `Polygon`, `PolygonSet`: owned contiguous vertex buffers with accessors.
//! - `BBox`: axis-aligned box with overlap, containment and corner queries.
//! - `BatchCfg`: batch options (parallel threshold).
//! - `GeomError`: contract violations surfaced to callers.

use std::fmt;

use nalgebra::{Vector2, Vector3};

/// Errors surfaced by the batch drivers and polygon constructors.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// A segment references a vertex outside the pool.
    IndexOutOfRange {
        segment: usize,
        index: usize,
        len: usize,
    },
    /// A polygon needs at least 3 vertices (after dropping a closing duplicate).
    TooFewVertices { got: usize },
    /// A coordinate is NaN or infinite where a finite value is required.
    NonFinite { what: &'static str },
    /// A coordinate row has neither 2 nor 3 entries.
    RowWidth { row: usize, got: usize },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::IndexOutOfRange {
                segment,
                index,
                len,
            } => write!(
                f,
                "segment {segment} references vertex {index}, but the pool has {len} vertices"
            ),
            GeomError::TooFewVertices { got } => {
                write!(f, "polygon needs at least 3 vertices, got {got}")
            }
            GeomError::NonFinite { what } => write!(f, "non-finite coordinate in {what}"),
            GeomError::RowWidth { row, got } => write!(
                f,
                "point {row} must have 2 or 3 coordinates, got {got}"
            ),
        }
    }
}

impl std::error::Error for GeomError {}

/// Batch options.
///
/// `parallel_min` is the input size from which the rayon path is taken
/// (`usize::MAX` keeps everything serial). The output never depends on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchCfg {
    pub parallel_min: usize,
}

impl Default for BatchCfg {
    fn default() -> Self {
        Self {
            parallel_min: usize::MAX,
        }
    }
}

impl BatchCfg {
    /// Always take the parallel path.
    pub fn parallel() -> Self {
        Self { parallel_min: 0 }
    }

    /// Parallel from `n` inputs on; `None` keeps the serial default.
    pub fn parallel_from(n: Option<usize>) -> Self {
        n.map_or_else(Self::default, |parallel_min| Self { parallel_min })
    }
}

/// Finite segment between two points. Zero length is allowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
    #[inline]
    pub fn bbox(&self) -> BBox {
        BBox::from_segment(self)
    }
}

impl From<((f64, f64), (f64, f64))> for Segment {
    fn from(((ax, ay), (bx, by)): ((f64, f64), (f64, f64))) -> Self {
        Self::new(Vector2::new(ax, ay), Vector2::new(bx, by))
    }
}

/// Segment given as two indices into a shared vertex pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexSegment(pub usize, pub usize);

impl IndexSegment {
    /// Resolve against a pool; `None` if either index is out of range.
    #[inline]
    pub fn resolve(&self, pool: &[Vector2<f64>]) -> Option<Segment> {
        Some(Segment::new(*pool.get(self.0)?, *pool.get(self.1)?))
    }
}

impl From<(usize, usize)> for IndexSegment {
    fn from((a, b): (usize, usize)) -> Self {
        Self(a, b)
    }
}

impl From<[usize; 2]> for IndexSegment {
    fn from([a, b]: [usize; 2]) -> Self {
        Self(a, b)
    }
}

/// Positions of two crossing segments in the input list, `i < j`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CrossingPair {
    pub i: usize,
    pub j: usize,
}

impl CrossingPair {
    /// Build from two positions in any order.
    #[inline]
    pub fn new(p: usize, q: usize) -> Self {
        if p <= q {
            Self { i: p, j: q }
        } else {
            Self { i: q, j: p }
        }
    }
}

impl From<(usize, usize)> for CrossingPair {
    fn from((p, q): (usize, usize)) -> Self {
        Self::new(p, q)
    }
}

impl From<CrossingPair> for (usize, usize) {
    fn from(c: CrossingPair) -> Self {
        (c.i, c.j)
    }
}

/// Read access to the planar coordinates of a query point.
///
/// Implemented for 3D storage too; the third coordinate is ignored.
pub trait XY {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl<T: XY + ?Sized> XY for &T {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }
    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl XY for Vector2<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl XY for Vector3<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl XY for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl XY for [f64; 3] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl XY for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl XY for (f64, f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

/// Planar points from `(x, y)` or `(x, y, z)` rows; `z` is dropped.
///
/// Rows are checked in order and the first bad one is reported.
pub fn points_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<Vector2<f64>>, GeomError> {
    rows.iter()
        .enumerate()
        .map(|(row, r)| match r.as_ref() {
            &[x, y] | &[x, y, _] => Ok(Vector2::new(x, y)),
            other => Err(GeomError::RowWidth {
                row,
                got: other.len(),
            }),
        })
        .collect()
}

/// Axis-aligned bounding box `[min, max]`. The null box (`min > max`) contains nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl BBox {
    pub fn null() -> Self {
        Self {
            min: Vector2::new(f64::INFINITY, f64::INFINITY),
            max: Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn is_null(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn from_points(points: &[Vector2<f64>]) -> Self {
        points.iter().fold(Self::null(), |bb, p| bb.include(*p))
    }

    /// Box enclosing every box in `boxes`; null if there are none.
    pub fn from_boxes(boxes: &[BBox]) -> Self {
        boxes.iter().fold(Self::null(), |bb, other| bb.merge(other))
    }

    #[inline]
    pub fn from_segment(s: &Segment) -> Self {
        Self {
            min: s.a.inf(&s.b),
            max: s.a.sup(&s.b),
        }
    }

    #[inline]
    fn include(self, p: Vector2<f64>) -> Self {
        Self {
            min: self.min.inf(&p),
            max: self.max.sup(&p),
        }
    }

    /// Smallest box containing both. Null boxes are absorbed.
    pub fn merge(&self, other: &BBox) -> BBox {
        if self.is_null() {
            return *other;
        }
        if other.is_null() {
            return *self;
        }
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Touching boxes overlap.
    #[inline]
    pub fn overlaps(&self, other: &BBox) -> bool {
        self.max.x >= other.min.x
            && self.min.x <= other.max.x
            && self.max.y >= other.min.y
            && self.min.y <= other.max.y
    }

    /// `other` lies entirely within `self`, touching the border allowed.
    /// Null boxes are never inside, and nothing is inside a null box.
    pub fn inside(&self, other: &BBox) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        other.min.x >= self.min.x
            && other.max.x <= self.max.x
            && other.min.y >= self.min.y
            && other.max.y <= self.max.y
    }

    /// Inclusive of the border.
    #[inline]
    pub fn point_inside<P: XY>(&self, p: P) -> bool {
        let (x, y) = (p.x(), p.y());
        x >= self.min.x && x <= self.max.x && y >= self.min.y && y <= self.max.y
    }

    /// Corners, clockwise from `(left, bottom)`; the first is not repeated.
    pub fn as_poly(&self) -> [Vector2<f64>; 4] {
        [
            self.min,
            Vector2::new(self.min.x, self.max.y),
            self.max,
            Vector2::new(self.max.x, self.min.y),
        ]
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.min.x
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.max.x
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.min.y
    }
    #[inline]
    pub fn top(&self) -> f64 {
        self.max.y
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.min + self.max) / 2.0
    }
}

/// Simple polygon as an owned vertex buffer; the closing edge is implicit.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    verts: Vec<Vector2<f64>>,
}

impl Polygon {
    /// Validates finiteness and size. An explicit copy of the first vertex at
    /// the end is dropped so the closing edge is not stored twice.
    pub fn new(mut verts: Vec<Vector2<f64>>) -> Result<Self, GeomError> {
        if verts.iter().any(|v| !(v.x.is_finite() && v.y.is_finite())) {
            return Err(GeomError::NonFinite {
                what: "polygon vertex",
            });
        }
        if verts.len() > 1 && verts.first() == verts.last() {
            verts.pop();
        }
        if verts.len() < 3 {
            return Err(GeomError::TooFewVertices { got: verts.len() });
        }
        Ok(Self { verts })
    }

    pub fn from_xy<P: XY>(points: &[P]) -> Result<Self, GeomError> {
        Self::new(points.iter().map(|p| Vector2::new(p.x(), p.y())).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Always false for a constructed polygon; kept for clippy's `len_without_is_empty`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Edges `(p_k, p_{k+1 mod N})`, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.verts.len();
        (0..n).map(move |k| Segment::new(self.verts[k], self.verts[(k + 1) % n]))
    }

    pub fn bbox(&self) -> BBox {
        BBox::from_points(&self.verts)
    }

    /// Boundary-inclusive containment.
    #[inline]
    pub fn contains<P: XY>(&self, p: P) -> bool {
        crate::containment::crossings_unchecked(&self.verts, p.x(), p.y())
    }

    pub fn into_vertices(self) -> Vec<Vector2<f64>> {
        self.verts
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon with {} points.", self.verts.len())
    }
}

/// Many polygons in one contiguous point buffer, indexed by offsets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonSet {
    points: Vec<Vector2<f64>>,
    // offsets[k]..offsets[k+1] is polygon k
    offsets: Vec<usize>,
}

impl PolygonSet {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            offsets: vec![0],
        }
    }

    pub fn push(&mut self, poly: &Polygon) {
        if self.offsets.is_empty() {
            self.offsets.push(0);
        }
        self.points.extend_from_slice(poly.vertices());
        self.offsets.push(self.points.len());
    }

    pub fn len(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, k: usize) -> Option<&[Vector2<f64>]> {
        let lo = *self.offsets.get(k)?;
        let hi = *self.offsets.get(k + 1)?;
        Some(&self.points[lo..hi])
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Vector2<f64>]> + '_ {
        self.offsets
            .windows(2)
            .map(move |w| &self.points[w[0]..w[1]])
    }

    pub fn total_points(&self) -> usize {
        self.points.len()
    }

    pub fn bbox(&self) -> BBox {
        BBox::from_points(&self.points)
    }

    /// Map every stored point through `f` in place; offsets are unchanged.
    pub fn transform<F>(&mut self, mut f: F)
    where
        F: FnMut(Vector2<f64>) -> Vector2<f64>,
    {
        for p in &mut self.points {
            *p = f(*p);
        }
    }

    /// Boundary-inclusive: true if any member contains `p`.
    pub fn contains_any<P: XY>(&self, p: P) -> bool {
        let (x, y) = (p.x(), p.y());
        self.iter()
            .any(|verts| crate::containment::crossings_unchecked(verts, x, y))
    }
}
