use super::{Point3, Vector3, TOLERANCE};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Computes the bounding box of a point set. Returns `None` when empty.
    #[must_use]
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| {
            (
                Point3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                Point3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
            )
        });
        Some(Self { min, max })
    }

    /// Largest side length of the box.
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        let d = self.max - self.min;
        d.x.max(d.y).max(d.z)
    }

    /// Grows the box by `fraction` of its largest extent on every axis.
    ///
    /// Flat boxes (a planar face) gain thickness along their zero-extent axis,
    /// so coplanar points test as inside.
    #[must_use]
    pub fn expanded(&self, fraction: f64) -> Self {
        let margin = self.max_extent() * fraction;
        let m = Vector3::new(margin, margin, margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }

    /// Returns `true` if the point lies inside or on the box.
    #[must_use]
    pub fn contains(&self, p: &Point3) -> bool {
        (self.min.x..=self.max.x).contains(&p.x)
            && (self.min.y..=self.max.y).contains(&p.y)
            && (self.min.z..=self.max.z).contains(&p.z)
    }
}

/// Face normal from the first three points, `(p1 - p0) × (p2 - p0)`.
///
/// Not normalized. Returns `None` for fewer than three points or when the
/// three points are collinear.
#[must_use]
pub fn face_normal(points: &[Point3]) -> Option<Vector3> {
    if points.len() < 3 {
        return None;
    }
    let n = (points[1] - points[0]).cross(&(points[2] - points[0]));
    if n.norm() < TOLERANCE {
        None
    } else {
        Some(n)
    }
}

/// Sum of the interior angles of a closed loop, each taken between the two
/// 3D edge vectors leaving the vertex.
///
/// A simple planar quad sums to `2π`; a self-intersecting one sums to less.
#[must_use]
pub fn interior_angle_sum(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    (0..n)
        .map(|i| {
            let prev = points[(i + n - 1) % n] - points[i];
            let next = points[(i + 1) % n] - points[i];
            prev.angle(&next)
        })
        .sum()
}

/// Closed-loop sum of squared edge lengths, including the wraparound edge.
#[must_use]
pub fn loop_length_squared(points: &[Point3]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| (points[(i + 1) % n] - points[i]).norm_squared())
        .sum()
}

/// Compute the area of a 3D polygon (coplanar points).
///
/// Uses the cross-product summation method projected along the polygon normal.
#[must_use]
pub fn polygon_area_3d(points: &[Point3], normal: &Vector3) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    let mut cross_sum = Vector3::new(0.0, 0.0, 0.0);
    let o = &points[0];
    for i in 1..n {
        let a = points[i] - o;
        let b = points[(i + 1) % n] - o;
        cross_sum += a.cross(&b);
    }
    0.5 * cross_sum.dot(&normal.normalize()).abs()
}
