pub mod polygon_3d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Key for hashing points by exact coordinate value.
///
/// Two points produce the same key iff their coordinates compare equal, with
/// `-0.0` folded onto `0.0`. Cell meshes share corner coordinates bit-for-bit,
/// so no quantization is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey {
    x: u64,
    y: u64,
    z: u64,
}

impl PointKey {
    /// Builds the key for a point.
    #[must_use]
    pub fn from_point(p: &Point3) -> Self {
        Self {
            x: coord_bits(p.x),
            y: coord_bits(p.y),
            z: coord_bits(p.z),
        }
    }
}

impl From<&Point3> for PointKey {
    fn from(p: &Point3) -> Self {
        Self::from_point(p)
    }
}

#[inline]
fn coord_bits(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}
