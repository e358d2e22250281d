use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Real number type the polygon algorithms are generic over (implemented for `f32` and `f64`).
///
/// `IndexableNum` is required so edge bounding boxes can be loaded into a
/// [StaticAABB2DIndex](static_aabb2d_index::StaticAABB2DIndex).
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    #[inline]
    fn pi() -> Self {
        Self::from(std::f64::consts::PI).unwrap()
    }

    #[inline]
    fn tau() -> Self {
        Self::from(std::f64::consts::TAU).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Round to `digits` decimal places, e.g. `round_to(1.23456, 4) == 1.2346`.
    #[inline]
    fn round_to(self, digits: i32) -> Self {
        let factor = Self::from(10.0f64.powi(digits)).unwrap();
        (self * factor).round() / factor
    }
}

impl Real for f32 {
    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f32::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f64::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }
}
