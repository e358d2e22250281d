use crate::core::traits::Real;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D vector (or point) with `x` and `y` components.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2(scale_factor * self.x, scale_factor * self.y)
    }

    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular dot product (`self.x * other.y - self.y * other.x`), the z component of the
    /// 3D cross product.
    #[inline]
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(&self, other: Self) -> T {
        (*self - other).length()
    }

    /// Normalize the vector (length = 1).
    ///
    /// A zero vector has no direction, normalizing it produces NaN components. Callers that may
    /// hold a zero vector must check [Vector2::length] first.
    #[inline]
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.length())
    }

    /// Signed angle in radians rotating `self` onto `other`, in the range `[-PI, PI]`.
    ///
    /// Use [normalize_radians](super::normalize_radians) when a positive turn magnitude in
    /// `[0, 2PI)` is required.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::core::math::*;
    /// # use polygon2d::core::traits::*;
    /// let x_axis = Vector2::new(1.0, 0.0);
    /// assert!(x_axis.angle_to(Vector2::new(0.0, 2.0)).fuzzy_eq(std::f64::consts::FRAC_PI_2));
    /// assert!(x_axis.angle_to(Vector2::new(0.0, -2.0)).fuzzy_eq(-std::f64::consts::FRAC_PI_2));
    /// ```
    #[inline]
    pub fn angle_to(&self, other: Self) -> T {
        T::atan2(self.perp_dot(other), self.dot(other))
    }

    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// Perpendicular vector (rotated counter clockwise by 90 degrees).
    #[inline]
    pub fn perp(&self) -> Self {
        vec2(-self.y, self.x)
    }

    #[inline]
    pub fn unit_perp(&self) -> Self {
        self.perp().normalize()
    }

    /// Rotate about the origin by `angle` radians (counter clockwise for positive angles).
    #[inline]
    pub fn rotate(&self, angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        vec2(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Rotate this point around an `origin` point by some `angle` in radians.
    #[inline]
    pub fn rotate_about(&self, origin: Self, angle: T) -> Self {
        (self - origin).rotate(angle) + origin
    }
}

#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

impl<T> From<[T; 2]> for Vector2<T>
where
    T: Real,
{
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Vector2::new(x, y)
    }
}

impl<T> From<(T, T)> for Vector2<T>
where
    T: Real,
{
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Vector2::new(x, y)
    }
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'a, 'b, T: Real> ops::$op_trait<&'b Vector2<T>> for &'a Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: &'b Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl<T: Real> ops::Mul<T> for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Real> ops::Neg for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl<T: Real> ops::Neg for &Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;
    use std::f64::consts::{FRAC_PI_2, PI};

    macro_rules! test_binary_op {
        ($v1:ident, $v2:ident, $op:tt, $expected:expr) => {
            assert!(($v1 $op $v2).fuzzy_eq($expected));
            assert!((&$v1 $op $v2).fuzzy_eq($expected));
            assert!(($v1 $op &$v2).fuzzy_eq($expected));
            assert!((&$v1 $op &$v2).fuzzy_eq($expected));
        };
    }

    #[test]
    fn ops() {
        let v1 = vec2(4.0, 5.0);
        let v2 = vec2(1.0, 2.0);
        test_binary_op!(v1, v2, +, vec2(5.0, 7.0));
        test_binary_op!(v1, v2, -, vec2(3.0, 3.0));
        assert!((v1 * 2.0).fuzzy_eq(vec2(8.0, 10.0)));
        assert!((-v1).fuzzy_eq(vec2(-4.0, -5.0)));
    }

    #[test]
    fn products() {
        let v1 = vec2(1.0, 0.0);
        let v2 = vec2(0.0, 1.0);
        assert_fuzzy_eq!(v1.dot(v2), 0.0);
        assert_fuzzy_eq!(v1.perp_dot(v2), 1.0);
        assert_fuzzy_eq!(v2.perp_dot(v1), -1.0);
        assert_fuzzy_eq!(vec2(3.0, 4.0).length(), 5.0);
        assert_fuzzy_eq!(vec2(3.0, 4.0).distance(vec2(0.0, 0.0)), 5.0);
        assert!(vec2(3.0, 4.0).normalize().fuzzy_eq(vec2(0.6, 0.8)));
    }

    #[test]
    fn angles_and_rotation() {
        let v = vec2(1.0, 0.0);
        assert_fuzzy_eq!(v.angle_to(vec2(-1.0f64, 0.0)).abs(), PI);
        assert_fuzzy_eq!(v.angle_to(vec2(1.0, 1.0)), PI / 4.0);
        assert!(v.rotate(FRAC_PI_2).fuzzy_eq(vec2(0.0, 1.0)));
        assert!(
            vec2(2.0, 1.0)
                .rotate_about(vec2(1.0, 1.0), PI)
                .fuzzy_eq(vec2(0.0, 1.0))
        );
    }

    #[test]
    fn conversions() {
        let a: Vector2 = [1.0, 2.0].into();
        let b: Vector2 = (1.0, 2.0).into();
        assert_eq!(a, b);
    }
}
