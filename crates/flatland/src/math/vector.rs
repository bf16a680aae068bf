use super::{num::wrap_angle, FloatNum};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{
    fmt::Display,
    ops::{Add, AddAssign, BitXor, Div, DivAssign, Mul, MulAssign, Neg, Not, Sub, SubAssign},
};

/// 2d vector, used both for points and directions.
///
/// Every method returns a new value; in place updates go through the
/// `*Assign` operators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub(crate) x: FloatNum,
    pub(crate) y: FloatNum,
}

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0., 0.);

    #[inline]
    pub const fn new(x: FloatNum, y: FloatNum) -> Self {
        Self { x, y }
    }

    /// unit vector pointing at `rad`
    #[inline]
    pub fn from_angle(rad: FloatNum) -> Self {
        Self::new(rad.cos(), rad.sin())
    }

    /// both components sampled uniformly in [-1, 1]
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    pub fn random_with(rng: &mut impl Rng) -> Self {
        Self::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0))
    }

    #[inline]
    pub fn x(&self) -> FloatNum {
        self.x
    }

    #[inline]
    pub fn set_x(&mut self, reducer: impl FnOnce(FloatNum) -> FloatNum) {
        self.x = reducer(self.x);
    }

    #[inline]
    pub fn y(&self) -> FloatNum {
        self.y
    }

    #[inline]
    pub fn set_y(&mut self, reducer: impl FnOnce(FloatNum) -> FloatNum) {
        self.y = reducer(self.y);
    }

    #[inline]
    pub fn set(&mut self, x: FloatNum, y: FloatNum) {
        self.x = x;
        self.y = y;
    }

    #[inline]
    pub fn to_array(&self) -> [FloatNum; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn dot(&self, other: &Vector) -> FloatNum {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3d cross product
    #[inline]
    pub fn cross(&self, other: &Vector) -> FloatNum {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn mag(&self) -> FloatNum {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn mag_squared(&self) -> FloatNum {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn dist(&self, other: &Vector) -> FloatNum {
        (*other - *self).mag()
    }

    /// zero vector stays zero
    pub fn normalize(&self) -> Vector {
        let mag = self.mag();
        if mag == 0. {
            return Vector::ZERO;
        }
        *self * mag.recip()
    }

    pub fn set_mag(&self, target: FloatNum) -> Vector {
        self.normalize() * target
    }

    pub fn limit(&self, max: FloatNum) -> Vector {
        if self.mag_squared() > max * max {
            self.set_mag(max)
        } else {
            *self
        }
    }

    /// clockwise rotation by `rad`
    #[inline]
    pub fn rotate(&self, rad: FloatNum) -> Vector {
        let (s, c) = rad.sin_cos();
        Vector::new(self.x * c + self.y * s, self.y * c - self.x * s)
    }

    #[inline]
    pub fn rotate_self(&mut self, rad: FloatNum) {
        *self = self.rotate(rad);
    }

    #[inline]
    pub fn heading(&self) -> FloatNum {
        self.y.atan2(self.x)
    }

    /// signed angle from `self` to `other`, in (-π, π]
    #[inline]
    pub fn angle_between(&self, other: &Vector) -> FloatNum {
        wrap_angle(other.heading() - self.heading())
    }

    #[inline]
    pub fn perpendicular(&self) -> Vector {
        Vector::new(-self.y, self.x)
    }

    #[inline]
    pub fn normal(&self) -> Vector {
        self.perpendicular().normalize()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0. && self.y == 0.
    }

    #[inline]
    pub fn set_zero(&mut self) {
        self.x = 0.;
        self.y = 0.;
    }

    pub fn is_close(&self, other: &Vector, tolerance: FloatNum) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl From<(FloatNum, FloatNum)> for Vector {
    fn from((x, y): (FloatNum, FloatNum)) -> Self {
        Self { x, y }
    }
}

impl From<[FloatNum; 2]> for Vector {
    fn from([x, y]: [FloatNum; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vector> for (FloatNum, FloatNum) {
    fn from(value: Vector) -> Self {
        (value.x, value.y)
    }
}

macro_rules! impl_vector_ops {
    ($($rhs:ty),*) => {
        $(
            impl Add<$rhs> for Vector {
                type Output = Vector;
                fn add(self, rhs: $rhs) -> Self::Output {
                    Vector::new(self.x + rhs.x, self.y + rhs.y)
                }
            }

            impl AddAssign<$rhs> for Vector {
                fn add_assign(&mut self, rhs: $rhs) {
                    self.x += rhs.x;
                    self.y += rhs.y;
                }
            }

            impl Sub<$rhs> for Vector {
                type Output = Vector;
                fn sub(self, rhs: $rhs) -> Self::Output {
                    Vector::new(self.x - rhs.x, self.y - rhs.y)
                }
            }

            impl SubAssign<$rhs> for Vector {
                fn sub_assign(&mut self, rhs: $rhs) {
                    self.x -= rhs.x;
                    self.y -= rhs.y;
                }
            }

            // dot product
            impl Mul<$rhs> for Vector {
                type Output = FloatNum;
                fn mul(self, rhs: $rhs) -> Self::Output {
                    self.dot(&rhs)
                }
            }

            // cross product
            impl BitXor<$rhs> for Vector {
                type Output = FloatNum;
                fn bitxor(self, rhs: $rhs) -> Self::Output {
                    self.cross(&rhs)
                }
            }
        )*
    };
}

impl_vector_ops![Vector, &Vector];

impl Mul<FloatNum> for Vector {
    type Output = Vector;
    fn mul(self, rhs: FloatNum) -> Self::Output {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<FloatNum> for Vector {
    fn mul_assign(&mut self, rhs: FloatNum) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

// dividing by zero yields the zero vector
impl Div<FloatNum> for Vector {
    type Output = Vector;
    fn div(self, rhs: FloatNum) -> Self::Output {
        if rhs == 0. {
            return Vector::ZERO;
        }
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

impl DivAssign<FloatNum> for Vector {
    fn div_assign(&mut self, rhs: FloatNum) {
        *self = *self / rhs;
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Self::Output {
        Vector::new(-self.x, -self.y)
    }
}

impl Not for Vector {
    type Output = Vector;
    fn not(self) -> Self::Output {
        self.perpendicular()
    }
}
