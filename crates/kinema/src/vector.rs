//! 2D and 3D free vectors.
//!
//! [`Vec2`] and [`Vec3`] carry their dimension in the type, so their
//! operations cannot mix dimensions. [`Vector`] is the runtime-dimensioned
//! form, checked at every binary operation.

use crate::{Error, Result, Shape};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

// Operations shared by both fixed dimensions.
macro_rules! impl_vector {
    ($t:ident, $n:literal, { $($f:ident),+ }) => {
        impl $t {
            #[inline]
            pub const fn new($($f: f64),+) -> Self {
                Self { $($f),+ }
            }

            #[inline]
            pub const fn zero() -> Self {
                Self { $($f: 0.0),+ }
            }

            #[inline]
            pub const fn splat(v: f64) -> Self {
                Self { $($f: v),+ }
            }

            #[inline]
            pub fn dot(self, rhs: Self) -> f64 {
                0.0 $(+ self.$f * rhs.$f)+
            }

            /// Multiply every component by `s`.
            #[inline]
            pub fn scale(self, s: f64) -> Self {
                Self { $($f: self.$f * s),+ }
            }

            #[inline]
            pub fn magnitude_sq(self) -> f64 {
                self.dot(self)
            }

            /// Euclidean norm.
            #[inline]
            pub fn magnitude(self) -> f64 {
                self.magnitude_sq().sqrt()
            }

            /// Unit vector in the same direction. The zero vector maps to itself.
            #[inline]
            pub fn normalize(self) -> Self {
                let m = self.magnitude();
                if m == 0.0 {
                    Self::zero()
                } else {
                    self / m
                }
            }

            /// Unsigned angle to `rhs` in `[0, π]`, or 0 if either vector is zero.
            pub fn angle_between(self, rhs: Self) -> f64 {
                let denom = self.magnitude() * rhs.magnitude();
                if denom == 0.0 {
                    return 0.0;
                }
                // Rounding can push the cosine slightly past ±1.
                (self.dot(rhs) / denom).clamp(-1.0, 1.0).acos()
            }

            /// Orthogonal projection of `self` onto `onto`. Projecting onto the
            /// zero vector yields the zero vector.
            pub fn project_onto(self, onto: Self) -> Self {
                let denom = onto.dot(onto);
                if denom == 0.0 {
                    return Self::zero();
                }
                onto * (self.dot(onto) / denom)
            }

            #[inline]
            pub fn distance(self, rhs: Self) -> f64 {
                (self - rhs).magnitude()
            }

            /// `self + t * (rhs - self)`. `t` is not clamped, values outside
            /// `[0, 1]` extrapolate.
            #[inline]
            pub fn lerp(self, rhs: Self, t: f64) -> Self {
                self + (rhs - self) * t
            }

            /// True if every component pair differs by at most `epsilon`.
            #[inline]
            pub fn approx_eq(self, rhs: Self, epsilon: f64) -> bool {
                true $(&& (self.$f - rhs.$f).abs() <= epsilon)+
            }

            #[inline]
            pub fn as_array(self) -> [f64; $n] {
                [$(self.$f),+]
            }
        }

        impl From<[f64; $n]> for $t {
            #[inline]
            fn from(a: [f64; $n]) -> Self {
                let [$($f),+] = a;
                Self { $($f),+ }
            }
        }

        impl From<$t> for [f64; $n] {
            #[inline]
            fn from(v: $t) -> Self {
                v.as_array()
            }
        }

        impl Add for $t {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl Sub for $t {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl Neg for $t {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        impl Mul<f64> for $t {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: f64) -> Self {
                self.scale(rhs)
            }
        }

        // Scalar * vector (commutative)
        impl Mul<$t> for f64 {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: $t) -> $t {
                rhs.scale(self)
            }
        }

        impl Div<f64> for $t {
            type Output = Self;
            #[inline]
            fn div(self, rhs: f64) -> Self {
                Self { $($f: self.$f / rhs),+ }
            }
        }

        impl AddAssign for $t {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl MulAssign<f64> for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: f64) {
                *self = self.scale(rhs);
            }
        }
    };
}

impl_vector!(Vec2, 2, { x, y });
impl_vector!(Vec3, 3, { x, y, z });

impl Vec2 {
    #[inline]
    pub const fn x() -> Self {
        Self::new(1.0, 0.0)
    }

    #[inline]
    pub const fn y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// 2D cross product: the z component of the 3D cross product, i.e. the
    /// signed area of the parallelogram spanned by `self` and `rhs`.
    #[inline]
    pub fn cross(self, rhs: Self) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Counter-clockwise perpendicular.
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Lift into 3D with the given z.
    #[inline]
    pub fn extend(self, z: f64) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }
}

impl Vec3 {
    #[inline]
    pub const fn x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub const fn z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Right-handed cross product, `|a||b| sin θ` in magnitude.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Drop the z component.
    #[inline]
    pub fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl core::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl core::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A 2D or 3D vector whose dimension is only known at runtime.
///
/// Binary operations require both operands to have the same dimension and
/// fail with [`Error::DimensionMismatch`] otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vector {
    Two(Vec2),
    Three(Vec3),
}

impl Vector {
    /// Build from 2 or 3 components. Any other length gives `None`.
    pub fn from_slice(s: &[f64]) -> Option<Self> {
        match *s {
            [x, y] => Some(Self::Two(Vec2::new(x, y))),
            [x, y, z] => Some(Self::Three(Vec3::new(x, y, z))),
            _ => None,
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        match self {
            Self::Two(_) => 2,
            Self::Three(_) => 3,
        }
    }

    /// Shape as a column vector, used in error messages.
    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.dim(), 1)
    }

    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Self::Two(v) => v.as_array().to_vec(),
            Self::Three(v) => v.as_array().to_vec(),
        }
    }

    fn mismatch(&self, op: &'static str, rhs: &Self) -> Error {
        Error::mismatch(op, self.shape(), rhs.shape())
    }

    pub fn add(self, rhs: Self) -> Result<Self> {
        match (self, rhs) {
            (Self::Two(a), Self::Two(b)) => Ok(Self::Two(a + b)),
            (Self::Three(a), Self::Three(b)) => Ok(Self::Three(a + b)),
            _ => Err(self.mismatch("vector add", &rhs)),
        }
    }

    pub fn sub(self, rhs: Self) -> Result<Self> {
        match (self, rhs) {
            (Self::Two(a), Self::Two(b)) => Ok(Self::Two(a - b)),
            (Self::Three(a), Self::Three(b)) => Ok(Self::Three(a - b)),
            _ => Err(self.mismatch("vector subtract", &rhs)),
        }
    }

    pub fn scale(self, s: f64) -> Self {
        match self {
            Self::Two(v) => Self::Two(v.scale(s)),
            Self::Three(v) => Self::Three(v.scale(s)),
        }
    }

    pub fn magnitude(self) -> f64 {
        match self {
            Self::Two(v) => v.magnitude(),
            Self::Three(v) => v.magnitude(),
        }
    }

    pub fn normalize(self) -> Self {
        match self {
            Self::Two(v) => Self::Two(v.normalize()),
            Self::Three(v) => Self::Three(v.normalize()),
        }
    }

    pub fn dot(self, rhs: Self) -> Result<f64> {
        match (self, rhs) {
            (Self::Two(a), Self::Two(b)) => Ok(a.dot(b)),
            (Self::Three(a), Self::Three(b)) => Ok(a.dot(b)),
            _ => Err(self.mismatch("dot", &rhs)),
        }
    }

    /// Cross product, defined for 3D operands only.
    pub fn cross(self, rhs: Self) -> Result<Vec3> {
        match (self, rhs) {
            (Self::Three(a), Self::Three(b)) => Ok(a.cross(b)),
            _ => Err(self.mismatch("cross", &rhs)),
        }
    }

    pub fn angle_between(self, rhs: Self) -> Result<f64> {
        match (self, rhs) {
            (Self::Two(a), Self::Two(b)) => Ok(a.angle_between(b)),
            (Self::Three(a), Self::Three(b)) => Ok(a.angle_between(b)),
            _ => Err(self.mismatch("angle between", &rhs)),
        }
    }

    pub fn project_onto(self, onto: Self) -> Result<Self> {
        match (self, onto) {
            (Self::Two(a), Self::Two(b)) => Ok(Self::Two(a.project_onto(b))),
            (Self::Three(a), Self::Three(b)) => Ok(Self::Three(a.project_onto(b))),
            _ => Err(self.mismatch("project", &onto)),
        }
    }

    pub fn distance(self, rhs: Self) -> Result<f64> {
        match (self, rhs) {
            (Self::Two(a), Self::Two(b)) => Ok(a.distance(b)),
            (Self::Three(a), Self::Three(b)) => Ok(a.distance(b)),
            _ => Err(self.mismatch("distance", &rhs)),
        }
    }

    pub fn lerp(self, rhs: Self, t: f64) -> Result<Self> {
        match (self, rhs) {
            (Self::Two(a), Self::Two(b)) => Ok(Self::Two(a.lerp(b, t))),
            (Self::Three(a), Self::Three(b)) => Ok(Self::Three(a.lerp(b, t))),
            _ => Err(self.mismatch("lerp", &rhs)),
        }
    }

    /// Same dimension and every component within `epsilon`. Mismatched
    /// dimensions compare unequal rather than failing.
    pub fn approx_eq(&self, rhs: &Self, epsilon: f64) -> bool {
        match (self, rhs) {
            (Self::Two(a), Self::Two(b)) => a.approx_eq(*b, epsilon),
            (Self::Three(a), Self::Three(b)) => a.approx_eq(*b, epsilon),
            _ => false,
        }
    }
}

impl From<Vec2> for Vector {
    fn from(v: Vec2) -> Self {
        Self::Two(v)
    }
}

impl From<Vec3> for Vector {
    fn from(v: Vec3) -> Self {
        Self::Three(v)
    }
}

impl core::fmt::Display for Vector {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Two(v) => v.fmt(f),
            Self::Three(v) => v.fmt(f),
        }
    }
}
