//! Axis-aligned rectangles and boxes.
//!
//! Each shape comes in two flavors: defined by its minimum and maximum corner ([`Quad`] and
//! [`BoundingBox`]), or by its minimum corner and its size ([`Rect`] and [`Cuboid`]). They convert
//! into each other with [`From`].
//!
//! Shapes are allowed to have a size of 0 along any axis. Shapes with a negative size are empty:
//! they contain no points, and [`Quad::intersection`] never produces one.

use std::fmt;

use crate::{approx::ApproxEq, Vec2, Vec3, Vector};

/// An axis-aligned rectangle defined by its minimum and maximum corner.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Quad {
    pub min: Vec2,
    pub max: Vec2,
}

/// An axis-aligned rectangle defined by its minimum corner and its size.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

/// An axis-aligned box defined by its minimum and maximum corner.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

/// An axis-aligned box defined by its minimum corner and its size.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Cuboid {
    pub position: Vec3,
    pub size: Vec3,
}

/// Returns `true` if every element of `a` is less than or equal to the matching element of `b`.
fn all_le<const N: usize>(a: Vector<N>, b: Vector<N>) -> bool {
    a.as_slice().iter().zip(b.as_slice()).all(|(a, b)| a <= b)
}

macro_rules! min_max_shape {
    ($name:ident, $vec:ty) => {
        impl $name {
            /// Creates a shape spanning from `min` to `max`.
            #[inline]
            pub fn new(min: $vec, max: $vec) -> Self {
                Self { min, max }
            }

            /// Computes the smallest shape containing all `points`.
            ///
            /// Returns [`None`] if `points` is empty.
            pub fn bounding<I: IntoIterator<Item = $vec>>(points: I) -> Option<Self> {
                let mut iter = points.into_iter();

                let first = iter.next()?;
                let (mut min, mut max) = (first, first);
                for pt in iter {
                    min = min.min(pt);
                    max = max.max(pt);
                }

                Some(Self { min, max })
            }

            #[inline]
            pub fn size(&self) -> $vec {
                self.max - self.min
            }

            #[inline]
            pub fn center(&self) -> $vec {
                (self.min + self.max) * 0.5
            }

            /// Returns `true` if `point` lies inside of `self` or on its border.
            pub fn contains_point(&self, point: $vec) -> bool {
                all_le(self.min, point) && all_le(point, self.max)
            }

            /// Computes the smallest shape containing both `self` and `other`.
            #[must_use]
            pub fn union(&self, other: &Self) -> Self {
                Self {
                    min: self.min.min(other.min),
                    max: self.max.max(other.max),
                }
            }

            /// Computes the intersection of `self` and `other`.
            ///
            /// Returns [`None`] when the shapes do not overlap. Shapes that only touch along their
            /// border intersect in a shape with a size of 0 along at least one axis.
            pub fn intersection(&self, other: &Self) -> Option<Self> {
                let min = self.min.max(other.min);
                let max = self.max.min(other.max);
                if !all_le(min, max) {
                    return None;
                }

                Some(Self { min, max })
            }
        }

        impl ApproxEq for $name {
            fn abs_diff_eq(&self, other: &Self, abs_tolerance: f32) -> bool {
                self.min.abs_diff_eq(&other.min, abs_tolerance)
                    && self.max.abs_diff_eq(&other.max, abs_tolerance)
            }

            fn rel_diff_eq(&self, other: &Self, rel_tolerance: f32) -> bool {
                self.min.rel_diff_eq(&other.min, rel_tolerance)
                    && self.max.rel_diff_eq(&other.max, rel_tolerance)
            }

            fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
                self.min.ulps_diff_eq(&other.min, ulps_tolerance)
                    && self.max.ulps_diff_eq(&other.max, ulps_tolerance)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?} - {:?})", stringify!($name), self.min, self.max)
            }
        }
    };
}

macro_rules! position_size_shape {
    ($name:ident, $min_max:ident, $vec:ty) => {
        impl $name {
            /// Creates a shape at `position` (its minimum corner) extending by `size`.
            #[inline]
            pub fn new(position: $vec, size: $vec) -> Self {
                Self { position, size }
            }

            /// Returns the minimum corner (the same as `position`).
            #[inline]
            pub fn min(&self) -> $vec {
                self.position
            }

            /// Returns the maximum corner.
            #[inline]
            pub fn max(&self) -> $vec {
                self.position + self.size
            }

            #[inline]
            pub fn center(&self) -> $vec {
                self.position + self.size * 0.5
            }

            /// Returns `true` if `point` lies inside of `self` or on its border.
            pub fn contains_point(&self, point: $vec) -> bool {
                $min_max::from(*self).contains_point(point)
            }
        }

        impl From<$min_max> for $name {
            fn from(shape: $min_max) -> Self {
                Self {
                    position: shape.min,
                    size: shape.size(),
                }
            }
        }

        impl From<$name> for $min_max {
            fn from(shape: $name) -> Self {
                Self {
                    min: shape.min(),
                    max: shape.max(),
                }
            }
        }

        impl ApproxEq for $name {
            fn abs_diff_eq(&self, other: &Self, abs_tolerance: f32) -> bool {
                self.position.abs_diff_eq(&other.position, abs_tolerance)
                    && self.size.abs_diff_eq(&other.size, abs_tolerance)
            }

            fn rel_diff_eq(&self, other: &Self, rel_tolerance: f32) -> bool {
                self.position.rel_diff_eq(&other.position, rel_tolerance)
                    && self.size.rel_diff_eq(&other.size, rel_tolerance)
            }

            fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
                self.position.ulps_diff_eq(&other.position, ulps_tolerance)
                    && self.size.ulps_diff_eq(&other.size, ulps_tolerance)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "{}({:?} + {:?})",
                    stringify!($name),
                    self.position,
                    self.size
                )
            }
        }
    };
}

min_max_shape!(Quad, Vec2);
min_max_shape!(BoundingBox, Vec3);
position_size_shape!(Rect, Quad, Vec2);
position_size_shape!(Cuboid, BoundingBox, Vec3);

impl Quad {
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Returns the area covered by `self`.
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }
}

impl Rect {
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.w
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.h
    }

    /// Returns the area covered by `self`.
    pub fn area(&self) -> f32 {
        self.size.w * self.size.h
    }
}

impl BoundingBox {
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.max.z - self.min.z
    }

    /// Returns the volume enclosed by `self`.
    pub fn volume(&self) -> f32 {
        self.width() * self.height() * self.depth()
    }
}

impl Cuboid {
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.size.z
    }

    /// Returns the volume enclosed by `self`.
    pub fn volume(&self) -> f32 {
        self.size.x * self.size.y * self.size.z
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, assert_approx_ne, vec2, vec3};

    use super::*;

    #[test]
    fn quad_accessors() {
        let q = Quad::new(vec2(-1.0, 2.0), vec2(3.0, 8.0));
        assert_eq!(q.size(), vec2(4.0, 6.0));
        assert_eq!((q.width(), q.height()), (4.0, 6.0));
        assert_eq!(q.center(), vec2(1.0, 5.0));
        assert_eq!(q.area(), 24.0);
    }

    #[test]
    fn rect_accessors() {
        let r = Rect::new(vec2(10.0, 20.0), vec2(30.0, 40.0));
        assert_eq!(r.min(), vec2(10.0, 20.0));
        assert_eq!(r.max(), vec2(40.0, 60.0));
        assert_eq!(r.center(), vec2(25.0, 40.0));
        assert_eq!((r.width(), r.height(), r.area()), (30.0, 40.0, 1200.0));
    }

    #[test]
    fn conversions() {
        let r = Rect::new(vec2(1.0, 2.0), vec2(3.0, 4.0));
        let q = Quad::from(r);
        assert_eq!(q, Quad::new(vec2(1.0, 2.0), vec2(4.0, 6.0)));
        assert_eq!(Rect::from(q), r);

        let c = Cuboid::new(Vec3::ZERO, vec3(1.0, 2.0, 3.0));
        let b = BoundingBox::from(c);
        assert_eq!(b.max, vec3(1.0, 2.0, 3.0));
        assert_eq!(Cuboid::from(b), c);
        assert_eq!((c.depth(), b.depth()), (3.0, 3.0));
        assert_eq!((c.volume(), b.volume()), (6.0, 6.0));
    }

    #[test]
    fn bounding() {
        assert_eq!(Quad::bounding([]), None);
        assert_eq!(
            Quad::bounding([vec2(1.0, 1.0)]),
            Some(Quad::new(vec2(1.0, 1.0), vec2(1.0, 1.0)))
        );
        assert_eq!(
            Quad::bounding([vec2(1.0, -1.0), vec2(-2.0, 5.0), vec2(0.0, 0.0)]),
            Some(Quad::new(vec2(-2.0, -1.0), vec2(1.0, 5.0)))
        );
        assert_eq!(
            BoundingBox::bounding([Vec3::X, Vec3::Y, -Vec3::Z]),
            Some(BoundingBox::new(vec3(0.0, 0.0, -1.0), vec3(1.0, 1.0, 0.0)))
        );
    }

    #[test]
    fn contains_point() {
        let q = Quad::new(vec2(0.0, 0.0), vec2(2.0, 1.0));
        assert!(q.contains_point(vec2(1.0, 0.5)));
        assert!(q.contains_point(vec2(0.0, 0.0)));
        assert!(q.contains_point(vec2(2.0, 1.0)));
        assert!(!q.contains_point(vec2(2.1, 0.5)));
        assert!(!q.contains_point(vec2(1.0, -0.1)));

        let r = Rect::new(vec2(5.0, 5.0), vec2(1.0, 1.0));
        assert!(r.contains_point(vec2(5.5, 6.0)));
        assert!(!r.contains_point(vec2(4.5, 5.5)));

        let c = Cuboid::new(Vec3::ZERO, Vec3::ONE);
        assert!(c.contains_point(Vec3::ONE * 0.5));
        assert!(!c.contains_point(vec3(0.5, 0.5, 1.5)));

        let empty = Quad::new(Vec2::ONE, Vec2::ZERO);
        assert!(!empty.contains_point(vec2(0.5, 0.5)));
    }

    #[test]
    fn union_and_intersection() {
        let a = Quad::new(vec2(0.0, 0.0), vec2(2.0, 2.0));
        let b = Quad::new(vec2(1.0, 1.0), vec2(3.0, 4.0));
        assert_eq!(a.union(&b), Quad::new(vec2(0.0, 0.0), vec2(3.0, 4.0)));
        assert_eq!(
            a.intersection(&b),
            Some(Quad::new(vec2(1.0, 1.0), vec2(2.0, 2.0)))
        );
        assert_eq!(a.intersection(&b), b.intersection(&a));

        // touching edges
        let c = Quad::new(vec2(2.0, 0.0), vec2(5.0, 1.0));
        assert_eq!(
            a.intersection(&c),
            Some(Quad::new(vec2(2.0, 0.0), vec2(2.0, 1.0)))
        );

        let d = Quad::new(vec2(-5.0, -5.0), vec2(-1.0, 1.0));
        assert_eq!(a.intersection(&d), None);

        let boxes = (
            BoundingBox::new(Vec3::ZERO, Vec3::ONE),
            BoundingBox::new(Vec3::ONE * 0.5, Vec3::ONE * 2.0),
        );
        assert_eq!(
            boxes.0.intersection(&boxes.1),
            Some(BoundingBox::new(Vec3::ONE * 0.5, Vec3::ONE))
        );
    }

    #[test]
    fn approx() {
        let r = Rect::new(vec2(0.1, 0.2), vec2(0.3, 0.4));
        let round_trip = Rect::from(Quad::from(r));
        assert_approx_eq!(round_trip, r).abs(1e-6);
        assert_approx_ne!(r, Rect::new(vec2(0.1, 0.2), vec2(0.3, 0.5)));
    }

    #[test]
    fn fmt() {
        let q = Quad::new(vec2(0.0, 1.0), vec2(2.0, 3.0));
        assert_eq!(format!("{q:?}"), "Quad((0.0, 1.0) - (2.0, 3.0))");
        assert_eq!(
            format!("{:?}", Rect::from(q)),
            "Rect((0.0, 1.0) + (2.0, 2.0))"
        );
    }
}
