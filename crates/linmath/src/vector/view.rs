//! Named element access through `Deref`.
//!
//! Each view struct has the exact layout of the `[f32; N]` backing a [`Vector`], so a reference to
//! a vector can be reinterpreted as a reference to its view.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

#[repr(C)]
pub struct XY {
    pub x: f32,
    pub y: f32,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    _priv: (), // prevent external construction
}

/// Color channel names for [`Vec3`](crate::Vec3).
#[repr(C)]
pub struct RGB {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    _priv: (), // prevent external construction
}

/// Color channel names for [`Vec4`](crate::Vec4).
#[repr(C)]
pub struct RGBA {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    _priv: (), // prevent external construction
}

/// Width and height names for [`Vec2`](crate::Vec2) sizes.
#[repr(C)]
pub struct WH {
    pub w: f32,
    pub h: f32,
    _priv: (), // prevent external construction
}

macro_rules! view {
    ($from:ty => $to:ty) => {
        impl Deref for $from {
            type Target = $to;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // SAFETY: both types are `N` consecutive `f32`s with the same alignment.
                unsafe { mem::transmute(self) }
            }
        }

        impl DerefMut for $from {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                // SAFETY: see above.
                unsafe { mem::transmute(self) }
            }
        }
    };
}

view!(Vector<2> => XY);
view!(Vector<3> => XYZ);
view!(Vector<4> => XYZW);

view!(XY => WH);
view!(XYZ => RGB);
view!(XYZW => RGBA);
