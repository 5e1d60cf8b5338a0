use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Quat;

/// Named components of a [`Quat`], in memory order.
#[repr(C)]
pub struct XYZW {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    _priv: (), // prevent external construction
}

impl Deref for Quat {
    type Target = XYZW;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // SAFETY: `Quat` is a transparent wrapper around 4 consecutive `f32`s.
        unsafe { mem::transmute(self) }
    }
}

impl DerefMut for Quat {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: see above.
        unsafe { mem::transmute(self) }
    }
}
