/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

/// A length in CSS pixels.
pub type CSSFloat = f32;

/// Unit marker for `euclid` types expressed in CSS pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CSSPixel {}

pub type CSSPixelSize = euclid::Size2D<CSSFloat, CSSPixel>;
pub type CSSPixelVector = euclid::Vector2D<CSSFloat, CSSPixel>;

/// One of the two physical axes of the page.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum PhysicalAxis {
    /// The axis along which `width` is measured.
    Horizontal,
    /// The axis along which `height` is measured.
    Vertical,
}

/// A value that may be `auto`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub enum AutoOr<T> {
    LengthPercentage(T),
    Auto,
}

pub type AuOrAuto = AutoOr<CSSFloat>;

impl<T> AutoOr<T> {
    #[inline]
    pub fn is_auto(&self) -> bool {
        matches!(self, AutoOr::Auto)
    }

    #[inline]
    pub fn non_auto(self) -> Option<T> {
        match self {
            AutoOr::LengthPercentage(value) => Some(value),
            AutoOr::Auto => None,
        }
    }

    #[inline]
    pub fn auto_is(self, f: impl FnOnce() -> T) -> T {
        match self {
            AutoOr::LengthPercentage(value) => value,
            AutoOr::Auto => f(),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AutoOr<U> {
        match self {
            AutoOr::LengthPercentage(value) => AutoOr::LengthPercentage(f(value)),
            AutoOr::Auto => AutoOr::Auto,
        }
    }
}

impl AuOrAuto {
    /// The value, with `auto` taken as zero.
    #[inline]
    pub fn auto_is_zero(self) -> CSSFloat {
        self.auto_is(|| 0.)
    }
}

impl<T> From<T> for AutoOr<T> {
    fn from(value: T) -> Self {
        AutoOr::LengthPercentage(value)
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct PhysicalSides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> PhysicalSides<T> {
    pub fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn all(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// The `(start, end)` sides along `axis`, which are left/right for the
    /// horizontal axis and top/bottom for the vertical one.
    #[inline]
    pub fn start_end(&self, axis: PhysicalAxis) -> (T, T) {
        match axis {
            PhysicalAxis::Horizontal => (self.left, self.right),
            PhysicalAxis::Vertical => (self.top, self.bottom),
        }
    }

    #[inline]
    pub fn start_end_mut(&mut self, axis: PhysicalAxis) -> (&mut T, &mut T) {
        match axis {
            PhysicalAxis::Horizontal => (&mut self.left, &mut self.right),
            PhysicalAxis::Vertical => (&mut self.top, &mut self.bottom),
        }
    }

    pub fn map<U>(&self, f: impl Fn(T) -> U) -> PhysicalSides<U> {
        PhysicalSides {
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
            left: f(self.left),
        }
    }
}

impl PhysicalSides<CSSFloat> {
    /// Sum of both sides along `axis`.
    #[inline]
    pub fn sum_along(&self, axis: PhysicalAxis) -> CSSFloat {
        let (start, end) = self.start_end(axis);
        start + end
    }
}

impl PhysicalSides<AuOrAuto> {
    #[inline]
    pub fn auto_is_zero(&self) -> PhysicalSides<CSSFloat> {
        self.map(AuOrAuto::auto_is_zero)
    }

    /// Number of `auto` sides along `axis`.
    pub fn auto_count_along(&self, axis: PhysicalAxis) -> usize {
        let (start, end) = self.start_end(axis);
        start.is_auto() as usize + end.is_auto() as usize
    }
}
