/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Geometry in flex-relative space.
//!
//! <https://drafts.csswg.org/css-flexbox/#box-model>

use crate::geom::PhysicalAxis;
use crate::style::FlexDirection;

/// Whether flex items are laid out along rows or columns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FlexAxis {
    Row,
    Column,
}

/// One of the two flex-relative axes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    Main,
    Cross,
}

impl From<FlexDirection> for FlexAxis {
    fn from(flex_direction: FlexDirection) -> Self {
        if flex_direction.is_row() {
            FlexAxis::Row
        } else {
            FlexAxis::Column
        }
    }
}

impl FlexAxis {
    /// The physical axis `axis` maps to. Only horizontal writing modes are
    /// supported, so rows run along the horizontal axis.
    pub fn physical(self, axis: Axis) -> PhysicalAxis {
        match (self, axis) {
            (FlexAxis::Row, Axis::Main) | (FlexAxis::Column, Axis::Cross) => {
                PhysicalAxis::Horizontal
            },
            (FlexAxis::Row, Axis::Cross) | (FlexAxis::Column, Axis::Main) => {
                PhysicalAxis::Vertical
            },
        }
    }
}
