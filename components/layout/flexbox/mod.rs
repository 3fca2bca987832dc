/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Flex layout, <https://drafts.csswg.org/css-flexbox/#layout-algorithm>.

use servo_arc::Arc;

use crate::error::{LayoutError, LayoutResult};
use crate::geom::{CSSFloat, PhysicalAxis};
use crate::layout_box::LayoutBox;
use crate::style::{
    AlignContent, AlignItems, ComputedValues, Direction, FlexWrap, JustifyContent,
};

mod align;
mod flexible_lengths;
mod geom;
mod layout;
mod lines;

pub use geom::{Axis, FlexAxis};
pub use layout::{BreakBetween, FlexLayoutResult, NextPage, flex_layout};

/// The style of a flex container, as used by flex layout.
#[derive(Clone, Debug)]
pub(crate) struct FlexContainerConfig {
    pub flex_axis: FlexAxis,
    pub flex_direction_is_reversed: bool,
    pub flex_wrap: FlexWrap,
    /// `justify-content`, with `flex-start` and `flex-end` swapped for
    /// reversed flex directions.
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
}

impl FlexContainerConfig {
    /// Fails for container styles flex layout does not implement.
    pub(crate) fn new(container_style: &ComputedValues) -> LayoutResult<Self> {
        if container_style.direction == Direction::Rtl {
            return Err(LayoutError::UnsupportedDirection);
        }
        let align_content = match container_style.align_content {
            AlignContent::SpaceEvenly => {
                return Err(LayoutError::UnsupportedAlignContent(
                    container_style.align_content,
                ));
            },
            align_content => align_content,
        };

        let flex_direction = container_style.flex_direction;
        let flex_direction_is_reversed = flex_direction.is_reversed();
        let justify_content = match container_style.justify_content {
            JustifyContent::FlexStart if flex_direction_is_reversed => JustifyContent::FlexEnd,
            JustifyContent::FlexEnd if flex_direction_is_reversed => JustifyContent::FlexStart,
            justify_content => justify_content,
        };

        Ok(Self {
            flex_axis: FlexAxis::from(flex_direction),
            flex_direction_is_reversed,
            flex_wrap: container_style.flex_wrap,
            justify_content,
            align_items: container_style.align_items,
            align_content,
        })
    }

    #[inline]
    pub(crate) fn main_axis(&self) -> PhysicalAxis {
        self.flex_axis.physical(Axis::Main)
    }

    #[inline]
    pub(crate) fn cross_axis(&self) -> PhysicalAxis {
        self.flex_axis.physical(Axis::Cross)
    }

    /// `align-self`, defaulting to `align-items` if `auto`.
    pub(crate) fn resolve_align_self_for_child(&self, child_style: &ComputedValues) -> AlignItems {
        child_style.align_self.resolve(self.align_items)
    }
}

/// An in-flow child of a flex container, during flex layout.
#[derive(Clone, Debug)]
pub(crate) struct FlexItem {
    /// Position among the children of the container.
    pub index: usize,
    pub box_: LayoutBox,
    /// The item style, owned by this item. Flex layout adjusts it, and it is
    /// written back to the box before the box leaves flex layout.
    pub style: ComputedValues,
}

impl FlexItem {
    pub(crate) fn new(index: usize, box_: LayoutBox) -> Self {
        let style = (*box_.style).clone();
        Self { index, box_, style }
    }

    /// A copy of the box carrying the current item style.
    pub(crate) fn box_with_style(&self) -> LayoutBox {
        let mut box_ = self.box_.clone();
        box_.style = Arc::new(self.style.clone());
        box_
    }

    /// The box carrying the current item style.
    pub(crate) fn into_box(self) -> LayoutBox {
        let mut box_ = self.box_;
        box_.style = Arc::new(self.style);
        box_
    }
}

/// Intermediate sizes of a flex item, indexed like the items of the
/// container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct FlexScratch {
    /// <https://drafts.csswg.org/css-flexbox/#flex-base-size>
    pub flex_base_size: CSSFloat,
    /// <https://drafts.csswg.org/css-flexbox/#hypothetical-main-size>
    /// Equal to the flex base size, min and max main sizes are not supported.
    pub hypothetical_main_size: CSSFloat,
    /// Distance from the cross-start edge of the line to the item baseline.
    pub baseline: CSSFloat,
}

impl FlexScratch {
    pub(crate) fn new(flex_base_size: CSSFloat) -> Self {
        Self {
            flex_base_size,
            hypothetical_main_size: flex_base_size,
            baseline: 0.,
        }
    }
}

/// <https://drafts.csswg.org/css-flexbox/#flex-line>
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FlexLine {
    /// Indices of the items on this line, in main axis order.
    pub items: Vec<usize>,
    pub cross_size: CSSFloat,
}

impl FlexLine {
    pub(crate) fn new(items: Vec<usize>) -> Self {
        Self {
            items,
            cross_size: 0.,
        }
    }
}
