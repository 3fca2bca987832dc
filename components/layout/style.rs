/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Computed style values consumed by layout.
//!
//! Styles are resolved before layout and shared between boxes through
//! [`servo_arc::Arc`]. Layout code that needs to adjust a style works on an
//! owned clone.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::geom::{AutoOr, CSSFloat, PhysicalAxis, PhysicalSides};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LengthUnit {
    Px,
    #[serde(rename = "%")]
    Percent,
    Em,
    Rem,
    Ex,
    Ch,
    Vw,
    Vh,
    Pt,
}

/// A numeric value with a unit.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Dimension {
    pub value: CSSFloat,
    pub unit: LengthUnit,
}

impl Dimension {
    pub const fn px(value: CSSFloat) -> Self {
        Self {
            value,
            unit: LengthUnit::Px,
        }
    }

    pub const fn percent(value: CSSFloat) -> Self {
        Self {
            value,
            unit: LengthUnit::Percent,
        }
    }

    /// The value in CSS pixels, for properties where only absolute lengths
    /// are supported.
    pub fn to_px(self, property: &'static str) -> LayoutResult<CSSFloat> {
        match self.unit {
            LengthUnit::Px => Ok(self.value),
            LengthUnit::Percent => Err(LayoutError::UnsupportedPercentage { property }),
            unit => Err(LayoutError::NonAbsoluteLength { property, unit }),
        }
    }

    /// The value in CSS pixels, with percentages taken of `basis`.
    pub fn resolve(self, basis: CSSFloat, property: &'static str) -> LayoutResult<CSSFloat> {
        match self.unit {
            LengthUnit::Percent => Ok(self.value * basis / 100.),
            _ => self.to_px(property),
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::px(0.)
    }
}

/// `width` and `height`.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    #[default]
    Auto,
    Length(Dimension),
    MinContent,
    MaxContent,
}

impl Size {
    #[inline]
    pub fn is_auto(&self) -> bool {
        matches!(self, Size::Auto)
    }
}

/// <https://drafts.csswg.org/css-flexbox/#flex-basis-property>
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexBasis {
    #[default]
    Auto,
    Content,
    MinContent,
    MaxContent,
    Size(Dimension),
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    pub fn is_row(self) -> bool {
        matches!(self, FlexDirection::Row | FlexDirection::RowReverse)
    }

    pub fn is_reversed(self) -> bool {
        matches!(
            self,
            FlexDirection::RowReverse | FlexDirection::ColumnReverse
        )
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexWrap {
    #[default]
    Nowrap,
    Wrap,
    WrapReverse,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    #[default]
    Stretch,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignSelf {
    #[default]
    Auto,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    Stretch,
}

impl AlignSelf {
    /// The used alignment, taking `auto` from the container's `align-items`.
    pub fn resolve(self, align_items: AlignItems) -> AlignItems {
        match self {
            AlignSelf::Auto => align_items,
            AlignSelf::FlexStart => AlignItems::FlexStart,
            AlignSelf::FlexEnd => AlignItems::FlexEnd,
            AlignSelf::Center => AlignItems::Center,
            AlignSelf::Baseline => AlignItems::Baseline,
            AlignSelf::Stretch => AlignItems::Stretch,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignContent {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    #[default]
    Stretch,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// The computed values of the properties layout reads.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ComputedValues {
    pub width: Size,
    pub height: Size,
    pub margin: PhysicalSides<AutoOr<Dimension>>,
    pub padding: PhysicalSides<Dimension>,
    pub border_width: PhysicalSides<CSSFloat>,
    pub direction: Direction,
    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub flex_basis: FlexBasis,
    pub flex_grow: CSSFloat,
    pub flex_shrink: CSSFloat,
    pub order: i32,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_self: AlignSelf,
    pub align_content: AlignContent,
}

impl Default for ComputedValues {
    /// Initial values.
    fn default() -> Self {
        Self {
            width: Size::Auto,
            height: Size::Auto,
            margin: PhysicalSides::all(AutoOr::LengthPercentage(Dimension::px(0.))),
            padding: PhysicalSides::all(Dimension::px(0.)),
            border_width: PhysicalSides::all(0.),
            direction: Direction::Ltr,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Nowrap,
            flex_basis: FlexBasis::Auto,
            flex_grow: 0.,
            flex_shrink: 1.,
            order: 0,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
            align_self: AlignSelf::Auto,
            align_content: AlignContent::Stretch,
        }
    }
}

impl ComputedValues {
    /// `width` or `height`, depending on `axis`.
    #[inline]
    pub fn size(&self, axis: PhysicalAxis) -> Size {
        match axis {
            PhysicalAxis::Horizontal => self.width,
            PhysicalAxis::Vertical => self.height,
        }
    }

    #[inline]
    pub fn set_size(&mut self, axis: PhysicalAxis, size: Size) {
        match axis {
            PhysicalAxis::Horizontal => self.width = size,
            PhysicalAxis::Vertical => self.height = size,
        }
    }

    /// The specified absolute length along `axis`, or `None` for `auto` and
    /// the intrinsic keywords.
    pub fn definite_size(&self, axis: PhysicalAxis) -> LayoutResult<Option<CSSFloat>> {
        match self.size(axis) {
            Size::Length(length) => length.to_px(axis_property(axis)).map(Some),
            Size::Auto | Size::MinContent | Size::MaxContent => Ok(None),
        }
    }
}

pub(crate) fn axis_property(axis: PhysicalAxis) -> &'static str {
    match axis {
        PhysicalAxis::Horizontal => "width",
        PhysicalAxis::Vertical => "height",
    }
}
