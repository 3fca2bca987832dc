/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use crate::error::LayoutResult;
use crate::geom::{AuOrAuto, AutoOr, CSSFloat, PhysicalSides};
use crate::layout_box::{ContainingBlock, LayoutBox};
use crate::style::{Dimension, LengthUnit, Size};

/// Set the used margins, paddings, borders, width and height of `box_` from
/// its style, resolving percentages against `containing_block`.
///
/// Margins and paddings refer to the containing block width on every side.
/// Percentage heights compute to `auto` when the containing block height is
/// `auto`. The intrinsic size keywords leave the used size `auto`.
pub fn resolve_percentages(
    box_: &mut LayoutBox,
    containing_block: &ContainingBlock,
) -> LayoutResult<()> {
    let cb_width = containing_block.width;
    let cb_height = containing_block.resolved_height()?;
    let style = box_.style.clone();

    let margin = |side: AutoOr<Dimension>, property: &'static str| -> LayoutResult<AuOrAuto> {
        match side {
            AutoOr::LengthPercentage(length) => {
                length.resolve(cb_width, property).map(AutoOr::LengthPercentage)
            },
            AutoOr::Auto => Ok(AutoOr::Auto),
        }
    };
    box_.margin = PhysicalSides {
        top: margin(style.margin.top, "margin-top")?,
        right: margin(style.margin.right, "margin-right")?,
        bottom: margin(style.margin.bottom, "margin-bottom")?,
        left: margin(style.margin.left, "margin-left")?,
    };
    box_.padding = PhysicalSides {
        top: style.padding.top.resolve(cb_width, "padding-top")?,
        right: style.padding.right.resolve(cb_width, "padding-right")?,
        bottom: style.padding.bottom.resolve(cb_width, "padding-bottom")?,
        left: style.padding.left.resolve(cb_width, "padding-left")?,
    };
    box_.border = style.border_width;

    box_.width = resolve_size(style.width, AutoOr::LengthPercentage(cb_width), "width")?;
    box_.height = resolve_size(style.height, cb_height, "height")?;
    Ok(())
}

fn resolve_size(
    size: Size,
    basis: AutoOr<CSSFloat>,
    property: &'static str,
) -> LayoutResult<AuOrAuto> {
    match size {
        Size::Length(length) if length.unit == LengthUnit::Percent => {
            Ok(basis.map(|basis| length.value * basis / 100.))
        },
        Size::Length(length) => length.to_px(property).map(AutoOr::LengthPercentage),
        Size::Auto | Size::MinContent | Size::MaxContent => Ok(AutoOr::Auto),
    }
}
