/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Cross sizes and alignment of flex lines and flex items, steps 8 to 16 of
//! <https://drafts.csswg.org/css-flexbox/#layout-algorithm>.

use log::trace;

use super::layout::FlexContext;
use super::{FlexAxis, FlexItem, FlexLine, FlexScratch};
use crate::error::LayoutResult;
use crate::geom::{AuOrAuto, AutoOr, CSSFloat, PhysicalAxis, PhysicalSides};
use crate::layout_box::{BoxKind, LayoutBox};
use crate::style::{AlignContent, AlignItems, AlignSelf, Dimension, JustifyContent, Size};

/// Whether an item with a computed preferred cross size of `auto` will stretch
/// to fill the cross size of its flex line.
/// <https://drafts.csswg.org/css-flexbox/#stretched>
fn item_with_auto_cross_size_stretches_to_line_size(
    align_self: AlignItems,
    margin: &PhysicalSides<AuOrAuto>,
    cross_axis: PhysicalAxis,
) -> bool {
    align_self == AlignItems::Stretch && margin.auto_count_along(cross_axis) == 0
}

/// Determine the cross size of each flex line.
/// <https://drafts.csswg.org/css-flexbox/#algo-cross-line>
pub(super) fn determine_line_cross_sizes(
    flex_context: &FlexContext,
    container: &LayoutBox,
    items: &[FlexItem],
    lines: &mut [FlexLine],
) {
    let cross_axis = flex_context.config.cross_axis();

    // > If the flex container is single-line and has a definite cross size, the
    // > cross size of the flex line is the flex container’s inner cross size.
    if let ([line], AutoOr::LengthPercentage(cross_size)) =
        (&mut *lines, container.size(cross_axis))
    {
        line.cross_size = cross_size;
        return;
    }

    let engine = flex_context.layout_context.engine;
    for line in lines.iter_mut() {
        // > 1. Collect all the flex items whose inline-axis is parallel to the
        // > main-axis, whose align-self is baseline, and whose cross-axis margins
        // > are both non-auto.
        let (collected, not_collected): (Vec<&FlexItem>, Vec<&FlexItem>) =
            line.items.iter().map(|&index| &items[index]).partition(|item| {
                flex_context.config.flex_axis == FlexAxis::Row &&
                    item.style.align_self == AlignSelf::Baseline &&
                    item.box_.margin.auto_count_along(PhysicalAxis::Vertical) == 0
            });

        // > Find the largest of the distances between each item’s baseline and
        // > its hypothetical outer cross-start edge, and the largest of the
        // > distances between each item’s baseline and its hypothetical outer
        // > cross-end edge, and sum these two values.
        let mut cross_start_distance: CSSFloat = 0.;
        let mut cross_end_distance: CSSFloat = 0.;
        for item in collected {
            let baseline = engine
                .find_in_flow_baseline(&item.box_)
                .map_or(0., |baseline| baseline - item.box_.position_y);
            cross_start_distance = cross_start_distance.max(baseline);
            cross_end_distance = cross_end_distance.max(item.box_.margin_height() - baseline);
        }
        let collected_cross_size = cross_start_distance + cross_end_distance;

        // > 2. Among all the items not collected by the previous step, find the
        // > largest outer hypothetical cross size.
        let non_collected_cross_size = not_collected
            .iter()
            .map(|item| item.box_.margin_size(cross_axis))
            .fold(0., CSSFloat::max);

        // > 3. The used cross-size of the flex line is the largest of the
        // > numbers found in the previous two steps and zero.
        line.cross_size = collected_cross_size.max(non_collected_cross_size);
    }
}

/// Handle `align-content: stretch`.
/// <https://drafts.csswg.org/css-flexbox/#algo-line-stretch>
pub(super) fn stretch_lines(
    flex_context: &FlexContext,
    container: &LayoutBox,
    lines: &mut [FlexLine],
) -> LayoutResult<()> {
    if flex_context.config.align_content != AlignContent::Stretch || lines.is_empty() {
        return Ok(());
    }

    let definite_cross_size = match flex_context.config.cross_axis() {
        PhysicalAxis::Vertical => container.style.definite_size(PhysicalAxis::Vertical)?,
        PhysicalAxis::Horizontal => match container.kind {
            BoxKind::Flex => Some(
                container
                    .style
                    .definite_size(PhysicalAxis::Horizontal)?
                    .unwrap_or(flex_context.available_cross_space),
            ),
            _ => None,
        },
    };
    let Some(definite_cross_size) = definite_cross_size else {
        return Ok(());
    };

    let extra_cross_size =
        definite_cross_size - lines.iter().map(|line| line.cross_size).sum::<CSSFloat>();
    if extra_cross_size > 0. {
        let line_count = lines.len() as CSSFloat;
        for line in lines.iter_mut() {
            line.cross_size += extra_cross_size / line_count;
        }
    }
    Ok(())
}

/// Determine the used cross size of each flex item.
/// <https://drafts.csswg.org/css-flexbox/#algo-stretch>
pub(super) fn stretch_items(flex_context: &FlexContext, items: &mut [FlexItem], lines: &[FlexLine]) {
    let cross_axis = flex_context.config.cross_axis();
    for line in lines {
        for &index in &line.items {
            let item = &mut items[index];
            let align_self = flex_context.config.resolve_align_self_for_child(&item.style);
            if item.style.size(cross_axis).is_auto() &&
                item_with_auto_cross_size_stretches_to_line_size(
                    align_self,
                    &item.box_.margin,
                    cross_axis,
                )
            {
                let cross_size = line.cross_size - item.box_.pbm_auto_is_zero(cross_axis);
                item.box_.set_size(cross_axis, cross_size);
            }
        }
    }
}

/// Distribute any remaining free space along the main axis.
/// <https://drafts.csswg.org/css-flexbox/#algo-main-align>
pub(super) fn align_along_main_axis(
    flex_context: &FlexContext,
    container: &LayoutBox,
    items: &mut [FlexItem],
    lines: &[FlexLine],
) {
    let main_axis = flex_context.config.main_axis();
    let justify_content = flex_context.config.justify_content;
    let container_main_size = container.size(main_axis).auto_is_zero();
    let original_position = container.content_box_position(main_axis);

    for line in lines {
        let item_count = line.items.len() as CSSFloat;
        let mut position = original_position;
        let mut free_space = container_main_size -
            line.items
                .iter()
                .map(|&index| items[index].box_.margin_size(main_axis))
                .sum::<CSSFloat>();

        if free_space > 0. {
            // > 1. If the remaining free space is positive and at least one main-axis
            // > margin on this line is auto, distribute the free space equally among
            // > these margins.
            let auto_margin_count: usize = line
                .items
                .iter()
                .map(|&index| items[index].box_.margin.auto_count_along(main_axis))
                .sum();
            if auto_margin_count > 0 {
                let each_auto_margin = free_space / auto_margin_count as CSSFloat;
                for &index in &line.items {
                    let (start, end) = items[index].box_.margin.start_end_mut(main_axis);
                    for margin in [start, end] {
                        if margin.is_auto() {
                            *margin = AutoOr::LengthPercentage(each_auto_margin);
                        }
                    }
                }
                free_space = 0.;
            }

            // > 2. Align the items along the main-axis per justify-content.
            match justify_content {
                JustifyContent::FlexEnd => position += free_space,
                JustifyContent::Center => position += free_space / 2.,
                JustifyContent::SpaceAround => position += free_space / item_count / 2.,
                JustifyContent::FlexStart | JustifyContent::SpaceBetween => {},
            }
        }

        for &index in &line.items {
            let box_ = &mut items[index].box_;
            box_.set_position(main_axis, position);
            position += box_.margin_size(main_axis);
            match justify_content {
                JustifyContent::SpaceAround => position += free_space / item_count,
                JustifyContent::SpaceBetween if line.items.len() > 1 => {
                    position += free_space / (item_count - 1.)
                },
                _ => {},
            }
        }
    }
}

/// Resolve `auto` cross margins, then align each item within its line per
/// `align-self`.
/// - <https://drafts.csswg.org/css-flexbox/#algo-cross-margins>
/// - <https://drafts.csswg.org/css-flexbox/#algo-cross-align>
pub(super) fn align_along_cross_axis(
    flex_context: &FlexContext,
    container: &LayoutBox,
    items: &mut [FlexItem],
    scratch: &mut [FlexScratch],
    lines: &[FlexLine],
) {
    let cross_axis = flex_context.config.cross_axis();
    let engine = flex_context.layout_context.engine;
    let mut position_cross = container.content_box_position(cross_axis);

    for line in lines {
        // Baselines are only supported for horizontal text, in rows.
        let mut lower_baseline: CSSFloat = 0.;
        if flex_context.config.flex_axis == FlexAxis::Row {
            for &index in &line.items {
                let item = &items[index];
                if flex_context.config.resolve_align_self_for_child(&item.style) ==
                    AlignItems::Baseline
                {
                    // Items still sit at the top of the container, so the
                    // baseline is taken relative to the item's own position.
                    let baseline = engine
                        .find_in_flow_baseline(&item.box_)
                        .map_or(0., |baseline| baseline - item.box_.position(cross_axis));
                    scratch[index].baseline = baseline;
                    lower_baseline = lower_baseline.max(baseline);
                }
            }
        }

        for &index in &line.items {
            let item = &mut items[index];
            let auto_margin_count = item.box_.margin.auto_count_along(cross_axis);
            item.box_.set_position(cross_axis, position_cross);

            if auto_margin_count > 0 {
                // > If a flex item has auto cross-axis margins: If its outer cross
                // > size (treating those auto margins as zero) is less than the
                // > cross size of its flex line, distribute the difference in
                // > those sizes equally to the auto margins. Otherwise, if the
                // > block-start or inline-start margin (whichever is in the cross
                // > axis) is auto, set it to zero. Set the opposite margin so that
                // > the outer cross size of the item equals the cross size of its
                // > flex line.
                let extra_cross =
                    flex_context.available_cross_space - item.box_.margin_size(cross_axis);
                let (start, end) = item.box_.margin.start_end_mut(cross_axis);
                if extra_cross > 0. {
                    let each_auto_margin = extra_cross / auto_margin_count as CSSFloat;
                    for margin in [start, end] {
                        if margin.is_auto() {
                            *margin = AutoOr::LengthPercentage(each_auto_margin);
                        }
                    }
                } else {
                    if start.is_auto() {
                        *start = AutoOr::LengthPercentage(0.);
                    }
                    *end = AutoOr::LengthPercentage(extra_cross);
                }
                continue;
            }

            let ending_alignment = line.cross_size - item.box_.margin_size(cross_axis);
            match flex_context.config.resolve_align_self_for_child(&item.style) {
                AlignItems::FlexStart => {},
                AlignItems::FlexEnd => {
                    item.box_.set_position(cross_axis, position_cross + ending_alignment);
                },
                AlignItems::Center => {
                    let offset = ending_alignment / 2.;
                    item.box_.set_position(cross_axis, position_cross + offset);
                },
                AlignItems::Baseline => {
                    if cross_axis == PhysicalAxis::Vertical {
                        let offset = lower_baseline - scratch[index].baseline;
                        item.box_.set_position(cross_axis, position_cross + offset);
                    }
                },
                AlignItems::Stretch => {
                    if item.style.size(cross_axis).is_auto() {
                        let cross_size = line.cross_size - item.box_.pbm_auto_is_zero(cross_axis);
                        item.style
                            .set_size(cross_axis, Size::Length(Dimension::px(cross_size)));
                    }
                },
            }
        }
        position_cross += line.cross_size;
    }
}

/// Determine the flex container’s used cross size, then align all flex lines
/// per `align-content`.
/// - <https://drafts.csswg.org/css-flexbox/#algo-cross-container>
/// - <https://drafts.csswg.org/css-flexbox/#algo-line-align>
pub(super) fn finish_container_cross_size(
    flex_context: &FlexContext,
    container: &mut LayoutBox,
    items: &mut [FlexItem],
    lines: &[FlexLine],
) {
    let cross_axis = flex_context.config.cross_axis();
    let lines_cross_size: CSSFloat = lines.iter().map(|line| line.cross_size).sum();

    if container.style.size(cross_axis).is_auto() || container.size(cross_axis).is_auto() {
        container.set_size(cross_axis, lines_cross_size);
        return;
    }
    if lines.len() <= 1 {
        return;
    }

    let extra_cross_size = container.size(cross_axis).auto_is_zero() - lines_cross_size;
    if extra_cross_size <= 0. {
        return;
    }
    trace!("finish_container_cross_size: {extra_cross_size} left for align-content");

    let line_count = lines.len() as CSSFloat;
    let align_content = flex_context.config.align_content;
    let mut cross_translate = 0.;
    for line in lines {
        let line_offset = match align_content {
            AlignContent::FlexEnd => extra_cross_size,
            AlignContent::Center => extra_cross_size / 2.,
            AlignContent::SpaceAround => extra_cross_size / line_count / 2.,
            _ => 0.,
        };
        for &index in &line.items {
            items[index]
                .box_
                .translate_along(cross_axis, cross_translate + line_offset);
        }
        match align_content {
            AlignContent::SpaceBetween => cross_translate += extra_cross_size / (line_count - 1.),
            AlignContent::SpaceAround => cross_translate += extra_cross_size / line_count,
            _ => {},
        }
    }
}
