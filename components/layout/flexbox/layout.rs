/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use log::{debug, log_enabled, trace};
use serde::Serialize;

use super::flexible_lengths::{FlexibleLengthResolutionItem, resolve_flexible_lengths};
use super::lines::collect_flex_lines;
use super::{FlexContainerConfig, FlexItem, FlexScratch, align};
use crate::block::block_level_width;
use crate::context::{LayoutContext, OutOfFlowBoxes};
use crate::error::{LayoutError, LayoutResult};
use crate::formatting_contexts::layout_box_subtree;
use crate::geom::{AutoOr, CSSFloat, PhysicalAxis};
use crate::layout_box::{BoxKind, ContainingBlock, LayoutBox, SkipStack};
use crate::percentages::resolve_percentages;
use crate::style::{Dimension, FlexBasis, Size};

/// Layout parameters and intermediate results about a flex container,
/// grouped to avoid passing around many parameters
pub(super) struct FlexContext<'a> {
    pub config: FlexContainerConfig,
    pub layout_context: &'a LayoutContext<'a>,
    pub available_main_space: CSSFloat,
    pub available_cross_space: CSSFloat,
}

/// Whether a break is allowed before the content that follows.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum BreakBetween {
    Any,
    Avoid,
    Page,
    Left,
    Right,
}

/// How the content following a laid out box starts on the next page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NextPage {
    pub break_: BreakBetween,
    /// The named page the following content asks for, if any.
    pub page: Option<String>,
}

/// Return type of [`flex_layout`].
#[derive(Debug)]
pub struct FlexLayoutResult {
    /// The container, holding its laid out flex items.
    pub box_: LayoutBox,
    /// Where to resume on the next page when not all items fit on this one.
    /// The index counts all the children of the container.
    pub resume_at: Option<SkipStack>,
    pub next_page: NextPage,
    pub out_of_flow_boxes: Vec<LayoutBox>,
    pub has_adjoining_margins: bool,
}

/// Which intrinsic size a content-based flex basis measures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ContentSize {
    MinContent,
    MaxContent,
}

/// The containing block flex layout gives to its items: the content box of
/// the container.
fn item_containing_block(container: &LayoutBox) -> ContainingBlock {
    ContainingBlock::new(
        container.width.auto_is_zero(),
        container.height.map(Dimension::px),
    )
}

/// Lay out the flex container `box_` and its in-flow children.
/// <https://drafts.csswg.org/css-flexbox/#layout-algorithm>
///
/// Flex items are laid out from the child at `skip_stack`, if any. A flex
/// item that is itself a flex container keeps the used sizes its parent flex
/// container gave it, other containers first resolve theirs against
/// `containing_block`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "flex_layout",
        skip_all,
        fields(servo_profiling = true),
        level = "trace",
    )
)]
pub fn flex_layout(
    context: &LayoutContext,
    mut box_: LayoutBox,
    max_position_y: CSSFloat,
    skip_stack: Option<&SkipStack>,
    containing_block: &ContainingBlock,
    page_is_empty: bool,
    out_of_flow: &mut OutOfFlowBoxes,
) -> LayoutResult<FlexLayoutResult> {
    let config = FlexContainerConfig::new(&box_.style)?;
    let skip = match skip_stack {
        None => 0,
        Some(SkipStack { child: Some(_), .. }) => return Err(LayoutError::NestedSkipStack),
        Some(SkipStack { index, child: None }) => *index,
    };
    if !box_.is_flex_item {
        resolve_percentages(&mut box_, containing_block)?;
    }

    // Step 1 happens during box tree construction.
    // > 2. Determine the available main and cross space for the flex items.
    let main_axis = config.main_axis();
    let cross_axis = config.cross_axis();
    let containing_block_height = containing_block.resolved_height()?.non_auto();
    let vertical_space = |top: CSSFloat| {
        let space = max_position_y - top;
        match containing_block_height {
            Some(height) => space.min(height),
            None => space,
        }
    };
    let available_space = |axis: PhysicalAxis, top: CSSFloat| -> LayoutResult<CSSFloat> {
        Ok(match box_.style.definite_size(axis)? {
            Some(size) => size,
            None => match axis {
                PhysicalAxis::Horizontal => {
                    containing_block.width - box_.pbm_auto_is_zero(PhysicalAxis::Horizontal)
                },
                PhysicalAxis::Vertical => {
                    vertical_space(top) - box_.pbm_auto_is_zero(PhysicalAxis::Vertical)
                },
            },
        })
    };
    let available_main_space = available_space(main_axis, box_.position_y)?;
    let available_cross_space = available_space(cross_axis, box_.content_box_y())?;
    debug!(
        "flex_layout: {:?} container, available main space {available_main_space}, \
         available cross space {available_cross_space}",
        config.flex_axis
    );

    let flex_context = FlexContext {
        config,
        layout_context: context,
        available_main_space,
        available_cross_space,
    };

    // > 3. Determine the flex base size and hypothetical main size of each item.
    let content_box_x = box_.content_box_x();
    let content_box_y = box_.content_box_y();
    let children = std::mem::take(&mut box_.children);
    let items_containing_block = item_containing_block(&box_);
    let mut items = Vec::with_capacity(children.len().saturating_sub(skip));
    let mut scratch = Vec::with_capacity(items.capacity());
    for (index, child) in children.into_iter().enumerate().skip(skip) {
        if !child.is_flex_item {
            continue;
        }
        let mut item = FlexItem::new(index, child);
        resolve_percentages(&mut item.box_, &ContainingBlock::zero())?;
        item.box_.position_x = content_box_x;
        item.box_.position_y = content_box_y;

        let flex_base_size = flex_base_size(
            &flex_context,
            &mut item,
            &items_containing_block,
            page_is_empty,
            out_of_flow,
        )?;
        trace!("flex_layout: item {index} has flex base size {flex_base_size}");
        scratch.push(FlexScratch::new(flex_base_size));
        items.push(item);
    }

    // > 4. Determine the main size of the flex container using the rules of the
    // > formatting context in which it participates.
    let mut resume_at = None;
    match main_axis {
        PhysicalAxis::Horizontal => block_level_width(&mut box_, containing_block),
        PhysicalAxis::Vertical => match box_.style.definite_size(PhysicalAxis::Vertical)? {
            Some(height) => box_.height = AutoOr::LengthPercentage(height),
            None => {
                // Items are stacked until the page is full. On an empty page
                // the first item is kept even if it overflows, otherwise
                // resuming at the same item would never make progress.
                let main_space = vertical_space(box_.position_y);
                let mut height = 0.;
                let mut overflowing = None;
                for (position, (item, scratch)) in items.iter().zip(&scratch).enumerate() {
                    let outer_height = scratch.hypothetical_main_size +
                        item.box_.pbm_auto_is_zero(PhysicalAxis::Vertical);
                    let forced = position == 0 && page_is_empty;
                    if outer_height + height > main_space && !forced {
                        overflowing = Some(position);
                        break;
                    }
                    height += outer_height;
                }
                if let Some(first_overflowing) = overflowing {
                    let index = items[first_overflowing].index;
                    debug!("flex_layout: items from child {index} go to the next page");
                    resume_at = Some(SkipStack::new(index));
                    items.truncate(first_overflowing);
                    scratch.truncate(first_overflowing);
                }
                box_.height = AutoOr::LengthPercentage(height);
            },
        },
    }

    // > 5. Collect flex items into flex lines.
    let mut lines = collect_flex_lines(
        items
            .iter()
            .zip(&scratch)
            .map(|(item, scratch)| (item.style.order, scratch.hypothetical_main_size)),
        flex_context.config.flex_wrap,
        flex_context.config.flex_direction_is_reversed,
        box_.size(main_axis).auto_is_zero(),
    );
    debug!("flex_layout: {} flex lines", lines.len());

    // > 6. Resolve the flexible lengths of all the flex items to find their
    // > used main size.
    for line in &lines {
        let mut resolution_items: Vec<_> = line
            .items
            .iter()
            .map(|&index| {
                FlexibleLengthResolutionItem::new(
                    scratch[index].flex_base_size,
                    scratch[index].hypothetical_main_size,
                    items[index].style.flex_grow,
                    items[index].style.flex_shrink,
                )
            })
            .collect();
        resolve_flexible_lengths(&mut resolution_items, available_main_space);
        for (&index, resolved) in line.items.iter().zip(&resolution_items) {
            trace!(
                "flex_layout: item {} has main size {}",
                items[index].index, resolved.target_main_size
            );
            items[index].box_.set_size(main_axis, resolved.target_main_size);
        }
    }

    // > 7. Determine the hypothetical cross size of each item.
    let items_containing_block = item_containing_block(&box_);
    for line in &mut lines {
        let mut laid_out_items = Vec::with_capacity(line.items.len());
        for &index in &line.items {
            let item = &mut items[index];
            match cross_axis {
                PhysicalAxis::Vertical => {
                    let laid_out = layout_box_subtree(
                        context,
                        item.box_with_style(),
                        &items_containing_block,
                        available_cross_space + content_box_y,
                        None,
                        page_is_empty,
                        out_of_flow,
                    )?;
                    match laid_out {
                        Some(laid_out) => {
                            if laid_out.resume_at.is_some() {
                                // Flex items are not split between pages.
                                trace!("flex_layout: item {} overflows the page", item.index);
                            }
                            item.box_ = laid_out.box_;
                            laid_out_items.push(index);
                        },
                        None => trace!("flex_layout: item {} does not fit", item.index),
                    }
                },
                PhysicalAxis::Horizontal => {
                    let width = context
                        .engine
                        .min_content_width(context, &item.box_, false);
                    item.box_.width = AutoOr::LengthPercentage(width);
                    laid_out_items.push(index);
                },
            }
        }
        line.items = laid_out_items;
    }
    lines.retain(|line| !line.items.is_empty());

    // > 8. Calculate the cross size of each flex line.
    align::determine_line_cross_sizes(&flex_context, &box_, &items, &mut lines);
    // > 9. Handle 'align-content: stretch'.
    align::stretch_lines(&flex_context, &box_, &mut lines)?;
    // Step 10, `visibility: collapse`, is not supported.
    // > 11. Determine the used cross size of each flex item.
    align::stretch_items(&flex_context, &mut items, &lines);
    // > 12. Distribute any remaining free space.
    align::align_along_main_axis(&flex_context, &box_, &mut items, &lines);
    // > 13. Resolve cross-axis auto margins.
    // > 14. Align all flex items along the cross-axis per align-self.
    align::align_along_cross_axis(&flex_context, &box_, &mut items, &mut scratch, &lines);
    // > 15. Determine the flex container’s used cross size.
    // > 16. Align all flex lines per align-content.
    align::finish_container_cross_size(&flex_context, &mut box_, &mut items, &lines);

    // Final layout of the items, now that their size and position are known.
    let items_containing_block = item_containing_block(&box_);
    let mut items: Vec<Option<FlexItem>> = items.into_iter().map(Some).collect();
    let mut children = Vec::with_capacity(items.len());
    for line in &lines {
        for &index in &line.items {
            let Some(item) = items[index].take() else {
                continue;
            };
            let laid_out = layout_box_subtree(
                context,
                item.into_box(),
                &items_containing_block,
                max_position_y,
                None,
                page_is_empty,
                out_of_flow,
            )?;
            children.extend(laid_out.map(|laid_out| laid_out.box_));
        }
    }
    box_.children = children;

    if log_enabled!(log::Level::Trace) {
        trace!("flex_layout: {}", box_.debug_json());
    }

    Ok(FlexLayoutResult {
        box_,
        resume_at,
        next_page: NextPage {
            break_: BreakBetween::Any,
            page: None,
        },
        out_of_flow_boxes: Vec::new(),
        has_adjoining_margins: false,
    })
}

/// <https://drafts.csswg.org/css-flexbox/#algo-main-item>
///
/// Leaves `auto` as the main size of the item style when the flex basis is
/// content-based.
fn flex_base_size(
    flex_context: &FlexContext,
    item: &mut FlexItem,
    containing_block: &ContainingBlock,
    page_is_empty: bool,
    out_of_flow: &mut OutOfFlowBoxes,
) -> LayoutResult<CSSFloat> {
    let main_axis = flex_context.config.main_axis();

    // > If a value would resolve to auto for width, it instead resolves to
    // > content for flex-basis.
    // The same goes for heights.
    let flex_basis = match item.style.flex_basis {
        FlexBasis::Auto => match item.style.size(main_axis) {
            Size::Auto => FlexBasis::Content,
            Size::Length(length) => FlexBasis::Size(length),
            Size::MinContent => FlexBasis::MinContent,
            Size::MaxContent => FlexBasis::MaxContent,
        },
        flex_basis => flex_basis,
    };

    // > A. If the item has a definite used flex basis, that’s the flex base size.
    // Percentages are not supported.
    let content_size = match flex_basis {
        FlexBasis::Size(length) => return length.to_px("flex-basis"),
        FlexBasis::MinContent => ContentSize::MinContent,
        FlexBasis::Auto | FlexBasis::Content | FlexBasis::MaxContent => ContentSize::MaxContent,
    };

    // > E. Otherwise, size the item into the available space using its used
    // > flex basis in place of its main size, treating a value of content as
    // > max-content.
    item.style.set_size(main_axis, Size::Auto);

    if let BoxKind::Replaced(replaced) = &item.box_.kind {
        let size = replaced.concrete_object_size(&item.box_);
        return Ok(match main_axis {
            PhysicalAxis::Horizontal => size.width,
            PhysicalAxis::Vertical => size.height,
        });
    }

    let layout_context = flex_context.layout_context;
    let engine = layout_context.engine;
    Ok(match (main_axis, content_size) {
        (PhysicalAxis::Horizontal, ContentSize::MaxContent) => {
            engine.max_content_width(layout_context, &item.box_)
        },
        (PhysicalAxis::Horizontal, ContentSize::MinContent) => {
            engine.min_content_width(layout_context, &item.box_, true)
        },
        (PhysicalAxis::Vertical, content_size) => {
            // The height of a detached copy laid out at its max-content
            // (infinite) or min-content (zero) width, on an endless page.
            let mut probe = item.box_with_style();
            probe.width = AutoOr::LengthPercentage(match content_size {
                ContentSize::MaxContent => CSSFloat::INFINITY,
                ContentSize::MinContent => 0.,
            });
            layout_box_subtree(
                layout_context,
                probe,
                containing_block,
                CSSFloat::INFINITY,
                None,
                page_is_empty,
                out_of_flow,
            )?
            .map_or(0., |probe| probe.box_.height.auto_is_zero())
        },
    })
}
