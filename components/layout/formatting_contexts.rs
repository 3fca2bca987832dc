/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use log::trace;

use crate::context::{LayoutContext, OutOfFlowBoxes};
use crate::error::LayoutResult;
use crate::flexbox;
use crate::geom::CSSFloat;
use crate::layout_box::{BoxKind, ContainingBlock, LayoutBox, SkipStack};

/// A box laid out by [`layout_box_subtree`].
#[derive(Clone, Debug)]
pub struct SubtreeLayout {
    pub box_: LayoutBox,
    /// Where to continue laying out `box_` on the next page, if some of its
    /// contents did not fit.
    pub resume_at: Option<SkipStack>,
}

impl SubtreeLayout {
    /// A layout with all of the contents of `box_`.
    pub fn complete(box_: LayoutBox) -> Self {
        Self {
            box_,
            resume_at: None,
        }
    }
}

/// Lay out `box_` with the formatting context it establishes.
///
/// This is the single entry point shared by flex layout and the block
/// formatting engine: flex containers are laid out here, everything else is
/// handed to [`crate::context::BlockFormattingEngine::block_container_layout`].
/// Returns `None` when nothing of `box_` fits above `max_position_y`, and a
/// continuation marker when only part of it does.
pub fn layout_box_subtree(
    context: &LayoutContext,
    box_: LayoutBox,
    containing_block: &ContainingBlock,
    max_position_y: CSSFloat,
    skip_stack: Option<&SkipStack>,
    page_is_empty: bool,
    out_of_flow: &mut OutOfFlowBoxes,
) -> LayoutResult<Option<SubtreeLayout>> {
    match box_.kind {
        BoxKind::Flex | BoxKind::InlineFlex => {
            trace!("layout_box_subtree: flex container at y={}", box_.position_y);
            let result = flexbox::flex_layout(
                context,
                box_,
                max_position_y,
                skip_stack,
                containing_block,
                page_is_empty,
                out_of_flow,
            )?;
            Ok(Some(SubtreeLayout {
                box_: result.box_,
                resume_at: result.resume_at,
            }))
        },
        BoxKind::BlockContainer | BoxKind::Replaced(_) => context.engine.block_container_layout(
            context,
            box_,
            max_position_y,
            skip_stack,
            page_is_empty,
            out_of_flow,
        ),
    }
}
