/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Data needed by layout, and the interface to the block formatting engine
//! that flex layout delegates to.

use crate::error::LayoutResult;
use crate::formatting_contexts::SubtreeLayout;
use crate::geom::{CSSFloat, CSSPixelSize};
use crate::layout_box::{LayoutBox, SkipStack};

/// The part of layout that lives outside of this crate: block formatting,
/// intrinsic size measurement and baselines.
///
/// Implementations lay out the children of a block container with
/// [`crate::formatting_contexts::layout_box_subtree`], which sends flex
/// containers back into flex layout.
pub trait BlockFormattingEngine {
    /// Lay out the contents of `box_` and resolve its `auto` height.
    ///
    /// `max_position_y` is the bottom of the space left on the page. Returns
    /// `None` when nothing of `box_` fits above it, and a `resume_at` marker
    /// when only part of it does. The marker is given back as `skip_stack`
    /// when layout continues on the next page.
    fn block_container_layout(
        &self,
        context: &LayoutContext,
        box_: LayoutBox,
        max_position_y: CSSFloat,
        skip_stack: Option<&SkipStack>,
        page_is_empty: bool,
        out_of_flow: &mut OutOfFlowBoxes,
    ) -> LayoutResult<Option<SubtreeLayout>>;

    /// <https://drafts.csswg.org/css-sizing-3/#max-content-inline-size>
    fn max_content_width(&self, context: &LayoutContext, box_: &LayoutBox) -> CSSFloat;

    /// <https://drafts.csswg.org/css-sizing-3/#min-content-inline-size>
    ///
    /// With `outer`, the margins, borders and paddings of `box_` are included.
    fn min_content_width(&self, context: &LayoutContext, box_: &LayoutBox, outer: bool)
    -> CSSFloat;

    /// The absolute position of the first in-flow baseline of `box_`, if it
    /// has one.
    fn find_in_flow_baseline(&self, box_: &LayoutBox) -> Option<CSSFloat>;
}

pub struct LayoutContext<'a> {
    pub engine: &'a dyn BlockFormattingEngine,
    /// The size of the page area.
    pub device_size: CSSPixelSize,
}

impl<'a> LayoutContext<'a> {
    pub fn new(engine: &'a dyn BlockFormattingEngine, device_size: CSSPixelSize) -> Self {
        Self {
            engine,
            device_size,
        }
    }
}

/// Absolutely and fixed positioned boxes met during layout, to be laid out
/// once their containing block is known.
#[derive(Debug, Default)]
pub struct OutOfFlowBoxes {
    pub absolute: Vec<LayoutBox>,
    pub fixed: Vec<LayoutBox>,
}

impl OutOfFlowBoxes {
    pub fn is_empty(&self) -> bool {
        self.absolute.is_empty() && self.fixed.is_empty()
    }
}
