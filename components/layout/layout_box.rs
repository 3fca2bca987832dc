/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use serde::Serialize;
use servo_arc::Arc;

use crate::error::LayoutResult;
use crate::geom::{AuOrAuto, AutoOr, CSSFloat, CSSPixelVector, PhysicalAxis, PhysicalSides};
use crate::replaced::ReplacedContent;
use crate::style::{ComputedValues, Dimension};

/// What kind of formatting a box establishes for its contents. Layout is
/// dispatched on this, see [`crate::formatting_contexts::layout_box_subtree`].
#[derive(Clone, Debug, Serialize)]
pub enum BoxKind {
    BlockContainer,
    /// `display: flex`
    Flex,
    /// `display: inline-flex`
    InlineFlex,
    Replaced(ReplacedContent),
}

/// A node of the layout tree.
///
/// The used values (`margin`, `padding`, `border`, `width`, `height`) start
/// out unresolved and are filled in by
/// [`crate::percentages::resolve_percentages`] and the formatting contexts.
#[derive(Clone, Debug, Serialize)]
pub struct LayoutBox {
    #[serde(skip_serializing)]
    pub style: Arc<ComputedValues>,
    pub kind: BoxKind,
    pub children: Vec<LayoutBox>,
    /// Whether this box is an in-flow child of a flex container.
    pub is_flex_item: bool,
    pub margin: PhysicalSides<AuOrAuto>,
    pub padding: PhysicalSides<CSSFloat>,
    pub border: PhysicalSides<CSSFloat>,
    /// The left edge of the margin box.
    pub position_x: CSSFloat,
    /// The top edge of the margin box.
    pub position_y: CSSFloat,
    /// Content-box width.
    pub width: AuOrAuto,
    /// Content-box height.
    pub height: AuOrAuto,
}

impl LayoutBox {
    pub fn new(style: Arc<ComputedValues>, kind: BoxKind, children: Vec<LayoutBox>) -> Self {
        Self {
            style,
            kind,
            children,
            is_flex_item: false,
            margin: PhysicalSides::all(AutoOr::LengthPercentage(0.)),
            padding: PhysicalSides::all(0.),
            border: PhysicalSides::all(0.),
            position_x: 0.,
            position_y: 0.,
            width: AutoOr::Auto,
            height: AutoOr::Auto,
        }
    }

    #[inline]
    pub fn size(&self, axis: PhysicalAxis) -> AuOrAuto {
        match axis {
            PhysicalAxis::Horizontal => self.width,
            PhysicalAxis::Vertical => self.height,
        }
    }

    #[inline]
    pub fn set_size(&mut self, axis: PhysicalAxis, size: CSSFloat) {
        match axis {
            PhysicalAxis::Horizontal => self.width = AutoOr::LengthPercentage(size),
            PhysicalAxis::Vertical => self.height = AutoOr::LengthPercentage(size),
        }
    }

    #[inline]
    pub fn position(&self, axis: PhysicalAxis) -> CSSFloat {
        match axis {
            PhysicalAxis::Horizontal => self.position_x,
            PhysicalAxis::Vertical => self.position_y,
        }
    }

    #[inline]
    pub fn set_position(&mut self, axis: PhysicalAxis, position: CSSFloat) {
        match axis {
            PhysicalAxis::Horizontal => self.position_x = position,
            PhysicalAxis::Vertical => self.position_y = position,
        }
    }

    /// Padding plus border along `axis`.
    #[inline]
    pub fn padding_border(&self, axis: PhysicalAxis) -> CSSFloat {
        self.padding.sum_along(axis) + self.border.sum_along(axis)
    }

    /// Margin, padding and border along `axis`, with `auto` margins as zero.
    #[inline]
    pub fn pbm_auto_is_zero(&self, axis: PhysicalAxis) -> CSSFloat {
        self.margin.auto_is_zero().sum_along(axis) + self.padding_border(axis)
    }

    /// Size of the margin box along `axis`. An `auto` size or margin counts
    /// as zero.
    pub fn margin_size(&self, axis: PhysicalAxis) -> CSSFloat {
        self.size(axis).auto_is_zero() + self.pbm_auto_is_zero(axis)
    }

    pub fn margin_height(&self) -> CSSFloat {
        self.margin_size(PhysicalAxis::Vertical)
    }

    /// Position of the content box start edge along `axis`.
    pub fn content_box_position(&self, axis: PhysicalAxis) -> CSSFloat {
        let margin_start = self.margin.start_end(axis).0.auto_is_zero();
        let border_start = self.border.start_end(axis).0;
        let padding_start = self.padding.start_end(axis).0;
        self.position(axis) + margin_start + border_start + padding_start
    }

    pub fn content_box_x(&self) -> CSSFloat {
        self.content_box_position(PhysicalAxis::Horizontal)
    }

    pub fn content_box_y(&self) -> CSSFloat {
        self.content_box_position(PhysicalAxis::Vertical)
    }

    /// Move this box and all of its descendants.
    pub fn translate(&mut self, offset: CSSPixelVector) {
        if offset.x == 0. && offset.y == 0. {
            return;
        }
        self.position_x += offset.x;
        self.position_y += offset.y;
        for child in &mut self.children {
            child.translate(offset);
        }
    }

    /// Move this box and its descendants by `delta` along `axis`.
    pub fn translate_along(&mut self, axis: PhysicalAxis, delta: CSSFloat) {
        let offset = match axis {
            PhysicalAxis::Horizontal => CSSPixelVector::new(delta, 0.),
            PhysicalAxis::Vertical => CSSPixelVector::new(0., delta),
        };
        self.translate(offset)
    }

    /// JSON dump of the subtree, for debugging.
    pub fn debug_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|error| error.to_string())
    }
}

/// The rectangle percentages and `auto` sizes resolve against.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ContainingBlock {
    pub width: CSSFloat,
    pub height: AutoOr<Dimension>,
}

impl ContainingBlock {
    pub fn new(width: CSSFloat, height: AutoOr<Dimension>) -> Self {
        Self { width, height }
    }

    /// The zero-sized containing block of the placeholder percentage pass.
    pub fn zero() -> Self {
        Self::new(0., AutoOr::LengthPercentage(Dimension::px(0.)))
    }

    /// The height in pixels, or `auto`. Only absolute heights are supported.
    pub fn resolved_height(&self) -> LayoutResult<AuOrAuto> {
        Ok(match self.height {
            AutoOr::LengthPercentage(height) => {
                AutoOr::LengthPercentage(height.to_px("containing block height")?)
            },
            AutoOr::Auto => AutoOr::Auto,
        })
    }
}

/// Where to resume laying out a box on the next page: the index of the
/// first child that did not fit, and where to resume inside that child.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkipStack {
    pub index: usize,
    pub child: Option<Box<SkipStack>>,
}

impl SkipStack {
    pub fn new(index: usize) -> Self {
        Self { index, child: None }
    }
}
