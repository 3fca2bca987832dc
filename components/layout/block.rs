/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Widths of block-level boxes in normal flow.
//!
//! "CSS 2.1" refers to <https://www.w3.org/TR/CSS21/visudet.html>.

use log::trace;

use crate::geom::{AuOrAuto, AutoOr, CSSFloat, PhysicalAxis};
use crate::layout_box::{ContainingBlock, LayoutBox};

/// The solution of the width-and-margins constraint equation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidthConstraintSolution {
    pub width: CSSFloat,
    pub margin_left: CSSFloat,
    pub margin_right: CSSFloat,
}

/// Computes the used width and horizontal margins of a block-level,
/// non-replaced box in normal flow, left-to-right.
///
/// CSS 2.1 Section 10.3.3.
pub fn block_level_width(box_: &mut LayoutBox, containing_block: &ContainingBlock) {
    let available_width =
        containing_block.width - box_.padding_border(PhysicalAxis::Horizontal);
    let solution = solve_block_width_constraints(
        box_.width,
        box_.margin.left,
        box_.margin.right,
        available_width,
    );
    trace!("block_level_width: {solution:?} for available width {available_width}");

    box_.width = AutoOr::LengthPercentage(solution.width);
    box_.margin.left = AutoOr::LengthPercentage(solution.margin_left);
    box_.margin.right = AutoOr::LengthPercentage(solution.margin_right);
}

/// Constraint Equation: margin-left + width + margin-right = available width,
/// where available width = CB width - (horizontal border + padding)
pub fn solve_block_width_constraints(
    computed_width: AuOrAuto,
    margin_left: AuOrAuto,
    margin_right: AuOrAuto,
    available_width: CSSFloat,
) -> WidthConstraintSolution {
    // If width is not 'auto', and width + margins > available width, all
    // 'auto' margins are treated as 0.
    let (margin_left, margin_right) = match computed_width {
        AutoOr::Auto => (margin_left, margin_right),
        AutoOr::LengthPercentage(width) => {
            let left = margin_left.auto_is_zero();
            let right = margin_right.auto_is_zero();
            if left + right + width > available_width {
                (AutoOr::LengthPercentage(left), AutoOr::LengthPercentage(right))
            } else {
                (margin_left, margin_right)
            }
        },
    };

    // Invariant: margin_left + width + margin_right == available width
    let (margin_left, width, margin_right) = match (margin_left, computed_width, margin_right) {
        // If all have a computed value other than 'auto', the system is
        // over-constrained so we discard the right margin.
        (
            AutoOr::LengthPercentage(left),
            AutoOr::LengthPercentage(width),
            AutoOr::LengthPercentage(_),
        ) => (left, width, available_width - (left + width)),

        // If exactly one value is 'auto', solve for it
        (AutoOr::Auto, AutoOr::LengthPercentage(width), AutoOr::LengthPercentage(right)) => {
            (available_width - (width + right), width, right)
        },
        (AutoOr::LengthPercentage(left), AutoOr::Auto, AutoOr::LengthPercentage(right)) => {
            (left, available_width - (left + right), right)
        },
        (AutoOr::LengthPercentage(left), AutoOr::LengthPercentage(width), AutoOr::Auto) => {
            (left, width, available_width - (left + width))
        },

        // If width is set to 'auto', any other 'auto' value becomes '0',
        // and width is solved for
        (AutoOr::Auto, AutoOr::Auto, AutoOr::LengthPercentage(right)) => {
            (0., available_width - right, right)
        },
        (AutoOr::LengthPercentage(left), AutoOr::Auto, AutoOr::Auto) => {
            (left, available_width - left, 0.)
        },
        (AutoOr::Auto, AutoOr::Auto, AutoOr::Auto) => (0., available_width, 0.),

        // If left and right margins are auto, they become equal
        (AutoOr::Auto, AutoOr::LengthPercentage(width), AutoOr::Auto) => {
            let margin = (available_width - width) / 2.;
            (margin, width, margin)
        },
    };

    WidthConstraintSolution {
        width,
        margin_left,
        margin_right,
    }
}
