/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use super::FlexLine;
use crate::geom::CSSFloat;
use crate::style::FlexWrap;

/// “Collect flex items into flex lines”
/// <https://drafts.csswg.org/css-flexbox/#algo-line-break>
///
/// `items` yields the `order` and the hypothetical main size of each item, in
/// document order. The returned lines refer to items by their position in
/// `items`.
pub(crate) fn collect_flex_lines(
    items: impl IntoIterator<Item = (i32, CSSFloat)>,
    flex_wrap: FlexWrap,
    flex_direction_is_reversed: bool,
    container_main_size: CSSFloat,
) -> Vec<FlexLine> {
    let mut ordered: Vec<(usize, i32, CSSFloat)> = items
        .into_iter()
        .enumerate()
        .map(|(index, (order, size))| (index, order, size))
        .collect();
    // Stable, so items with the same `order` keep document order.
    ordered.sort_by_key(|&(_, order, _)| order);

    let mut lines = Vec::new();
    let mut line = Vec::new();
    let mut line_size = 0.;
    for (index, _, hypothetical_main_size) in ordered {
        line_size += hypothetical_main_size;
        if flex_wrap != FlexWrap::Nowrap && line_size > container_main_size {
            if line.is_empty() {
                // A line always holds at least one item, even when it overflows.
                lines.push(FlexLine::new(vec![index]));
                line_size = 0.;
            } else {
                lines.push(FlexLine::new(std::mem::replace(&mut line, vec![index])));
                line_size = hypothetical_main_size;
            }
        } else {
            line.push(index);
        }
    }
    if !line.is_empty() {
        lines.push(FlexLine::new(line));
    }

    if flex_wrap == FlexWrap::WrapReverse {
        lines.reverse();
    }
    if flex_direction_is_reversed {
        for line in &mut lines {
            line.items.reverse();
        }
    }
    lines
}
