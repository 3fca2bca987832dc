/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! “Resolve the flexible lengths of all the flex items to find their used main size.”
//! <https://drafts.csswg.org/css-flexbox/#resolve-flexible-lengths>

use log::trace;

use crate::geom::CSSFloat;

/// The per-item state of flexible length resolution on one line. Lives only
/// for the duration of [`resolve_flexible_lengths`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FlexibleLengthResolutionItem {
    pub flex_base_size: CSSFloat,
    pub hypothetical_main_size: CSSFloat,
    pub flex_grow: CSSFloat,
    pub flex_shrink: CSSFloat,
    /// `flex_grow` or `flex_shrink`, depending on the line.
    pub flex_factor: CSSFloat,
    pub frozen: bool,
    pub target_main_size: CSSFloat,
    /// <https://drafts.csswg.org/css-flexbox/#scaled-flex-shrink-factor>
    pub scaled_flex_shrink_factor: CSSFloat,
    /// How much clamping at zero grew the target main size in the last pass.
    pub adjustment: CSSFloat,
}

impl FlexibleLengthResolutionItem {
    pub fn new(
        flex_base_size: CSSFloat,
        hypothetical_main_size: CSSFloat,
        flex_grow: CSSFloat,
        flex_shrink: CSSFloat,
    ) -> Self {
        Self {
            flex_base_size,
            hypothetical_main_size,
            flex_grow,
            flex_shrink,
            flex_factor: 0.,
            frozen: false,
            target_main_size: flex_base_size,
            scaled_flex_shrink_factor: 0.,
            adjustment: 0.,
        }
    }
}

/// Order of magnitude of a free space, with non-positive values below all
/// others.
fn magnitude(free_space: CSSFloat) -> CSSFloat {
    if free_space > 0. {
        free_space.log10().trunc()
    } else {
        CSSFloat::NEG_INFINITY
    }
}

/// Distribute `available_main_space` among the items of one line. On return
/// every item is frozen and its `target_main_size` is its used main size.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "resolve_flexible_lengths",
        skip_all,
        fields(servo_profiling = true),
        level = "trace",
    )
)]
pub(crate) fn resolve_flexible_lengths(
    items: &mut [FlexibleLengthResolutionItem],
    available_main_space: CSSFloat,
) {
    // > 1. Determine the used flex factor. Sum the outer hypothetical main sizes of all
    // > items on the line. If the sum is less than the flex container’s inner main
    // > size, use the flex grow factor for the rest of this algorithm; otherwise, use
    // > the flex shrink factor.
    let hypothetical_main_sizes_sum: CSSFloat =
        items.iter().map(|item| item.hypothetical_main_size).sum();
    let grow = hypothetical_main_sizes_sum < available_main_space;

    // > 2. Size inflexible items. Freeze, setting its target main size to its
    // > hypothetical main size…
    for item in items.iter_mut() {
        item.flex_factor = if grow { item.flex_grow } else { item.flex_shrink };
        let is_inflexible = item.flex_factor == 0. ||
            if grow {
                item.flex_base_size > item.hypothetical_main_size
            } else {
                item.flex_base_size < item.hypothetical_main_size
            };
        item.frozen = is_inflexible;
        if is_inflexible {
            item.target_main_size = item.hypothetical_main_size;
        }
    }

    // > 3. Calculate initial free space. For frozen items, use their target main
    // > size; for other items, use their flex base size.
    let free_space = |items: &[FlexibleLengthResolutionItem]| {
        available_main_space -
            items
                .iter()
                .map(|item| {
                    if item.frozen {
                        item.target_main_size
                    } else {
                        item.flex_base_size
                    }
                })
                .sum::<CSSFloat>()
    };
    let mut initial_free_space = free_space(items);

    // > 4. Loop
    // > a. Check for flexible items. If all the flex items on the line are
    // > frozen, free space has been distributed; exit this loop.
    while items.iter().any(|item| !item.frozen) {
        // > b. Calculate the remaining free space as for initial free space,
        // > above. If the sum of the unfrozen flex items’ flex factors is less
        // > than one, multiply the initial free space by this sum. If the
        // > magnitude of this value is less than the magnitude of the remaining
        // > free space, use this as the remaining free space.
        let mut remaining_free_space = free_space(items);
        let unfrozen_flex_factor_sum: CSSFloat = items
            .iter()
            .filter(|item| !item.frozen)
            .map(|item| item.flex_factor)
            .sum();
        if unfrozen_flex_factor_sum < 1. {
            initial_free_space *= unfrozen_flex_factor_sum;
        }
        if magnitude(initial_free_space) < magnitude(remaining_free_space) {
            remaining_free_space = initial_free_space;
        }

        // > c. Distribute free space proportional to the flex factors.
        if remaining_free_space == 0. {
            for item in items.iter_mut().filter(|item| !item.frozen) {
                item.target_main_size = item.flex_base_size;
            }
        } else {
            let mut scaled_flex_shrink_factors_sum = 0.;
            for item in items.iter_mut().filter(|item| !item.frozen) {
                item.scaled_flex_shrink_factor = item.flex_base_size * item.flex_shrink;
                scaled_flex_shrink_factors_sum += item.scaled_flex_shrink_factor;
            }
            if grow {
                // The grow ratio is taken over the scaled shrink factors. With
                // no scaled shrink factor at all, it is taken over the grow
                // factors instead.
                let denominator = if scaled_flex_shrink_factors_sum != 0. {
                    scaled_flex_shrink_factors_sum
                } else {
                    unfrozen_flex_factor_sum
                };
                for item in items.iter_mut().filter(|item| !item.frozen) {
                    let ratio = item.flex_grow / denominator;
                    item.target_main_size = item.flex_base_size + remaining_free_space * ratio;
                }
            } else if scaled_flex_shrink_factors_sum != 0. {
                for item in items.iter_mut().filter(|item| !item.frozen) {
                    let ratio = item.scaled_flex_shrink_factor / scaled_flex_shrink_factors_sum;
                    item.target_main_size = item.flex_base_size + remaining_free_space * ratio;
                }
            } else {
                for item in items.iter_mut().filter(|item| !item.frozen) {
                    item.target_main_size = item.flex_base_size;
                }
            }
        }

        // > d. Fix min/max violations.
        // Only the floor at zero applies, min and max main sizes are not supported.
        for item in items.iter_mut() {
            item.adjustment = 0.;
            if !item.frozen && item.target_main_size < 0. {
                item.adjustment = -item.target_main_size;
                item.target_main_size = 0.;
            }
        }

        // > e. Freeze over-flexed items. The total violation is the sum of the
        // > adjustments from the previous step. If the total violation is:
        // > - Zero: Freeze all items.
        // > - Positive: Freeze all the items with min violations.
        // > - Negative: Freeze all the items with max violations.
        let total_adjustment: CSSFloat = items.iter().map(|item| item.adjustment).sum();
        for item in items.iter_mut() {
            if total_adjustment == 0. ||
                (total_adjustment > 0. && item.adjustment > 0.) ||
                (total_adjustment < 0. && item.adjustment < 0.)
            {
                item.frozen = true;
            }
        }
        trace!(
            "resolve_flexible_lengths: remaining free space {remaining_free_space}, \
             total adjustment {total_adjustment}"
        );
    }
}
