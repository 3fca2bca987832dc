/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Sizing of replaced content such as images.
//! <https://drafts.csswg.org/css-images-3/#sizing>

use serde::{Deserialize, Serialize};

use crate::geom::{CSSFloat, CSSPixelSize};
use crate::layout_box::LayoutBox;

/// The default object size, used when neither the style nor the content
/// provides a dimension.
/// <https://drafts.csswg.org/css-images-3/#default-object-size>
pub const DEFAULT_OBJECT_WIDTH: CSSFloat = 300.;
pub const DEFAULT_OBJECT_HEIGHT: CSSFloat = 150.;

/// The natural dimensions of some replaced content. Any of them may be
/// missing, e.g. an SVG image with only a `viewBox` has a ratio but neither
/// width nor height.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct IntrinsicSizes {
    pub width: Option<CSSFloat>,
    pub height: Option<CSSFloat>,
    /// Width divided by height.
    pub ratio: Option<CSSFloat>,
}

impl IntrinsicSizes {
    /// Sizes of content with both natural dimensions, the ratio following
    /// from them.
    pub fn from_width_and_height(width: CSSFloat, height: CSSFloat) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ratio: (height != 0.).then(|| width / height),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ReplacedContent {
    pub intrinsic: IntrinsicSizes,
}

impl ReplacedContent {
    pub fn new(intrinsic: IntrinsicSizes) -> Self {
        Self { intrinsic }
    }

    /// The concrete object size of this content inside `box_`, whose used
    /// `width` and `height` act as the specified size.
    pub fn concrete_object_size(&self, box_: &LayoutBox) -> CSSPixelSize {
        default_image_sizing(
            self.intrinsic,
            box_.width.non_auto(),
            box_.height.non_auto(),
            CSSPixelSize::new(DEFAULT_OBJECT_WIDTH, DEFAULT_OBJECT_HEIGHT),
        )
    }
}

/// Default sizing algorithm for the concrete object size.
/// <https://drafts.csswg.org/css-images-3/#default-sizing>
pub fn default_image_sizing(
    intrinsic: IntrinsicSizes,
    specified_width: Option<CSSFloat>,
    specified_height: Option<CSSFloat>,
    default_size: CSSPixelSize,
) -> CSSPixelSize {
    match (specified_width, specified_height) {
        (Some(width), Some(height)) => CSSPixelSize::new(width, height),
        (Some(width), None) => {
            let height = match intrinsic.ratio {
                Some(ratio) => width / ratio,
                None => intrinsic.height.unwrap_or(default_size.height),
            };
            CSSPixelSize::new(width, height)
        },
        (None, Some(height)) => {
            let width = match intrinsic.ratio {
                Some(ratio) => height * ratio,
                None => intrinsic.width.unwrap_or(default_size.width),
            };
            CSSPixelSize::new(width, height)
        },
        (None, None) => CSSPixelSize::new(
            intrinsic.width.unwrap_or(default_size.width),
            intrinsic.height.unwrap_or(default_size.height),
        ),
    }
}

/// Contain constraint sizing: the largest size with the intrinsic ratio
/// that fits in `constraint`.
/// <https://drafts.csswg.org/css-images-3/#contain-constraint>
pub fn contain_constraint_image_sizing(
    constraint: CSSPixelSize,
    intrinsic_ratio: Option<CSSFloat>,
) -> CSSPixelSize {
    constraint_image_sizing(constraint, intrinsic_ratio, false)
}

/// Cover constraint sizing: the smallest size with the intrinsic ratio
/// that covers `constraint`.
/// <https://drafts.csswg.org/css-images-3/#cover-constraint>
pub fn cover_constraint_image_sizing(
    constraint: CSSPixelSize,
    intrinsic_ratio: Option<CSSFloat>,
) -> CSSPixelSize {
    constraint_image_sizing(constraint, intrinsic_ratio, true)
}

fn constraint_image_sizing(
    constraint: CSSPixelSize,
    intrinsic_ratio: Option<CSSFloat>,
    cover: bool,
) -> CSSPixelSize {
    let Some(ratio) = intrinsic_ratio else {
        return constraint;
    };
    if cover ^ (constraint.width > constraint.height * ratio) {
        CSSPixelSize::new(constraint.height / ratio, constraint.height)
    } else {
        CSSPixelSize::new(constraint.width, constraint.width * ratio)
    }
}
