/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::fmt;

use crate::style::{AlignContent, LengthUnit};

/// Input shapes that layout refuses to approximate. Any of these aborts the
/// whole layout call; no partially laid out box is returned.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// A length that should have been computed to an absolute length reached
    /// layout in another unit.
    NonAbsoluteLength {
        property: &'static str,
        unit: LengthUnit,
    },
    /// A percentage where only absolute lengths are supported.
    UnsupportedPercentage { property: &'static str },
    /// An `align-content` value that flex layout does not implement.
    UnsupportedAlignContent(AlignContent),
    /// A flex container with `direction: rtl`.
    UnsupportedDirection,
    /// A continuation marker pointing inside one of the flex items.
    NestedSkipStack,
}

pub type LayoutResult<T> = Result<T, LayoutError>;

impl std::error::Error for LayoutError {}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LayoutError::NonAbsoluteLength { property, unit } => write!(
                f,
                "`{property}` must be an absolute length, found unit {unit:?}"
            ),
            LayoutError::UnsupportedPercentage { property } => {
                write!(f, "percentages are not supported for `{property}`")
            },
            LayoutError::UnsupportedAlignContent(value) => {
                write!(f, "unsupported align-content value {value:?}")
            },
            LayoutError::UnsupportedDirection => {
                f.write_str("right-to-left flex containers are not supported")
            },
            LayoutError::NestedSkipStack => {
                f.write_str("flex layout cannot resume inside a flex item")
            },
        }
    }
}
