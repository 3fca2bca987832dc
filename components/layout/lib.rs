/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Layout of flex containers and sizing of replaced content for paged media.
//!
//! Block formatting itself is not done here: the embedder provides it through
//! [`context::BlockFormattingEngine`], and both sides lay out subtrees with
//! [`formatting_contexts::layout_box_subtree`].

#![deny(unsafe_code)]

pub mod block;
pub mod context;
pub mod error;
pub mod flexbox;
pub mod formatting_contexts;
pub mod geom;
pub mod layout_box;
pub mod percentages;
pub mod replaced;
pub mod style;

pub use context::{BlockFormattingEngine, LayoutContext, OutOfFlowBoxes};
pub use error::{LayoutError, LayoutResult};
pub use flexbox::{FlexLayoutResult, flex_layout};
pub use formatting_contexts::{SubtreeLayout, layout_box_subtree};
pub use layout_box::{BoxKind, ContainingBlock, LayoutBox, SkipStack};
