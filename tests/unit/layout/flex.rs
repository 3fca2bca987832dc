/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use layout::geom::AutoOr;
use layout::replaced::{IntrinsicSizes, ReplacedContent};
use layout::style::{
    AlignContent, AlignSelf, ComputedValues, Dimension, Direction, FlexBasis, FlexDirection,
    FlexWrap, JustifyContent, LengthUnit,
};
use layout::{BoxKind, ContainingBlock, LayoutBox, LayoutError, SkipStack};
use servo_arc::Arc;

use crate::engine::{
    basis, block, flex_container, flex_item, geometry, layout_block, layout_flex,
    layout_flex_on_page, px, sized_item, with_kind,
};

fn page_wide() -> ContainingBlock {
    ContainingBlock::new(100., AutoOr::Auto)
}

fn row_container(style: ComputedValues, children: Vec<LayoutBox>) -> LayoutBox {
    flex_container(
        ComputedValues {
            width: px(100.),
            ..style
        },
        children,
    )
}

#[test]
fn test_wrapping_row() {
    let style: ComputedValues = serde_json::from_str(
        r#"{
            "width": { "length": { "value": 100.0, "unit": "px" } },
            "flex_wrap": "wrap"
        }"#,
    )
    .unwrap();
    let container = flex_container(
        style,
        vec![sized_item(40., 10.), sized_item(40., 10.), sized_item(40., 10.)],
    );

    let result = layout_flex(container, page_wide(), 1000., None).unwrap();
    assert_eq!(
        geometry(&result.box_),
        vec![
            (0., 0., 40., 10.),
            (40., 0., 40., 10.),
            (0., 10., 40., 10.)
        ]
    );
    assert_eq!(result.box_.width, AutoOr::LengthPercentage(100.));
    assert_eq!(result.box_.height, AutoOr::LengthPercentage(20.));
    assert_eq!(result.resume_at, None);
    assert!(result.out_of_flow_boxes.is_empty());
    assert!(!result.has_adjoining_margins);
}

#[test]
fn test_space_between() {
    let container = row_container(
        ComputedValues {
            justify_content: JustifyContent::SpaceBetween,
            ..Default::default()
        },
        vec![sized_item(30., 10.), sized_item(30., 10.)],
    );
    let result = layout_flex(container, page_wide(), 1000., None).unwrap();
    let x: Vec<_> = result.box_.children.iter().map(|c| c.position_x).collect();
    assert_eq!(x, vec![0., 70.]);
}

#[test]
fn test_row_reverse_packs_items_at_the_end() {
    let container = row_container(
        ComputedValues {
            flex_direction: FlexDirection::RowReverse,
            ..Default::default()
        },
        vec![sized_item(20., 10.), sized_item(30., 10.)],
    );
    let result = layout_flex(container, page_wide(), 1000., None).unwrap();
    assert_eq!(
        geometry(&result.box_),
        vec![(50., 0., 30., 10.), (80., 0., 20., 10.)]
    );
}

#[test]
fn test_flex_grow_without_scaled_shrink_factors() {
    let grow = |flex_grow| {
        flex_item(
            ComputedValues {
                flex_basis: basis(0.),
                flex_grow,
                height: px(10.),
                ..Default::default()
            },
            vec![],
        )
    };
    let container = row_container(Default::default(), vec![grow(1.), grow(3.)]);
    let result = layout_flex(container, page_wide(), 1000., None).unwrap();
    assert_eq!(
        geometry(&result.box_),
        vec![(0., 0., 25., 10.), (25., 0., 75., 10.)]
    );
}

#[test]
fn test_column_continues_on_next_page() {
    let column = || {
        flex_container(
            ComputedValues {
                flex_direction: FlexDirection::Column,
                ..Default::default()
            },
            vec![sized_item(40., 40.), sized_item(40., 40.), sized_item(40., 40.)],
        )
    };

    let first_page = layout_flex(column(), page_wide(), 100., None).unwrap();
    assert_eq!(first_page.resume_at, Some(SkipStack::new(2)));
    assert_eq!(
        geometry(&first_page.box_),
        vec![(0., 0., 100., 40.), (0., 40., 100., 40.)]
    );
    assert_eq!(first_page.box_.width, AutoOr::LengthPercentage(100.));
    assert_eq!(first_page.box_.height, AutoOr::LengthPercentage(80.));

    let resume_at = first_page.resume_at.unwrap();
    let second_page = layout_flex(column(), page_wide(), 100., Some(&resume_at)).unwrap();
    assert_eq!(second_page.resume_at, None);
    assert_eq!(geometry(&second_page.box_), vec![(0., 0., 100., 40.)]);
}

#[test]
fn test_children_that_are_not_flex_items_are_dropped() {
    let out_of_flow = LayoutBox::new(
        Arc::new(ComputedValues::default()),
        BoxKind::BlockContainer,
        vec![],
    );
    let container = row_container(
        Default::default(),
        vec![sized_item(30., 10.), out_of_flow, sized_item(30., 10.)],
    );
    let result = layout_flex(container, page_wide(), 1000., None).unwrap();
    assert_eq!(
        geometry(&result.box_),
        vec![(0., 0., 30., 10.), (30., 0., 30., 10.)]
    );
}

#[test]
fn test_nested_flex_container() {
    let inner = with_kind(
        ComputedValues {
            flex_basis: basis(60.),
            justify_content: JustifyContent::Center,
            ..Default::default()
        },
        BoxKind::Flex,
        vec![sized_item(20., 10.), sized_item(20., 10.)],
    );
    let container = row_container(Default::default(), vec![inner]);
    let result = layout_flex(container, page_wide(), 1000., None).unwrap();

    let inner = &result.box_.children[0];
    assert_eq!(inner.width, AutoOr::LengthPercentage(60.));
    assert_eq!(inner.height, AutoOr::LengthPercentage(10.));
    assert_eq!(
        geometry(inner),
        vec![(10., 0., 20., 10.), (30., 0., 20., 10.)]
    );
    assert_eq!(result.box_.height, AutoOr::LengthPercentage(10.));
}

#[test]
fn test_baseline_alignment() {
    let baseline_item = |height| {
        flex_item(
            ComputedValues {
                flex_basis: basis(10.),
                height: px(height),
                align_self: AlignSelf::Baseline,
                ..Default::default()
            },
            vec![],
        )
    };
    let container = row_container(
        Default::default(),
        vec![baseline_item(10.), baseline_item(20.)],
    );
    let result = layout_flex(container, page_wide(), 1000., None).unwrap();
    let y: Vec<_> = result.box_.children.iter().map(|c| c.position_y).collect();
    assert_eq!(y, vec![10., 0.]);
    assert_eq!(result.box_.height, AutoOr::LengthPercentage(20.));
}

#[test]
fn test_auto_margins() {
    let mut margin = ComputedValues::default().margin;
    margin.left = AutoOr::Auto;
    let pushed_right = flex_item(
        ComputedValues {
            flex_basis: basis(20.),
            height: px(10.),
            margin,
            ..Default::default()
        },
        vec![],
    );
    let result = layout_flex(
        row_container(Default::default(), vec![pushed_right]),
        page_wide(),
        1000.,
        None,
    )
    .unwrap();
    let item = &result.box_.children[0];
    assert_eq!(item.margin.left, AutoOr::LengthPercentage(80.));
    assert_eq!(item.content_box_x(), 80.);

    let mut margin = ComputedValues::default().margin;
    margin.top = AutoOr::Auto;
    margin.bottom = AutoOr::Auto;
    let centered = flex_item(
        ComputedValues {
            flex_basis: basis(20.),
            height: px(10.),
            margin,
            ..Default::default()
        },
        vec![],
    );
    let result = layout_flex(
        row_container(
            ComputedValues {
                height: px(50.),
                ..Default::default()
            },
            vec![centered],
        ),
        page_wide(),
        1000.,
        None,
    )
    .unwrap();
    let item = &result.box_.children[0];
    assert_eq!(item.margin.top, AutoOr::LengthPercentage(20.));
    assert_eq!(item.margin.bottom, AutoOr::LengthPercentage(20.));
    assert_eq!(item.content_box_y(), 20.);
    assert_eq!(result.box_.height, AutoOr::LengthPercentage(50.));
}

#[test]
fn test_align_content_center() {
    let container = row_container(
        ComputedValues {
            height: px(100.),
            flex_wrap: FlexWrap::Wrap,
            align_content: AlignContent::Center,
            ..Default::default()
        },
        vec![sized_item(40., 10.), sized_item(40., 10.), sized_item(40., 10.)],
    );
    let result = layout_flex(container, page_wide(), 1000., None).unwrap();
    let y: Vec<_> = result.box_.children.iter().map(|c| c.position_y).collect();
    assert_eq!(y, vec![40., 40., 50.]);
}

#[test]
fn test_replaced_item_uses_its_intrinsic_size() {
    let image = with_kind(
        Default::default(),
        BoxKind::Replaced(ReplacedContent::new(IntrinsicSizes::from_width_and_height(
            100., 50.,
        ))),
        vec![],
    );
    let container = flex_container(
        ComputedValues {
            width: px(300.),
            ..Default::default()
        },
        vec![image],
    );
    let result = layout_flex(container, ContainingBlock::new(300., AutoOr::Auto), 1000., None)
        .unwrap();
    assert_eq!(geometry(&result.box_), vec![(0., 0., 100., 50.)]);
}

#[test]
fn test_unsupported_input_is_an_error() {
    let layout_error = |container| layout_flex(container, page_wide(), 1000., None).unwrap_err();

    assert_eq!(
        layout_error(row_container(
            ComputedValues {
                direction: Direction::Rtl,
                ..Default::default()
            },
            vec![]
        )),
        LayoutError::UnsupportedDirection
    );
    assert_eq!(
        layout_error(row_container(
            ComputedValues {
                align_content: AlignContent::SpaceEvenly,
                ..Default::default()
            },
            vec![]
        )),
        LayoutError::UnsupportedAlignContent(AlignContent::SpaceEvenly)
    );

    let item_with_basis = |flex_basis| {
        flex_item(
            ComputedValues {
                flex_basis: FlexBasis::Size(flex_basis),
                ..Default::default()
            },
            vec![],
        )
    };
    assert_eq!(
        layout_error(row_container(
            Default::default(),
            vec![item_with_basis(Dimension::percent(50.))]
        )),
        LayoutError::UnsupportedPercentage {
            property: "flex-basis"
        }
    );
    assert_eq!(
        layout_error(row_container(
            Default::default(),
            vec![item_with_basis(Dimension {
                value: 2.,
                unit: LengthUnit::Em,
            })]
        )),
        LayoutError::NonAbsoluteLength {
            property: "flex-basis",
            unit: LengthUnit::Em
        }
    );

    let nested = SkipStack {
        index: 0,
        child: Some(Box::new(SkipStack::new(1))),
    };
    assert_eq!(
        layout_flex(
            row_container(Default::default(), vec![sized_item(10., 10.)]),
            page_wide(),
            1000.,
            Some(&nested)
        )
        .unwrap_err(),
        LayoutError::NestedSkipStack
    );

    assert_eq!(
        layout_flex(
            row_container(Default::default(), vec![]),
            ContainingBlock::new(100., AutoOr::LengthPercentage(Dimension::percent(50.))),
            1000.,
            None
        )
        .unwrap_err(),
        LayoutError::UnsupportedPercentage {
            property: "containing block height"
        }
    );
}

#[test]
fn test_block_containers_hold_flex_containers() {
    let flex = LayoutBox::new(
        Arc::new(ComputedValues::default()),
        BoxKind::Flex,
        vec![sized_item(50., 10.), sized_item(50., 10.)],
    );
    let root = block(Default::default(), vec![flex]);
    let root = layout_block(root, ContainingBlock::new(200., AutoOr::Auto), 1000., None)
        .unwrap()
        .unwrap();

    assert_eq!(root.resume_at, None);
    assert_eq!(root.box_.height, AutoOr::LengthPercentage(10.));
    let flex = &root.box_.children[0];
    assert_eq!(flex.width, AutoOr::LengthPercentage(200.));
    assert_eq!(
        geometry(flex),
        vec![(0., 0., 50., 10.), (50., 0., 50., 10.)]
    );
}

#[test]
fn test_column_inside_block_continues_on_next_page() {
    let root = || {
        let column = flex_container(
            ComputedValues {
                flex_direction: FlexDirection::Column,
                ..Default::default()
            },
            vec![sized_item(40., 40.), sized_item(40., 40.), sized_item(40., 40.)],
        );
        block(Default::default(), vec![column])
    };

    let first_page = layout_block(root(), page_wide(), 100., None)
        .unwrap()
        .unwrap();
    let resume_at = SkipStack {
        index: 0,
        child: Some(Box::new(SkipStack::new(2))),
    };
    assert_eq!(first_page.resume_at, Some(resume_at.clone()));
    assert_eq!(first_page.box_.height, AutoOr::LengthPercentage(80.));
    assert_eq!(
        geometry(&first_page.box_.children[0]),
        vec![(0., 0., 100., 40.), (0., 40., 100., 40.)]
    );

    let second_page = layout_block(root(), page_wide(), 100., Some(&resume_at))
        .unwrap()
        .unwrap();
    assert_eq!(second_page.resume_at, None);
    assert_eq!(
        geometry(&second_page.box_.children[0]),
        vec![(0., 0., 100., 40.)]
    );
}

#[test]
fn test_column_places_one_item_on_an_empty_page() {
    let rigid_item = || {
        flex_item(
            ComputedValues {
                flex_basis: basis(40.),
                flex_shrink: 0.,
                height: px(40.),
                ..Default::default()
            },
            vec![],
        )
    };
    let column = || {
        flex_container(
            ComputedValues {
                flex_direction: FlexDirection::Column,
                ..Default::default()
            },
            vec![rigid_item(), rigid_item()],
        )
    };

    let result = layout_flex_on_page(column(), page_wide(), 30., None, true).unwrap();
    assert_eq!(result.resume_at, Some(SkipStack::new(1)));
    assert_eq!(geometry(&result.box_), vec![(0., 0., 100., 40.)]);

    let result = layout_flex_on_page(column(), page_wide(), 30., None, false).unwrap();
    assert_eq!(result.resume_at, Some(SkipStack::new(0)));
    assert!(result.box_.children.is_empty());
}

#[test]
fn test_baseline_alignment_on_wrapped_lines() {
    let baseline_item = |flex_basis, height| {
        flex_item(
            ComputedValues {
                flex_basis: basis(flex_basis),
                height: px(height),
                align_self: AlignSelf::Baseline,
                ..Default::default()
            },
            vec![],
        )
    };
    let container = row_container(
        ComputedValues {
            flex_wrap: FlexWrap::Wrap,
            ..Default::default()
        },
        vec![
            baseline_item(100., 50.),
            baseline_item(40., 20.),
            baseline_item(40., 30.),
        ],
    );
    let result = layout_flex(container, page_wide(), 1000., None).unwrap();
    assert_eq!(
        geometry(&result.box_),
        vec![
            (0., 0., 100., 50.),
            (0., 60., 40., 20.),
            (40., 50., 40., 30.)
        ]
    );
    assert_eq!(result.box_.height, AutoOr::LengthPercentage(80.));
}

fn x_positions(container: &LayoutBox) -> Vec<f32> {
    container.children.iter().map(|child| child.position_x).collect()
}

fn y_positions(container: &LayoutBox) -> Vec<f32> {
    container.children.iter().map(|child| child.position_y).collect()
}

#[test]
fn test_justify_content() {
    let justify = |justify_content| {
        let container = row_container(
            ComputedValues {
                justify_content,
                ..Default::default()
            },
            vec![sized_item(20., 10.), sized_item(30., 10.)],
        );
        x_positions(&layout_flex(container, page_wide(), 1000., None).unwrap().box_)
    };
    assert_eq!(justify(JustifyContent::FlexStart), vec![0., 20.]);
    assert_eq!(justify(JustifyContent::FlexEnd), vec![50., 70.]);
    assert_eq!(justify(JustifyContent::Center), vec![25., 45.]);
    // Half a gap before the first item, a full gap between items.
    assert_eq!(justify(JustifyContent::SpaceAround), vec![12.5, 57.5]);
}

#[test]
fn test_align_content_with_several_lines() {
    let align = |align_content| {
        let container = row_container(
            ComputedValues {
                height: px(100.),
                flex_wrap: FlexWrap::Wrap,
                align_content,
                ..Default::default()
            },
            vec![sized_item(40., 10.), sized_item(40., 10.), sized_item(40., 10.)],
        );
        y_positions(&layout_flex(container, page_wide(), 1000., None).unwrap().box_)
    };
    assert_eq!(align(AlignContent::FlexStart), vec![0., 0., 10.]);
    assert_eq!(align(AlignContent::FlexEnd), vec![80., 80., 90.]);
    assert_eq!(align(AlignContent::SpaceBetween), vec![0., 0., 90.]);
    assert_eq!(align(AlignContent::SpaceAround), vec![20., 20., 70.]);
}

#[test]
fn test_align_content_stretch_grows_every_line() {
    let item = || {
        flex_item(
            ComputedValues {
                flex_basis: basis(40.),
                ..Default::default()
            },
            vec![block(
                ComputedValues {
                    height: px(10.),
                    ..Default::default()
                },
                vec![],
            )],
        )
    };
    let container = row_container(
        ComputedValues {
            height: px(100.),
            flex_wrap: FlexWrap::Wrap,
            ..Default::default()
        },
        vec![item(), item(), item()],
    );
    let result = layout_flex(container, page_wide(), 1000., None).unwrap();
    assert_eq!(
        geometry(&result.box_),
        vec![
            (0., 0., 40., 50.),
            (40., 0., 40., 50.),
            (0., 50., 40., 50.)
        ]
    );
    assert_eq!(result.box_.height, AutoOr::LengthPercentage(100.));
}

#[test]
fn test_align_self() {
    let aligned = |align_self| {
        flex_item(
            ComputedValues {
                flex_basis: basis(20.),
                height: px(10.),
                align_self,
                ..Default::default()
            },
            vec![],
        )
    };
    let container = row_container(
        ComputedValues {
            height: px(50.),
            ..Default::default()
        },
        vec![
            aligned(AlignSelf::FlexStart),
            aligned(AlignSelf::Center),
            aligned(AlignSelf::FlexEnd),
        ],
    );
    let result = layout_flex(container, page_wide(), 1000., None).unwrap();
    assert_eq!(y_positions(&result.box_), vec![0., 20., 40.]);
}

#[test]
fn test_wrap_reverse_reverses_lines() {
    let container = row_container(
        ComputedValues {
            flex_wrap: FlexWrap::WrapReverse,
            ..Default::default()
        },
        vec![sized_item(40., 10.), sized_item(40., 10.), sized_item(30., 10.)],
    );
    let result = layout_flex(container, page_wide(), 1000., None).unwrap();
    assert_eq!(
        geometry(&result.box_),
        vec![
            (0., 0., 30., 10.),
            (0., 10., 40., 10.),
            (40., 10., 40., 10.)
        ]
    );
}

#[test]
fn test_column_reverse() {
    let container = flex_container(
        ComputedValues {
            flex_direction: FlexDirection::ColumnReverse,
            ..Default::default()
        },
        vec![sized_item(10., 10.), sized_item(20., 20.)],
    );
    let result = layout_flex(container, page_wide(), 1000., None).unwrap();
    assert_eq!(
        geometry(&result.box_),
        vec![(0., 0., 100., 20.), (0., 20., 100., 10.)]
    );
    assert_eq!(result.box_.height, AutoOr::LengthPercentage(30.));
}

#[test]
fn test_order_reorders_items() {
    let ordered = |flex_basis, order| {
        flex_item(
            ComputedValues {
                flex_basis: basis(flex_basis),
                height: px(10.),
                order,
                ..Default::default()
            },
            vec![],
        )
    };
    let container = row_container(Default::default(), vec![ordered(20., 2), ordered(30., 1)]);
    let result = layout_flex(container, page_wide(), 1000., None).unwrap();
    assert_eq!(
        geometry(&result.box_),
        vec![(0., 0., 30., 10.), (30., 0., 20., 10.)]
    );
}

#[test]
fn test_flex_shrink_weighs_by_base_size() {
    let shrink = |flex_shrink| {
        flex_item(
            ComputedValues {
                flex_basis: basis(60.),
                flex_shrink,
                height: px(10.),
                ..Default::default()
            },
            vec![],
        )
    };
    let container = row_container(Default::default(), vec![shrink(3.), shrink(1.)]);
    let result = layout_flex(container, page_wide(), 1000., None).unwrap();
    assert_eq!(
        geometry(&result.box_),
        vec![(0., 0., 45., 10.), (45., 0., 55., 10.)]
    );
}

/// A flex item without a definite flex basis, holding one block of the
/// given size.
fn content_sized_item(flex_basis: FlexBasis, width: f32, height: f32) -> LayoutBox {
    flex_item(
        ComputedValues {
            flex_basis,
            ..Default::default()
        },
        vec![block(
            ComputedValues {
                width: px(width),
                height: px(height),
                ..Default::default()
            },
            vec![],
        )],
    )
}

#[test]
fn test_content_based_flex_basis_in_rows() {
    let container = row_container(
        Default::default(),
        vec![
            content_sized_item(FlexBasis::Auto, 35., 10.),
            content_sized_item(FlexBasis::MinContent, 25., 10.),
        ],
    );
    let result = layout_flex(container, page_wide(), 1000., None).unwrap();
    assert_eq!(
        geometry(&result.box_),
        vec![(0., 0., 35., 10.), (35., 0., 25., 10.)]
    );
}

#[test]
fn test_content_based_flex_basis_in_columns() {
    let container = flex_container(
        ComputedValues {
            flex_direction: FlexDirection::Column,
            ..Default::default()
        },
        vec![
            content_sized_item(FlexBasis::Content, 10., 30.),
            content_sized_item(FlexBasis::MinContent, 10., 20.),
        ],
    );
    let result = layout_flex(container, page_wide(), 1000., None).unwrap();
    assert_eq!(
        geometry(&result.box_),
        vec![(0., 0., 100., 30.), (0., 30., 100., 20.)]
    );
    assert_eq!(result.box_.height, AutoOr::LengthPercentage(50.));
}
