//! Behavior of a single layout pass as seen by a delegate author.

use multilayout_testing::prelude::*;
use multilayout_ui::*;

type Id = &'static str;

fn container(
    delegate: ScriptedDelegate<Id>,
    children: &[(Id, f32, f32, &MeasureLog)],
) -> CustomMultiChildLayout<Id, ScriptedDelegate<Id>> {
    children.iter().fold(
        CustomMultiChildLayout::with_delegate(delegate),
        |node, (id, width, height, log)| {
            node.with_child(LayoutChild::new(
                *id,
                FixedBox::new(*id, *width, *height).with_log(log),
            ))
        },
    )
}

fn geometry(node: &CustomMultiChildLayout<Id, ScriptedDelegate<Id>>, id: Id) -> ChildGeometry<Id> {
    geometry_of(node)
        .into_iter()
        .find(|child| child.id == Some(id))
        .expect("child present")
}

#[test]
fn three_children_loose_tight_and_unpositioned() {
    let log = MeasureLog::new();
    let delegate = ScriptedDelegate::new(1, |cx, size| {
        let a = cx.layout_child(&"A", Constraints::loose(size.width, size.height))?;
        cx.position_child(&"A", Point::ZERO)?;
        cx.layout_child(&"B", Constraints::tight(a.width, a.height))?;
        cx.position_child(&"B", Point::new(10.0, 10.0))?;
        cx.layout_child(&"C", Constraints::loose(size.width, size.height))?;
        Ok(())
    });
    let mut node = container(
        delegate,
        &[
            ("A", 40.0, 20.0, &log),
            ("B", 90.0, 90.0, &log),
            ("C", 15.0, 15.0, &log),
        ],
    );

    let size = node.layout(Constraints::tight(200.0, 100.0)).expect("layout");

    assert_eq!(size, Size::new(200.0, 100.0));
    let a = geometry(&node, "A");
    assert_eq!(a.size, Some(Size::new(40.0, 20.0)));
    assert_eq!(a.offset, Point::ZERO);
    let b = geometry(&node, "B");
    assert_eq!(b.size, Some(Size::new(40.0, 20.0)));
    assert_eq!(b.offset, Point::new(10.0, 10.0));
    let c = geometry(&node, "C");
    assert_eq!(c.size, Some(Size::new(15.0, 15.0)));
    assert_eq!(c.offset, Point::ZERO);
    assert_eq!(log.count(), 3);
}

#[test]
fn omitted_children_fail_the_pass_by_name() {
    if !PROTOCOL_CHECKS {
        return;
    }
    let log = MeasureLog::new();
    let delegate = ScriptedDelegate::new(1, |cx, size| {
        cx.layout_child(&"B", Constraints::loose(size.width, size.height))?;
        Ok(())
    });
    let mut node = container(
        delegate,
        &[("A", 1.0, 1.0, &log), ("B", 1.0, 1.0, &log), ("C", 1.0, 1.0, &log)],
    );

    let err = node
        .layout(Constraints::loose(50.0, 50.0))
        .expect_err("incomplete pass");

    match &err {
        LayoutError::IncompleteLayout { children } => {
            let ids: Vec<Id> = children.iter().map(|(id, _)| *id).collect();
            assert_eq!(ids, vec!["A", "C"]);
            assert!(children[0].1.contains("FixedBox(A"));
        }
        other => panic!("expected IncompleteLayout, got {other:?}"),
    }
    assert_eq!(err.ids(), vec![&"A", &"C"]);
    assert!(err.to_string().contains("children"));
}

#[test]
fn second_layout_of_a_child_fails_before_measuring_again() {
    if !PROTOCOL_CHECKS {
        return;
    }
    let log = MeasureLog::new();
    let delegate = ScriptedDelegate::new(1, |cx, size| {
        let loose = Constraints::loose(size.width, size.height);
        cx.layout_child(&"A", loose)?;
        cx.layout_child(&"A", loose)?;
        Ok(())
    });
    let mut node = container(delegate, &[("A", 10.0, 10.0, &log)]);

    let err = node
        .layout(Constraints::loose(50.0, 50.0))
        .expect_err("duplicate layout");

    assert!(matches!(err, LayoutError::DuplicateLayout { id: "A", .. }));
    assert_eq!(log.count(), 1);
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn unpositioned_child_returns_to_origin_on_every_pass() {
    let log = MeasureLog::new();
    let placing = ScriptedDelegate::new(1, |cx, size| {
        cx.layout_child(&"A", Constraints::loose(size.width, size.height))?;
        cx.position_child(&"A", Point::new(5.0, 7.0))
    });
    let mut node = container(placing, &[("A", 10.0, 10.0, &log)]);
    node.layout(Constraints::loose(50.0, 50.0)).expect("first pass");
    assert_eq!(geometry(&node, "A").offset, Point::new(5.0, 7.0));

    let not_placing = ScriptedDelegate::new(2, |cx, size| {
        cx.layout_child(&"A", Constraints::loose(size.width, size.height))?;
        Ok(())
    });
    node.set_delegate(DelegateHost::shared(not_placing));
    node.layout(Constraints::loose(50.0, 50.0)).expect("second pass");

    assert_eq!(geometry(&node, "A").offset, Point::ZERO);
}

#[test]
fn unknown_ids_are_rejected_for_layout_and_position() {
    let log = MeasureLog::new();
    let layout_unknown = ScriptedDelegate::new(1, |cx, size| {
        cx.layout_child(&"ghost", Constraints::loose(size.width, size.height))?;
        Ok(())
    });
    let mut node = container(layout_unknown, &[("A", 10.0, 10.0, &log)]);
    let err = node.layout(Constraints::loose(50.0, 50.0)).expect_err("unknown");
    assert!(matches!(
        err,
        LayoutError::UnknownChild {
            id: "ghost",
            operation: ChildOperation::Layout
        }
    ));
    assert!(err.to_string().contains("\"ghost\""));

    let position_unknown = ScriptedDelegate::new(2, |cx, size| {
        assert!(!cx.has_child(&"ghost"));
        cx.layout_child(&"A", Constraints::loose(size.width, size.height))?;
        cx.position_child(&"ghost", Point::new(1.0, 1.0))
    });
    node.set_delegate(DelegateHost::shared(position_unknown));
    let err = node.layout(Constraints::loose(50.0, 50.0)).expect_err("unknown");
    assert!(matches!(
        err,
        LayoutError::UnknownChild {
            id: "ghost",
            operation: ChildOperation::Position
        }
    ));
}

#[test]
fn malformed_constraints_are_blamed_on_the_delegate() {
    if !PROTOCOL_CHECKS {
        return;
    }
    let log = MeasureLog::new();
    let delegate = ScriptedDelegate::new(1, |cx, _size| {
        let inverted = Constraints {
            min_width: 30.0,
            max_width: 10.0,
            min_height: 0.0,
            max_height: 10.0,
        };
        cx.layout_child(&"A", inverted)?;
        Ok(())
    });
    let mut node = container(delegate, &[("A", 10.0, 10.0, &log)]);

    let err = node
        .layout(Constraints::loose(50.0, 50.0))
        .expect_err("invalid constraints");

    match err {
        LayoutError::InvalidConstraints { id, violation, .. } => {
            assert_eq!(id, "A");
            assert_eq!(
                violation,
                ConstraintsViolation::MaxWidthBelowMin {
                    min: 30.0,
                    max: 10.0
                }
            );
        }
        other => panic!("expected InvalidConstraints, got {other:?}"),
    }
    assert_eq!(log.count(), 0);
}

#[test]
fn equal_configurations_produce_identical_layouts() {
    fn diagonal() -> ScriptedDelegate<Id> {
        ScriptedDelegate::new(7, |cx, size| {
            let mut offset = Point::ZERO;
            for id in ["A", "B", "C"] {
                let child = cx.layout_child(&id, Constraints::loose(size.width / 2.0, size.height))?;
                cx.position_child(&id, offset)?;
                offset = offset + Point::new(child.width, child.height);
            }
            Ok(())
        })
    }

    let build = |delegate| {
        let log = MeasureLog::new();
        let mut node = container(
            delegate,
            &[("A", 30.0, 10.0, &log), ("B", 80.0, 20.0, &log), ("C", 5.0, 5.0, &log)],
        );
        node.layout(Constraints::loose(120.0, 90.0)).expect("layout");
        geometry_of(&node)
    };

    let first = diagonal();
    let second = diagonal();
    assert!(!second.should_relayout(&first));
    assert_eq!(build(first), build(second));
}

#[test]
fn resolved_size_always_lies_within_constraints() {
    let preferred = [
        Size::ZERO,
        Size::new(15.0, 300.0),
        Size::new(1_000.0, 1_000.0),
        Size::new(f32::INFINITY, 40.0),
    ];
    let bounds = [(0.0, 0.0), (0.0, 50.0), (20.0, 20.0), (10.0, 400.0), (5.0, f32::INFINITY)];

    for size in preferred {
        let node: CustomMultiChildLayout<Id, _> =
            CustomMultiChildLayout::with_delegate(ScriptedDelegate::new(0, |_, _| Ok(())).with_size(size));
        for (min_width, max_width) in bounds {
            for (min_height, max_height) in bounds {
                let constraints = Constraints {
                    min_width,
                    max_width,
                    min_height,
                    max_height,
                };
                let resolved = node.dry_layout(constraints);
                assert!(resolved.width >= min_width && resolved.width <= max_width);
                assert!(resolved.height >= min_height && resolved.height <= max_height);
            }
        }
    }
}

#[test]
fn paint_order_follows_siblings_not_layout_order() {
    let log = MeasureLog::new();
    let delegate = ScriptedDelegate::new(1, |cx, size| {
        let loose = Constraints::loose(size.width, size.height);
        for (index, id) in ["C", "B", "A"].into_iter().enumerate() {
            cx.layout_child(&id, loose)?;
            cx.position_child(&id, Point::new(index as f32 * 10.0, 0.0))?;
        }
        Ok(())
    });
    let mut node = container(
        delegate,
        &[("A", 10.0, 10.0, &log), ("B", 10.0, 10.0, &log), ("C", 10.0, 10.0, &log)],
    );
    node.layout(Constraints::loose(100.0, 100.0)).expect("layout");

    let painted: Vec<Id> = node
        .paint_order()
        .filter_map(|(child, _)| child.id().copied())
        .collect();
    assert_eq!(painted, vec!["A", "B", "C"]);
    assert_eq!(geometry(&node, "A").offset, Point::new(20.0, 0.0));
    // Measurement happened in the delegate's order.
    assert_eq!(log.count(), 3);
}

#[test]
fn engine_failures_surface_with_their_source() {
    let delegate = ScriptedDelegate::new(1, |cx, size| {
        cx.layout_child(&"broken", Constraints::loose(size.width, size.height))?;
        Ok(())
    });
    let mut node: CustomMultiChildLayout<Id, _> = CustomMultiChildLayout::with_delegate(delegate)
        .with_child(LayoutChild::new("broken", FailingBox::new("engine unavailable")));

    let err = node
        .layout(Constraints::loose(10.0, 10.0))
        .expect_err("engine failure");

    assert!(matches!(err, LayoutError::ChildFailed { id: "broken", .. }));
    let source = std::error::Error::source(&err).expect("source");
    assert_eq!(source.to_string(), "engine unavailable");
}

#[test]
fn a_failed_pass_does_not_poison_the_next_one() {
    let log = MeasureLog::new();
    let forgetful = ScriptedDelegate::new(1, |cx, _size| {
        cx.position_child(&"missing", Point::ZERO)
    });
    let mut node = container(forgetful, &[("A", 10.0, 10.0, &log)]);
    assert!(node.layout(Constraints::loose(50.0, 50.0)).is_err());
    assert!(!node.host().is_in_pass());

    let fixed = ScriptedDelegate::new(2, |cx, size| {
        cx.layout_child(&"A", Constraints::loose(size.width, size.height))?;
        Ok(())
    });
    node.set_delegate(DelegateHost::shared(fixed));
    let size = node.layout(Constraints::loose(50.0, 50.0)).expect("recovered");

    assert_eq!(size, Size::new(50.0, 50.0));
    assert_eq!(geometry(&node, "A").size, Some(Size::new(10.0, 10.0)));
}
