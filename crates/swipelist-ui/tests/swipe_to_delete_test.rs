//! Swipe-to-delete through the full screen: touch events in, store and
//! adapter changes out.

use swipelist_foundation::input::gestures::is_right_swipe;
use swipelist_testing::{labelled_store, AdapterEvent, ListRobot};
use swipelist_ui::{ListScreenOptions, Point, PointerEvent, SwipeState};

fn five_items() -> ListRobot {
    ListRobot::launch_with(
        labelled_store(&["A", "B", "C", "D", "E"]),
        ListScreenOptions::default(),
        1,
    )
}

#[test]
fn right_swipe_over_c_removes_c() {
    let mut robot = five_items();
    let over_c = robot.row_center(2).expect("row for C");

    let removed = robot.swipe(over_c, 40.0, 5.0);

    assert_eq!(removed.map(|i| i.short_label().to_owned()), Some("C".into()));
    assert_eq!(robot.labels(), vec!["A", "B", "D", "E"]);
    assert_eq!(
        robot.adapter().events(),
        &[AdapterEvent::DataSetChanged(5), AdapterEvent::Removed(2)]
    );
    robot.assert_rendered_matches_store();
    assert_eq!(robot.screen().gesture_state(), SwipeState::Idle);
}

#[test]
fn raw_event_sequence_removes_item_under_down_point() {
    let mut robot = five_items();
    let over_c = robot.row_center(2).expect("row for C");

    assert!(robot
        .send(PointerEvent::down(over_c.x, over_c.y))
        .is_none());
    assert_eq!(robot.screen().gesture_state(), SwipeState::Tracking);
    // Finger drifts onto D before release; the origin still decides.
    assert!(robot
        .send(PointerEvent::move_to(over_c.x + 80.0, over_c.y + 40.0))
        .is_none());
    let removed = robot.send(PointerEvent::up(over_c.x + 80.0, over_c.y + 40.0));

    assert_eq!(removed.map(|i| i.short_label().to_owned()), Some("C".into()));
}

#[test]
fn left_and_vertical_drags_remove_nothing() {
    let mut robot = five_items();
    let over_b = robot.row_center(1).expect("row for B");

    assert!(robot.swipe(over_b, -60.0, 0.0).is_none());
    assert!(robot.swipe(over_b, 10.0, 50.0).is_none());
    assert!(robot.swipe(over_b, 30.0, -35.0).is_none());

    assert_eq!(robot.labels(), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(robot.adapter().events(), &[AdapterEvent::DataSetChanged(5)]);
}

#[test]
fn cancelled_swipe_removes_nothing() {
    let mut robot = five_items();
    let over_a = robot.row_center(0).expect("row for A");

    robot.cancelled_swipe(over_a, 100.0, 0.0);
    assert_eq!(robot.screen().gesture_state(), SwipeState::Idle);

    // A stray up after the cancel must not act on the discarded gesture.
    assert!(robot.send(PointerEvent::up(over_a.x + 100.0, over_a.y)).is_none());
    assert_eq!(robot.labels().len(), 5);
}

#[test]
fn swipe_below_last_row_is_a_noop() {
    let mut robot = five_items();
    let below = robot.row_center(4).expect("row for E") + Point::new(0.0, 200.0);

    assert!(robot.swipe(below, 80.0, 0.0).is_none());
    assert_eq!(robot.labels().len(), 5);
    assert_eq!(robot.adapter().events().len(), 1);
}

#[test]
fn swipe_starting_on_divider_is_a_noop() {
    let mut robot = five_items();
    let options = robot.screen().options().clone();
    let on_divider = Point::new(100.0, options.row_height + options.divider_height / 2.0);

    assert!(robot.swipe(on_divider, 80.0, 0.0).is_none());
    assert_eq!(robot.labels().len(), 5);
}

#[test]
fn back_and_forth_swipe_counts_net_motion() {
    let mut robot = five_items();
    let over_d = robot.row_center(3).expect("row for D");

    let path = [
        over_d + Point::new(-50.0, 0.0),
        over_d + Point::new(20.0, 2.0),
        over_d + Point::new(-10.0, 2.0),
        over_d + Point::new(15.0, 3.0),
    ];
    let removed = robot.drag_path(over_d, &path);

    assert_eq!(removed.map(|i| i.short_label().to_owned()), Some("D".into()));
}

#[test]
fn swiping_last_row_again_while_it_animates_out_clamps_to_last_item() {
    let mut robot = ListRobot::launch_with(
        labelled_store(&["A", "B", "C"]),
        ListScreenOptions::default().with_removal_animation_frames(10),
        1,
    );
    let over_c = robot.row_center(2).expect("row for C");

    robot.swipe(over_c, 60.0, 0.0);
    assert!(robot.screen().view().is_animating());

    // C's row is still on screen and still reports position 2, one past
    // the end of the two remaining items.
    assert_eq!(robot.screen().view().item_position_at(over_c), Some(2));
    let removed = robot.swipe(over_c, 60.0, 0.0);

    assert_eq!(removed.map(|i| i.short_label().to_owned()), Some("B".into()));
    assert_eq!(robot.labels(), vec!["A"]);
    assert_eq!(
        robot.adapter().events(),
        &[
            AdapterEvent::DataSetChanged(3),
            AdapterEvent::Removed(2),
            AdapterEvent::Removed(1),
        ]
    );
    robot.assert_rendered_matches_store();

    robot.settle();
    assert_eq!(robot.screen().view().row_count(), 1);
}

#[test]
fn removing_last_remaining_item_leaves_empty_list() {
    let mut robot = ListRobot::launch_with(labelled_store(&["A"]), ListScreenOptions::default(), 1);
    let over_a = robot.row_center(0).expect("row for A");

    assert!(robot.swipe(over_a, 60.0, 0.0).is_some());
    assert!(robot.screen().items().is_empty());

    // The animating row is hit again, but there is nothing left to remove.
    assert!(robot.swipe(over_a, 60.0, 0.0).is_none());
    robot.settle();
    assert!(robot.screen().items().is_empty());
    assert_eq!(robot.screen().view().row_count(), 0);
    robot.assert_rendered_matches_store();
}

#[test]
fn decision_matches_net_displacement_for_many_paths() {
    let deltas = [
        (-20.0f32, 0.0f32),
        (0.0, 15.0),
        (12.0, -3.0),
        (25.0, 25.0),
        (-7.0, -9.0),
        (40.0, 1.0),
    ];
    for &(ax, ay) in &deltas {
        for &(bx, by) in &deltas {
            for &(cx, cy) in &deltas {
                let mut robot = five_items();
                let start = robot.row_center(1).expect("row for B");
                let p1 = start + Point::new(ax, ay);
                let p2 = p1 + Point::new(bx, by);
                let p3 = p2 + Point::new(cx, cy);
                let net = p3 - start;

                let removed = robot.drag_path(start, &[p1, p2, p3]);

                assert_eq!(
                    removed.is_some(),
                    is_right_swipe(net.x, net.y),
                    "net displacement {net:?}"
                );
                if removed.is_some() {
                    assert_eq!(robot.labels(), vec!["A", "C", "D", "E"]);
                }
                robot.assert_rendered_matches_store();
            }
        }
    }
}
