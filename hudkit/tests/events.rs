use hudkit::{
    EventResult, Frame, InputEvent, Label, MonospaceMeasurer, MouseButton, Rect, RecordingCanvas,
    Scrollbar, Widget, WidgetTree,
};

fn scrollbar_at(x: i32, total: usize) -> Scrollbar {
    let mut bar = Scrollbar::new();
    bar.set_bounds(Rect::new(x, 0, 22, 164));
    bar.set_total_rows(total);
    bar
}

fn down(x: i32, y: i32) -> InputEvent {
    InputEvent::MouseDown {
        x,
        y,
        button: MouseButton::Left,
    }
}

fn up(x: i32, y: i32) -> InputEvent {
    InputEvent::MouseUp {
        x,
        y,
        button: MouseButton::Left,
    }
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_click_reaches_widget_under_cursor() {
    let mut tree = WidgetTree::new()
        .child("left", scrollbar_at(0, 20))
        .child("right", scrollbar_at(100, 20));

    // Below the right scrollbar's thumb
    assert_eq!(tree.dispatch(&down(110, 120)), EventResult::Consumed);
    assert_eq!(tree.get::<Scrollbar>("right").unwrap().offset(), 8);
    assert_eq!(tree.get::<Scrollbar>("left").unwrap().offset(), 0);

    // Below the left scrollbar's thumb
    assert_eq!(tree.dispatch(&down(10, 120)), EventResult::Consumed);
    assert_eq!(tree.get::<Scrollbar>("left").unwrap().offset(), 8);
}

#[test]
fn test_click_outside_everything_is_ignored() {
    let mut tree = WidgetTree::new().child("bar", scrollbar_at(100, 20));
    assert_eq!(tree.dispatch(&down(50, 50)), EventResult::Ignored);
    assert_eq!(tree.get::<Scrollbar>("bar").unwrap().offset(), 0);
}

#[test]
fn test_wheel_goes_to_top_most_widget_only() {
    let mut tree = WidgetTree::new()
        .child("bottom", scrollbar_at(0, 20))
        .child("top", scrollbar_at(100, 20));

    assert_eq!(tree.dispatch(&InputEvent::Wheel { delta: -3.0 }), EventResult::Consumed);
    assert_eq!(tree.get::<Scrollbar>("top").unwrap().offset(), 3);
    assert_eq!(tree.get::<Scrollbar>("bottom").unwrap().offset(), 0);
}

#[test]
fn test_drag_through_tree() {
    let mut tree = WidgetTree::new().child("bar", scrollbar_at(0, 20));

    assert_eq!(tree.dispatch(&down(10, 10)), EventResult::StartDrag);
    assert_eq!(
        tree.dispatch(&InputEvent::MouseMove { x: 300, y: 50 }),
        EventResult::Consumed
    );
    assert_eq!(tree.get::<Scrollbar>("bar").unwrap().offset(), 5);

    assert_eq!(tree.dispatch(&up(300, 50)), EventResult::Consumed);
    assert!(!tree.get::<Scrollbar>("bar").unwrap().region().is_dragging());
    assert_eq!(
        tree.dispatch(&InputEvent::MouseMove { x: 300, y: 150 }),
        EventResult::Ignored
    );
}

#[test]
fn test_release_reaches_every_widget() {
    let mut tree = WidgetTree::new()
        .child("bottom", scrollbar_at(0, 20))
        .child("top", scrollbar_at(100, 20));

    tree.dispatch(&down(10, 10));
    assert!(tree.get::<Scrollbar>("bottom").unwrap().region().is_dragging());

    // "top" consumes every release, "bottom" must still see it
    assert_eq!(tree.dispatch(&up(10, 10)), EventResult::Consumed);
    assert!(!tree.get::<Scrollbar>("bottom").unwrap().region().is_dragging());
}

#[test]
fn test_labels_ignore_input() {
    let m = MonospaceMeasurer::default();
    let mut tree = WidgetTree::new().child("title", Label::new(&m).text("Players", &m));

    assert_eq!(tree.dispatch(&down(1, 1)), EventResult::Ignored);
    assert_eq!(tree.dispatch(&up(1, 1)), EventResult::Ignored);
    assert_eq!(tree.dispatch(&InputEvent::Wheel { delta: 1.0 }), EventResult::Ignored);
}

// ============================================================================
// Tree management
// ============================================================================

#[test]
fn test_push_replaces_same_id() {
    let mut tree = WidgetTree::new();
    tree.push("bar", scrollbar_at(0, 20));
    tree.push("bar", scrollbar_at(50, 30));

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get::<Scrollbar>("bar").unwrap().bounds().x, 50);
}

#[test]
fn test_get_with_wrong_type_is_none() {
    let tree = WidgetTree::new().child("bar", scrollbar_at(0, 20));
    assert!(tree.get::<Label>("bar").is_none());
    assert!(tree.get::<Scrollbar>("missing").is_none());
}

#[test]
fn test_remove() {
    let mut tree = WidgetTree::new()
        .child("a", scrollbar_at(0, 20))
        .child("b", scrollbar_at(50, 20));

    assert!(tree.remove("a").is_some());
    assert!(tree.remove("a").is_none());
    assert_eq!(tree.ids().collect::<Vec<_>>(), vec!["b"]);
}

#[test]
fn test_owner_updates_rows_through_tree() {
    let mut tree = WidgetTree::new().child("bar", scrollbar_at(0, 100));
    tree.get_mut::<Scrollbar>("bar").unwrap().region_mut().scroll_to(90);

    tree.get_mut::<Scrollbar>("bar").unwrap().set_total_rows(10);
    assert_eq!(tree.get::<Scrollbar>("bar").unwrap().offset(), 2);
}

#[test]
fn test_render_in_paint_order() {
    let m = MonospaceMeasurer::new(8, 16);
    let tree = WidgetTree::new()
        .child("bar", scrollbar_at(0, 0))
        .child("title", Label::new(&m).text("Hi", &m));

    let mut canvas = RecordingCanvas::new();
    tree.render(&mut Frame::new(&mut canvas, (0, 0)));

    assert_eq!(canvas.len(), 2);
    assert_eq!(canvas.rects().len(), 1);
    assert!(matches!(
        canvas.commands()[1],
        hudkit::DrawCommand::Text { ref text, .. } if text == "Hi"
    ));
}

#[test]
fn test_nested_trees_and_resize() {
    use hudkit::{Anchor, Placement};

    let inner = WidgetTree::new().child(
        "bar",
        Scrollbar::new()
            .placement(Placement::new(Anchor::End, Anchor::Start))
            .height(164),
    );
    let mut outer = WidgetTree::new().child("panel", inner);

    outer.resize(400, 300);
    assert_eq!(outer.window_size(), (400, 300));
    let inner = outer.get::<WidgetTree>("panel").unwrap();
    assert_eq!(inner.get::<Scrollbar>("bar").unwrap().bounds(), Rect::new(378, 0, 22, 164));

    // Events pass through the nested tree
    outer
        .get_mut::<WidgetTree>("panel")
        .unwrap()
        .get_mut::<Scrollbar>("bar")
        .unwrap()
        .set_total_rows(20);
    assert_eq!(outer.dispatch(&down(380, 120)), EventResult::Consumed);
    let bar = outer
        .get::<WidgetTree>("panel")
        .unwrap()
        .get::<Scrollbar>("bar")
        .unwrap();
    assert_eq!(bar.offset(), 8);
}
