// Example: minimal impact computation while dragging through two lists.
use draglist::{
    Axis, DimensionMap, DragImpact, DraggableId, DroppableKind, DroppableMeasurement, ImpactArgs,
    Point, Rect, Spacing, UserDirection, Viewport, build_draggable, build_droppable,
    get_drag_impact, get_lift_effect,
};

fn main() {
    let mut map = DimensionMap::new();
    for (name, left) in [("todo", 0.0), ("done", 120.0)] {
        map.insert_droppable(build_droppable(DroppableMeasurement {
            id: name.into(),
            kind: DroppableKind::from("card"),
            axis: Axis::Vertical,
            is_enabled: true,
            is_combine_enabled: false,
            client_border_box: Rect::new(0.0, left + 100.0, 100.0, left),
            margin: Spacing::NONE,
            border: Spacing::NONE,
            padding: Spacing::NONE,
            window_scroll: Point::ZERO,
            frame: None,
        }));
    }
    for (i, name) in ["alpha", "beta", "gamma"].iter().enumerate() {
        map.insert_draggable(build_draggable(
            DraggableId::from(*name),
            "todo".into(),
            i,
            Rect::new(i as f64 * 20.0, 100.0, i as f64 * 20.0 + 20.0, 0.0),
            Spacing::NONE,
            Spacing::NONE,
            Spacing::NONE,
            Point::ZERO,
        ));
    }

    let viewport = Viewport::new(Rect::new(0.0, 800.0, 600.0, 0.0), Point::ZERO, Point::ZERO);
    let dragged = map.draggable(&DraggableId::from("alpha")).unwrap();
    let home = map.droppable(&dragged.droppable_id).unwrap();
    let (lift_effect, mut impact) = get_lift_effect(dragged, home, &map);

    // Drag alpha down its own list, then across into "done".
    let path = [
        Point::new(50.0, 10.0),
        Point::new(50.0, 35.0),
        Point::new(50.0, 55.0),
        Point::new(170.0, 55.0),
    ];
    let mut previous = Point::new(50.0, 10.0);
    for center in path {
        let direction = UserDirection::from_movement(previous, center, UserDirection::default());
        impact = get_drag_impact(ImpactArgs {
            page_border_box_center: center,
            draggable: dragged,
            dimensions: &map,
            previous_impact: &impact,
            viewport: &viewport,
            user_direction: direction,
            lift_effect: &lift_effect,
        });
        previous = center;
        report(center, &impact);
    }
}

fn report(center: Point, impact: &DragImpact) {
    match impact.destination() {
        Some(location) => println!(
            "at ({:>5.1}, {:>5.1}) -> {}[{}], {} displaced",
            center.x,
            center.y,
            location.droppable_id,
            location.index,
            impact.movement.displaced.len()
        ),
        None => println!("at ({:>5.1}, {:>5.1}) -> nowhere", center.x, center.y),
    }
}
