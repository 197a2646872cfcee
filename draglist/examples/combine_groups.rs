// Example: combine-enabled lists merge instead of reordering inside the
// front two thirds of a target.
use draglist::{
    Axis, DimensionMap, DraggableId, DroppableKind, DroppableMeasurement, ImpactArgs, Point, Rect,
    Spacing, UserDirection, Viewport, build_draggable, build_droppable, get_drag_impact,
    get_lift_effect,
};

fn main() {
    let mut map = DimensionMap::new();
    map.insert_droppable(build_droppable(DroppableMeasurement {
        id: "folders".into(),
        kind: DroppableKind::from("folder"),
        axis: Axis::Vertical,
        is_enabled: true,
        is_combine_enabled: true,
        client_border_box: Rect::new(0.0, 100.0, 100.0, 0.0),
        margin: Spacing::NONE,
        border: Spacing::NONE,
        padding: Spacing::NONE,
        window_scroll: Point::ZERO,
        frame: None,
    }));
    for (i, name) in ["inbox", "archive", "trash"].iter().enumerate() {
        map.insert_draggable(build_draggable(
            DraggableId::from(*name),
            "folders".into(),
            i,
            Rect::new(i as f64 * 30.0, 100.0, i as f64 * 30.0 + 30.0, 0.0),
            Spacing::NONE,
            Spacing::NONE,
            Spacing::NONE,
            Point::ZERO,
        ));
    }

    let viewport = Viewport::new(Rect::new(0.0, 800.0, 600.0, 0.0), Point::ZERO, Point::ZERO);
    let dragged = map.draggable(&DraggableId::from("inbox")).unwrap();
    let home = map.droppable(&dragged.droppable_id).unwrap();
    let (lift_effect, mut impact) = get_lift_effect(dragged, home, &map);

    // Walk down over "archive" (30..60): combine first, reorder once past
    // the back third.
    for y in [20.0, 35.0, 45.0, 55.0] {
        impact = get_drag_impact(ImpactArgs {
            page_border_box_center: Point::new(50.0, y),
            draggable: dragged,
            dimensions: &map,
            previous_impact: &impact,
            viewport: &viewport,
            user_direction: UserDirection::default(),
            lift_effect: &lift_effect,
        });
        match (impact.combine_target(), impact.destination()) {
            (Some(combine), _) => println!("y={y:>4.0} -> combine with {}", combine.draggable_id),
            (None, Some(location)) => println!("y={y:>4.0} -> reorder to index {}", location.index),
            (None, None) => println!("y={y:>4.0} -> nowhere"),
        }
    }
}
