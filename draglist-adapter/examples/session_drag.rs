// Example: a DragSession driving a full pointer drag, ending in a drop.
use draglist::{
    Axis, DimensionMap, DraggableId, DroppableKind, DroppableMeasurement, Point, Rect, Spacing,
    Viewport, build_draggable, build_droppable,
};
use draglist_adapter::DragSession;

fn main() {
    let mut map = DimensionMap::new();
    for (name, left) in [("backlog", 0.0), ("sprint", 120.0)] {
        map.insert_droppable(build_droppable(DroppableMeasurement {
            id: name.into(),
            kind: DroppableKind::from("ticket"),
            axis: Axis::Vertical,
            is_enabled: true,
            is_combine_enabled: false,
            client_border_box: Rect::new(0.0, left + 100.0, 120.0, left),
            margin: Spacing::NONE,
            border: Spacing::NONE,
            padding: Spacing::NONE,
            window_scroll: Point::ZERO,
            frame: None,
        }));
    }
    for (i, name) in ["one", "two", "three"].iter().enumerate() {
        map.insert_draggable(build_draggable(
            DraggableId::from(*name),
            "backlog".into(),
            i,
            Rect::new(i as f64 * 24.0, 100.0, i as f64 * 24.0 + 24.0, 0.0),
            Spacing::NONE,
            Spacing::NONE,
            Spacing::NONE,
            Point::ZERO,
        ));
    }

    let viewport = Viewport::new(Rect::new(0.0, 800.0, 600.0, 0.0), Point::ZERO, Point::ZERO);
    let mut session = DragSession::new(map, viewport);

    session.lift(&DraggableId::from("one")).unwrap();
    for center in [
        Point::new(50.0, 40.0),
        Point::new(110.0, 40.0),
        Point::new(170.0, 20.0),
    ] {
        let impact = session.move_to(center).unwrap();
        match impact.destination() {
            Some(location) => println!(
                "({:>5.1}, {:>4.1}) over {}[{}]",
                center.x, center.y, location.droppable_id, location.index
            ),
            None => println!("({:>5.1}, {:>4.1}) over nothing", center.x, center.y),
        }
    }

    let outcome = session.complete().unwrap();
    println!(
        "dropped: {}[{}] -> {:?}",
        outcome.source.droppable_id,
        outcome.source.index,
        outcome
            .destination
            .map(|location| format!("{}[{}]", location.droppable_id, location.index))
    );
}
