// Example: frame-loop auto scrolling against a scrollable droppable.
//
// An adapter would call observe() whenever drag state changes and tick()
// once per animation frame, applying the issued commands to the real
// containers. Here the "containers" are the dimension map itself.
use draglist::{
    AutoScrollArgs, AutoScrollConfig, Axis, DimensionMap, DraggableId, DroppableKind,
    DroppableMeasurement, FrameMeasurement, Point, Rect, ScrollRequest, ScrollSize, Spacing,
    Viewport, build_draggable, build_droppable, scroll_droppable,
};
use draglist_adapter::AutoScroller;

fn main() {
    let mut map = DimensionMap::new();
    map.insert_droppable(build_droppable(DroppableMeasurement {
        id: "list".into(),
        kind: DroppableKind::from("card"),
        axis: Axis::Vertical,
        is_enabled: true,
        is_combine_enabled: false,
        client_border_box: Rect::new(0.0, 100.0, 200.0, 0.0),
        margin: Spacing::NONE,
        border: Spacing::NONE,
        padding: Spacing::NONE,
        window_scroll: Point::ZERO,
        frame: Some(FrameMeasurement {
            client_border_box: Rect::new(0.0, 100.0, 200.0, 0.0),
            scroll_size: ScrollSize {
                width: 100.0,
                height: 600.0,
            },
            scroll: Point::ZERO,
            should_clip_subject: true,
        }),
    }));
    map.insert_draggable(build_draggable(
        DraggableId::from("card"),
        "list".into(),
        0,
        Rect::new(0.0, 100.0, 24.0, 0.0),
        Spacing::NONE,
        Spacing::NONE,
        Spacing::NONE,
        Point::ZERO,
    ));

    // The window itself cannot scroll; only the droppable frame can.
    let viewport = Viewport::new(Rect::new(0.0, 800.0, 600.0, 0.0), Point::ZERO, Point::ZERO);
    let config = AutoScrollConfig::default();
    let mut scroller = AutoScroller::new(config, |_| {}, |_, _| {});

    // Hold the pointer near the frame's bottom edge for a few frames.
    let selection = Point::new(50.0, 192.0);
    let list = draglist::DroppableId::from("list");
    for frame in 0..5u32 {
        scroller.observe(AutoScrollArgs {
            selection,
            dragged: map.draggable(&DraggableId::from("card")).unwrap(),
            viewport: &viewport,
            dimensions: &map,
            over: Some(&list),
            config: &config,
        });
        match scroller.tick() {
            Some(ScrollRequest::Droppable(id, delta)) => {
                let scrolled = {
                    let droppable = map.droppable(&id).unwrap();
                    let next = droppable.frame.as_ref().unwrap().scroll.current.add(delta);
                    scroll_droppable(droppable, next)
                };
                let offset = scrolled.frame.as_ref().unwrap().scroll.current;
                println!("frame {frame}: scrolled {} to y={:.1}", id, offset.y);
                map.insert_droppable(scrolled);
            }
            Some(ScrollRequest::Window(delta)) => println!("frame {frame}: window {delta:?}"),
            None => println!("frame {frame}: idle"),
        }
    }
}
