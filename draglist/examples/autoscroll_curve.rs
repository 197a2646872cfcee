// Example: the auto-scroll speed ramp near a container edge.
use draglist::{AutoScrollConfig, Point, Rect, required_scroll};

fn main() {
    let config = AutoScrollConfig::default();
    let window = Rect::new(0.0, 1000.0, 1000.0, 0.0);
    let item = Point::new(100.0, 20.0);

    let thresholds = config.thresholds(window.height());
    println!(
        "start_from={}px max_speed_at={}px max={}px/frame",
        thresholds.start_scrolling_from, thresholds.max_scroll_value_at, config.max_pixel_speed
    );

    for distance in [300, 250, 200, 150, 100, 50, 25, 0] {
        let center = Point::new(500.0, window.bottom - distance as f64);
        let speed = required_scroll(&config, window, center, item)
            .map(|scroll| scroll.y)
            .unwrap_or(0.0);
        println!("{distance:>4}px from the bottom edge -> {speed:>6.2}px/frame");
    }
}
