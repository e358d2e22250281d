use polygon2d::{
    core::math::Vector2,
    polygon,
    polygon::PolygonSource,
    shape::Shape,
};

fn main() {
    env_logger::init();

    // U shape with a notch between x = 2 and x = 4
    let u = polygon![
        (0.0, 0.0),
        (6.0, 0.0),
        (6.0, 6.0),
        (4.0, 6.0),
        (4.0, 2.0),
        (2.0, 2.0),
        (2.0, 6.0),
        (0.0, 6.0),
    ];

    for (x, y) in [(1.0, 5.0), (3.0, 4.0), (3.0, 1.0)] {
        let point = Vector2::new(x, y);
        println!(
            "({x}, {y}): inside = {}, winding number = {}",
            u.contains_point(point),
            u.winding_number(point)
        );
    }

    // All four corners sit in the arms but the edges cross the notch
    let bridge = polygon![(1.0, 4.0), (5.0, 4.0), (5.0, 5.0), (1.0, 5.0)];
    assert!(!u.contains_polygon(&bridge), "Bridge crosses the notch");

    let shapes = [
        ("small circle", Shape::circle((1.0, 1.0), 0.5)),
        ("large circle", Shape::circle((1.0, 1.0), 1.5)),
        ("base rect", Shape::rect(0.5, 0.5, 5.5, 1.5)),
        ("bridge", Shape::Polygon(bridge)),
    ];
    for (name, shape) in shapes.iter() {
        println!("{name}: contained = {}", u.contains(shape));
    }
}
