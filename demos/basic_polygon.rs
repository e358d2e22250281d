use polygon2d::{
    core::math::Vector2,
    polygon,
    polygon::{Polygon, PolygonSource, PolygonSourceMut, Winding},
};

fn main() {
    construction();
    circular_access();
    cleanup();
}

fn construction() {
    println!("Testing polygon construction...");

    // From a list of (x, y) tuples
    let triangle = polygon![(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)];
    assert_eq!(triangle.vertex_count(), 3, "Triangle should have 3 vertices");

    // From anything point like
    let same: Polygon = Polygon::from_points([
        Vector2::new(0.0, 0.0),
        Vector2::new(4.0, 0.0),
        Vector2::new(2.0, 3.0),
    ]);
    assert_eq!(triangle, same, "Construction forms should agree");

    // Signed area decides the winding
    assert_eq!(triangle.area(), 6.0, "Triangle area should be 6");
    assert_eq!(triangle.winding(), Winding::Forward);

    let mut reversed = triangle.clone();
    reversed.invert_direction_mut();
    assert_eq!(reversed.area(), -6.0, "Reversed area should be negative");
    reversed.rewind(Winding::Forward);
    assert_eq!(reversed.winding(), Winding::Forward);

    println!("Polygon construction completed successfully!");
}

fn circular_access() {
    println!("Testing circular vertex access...");

    let square = polygon![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

    // Indexes wrap in both directions
    assert_eq!(square.point_at(4), square.point_at(0));
    assert_eq!(square.point_at(-1), Some(square[3]));

    // The closing edge runs from the last vertex to the first
    let edges: Vec<_> = square.iter_edges().collect();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[3], (square[3], square[0]));

    let closest = square.closest_point(Vector2::new(0.5, -2.0)).unwrap();
    println!(
        "Closest boundary point to (0.5, -2) is {:?} on edge {} at distance {}",
        closest.point, closest.edge_start_index, closest.distance
    );

    println!("Circular vertex access completed successfully!");
}

fn cleanup() {
    println!("Testing polygon cleanup...");

    let noisy = polygon![
        (0.0, 0.0),
        (0.0, 0.0),
        (5.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
    ];

    let without_repeats = noisy.remove_repeat_pos(1e-5).unwrap();
    assert_eq!(without_repeats.vertex_count(), 5);

    let simplified = without_repeats.simplify();
    assert_eq!(
        simplified.vertex_count(),
        4,
        "Collinear vertex at (5, 0) should be removed"
    );

    println!("Polygon cleanup completed successfully!");
}
