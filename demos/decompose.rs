use polygon2d::{
    polygon,
    polygon::{DecomposeOptions, PolygonSource, TraceEvent},
};

fn main() {
    env_logger::init();

    let figure_eight = polygon![(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)];
    println!("figure eight self intersects:");
    for intr in figure_eight.self_intersects() {
        println!("  {:?} s = {} b = {}", intr.point, intr.s, intr.b);
    }

    let result = figure_eight.decompose().expect("figure eight decomposes");
    for region in result.regions.iter() {
        println!(
            "  {:?} region at depth {} with {} vertexes",
            region.kind,
            region.depth,
            region.polygon.vertex_count()
        );
    }

    // Two loops on opposite ends are not nested, the second crossing cannot be placed
    let siblings = polygon![
        (4.0, 0.0),
        (8.0, 2.0),
        (8.0, 0.0),
        (4.0, 2.0),
        (0.0, 0.0),
        (0.0, 2.0),
    ];
    let result = siblings.decompose().expect("sibling loops decompose");
    for event in result.trace.iter() {
        if let TraceEvent::Unresolved { node, reason } = event {
            println!("node {node} unresolved: {reason:?}");
        }
    }

    let strict = DecomposeOptions {
        fail_on_unresolved: true,
        ..DecomposeOptions::new()
    };
    match siblings.decompose_opt(&strict) {
        Ok(_) => println!("strict decompose succeeded"),
        Err(e) => println!("strict decompose failed: {e}"),
    }
}
