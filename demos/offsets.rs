use polygon2d::{
    polygon,
    polygon::{OffsetOptions, PolygonSource, VertexTag},
};

fn main() {
    env_logger::init();

    let square = polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    for delta in [1.0, -1.0, -2.5] {
        match square.offset(delta) {
            Ok(result) => println!(
                "square offset by {delta}: {} vertexes, area {}",
                result.vertex_count(),
                result.area()
            ),
            Err(e) => println!("square offset by {delta} failed: {e}"),
        }
    }

    // Inset by 3 the short roof ridge inverts and gets replaced by a single corner
    let house = polygon![
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 6.0),
        (5.5, 8.0),
        (4.5, 8.0),
        (0.0, 6.0),
    ];
    let result = house
        .offset_opt(-3.0, &OffsetOptions::new())
        .expect("house inset should succeed");
    println!("house repaired corners: {:?}", result.repaired_indexes);
    for v in result.polygon.iter_vertexes() {
        let note = match v.tag {
            Some(VertexTag::RepairedCorner) => " (repaired)",
            Some(VertexTag::SharpCorner { .. }) => " (sharp)",
            _ => "",
        };
        println!("  ({:.4}, {:.4}){note}", v.x, v.y);
    }

    let thin = polygon![(0.0, 0.0), (10.0, 0.0), (10.0, 2.0), (0.0, 2.0)];
    if let Err(e) = thin.offset(-1.5) {
        log::warn!("thin strip inset failed: {e}");
    }
}
