use polygon2d::{core::traits::Real, polygon::Polygon};

/// 4 x 4 forward wound square with a corner at the origin.
pub fn square_4() -> Polygon {
    Polygon::from_points([(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
}

/// Forward wound L shape with its reflex corner at (2, 2).
pub fn l_shape() -> Polygon {
    Polygon::from_points([
        (0.0, 0.0),
        (6.0, 0.0),
        (6.0, 2.0),
        (2.0, 2.0),
        (2.0, 6.0),
        (0.0, 6.0),
    ])
}

/// Forward wound U shape, the notch spans x in [2, 4] above y = 2.
pub fn u_notch() -> Polygon {
    Polygon::from_points([
        (0.0, 0.0),
        (6.0, 0.0),
        (6.0, 6.0),
        (4.0, 6.0),
        (4.0, 2.0),
        (2.0, 2.0),
        (2.0, 6.0),
        (0.0, 6.0),
    ])
}

/// Forward wound plus sign centered at the origin, arms 2 wide reaching out to 3.
pub fn plus_sign() -> Polygon {
    Polygon::from_points([
        (-1.0, -3.0),
        (1.0, -3.0),
        (1.0, -1.0),
        (3.0, -1.0),
        (3.0, 1.0),
        (1.0, 1.0),
        (1.0, 3.0),
        (-1.0, 3.0),
        (-1.0, 1.0),
        (-3.0, 1.0),
        (-3.0, -1.0),
        (-1.0, -1.0),
    ])
}

/// Forward wound house whose short roof ridge inverts when inset by 3.
pub fn house() -> Polygon {
    Polygon::from_points([
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 6.0),
        (5.5, 8.0),
        (4.5, 8.0),
        (0.0, 6.0),
    ])
}

/// Self intersecting bowtie crossing at (1, 1).
pub fn figure_eight() -> Polygon {
    Polygon::from_points([(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)])
}

/// Chain of three lobes, the crossing at (6, 1) is enclosed by the loop through (2, 1).
pub fn nested_loops() -> Polygon {
    Polygon::from_points([
        (0.0, 0.0),
        (4.0, 2.0),
        (8.0, 0.0),
        (8.0, 2.0),
        (4.0, 0.0),
        (0.0, 2.0),
    ])
}

/// Middle lobe with a twisted loop on each end, crossings at (6, 1) and (2, 1) are disjoint.
pub fn sibling_loops() -> Polygon {
    Polygon::from_points([
        (4.0, 0.0),
        (8.0, 2.0),
        (8.0, 0.0),
        (4.0, 2.0),
        (0.0, 0.0),
        (0.0, 2.0),
    ])
}

/// Five pointed star drawn by connecting every second point, each pair of non adjacent edges
/// crosses.
pub fn pentagram(radius: f64) -> Polygon {
    (0..5)
        .map(|i| {
            let angle = f64::pi() / 2.0 + f64::from(i) * 4.0 * f64::pi() / 5.0;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Forward wound regular polygon with `count` vertexes on a circle of `radius` at the origin.
pub fn regular_polygon(count: usize, radius: f64) -> Polygon {
    (0..count)
        .map(|i| {
            let angle = f64::tau() * i as f64 / count as f64;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}
