use polygon2d::{
    AABB,
    core::traits::FuzzyEq,
    polygon::{PolygonSource, Polygon},
};

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Holds a set of properties of a polygon for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct PolygonProperties {
    pub vertex_count: usize,
    pub area: f64,
    pub extents: AABB<f64>,
}

impl PolygonProperties {
    // positions equal epsilon
    pub const POS_EQ_EPS: f64 = 1e-5;
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-4;

    pub fn new(vertex_count: usize, area: f64, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            vertex_count,
            area,
            extents: AABB::new(min_x, min_y, max_x, max_y),
        }
    }

    pub fn from_polygon(polygon: &Polygon<f64>, invert_area: bool) -> Self {
        let area = if invert_area {
            -polygon.area()
        } else {
            polygon.area()
        };

        Self {
            vertex_count: polygon.vertex_count(),
            area,
            extents: polygon.aabb(),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.vertex_count == other.vertex_count
            && self.area.fuzzy_eq_eps(other.area, eps)
            && aabb_fuzzy_eq_eps(&self.extents, &other.extents, eps)
    }
}

/// Assert the positions of `polygon` match `expected` index by index.
pub fn assert_positions_eq(polygon: &Polygon<f64>, expected: &[(f64, f64)], eps: f64) {
    let expected_polygon: Polygon = Polygon::from_points(expected.iter().copied());
    assert!(
        polygon.fuzzy_eq_eps(&expected_polygon, eps),
        "positions do not match\n   got: {:?}\nexpected: {:?}",
        polygon
            .iter_vertexes()
            .map(|v| (v.x, v.y))
            .collect::<Vec<_>>(),
        expected
    );
}
