use polygon2d::{
    core::{math::Vector2, traits::Real},
    polygon::{Polygon, PolygonSourceMut},
};

/// Star with `vertex_count` vertexes alternating between an outer and inner radius, every other
/// corner is reflex.
pub fn star<T>(vertex_count: usize) -> Polygon<T>
where
    T: Real,
{
    let outer = T::from(40.0).unwrap();
    let inner = T::from(30.0).unwrap();
    let center = Vector2::zero();

    let mut result = Polygon::new();
    for i in 0..vertex_count {
        let angle = T::from(i).unwrap() * T::tau() / T::from(vertex_count).unwrap();
        let radius = if i % 2 == 0 { outer } else { inner };
        let point = center + Vector2::new(radius * angle.cos(), radius * angle.sin());
        result.add(point.x, point.y);
    }

    result
}

/// Zig zag band that crosses itself `crossings` times, each crossing forms a loop.
pub fn twisted_band<T>(crossings: usize) -> Polygon<T>
where
    T: Real,
{
    let two = T::two();
    let mut result = Polygon::new();
    for i in 0..=crossings {
        let x = T::from(i).unwrap() * two;
        let y = if i % 2 == 0 { T::zero() } else { two };
        result.add(x, y);
    }

    for i in (0..=crossings).rev() {
        let x = T::from(i).unwrap() * two;
        let y = if i % 2 == 0 { two } else { T::zero() };
        result.add(x, y);
    }

    result
}
