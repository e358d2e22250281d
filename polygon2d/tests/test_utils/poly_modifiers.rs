use polygon2d::polygon::{PolygonSource, PolygonSourceMut, Polygon};

/// Cycles all the vertex index positions forward by `n`. E.g. index 0 becomes 1, last index becomes
/// 0, etc.
pub fn cycle_start_index_forward(input: &Polygon<f64>, n: usize) -> Polygon<f64> {
    assert!(n > 0, "cycling forward by 0 just returns the same polygon");
    assert!(
        n < input.len(),
        "cycling forward by more than the polygon length is unnecessary"
    );
    input
        .iter_vertexes()
        .cycle()
        .skip(n)
        .take(input.len())
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct ModifiedPolygonState {
    pub inverted_direction: bool,
    pub cycle_position: usize,
}

impl ModifiedPolygonState {
    pub fn new(inverted_direction: bool, cycle_position: usize) -> Self {
        Self {
            inverted_direction,
            cycle_position,
        }
    }
}

/// Set of polygons equivalent to an input polygon: every start index rotation, optionally also
/// with the vertex order reversed.
#[derive(Debug, Clone)]
pub struct ModifiedPolygonSet<'a> {
    pub input: &'a Polygon<f64>,
    pub invert_direction: bool,
    pub cycle_index_positions: bool,
}

impl<'a> ModifiedPolygonSet<'a> {
    pub fn new(input: &'a Polygon<f64>, invert_direction: bool, cycle_index_positions: bool) -> Self {
        Self {
            input,
            invert_direction,
            cycle_index_positions,
        }
    }

    pub fn accept_closure<F>(&self, visitor: &mut F)
    where
        F: FnMut(Polygon<f64>, ModifiedPolygonState),
    {
        visitor(self.input.clone(), ModifiedPolygonState::new(false, 0));
        let inverted = {
            let mut polygon = self.input.clone();
            polygon.invert_direction_mut();
            polygon
        };

        if self.invert_direction {
            visitor(inverted.clone(), ModifiedPolygonState::new(true, 0));
        }

        if self.cycle_index_positions {
            for i in 1..self.input.len() {
                let cycled = cycle_start_index_forward(self.input, i);
                visitor(cycled, ModifiedPolygonState::new(false, i));
            }

            if self.invert_direction {
                for i in 1..self.input.len() {
                    let cycled = cycle_start_index_forward(&inverted, i);
                    visitor(cycled, ModifiedPolygonState::new(true, i));
                }
            }
        }
    }
}
