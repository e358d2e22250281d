/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing the polygon macro. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a polygon with the vertexes given as a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use polygon2d::polygon;
/// # use polygon2d::polygon::*;
/// let triangle = polygon![(0.0, 0.0), (2.0, 0.0), (1.0, 1.0)];
/// assert_eq!(triangle.vertex_count(), 3);
/// assert_eq!(triangle[2], PolyVertex::new(1.0, 1.0));
/// assert_eq!(triangle.winding(), Winding::Forward);
/// ```
#[macro_export]
macro_rules! polygon {
    ($( $x:expr ),* $(,)?) => {
        {
            use $crate::polygon::*;
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut polygon = Polygon::with_capacity(size);
            $(
                polygon.add($x.0, $x.1);
            )*
            polygon
        }
    };
}
