use polygon2d::polygon::{PolygonSource, Polygon};

/// Helper function to create json string from polygon to be used for debugging.
pub fn to_debug_json_str(polygon: &Polygon) -> String {
    format!(
        r#"
{{
    "vertexes": [
        {}
    ]
}}
"#,
        polygon
            .iter_vertexes()
            .map(|v| format!("[{}, {}]", v.x, v.y))
            .collect::<Vec<_>>()
            .join(",\n        ")
    )
}
