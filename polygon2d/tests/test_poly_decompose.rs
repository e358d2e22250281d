mod test_utils;

use polygon2d::{
    error::DecomposeError,
    polygon,
    polygon::{
        DecomposeOptions, PolygonSource, RegionKind, TraceEvent, UnresolvedReason, VertexTag,
    },
};
use test_utils::{
    assert_positions_eq, figure_eight, l_shape, nested_loops, pentagram, sibling_loops,
    to_debug_json_str,
};

#[test]
fn simple_polygon_is_a_single_kept_region() {
    let polygon = l_shape();
    let result = polygon.decompose().unwrap();
    assert_eq!(result.regions.len(), 1);
    assert!(result.unresolved.is_empty());

    let region = &result.regions[0];
    assert_eq!(region.kind, RegionKind::Kept);
    assert_eq!(region.depth, 0);
    assert_eq!(region.polygon, polygon);
    assert_eq!(
        result.trace.events,
        vec![TraceEvent::RegionEmitted {
            node: 0,
            kind: RegionKind::Kept,
            vertex_count: 6
        }]
    );
}

#[test]
fn figure_eight_splits_into_two_lobes() {
    let result = figure_eight().decompose().unwrap();
    assert!(result.unresolved.is_empty());
    assert_eq!(result.regions.len(), 2);

    // child lobe is emitted before the root
    let lobe = &result.regions[0];
    assert_eq!(lobe.kind, RegionKind::Excised);
    assert_eq!(lobe.depth, 1);
    assert_positions_eq(&lobe.polygon, &[(1.0, 1.0), (2.0, 2.0), (2.0, 0.0)], 1e-9);
    assert_eq!(lobe.polygon[0].tag, Some(VertexTag::SelfIntersection));

    let root = &result.regions[1];
    assert_eq!(root.kind, RegionKind::Kept);
    assert_eq!(root.depth, 0);
    assert_positions_eq(&root.polygon, &[(0.0, 0.0), (1.0, 1.0), (0.0, 2.0)], 1e-9);

    assert_eq!(
        result.trace.events,
        vec![
            TraceEvent::Attached { node: 1, parent: 0 },
            TraceEvent::RegionEmitted {
                node: 1,
                kind: RegionKind::Excised,
                vertex_count: 3
            },
            TraceEvent::RegionEmitted {
                node: 0,
                kind: RegionKind::Kept,
                vertex_count: 3
            },
        ]
    );

    for region in result.regions.iter() {
        assert!(!region.polygon.has_self_intersects());
    }
}

#[test]
fn nested_loops_alternate_kinds() {
    let result = nested_loops().decompose().unwrap();
    assert!(result.unresolved.is_empty());

    let summary: Vec<_> = result
        .regions
        .iter()
        .map(|r| (r.kind, r.depth, r.polygon.vertex_count()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (RegionKind::Kept, 2, 3),
            (RegionKind::Excised, 1, 4),
            (RegionKind::Kept, 0, 3),
        ]
    );

    assert_positions_eq(
        &result.regions[0].polygon,
        &[(6.0, 1.0), (8.0, 0.0), (8.0, 2.0)],
        1e-9,
    );
    assert_positions_eq(
        &result.regions[1].polygon,
        &[(2.0, 1.0), (4.0, 2.0), (6.0, 1.0), (4.0, 0.0)],
        1e-9,
    );
    assert_positions_eq(
        &result.regions[2].polygon,
        &[(0.0, 0.0), (2.0, 1.0), (0.0, 2.0)],
        1e-9,
    );

    let attached: Vec<_> = result
        .trace
        .iter()
        .filter(|e| matches!(e, TraceEvent::Attached { .. }))
        .copied()
        .collect();
    assert_eq!(
        attached,
        vec![
            TraceEvent::Attached { node: 1, parent: 0 },
            TraceEvent::Attached { node: 2, parent: 1 },
        ]
    );

    let kept = result.kept().count();
    assert_eq!(kept, 2);
    let pruned = nested_loops().prune_self_intersections().unwrap();
    assert_eq!(pruned.len(), 2);
}

#[test]
fn disjoint_sibling_loops_are_unresolved() {
    let polygon = sibling_loops();
    let result = polygon.decompose().unwrap();

    assert_eq!(result.unresolved.len(), 1);
    let unresolved = result.unresolved[0];
    assert_eq!(unresolved.reason, UnresolvedReason::Unrelated);
    assert_eq!((unresolved.intersect.s, unresolved.intersect.b), (3.5, 5.5));
    assert!(result.trace.iter().any(|e| *e
        == TraceEvent::Unresolved {
            node: 2,
            reason: UnresolvedReason::Unrelated
        }));

    // the unresolved crossing stays inside the root region
    assert_eq!(result.regions.len(), 2);
    assert_positions_eq(
        &result.regions[1].polygon,
        &[(4.0, 0.0), (6.0, 1.0), (4.0, 2.0), (0.0, 0.0), (0.0, 2.0)],
        1e-9,
    );
    assert!(result.regions[1].polygon.has_self_intersects());

    let options = DecomposeOptions {
        fail_on_unresolved: true,
        ..DecomposeOptions::new()
    };
    assert_eq!(
        polygon.decompose_opt(&options).err(),
        Some(DecomposeError::UnresolvedTopology { count: 1 })
    );
}

#[test]
fn star_regions_are_well_formed() {
    let result = pentagram(10.0).decompose().unwrap();
    assert!(result.unresolved.is_empty());
    assert_eq!(result.regions.len(), 6);

    let emitted = result
        .trace
        .iter()
        .filter(|e| matches!(e, TraceEvent::RegionEmitted { .. }))
        .count();
    assert_eq!(emitted, result.regions.len());

    for region in result.regions.iter() {
        assert!(region.polygon.vertex_count() >= 3);
        assert_eq!(region.kind, RegionKind::from_depth(region.depth));
        assert!(
            !region.polygon.has_self_intersects(),
            "region is not simple: {}",
            to_debug_json_str(&region.polygon)
        );
    }

    let kinds = |kind: RegionKind| result.regions.iter().filter(|r| r.kind == kind).count();
    assert_eq!(kinds(RegionKind::Kept), 1);
    assert_eq!(kinds(RegionKind::Excised), 5);

    let resolved = result
        .trace
        .iter()
        .filter(|e| matches!(e, TraceEvent::Attached { .. }))
        .count();
    assert_eq!(resolved + result.unresolved.len(), 5);
}

#[test]
fn degenerate_input() {
    let segment = polygon![(0.0, 0.0), (1.0, 1.0)];
    assert_eq!(
        segment.decompose().err(),
        Some(DecomposeError::DegenerateInput { vertex_count: 2 })
    );
    assert_eq!(
        DecomposeError::UnresolvedTopology { count: 3 }.to_string(),
        "3 self intersect(s) could not be placed in the nesting tree"
    );
}
