//! Decomposition of a self intersecting polygon into simple regions.
//!
//! Self intersects are ordered by their first boundary parameter `s` and arranged in a tree by
//! nesting of their `[s, b]` intervals. The root is a synthetic node for vertex 0 spanning the
//! whole boundary `[0, n]`. Walking the tree depth first, each node emits the loop starting and
//! ending at its point with every child loop short circuited through the child's point.

use crate::{
    core::{math::Vector2, traits::Real},
    error::DecomposeError,
    polygon::{
        DecomposeOptions, DecomposeResult, DecomposeTrace, IntersectionRecord, PolyVertex,
        PolygonCreation, PolygonSource, Region, RegionKind, SelfIntersectOptions, TraceEvent,
        UnresolvedIntersection, UnresolvedReason,
        internal::poly_intersects::all_self_intersects,
    },
};

/// Node of the interval nesting tree, stored in an arena and linked by indexes.
#[derive(Debug, Clone)]
pub struct DecomposeNode<T>
where
    T: Real,
{
    /// Vertex emitted for the node (the intersect point, or vertex 0 for the root).
    pub vertex: PolyVertex<T>,
    pub s: T,
    pub b: T,
    /// Start index of the edge the loop leaves from.
    pub start_edge: usize,
    /// Start index of the edge the loop returns on.
    pub far_edge: usize,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    pub depth: usize,
}

impl<T> DecomposeNode<T>
where
    T: Real,
{
    fn root(first: PolyVertex<T>, vertex_count: usize) -> Self {
        DecomposeNode {
            vertex: first,
            s: T::zero(),
            b: T::from(vertex_count).unwrap(),
            start_edge: 0,
            far_edge: vertex_count - 1,
            parent: None,
            children: Vec::new(),
            depth: 0,
        }
    }

    fn from_intersect(intr: &IntersectionRecord<T>) -> Self {
        DecomposeNode {
            vertex: intr.to_vertex(),
            s: intr.s,
            b: intr.b,
            start_edge: intr.start_edge,
            far_edge: intr.far_edge,
            parent: None,
            children: Vec::new(),
            depth: 0,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vector2<T> {
        self.vertex.pos()
    }
}

/// `[s1, b1]` lies strictly inside `[s2, b2]`.
#[inline]
pub fn nested_in<T: Real>(s1: T, b1: T, s2: T, b2: T) -> bool {
    s1 > s2 && b1 < b2
}

/// `[s1, b1]` strictly contains `[s2, b2]`.
#[inline]
pub fn contains<T: Real>(s1: T, b1: T, s2: T, b2: T) -> bool {
    s1 < s2 && b1 > b2
}

/// The intervals partially overlap (each holds exactly one end point of the other).
#[inline]
pub fn interferes<T: Real>(s1: T, b1: T, s2: T, b2: T) -> bool {
    (s1 < s2 && s2 < b1 && b1 < b2) || (s2 < s1 && s1 < b2 && b2 < b1)
}

/// Interval nesting tree with node 0 as the root.
#[derive(Debug, Clone)]
pub struct DecomposeTree<T>
where
    T: Real,
{
    pub nodes: Vec<DecomposeNode<T>>,
}

impl<T> DecomposeTree<T>
where
    T: Real,
{
    fn attach(&mut self, node: usize, parent: usize) {
        let depth = self.nodes[parent].depth + 1;
        self.nodes[parent].children.push(node);
        self.nodes[node].parent = Some(parent);
        self.nodes[node].depth = depth;
    }

    /// Move `node` (with its subtree) under `new_parent`, `new_parent` takes `node`'s position
    /// among its former parent's children.
    fn reparent_under(&mut self, node: usize, new_parent: usize) {
        let Some(old_parent) = self.nodes[node].parent else {
            unreachable!("internal library error: root node cannot be reparented")
        };
        let Some(position) = self.nodes[old_parent]
            .children
            .iter()
            .position(|&c| c == node)
        else {
            unreachable!("internal library error: node missing from parent children")
        };

        self.nodes[old_parent].children[position] = new_parent;
        self.nodes[new_parent].parent = Some(old_parent);
        self.nodes[new_parent].depth = self.nodes[old_parent].depth + 1;
        self.nodes[new_parent].children.push(node);
        self.nodes[node].parent = Some(new_parent);
        self.update_depths(node);
    }

    fn update_depths(&mut self, start: usize) {
        let mut stack = vec![start];
        while let Some(i) = stack.pop() {
            let depth = self.nodes[i]
                .parent
                .map_or(0, |p| self.nodes[p].depth + 1);
            self.nodes[i].depth = depth;
            stack.extend(self.nodes[i].children.iter().copied());
        }
    }

    /// Node indexes in depth first post order (children left to right, then the node). Unresolved
    /// nodes are never linked into the tree so they are not visited.
    pub fn post_order(&self) -> Vec<usize> {
        let mut stack = vec![0];
        let mut result = Vec::with_capacity(self.nodes.len());
        while let Some(i) = stack.pop() {
            result.push(i);
            stack.extend(self.nodes[i].children.iter().copied());
        }

        result.reverse();
        result
    }
}

/// Build the nesting tree from self intersects sorted by `s`.
///
/// Intersects that cannot be placed are returned with the reason, the tree never links them.
pub fn build_tree<P, T>(
    polygon: &P,
    intersects: &[IntersectionRecord<T>],
    trace: &mut DecomposeTrace,
) -> (DecomposeTree<T>, Vec<UnresolvedIntersection<T>>)
where
    P: PolygonSource<Num = T> + ?Sized,
    T: Real,
{
    let n = polygon.vertex_count();
    let mut tree = DecomposeTree {
        nodes: Vec::with_capacity(intersects.len() + 1),
    };
    tree.nodes.push(DecomposeNode::root(polygon.at(0), n));
    tree.nodes
        .extend(intersects.iter().map(DecomposeNode::from_intersect));

    let mut unresolved = Vec::new();
    let mut current = 0;
    for (k, intr) in intersects.iter().enumerate() {
        let id = k + 1;
        let (cs, cb) = (tree.nodes[current].s, tree.nodes[current].b);
        let (s, b) = (intr.s, intr.b);

        let mut unresolved_reason = None;
        if contains(cs, cb, s, b) {
            tree.attach(id, current);
            trace.push(TraceEvent::Attached {
                node: id,
                parent: current,
            });
            log::debug!("node {id} attached to {current}");
            current = id;
        } else if nested_in(cs, cb, s, b) {
            tree.reparent_under(current, id);
            let parent = tree.nodes[id].parent.unwrap_or(0);
            trace.push(TraceEvent::Attached { node: id, parent });
            trace.push(TraceEvent::Reparented {
                node: current,
                new_parent: id,
            });
            log::debug!("node {current} reparented under {id}");
        } else if interferes(cs, cb, s, b) {
            let mut ancestor = tree.nodes[current].parent;
            unresolved_reason = Some(UnresolvedReason::NoContainingAncestor);
            while let Some(a) = ancestor {
                let (as_, ab) = (tree.nodes[a].s, tree.nodes[a].b);
                if contains(as_, ab, s, b) {
                    tree.attach(id, a);
                    trace.push(TraceEvent::Attached {
                        node: id,
                        parent: a,
                    });
                    log::debug!("interfering node {id} attached to ancestor {a}");
                    current = id;
                    unresolved_reason = None;
                    break;
                }

                if nested_in(as_, ab, s, b) || interferes(as_, ab, s, b) {
                    break;
                }

                ancestor = tree.nodes[a].parent;
            }
        } else {
            unresolved_reason = Some(UnresolvedReason::Unrelated);
        }

        if let Some(reason) = unresolved_reason {
            log::warn!(
                "self intersect at {:?} (s = {:?}, b = {:?}) left unresolved: {reason:?}",
                intr.point,
                s,
                b
            );
            trace.push(TraceEvent::Unresolved { node: id, reason });
            unresolved.push(UnresolvedIntersection {
                intersect: *intr,
                reason,
            });
        }
    }

    (tree, unresolved)
}

/// Collect the region of tree node `node_index`: the node point, the vertexes up to the first
/// child's start edge, the child point, the vertexes after the child's far edge up to the next
/// child, and so on through the node's far edge.
pub fn collect_region<P, T, O>(polygon: &P, tree: &DecomposeTree<T>, node_index: usize) -> O
where
    P: PolygonSource<Num = T> + ?Sized,
    T: Real,
    O: PolygonCreation<Num = T>,
{
    let n = polygon.vertex_count();
    let node = &tree.nodes[node_index];
    let mut region = O::with_capacity(n);
    region.add_vertex(node.vertex);

    let mut from = node.start_edge + 1;
    for &child_index in node.children.iter() {
        let child = &tree.nodes[child_index];
        for i in from..=child.start_edge {
            region.add_vertex(polygon.at(i % n));
        }
        region.add_vertex(child.vertex);
        from = child.far_edge + 1;
    }

    for i in from..=node.far_edge {
        region.add_vertex(polygon.at(i % n));
    }

    region
}

/// Decompose a polygon into simple regions, see
/// [PolygonSource::decompose](crate::polygon::PolygonSource::decompose).
pub fn decompose<P, T, O>(
    polygon: &P,
    options: &DecomposeOptions<T>,
) -> Result<DecomposeResult<O>, DecomposeError>
where
    P: PolygonSource<Num = T, OutputPolygon = O> + ?Sized,
    T: Real,
    O: PolygonCreation<Num = T>,
{
    let vertex_count = polygon.vertex_count();
    if vertex_count < 3 {
        return Err(DecomposeError::DegenerateInput { vertex_count });
    }

    let intersects = all_self_intersects(
        polygon,
        &SelfIntersectOptions {
            aabb_index: None,
            pos_equal_eps: options.pos_equal_eps,
        },
    );
    log::debug!("decomposing with {} self intersect(s)", intersects.len());

    let mut trace = DecomposeTrace::default();
    let (tree, unresolved) = build_tree(polygon, &intersects, &mut trace);

    if options.fail_on_unresolved && !unresolved.is_empty() {
        return Err(DecomposeError::UnresolvedTopology {
            count: unresolved.len(),
        });
    }

    let mut regions = Vec::new();
    for node_index in tree.post_order() {
        let raw: O = collect_region(polygon, &tree, node_index);
        let region = O::create_from_remove_repeat(&raw, options.pos_equal_eps);
        let depth = tree.nodes[node_index].depth;
        let kind = RegionKind::from_depth(depth);
        let vertex_count = region.vertex_count();
        if vertex_count < 3 {
            log::debug!("node {node_index} region has {vertex_count} vertex(es), skipped");
            continue;
        }

        trace.push(TraceEvent::RegionEmitted {
            node: node_index,
            kind,
            vertex_count,
        });
        regions.push(Region {
            polygon: region,
            kind,
            depth,
        });
    }

    Ok(DecomposeResult {
        regions,
        unresolved,
        trace,
    })
}
