//! Planarity oracle interface and the built-in implementation.
//!
//! Both partitioners treat planarity testing as a black box behind
//! [`PlanarityOracle`]. The oracle must be deterministic for a fixed graph and
//! `Sync`, since the CEGAR loop queries both sides of a candidate partition
//! concurrently.
//!
//! # Built-in oracle
//!
//! [`DmpOracle`] decides planarity with the Demoucron–Malgrange–Pertuiset path
//! embedding algorithm, applied to every biconnected component separately (a
//! graph is planar iff all its blocks are). Witnesses are produced by greedy
//! edge deletion inside the first non-planar block: an edge is dropped whenever
//! the rest stays non-planar, so the survivors form an edge-minimal non-planar
//! subgraph, i.e. a subdivision of K5 or K3,3.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::trace;

use crate::graph::Graph;
use crate::types::{Edge, Vertex};

/// Edge set witnessing non-planarity of a graph.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Obstruction {
    edges: Vec<Edge>,
}

impl Obstruction {
    pub fn new(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Outcome of a planarity query that may carry a witness.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Planarity {
    Planar,
    /// Non-planar, with an obstruction if the oracle can produce one.
    NonPlanar(Option<Obstruction>),
}

impl Planarity {
    pub fn is_planar(&self) -> bool {
        matches!(self, Planarity::Planar)
    }
}

pub trait PlanarityOracle: Sync {
    fn is_planar(&self, g: &Graph) -> bool;

    /// Like [`is_planar`][PlanarityOracle::is_planar], but returns an obstruction on failure.
    ///
    /// The default implementation reports no witness.
    fn is_planar_with_witness(&self, g: &Graph) -> Planarity {
        if self.is_planar(g) {
            Planarity::Planar
        } else {
            Planarity::NonPlanar(None)
        }
    }
}

impl<O: PlanarityOracle + ?Sized> PlanarityOracle for &O {
    fn is_planar(&self, g: &Graph) -> bool {
        (**self).is_planar(g)
    }

    fn is_planar_with_witness(&self, g: &Graph) -> Planarity {
        (**self).is_planar_with_witness(g)
    }
}

/// Demoucron–Malgrange–Pertuiset planarity oracle.
#[derive(Debug, Default, Copy, Clone)]
pub struct DmpOracle;

impl PlanarityOracle for DmpOracle {
    fn is_planar(&self, g: &Graph) -> bool {
        let edges = simple_edges(g);
        nonplanar_block(g.num_vertices(), &edges).is_none()
    }

    fn is_planar_with_witness(&self, g: &Graph) -> Planarity {
        let n = g.num_vertices();
        let edges = simple_edges(g);
        match nonplanar_block(n, &edges) {
            None => Planarity::Planar,
            Some(block) => {
                let witness = minimize(n, block);
                trace!("obstruction with {} edges out of {}", witness.len(), edges.len());
                Planarity::NonPlanar(Some(Obstruction::new(witness)))
            }
        }
    }
}

/// Wraps an oracle and counts how often it is consulted.
#[derive(Debug, Default)]
pub struct CountingOracle<O> {
    inner: O,
    planar_calls: AtomicUsize,
    witness_calls: AtomicUsize,
}

impl<O> CountingOracle<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            planar_calls: AtomicUsize::new(0),
            witness_calls: AtomicUsize::new(0),
        }
    }

    /// Number of [`PlanarityOracle::is_planar`] calls so far.
    pub fn planar_calls(&self) -> usize {
        self.planar_calls.load(Ordering::Relaxed)
    }

    /// Number of [`PlanarityOracle::is_planar_with_witness`] calls so far.
    pub fn witness_calls(&self) -> usize {
        self.witness_calls.load(Ordering::Relaxed)
    }

    pub fn total_calls(&self) -> usize {
        self.planar_calls() + self.witness_calls()
    }
}

impl<O: PlanarityOracle> PlanarityOracle for CountingOracle<O> {
    fn is_planar(&self, g: &Graph) -> bool {
        self.planar_calls.fetch_add(1, Ordering::Relaxed);
        self.inner.is_planar(g)
    }

    fn is_planar_with_witness(&self, g: &Graph) -> Planarity {
        self.witness_calls.fetch_add(1, Ordering::Relaxed);
        self.inner.is_planar_with_witness(g)
    }
}

/// Sorted edge list with parallel copies collapsed.
fn simple_edges(g: &Graph) -> Vec<Edge> {
    let mut edges = g.sorted_edges();
    edges.dedup();
    edges
}

/// Greedy edge deletion: keep only edges whose removal makes the graph planar.
fn minimize(n: usize, mut kept: Vec<Edge>) -> Vec<Edge> {
    let mut i = 0;
    while i < kept.len() {
        let e = kept.remove(i);
        if nonplanar_block(n, &kept).is_none() {
            kept.insert(i, e);
            i += 1;
        }
    }
    kept
}

/// Returns the edges of the first non-planar biconnected component, if any.
fn nonplanar_block(n: usize, edges: &[Edge]) -> Option<Vec<Edge>> {
    // K3,3 is the smallest non-planar graph by edge count.
    if edges.len() < 9 {
        return None;
    }
    let adj = adjacency(n, edges);
    for block in biconnected_components(&adj) {
        if block.len() < 9 {
            continue;
        }
        let block_edges: Vec<Edge> = block.iter().map(|&id| edges[id]).collect();
        if !block_is_planar(&block_edges) {
            return Some(block_edges);
        }
    }
    None
}

/// Adjacency lists of `(neighbor, edge id)` pairs.
fn adjacency(n: usize, edges: &[Edge]) -> Vec<Vec<(Vertex, usize)>> {
    let mut adj = vec![Vec::new(); n];
    for (id, e) in edges.iter().enumerate() {
        adj[e.u()].push((e.v(), id));
        adj[e.v()].push((e.u(), id));
    }
    adj
}

#[derive(Copy, Clone)]
struct Frame {
    v: Vertex,
    parent_edge: Option<usize>,
    next: usize,
}

/// Hopcroft–Tarjan biconnected components, as lists of edge ids.
fn biconnected_components(adj: &[Vec<(Vertex, usize)>]) -> Vec<Vec<usize>> {
    const UNSEEN: usize = usize::MAX;

    let n = adj.len();
    let mut disc = vec![UNSEEN; n];
    let mut low = vec![0; n];
    let mut time = 0;
    let mut edge_stack = Vec::new();
    let mut components = Vec::new();

    for root in 0..n {
        if disc[root] != UNSEEN || adj[root].is_empty() {
            continue;
        }
        disc[root] = time;
        low[root] = time;
        time += 1;
        let mut stack = vec![Frame {
            v: root,
            parent_edge: None,
            next: 0,
        }];

        while let Some(&Frame { v, parent_edge, next }) = stack.last() {
            if next < adj[v].len() {
                let top = stack.len() - 1;
                stack[top].next += 1;
                let (w, id) = adj[v][next];
                if Some(id) == parent_edge {
                    continue;
                }
                if disc[w] == UNSEEN {
                    edge_stack.push(id);
                    disc[w] = time;
                    low[w] = time;
                    time += 1;
                    stack.push(Frame {
                        v: w,
                        parent_edge: Some(id),
                        next: 0,
                    });
                } else if disc[w] < disc[v] {
                    edge_stack.push(id);
                    low[v] = low[v].min(disc[w]);
                }
            } else {
                stack.pop();
                if let (Some(parent), Some(tree_edge)) = (stack.last(), parent_edge) {
                    let u = parent.v;
                    low[u] = low[u].min(low[v]);
                    if low[v] >= disc[u] {
                        let mut component = Vec::new();
                        while let Some(id) = edge_stack.pop() {
                            component.push(id);
                            if id == tree_edge {
                                break;
                            }
                        }
                        components.push(component);
                    }
                }
            }
        }
    }

    components
}

/// A piece of the graph not yet embedded: a chord, or a component of the
/// unembedded vertices together with its edges into the embedded part.
struct Fragment {
    attachments: Vec<usize>,
    /// Local component id of the interior vertices (`None` for a chord).
    component: Option<usize>,
    /// For a chord, its edge id.
    chord: Option<usize>,
}

/// DMP path embedding of a single biconnected block.
fn block_is_planar(block: &[Edge]) -> bool {
    // Relabel vertices to 0..k.
    let mut local = std::collections::HashMap::new();
    let mut edges = Vec::with_capacity(block.len());
    for e in block {
        let next = local.len();
        let a = *local.entry(e.u()).or_insert(next);
        let next = local.len();
        let b = *local.entry(e.v()).or_insert(next);
        edges.push((a, b));
    }
    let k = local.len();
    let m = edges.len();
    if m < 9 {
        return true;
    }
    if m > 3 * k - 6 {
        return false;
    }

    let mut adj: Vec<Vec<(usize, usize)>> = vec![Vec::new(); k];
    for (id, &(a, b)) in edges.iter().enumerate() {
        adj[a].push((b, id));
        adj[b].push((a, id));
    }

    let mut vertex_embedded = vec![false; k];
    let mut edge_embedded = vec![false; m];

    let Some((cycle, cycle_edges)) = find_cycle(&adj) else {
        // A block with at least nine edges always contains a cycle.
        return true;
    };
    for &v in &cycle {
        vertex_embedded[v] = true;
    }
    for &id in &cycle_edges {
        edge_embedded[id] = true;
    }
    let mut faces = vec![cycle.clone(), cycle];
    let mut remaining = m - cycle_edges.len();

    while remaining > 0 {
        let (fragments, component_of) = fragments(&adj, &edges, &vertex_embedded, &edge_embedded);

        let mut chosen: Option<(usize, usize)> = None;
        for (fi, fragment) in fragments.iter().enumerate() {
            let mut admissible = faces
                .iter()
                .enumerate()
                .filter(|(_, face)| fragment.attachments.iter().all(|a| face.contains(a)))
                .map(|(i, _)| i);
            let Some(first) = admissible.next() else {
                return false;
            };
            if admissible.next().is_none() {
                chosen = Some((fi, first));
                break;
            }
            if chosen.is_none() {
                chosen = Some((fi, first));
            }
        }
        let Some((fi, face_index)) = chosen else {
            break;
        };

        let (path, path_edges) = fragment_path(&fragments[fi], &adj, &edges, &component_of, &vertex_embedded);
        for &v in &path {
            vertex_embedded[v] = true;
        }
        for &id in &path_edges {
            edge_embedded[id] = true;
        }
        remaining -= path_edges.len();

        let new_face = split_face(&mut faces[face_index], &path);
        faces.push(new_face);
    }

    true
}

/// Finds any cycle via DFS; returns its vertices in order and its edge ids.
fn find_cycle(adj: &[Vec<(usize, usize)>]) -> Option<(Vec<usize>, Vec<usize>)> {
    let k = adj.len();
    let mut depth = vec![usize::MAX; k];
    let root = (0..k).find(|&v| !adj[v].is_empty())?;
    depth[root] = 0;
    let mut stack = vec![Frame {
        v: root,
        parent_edge: None,
        next: 0,
    }];

    while let Some(&Frame { v, parent_edge, next }) = stack.last() {
        if next >= adj[v].len() {
            stack.pop();
            continue;
        }
        let top = stack.len() - 1;
        stack[top].next += 1;
        let (w, id) = adj[v][next];
        if Some(id) == parent_edge {
            continue;
        }
        if depth[w] == usize::MAX {
            depth[w] = stack.len();
            stack.push(Frame {
                v: w,
                parent_edge: Some(id),
                next: 0,
            });
        } else if depth[w] < depth[v] {
            // Back edge: the stack from `w` to `v` closes a cycle.
            let start = depth[w];
            let vertices: Vec<usize> = stack[start..].iter().map(|f| f.v).collect();
            let mut cycle_edges: Vec<usize> = stack[start + 1..].iter().filter_map(|f| f.parent_edge).collect();
            cycle_edges.push(id);
            return Some((vertices, cycle_edges));
        }
    }
    None
}

/// Computes the fragments relative to the embedded subgraph.
///
/// Also returns the component id of every unembedded vertex.
fn fragments(
    adj: &[Vec<(usize, usize)>],
    edges: &[(usize, usize)],
    vertex_embedded: &[bool],
    edge_embedded: &[bool],
) -> (Vec<Fragment>, Vec<Option<usize>>) {
    let k = adj.len();
    let mut result = Vec::new();

    for (id, &(a, b)) in edges.iter().enumerate() {
        if !edge_embedded[id] && vertex_embedded[a] && vertex_embedded[b] {
            result.push(Fragment {
                attachments: vec![a, b],
                component: None,
                chord: Some(id),
            });
        }
    }

    let mut component_of = vec![None; k];
    let mut count = 0;
    for start in 0..k {
        if vertex_embedded[start] || component_of[start].is_some() {
            continue;
        }
        let c = count;
        count += 1;
        component_of[start] = Some(c);
        let mut attachments = Vec::new();
        let mut queue = vec![start];
        while let Some(x) = queue.pop() {
            for &(y, _) in &adj[x] {
                if vertex_embedded[y] {
                    if !attachments.contains(&y) {
                        attachments.push(y);
                    }
                } else if component_of[y].is_none() {
                    component_of[y] = Some(c);
                    queue.push(y);
                }
            }
        }
        result.push(Fragment {
            attachments,
            component: Some(c),
            chord: None,
        });
    }

    (result, component_of)
}

/// A path through the fragment between two distinct attachment vertices.
fn fragment_path(
    fragment: &Fragment,
    adj: &[Vec<(usize, usize)>],
    edges: &[(usize, usize)],
    component_of: &[Option<usize>],
    vertex_embedded: &[bool],
) -> (Vec<usize>, Vec<usize>) {
    if let Some(id) = fragment.chord {
        let (a, b) = edges[id];
        return (vec![a, b], vec![id]);
    }

    let c = fragment.component;
    let start = fragment.attachments[0];
    let mut parent: std::collections::HashMap<usize, (usize, usize)> = std::collections::HashMap::new();
    let mut queue = std::collections::VecDeque::new();

    for &(w, id) in &adj[start] {
        if !vertex_embedded[w] && component_of[w] == c && !parent.contains_key(&w) {
            parent.insert(w, (start, id));
            queue.push_back(w);
        }
    }

    let mut end = None;
    'search: while let Some(x) = queue.pop_front() {
        for &(y, id) in &adj[x] {
            if vertex_embedded[y] {
                if y != start {
                    parent.insert(y, (x, id));
                    end = Some(y);
                    break 'search;
                }
            } else if !parent.contains_key(&y) {
                parent.insert(y, (x, id));
                queue.push_back(y);
            }
        }
    }

    // Every fragment of a block has at least two attachments, so `end` is found.
    let mut path = Vec::new();
    let mut path_edges = Vec::new();
    if let Some(end) = end {
        let mut v = end;
        path.push(v);
        while v != start {
            let (p, id) = parent[&v];
            path_edges.push(id);
            path.push(p);
            v = p;
        }
        path.reverse();
        path_edges.reverse();
    }
    (path, path_edges)
}

/// Splits `face` along `path` (whose endpoints lie on the face).
///
/// `face` becomes one side; the other side is returned.
fn split_face(face: &mut Vec<usize>, path: &[usize]) -> Vec<usize> {
    let a = path[0];
    let b = path[path.len() - 1];
    let interior = &path[1..path.len() - 1];
    let len = face.len();
    let pos_a = face.iter().position(|&v| v == a).unwrap_or(0);
    let pos_b = face.iter().position(|&v| v == b).unwrap_or(0);

    let walk = |from: usize, to: usize| -> Vec<usize> {
        let mut seg = Vec::new();
        let mut i = from;
        loop {
            seg.push(face[i]);
            if i == to {
                break;
            }
            i = (i + 1) % len;
        }
        seg
    };

    // a -> b along the face, then back to a through the path.
    let mut first = walk(pos_a, pos_b);
    first.extend(interior.iter().rev());
    // b -> a along the face, then on to b through the path.
    let mut second = walk(pos_b, pos_a);
    second.extend(interior.iter());

    *face = first;
    second
}
