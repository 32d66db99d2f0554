//! Traversals and path algorithms over a [`RouteGraph`].

use super::{Distance, RouteEdge, RouteGraph, UNREACHABLE};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// Breadth-first iterator: every location is yielded at its hop distance
/// from the start, nearest first.
pub struct BreadthFirst<'a> {
    graph: &'a RouteGraph,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'a> BreadthFirst<'a> {
    pub(super) fn new(graph: &'a RouteGraph, start: usize) -> Self {
        let mut visited = vec![false; graph.len()];
        visited[start] = true;
        Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
        }
    }
}

impl Iterator for BreadthFirst<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.queue.pop_front()?;
        for (next, _) in self.graph.neighbors(current) {
            if !self.visited[next] {
                self.visited[next] = true;
                self.queue.push_back(next);
            }
        }
        Some(current)
    }
}

/// Depth-first pre-order iterator with an explicit stack. Lower-numbered
/// neighbours are explored first.
pub struct DepthFirst<'a> {
    graph: &'a RouteGraph,
    visited: Vec<bool>,
    stack: Vec<usize>,
}

impl<'a> DepthFirst<'a> {
    pub(super) fn new(graph: &'a RouteGraph, start: usize) -> Self {
        Self {
            graph,
            visited: vec![false; graph.len()],
            stack: vec![start],
        }
    }
}

impl Iterator for DepthFirst<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some(current) = self.stack.pop() {
            if self.visited[current] {
                continue;
            }
            self.visited[current] = true;
            let unvisited: Vec<usize> = self
                .graph
                .neighbors(current)
                .map(|(next, _)| next)
                .filter(|&next| !self.visited[next])
                .collect();
            self.stack.extend(unvisited.into_iter().rev());
            return Some(current);
        }
        None
    }
}

/// Result of a single-source shortest-path search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<Distance>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance per location; [`UNREACHABLE`] where there is no path.
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn distance(&self, target: usize) -> Option<Distance> {
        self.distances
            .get(target)
            .copied()
            .filter(|&d| d != UNREACHABLE)
    }

    /// Locations from the source to `target`, both included.
    pub fn route_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;
        let mut route = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessors[current] {
            route.push(previous);
            current = previous;
        }
        route.reverse();
        Some(route)
    }
}

pub(super) fn dijkstra(graph: &RouteGraph, source: usize) -> ShortestPaths {
    let n = graph.len();
    let mut distances = vec![UNREACHABLE; n];
    let mut predecessors = vec![None; n];
    let mut settled = vec![false; n];
    distances[source] = 0;

    for _ in 0..n {
        let closest = (0..n)
            .filter(|&v| !settled[v] && distances[v] != UNREACHABLE)
            .min_by_key(|&v| distances[v]);
        let Some(u) = closest else { break };
        settled[u] = true;

        for (v, weight) in graph.neighbors(u) {
            let Some(candidate) = distances[u].checked_add(Distance::from(weight)) else {
                continue;
            };
            if !settled[v] && candidate < distances[v] {
                distances[v] = candidate;
                predecessors[v] = Some(u);
            }
        }
    }

    debug!(source, "Shortest paths computed");
    ShortestPaths {
        source,
        distances,
        predecessors,
    }
}

/// Spanning tree produced by [`RouteGraph::minimum_connecting_network`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningNetwork {
    edges: Vec<RouteEdge>,
    reached: usize,
    locations: usize,
}

impl SpanningNetwork {
    /// Tree edges in the order they were chosen. `from` is the endpoint that
    /// was already in the tree.
    pub fn edges(&self) -> &[RouteEdge] {
        &self.edges
    }

    pub fn total_weight(&self) -> Distance {
        self.edges.iter().map(|e| Distance::from(e.weight)).sum()
    }

    /// Locations the tree connects.
    pub fn reached(&self) -> usize {
        self.reached
    }

    /// Whether the tree connects every location of the graph.
    pub fn spans_all(&self) -> bool {
        self.reached == self.locations
    }
}

pub(super) fn prim(graph: &RouteGraph) -> SpanningNetwork {
    let n = graph.len();
    let mut edges = Vec::new();
    if n == 0 {
        return SpanningNetwork {
            edges,
            reached: 0,
            locations: 0,
        };
    }

    let mut in_tree = vec![false; n];
    // Cheapest known edge into the tree, per location outside it.
    let mut key: Vec<Option<u64>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    key[0] = Some(0);
    let mut reached = 0;

    for _ in 0..n {
        let next = (0..n)
            .filter(|&v| !in_tree[v])
            .filter_map(|v| key[v].map(|k| (v, k)))
            .min_by_key(|&(_, k)| k);
        let Some((u, weight)) = next else { break };
        in_tree[u] = true;
        reached += 1;
        if let Some(p) = parent[u] {
            edges.push(RouteEdge { from: p, to: u, weight });
        }

        for (v, weight) in graph.neighbors(u) {
            if !in_tree[v] && key[v].map_or(true, |k| weight < k) {
                key[v] = Some(weight);
                parent[v] = Some(u);
            }
        }
    }

    debug!(reached, locations = n, "Spanning network computed");
    SpanningNetwork {
        edges,
        reached,
        locations: n,
    }
}

/// A greedy delivery round produced by [`RouteGraph::nearest_neighbor_tour`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    /// Locations in the order they are first reached. When the round left
    /// `start`, it is listed again at the end.
    pub stops: Vec<usize>,
    /// Every location driven through, hop by hop, including the way back.
    pub route: Vec<usize>,
    pub total_weight: Distance,
}

impl Tour {
    /// Distinct locations on the round, `start` included.
    pub fn visited(&self) -> usize {
        if self.stops.len() > 1 {
            self.stops.len() - 1
        } else {
            self.stops.len()
        }
    }
}

pub(super) fn nearest_neighbor(graph: &RouteGraph, start: usize) -> Tour {
    let mut visited = vec![false; graph.len()];
    let mut stops = vec![start];
    let mut route = vec![start];
    let mut total_weight: Distance = 0;
    visited[start] = true;
    let mut current = start;

    // Ties go to the lower index: min_by_key keeps the first minimum.
    loop {
        let paths = dijkstra(graph, current);
        let nearest = (0..graph.len())
            .filter(|&v| !visited[v])
            .filter_map(|v| paths.distance(v).map(|d| (v, d)))
            .min_by_key(|&(_, d)| d);
        let Some((next, distance)) = nearest else { break };
        follow(&mut route, &paths, next);
        visited[next] = true;
        stops.push(next);
        total_weight += distance;
        current = next;
    }

    if current != start {
        let paths = dijkstra(graph, current);
        // Same component, so the way back always exists.
        if let Some(distance) = paths.distance(start) {
            follow(&mut route, &paths, start);
            stops.push(start);
            total_weight += distance;
        }
    }

    debug!(start, stops = stops.len(), hops = route.len(), "Delivery tour computed");
    Tour {
        stops,
        route,
        total_weight,
    }
}

/// Appends the hops from the search source to `target`, source excluded.
fn follow(route: &mut Vec<usize>, paths: &ShortestPaths, target: usize) {
    if let Some(hops) = paths.route_to(target) {
        route.extend(hops.into_iter().skip(1));
    }
}
