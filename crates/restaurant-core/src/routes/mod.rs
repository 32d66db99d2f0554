//! # Delivery Routes
//!
//! A weighted undirected graph over dense location indices `0..N`, stored as a
//! row-major adjacency matrix. A missing edge is `None`, never a zero weight.
//!
//! Location indices are trusted: passing one outside `0..N` panics. Callers
//! taking indices from outside check them with [`RouteGraph::contains`] first.

mod search;

pub use search::{BreadthFirst, DepthFirst, ShortestPaths, SpanningNetwork, Tour};

use crate::config::EngineConfig;
use crate::error::RouteError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Length of a multi-edge path. Edge weights fit in `i64`, so a sum over any
/// graph that fits in memory stays far below [`UNREACHABLE`].
pub type Distance = u128;

/// Distance reported for a location the source cannot reach.
pub const UNREACHABLE: Distance = Distance::MAX;

/// One undirected edge, listed with `from < to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEdge {
    pub from: usize,
    pub to: usize,
    pub weight: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGraph {
    size: usize,
    weights: Vec<Option<u64>>,
}

impl RouteGraph {
    /// A graph of `locations` nodes and no edges.
    pub fn new(locations: usize) -> Self {
        Self {
            size: locations,
            weights: vec![None; locations * locations],
        }
    }

    /// Like [`RouteGraph::new`], refusing more than `max` locations.
    pub fn with_limit(locations: usize, max: usize) -> Result<Self, RouteError> {
        if locations > max {
            return Err(RouteError::TooManyLocations {
                requested: locations,
                max,
            });
        }
        Ok(Self::new(locations))
    }

    pub fn from_config(locations: usize, config: &EngineConfig) -> Result<Self, RouteError> {
        Self::with_limit(locations, config.max_locations)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn contains(&self, location: usize) -> bool {
        location < self.size
    }

    /// Connects `u` and `v` in both directions, replacing any earlier weight.
    ///
    /// # Errors
    /// [`RouteError::NegativeWeight`] if `weight < 0`; the graph is unchanged.
    ///
    /// # Panics
    /// If either location is out of range.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: i64) -> Result<(), RouteError> {
        self.check(u);
        self.check(v);
        let Ok(weight) = u64::try_from(weight) else {
            return Err(RouteError::NegativeWeight {
                from: u,
                to: v,
                weight,
            });
        };
        let (uv, vu) = (self.slot(u, v), self.slot(v, u));
        self.weights[uv] = Some(weight);
        self.weights[vu] = Some(weight);
        debug!(from = u, to = v, weight, "Route edge added");
        Ok(())
    }

    pub fn edge_weight(&self, u: usize, v: usize) -> Option<u64> {
        self.check(u);
        self.check(v);
        self.weights[self.slot(u, v)]
    }

    /// Neighbours of `location` in ascending index order, without self loops.
    pub fn neighbors(&self, location: usize) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.check(location);
        let row = &self.weights[location * self.size..(location + 1) * self.size];
        row.iter()
            .enumerate()
            .filter(move |(v, _)| *v != location)
            .filter_map(|(v, w)| w.map(|w| (v, w)))
    }

    /// Every edge once, ordered by `(from, to)`.
    pub fn edges(&self) -> Vec<RouteEdge> {
        (0..self.size)
            .flat_map(move |u| {
                self.neighbors(u)
                    .filter(move |(v, _)| *v > u)
                    .map(move |(v, weight)| RouteEdge { from: u, to: v, weight })
            })
            .collect()
    }

    /// Locations in breadth-first order from `start`.
    pub fn breadth_first(&self, start: usize) -> BreadthFirst<'_> {
        self.check(start);
        BreadthFirst::new(self, start)
    }

    /// Locations in depth-first pre-order from `start`.
    pub fn depth_first(&self, start: usize) -> DepthFirst<'_> {
        self.check(start);
        DepthFirst::new(self, start)
    }

    /// Single-source shortest distances (Dijkstra).
    pub fn shortest_paths(&self, source: usize) -> ShortestPaths {
        self.check(source);
        search::dijkstra(self, source)
    }

    /// Minimum spanning tree grown from location 0 (Prim).
    ///
    /// On a disconnected graph only the component holding location 0 is
    /// covered; see [`SpanningNetwork::spans_all`].
    pub fn minimum_connecting_network(&self) -> SpanningNetwork {
        search::prim(self)
    }

    /// Greedy round trip from `start`: always drive to the closest unvisited
    /// location by road distance, then head back.
    ///
    /// Every location reachable from `start` is visited. A dead end is left
    /// along the shortest path, so the route may pass a location twice.
    pub fn nearest_neighbor_tour(&self, start: usize) -> Tour {
        self.check(start);
        search::nearest_neighbor(self, start)
    }

    fn check(&self, location: usize) {
        assert!(
            location < self.size,
            "location {location} out of range for {} locations",
            self.size
        );
    }

    fn slot(&self, u: usize, v: usize) -> usize {
        u * self.size + v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_symmetric() {
        let mut graph = RouteGraph::new(3);
        graph.add_edge(0, 2, 7).unwrap();
        assert_eq!(graph.edge_weight(0, 2), Some(7));
        assert_eq!(graph.edge_weight(2, 0), Some(7));
        assert_eq!(graph.edge_weight(0, 1), None);
    }

    #[test]
    fn test_zero_weight_is_an_edge() {
        let mut graph = RouteGraph::new(2);
        graph.add_edge(0, 1, 0).unwrap();
        assert_eq!(graph.edge_weight(1, 0), Some(0));
    }

    #[test]
    fn test_negative_weight_rejected_without_change() {
        let mut graph = RouteGraph::new(2);
        graph.add_edge(0, 1, 3).unwrap();
        let err = graph.add_edge(0, 1, -1).unwrap_err();
        assert_eq!(
            err,
            RouteError::NegativeWeight {
                from: 0,
                to: 1,
                weight: -1
            }
        );
        assert_eq!(graph.edge_weight(0, 1), Some(3));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_panics() {
        let mut graph = RouteGraph::new(2);
        let _ = graph.add_edge(0, 2, 1);
    }

    #[test]
    fn test_location_limit() {
        assert!(RouteGraph::with_limit(20, 20).is_ok());
        assert_eq!(
            RouteGraph::with_limit(21, 20).unwrap_err(),
            RouteError::TooManyLocations {
                requested: 21,
                max: 20
            }
        );
    }

    #[test]
    fn test_edges_listed_once() {
        let mut graph = RouteGraph::new(3);
        graph.add_edge(2, 0, 4).unwrap();
        graph.add_edge(1, 2, 1).unwrap();
        graph.add_edge(1, 1, 9).unwrap();
        assert_eq!(
            graph.edges(),
            vec![
                RouteEdge { from: 0, to: 2, weight: 4 },
                RouteEdge { from: 1, to: 2, weight: 1 },
            ]
        );
    }
}
