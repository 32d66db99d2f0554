//! Commands for the route actor.

use restaurant_core::routes::{ShortestPaths, SpanningNetwork, Tour};
use restaurant_core::RouteError;

#[derive(Debug, Clone)]
pub enum RouteCommand {
    AddEdge { from: usize, to: usize, weight: i64 },
    ShortestPaths { source: usize },
    MinimumNetwork,
    BreadthFirst { start: usize },
    DepthFirst { start: usize },
    Tour { start: usize },
}

/// Replies to [`RouteCommand`].
///
/// Any command naming a location outside the graph is answered with
/// [`RouteReply::UnknownLocation`] instead of its usual variant.
#[derive(Debug, Clone)]
pub enum RouteReply {
    AddEdge(Result<(), RouteError>),
    ShortestPaths(ShortestPaths),
    MinimumNetwork(SpanningNetwork),
    /// Visit order of either traversal.
    Visited(Vec<usize>),
    Tour(Tour),
    UnknownLocation(usize),
}
