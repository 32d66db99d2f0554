use super::actions::{RouteCommand, RouteReply};
use crate::framework::Engine;
use restaurant_core::routes::{RouteEdge, RouteGraph};

impl Engine for RouteGraph {
    const NAME: &'static str = "routes";

    type Command = RouteCommand;
    type Reply = RouteReply;
    type Snapshot = Vec<RouteEdge>;

    fn handle(&mut self, command: RouteCommand) -> RouteReply {
        // The graph panics on foreign indices; the actor must not.
        if let Some(location) = first_unknown(self, &command) {
            return RouteReply::UnknownLocation(location);
        }

        match command {
            RouteCommand::AddEdge { from, to, weight } => {
                RouteReply::AddEdge(self.add_edge(from, to, weight))
            }
            RouteCommand::ShortestPaths { source } => {
                RouteReply::ShortestPaths(self.shortest_paths(source))
            }
            RouteCommand::MinimumNetwork => {
                RouteReply::MinimumNetwork(self.minimum_connecting_network())
            }
            RouteCommand::BreadthFirst { start } => {
                RouteReply::Visited(self.breadth_first(start).collect())
            }
            RouteCommand::DepthFirst { start } => {
                RouteReply::Visited(self.depth_first(start).collect())
            }
            RouteCommand::Tour { start } => RouteReply::Tour(self.nearest_neighbor_tour(start)),
        }
    }

    fn snapshot(&self) -> Vec<RouteEdge> {
        self.edges()
    }
}

fn first_unknown(graph: &RouteGraph, command: &RouteCommand) -> Option<usize> {
    let locations = match *command {
        RouteCommand::AddEdge { from, to, .. } => vec![from, to],
        RouteCommand::ShortestPaths { source } => vec![source],
        RouteCommand::BreadthFirst { start }
        | RouteCommand::DepthFirst { start }
        | RouteCommand::Tour { start } => vec![start],
        RouteCommand::MinimumNetwork => Vec::new(),
    };
    locations
        .into_iter()
        .find(|&location| !graph.contains(location))
}
