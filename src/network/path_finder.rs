use itertools::Itertools;

use crate::network::{
    LineId, NetworkGraph, PathError, StationId,
    graph::Edge,
    path_state::{PathState, Predecessor},
};

/// A line ridden somewhere along a path, with the surcharge it carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsedLine {
    pub line_id: LineId,
    pub extra_fare: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResult {
    /// Source first, target last.
    pub stations: Vec<StationId>,
    pub distance: u32,
    pub duration: u32,
    /// Distinct lines in the order they are first ridden.
    pub lines: Vec<UsedLine>,
}

/// Finds the cheapest path from `source` to `target` under the graph's metric.
///
/// Frontier entries are ordered by `(weight, station id)` and a tentative
/// label is only replaced by a strictly cheaper one, so equal-weight routes
/// resolve to whichever was discovered first. The result is deterministic
/// for the same segment order.
pub fn find_path(
    graph: &NetworkGraph,
    source: StationId,
    target: StationId,
) -> Result<PathResult, PathError> {
    if source == target {
        return Err(PathError::SameStation(source));
    }

    if let Some(unknown) = [source, target].into_iter().find(|&s| !graph.contains(s)) {
        return Err(PathError::UnknownStation(unknown));
    }

    let mut state = PathState::new(source);

    while let Some((station_id, weight)) = state.pop_closest() {
        if station_id == target {
            break;
        }

        for edge in graph.get_edges(station_id) {
            let candidate = weight + u64::from(edge.weight);
            if state.should_relax(edge.to_station_id, candidate) {
                state.relax(
                    edge.to_station_id,
                    candidate,
                    Predecessor {
                        station_id,
                        edge: *edge,
                    },
                );
            }
        }
    }

    if !state.is_finalized(target) {
        return Err(PathError::NoPath {
            from: source,
            to: target,
        });
    }

    Ok(reconstruct(&state, target))
}

fn reconstruct(state: &PathState, target: StationId) -> PathResult {
    let mut stations = vec![target];
    let mut edges: Vec<Edge> = vec![];

    let mut current = target;
    while let Some(predecessor) = state.predecessor(current) {
        edges.push(predecessor.edge);
        stations.push(predecessor.station_id);
        current = predecessor.station_id;
    }

    stations.reverse();
    edges.reverse();

    let distance = edges.iter().fold(0u32, |acc, e| acc.saturating_add(e.distance));
    let duration = edges.iter().fold(0u32, |acc, e| acc.saturating_add(e.duration));
    let lines = edges
        .iter()
        .unique_by(|e| e.line_id)
        .map(|e| UsedLine {
            line_id: e.line_id,
            extra_fare: e.line_extra_fare,
        })
        .collect();

    PathResult {
        stations,
        distance,
        duration,
        lines,
    }
}
