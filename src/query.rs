use tracing::{debug, warn};

use crate::{
    fare::{RiderCategory, compute_fare},
    network::{LineSegment, Metric, NetworkGraph, PathError, StationId, UsedLine, find_path},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathQuery {
    pub source: StationId,
    pub target: StationId,
    pub metric: Metric,
    pub rider: RiderCategory,
}

impl PathQuery {
    pub fn new(source: StationId, target: StationId, metric: Metric, rider: RiderCategory) -> Self {
        Self {
            source,
            target,
            metric,
            rider,
        }
    }
}

/// A priced route between two stations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathFare {
    pub stations: Vec<StationId>,
    pub distance: u32,
    pub duration: u32,
    pub lines: Vec<UsedLine>,
    pub fare: u32,
}

/// Runs one path query against a snapshot of the current segments.
///
/// The graph is built from scratch for every call and nothing is shared
/// between calls, so queries can run concurrently on the same snapshot.
pub fn query(request: &PathQuery, segments: &[LineSegment]) -> Result<PathFare, PathError> {
    if request.source == request.target {
        return Err(PathError::SameStation(request.source));
    }

    let graph = NetworkGraph::build(segments, request.metric)?;
    if graph.ignored_segments() > 0 {
        warn!(
            ignored = graph.ignored_segments(),
            "skipped line segments that start and end at the same station"
        );
    }

    let path = find_path(&graph, request.source, request.target)?;
    let fare = compute_fare(path.distance, &path.lines, request.rider)?;

    debug!(
        source = %request.source,
        target = %request.target,
        metric = %request.metric,
        rider = %request.rider,
        stops = path.stations.len(),
        distance = path.distance,
        duration = path.duration,
        fare,
        "found path"
    );

    Ok(PathFare {
        stations: path.stations,
        distance: path.distance,
        duration: path.duration,
        lines: path.lines,
        fare,
    })
}
