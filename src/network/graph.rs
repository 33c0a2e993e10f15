use std::collections::HashMap;

use crate::network::{LineId, LineSegment, Metric, PathError, StationId};

/// One traversal direction of a [`LineSegment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub to_station_id: StationId,
    pub weight: u32,
    pub line_id: LineId,
    pub line_extra_fare: u32,
    pub distance: u32,
    pub duration: u32,
}

/// Undirected multigraph of stations, weighted by a single [`Metric`].
///
/// Each segment contributes an edge in both directions. Edges between the
/// same pair of stations on different lines are kept side by side.
#[derive(Clone, Debug)]
pub struct NetworkGraph {
    edges: HashMap<StationId, Vec<Edge>>,
    ignored_segments: usize,
}

impl NetworkGraph {
    pub fn build(segments: &[LineSegment], metric: Metric) -> Result<Self, PathError> {
        let mut edges: HashMap<StationId, Vec<Edge>> = HashMap::new();
        let mut ignored_segments = 0;

        for segment in segments {
            if segment.is_self_loop() {
                ignored_segments += 1;
                continue;
            }

            let weight = segment.weight(metric);
            let edge_to = |to_station_id| Edge {
                to_station_id,
                weight,
                line_id: segment.line_id,
                line_extra_fare: segment.line_extra_fare,
                distance: segment.distance,
                duration: segment.duration,
            };

            edges
                .entry(segment.up_station_id)
                .or_default()
                .push(edge_to(segment.down_station_id));
            edges
                .entry(segment.down_station_id)
                .or_default()
                .push(edge_to(segment.up_station_id));
        }

        if edges.is_empty() {
            return Err(PathError::EmptyNetwork);
        }

        Ok(Self {
            edges,
            ignored_segments,
        })
    }

    pub fn contains(&self, station: StationId) -> bool {
        self.edges.contains_key(&station)
    }

    pub fn stations(&self) -> impl Iterator<Item = StationId> + '_ {
        self.edges.keys().copied()
    }

    /// Self-loop segments skipped while building.
    pub fn ignored_segments(&self) -> usize {
        self.ignored_segments
    }

    pub fn get_edges(&self, station: StationId) -> impl Iterator<Item = &Edge> {
        match self.edges.get(&station) {
            Some(edges) => edges.iter(),
            None => [].iter(),
        }
    }
}
