use crate::network::{StationId, graph::Edge};
use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
};

#[derive(Clone, Copy, Debug)]
pub struct Predecessor {
    pub station_id: StationId,
    pub edge: Edge,
}

#[derive(Clone, Copy, Debug)]
struct Label {
    weight: u64,
    predecessor: Option<Predecessor>,
}

/// Tentative labels and frontier of a single Dijkstra run.
#[derive(Debug, Default)]
pub struct PathState {
    labels: HashMap<StationId, Label>,
    finalized: HashSet<StationId>,
    frontier: BinaryHeap<Reverse<(u64, StationId)>>,
}

impl PathState {
    pub fn new(source: StationId) -> Self {
        let mut state = Self::default();
        state.labels.insert(
            source,
            Label {
                weight: 0,
                predecessor: None,
            },
        );
        state.frontier.push(Reverse((0, source)));
        state
    }

    /// Pops the cheapest unfinalized station and finalizes it.
    pub fn pop_closest(&mut self) -> Option<(StationId, u64)> {
        while let Some(Reverse((weight, station_id))) = self.frontier.pop() {
            if self.finalized.insert(station_id) {
                return Some((station_id, weight));
            }
        }
        None
    }

    pub fn is_finalized(&self, station_id: StationId) -> bool {
        self.finalized.contains(&station_id)
    }

    pub fn should_relax(&self, station_id: StationId, weight: u64) -> bool {
        if self.is_finalized(station_id) {
            return false;
        }

        self.labels
            .get(&station_id)
            .map(|label| weight < label.weight)
            .unwrap_or(true)
    }

    pub fn relax(&mut self, station_id: StationId, weight: u64, predecessor: Predecessor) {
        self.labels.insert(
            station_id,
            Label {
                weight,
                predecessor: Some(predecessor),
            },
        );
        self.frontier.push(Reverse((weight, station_id)));
    }

    pub fn predecessor(&self, station_id: StationId) -> Option<Predecessor> {
        self.labels
            .get(&station_id)
            .and_then(|label| label.predecessor)
    }
}
