pub mod json;

use std::collections::HashMap;

use crate::network::{LineSegment, Station, StationId};

/// Source of the current network data.
pub trait NetworkAdapter {
    type Error;

    /// Returns every known station, keyed by id.
    fn stations(&self) -> Result<HashMap<StationId, Station>, Self::Error>;

    /// Returns all segments of all lines (any order).
    fn segments(&self) -> Result<Vec<LineSegment>, Self::Error>;
}

/// Read-only copy of the network taken at one point in time.
#[derive(Clone, Debug, Default)]
pub struct NetworkSnapshot {
    stations: HashMap<StationId, Station>,
    segments: Vec<LineSegment>,
}

impl NetworkSnapshot {
    pub fn from_adapter<A: NetworkAdapter>(adapter: &A) -> Result<Self, A::Error> {
        let stations = adapter.stations()?;
        let segments = adapter.segments()?;

        Ok(Self { stations, segments })
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}
