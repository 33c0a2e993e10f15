use std::{fmt, str::FromStr};

use anyhow::bail;
use serde::Serialize;

pub mod graph;
pub mod path_finder;
mod path_state;

pub use graph::NetworkGraph;
pub use path_finder::{PathResult, UsedLine, find_path};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize)]
pub struct StationId(u64);

impl StationId {
    pub fn new(idx: u64) -> Self {
        Self(idx)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct LineId(u64);

impl LineId {
    pub fn new(idx: u64) -> Self {
        Self(idx)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One direct connection between two stations on a line.
///
/// Segments are traversable in both directions once they are in a
/// [`NetworkGraph`]; `up`/`down` only record how the line was drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSegment {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub line_id: LineId,
    pub distance: u32,
    pub duration: u32,
    pub line_extra_fare: u32,
}

impl LineSegment {
    pub fn new(
        up_station_id: StationId,
        down_station_id: StationId,
        line_id: LineId,
        distance: u32,
        duration: u32,
    ) -> Self {
        Self {
            up_station_id,
            down_station_id,
            line_id,
            distance,
            duration,
            line_extra_fare: 0,
        }
    }

    pub fn with_extra_fare(self, line_extra_fare: u32) -> Self {
        Self {
            line_extra_fare,
            ..self
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.up_station_id == self.down_station_id
    }

    pub fn weight(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Distance => self.distance,
            Metric::Duration => self.duration,
        }
    }
}

/// The cost dimension a path query optimises for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Metric {
    #[default]
    Distance,
    Duration,
}

impl FromStr for Metric {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        if s.eq_ignore_ascii_case("distance") {
            Ok(Metric::Distance)
        } else if s.eq_ignore_ascii_case("duration") {
            Ok(Metric::Duration)
        } else {
            bail!("unexpected value for path type: {s}")
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Distance => f.write_str("DISTANCE"),
            Metric::Duration => f.write_str("DURATION"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("the network has no line segments")]
    EmptyNetwork,

    #[error("station {0} is not part of the network")]
    UnknownStation(StationId),

    #[error("source and target are the same station ({0})")]
    SameStation(StationId),

    #[error("no route from station {from} to station {to}")]
    NoPath { from: StationId, to: StationId },

    #[error("total distance must be positive, got {0}")]
    InvalidDistance(u32),
}
