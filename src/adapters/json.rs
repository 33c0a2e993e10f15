use std::{
    collections::HashMap,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::{
    adapters::NetworkAdapter,
    network::{LineId, LineSegment, Station, StationId},
};

#[derive(Deserialize, Clone, Debug)]
pub struct StationRecord {
    pub id: u64,
    pub name: String,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    pub up_station_id: u64,
    pub down_station_id: u64,
    pub distance: u32,
    pub duration: u32,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LineRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub extra_fare: u32,
    #[serde(default)]
    pub sections: Vec<SectionRecord>,
}

/// Network document as stored on disk.
#[derive(Deserialize, Clone, Debug)]
pub struct JsonNetwork {
    pub stations: Vec<StationRecord>,
    pub lines: Vec<LineRecord>,
}

impl JsonNetwork {
    /// Reads and validates a network document. Every section must point at a
    /// declared station and station ids must be unique.
    pub fn from_reader<R: Read>(r: R) -> Result<Self> {
        let network: JsonNetwork =
            serde_json::from_reader(BufReader::new(r)).context("parsing network document")?;
        network.validate()?;
        Ok(network)
    }

    /// Loads a network document from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path).with_context(|| format!("opening {:?}", path.as_ref()))?;
        Self::from_reader(file)
    }

    fn validate(&self) -> Result<()> {
        let mut names = HashMap::new();
        for station in &self.stations {
            if let Some(existing) = names.insert(station.id, &station.name) {
                bail!(
                    "station id {} is used by both {existing:?} and {:?}",
                    station.id,
                    station.name
                );
            }
        }

        for line in &self.lines {
            for section in &line.sections {
                for id in [section.up_station_id, section.down_station_id] {
                    if !names.contains_key(&id) {
                        bail!("line {:?} references unknown station {id}", line.name);
                    }
                }
            }
        }

        Ok(())
    }
}

impl NetworkAdapter for JsonNetwork {
    type Error = anyhow::Error;

    fn stations(&self) -> Result<HashMap<StationId, Station>> {
        Ok(self
            .stations
            .iter()
            .map(|s| {
                let id = StationId::new(s.id);
                (id, Station::new(id, s.name.clone()))
            })
            .collect())
    }

    fn segments(&self) -> Result<Vec<LineSegment>> {
        // every section inherits its line's extra fare
        let segments = self
            .lines
            .iter()
            .flat_map(|line| {
                line.sections.iter().map(move |section| {
                    LineSegment::new(
                        StationId::new(section.up_station_id),
                        StationId::new(section.down_station_id),
                        LineId::new(line.id),
                        section.distance,
                        section.duration,
                    )
                    .with_extra_fare(line.extra_fare)
                })
            })
            .collect();

        Ok(segments)
    }
}
