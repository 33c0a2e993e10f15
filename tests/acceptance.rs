use subway_paths::{
    adapters::{NetworkSnapshot, json::JsonNetwork},
    fare::RiderCategory,
    network::{Metric, PathError, StationId},
    query::{PathQuery, query},
};

const GYODAE: u64 = 1;
const GANGNAM: u64 = 2;
const YANGJAE: u64 = 3;
const NAMBU_TERMINAL: u64 = 4;
const CITIZENS_FOREST: u64 = 5;
const SEOUL_STATION: u64 = 6;

fn snapshot() -> NetworkSnapshot {
    let document = include_str!("../data/sample_network.json");
    let network = JsonNetwork::from_reader(document.as_bytes()).unwrap();
    NetworkSnapshot::from_adapter(&network).unwrap()
}

fn ids(stations: &[u64]) -> Vec<StationId> {
    stations.iter().copied().map(StationId::new).collect()
}

fn run(
    from: u64,
    to: u64,
    metric: Metric,
    rider: RiderCategory,
) -> Result<(Vec<StationId>, u32, u32, u32), PathError> {
    let request = PathQuery::new(StationId::new(from), StationId::new(to), metric, rider);
    let result = query(&request, snapshot().segments())?;
    Ok((result.stations, result.distance, result.duration, result.fare))
}

#[test]
fn shortest_distance_route_and_fares() {
    for (rider, fare) in [
        (RiderCategory::Child, 450),
        (RiderCategory::Teenager, 720),
        (RiderCategory::Adult, 1250),
    ] {
        let (stations, distance, duration, price) =
            run(GYODAE, YANGJAE, Metric::Distance, rider).unwrap();
        assert_eq!(stations, ids(&[GYODAE, NAMBU_TERMINAL, YANGJAE]));
        assert_eq!(distance, 5);
        assert_eq!(duration, 11);
        assert_eq!(price, fare, "{rider}");
    }
}

#[test]
fn shortest_duration_route_and_fares() {
    for (rider, fare) in [
        (RiderCategory::Child, 550),
        (RiderCategory::Teenager, 880),
        (RiderCategory::Adult, 1450),
    ] {
        let (stations, distance, duration, price) =
            run(GYODAE, YANGJAE, Metric::Duration, rider).unwrap();
        assert_eq!(stations, ids(&[GYODAE, GANGNAM, YANGJAE]));
        assert_eq!(distance, 20);
        assert_eq!(duration, 8);
        assert_eq!(price, fare, "{rider}");
    }
}

#[test]
fn long_routes_use_the_upper_fare_bands() {
    let (stations, distance, _, fare) =
        run(GYODAE, CITIZENS_FOREST, Metric::Distance, RiderCategory::Adult).unwrap();
    assert_eq!(stations, ids(&[GYODAE, NAMBU_TERMINAL, YANGJAE, CITIZENS_FOREST]));
    assert_eq!(distance, 50);
    assert_eq!(fare, 2050);

    let (stations, distance, duration, fare) =
        run(GYODAE, CITIZENS_FOREST, Metric::Duration, RiderCategory::Adult).unwrap();
    assert_eq!(stations, ids(&[GYODAE, GANGNAM, YANGJAE, CITIZENS_FOREST]));
    assert_eq!(distance, 65);
    assert_eq!(duration, 20);
    assert_eq!(fare, 2250);
}

#[test]
fn separate_lines_are_unreachable() {
    assert_eq!(
        run(GYODAE, SEOUL_STATION, Metric::Distance, RiderCategory::Adult),
        Err(PathError::NoPath {
            from: StationId::new(GYODAE),
            to: StationId::new(SEOUL_STATION),
        })
    );
}

#[test]
fn same_station_is_never_routed() {
    for station in [GYODAE, SEOUL_STATION, 99] {
        assert_eq!(
            run(station, station, Metric::Duration, RiderCategory::Adult),
            Err(PathError::SameStation(StationId::new(station)))
        );
    }
}

#[test]
fn riders_are_classified_by_age() {
    let request = |age| {
        PathQuery::new(
            StationId::new(GYODAE),
            StationId::new(YANGJAE),
            Metric::Duration,
            RiderCategory::from_age(age),
        )
    };
    let snapshot = snapshot();
    let fares: Vec<_> = [6, 12, 13, 18, 19, 40]
        .into_iter()
        .map(|age| query(&request(age), snapshot.segments()).unwrap().fare)
        .collect();
    assert_eq!(fares, vec![550, 550, 880, 880, 1450, 1450]);
}
