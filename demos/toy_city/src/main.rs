//! toy_city — smallest end-to-end demo of the street-map routing engine.
//!
//! Builds a synthetic 3x3 grid in memory (see `network`), loads it into a
//! `RoutingEngine`, then walks through the query families the engine
//! exposes: map/geometry lookups, a single-pair turn-penalized path, and a
//! two-delivery courier tour. Swap `ToyCity` for a real `MapDataset`
//! implementation backed by an OSM extract to run against a real city.

mod network;

use std::time::{Duration, Instant};

use sr_engine::{Delivery, RoutingEngine};

use network::ToyCity;

const TURN_PENALTY_SECS: f64 = 15.0;
const COURIER_DEADLINE: Duration = Duration::from_millis(200);
const COURIER_SEED: u64 = 42;

fn main() {
    env_logger::init();

    println!("=== toy_city — street-map routing engine demo ===");
    println!();

    let city = ToyCity::build();
    let mut engine = RoutingEngine::new();
    engine.load_map(&city).expect("toy dataset always loads");

    // ── Map index queries ─────────────────────────────────────────────
    println!("Street name prefix search:");
    for prefix in ["oak", "Bay", "1st", "nonexistent"] {
        let hits = engine.street_ids_from_partial_name(prefix);
        println!("  {prefix:<12} -> {} hit(s)", hits.len());
    }
    println!();

    // ── Geometry queries ─────────────────────────────────────────────
    let nw = ToyCity::at(0, 0);
    let se = ToyCity::at(2, 2);
    let dist = engine.find_distance(engine.intersection_position(nw), engine.intersection_position(se));
    println!("Straight-line distance NW -> SE corner: {dist:.1} m");

    let park_area = engine.find_feature_area(sr_engine::FeatureId(0));
    println!("Central Park area: {park_area:.0} m^2");
    println!();

    // ── Single-pair router ────────────────────────────────────────────
    println!("Single-pair routing ({nw:?} -> {se:?}, turn penalty {TURN_PENALTY_SECS}s):");
    let t0 = Instant::now();
    let path = engine.find_path_between_intersections(TURN_PENALTY_SECS, nw, se);
    let elapsed = t0.elapsed();
    if path.is_empty() {
        println!("  no path found");
    } else {
        let time = engine.path_travel_time(TURN_PENALTY_SECS, &path);
        println!("  {} segment(s), {time:.1}s driving time (search took {elapsed:?})", path.len());
    }

    // One-way demonstration: (0,1) -> (1,1) is one-way southbound only.
    let top_mid = ToyCity::at(0, 1);
    let mid_mid = ToyCity::at(1, 1);
    let forward = engine.find_path_between_intersections(0.0, top_mid, mid_mid);
    let backward = engine.find_path_between_intersections(0.0, mid_mid, top_mid);
    println!(
        "  one-way check: forward {} segment(s), backward {} segment(s) (expect backward to detour)",
        forward.len(),
        backward.len()
    );
    println!();

    // ── Courier planner ──────────────────────────────────────────────
    println!("Courier planner (2 deliveries, depot at the NW corner, {COURIER_DEADLINE:?} budget):");
    let deliveries = vec![
        Delivery {
            pickup: ToyCity::at(0, 2),
            dropoff: ToyCity::at(2, 0),
        },
        Delivery {
            pickup: ToyCity::at(1, 0),
            dropoff: ToyCity::at(2, 2),
        },
    ];
    let depots = [nw];

    let t0 = Instant::now();
    let subpaths = engine.travelling_courier(TURN_PENALTY_SECS, &deliveries, &depots, COURIER_DEADLINE, COURIER_SEED);
    let elapsed = t0.elapsed();

    if subpaths.is_empty() {
        println!("  no feasible tour");
    } else {
        let total_time: f64 = subpaths
            .iter()
            .map(|leg| engine.path_travel_time(TURN_PENALTY_SECS, &leg.segments))
            .sum();
        println!("  {} leg(s), {total_time:.1}s total driving time (planned in {elapsed:?})", subpaths.len());
        for (i, leg) in subpaths.iter().enumerate() {
            println!("    leg {i}: {:?} -> {:?} ({} segment(s))", leg.start, leg.end, leg.segments.len());
        }
    }

    engine.close_map();
    println!();
    println!("Map closed. Done.");
}
