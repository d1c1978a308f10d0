//! bulgaria — end-to-end demo of the rust_fare itinerary engine.
//!
//! Plans trips over an 8-city sample schedule (24 bus and plane legs)
//! covering the larger Bulgarian cities.  Coordinates are plane metres on
//! the schedule's abstract reference plane, not real geography.

use std::io::Cursor;

use anyhow::Result;

use fare_graph::cost;
use fare_planner::{load_schedule_reader, Itinerary, Planner, PlannerError};

// ── Schedule CSV ──────────────────────────────────────────────────────────────

// Every undirected connection appears as two directed rows; the plane fares
// are deliberately asymmetric on the Sofia legs.
const SCHEDULE_CSV: &str = "\
mode,from,from_x,from_y,to,to_x,to_y,fare\n\
bus,Sofia,0,2000,Blagoevgrad,0,1000,20\n\
bus,Blagoevgrad,0,1000,Sofia,0,2000,20\n\
bus,Sofia,0,2000,Plovdiv,4000,1000,90\n\
bus,Plovdiv,4000,1000,Sofia,0,2000,90\n\
bus,Plovdiv,4000,1000,Kardzhali,3000,0,50\n\
bus,Kardzhali,3000,0,Plovdiv,4000,1000,50\n\
bus,Plovdiv,4000,1000,Burgas,9000,1000,90\n\
bus,Burgas,9000,1000,Plovdiv,4000,1000,90\n\
bus,Burgas,9000,1000,Varna,9000,3000,60\n\
bus,Varna,9000,3000,Burgas,9000,1000,60\n\
bus,Sofia,0,2000,Tarnovo,5000,3000,150\n\
bus,Tarnovo,5000,3000,Sofia,0,2000,150\n\
bus,Plovdiv,4000,1000,Tarnovo,5000,3000,40\n\
bus,Tarnovo,5000,3000,Plovdiv,4000,1000,40\n\
bus,Tarnovo,5000,3000,Ruse,7000,4000,70\n\
bus,Ruse,7000,4000,Tarnovo,5000,3000,70\n\
bus,Varna,9000,3000,Ruse,7000,4000,70\n\
bus,Ruse,7000,4000,Varna,9000,3000,70\n\
plane,Varna,9000,3000,Burgas,9000,1000,200\n\
plane,Burgas,9000,1000,Varna,9000,3000,200\n\
plane,Burgas,9000,1000,Sofia,0,2000,150\n\
plane,Sofia,0,2000,Burgas,9000,1000,250\n\
plane,Varna,9000,3000,Sofia,0,2000,290\n\
plane,Sofia,0,2000,Varna,9000,3000,300\n\
";

// ── Reporting ─────────────────────────────────────────────────────────────────

fn print_itinerary(planner: &Planner, it: &Itinerary) {
    let graph = planner.graph();
    for &leg in &it.legs {
        println!(
            "  {:<5} {:<11} -> {:<11} fare {:>5}  cost {}",
            graph.leg_mode[leg.index()].as_str(),
            graph.place_name[graph.leg_from[leg.index()].index()],
            graph.place_name[graph.leg_to[leg.index()].index()],
            graph.leg_fare[leg.index()],
            cost::leg_cost(graph, leg),
        );
    }
    println!(
        "  total {}  ({} transfer(s))",
        it.total_cost,
        it.transfer_count()
    );
}

fn report(planner: &Planner, from: &str, to: &str, allow_transfer: bool) {
    let label = if allow_transfer { "transfers ok" } else { "direct only" };
    println!("{from} -> {to} ({label}):");
    match planner.plan(from, to, allow_transfer) {
        Ok(it) => print_itinerary(planner, &it),
        Err(e @ PlannerError::NoRouteFound { .. }) => println!("  {e}"),
        Err(e) => println!("  error: {e}"),
    }
    println!();
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let graph = load_schedule_reader(Cursor::new(SCHEDULE_CSV))?;
    println!(
        "schedule: {} places, {} legs\n",
        graph.place_count(),
        graph.leg_count()
    );
    let planner = Planner::new(graph);

    report(&planner, "Varna", "Kardzhali", true);
    report(&planner, "Varna", "Kardzhali", false);
    report(&planner, "Sofia", "Burgas", false);
    report(&planner, "Sofia", "Burgas", true);
    report(&planner, "Blagoevgrad", "Ruse", true);

    Ok(())
}
