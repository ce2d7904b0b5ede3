// Routes panel: route cards, name search, stop schedules, and the aggregate
// analytics block. Static mock data; its only state is the search term, which
// dies with the panel.

use crate::simulation_engine::routes::{
    average_reliability, create_routes, create_stop_schedules, search_routes,
    total_assigned_buses, BusRoute,
};
use std::io::{stdin, stdout, Write};

fn print_route(route: &BusRoute) {
    println!("  {} [{}] {}", route.name, route.status.label(), route.color);
    println!(
        "    {} stops | every {}min | {} buses | {} km/h avg",
        route.stops, route.frequency, route.buses, route.avg_speed
    );
    println!("    Reliability: {}%", route.reliability);
}

pub fn run() {
    let routes = create_routes();
    let schedules = create_stop_schedules();

    loop {
        println!("\nRoute Management");
        println!("1. All Routes");
        println!("2. Search Routes");
        println!("3. Stop Schedule");
        println!("4. Analytics");
        println!("5. Back");
        print!("Enter your choice: ");
        stdout().flush().unwrap();
        let mut input = String::new();
        stdin().read_line(&mut input).unwrap();
        let choice = input.trim().parse::<u32>().unwrap_or(0);
        match choice {
            1 => {
                println!("\nAll Routes ({})", routes.len());
                for route in &routes {
                    print_route(route);
                }
            }
            2 => {
                print!("Search routes: ");
                stdout().flush().unwrap();
                let mut term = String::new();
                stdin().read_line(&mut term).unwrap();
                let search_term = term.trim();
                let hits = search_routes(&routes, search_term);
                println!("\n{} route(s) matching \"{}\"", hits.len(), search_term);
                for route in hits {
                    print_route(route);
                }
            }
            3 => {
                println!("\nStop Schedule");
                for stop in &schedules {
                    println!("  {} (stop #{})", stop.name, stop.order);
                    for arrival in &stop.arrivals {
                        println!(
                            "    {} in {}m (confidence {}%)",
                            arrival.route, arrival.eta, arrival.confidence
                        );
                    }
                }
            }
            4 => {
                println!("\nAnalytics");
                println!("  Total Routes: {}", routes.len());
                println!("  Active Buses: {}", total_assigned_buses(&routes));
                println!("  Avg Reliability: {}%", average_reliability(&routes));
                println!("  Privacy Score: A+ (federated learning active)");
            }
            5 => break,
            _ => println!("Invalid choice. Try again."),
        }
    }
}
