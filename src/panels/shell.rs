// Tab shell: exactly one panel active at a time. Panels are constructed on
// entry and dropped on exit, so no state crosses a tab switch.

use crate::panels::{bus_map, emergency_panel, privacy_dashboard, route_manager};
use std::io::{stdin, stdout, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Map,
    Routes,
    Privacy,
    Emergency,
}

impl ActiveTab {
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(ActiveTab::Map),
            2 => Some(ActiveTab::Routes),
            3 => Some(ActiveTab::Privacy),
            4 => Some(ActiveTab::Emergency),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::Map => "Live Map",
            ActiveTab::Routes => "Routes",
            ActiveTab::Privacy => "Privacy",
            ActiveTab::Emergency => "Emergency",
        }
    }
}

pub async fn run_shell() {
    loop {
        println!("\nPrivacy-First Transit");
        println!("1. Live Map");
        println!("2. Routes");
        println!("3. Privacy Dashboard");
        println!("4. Emergency");
        println!("5. Exit");
        print!("Enter your choice: ");
        stdout().flush().unwrap();
        let mut input = String::new();
        stdin().read_line(&mut input).unwrap();
        let choice = input.trim().parse::<u32>().unwrap_or(0);
        if choice == 5 {
            println!("Goodbye.");
            break;
        }
        match ActiveTab::from_choice(choice) {
            Some(ActiveTab::Map) => bus_map::run().await,
            Some(ActiveTab::Routes) => route_manager::run(),
            Some(ActiveTab::Privacy) => privacy_dashboard::run(),
            Some(ActiveTab::Emergency) => emergency_panel::run().await,
            None => println!("Invalid choice. Try again."),
        }
    }
}
