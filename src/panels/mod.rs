pub mod bus_map;
pub mod emergency_panel;
pub mod privacy_dashboard;
pub mod route_manager;
pub mod shell;
